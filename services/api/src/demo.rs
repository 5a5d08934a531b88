use crate::infra::{load_metrics, parse_weights, sample_answers, sample_inputs};
use chrono::Utc;
use clap::Args;
use esg_scorecard::config::AppConfig;
use esg_scorecard::error::AppError;
use esg_scorecard::scorecard::views::{render_text, CatalogView, MetricView};
use esg_scorecard::scorecard::{
    DisclosureCsvImporter, EvaluationResponse, EvaluationResult, Pillar, ScorecardEngine,
    ScoringWeights,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Disclosure answers as a `Question,Answer` CSV (e.g. `E.1.1,Yes`)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Company metrics as a JSON document
    #[arg(long)]
    pub(crate) metrics: PathBuf,
    /// Industry used to pick workforce thresholds
    #[arg(long)]
    pub(crate) industry: String,
    /// Company name shown in the report
    #[arg(long, default_value = "Unnamed Company")]
    pub(crate) company: String,
    /// Override the configured weights as DISCLOSURE:PERFORMANCE (e.g. 1:3)
    #[arg(long, value_parser = parse_weights)]
    pub(crate) weights: Option<ScoringWeights>,
    /// Emit the evaluation as JSON instead of the text dashboard
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Emit the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Industry for the sample company
    #[arg(long, default_value = "Manufacturing")]
    pub(crate) industry: String,
    /// Emit the evaluation as JSON instead of the text dashboard
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        answers,
        metrics,
        industry,
        company,
        weights,
        json,
    } = args;

    let weights = match weights {
        Some(weights) => weights,
        None => AppConfig::load()?.scoring.weights,
    };
    let engine = ScorecardEngine::with_weights(weights);

    let sheet = DisclosureCsvImporter::from_path(&answers, engine.catalog())?;
    let inputs = load_metrics(&metrics)?;

    let result = engine
        .draft()
        .industry(industry)
        .answers(sheet.iter())?
        .metrics(inputs)
        .submit()?;

    print_result(&company, result, json)
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let engine = ScorecardEngine::standard();
    let catalog = engine.catalog();

    if args.json {
        let view = CatalogView::from_catalog(catalog);
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("ESG disclosure catalog ({} questions)", catalog.question_count());
    for pillar in Pillar::ordered() {
        println!(
            "\n{} ({} questions)",
            pillar.label(),
            catalog.pillar_question_count(pillar)
        );
        for question in catalog.questions_for(pillar) {
            println!("  {}  {}", question.id, question.text);
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { industry, json } = args;
    let engine = ScorecardEngine::standard();

    if !json {
        println!("ESG scorecard demo");
        println!("Scoring a sample company against the {industry} thresholds\n");
    }

    let result = engine
        .draft()
        .industry(industry)
        .answers(sample_answers(engine.catalog())?.iter())?
        .metrics(sample_inputs())
        .submit()?;

    print_result("Sample Manufacturing Co.", result, json)
}

fn print_result(company: &str, result: EvaluationResult, json: bool) -> Result<(), AppError> {
    if json {
        let response = EvaluationResponse {
            company_name: company.to_string(),
            evaluated_at: Utc::now(),
            metrics: result.performance.iter().map(MetricView::from).collect(),
            result,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_text(company, &result));
    }
    Ok(())
}
