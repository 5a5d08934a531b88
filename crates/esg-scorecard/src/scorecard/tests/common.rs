use axum::response::Response;
use serde_json::Value;

use crate::scorecard::catalog::{Pillar, QuestionCatalog, QuestionId, WHISTLEBLOWER_MECHANISM};
use crate::scorecard::disclosure::DisclosureSheet;
use crate::scorecard::engine::{EvaluationRequest, ScorecardEngine};
use crate::scorecard::performance::{CompanyInputs, PerformanceScorer, PerformanceScores};
use crate::scorecard::thresholds::{IndustryThresholds, PerformanceThresholds};

pub(super) fn engine() -> ScorecardEngine {
    ScorecardEngine::standard()
}

/// Mid-sized manufacturer used throughout the walkthroughs.
pub(super) fn sample_inputs() -> CompanyInputs {
    CompanyInputs {
        male_employees: 500,
        female_employees: 200,
        male_attrition: 50,
        female_attrition: 25,
        avg_male_pay: 1_500_000.0,
        avg_female_pay: 1_300_000.0,
        women_in_management_pct: 25.0,
        employee_turnover_pct: 15.0,
        ghg_emissions_tonnes: 300.0,
        water_consumption_kl: 15_000.0,
        hazardous_waste_tonnes: 15.0,
        renewable_energy_pct: 30.0,
        workplace_injuries: 1,
        csr_utilisation_pct: 105.0,
        whistleblower_resolved: 5,
        regulatory_incidents: 0,
    }
}

/// Every metric lands in its strongest tier under the default thresholds.
pub(super) fn best_inputs() -> CompanyInputs {
    CompanyInputs {
        male_employees: 100,
        female_employees: 100,
        male_attrition: 10,
        female_attrition: 10,
        avg_male_pay: 100_000.0,
        avg_female_pay: 100_000.0,
        women_in_management_pct: 40.0,
        employee_turnover_pct: 5.0,
        ghg_emissions_tonnes: 100.0,
        water_consumption_kl: 5_000.0,
        hazardous_waste_tonnes: 5.0,
        renewable_energy_pct: 80.0,
        workplace_injuries: 0,
        csr_utilisation_pct: 120.0,
        whistleblower_resolved: 3,
        regulatory_incidents: 0,
    }
}

/// Every metric lands in its weakest tier and every alert fires.
pub(super) fn worst_inputs() -> CompanyInputs {
    CompanyInputs {
        male_employees: 900,
        female_employees: 50,
        male_attrition: 10,
        female_attrition: 20,
        avg_male_pay: 100_000.0,
        avg_female_pay: 50_000.0,
        women_in_management_pct: 2.0,
        employee_turnover_pct: 35.0,
        ghg_emissions_tonnes: 900.0,
        water_consumption_kl: 90_000.0,
        hazardous_waste_tonnes: 80.0,
        renewable_energy_pct: 5.0,
        workplace_injuries: 6,
        csr_utilisation_pct: 50.0,
        whistleblower_resolved: 0,
        regulatory_incidents: 5,
    }
}

pub(super) fn request(
    industry: &str,
    answers: DisclosureSheet,
    inputs: CompanyInputs,
) -> EvaluationRequest {
    EvaluationRequest {
        industry: Some(industry.to_string()),
        answers,
        inputs,
    }
}

pub(super) fn all_yes(catalog: &QuestionCatalog) -> DisclosureSheet {
    DisclosureSheet::uniform(catalog, true)
}

pub(super) fn all_no(catalog: &QuestionCatalog) -> DisclosureSheet {
    DisclosureSheet::uniform(catalog, false)
}

/// Answers "Yes" to the first `yes_count` questions of `pillar`, "No" everywhere else.
pub(super) fn sheet_with_pillar_yes(
    catalog: &QuestionCatalog,
    pillar: Pillar,
    yes_count: usize,
) -> DisclosureSheet {
    let chosen: Vec<QuestionId> = catalog
        .questions_for(pillar)
        .take(yes_count)
        .map(|question| question.id)
        .collect();
    let answers = catalog
        .questions()
        .iter()
        .map(|question| (question.id, chosen.contains(&question.id)));
    DisclosureSheet::from_answers(catalog, answers).expect("catalog ids are valid")
}

/// Everything "No" except the whistleblower mechanism question.
pub(super) fn sheet_with_mechanism_only(catalog: &QuestionCatalog) -> DisclosureSheet {
    let answers = catalog
        .questions()
        .iter()
        .map(|question| (question.id, question.id == WHISTLEBLOWER_MECHANISM));
    DisclosureSheet::from_answers(catalog, answers).expect("catalog ids are valid")
}

pub(super) fn score_default(
    inputs: &CompanyInputs,
    mechanism_disclosed: bool,
) -> PerformanceScores {
    let industry = IndustryThresholds::default_record();
    let global = PerformanceThresholds::standard();
    PerformanceScorer::new(&industry, &global).score(inputs, mechanism_disclosed)
}

pub(super) fn answers_json(catalog: &QuestionCatalog, yes: bool) -> Value {
    let answers: serde_json::Map<String, Value> = catalog
        .questions()
        .iter()
        .map(|question| (question.id.to_string(), Value::Bool(yes)))
        .collect();
    Value::Object(answers)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json body")
}
