use esg_scorecard::config::parse_weight;
use esg_scorecard::error::AppError;
use esg_scorecard::scorecard::{
    CompanyInputs, DisclosureSheet, QuestionCatalog, QuestionId, ScoringWeights, ValidationError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses `DISCLOSURE:PERFORMANCE`, e.g. `1:3`.
pub(crate) fn parse_weights(raw: &str) -> Result<ScoringWeights, String> {
    let (disclosure, performance) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected DISCLOSURE:PERFORMANCE weights, found '{raw}'"))?;

    Ok(ScoringWeights {
        disclosure: parse_weight("disclosure weight", disclosure)
            .map_err(|err| err.to_string())?,
        performance: parse_weight("performance weight", performance)
            .map_err(|err| err.to_string())?,
    })
}

pub(crate) fn load_metrics(path: &Path) -> Result<CompanyInputs, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Questions the sample company answers "No"; everything else is "Yes".
const SAMPLE_GAPS: [&str; 6] = ["E.1.3", "E.5.2", "S.2.2", "S.4.1", "G.1.2", "G.6.2"];

pub(crate) fn sample_answers(catalog: &QuestionCatalog) -> Result<DisclosureSheet, AppError> {
    let mut sheet = DisclosureSheet::uniform(catalog, true);
    for raw in SAMPLE_GAPS {
        let id: QuestionId = raw
            .parse()
            .map_err(|_| ValidationError::UnknownQuestion(raw.to_string()))?;
        sheet.answer(catalog, id, false)?;
    }
    Ok(sheet)
}

pub(crate) fn sample_inputs() -> CompanyInputs {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weight_pairs() {
        let weights = parse_weights("2:5").expect("valid weights");
        assert_eq!(weights.disclosure, 2);
        assert_eq!(weights.performance, 5);

        assert!(parse_weights("2").is_err());
        assert!(parse_weights("0:3").is_err());
    }

    #[test]
    fn sample_answers_cover_the_catalog() {
        let catalog = QuestionCatalog::standard();
        let sheet = sample_answers(&catalog).expect("sample ids are in the catalog");

        assert_eq!(sheet.answered(), catalog.question_count());
        let no_count = catalog
            .questions()
            .iter()
            .filter(|question| sheet.get(&question.id) == Some(false))
            .count();
        assert_eq!(no_count, SAMPLE_GAPS.len());
    }
}
