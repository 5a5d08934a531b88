use super::common::*;
use crate::scorecard::aggregate::{AlertKind, Grade, RiskBand, ScoringWeights};
use crate::scorecard::catalog::{Pillar, QuestionId};
use crate::scorecard::disclosure::DisclosureSheet;
use crate::scorecard::engine::{EvaluationRequest, ScorecardEngine};
use crate::scorecard::performance::PerformanceMetric;
use crate::scorecard::thresholds::DEFAULT_THRESHOLD_KEY;
use crate::scorecard::validation::ValidationError;

#[test]
fn perfect_company_scores_one_hundred() {
    let engine = engine();
    let result = engine
        .evaluate(&request("Technology", all_yes(engine.catalog()), best_inputs()))
        .expect("valid request");

    assert_eq!(result.score, 100.0);
    assert_eq!(result.risk_score, 0.0);
    assert_eq!(result.grade, Grade::APlus);
    assert_eq!(result.risk_band, RiskBand::Low);
    assert!(result.alerts.is_empty());
    assert_eq!(result.threshold_key, "Technology");
}

#[test]
fn failing_company_scores_zero_and_raises_every_alert() {
    let engine = engine();
    let result = engine
        .evaluate(&request("Manufacturing", all_no(engine.catalog()), worst_inputs()))
        .expect("valid request");

    assert_eq!(result.score, 0.0);
    assert_eq!(result.risk_score, 100.0);
    assert_eq!(result.grade, Grade::C);
    assert_eq!(result.risk_band, RiskBand::High);

    let kinds: Vec<AlertKind> = result.alerts.iter().map(|alert| alert.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AlertKind::GenderPayInequity,
            AlertKind::RegulatoryCompliance,
            AlertKind::CarbonEmissions,
            AlertKind::ClimateTransition,
            AlertKind::OperationalSafety,
        ]
    );
    assert!(result.alerts[0].message.starts_with("High Gender Pay Inequity risk"));
    assert!(result.alerts[1].message.contains("5 non-compliance incident(s)"));
}

#[test]
fn sample_company_combines_disclosure_and_performance_points() {
    let engine = engine();
    let result = engine
        .evaluate(&request("Manufacturing", all_yes(engine.catalog()), sample_inputs()))
        .expect("valid request");

    assert_eq!(result.totals.disclosure_points, 35.0);
    assert_eq!(result.totals.disclosure_max, 35.0);
    assert_eq!(result.totals.performance_points, 24.0);
    assert_eq!(result.totals.performance_max, 36.0);
    assert!((result.score - 59.0 / 71.0 * 100.0).abs() < 1e-9);
    assert_eq!(result.grade, Grade::A);
    assert!(result.alerts.is_empty());
    assert_eq!(
        result.metric(PerformanceMetric::GenderDiversity).map(|m| m.score),
        Some(1.0)
    );
    assert_eq!(result.weakest_metric, PerformanceMetric::PayEquity);
}

#[test]
fn risk_score_complements_score() {
    let engine = engine();
    let sheets = [
        all_yes(engine.catalog()),
        all_no(engine.catalog()),
        sheet_with_pillar_yes(engine.catalog(), Pillar::Social, 7),
    ];
    let inputs = [best_inputs(), worst_inputs(), sample_inputs()];

    for sheet in &sheets {
        for metrics in &inputs {
            let result = engine
                .evaluate(&request("Retail", sheet.clone(), metrics.clone()))
                .expect("valid request");
            assert!((0.0..=100.0).contains(&result.score));
            assert_eq!(result.score + result.risk_score, 100.0);
            assert_eq!(result.risk_band, result.grade.risk_band());
        }
    }
}

#[test]
fn unknown_industries_score_against_default_thresholds() {
    let engine = engine();
    for name in ["Aerospace", "Other"] {
        let result = engine
            .evaluate(&request(name, all_yes(engine.catalog()), sample_inputs()))
            .expect("unknown industries still evaluate");
        assert_eq!(result.threshold_key, DEFAULT_THRESHOLD_KEY);
    }
}

#[test]
fn pay_gap_alert_uses_industry_threshold() {
    let engine = engine();
    let mut inputs = best_inputs();
    inputs.avg_female_pay = 80_000.0;

    let healthcare = engine
        .evaluate(&request("Healthcare", all_yes(engine.catalog()), inputs.clone()))
        .expect("valid request");
    let fallback = engine
        .evaluate(&request("Aerospace", all_yes(engine.catalog()), inputs))
        .expect("valid request");

    assert_eq!(healthcare.alerts.len(), 1);
    assert_eq!(healthcare.alerts[0].kind, AlertKind::GenderPayInequity);
    assert!(fallback.alerts.is_empty());
}

#[test]
fn weakest_metric_prefers_definition_order_on_ties() {
    let engine = engine();
    let result = engine
        .evaluate(&request("Technology", all_yes(engine.catalog()), best_inputs()))
        .expect("valid request");

    assert_eq!(result.weakest_metric, PerformanceMetric::GenderDiversity);
    let ranked: Vec<PerformanceMetric> =
        result.ranked_metrics.iter().map(|entry| entry.metric).collect();
    assert_eq!(ranked, PerformanceMetric::ordered().to_vec());
}

#[test]
fn weakest_metric_is_lowest_scoring() {
    let engine = engine();
    let mut inputs = best_inputs();
    inputs.workplace_injuries = 4;
    inputs.hazardous_waste_tonnes = 30.0;

    let result = engine
        .evaluate(&request("Technology", all_yes(engine.catalog()), inputs))
        .expect("valid request");

    assert_eq!(result.weakest_metric, PerformanceMetric::WorkplaceInjury);
    assert_eq!(
        result.ranked_metrics[1].metric,
        PerformanceMetric::HazardousWaste
    );
}

#[test]
fn weakest_metric_tie_at_the_minimum_reports_the_earlier_metric() {
    let engine = engine();
    let mut inputs = best_inputs();
    inputs.workplace_injuries = 5;
    inputs.hazardous_waste_tonnes = 80.0;

    let result = engine
        .evaluate(&request("Technology", all_yes(engine.catalog()), inputs))
        .expect("valid request");

    assert_eq!(result.weakest_metric, PerformanceMetric::HazardousWaste);
    let tied: Vec<PerformanceMetric> = result
        .ranked_metrics
        .iter()
        .take(2)
        .map(|entry| entry.metric)
        .collect();
    assert_eq!(
        tied,
        vec![
            PerformanceMetric::HazardousWaste,
            PerformanceMetric::WorkplaceInjury
        ]
    );
    assert_eq!(result.ranked_metrics[2].metric, PerformanceMetric::GenderDiversity);
}

#[test]
fn which_questions_are_answered_yes_within_a_pillar_does_not_matter() {
    let engine = engine();
    let catalog = engine.catalog();
    let first_five = sheet_with_pillar_yes(catalog, Pillar::Environmental, 5);
    let environmental: Vec<QuestionId> = catalog
        .questions_for(Pillar::Environmental)
        .map(|question| question.id)
        .collect();
    let last_five: Vec<QuestionId> = environmental.iter().rev().take(5).copied().collect();
    let reordered = DisclosureSheet::from_answers(
        catalog,
        catalog
            .questions()
            .iter()
            .map(|question| (question.id, last_five.contains(&question.id))),
    )
    .expect("catalog ids are valid");

    let a = engine
        .evaluate(&request("Retail", first_five, sample_inputs()))
        .expect("valid request");
    let b = engine
        .evaluate(&request("Retail", reordered, sample_inputs()))
        .expect("valid request");

    assert_eq!(a.score, b.score);
    assert_eq!(a.disclosure.pillars, b.disclosure.pillars);
}

#[test]
fn whistleblower_mechanism_answer_feeds_performance() {
    let engine = engine();
    let result = engine
        .evaluate(&request(
            "Technology",
            sheet_with_mechanism_only(engine.catalog()),
            best_inputs(),
        ))
        .expect("valid request");

    assert_eq!(result.disclosure.total_yes, 1);
    assert!(result.disclosure.whistleblower_mechanism_disclosed());
    let whistleblower = result
        .metric(PerformanceMetric::Whistleblower)
        .expect("scored");
    assert_eq!(whistleblower.score, 1.0);

    let silent = engine
        .evaluate(&request("Technology", all_no(engine.catalog()), best_inputs()))
        .expect("valid request");
    assert_eq!(
        silent.metric(PerformanceMetric::Whistleblower).map(|m| m.score),
        Some(0.0)
    );
}

#[test]
fn custom_weights_change_the_blend() {
    let engine = ScorecardEngine::with_weights(ScoringWeights {
        disclosure: 2,
        performance: 1,
    });
    let result = engine
        .evaluate(&request("Manufacturing", all_yes(engine.catalog()), sample_inputs()))
        .expect("valid request");

    assert_eq!(result.totals.disclosure_max, 70.0);
    assert_eq!(result.totals.performance_max, 12.0);
    assert_eq!(result.totals.performance_points, 8.0);
    assert!((result.score - 78.0 / 82.0 * 100.0).abs() < 1e-9);
    assert_eq!(result.weights.disclosure, 2);
}

#[test]
fn evaluation_is_repeatable() {
    let engine = engine();
    let request = request("Construction", all_yes(engine.catalog()), sample_inputs());

    let first = engine.evaluate(&request).expect("valid request");
    let second = engine.evaluate(&request).expect("valid request");

    assert_eq!(first, second);
}

#[test]
fn validation_reports_missing_industry_first() {
    let engine = engine();
    let mut inputs = sample_inputs();
    inputs.renewable_energy_pct = 140.0;

    let blank = EvaluationRequest {
        industry: Some("   ".to_string()),
        answers: DisclosureSheet::new(),
        inputs,
    };
    assert_eq!(
        engine.evaluate(&blank).unwrap_err(),
        ValidationError::MissingIndustry
    );

    let placeholder = EvaluationRequest {
        industry: Some("Select Industry...".to_string()),
        ..blank
    };
    assert_eq!(
        engine.evaluate(&placeholder).unwrap_err(),
        ValidationError::MissingIndustry
    );

    let missing = EvaluationRequest {
        industry: None,
        ..placeholder
    };
    assert_eq!(
        engine.evaluate(&missing).unwrap_err(),
        ValidationError::MissingIndustry
    );
}

#[test]
fn validation_reports_incomplete_disclosure_before_bad_metrics() {
    let engine = engine();
    let mut inputs = sample_inputs();
    inputs.renewable_energy_pct = 140.0;
    let partial = sheet_with_pillar_yes(engine.catalog(), Pillar::Governance, 2);
    let mut incomplete = DisclosureSheet::new();
    for question in engine.catalog().questions().iter().skip(1) {
        incomplete
            .answer(
                engine.catalog(),
                question.id,
                partial.get(&question.id).unwrap_or(false),
            )
            .expect("catalog id");
    }

    let err = engine
        .evaluate(&request("Retail", incomplete, inputs.clone()))
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::IncompleteDisclosure {
            answered: 34,
            expected: 35
        }
    );

    let err = engine
        .evaluate(&request("Retail", partial, inputs))
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidMetric {
            field: "renewable_energy_pct",
            value: 140.0
        }
    );
}

#[test]
fn negative_amounts_are_rejected() {
    let engine = engine();
    let mut inputs = sample_inputs();
    inputs.ghg_emissions_tonnes = -1.0;

    let err = engine
        .evaluate(&request("Retail", all_yes(engine.catalog()), inputs))
        .unwrap_err();

    assert_eq!(err.kind(), "invalid_metric");
}

#[test]
fn draft_collects_inputs_then_submits_once() {
    let engine = engine();
    let ids: Vec<QuestionId> = engine
        .catalog()
        .questions()
        .iter()
        .map(|question| question.id)
        .collect();

    let mut draft = engine.draft().industry("Financial Services");
    for id in &ids {
        draft.answer(*id, false).expect("catalog id");
    }
    draft
        .answer(QuestionId::new(Pillar::Social, 1, 1), true)
        .expect("catalog id");
    assert_eq!(draft.answered(), ids.len());

    let result = draft.metrics(sample_inputs()).submit().expect("complete draft");
    assert_eq!(result.disclosure.total_yes, 1);
    assert_eq!(result.threshold_key, "Financial Services");
}

#[test]
fn draft_without_metrics_is_rejected() {
    let engine = engine();
    let ids = engine
        .catalog()
        .questions()
        .iter()
        .map(|question| (question.id, true))
        .collect::<Vec<_>>();

    let err = engine
        .draft()
        .industry("Retail")
        .answers(ids)
        .expect("catalog ids")
        .submit()
        .unwrap_err();

    assert_eq!(err, ValidationError::MissingMetrics);
}

#[test]
fn draft_rejects_questions_outside_the_catalog() {
    let engine = engine();
    let mut draft = engine.draft();

    let err = draft
        .answer(QuestionId::new(Pillar::Governance, 9, 9), true)
        .unwrap_err();

    assert_eq!(err, ValidationError::UnknownQuestion("G.9.9".to_string()));
    assert_eq!(draft.answered(), 0);
}

#[test]
fn text_dashboard_lists_alerts_and_priority_metric() {
    let engine = engine();
    let result = engine
        .evaluate(&request("Manufacturing", all_no(engine.catalog()), worst_inputs()))
        .expect("valid request");

    let text = crate::scorecard::views::render_text("Acme", &result);

    assert!(text.starts_with("ESG scorecard for Acme (Manufacturing industry)"));
    assert!(text.contains("Overall ESG risk: 100.0% | Grade: C (High Risk)"));
    assert!(text.contains("- Severe Carbon Emissions risk (GHG exceeds 500 tonnes CO2e)"));
    assert!(text.contains("- Environmental: 0/11 (0.0% yes)"));
    assert!(text.contains("12. Whistleblower: 0.0%"));
    assert!(text.ends_with("Highest priority area for improvement: Gender Diversity\n"));
}
