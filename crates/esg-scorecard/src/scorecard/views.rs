use std::fmt::Write as _;

use serde::Serialize;

use super::catalog::{Pillar, QuestionCatalog, QuestionId};
use super::engine::EvaluationResult;
use super::performance::{MetricScore, PerformanceMetric};
use super::thresholds::{Industry, IndustryThresholds};

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub number: usize,
    pub title: &'static str,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PillarView {
    pub pillar: Pillar,
    pub label: &'static str,
    pub question_count: usize,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub question_count: usize,
    pub pillars: Vec<PillarView>,
}

impl CatalogView {
    pub fn from_catalog(catalog: &QuestionCatalog) -> Self {
        let pillars = Pillar::ordered()
            .into_iter()
            .map(|pillar| {
                let questions: Vec<_> = catalog.questions_for(pillar).collect();
                let sections = catalog
                    .sections(pillar)
                    .iter()
                    .enumerate()
                    .map(|(index, section)| SectionView {
                        number: index + 1,
                        title: section.title,
                        questions: questions
                            .iter()
                            .filter(|question| usize::from(question.id.section) == index + 1)
                            .map(|question| QuestionView {
                                id: question.id,
                                text: question.text,
                            })
                            .collect(),
                    })
                    .collect();

                PillarView {
                    pillar,
                    label: pillar.label(),
                    question_count: questions.len(),
                    sections,
                }
            })
            .collect();

        Self {
            question_count: catalog.question_count(),
            pillars,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryView {
    pub industry: Industry,
    pub label: &'static str,
    pub threshold_key: &'static str,
    pub thresholds: IndustryThresholds,
}

impl IndustryView {
    pub fn all() -> Vec<Self> {
        Industry::ordered()
            .into_iter()
            .map(|industry| {
                let resolved = IndustryThresholds::resolve_industry(industry);
                Self {
                    industry,
                    label: industry.label(),
                    threshold_key: resolved.key,
                    thresholds: resolved.thresholds,
                }
            })
            .collect()
    }
}

/// Display row for one performance metric, as a percentage of its maximum.
#[derive(Debug, Clone, Serialize)]
pub struct MetricView {
    pub metric: PerformanceMetric,
    pub label: &'static str,
    pub score: f64,
    pub percent: f64,
}

impl From<&MetricScore> for MetricView {
    fn from(entry: &MetricScore) -> Self {
        Self {
            metric: entry.metric,
            label: entry.metric.label(),
            score: entry.score,
            percent: entry.percent(),
        }
    }
}

/// Plain-text dashboard used by the CLI.
pub fn render_text(company_name: &str, result: &EvaluationResult) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "ESG scorecard for {company_name} ({} industry)",
        result.threshold_key
    )
    .expect("write heading");
    writeln!(
        out,
        "Overall ESG risk: {:.1}% | Grade: {} ({})",
        result.risk_score,
        result.grade,
        result.risk_band.label()
    )
    .expect("write risk banner");
    writeln!(
        out,
        "Performance score: {:.1}% | performance metrics weighted {}x",
        result.score, result.weights.performance
    )
    .expect("write score line");

    out.push_str("\nRisk alerts\n");
    if result.alerts.is_empty() {
        out.push_str("- none triggered\n");
    } else {
        for alert in &result.alerts {
            writeln!(out, "- {}", alert.message).expect("write alert");
        }
    }

    let kpis = &result.kpis;
    out.push_str("\nKey indicators\n");
    writeln!(out, "- Gender diversity: {:.1}%", kpis.gender_diversity_pct)
        .expect("write diversity");
    writeln!(out, "- Gender pay gap: {:.1}%", kpis.pay_gap_pct).expect("write pay gap");
    writeln!(
        out,
        "- Total attrition rate: {:.1}%",
        kpis.total_attrition_rate_pct
    )
    .expect("write attrition");
    writeln!(
        out,
        "- Women in management: {:.1}%",
        kpis.women_in_management_pct
    )
    .expect("write management share");

    out.push_str("\nDisclosure completion\n");
    for tally in &result.disclosure.pillars {
        writeln!(
            out,
            "- {}: {}/{} ({:.1}% yes)",
            tally.pillar.label(),
            tally.yes,
            tally.total,
            tally.percent
        )
        .expect("write pillar tally");
    }
    writeln!(
        out,
        "Disclosure points: {}/{} | Weighted performance points: {}/{}",
        result.totals.disclosure_points,
        result.totals.disclosure_max,
        result.totals.performance_points,
        result.totals.performance_max
    )
    .expect("write totals");

    out.push_str("\nPerformance metrics\n");
    for (index, entry) in result.performance.iter().enumerate() {
        let view = MetricView::from(entry);
        writeln!(out, "{:>2}. {}: {:.1}%", index + 1, view.label, view.percent)
            .expect("write metric row");
    }

    writeln!(
        out,
        "\nHighest priority area for improvement: {}",
        result.weakest_metric.label()
    )
    .expect("write priority metric");
    out
}
