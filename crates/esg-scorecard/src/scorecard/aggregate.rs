use serde::{Deserialize, Serialize};
use std::fmt;

use super::performance::{CompanyInputs, MetricScore, PerformanceScores};
use super::thresholds::{IndustryThresholds, PerformanceThresholds};

/// Points per "Yes" disclosure and the multiplier applied to every performance sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub disclosure: u32,
    pub performance: u32,
}

impl ScoringWeights {
    pub const DEFAULT_DISCLOSURE: u32 = 1;
    pub const DEFAULT_PERFORMANCE: u32 = 3;
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            disclosure: Self::DEFAULT_DISCLOSURE,
            performance: Self::DEFAULT_PERFORMANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl Grade {
    /// Each band is closed at its lower bound: 90.0 is A+, 89.9 is A.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::APlus
        } else if score >= 80.0 {
            Self::A
        } else if score >= 70.0 {
            Self::BPlus
        } else if score >= 60.0 {
            Self::B
        } else if score >= 50.0 {
            Self::CPlus
        } else {
            Self::C
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
        }
    }

    pub const fn risk_band(self) -> RiskBand {
        match self {
            Self::APlus | Self::A => RiskBand::Low,
            Self::BPlus | Self::B => RiskBand::Medium,
            Self::CPlus | Self::C => RiskBand::High,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    GenderPayInequity,
    RegulatoryCompliance,
    CarbonEmissions,
    ClimateTransition,
    OperationalSafety,
}

impl AlertKind {
    pub const fn severity_label(self) -> &'static str {
        match self {
            Self::ClimateTransition => "Moderate",
            Self::CarbonEmissions => "Severe",
            Self::RegulatoryCompliance => "Significant",
            Self::GenderPayInequity | Self::OperationalSafety => "High",
        }
    }

    pub const fn topic(self) -> &'static str {
        match self {
            Self::GenderPayInequity => "Gender Pay Inequity",
            Self::RegulatoryCompliance => "Compliance",
            Self::CarbonEmissions => "Carbon Emissions",
            Self::ClimateTransition => "Climate Transition",
            Self::OperationalSafety => "Operational Safety",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAlert {
    pub kind: AlertKind,
    pub severity: &'static str,
    pub message: String,
}

impl RiskAlert {
    fn new(kind: AlertKind, detail: String) -> Self {
        Self {
            kind,
            severity: kind.severity_label(),
            message: format!("{} {} risk ({detail})", kind.severity_label(), kind.topic()),
        }
    }
}

/// Weighted totals and the derived score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedTotals {
    pub disclosure_points: f64,
    pub disclosure_max: f64,
    pub performance_points: f64,
    pub performance_max: f64,
    pub score: f64,
    pub risk_score: f64,
}

pub(crate) fn weighted_totals(
    disclosure_yes: u32,
    question_count: u32,
    performance: &PerformanceScores,
    weights: ScoringWeights,
) -> WeightedTotals {
    let disclosure_weight = f64::from(weights.disclosure);
    let performance_weight = f64::from(weights.performance);

    let performance_points: f64 = performance
        .metrics
        .iter()
        .map(|entry| entry.score * performance_weight)
        .sum();
    let performance_max = performance.metrics.len() as f64 * performance_weight;
    let disclosure_points = f64::from(disclosure_yes) * disclosure_weight;
    let disclosure_max = f64::from(question_count) * disclosure_weight;

    let weighted_max = disclosure_max + performance_max;
    let score = if weighted_max > 0.0 {
        ((disclosure_points + performance_points) / weighted_max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    WeightedTotals {
        disclosure_points,
        disclosure_max,
        performance_points,
        performance_max,
        score,
        risk_score: 100.0 - score,
    }
}

/// Metrics sorted weakest first; ties keep definition order.
pub(crate) fn rank_metrics(performance: &PerformanceScores) -> Vec<MetricScore> {
    let mut ranked = performance.metrics.clone();
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}

pub(crate) fn risk_alerts(
    inputs: &CompanyInputs,
    performance: &PerformanceScores,
    industry: &IndustryThresholds,
    global: &PerformanceThresholds,
) -> Vec<RiskAlert> {
    let mut alerts = Vec::new();

    if performance.pay_gap > industry.pay_gap_medium {
        alerts.push(RiskAlert::new(
            AlertKind::GenderPayInequity,
            format!(
                "pay gap {:.1}% exceeds medium industry threshold {:.1}%",
                performance.pay_gap * 100.0,
                industry.pay_gap_medium * 100.0
            ),
        ));
    }
    if inputs.regulatory_incidents > 0 {
        alerts.push(RiskAlert::new(
            AlertKind::RegulatoryCompliance,
            format!(
                "{} non-compliance incident(s) recorded in the last 3 years",
                inputs.regulatory_incidents
            ),
        ));
    }
    if inputs.ghg_emissions_tonnes > global.ghg_high {
        alerts.push(RiskAlert::new(
            AlertKind::CarbonEmissions,
            format!("GHG exceeds {:.0} tonnes CO2e", global.ghg_high),
        ));
    }
    if performance.renewable_ratio < global.renew_medium {
        alerts.push(RiskAlert::new(
            AlertKind::ClimateTransition,
            "low adoption of renewable energy sources".to_string(),
        ));
    }
    if inputs.workplace_injuries > 2 {
        alerts.push(RiskAlert::new(
            AlertKind::OperationalSafety,
            format!(
                "{} workplace injuries recorded",
                inputs.workplace_injuries
            ),
        ));
    }

    alerts
}
