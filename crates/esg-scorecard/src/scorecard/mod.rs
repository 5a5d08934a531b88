//! ESG scorecard engine.
//!
//! Yes/no disclosure answers and twelve quantitative performance metrics are
//! scored independently, then combined under [`ScoringWeights`] into a single
//! percentage, a risk score, and a letter grade. Evaluation is a pure function
//! of one [`EvaluationRequest`]; nothing is stored between calls.

pub mod aggregate;
pub mod catalog;
pub mod disclosure;
pub mod engine;
pub mod import;
pub mod performance;
pub mod router;
pub mod thresholds;
mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use aggregate::{AlertKind, Grade, RiskAlert, RiskBand, ScoringWeights, WeightedTotals};
pub use catalog::{Pillar, Question, QuestionCatalog, QuestionId, WHISTLEBLOWER_MECHANISM};
pub use disclosure::{DisclosureScorer, DisclosureSheet, DisclosureSummary, PillarTally};
pub use engine::{EvaluationRequest, EvaluationResult, ScorecardDraft, ScorecardEngine};
pub use import::{DisclosureCsvImporter, DisclosureImportError};
pub use performance::{
    CompanyInputs, MetricScore, PerformanceMetric, PerformanceScorer, PerformanceScores, Tier,
    WorkforceKpis,
};
pub use router::{scorecard_router, EvaluateRequestBody, EvaluationResponse};
pub use thresholds::{Industry, IndustryThresholds, PerformanceThresholds, ResolvedThresholds};
pub use validation::ValidationError;
