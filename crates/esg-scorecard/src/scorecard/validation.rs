/// Input problems that block an evaluation. None of these are system faults.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("an industry must be selected before the scorecard can be calculated")]
    MissingIndustry,
    #[error("please answer all {expected} yes/no questions ({answered} answered)")]
    IncompleteDisclosure { answered: usize, expected: usize },
    #[error("'{0}' is not a question in the disclosure catalog")]
    UnknownQuestion(String),
    #[error("company metrics are required")]
    MissingMetrics,
    #[error("{field} must be a finite value within its allowed range (found {value})")]
    InvalidMetric { field: &'static str, value: f64 },
}

impl ValidationError {
    /// Stable machine-readable name used in API error payloads.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingIndustry => "missing_industry",
            Self::IncompleteDisclosure { .. } => "incomplete_disclosure",
            Self::UnknownQuestion(_) => "unknown_question",
            Self::MissingMetrics => "missing_metrics",
            Self::InvalidMetric { .. } => "invalid_metric",
        }
    }
}
