use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::aggregate::{
    rank_metrics, risk_alerts, weighted_totals, Grade, RiskAlert, RiskBand, ScoringWeights,
    WeightedTotals,
};
use super::catalog::{QuestionCatalog, QuestionId};
use super::disclosure::{DisclosureScorer, DisclosureSheet, DisclosureSummary};
use super::performance::{
    CompanyInputs, MetricScore, PerformanceMetric, PerformanceScorer, WorkforceKpis,
};
use super::thresholds::{is_unselected, IndustryThresholds, PerformanceThresholds};
use super::validation::ValidationError;

/// One snapshot of everything the engine needs.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub industry: Option<String>,
    pub answers: DisclosureSheet,
    pub inputs: CompanyInputs,
}

/// Immutable outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub threshold_key: &'static str,
    pub disclosure: DisclosureSummary,
    pub performance: Vec<MetricScore>,
    pub kpis: WorkforceKpis,
    pub weights: ScoringWeights,
    pub totals: WeightedTotals,
    pub score: f64,
    pub risk_score: f64,
    pub grade: Grade,
    pub risk_band: RiskBand,
    pub ranked_metrics: Vec<MetricScore>,
    pub weakest_metric: PerformanceMetric,
    pub alerts: Vec<RiskAlert>,
}

impl EvaluationResult {
    pub fn metric(&self, metric: PerformanceMetric) -> Option<&MetricScore> {
        self.performance.iter().find(|entry| entry.metric == metric)
    }
}

/// Stateless scorer combining the catalog, global thresholds, and weights.
#[derive(Debug)]
pub struct ScorecardEngine {
    catalog: Arc<QuestionCatalog>,
    weights: ScoringWeights,
    thresholds: PerformanceThresholds,
}

impl ScorecardEngine {
    pub fn new(
        catalog: Arc<QuestionCatalog>,
        weights: ScoringWeights,
        thresholds: PerformanceThresholds,
    ) -> Self {
        Self {
            catalog,
            weights,
            thresholds,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            Arc::new(QuestionCatalog::standard()),
            ScoringWeights::default(),
            PerformanceThresholds::standard(),
        )
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            weights,
            ..Self::standard()
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn performance_thresholds(&self) -> &PerformanceThresholds {
        &self.thresholds
    }

    /// Opens a fresh input-collecting draft for one company.
    pub fn draft(&self) -> ScorecardDraft<'_> {
        ScorecardDraft {
            engine: self,
            industry: None,
            answers: DisclosureSheet::new(),
            inputs: None,
        }
    }

    pub fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResult, ValidationError> {
        let outcome = self.evaluate_inner(request);
        match &outcome {
            Ok(result) => debug!(
                industry = result.threshold_key,
                score = result.score,
                grade = result.grade.label(),
                alerts = result.alerts.len(),
                "scorecard evaluated"
            ),
            Err(err) => info!(kind = err.kind(), %err, "scorecard evaluation rejected"),
        }
        outcome
    }

    fn evaluate_inner(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResult, ValidationError> {
        let industry = request
            .industry
            .as_deref()
            .filter(|name| !is_unselected(name))
            .map(str::trim)
            .ok_or(ValidationError::MissingIndustry)?;

        DisclosureScorer::validate(&self.catalog, &request.answers)?;
        request.inputs.validate()?;

        let resolved = IndustryThresholds::resolve(industry);
        let disclosure = DisclosureScorer::score(&self.catalog, &request.answers);
        let performance = PerformanceScorer::new(&resolved.thresholds, &self.thresholds)
            .score(&request.inputs, disclosure.whistleblower_mechanism_disclosed());

        let totals = weighted_totals(
            disclosure.total_yes,
            disclosure.question_count,
            &performance,
            self.weights,
        );
        let grade = Grade::from_score(totals.score);
        let ranked_metrics = rank_metrics(&performance);
        let weakest_metric = ranked_metrics
            .first()
            .map(|entry| entry.metric)
            .unwrap_or(PerformanceMetric::GenderDiversity);
        let alerts = risk_alerts(
            &request.inputs,
            &performance,
            &resolved.thresholds,
            &self.thresholds,
        );

        Ok(EvaluationResult {
            threshold_key: resolved.key,
            disclosure,
            kpis: performance.kpis,
            performance: performance.metrics,
            score: totals.score,
            risk_score: totals.risk_score,
            weights: self.weights,
            totals,
            grade,
            risk_band: grade.risk_band(),
            ranked_metrics,
            weakest_metric,
            alerts,
        })
    }
}

impl Default for ScorecardEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Input state of an evaluation. `submit` consumes the draft, so a result can
/// never be edited back into inputs.
#[derive(Debug)]
pub struct ScorecardDraft<'a> {
    engine: &'a ScorecardEngine,
    industry: Option<String>,
    answers: DisclosureSheet,
    inputs: Option<CompanyInputs>,
}

impl<'a> ScorecardDraft<'a> {
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn answer(&mut self, id: QuestionId, yes: bool) -> Result<&mut Self, ValidationError> {
        self.answers.answer(&self.engine.catalog, id, yes)?;
        Ok(self)
    }

    pub fn answers<I>(mut self, answers: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (QuestionId, bool)>,
    {
        for (id, yes) in answers {
            self.answers.answer(&self.engine.catalog, id, yes)?;
        }
        Ok(self)
    }

    pub fn metrics(mut self, inputs: CompanyInputs) -> Self {
        self.inputs = Some(inputs);
        self
    }

    pub fn answered(&self) -> usize {
        self.answers.answered()
    }

    /// Runs validation and scoring.
    pub fn submit(self) -> Result<EvaluationResult, ValidationError> {
        let inputs = self.inputs.ok_or(ValidationError::MissingMetrics)?;
        self.engine.evaluate(&EvaluationRequest {
            industry: self.industry,
            answers: self.answers,
            inputs,
        })
    }
}
