use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::QuestionId;
use super::disclosure::DisclosureSheet;
use super::engine::{EvaluationRequest, EvaluationResult, ScorecardEngine};
use super::performance::CompanyInputs;
use super::validation::ValidationError;
use super::views::{CatalogView, IndustryView, MetricView};

/// JSON body accepted by the evaluate endpoint. A `null` answer means unanswered.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluateRequestBody {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub answers: BTreeMap<String, Option<bool>>,
    pub metrics: CompanyInputs,
}

impl EvaluateRequestBody {
    fn into_request(
        self,
        engine: &ScorecardEngine,
    ) -> Result<EvaluationRequest, ValidationError> {
        let mut sheet = DisclosureSheet::new();
        for (raw_id, answer) in self.answers {
            let id: QuestionId = raw_id
                .parse()
                .map_err(|_| ValidationError::UnknownQuestion(raw_id.clone()))?;
            match answer {
                Some(yes) => sheet.answer(engine.catalog(), id, yes)?,
                None if engine.catalog().contains(&id) => {}
                None => return Err(ValidationError::UnknownQuestion(raw_id)),
            }
        }

        Ok(EvaluationRequest {
            industry: self.industry,
            answers: sheet,
            inputs: self.metrics,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    pub company_name: String,
    pub evaluated_at: DateTime<Utc>,
    pub metrics: Vec<MetricView>,
    pub result: EvaluationResult,
}

/// Router exposing the scorecard catalog, industry table, and evaluation.
pub fn scorecard_router(engine: Arc<ScorecardEngine>) -> Router {
    Router::new()
        .route("/api/v1/esg/evaluate", post(evaluate_handler))
        .route("/api/v1/esg/catalog", get(catalog_handler))
        .route("/api/v1/esg/industries", get(industries_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<ScorecardEngine>>,
    Json(body): Json<EvaluateRequestBody>,
) -> Response {
    let company_name = body
        .company_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "Unnamed Company".to_string());

    let outcome = body
        .into_request(&engine)
        .and_then(|request| engine.evaluate(&request));

    match outcome {
        Ok(result) => {
            let response = EvaluationResponse {
                company_name,
                evaluated_at: Utc::now(),
                metrics: result.performance.iter().map(MetricView::from).collect(),
                result,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
                "kind": error.kind(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn catalog_handler(
    State(engine): State<Arc<ScorecardEngine>>,
) -> Json<CatalogView> {
    Json(CatalogView::from_catalog(engine.catalog()))
}

pub(crate) async fn industries_handler() -> Json<Vec<IndustryView>> {
    Json(IndustryView::all())
}
