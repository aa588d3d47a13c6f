use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("daily usage must be a positive number of kWh, got {0}")]
    InvalidDailyUsage(f64),
    #[error("quarterly bill must be between ${min} and ${max}, got {value}")]
    QuarterlyBillOutOfRange { value: f64, min: f64, max: f64 },
    #[error("unknown system size {0} kW")]
    UnknownSystemSize(f64),
    #[error("unknown battery size {0} kWh")]
    UnknownBatterySize(f64),
}

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("invalid lead: {0}")]
    Invalid(String),
    #[error("lead webhook is not configured")]
    NotConfigured,
    #[error("lead webhook timed out")]
    Timeout,
    #[error("lead webhook request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("lead webhook rejected the submission with status {0}")]
    Rejected(u16),
}

impl From<reqwest::Error> for LeadError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LeadError::Timeout
        } else {
            LeadError::Transport(e)
        }
    }
}

/// Message shown to visitors when a lead could not be delivered.
pub const LEAD_RETRY_MESSAGE: &str =
    "Sorry, we couldn't send your details just now. Please try again in a moment or give us a call.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Calculator(#[from] CalculatorError),
    #[error(transparent)]
    Lead(#[from] LeadError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Calculator(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Lead(LeadError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Lead(LeadError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Lead(LeadError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Lead(LeadError::Transport(_) | LeadError::Rejected(_)) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Upstream webhook details stay in the logs; visitors get a retry prompt.
        let message = match &self {
            ApiError::Lead(LeadError::Invalid(_)) | ApiError::Calculator(_) => self.to_string(),
            ApiError::Lead(LeadError::NotConfigured) => {
                warn!("lead submitted but no webhook is configured");
                LEAD_RETRY_MESSAGE.to_string()
            }
            ApiError::Lead(e) => {
                error!(error = %e, "lead delivery failed");
                LEAD_RETRY_MESSAGE.to_string()
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
