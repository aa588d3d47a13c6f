use std::sync::{Arc, RwLock};
use std::time::Instant;

use axum::extract::FromRef;

use crate::config::Config;
use crate::error::CalculatorError;
use crate::models::calculator::{CalculatorInputs, CalculatorResults};
use crate::services::lead_service::LeadClient;
use crate::services::solar_calculator;

#[derive(Clone, Debug)]
pub struct AppState {
    pub leads: LeadClient,
    pub started_at: Instant,
    /// Most recent estimate; identical repeat requests skip recomputation.
    last_estimate: Arc<RwLock<Option<(CalculatorInputs, CalculatorResults)>>>,
}

impl AppState {
    pub fn new(leads: LeadClient) -> Self {
        Self {
            leads,
            started_at: Instant::now(),
            last_estimate: Arc::new(RwLock::new(None)),
        }
    }

    pub fn estimate(&self, inputs: &CalculatorInputs) -> Result<CalculatorResults, CalculatorError> {
        if let Ok(last) = self.last_estimate.read() {
            if let Some((cached_inputs, cached_results)) = last.as_ref() {
                if cached_inputs == inputs {
                    return Ok(cached_results.clone());
                }
            }
        }

        let results = solar_calculator::calculate(inputs)?;
        if let Ok(mut last) = self.last_estimate.write() {
            *last = Some((*inputs, results.clone()));
        }
        Ok(results)
    }

    pub fn last_estimate(&self) -> Option<(CalculatorInputs, CalculatorResults)> {
        self.last_estimate.read().ok().and_then(|last| last.clone())
    }
}

/// Router state. Handlers extract `State<AppState>` or `State<Config>`.
#[derive(Clone)]
pub struct SharedState {
    pub app: AppState,
    pub config: Config,
}

impl FromRef<SharedState> for AppState {
    fn from_ref(shared: &SharedState) -> Self {
        shared.app.clone()
    }
}

impl FromRef<SharedState> for Config {
    fn from_ref(shared: &SharedState) -> Self {
        shared.config.clone()
    }
}
