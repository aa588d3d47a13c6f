use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::calculator::{BatterySize, SystemSize, ValueRange};

fn default_source() -> String {
    "website".to_string()
}

/// Contact details posted by any of the site's forms.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Free-text tag naming the form or campaign, e.g. `calculator`.
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub calculator: Option<CalculatorLead>,
}

/// Calculator choices and headline figures attached to calculator leads.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculatorLead {
    #[schema(value_type = f64, example = 6.6)]
    pub system_size: SystemSize,
    #[schema(value_type = Option<f64>, example = 13.5)]
    pub battery_size: Option<BatterySize>,
    pub annual_savings: f64,
    pub payback_years: Option<ValueRange>,
}

/// Body sent to the marketing-automation webhook.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload<'a> {
    pub lead_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub lead: &'a LeadSubmission,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeadAccepted {
    pub lead_id: Uuid,
}
