use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::WebhookConfig;
use crate::error::LeadError;
use crate::models::lead::{LeadSubmission, WebhookPayload};

const MIN_PHONE_DIGITS: usize = 8;

pub fn validate(lead: &LeadSubmission) -> Result<(), LeadError> {
    if lead.name.trim().is_empty() {
        return Err(LeadError::Invalid("name is required".into()));
    }
    let email = lead.email.trim();
    let valid_email = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid_email {
        return Err(LeadError::Invalid(format!("'{email}' is not a valid email address")));
    }
    let digits = lead.phone.chars().filter(char::is_ascii_digit).count();
    let allowed = lead
        .phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '(' | ')' | '-'));
    if digits < MIN_PHONE_DIGITS || !allowed {
        return Err(LeadError::Invalid(format!("'{}' is not a valid phone number", lead.phone)));
    }
    Ok(())
}

/// Best-effort forwarder for captured leads: one attempt, bounded by a
/// client-side timeout, no retry.
#[derive(Clone, Debug)]
pub struct LeadClient {
    http: reqwest::Client,
    url: Option<String>,
}

impl LeadClient {
    pub fn new(cfg: &WebhookConfig) -> Result<Self, LeadError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()?;
        let url = cfg.endpoint().map(String::from);
        Ok(Self { http, url })
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    pub async fn submit(&self, lead: &LeadSubmission) -> Result<Uuid, LeadError> {
        validate(lead)?;
        let url = self.url.as_deref().ok_or(LeadError::NotConfigured)?;

        let payload = WebhookPayload {
            lead_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            lead,
        };
        debug!(lead_id = %payload.lead_id, source = %lead.source, "forwarding lead");

        let response = self.http.post(url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LeadError::Rejected(status.as_u16()));
        }

        info!(lead_id = %payload.lead_id, source = %lead.source, "lead delivered");
        Ok(payload.lead_id)
    }
}
