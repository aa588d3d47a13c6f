use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One canned answer and the phrases that trigger it.
/// `{name}` in the template is replaced with the visitor's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub template: &'static str,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[schema(example = "How much does a 6.6kW solar system cost?")]
    pub message: String,
    /// Name captured by the widget; the caller re-sends it every turn.
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatReply {
    pub reply: String,
    /// Matched knowledge-base topic, `None` for the hand-off answer.
    pub topic: Option<String>,
}
