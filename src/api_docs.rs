use utoipa::OpenApi;
use crate::controllers::{calculator_controller, chat_controller, lead_controller, system_controller};
use crate::models::{calculator, chat, lead, system};

#[derive(OpenApi)]
#[openapi(
    paths(
        system_controller::get_health,
        calculator_controller::get_calculator_options,
        calculator_controller::estimate_savings,
        chat_controller::post_chat_message,
        lead_controller::submit_lead
    ),
    components(
        schemas(
            calculator::EstimateRequest,
            calculator::EstimateResponse,
            calculator::CalculatorCatalog,
            calculator::ValueRange,
            chat::ChatRequest,
            chat::ChatReply,
            lead::LeadSubmission,
            lead::CalculatorLead,
            lead::LeadAccepted,
            system::HealthStatus
        )
    ),
    tags(
        (name = "solar-savings-site", description = "Solar savings calculator, chat and lead capture API")
    )
)]
pub struct ApiDoc;
