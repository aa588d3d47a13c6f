pub mod chat_responder;
pub mod constants;
pub mod formatting;
pub mod lead_service;
pub mod solar_calculator;
