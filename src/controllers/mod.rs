pub mod calculator_controller;
pub mod chat_controller;
pub mod lead_controller;
pub mod system_controller;
