pub mod calculator;
pub mod chat;
pub mod lead;
pub mod system;
