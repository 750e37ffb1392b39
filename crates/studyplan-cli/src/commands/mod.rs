pub mod config;
pub mod input;
pub mod plan;
pub mod prompt;
pub mod reply;
