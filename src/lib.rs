pub mod constants;
pub mod engine;
pub mod error;
pub mod input;
pub mod report;
pub mod types;
