pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod log;
pub mod parse;
pub mod prompt;
pub mod provider;
pub mod ux;
pub mod wire;

pub use config::Config;
pub use errors::NamerError;
pub use generator::Generator;
pub use parse::parse_records;
pub use wire::{Category, GenerationRequest, NameRecord};
