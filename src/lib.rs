pub mod analyzers;
pub mod config;
pub mod errors;
pub mod output;
pub mod parser;
