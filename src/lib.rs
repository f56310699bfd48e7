pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod matchers;
pub mod model;
pub mod report;
