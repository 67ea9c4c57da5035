pub mod analyzers;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod output;
pub mod parser;
pub mod stats;
pub mod store;
