pub mod config;
pub mod constants;
pub mod difficulty;
pub mod logging;
pub mod replay;
