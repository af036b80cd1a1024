pub mod config;
pub mod display;
pub mod errors;
pub mod logging;
pub mod runner;
pub mod sequence;
pub mod types;

pub use runner::run;
