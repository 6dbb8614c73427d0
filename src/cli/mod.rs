pub mod answers;
pub mod args;
pub mod processor;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, Args};
pub use processor::GenerationReport;
pub use runner::{generate, run};
