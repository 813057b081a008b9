pub mod config;
mod run;
mod types;

pub use run::run_pipeline;
pub use types::{EdgeStats, PipelineOutput, PipelineStage};
