// The twelve-step transformation chain and its result records

pub mod orchestrator;
pub mod steps;

pub use orchestrator::RubeGoldbergPipeline;
pub use steps::{FinalVerdict, PipelineRun, StepOutput, StepResult, StepStats};
