pub mod client;
pub mod dto;

pub use client::{CodePipelineClient, PipelineClient, PipelineClientTrait};
pub use dto::PipelineExecution;
