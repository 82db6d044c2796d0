pub mod config;
pub mod domain;
pub mod event;
pub mod utils;

pub use domain::dispatch::{handle_alarm, DispatchOutcome, Dispatcher};
pub use domain::pipeline::{
    CodePipelineClient, PipelineClient, PipelineClientTrait, PipelineExecution,
};
pub use event::{AlarmNotification, AlarmState};
pub use utils::AppError;
