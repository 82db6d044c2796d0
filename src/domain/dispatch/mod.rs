pub mod dto;
pub mod handler;
pub mod service;

pub use dto::DispatchOutcome;
pub use handler::handle_alarm;
pub use service::Dispatcher;
