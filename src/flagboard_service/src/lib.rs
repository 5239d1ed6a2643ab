pub mod helpers;
pub mod service;
mod tracing;

pub use service::FlagboardService;
