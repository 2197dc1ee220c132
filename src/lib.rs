// Library exports for cur2xtheme

pub mod config;
pub mod console;
pub mod event;
pub mod model;
pub mod pipeline;
pub mod pipeline_worker;

pub use config::Config;
pub use event::{RunMsg, ThemeSummary};
pub use pipeline_worker::PipelineWorker;
