pub mod app;
pub mod model;
pub mod storage;
pub mod surface;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::PageController;
pub use model::{ConfigError, Feedback, PageConfig, ProgressState};
