pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod orchestrator;
pub mod viewmodel;

pub use app::ShowcaseApplication;
pub use app_core::*;
pub use domain::{
    AppId, BrandingPhase, DemoState, DownloadState, RoiState, Route, SimRunId, SimSlot,
    SlotProgress, TourState, UpdateState,
};
pub use viewmodel::*;
