pub mod catalog;
pub mod error;
pub mod progress;
pub mod roi;
pub mod tour;

pub use catalog::{DemoApp, LogoChoice, PresetColor, ReleaseChannel, StarterApp};
pub use error::DemoError;
pub use progress::{IncrementSource, ProgressRun, RandomIncrements};
pub use roi::{bucket_for, stage_table, Projection, Stage, StageBucket};
pub use tour::{StepId, TourCursor};
