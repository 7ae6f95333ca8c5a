//! Central configuration constants for demo timings and defaults.

/// Tick period for a simulated app download, in milliseconds.
pub const DOWNLOAD_TICK_MS: u64 = 200;

/// Delay between a finished download and the automatic step advance.
pub const DOWNLOAD_SETTLE_MS: u64 = 500;

/// Tick period for a simulated version update, in milliseconds.
pub const UPDATE_TICK_MS: u64 = 500;

/// Delay between a finished update and the automatic step advance.
pub const UPDATE_SETTLE_MS: u64 = 1000;

/// Tick period for the ROI stage walk, in milliseconds.
pub const ROI_STAGE_TICK_MS: u64 = 500;

/// Delay after the last ROI stage before the animation is marked done.
pub const ROI_SETTLE_MS: u64 = 1000;

/// Upper bound (exclusive) of the random per-tick progress increment.
pub const MAX_PROGRESS_INCREMENT: f32 = 15.0;

/// Default brand color offered before the visitor picks one.
pub const DEFAULT_BRAND_COLOR: &str = "#6366f1";

/// Share of base revenue assumed as one-off implementation cost.
pub const IMPLEMENTATION_COST_RATE: f64 = 0.15;

/// Convenience function to clamp a displayed percentage into range.
pub fn clamp_percent(v: f32) -> f32 {
    v.clamp(0.0, 100.0)
}
