use crate::domain::{AppId, BrandingPhase, Route, SimRunId, SimSlot};
use showcase_core::catalog::LogoChoice;
use showcase_core::tour::StepId;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Navigation
    RouteChanged(Route),

    // Walkthrough progression
    StepCompleted { step: StepId },
    GuideJumped { index: usize },

    // Shared-state edits with rules attached
    BrandColorChanged(String),
    BrandingPhaseChanged(BrandingPhase),
    LogoChosen(LogoChoice),
    StarterAppToggled(AppId),
    VersionChosen(String),
    CustomAppCreated,

    // Growth calculator
    RevenueAccepted(f64),

    // Simulated operations
    Simulation { run_id: SimRunId, ev: SimRunEvent },

    // User-visible errors
    UserError(String),
}

#[derive(Debug, Clone)]
pub enum SimRunEvent {
    Started { slot: SimSlot },
    Progress { percent: f32 },
    Completed,
    StageAdvanced { index: usize },
    Settled,
}
