use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::app_core::{reduce, DomainEvent, SimRunEvent};
use crate::domain::{BrandingPhase, DemoState, Route, SimRunId, SimSlot};
use crate::orchestrator::SimulationDriver;
use showcase_core::catalog::{self, LogoChoice};
use showcase_core::error::DemoError;
use showcase_core::tour::StepId;

/// Top-level application object owned by the UI. All state changes flow
/// through [`DomainEvent`]s and the reducer; simulated operations run on the
/// driver and report back over the channel, drained once per frame.
pub struct ShowcaseApplication {
    pub state: DemoState,
    driver: SimulationDriver,
    msg_rx: mpsc::Receiver<DomainEvent>,
    msg_tx: mpsc::Sender<DomainEvent>,
}

impl Default for ShowcaseApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowcaseApplication {
    pub fn new() -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(256);
        Self {
            state: DemoState::default(),
            driver: SimulationDriver::new(msg_tx.clone()),
            msg_rx,
            msg_tx,
        }
    }

    /// Sender half of the event channel, for driving the application from
    /// outside the UI loop.
    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.msg_tx.clone()
    }

    pub fn is_simulating(&self) -> bool {
        self.state.is_simulating()
    }

    fn apply(&mut self, ev: DomainEvent) {
        self.state = reduce(std::mem::take(&mut self.state), ev);
    }

    /// Drains pending events from simulation workers. Simulation events from
    /// a run that is no longer the active one are dropped here, so a
    /// superseded worker can never touch current state.
    pub fn handle_sim_events(&mut self) {
        while let Ok(ev) = self.msg_rx.try_recv() {
            if let DomainEvent::Simulation { run_id, ev: sim } = &ev {
                let is_start = matches!(sim, SimRunEvent::Started { .. });
                let is_active = self
                    .state
                    .active_run
                    .as_ref()
                    .is_some_and(|(active, _)| active == run_id);
                if !is_start && !is_active {
                    debug!(%run_id, "Dropping event from stale simulation run");
                    continue;
                }
            }
            self.apply(ev);
        }
    }

    // --- Navigation ---------------------------------------------------

    pub fn navigate(&mut self, route: Route) {
        self.apply(DomainEvent::RouteChanged(route));
    }

    /// Marks the given walkthrough step done. Advances only when the step is
    /// the one currently showing.
    pub fn complete_step(&mut self, step: StepId) {
        self.apply(DomainEvent::StepCompleted { step });
    }

    /// Revisits an already-reached step. Forward jumps are ignored.
    pub fn jump_to_step(&mut self, index: usize) {
        self.apply(DomainEvent::GuideJumped { index });
    }

    /// Surfaces a user-visible message through the normal event path. The
    /// next simulation start clears it.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.apply(DomainEvent::UserError(message.into()));
    }

    // --- Walkthrough actions -------------------------------------------

    pub fn choose_version(&mut self, version: &str) {
        self.apply(DomainEvent::VersionChosen(version.to_string()));
    }

    pub fn choose_logo(&mut self, choice: LogoChoice) {
        self.apply(DomainEvent::LogoChosen(choice));
    }

    pub fn advance_branding(&mut self) {
        self.apply(DomainEvent::BrandingPhaseChanged(BrandingPhase::Color));
    }

    pub fn set_brand_color(&mut self, color: &str) {
        self.apply(DomainEvent::BrandColorChanged(color.to_string()));
    }

    pub fn toggle_starter_app(&mut self, id: &str) {
        self.apply(DomainEvent::StarterAppToggled(id.to_string()));
    }

    /// Records the custom listing and finishes the step. The name is the only
    /// required field.
    pub fn create_custom_app(&mut self) -> Result<(), DemoError> {
        if self.state.tour.custom_app_name.trim().is_empty() {
            return Err(DemoError::MissingPrerequisite("an app name"));
        }
        self.apply(DomainEvent::CustomAppCreated);
        self.complete_step(StepId::CustomApp);
        Ok(())
    }

    // --- Simulated operations ------------------------------------------

    /// Kicks off the fake download for a featured app. Completion selects the
    /// app for the rest of the walkthrough and advances past the download
    /// step.
    pub fn start_download(&mut self, app_id: &str) -> Result<(), DemoError> {
        if catalog::find_app(app_id).is_none() {
            return Err(DemoError::UnknownApp(app_id.to_string()));
        }
        if self.state.downloads.is_installed(app_id) {
            debug!(app_id, "Download requested for already-installed app");
            return Ok(());
        }
        if self.state.is_simulating() {
            return Err(DemoError::OperationInFlight);
        }

        let run_id = SimRunId::new_v4();
        let slot = SimSlot::Download(app_id.to_string());
        // Claim the run before the worker's Started event lands so events
        // arriving in between are attributed correctly.
        self.apply(DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Started { slot: slot.clone() },
        });

        if let Err(e) = self.driver.start_progress(
            run_id,
            slot,
            Duration::from_millis(showcase_config::DOWNLOAD_TICK_MS),
            Duration::from_millis(showcase_config::DOWNLOAD_SETTLE_MS),
            StepId::Download,
        ) {
            error!("Failed to start download simulation: {e:#}");
            self.apply(DomainEvent::UserError(format!("{e:#}")));
        }
        Ok(())
    }

    /// Kicks off the fake version update for the chosen release.
    pub fn start_version_update(&mut self) -> Result<(), DemoError> {
        if self.state.tour.selected_app.is_none() {
            return Err(DemoError::MissingPrerequisite("a downloaded app"));
        }
        if self.state.update.chosen_version.is_none() {
            return Err(DemoError::MissingPrerequisite("a version to update to"));
        }
        if self.state.update.progress.complete {
            debug!("Version update requested after completion");
            return Ok(());
        }
        if self.state.is_simulating() {
            return Err(DemoError::OperationInFlight);
        }

        let run_id = SimRunId::new_v4();
        self.apply(DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Started {
                slot: SimSlot::VersionUpdate,
            },
        });

        if let Err(e) = self.driver.start_progress(
            run_id,
            SimSlot::VersionUpdate,
            Duration::from_millis(showcase_config::UPDATE_TICK_MS),
            Duration::from_millis(showcase_config::UPDATE_SETTLE_MS),
            StepId::Versions,
        ) {
            error!("Failed to start update simulation: {e:#}");
            self.apply(DomainEvent::UserError(format!("{e:#}")));
        }
        Ok(())
    }

    /// Parses the revenue field and starts the staged growth animation.
    pub fn start_roi(&mut self) -> Result<(), DemoError> {
        let base: f64 = self
            .state
            .roi
            .revenue_input
            .trim()
            .replace(',', "")
            .parse()
            .map_err(|_| DemoError::InvalidRevenue)?;
        if !base.is_finite() || base <= 0.0 {
            return Err(DemoError::InvalidRevenue);
        }
        if self.state.is_simulating() {
            return Err(DemoError::OperationInFlight);
        }

        self.apply(DomainEvent::RevenueAccepted(base));

        let run_id = SimRunId::new_v4();
        self.apply(DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Started {
                slot: SimSlot::RoiStages,
            },
        });

        if let Err(e) = self.driver.start_roi_stages(
            run_id,
            Duration::from_millis(showcase_config::ROI_STAGE_TICK_MS),
            Duration::from_millis(showcase_config::ROI_SETTLE_MS),
        ) {
            error!("Failed to start growth simulation: {e:#}");
            self.apply(DomainEvent::UserError(format!("{e:#}")));
        }
        Ok(())
    }
}
