use crate::domain::{DemoState, SimRunId, SimSlot, SlotProgress};
use showcase_core::roi;

use super::events::{DomainEvent, SimRunEvent};

pub fn reduce(mut state: DemoState, ev: DomainEvent) -> DemoState {
    match ev {
        DomainEvent::RouteChanged(r) => state.route = r,

        // A completion signal only advances the walkthrough when it names the
        // step that is actually showing, so duplicate signals are harmless.
        DomainEvent::StepCompleted { step } => {
            if state.tour.cursor.current() == step {
                state.tour.cursor.advance();
            }
        }

        DomainEvent::GuideJumped { index } => {
            state.tour.cursor.jump_to(index);
        }

        // Stored as provided; the color is display-only and never validated.
        DomainEvent::BrandColorChanged(color) => state.tour.brand_color = color,

        DomainEvent::BrandingPhaseChanged(phase) => state.tour.branding_phase = phase,
        DomainEvent::LogoChosen(choice) => state.tour.logo_choice = Some(choice),

        DomainEvent::StarterAppToggled(id) => {
            if let Some(ix) = state.tour.selected_apps.iter().position(|a| *a == id) {
                state.tour.selected_apps.remove(ix);
            } else {
                state.tour.selected_apps.push(id);
            }
        }

        DomainEvent::VersionChosen(v) => {
            if !state.update.progress.running && !state.update.progress.complete {
                state.update.chosen_version = Some(v);
            }
        }

        DomainEvent::CustomAppCreated => state.tour.custom_app_created = true,

        DomainEvent::RevenueAccepted(base) => {
            state.roi.base_revenue = Some(base);
            state.roi.started = true;
        }

        DomainEvent::Simulation { run_id, ev } => apply_sim_event(&mut state, run_id, ev),

        DomainEvent::UserError(msg) => state.last_error = Some(msg),
    }
    state
}

fn apply_sim_event(state: &mut DemoState, run_id: SimRunId, ev: SimRunEvent) {
    if let SimRunEvent::Started { slot } = ev {
        state.last_error = None;
        state.active_run = Some((run_id, slot.clone()));
        match slot {
            SimSlot::Download(app) => {
                state.downloads.active = Some(app.clone());
                state.downloads.progress.insert(
                    app,
                    SlotProgress {
                        percent: 0.0,
                        running: true,
                        complete: false,
                    },
                );
            }
            SimSlot::VersionUpdate => {
                state.update.progress = SlotProgress {
                    percent: 0.0,
                    running: true,
                    complete: false,
                };
            }
            SimSlot::RoiStages => {
                state.roi.stage_index = 0;
                state.roi.is_animating = true;
            }
        }
        return;
    }

    let Some((active_id, slot)) = state.active_run.clone() else {
        return;
    };
    if active_id != run_id {
        return;
    }

    match (ev, slot) {
        (SimRunEvent::Progress { percent }, SimSlot::Download(app)) => {
            if let Some(p) = state.downloads.progress.get_mut(&app) {
                p.percent = showcase_config::clamp_percent(percent.max(p.percent));
            }
        }

        (SimRunEvent::Progress { percent }, SimSlot::VersionUpdate) => {
            let p = &mut state.update.progress;
            p.percent = showcase_config::clamp_percent(percent.max(p.percent));
        }

        (SimRunEvent::Completed, SimSlot::Download(app)) => {
            if let Some(p) = state.downloads.progress.get_mut(&app) {
                p.percent = 100.0;
                p.running = false;
                p.complete = true;
            }
            state.downloads.active = None;
            state.tour.selected_app = Some(app);
            state.active_run = None;
        }

        (SimRunEvent::Completed, SimSlot::VersionUpdate) => {
            let p = &mut state.update.progress;
            p.percent = 100.0;
            p.running = false;
            p.complete = true;
            state.active_run = None;
        }

        (SimRunEvent::StageAdvanced { index }, SimSlot::RoiStages) => {
            state.roi.stage_index = index.min(roi::STAGE_COUNT - 1);
        }

        (SimRunEvent::Settled, SimSlot::RoiStages) => {
            state.roi.is_animating = false;
            state.active_run = None;
        }

        _ => {}
    }
}
