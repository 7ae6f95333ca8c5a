use showcase_app_core::app_core::{reduce, DomainEvent, SimRunEvent};
use showcase_app_core::domain::{DemoState, SimSlot};
use showcase_core::tour::StepId;

fn run_to_completion(mut state: DemoState, slot: SimSlot, step: StepId) -> DemoState {
    let run_id = uuid::Uuid::new_v4();
    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Started { slot },
        },
    );
    for percent in [30.0, 75.0, 100.0] {
        state = reduce(
            state,
            DomainEvent::Simulation {
                run_id,
                ev: SimRunEvent::Progress { percent },
            },
        );
    }
    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Completed,
        },
    );
    reduce(state, DomainEvent::StepCompleted { step })
}

#[test]
fn download_completion_selects_app_and_advances() {
    let state = DemoState::default();
    assert_eq!(state.tour.cursor.index(), 0);

    let state = run_to_completion(
        state,
        SimSlot::Download("grafana".into()),
        StepId::Download,
    );

    assert_eq!(state.tour.cursor.index(), 1);
    assert_eq!(state.tour.selected_app.as_deref(), Some("grafana"));
    assert!(state.downloads.is_installed("grafana"));
    assert!(!state.is_simulating());
}

#[test]
fn duplicate_step_completion_signals_are_no_ops() {
    let mut state = DemoState::default();
    state = reduce(
        state,
        DomainEvent::StepCompleted {
            step: StepId::Download,
        },
    );
    assert_eq!(state.tour.cursor.index(), 1);

    // A second completion for the same step arrives late; the walkthrough
    // must not skip ahead.
    state = reduce(
        state,
        DomainEvent::StepCompleted {
            step: StepId::Download,
        },
    );
    assert_eq!(state.tour.cursor.index(), 1);
}

#[test]
fn walkthrough_runs_front_to_back() {
    let mut state = DemoState::default();

    state = run_to_completion(
        state,
        SimSlot::Download("nodered".into()),
        StepId::Download,
    );
    state = reduce(state, DomainEvent::VersionChosen("3.1.0".into()));
    state = run_to_completion(state, SimSlot::VersionUpdate, StepId::Versions);
    assert_eq!(state.tour.cursor.current(), StepId::Store);
    assert!(state.update.progress.complete);

    for step in [
        StepId::Store,
        StepId::Branding,
        StepId::SelectApps,
        StepId::CustomApp,
    ] {
        state = reduce(state, DomainEvent::StepCompleted { step });
    }
    assert_eq!(state.tour.cursor.current(), StepId::Revenue);
    assert!(state.tour.cursor.is_terminal());

    // Terminal step never advances past the end.
    state = reduce(
        state,
        DomainEvent::StepCompleted {
            step: StepId::Revenue,
        },
    );
    assert_eq!(state.tour.cursor.current(), StepId::Revenue);
}

#[test]
fn version_choice_is_locked_while_updating() {
    let mut state = DemoState::default();
    state = reduce(state, DomainEvent::VersionChosen("9.5.2".into()));
    assert_eq!(state.update.chosen_version.as_deref(), Some("9.5.2"));

    let run_id = uuid::Uuid::new_v4();
    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Started {
                slot: SimSlot::VersionUpdate,
            },
        },
    );
    state = reduce(state, DomainEvent::VersionChosen("10.1.0".into()));
    assert_eq!(state.update.chosen_version.as_deref(), Some("9.5.2"));
}

#[test]
fn progress_never_regresses() {
    let run_id = uuid::Uuid::new_v4();
    let mut state = DemoState::default();
    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Started {
                slot: SimSlot::Download("grafana".into()),
            },
        },
    );
    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Progress { percent: 60.0 },
        },
    );
    // An out-of-order lower reading must not pull the bar backwards.
    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Progress { percent: 20.0 },
        },
    );
    let p = state.downloads.progress.get("grafana").copied().unwrap();
    assert_eq!(p.percent, 60.0);
}

#[test]
fn user_errors_surface_and_clear_on_next_run() {
    let mut state = DemoState::default();
    state = reduce(state, DomainEvent::UserError("base revenue required".into()));
    assert_eq!(state.last_error.as_deref(), Some("base revenue required"));

    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id: uuid::Uuid::new_v4(),
            ev: SimRunEvent::Started {
                slot: SimSlot::Download("grafana".into()),
            },
        },
    );
    assert!(state.last_error.is_none());
}

#[test]
fn starter_app_toggle_round_trips() {
    let mut state = DemoState::default();
    state = reduce(state, DomainEvent::StarterAppToggled("app1".into()));
    state = reduce(state, DomainEvent::StarterAppToggled("app2".into()));
    assert_eq!(state.tour.selected_apps, vec!["app1", "app2"]);

    state = reduce(state, DomainEvent::StarterAppToggled("app1".into()));
    assert_eq!(state.tour.selected_apps, vec!["app2"]);
}
