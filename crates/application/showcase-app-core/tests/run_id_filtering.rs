use showcase_app_core::app_core::{DomainEvent, SimRunEvent};
use showcase_app_core::domain::{SimRunId, SimSlot};
use showcase_app_core::ShowcaseApplication;

#[tokio::test]
async fn stale_simulation_events_are_dropped() {
    let mut app = ShowcaseApplication::new();

    let current: SimRunId = uuid::Uuid::new_v4();
    let stale: SimRunId = uuid::Uuid::new_v4();

    let sender = app.sender();
    sender
        .send(DomainEvent::Simulation {
            run_id: current,
            ev: SimRunEvent::Started {
                slot: SimSlot::Download("grafana".into()),
            },
        })
        .await
        .unwrap();
    sender
        .send(DomainEvent::Simulation {
            run_id: current,
            ev: SimRunEvent::Progress { percent: 40.0 },
        })
        .await
        .unwrap();
    app.handle_sim_events();

    let before = app.state.downloads.progress.get("grafana").copied();
    assert_eq!(before.map(|p| p.percent), Some(40.0));

    // A worker from a superseded run reports progress and completion; neither
    // may touch current state.
    sender
        .send(DomainEvent::Simulation {
            run_id: stale,
            ev: SimRunEvent::Progress { percent: 99.0 },
        })
        .await
        .unwrap();
    sender
        .send(DomainEvent::Simulation {
            run_id: stale,
            ev: SimRunEvent::Completed,
        })
        .await
        .unwrap();
    app.handle_sim_events();

    let after = app.state.downloads.progress.get("grafana").copied();
    assert_eq!(before, after);
    assert!(app.state.tour.selected_app.is_none());
    assert!(app.state.is_simulating());
}

#[tokio::test]
async fn completion_from_the_active_run_lands() {
    let mut app = ShowcaseApplication::new();
    let run_id: SimRunId = uuid::Uuid::new_v4();

    let sender = app.sender();
    sender
        .send(DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Started {
                slot: SimSlot::Download("nodered".into()),
            },
        })
        .await
        .unwrap();
    sender
        .send(DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Completed,
        })
        .await
        .unwrap();
    app.handle_sim_events();

    assert!(app.state.downloads.is_installed("nodered"));
    assert_eq!(app.state.tour.selected_app.as_deref(), Some("nodered"));
    assert!(!app.state.is_simulating());
}
