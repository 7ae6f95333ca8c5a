use showcase_app_core::app_core::{reduce, DomainEvent, SimRunEvent};
use showcase_app_core::domain::{DemoState, SimSlot};
use showcase_app_core::ShowcaseApplication;
use showcase_core::error::DemoError;
use showcase_core::roi::STAGE_COUNT;

#[test]
fn rejects_unparseable_and_non_positive_revenue() {
    for input in ["", "abc", "-500", "0"] {
        let mut app = ShowcaseApplication::new();
        app.state.roi.revenue_input = input.to_string();
        assert_eq!(app.start_roi(), Err(DemoError::InvalidRevenue), "{input:?}");
        assert!(!app.state.roi.is_animating);
        assert!(!app.state.roi.started);
    }
}

#[test]
fn accepts_revenue_with_thousands_separators() {
    let mut app = ShowcaseApplication::new();
    app.state.roi.revenue_input = "10,000".to_string();
    app.start_roi().unwrap();
    assert_eq!(app.state.roi.base_revenue, Some(10_000.0));
    assert!(app.state.roi.started);
    assert!(app.state.roi.is_animating);
}

#[test]
fn stage_animation_settles_at_the_last_entry() {
    let run_id = uuid::Uuid::new_v4();
    let mut state = DemoState::default();
    state = reduce(state, DomainEvent::RevenueAccepted(50_000.0));
    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Started {
                slot: SimSlot::RoiStages,
            },
        },
    );
    assert!(state.roi.is_animating);

    for index in 1..STAGE_COUNT {
        state = reduce(
            state,
            DomainEvent::Simulation {
                run_id,
                ev: SimRunEvent::StageAdvanced { index },
            },
        );
    }
    assert_eq!(state.roi.stage_index, STAGE_COUNT - 1);

    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Settled,
        },
    );
    assert!(!state.roi.is_animating);
    assert!(!state.is_simulating());

    // Indices past the table clamp to the final stage.
    let run_id = uuid::Uuid::new_v4();
    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::Started {
                slot: SimSlot::RoiStages,
            },
        },
    );
    state = reduce(
        state,
        DomainEvent::Simulation {
            run_id,
            ev: SimRunEvent::StageAdvanced { index: 999 },
        },
    );
    assert_eq!(state.roi.stage_index, STAGE_COUNT - 1);
}
