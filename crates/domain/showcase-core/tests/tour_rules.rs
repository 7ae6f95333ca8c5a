use showcase_core::tour::{StepId, TourCursor};

#[test]
fn advance_walks_every_step_in_order() {
    let mut cursor = TourCursor::new();
    assert_eq!(cursor.current(), StepId::Download);

    let mut seen = vec![cursor.current()];
    while cursor.advance() {
        seen.push(cursor.current());
    }
    assert_eq!(seen, StepId::ALL.to_vec());
}

#[test]
fn advance_is_a_noop_at_the_terminal_step() {
    let mut cursor = TourCursor::new();
    for _ in 0..StepId::ALL.len() * 2 {
        cursor.advance();
    }
    assert_eq!(cursor.current(), StepId::Revenue);
    assert!(!cursor.advance());
    assert_eq!(cursor.index(), StepId::ALL.len() - 1);
}

#[test]
fn index_is_monotonic_under_advance() {
    let mut cursor = TourCursor::new();
    let mut prev = cursor.index();
    for _ in 0..20 {
        cursor.advance();
        assert!(cursor.index() >= prev);
        assert!(cursor.index() < StepId::ALL.len());
        prev = cursor.index();
    }
}

#[test]
fn jump_never_moves_forward() {
    let mut cursor = TourCursor::new();
    cursor.advance();
    cursor.advance();
    let before = cursor.index();

    assert!(!cursor.jump_to(before + 1));
    assert_eq!(cursor.index(), before);

    assert!(cursor.jump_to(0));
    assert_eq!(cursor.current(), StepId::Download);
}

#[test]
fn jump_to_current_step_is_allowed() {
    let mut cursor = TourCursor::new();
    cursor.advance();
    assert!(cursor.jump_to(1));
    assert_eq!(cursor.current(), StepId::Versions);
}
