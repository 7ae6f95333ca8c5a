use showcase_core::roi::{bucket_for, stage_table, Projection, STAGE_COUNT};

#[test]
fn stage_table_has_forty_exact_tenth_levels() {
    let table = stage_table();
    assert_eq!(table.len(), STAGE_COUNT);
    assert_eq!(table.first().unwrap().level, 1.0);
    assert_eq!(table.last().unwrap().level, 4.9);

    for (ix, stage) in table.iter().enumerate() {
        let expected = (10 + ix) as f64 / 10.0;
        assert_eq!(stage.level, expected, "stage {ix}");
        assert_eq!(stage.features.len(), 4);
        assert!(!stage.title.is_empty());
    }
}

#[test]
fn era_boundaries_carry_unlock_descriptions() {
    let table = stage_table();
    assert_eq!(table[9].description, "Basic software features unlocked!");
    assert_eq!(table[19].description, "Advanced features unlocked!");
    assert_eq!(table[29].description, "Premium features unlocked!");
    assert_eq!(table[39].description, "Full platform achieved!");
    assert!(table[0].title.starts_with("Hardware"));
    assert!(table[10].title.starts_with("Software"));
    assert!(table[20].title.starts_with("Advanced"));
    assert!(table[30].title.starts_with("Premium"));
}

#[test]
fn bucket_lookup_matches_ranges() {
    assert_eq!(bucket_for(1.0).label, "Hardware Product");
    assert_eq!(bucket_for(2.5).label, "Connected Product");
    assert_eq!(bucket_for(3.99).label, "Intelligent Product");
    assert_eq!(bucket_for(4.9).label, "Software Platform");
    // Boundary levels fall into the upper bucket.
    assert_eq!(bucket_for(2.0).label, "Connected Product");
}

#[test]
fn projection_matches_reference_numbers() {
    let p = Projection::compute(10_000.0, 2.0).unwrap();
    assert_eq!(p.additional_revenue, 10_000.0);
    assert_eq!(p.implementation_cost, 1_500.0);
    assert_eq!(p.projected_revenue, 20_000.0);
    assert!((p.roi_percent - 566.666_666).abs() < 0.01);
}

#[test]
fn projection_rejects_non_positive_revenue() {
    assert!(Projection::compute(0.0, 2.0).is_none());
    assert!(Projection::compute(-100.0, 2.0).is_none());
    assert!(Projection::compute(f64::NAN, 2.0).is_none());
}
