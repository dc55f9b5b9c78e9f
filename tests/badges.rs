use wellness_signal_core::badges::{self, Badge};

#[test]
fn nothing_earned_at_start() {
    assert!(badges::earned(0, 0).is_empty());
    assert!(badges::earned(19, 2).is_empty());
}

#[test]
fn thresholds_are_inclusive() {
    assert_eq!(badges::earned(20, 0), vec![Badge::FirstSteps]);
    assert_eq!(badges::earned(0, 3), vec![Badge::ConsistentCare]);
}

#[test]
fn all_badges_in_display_order() {
    assert_eq!(
        badges::earned(100, 7),
        vec![
            Badge::FirstSteps,
            Badge::ConsistentCare,
            Badge::OneWeekCalm,
            Badge::ZenExplorer
        ]
    );
    let json = serde_json::to_string(&badges::earned(20, 0)).unwrap();
    assert_eq!(json, r#"["🌱 First Steps"]"#);
}
