//! Property tests for disclosure transitions.

use std::time::{Duration, Instant};

use campus_gui::state::{AnimationSettings, Disclosure, Easing, PanelHeight};
use proptest::prelude::*;

fn easing() -> impl Strategy<Value = Easing> {
    prop_oneof![Just(Easing::Linear), Just(Easing::EaseInOut)]
}

fn settings(duration_ms: u64, easing: Easing) -> AnimationSettings {
    AnimationSettings {
        duration_ms,
        easing,
    }
}

proptest! {
    #[test]
    fn easing_is_monotone(easing in easing(), a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(easing.apply(lo) <= easing.apply(hi) + 1e-6);
    }

    #[test]
    fn toggle_flips_open_state(
        initially_open in any::<bool>(),
        extent in 0.0f32..2000.0,
        duration_ms in 0u64..2000,
        easing in easing(),
    ) {
        let now = Instant::now();
        let mut panel = Disclosure::new(initially_open);
        let open = panel.toggle(extent, now, &settings(duration_ms, easing));
        prop_assert_eq!(open, !initially_open);
        prop_assert_eq!(panel.is_open(), !initially_open);
    }

    #[test]
    fn height_stays_between_endpoints(
        initially_open in any::<bool>(),
        extent in 0.0f32..2000.0,
        duration_ms in 1u64..2000,
        elapsed_ms in 0u64..3000,
        easing in easing(),
    ) {
        let start = Instant::now();
        let mut panel = Disclosure::new(initially_open);
        panel.toggle(extent, start, &settings(duration_ms, easing));

        let at = start + Duration::from_millis(elapsed_ms);
        let height = panel.height_at(at).resolve(extent);
        prop_assert!(height >= -1e-3, "height {height} below zero");
        prop_assert!(height <= extent + 1e-3, "height {height} above {extent}");
    }

    #[test]
    fn transition_finishes_within_duration(
        initially_open in any::<bool>(),
        extent in 0.0f32..2000.0,
        duration_ms in 0u64..2000,
        easing in easing(),
    ) {
        let start = Instant::now();
        let mut panel = Disclosure::new(initially_open);
        panel.toggle(extent, start, &settings(duration_ms, easing));

        let end = start + Duration::from_millis(duration_ms);
        prop_assert!(!panel.tick(end));
        prop_assert!(!panel.is_animating());

        let expected = if panel.is_open() {
            PanelHeight::Auto
        } else {
            PanelHeight::Fixed(0.0)
        };
        prop_assert_eq!(panel.height_at(end), expected);
    }

    #[test]
    fn reversing_mid_flight_does_not_jump(
        extent in 1.0f32..2000.0,
        duration_ms in 10u64..2000,
        fraction in 0.0f64..1.0,
        easing in easing(),
    ) {
        let animation = settings(duration_ms, easing);
        let start = Instant::now();
        let mut panel = Disclosure::new(false);
        panel.toggle(extent, start, &animation);

        let midway = start + Duration::from_millis((duration_ms as f64 * fraction) as u64);
        let before = panel.height_at(midway).resolve(extent);
        panel.toggle(extent, midway, &animation);
        let after = panel.height_at(midway).resolve(extent);

        prop_assert!((before - after).abs() < 1e-3, "{before} -> {after}");
    }
}

#[test]
fn zero_duration_settles_immediately() {
    let now = Instant::now();
    let mut panel = Disclosure::new(false);
    panel.toggle(120.0, now, &settings(0, Easing::EaseInOut));

    assert!(panel.is_open());
    assert!(!panel.is_animating());
    assert_eq!(panel.height_at(now), PanelHeight::Auto);
    assert_eq!(panel.measured(), Some(120.0));
}
