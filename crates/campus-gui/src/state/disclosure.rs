//! Disclosure state: open/closed plus an animated content height.
//!
//! A disclosure never owns or rebuilds its content. The view keeps the
//! content in the widget tree at all times and only constrains the height of
//! the region that holds it, so closing and reopening a panel leaves
//! whatever is inside untouched.
//!
//! # Height model
//!
//! ```text
//!  closed            opening                       open
//! Fixed(0) ──toggle──▶ Fixed(0 → measured) ──dur──▶ Auto
//!    ▲                                               │
//!    └──dur── Fixed(current → 0) ◀────toggle─────────┘
//! ```
//!
//! Opening targets the measured natural extent and then releases the
//! constraint (`Auto`) so content that grows later is not clipped. A panel
//! created open starts at `Auto` and never animates on first paint.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::settings::AnimationSettings;

/// Natural extent of a renderable region.
///
/// Implementors report how tall their content would be if unconstrained,
/// given the width available to it.
pub trait Measure {
    fn natural_extent(&self, available_width: f32) -> f32;
}

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Rendered height of a disclosure's content region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelHeight {
    /// Unconstrained; the content decides.
    Auto,
    /// Clamped to this many pixels.
    Fixed(f32),
}

impl PanelHeight {
    /// Pixel height, resolving `Auto` to `natural`.
    pub fn resolve(self, natural: f32) -> f32 {
        match self {
            Self::Auto => natural,
            Self::Fixed(height) => height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    easing: Easing,
    /// Height to hold once the transition has run its course.
    settle: PanelHeight,
}

impl Transition {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn height_at(&self, now: Instant) -> PanelHeight {
        if self.is_finished(now) {
            return self.settle;
        }
        let eased = self.easing.apply(self.progress(now));
        PanelHeight::Fixed(self.from + (self.to - self.from) * eased)
    }
}

/// Open/closed state with an animated height.
#[derive(Debug, Clone, PartialEq)]
pub struct Disclosure {
    open: bool,
    measured: Option<f32>,
    transition: Option<Transition>,
    settled: PanelHeight,
}

impl Disclosure {
    pub fn new(initially_open: bool) -> Self {
        Self {
            open: initially_open,
            measured: None,
            transition: None,
            settled: if initially_open {
                PanelHeight::Auto
            } else {
                PanelHeight::Fixed(0.0)
            },
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Natural extent recorded when the panel last opened.
    pub fn measured(&self) -> Option<f32> {
        self.measured
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Flip open/closed and start a transition from the currently rendered
    /// height. `extent` is the content's natural extent right now.
    ///
    /// Returns the new open state.
    pub fn toggle(&mut self, extent: f32, now: Instant, animation: &AnimationSettings) -> bool {
        let extent = extent.max(0.0);
        let from = self.height_at(now).resolve(extent);

        self.open = !self.open;
        let (to, settle) = if self.open {
            self.measured = Some(extent);
            (extent, PanelHeight::Auto)
        } else {
            (0.0, PanelHeight::Fixed(0.0))
        };

        let transition = Transition {
            from,
            to,
            started: now,
            duration: animation.duration(),
            easing: animation.easing,
            settle,
        };

        if transition.is_finished(now) {
            self.transition = None;
            self.settled = settle;
        } else {
            self.transition = Some(transition);
        }
        self.open
    }

    /// Height to render at `now`.
    pub fn height_at(&self, now: Instant) -> PanelHeight {
        match &self.transition {
            Some(transition) => transition.height_at(now),
            None => self.settled,
        }
    }

    /// Retire a finished transition. Returns `true` while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(transition) = self.transition
            && transition.is_finished(now)
        {
            self.settled = transition.settle;
            self.transition = None;
        }
        self.transition.is_some()
    }
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animation() -> AnimationSettings {
        AnimationSettings {
            duration_ms: 500,
            easing: Easing::EaseInOut,
        }
    }

    #[test]
    fn test_initially_open_is_unconstrained() {
        let panel = Disclosure::new(true);
        assert!(panel.is_open());
        assert_eq!(panel.height_at(Instant::now()), PanelHeight::Auto);
        assert!(!panel.is_animating());
    }

    #[test]
    fn test_initially_closed_is_zero() {
        let panel = Disclosure::new(false);
        assert_eq!(panel.height_at(Instant::now()), PanelHeight::Fixed(0.0));
    }

    #[test]
    fn test_open_settles_to_auto() {
        let start = Instant::now();
        let mut panel = Disclosure::new(false);
        assert!(panel.toggle(240.0, start, &animation()));
        assert_eq!(panel.measured(), Some(240.0));

        let mid = panel.height_at(start + Duration::from_millis(250));
        assert!(matches!(mid, PanelHeight::Fixed(h) if (h - 120.0).abs() < 1e-3));

        let end = start + Duration::from_millis(500);
        assert_eq!(panel.height_at(end), PanelHeight::Auto);
        assert!(!panel.tick(end));
        assert_eq!(panel.height_at(end), PanelHeight::Auto);
    }

    #[test]
    fn test_close_from_auto_starts_at_natural_extent() {
        let start = Instant::now();
        let mut panel = Disclosure::new(true);
        assert!(!panel.toggle(300.0, start, &animation()));
        assert_eq!(panel.height_at(start), PanelHeight::Fixed(300.0));
        assert_eq!(
            panel.height_at(start + Duration::from_secs(1)),
            PanelHeight::Fixed(0.0)
        );
    }

    #[test]
    fn test_reverse_mid_flight_continues_from_current_height() {
        let start = Instant::now();
        let mut panel = Disclosure::new(false);
        panel.toggle(200.0, start, &animation());

        let flip = start + Duration::from_millis(250);
        let at_flip = panel.height_at(flip).resolve(200.0);
        panel.toggle(200.0, flip, &animation());
        assert_eq!(panel.height_at(flip), PanelHeight::Fixed(at_flip));
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let instant = AnimationSettings {
            duration_ms: 0,
            easing: Easing::Linear,
        };
        let now = Instant::now();
        let mut panel = Disclosure::new(false);
        panel.toggle(80.0, now, &instant);
        assert!(!panel.is_animating());
        assert_eq!(panel.height_at(now), PanelHeight::Auto);
    }

    #[test]
    fn test_empty_content_is_valid() {
        let now = Instant::now();
        let mut panel = Disclosure::new(false);
        panel.toggle(0.0, now, &animation());
        assert!(panel.is_open());
        assert_eq!(panel.measured(), Some(0.0));
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    }
}
