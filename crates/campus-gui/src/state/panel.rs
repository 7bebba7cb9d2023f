//! The disclosure panels on the home page.
//!
//! Panel ids are fixed. Each id owns one [`Disclosure`], so toggling one
//! panel never touches another, and the nested menu-photo panel keeps its
//! own state while its parent opens and closes.

use std::time::Instant;

use super::disclosure::{Disclosure, PanelHeight};
use super::settings::AnimationSettings;

/// Identifier of a home-page disclosure panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    MessTimings,
    /// Nested inside [`PanelId::MessTimings`].
    MenuPhoto,
    Outlets,
    OutletPhones,
    AutoDrivers,
    Wardens,
    Bus212,
    AlternateRoutes,
}

impl PanelId {
    pub const ALL: [Self; 8] = [
        Self::MessTimings,
        Self::MenuPhoto,
        Self::Outlets,
        Self::OutletPhones,
        Self::AutoDrivers,
        Self::Wardens,
        Self::Bus212,
        Self::AlternateRoutes,
    ];

    /// Top-level panels in page order.
    pub const HOME: [Self; 7] = [
        Self::MessTimings,
        Self::Outlets,
        Self::OutletPhones,
        Self::AutoDrivers,
        Self::Wardens,
        Self::Bus212,
        Self::AlternateRoutes,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::MessTimings => "Mess Timings",
            Self::MenuPhoto => "Menu Photo",
            Self::Outlets => "Food Outlets & Timings",
            Self::OutletPhones => "Food Outlet Phone Numbers",
            Self::AutoDrivers => "Campus Auto Drivers' Numbers",
            Self::Wardens => "Warden Contact Info",
            Self::Bus212 => "212 Bus Schedule (BPHC ↔ Secunderabad)",
            Self::AlternateRoutes => "Alternate Bus Routes",
        }
    }

    /// Whether the panel starts open.
    pub fn initially_open(&self) -> bool {
        matches!(self, Self::MessTimings)
    }

    /// Enclosing panel, if nested.
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::MenuPhoto => Some(Self::MessTimings),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Disclosure state of every home-page panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSet {
    panels: [Disclosure; PanelId::ALL.len()],
}

impl PanelSet {
    pub fn new() -> Self {
        Self {
            panels: PanelId::ALL.map(|id| Disclosure::new(id.initially_open())),
        }
    }

    pub fn get(&self, id: PanelId) -> &Disclosure {
        &self.panels[id.index()]
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.get(id).is_open()
    }

    pub fn height_at(&self, id: PanelId, now: Instant) -> PanelHeight {
        self.get(id).height_at(now)
    }

    /// Toggle one panel. Returns its new open state.
    pub fn toggle(
        &mut self,
        id: PanelId,
        extent: f32,
        now: Instant,
        animation: &AnimationSettings,
    ) -> bool {
        self.panels[id.index()].toggle(extent, now, animation)
    }

    pub fn is_animating(&self) -> bool {
        self.panels.iter().any(Disclosure::is_animating)
    }

    /// Advance every panel. Returns `true` while any is still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.panels
            .iter_mut()
            .fold(false, |animating, panel| panel.tick(now) || animating)
    }

    /// Ids of the open top-level panels.
    pub fn open_panels(&self) -> impl Iterator<Item = PanelId> + '_ {
        PanelId::HOME.into_iter().filter(|id| self.is_open(*id))
    }
}

impl Default for PanelSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_mess_timings_starts_open() {
        let panels = PanelSet::new();
        let open: Vec<_> = panels.open_panels().collect();
        assert_eq!(open, vec![PanelId::MessTimings]);
        assert!(!panels.is_open(PanelId::MenuPhoto));
    }

    #[test]
    fn test_toggle_is_independent() {
        let mut panels = PanelSet::new();
        let now = Instant::now();
        assert!(panels.toggle(PanelId::Wardens, 120.0, now, &AnimationSettings::default()));
        assert!(panels.is_open(PanelId::MessTimings));
        assert!(!panels.is_open(PanelId::Outlets));
        assert!(panels.is_animating());
    }

    #[test]
    fn test_ids_index_their_own_slot() {
        for (i, id) in PanelId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }
}
