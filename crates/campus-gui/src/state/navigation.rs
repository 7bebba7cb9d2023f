//! Navigation state types.

// =============================================================================
// VIEW ENUM
// =============================================================================

/// Current page in the application.
///
/// This determines what is rendered below the header bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Collapsible panels with timings, contacts and bus schedules
    #[default]
    Home,

    /// Weekly mess menu table
    MessMenu,

    /// Location picker and map viewport
    Map,

    /// About the app
    About,

    /// Developers and contributors
    Thanks,
}

impl View {
    /// Sidebar order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::MessMenu,
        Self::Map,
        Self::About,
        Self::Thanks,
    ];

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::MessMenu => "Mess Menu",
            Self::Map => "Map",
            Self::About => "About",
            Self::Thanks => "Thanks",
        }
    }

    /// Check if this is the Map view.
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map)
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
