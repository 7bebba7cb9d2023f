//! Reusable UI components for Campus Essentials.
//!
//! This module provides building blocks for constructing views:
//!
//! - **Panels**: `DisclosurePanel`
//! - **Layout**: `sidebar`, `drawer_overlay`, `PageHeader`
//! - **Lists**: `key_value_list`, `stacked_list`, `chip_grid`, `pill`
//! - **Contacts**: `ContactCard`
//! - **Map**: `MapCanvas`
//! - **Icons**: Use `iced_fonts::lucide::*` directly (see <https://lucide.dev/icons/>)
//!
//! Components use the builder pattern and return `Element<M>`.

mod contact_card;
mod disclosure_panel;
pub mod info_list;
mod map_canvas;
mod page_header;
mod sidebar;

pub use contact_card::{CONTACT_CARD_HEIGHT, CONTACT_CARD_MIN_WIDTH, ContactCard};
pub use disclosure_panel::{
    DisclosurePanel, NESTED_BODY_PADDING, NESTED_HEADER_HEIGHT, PANEL_BODY_PADDING,
    PANEL_HEADER_HEIGHT,
};
pub use info_list::{
    Emphasis, InfoRow, chip_columns, chip_grid, key_value_list, pill, stacked_list,
};
pub use map_canvas::MapCanvas;
pub use page_header::PageHeader;
pub use sidebar::{SidebarItem, drawer_overlay, sidebar};
