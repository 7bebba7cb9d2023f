//! View module for Campus Essentials.
//!
//! Views are pure functions of [`AppState`]. The shell in this file draws the
//! header bar and the centered page column, and lays the navigation drawer
//! over both while it is open.
//!
//! ## Module Structure
//!
//! - `home.rs` - Disclosure panels (timings, contacts, buses)
//! - `mess_menu.rs` - Weekly mess menu table
//! - `map.rs` - Location picker and map viewport
//! - `about.rs` - About the app
//! - `thanks.rs` - Developers and contributors

pub mod about;
pub mod home;
pub mod map;
pub mod mess_menu;
pub mod thanks;

use iced::widget::{Text, button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use campus_model::CAMPUS_NAME;

use crate::component::{SidebarItem, drawer_overlay, sidebar};
use crate::message::Message;
use crate::state::{AppState, View};
use crate::theme::{
    CampusColors, HEADER_HEIGHT, ICON_SIZE_LG, ICON_SIZE_MD, ICON_SIZE_SM, MAX_CONTENT_WIDTH,
    SPACING_MD, SPACING_SM, SPACING_XL, TEXT_SIZE_BODY, TEXT_SIZE_SM, TEXT_SIZE_TITLE,
    button_ghost, button_on_header, container_header,
};

pub use about::view_about;
pub use home::view_home;
pub use map::view_map;
pub use mess_menu::view_mess_menu;
pub use thanks::view_thanks;

/// App name shown in the header and the drawer.
pub const APP_NAME: &str = "Campus Essentials";

/// Render the whole window.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let page: Element<'_, Message> = match state.view {
        View::Home => view_home(state),
        View::MessMenu => view_mess_menu(state),
        View::Map => view_map(state),
        View::About => view_about(state),
        View::Thanks => view_thanks(state),
    };

    let body = scrollable(
        container(container(page).max_width(MAX_CONTENT_WIDTH))
            .padding(Padding::new(SPACING_MD).bottom(SPACING_XL))
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let base: Element<'_, Message> = column![header_bar(state), body].into();

    if state.sidebar_open {
        drawer_overlay(base, drawer(state.view), Message::CloseSidebar)
    } else {
        base
    }
}

/// Sidebar icon for a page.
pub fn view_icon<'a>(view: View) -> Text<'a> {
    match view {
        View::Home => lucide::house(),
        View::MessMenu => lucide::utensils(),
        View::Map => lucide::map(),
        View::About => lucide::info(),
        View::Thanks => lucide::handshake(),
    }
}

// =============================================================================
// HEADER
// =============================================================================

fn header_bar(state: &AppState) -> Element<'_, Message> {
    let menu = button(lucide::menu().size(ICON_SIZE_LG))
        .on_press(Message::ToggleSidebar)
        .padding(SPACING_SM)
        .style(button_on_header);

    let titles = column![
        text(APP_NAME).size(TEXT_SIZE_TITLE + 4.0),
        text(CAMPUS_NAME)
            .size(TEXT_SIZE_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.campus().accent_light),
            }),
    ];

    let theme_icon = if state.theme_mode.is_dark() {
        lucide::sun()
    } else {
        lucide::moon()
    };
    let toggle = button(
        row![
            theme_icon.size(ICON_SIZE_SM),
            text(state.theme_mode.toggle_label()).size(TEXT_SIZE_SM),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleTheme)
    .padding([SPACING_SM, SPACING_MD])
    .style(button_on_header);

    let bar = row![menu, titles, space::horizontal(), toggle]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center);

    container(
        container(bar)
            .max_width(MAX_CONTENT_WIDTH)
            .padding([0.0, SPACING_MD]),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .align_y(Alignment::Center)
    .style(container_header)
    .into()
}

// =============================================================================
// DRAWER
// =============================================================================

fn drawer<'a>(active: View) -> Element<'a, Message> {
    let close = button(lucide::x().size(ICON_SIZE_MD))
        .on_press(Message::CloseSidebar)
        .padding(SPACING_SM)
        .style(button_ghost);

    let header = container(
        row![
            column![
                text(APP_NAME).size(TEXT_SIZE_TITLE),
                text(CAMPUS_NAME)
                    .size(TEXT_SIZE_BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.campus().text_muted),
                    }),
            ],
            space::horizontal(),
            close,
        ]
        .align_y(Alignment::Center),
    )
    .padding(SPACING_MD)
    .style(|theme: &Theme| container::Style {
        background: Some(theme.campus().surface_header.into()),
        ..Default::default()
    });

    let items = View::ALL
        .into_iter()
        .map(|view| {
            SidebarItem::new(
                view_icon(view).size(ICON_SIZE_MD),
                view.label(),
                Message::Navigate(view),
            )
        })
        .collect();

    let active_index = View::ALL.iter().position(|view| *view == active);

    sidebar(header.into(), items, active_index)
}
