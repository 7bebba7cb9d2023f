//! Sidebar navigation drawer.
//!
//! A slide-in drawer on the left edge with a header and one button per
//! page. The drawer is laid over the page with a backdrop; clicking the
//! backdrop sends `on_dismiss`.

use iced::widget::{Space, button, column, container, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Border, Element, Length, Padding, Theme};

use crate::theme::{
    BORDER_RADIUS_MD, CampusColors, ICON_SIZE_MD, SIDEBAR_WIDTH, SPACING_MD, SPACING_SM,
    SPACING_XS, TEXT_SIZE_BODY, container_backdrop,
};

// =============================================================================
// SIDEBAR ITEM
// =============================================================================

/// A sidebar navigation item.
pub struct SidebarItem<'a, M> {
    /// Leading icon
    pub icon: Element<'a, M>,
    /// Item label text
    pub label: String,
    /// Message to send when clicked
    pub message: M,
}

impl<'a, M> SidebarItem<'a, M> {
    /// Create a new sidebar item.
    pub fn new(icon: impl Into<Element<'a, M>>, label: impl Into<String>, message: M) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            message,
        }
    }
}

// =============================================================================
// SIDEBAR COMPONENT
// =============================================================================

/// Creates the vertical list of navigation items.
///
/// `active_index` marks the current page.
pub fn sidebar<'a, M: Clone + 'a>(
    header: Element<'a, M>,
    items: Vec<SidebarItem<'a, M>>,
    active_index: Option<usize>,
) -> Element<'a, M> {
    let mut item_column = column![].spacing(SPACING_XS);

    for (index, item) in items.into_iter().enumerate() {
        let is_active = active_index == Some(index);

        let item_button = button(
            row![
                container(item.icon).width(Length::Fixed(ICON_SIZE_MD)),
                text(item.label).size(TEXT_SIZE_BODY),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
        )
        .on_press(item.message)
        .padding([SPACING_SM + 2.0, SPACING_MD])
        .width(Length::Fill)
        .style(move |theme: &Theme, status| {
            let palette = theme.extended_palette();
            let campus = theme.campus();

            if is_active {
                button::Style {
                    background: Some(campus.accent_light.into()),
                    text_color: palette.primary.base.color,
                    border: Border {
                        radius: BORDER_RADIUS_MD.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            } else {
                let background = match status {
                    button::Status::Hovered => Some(campus.surface_hover.into()),
                    _ => None,
                };
                button::Style {
                    background,
                    text_color: palette.background.base.text,
                    border: Border {
                        radius: BORDER_RADIUS_MD.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }
        });

        item_column = item_column.push(item_button);
    }

    container(
        column![
            header,
            container(item_column).padding(Padding::new(SPACING_MD).top(SPACING_SM)),
        ]
        .spacing(SPACING_SM),
    )
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
    .style(|theme: &Theme| {
        let campus = theme.campus();
        container::Style {
            background: Some(campus.surface.into()),
            border: Border {
                color: campus.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    })
    .into()
}

/// Lays the drawer over `base` with a dismissing backdrop.
pub fn drawer_overlay<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    drawer: Element<'a, M>,
    on_dismiss: M,
) -> Element<'a, M> {
    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(container_backdrop),
    )
    .on_press(on_dismiss);

    stack![base, opaque(row![drawer, backdrop].height(Length::Fill))].into()
}
