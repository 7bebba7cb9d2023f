//! Disclosure panel component.
//!
//! A titled card whose body slides open and closed. The body is always part
//! of the widget tree; only the height of the region holding it changes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::component::DisclosurePanel;
//! use iced_fonts::lucide;
//!
//! DisclosurePanel::new("Mess Timings", content, Message::Home(HomeMessage::TogglePanel(id)))
//!     .icon(lucide::utensils().size(ICON_SIZE_LG))
//!     .state(panels.is_open(id), panels.height_at(id, now))
//!     .view()
//! ```

use iced::widget::{button, column, container, row, scrollable, space, text};
use iced::{Alignment, Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::state::PanelHeight;
use crate::theme::{
    BORDER_RADIUS_LG, BORDER_RADIUS_MD, CampusColors, ICON_SIZE_MD, ICON_SIZE_SM, SPACING_LG,
    SPACING_MD, SPACING_SM, TEXT_SIZE_BODY, TEXT_SIZE_TITLE, container_card, container_inset,
};

/// Height of a top-level panel header.
pub const PANEL_HEADER_HEIGHT: f32 = 64.0;

/// Height of a nested panel header.
pub const NESTED_HEADER_HEIGHT: f32 = 44.0;

/// Body padding of a top-level panel (sides and bottom).
pub const PANEL_BODY_PADDING: f32 = SPACING_LG;

/// Body padding of a nested panel (sides and bottom).
pub const NESTED_BODY_PADDING: f32 = SPACING_MD;

// =============================================================================
// DISCLOSURE PANEL
// =============================================================================

/// A card with a clickable header and a collapsible body.
pub struct DisclosurePanel<'a, M> {
    title: String,
    icon: Option<Element<'a, M>>,
    content: Element<'a, M>,
    on_toggle: M,
    open: bool,
    height: PanelHeight,
    nested: bool,
}

impl<'a, M: Clone + 'a> DisclosurePanel<'a, M> {
    /// Create a closed panel.
    pub fn new(title: impl Into<String>, content: impl Into<Element<'a, M>>, on_toggle: M) -> Self {
        Self {
            title: title.into(),
            icon: None,
            content: content.into(),
            on_toggle,
            open: false,
            height: PanelHeight::Fixed(0.0),
            nested: false,
        }
    }

    /// Icon shown before the title.
    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Open state and the body height to render.
    pub fn state(mut self, open: bool, height: PanelHeight) -> Self {
        self.open = open;
        self.height = height;
        self
    }

    /// Render as a panel inside another panel.
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let Self {
            title,
            icon,
            content,
            on_toggle,
            open,
            height,
            nested,
        } = self;

        let (header_height, title_size, body_padding) = if nested {
            (NESTED_HEADER_HEIGHT, TEXT_SIZE_BODY, NESTED_BODY_PADDING)
        } else {
            (PANEL_HEADER_HEIGHT, TEXT_SIZE_TITLE, PANEL_BODY_PADDING)
        };

        let chevron = if open {
            lucide::chevron_up()
        } else {
            lucide::chevron_down()
        };
        let chevron_size = if nested { ICON_SIZE_SM } else { ICON_SIZE_MD };

        let mut title_row = row![].spacing(SPACING_SM).align_y(Alignment::Center);
        if let Some(icon) = icon {
            title_row = title_row.push(container(icon).style(|theme: &Theme| container::Style {
                text_color: Some(theme.extended_palette().primary.base.color),
                ..Default::default()
            }));
        }
        title_row = title_row
            .push(text(title).size(title_size))
            .push(space::horizontal())
            .push(
                container(chevron.size(chevron_size)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.campus().text_muted),
                    ..Default::default()
                }),
            );

        let header = button(
            container(title_row)
                .padding([0.0, body_padding])
                .height(Length::Fill)
                .align_y(Alignment::Center),
        )
        .on_press(on_toggle)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(header_height))
        .style(move |theme: &Theme, status| {
            let campus = theme.campus();
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => campus.surface_header,
                _ => iced::Color::TRANSPARENT,
            };
            button::Style {
                background: Some(background.into()),
                text_color: theme.palette().text,
                border: Border {
                    radius: if nested { BORDER_RADIUS_MD } else { BORDER_RADIUS_LG }.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

        // The scrollbar is never shown; the region only clips.
        let body = scrollable(
            container(content)
                .padding(Padding::new(body_padding).top(0.0))
                .width(Length::Fill),
        )
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .width(Length::Fill)
        .height(match height {
            PanelHeight::Auto => Length::Shrink,
            PanelHeight::Fixed(pixels) => Length::Fixed(pixels.max(0.0)),
        });

        let card = container(column![header, body])
            .width(Length::Fill)
            .clip(true);

        if nested {
            card.style(container_inset).into()
        } else {
            card.style(container_card).into()
        }
    }
}
