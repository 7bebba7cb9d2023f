//! Page header component.
//!
//! Icon, title and an optional subtitle at the top of a page card.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::component::PageHeader;
//!
//! PageHeader::new("Campus Navigation")
//!     .icon(lucide::map().size(ICON_SIZE_LG))
//!     .subtitle("Explore BITS Hyderabad campus locations")
//!     .view()
//! ```

use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Theme};

use crate::theme::{CampusColors, SPACING_SM, TEXT_SIZE_BODY, TEXT_SIZE_HEADING};

/// Page title with optional icon and subtitle.
pub struct PageHeader<'a, M> {
    title: String,
    icon: Option<Element<'a, M>>,
    subtitle: Option<String>,
}

impl<'a, M: 'a> PageHeader<'a, M> {
    /// Create a new page header with title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            subtitle: None,
        }
    }

    /// Icon before the title, drawn in the primary color.
    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Muted line under the title.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        let mut title_row = row![].spacing(SPACING_SM).align_y(Alignment::Center);
        if let Some(icon) = self.icon {
            title_row = title_row.push(container(icon).style(|theme: &Theme| container::Style {
                text_color: Some(theme.extended_palette().primary.base.color),
                ..Default::default()
            }));
        }
        title_row = title_row.push(text(self.title).size(TEXT_SIZE_HEADING));

        let mut header = column![title_row].spacing(SPACING_SM);
        if let Some(subtitle) = self.subtitle {
            header = header.push(text(subtitle).size(TEXT_SIZE_BODY).style(|theme: &Theme| {
                text::Style {
                    color: Some(theme.campus().text_secondary),
                }
            }));
        }
        header.into()
    }
}
