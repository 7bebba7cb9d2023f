//! Contact card component.
//!
//! Name, optional label and a dial button for one [`Contact`]. The card has
//! a fixed height so grids of cards can be measured.

use iced::widget::{button, column, container, row, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use campus_model::{Contact, PhoneNumber};

use crate::theme::{
    CampusColors, ICON_SIZE_SM, SPACING_MD, SPACING_XS, TEXT_SIZE_BODY, TEXT_SIZE_SM,
    button_primary, container_inset, tinted_box,
};

/// Height of a contact card.
pub const CONTACT_CARD_HEIGHT: f32 = 64.0;

/// Narrowest a card may get before the grid drops a column.
pub const CONTACT_CARD_MIN_WIDTH: f32 = 300.0;

/// A contact with a dial button.
pub struct ContactCard<M> {
    contact: Contact,
    on_dial: fn(PhoneNumber) -> M,
    tinted: bool,
}

impl<M: Clone> ContactCard<M> {
    pub fn new(contact: Contact, on_dial: fn(PhoneNumber) -> M) -> Self {
        Self {
            contact,
            on_dial,
            tinted: false,
        }
    }

    /// Use the blue phone-contact tint instead of the neutral inset.
    pub fn tinted(mut self) -> Self {
        self.tinted = true;
        self
    }

    /// Build the element.
    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let Contact { name, phone, label } = self.contact;

        let mut details = column![text(name).size(TEXT_SIZE_BODY)].spacing(SPACING_XS);
        if let Some(label) = label {
            details = details.push(text(label).size(TEXT_SIZE_SM).style(|theme: &Theme| {
                text::Style {
                    color: Some(theme.campus().text_muted),
                }
            }));
        }

        let dial = button(
            row![
                lucide::phone().size(ICON_SIZE_SM),
                text(phone.as_str()).size(TEXT_SIZE_SM),
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
        )
        .on_press((self.on_dial)(phone))
        .padding([6.0, 12.0])
        .style(button_primary);

        let card = container(
            row![details, space::horizontal(), dial]
                .spacing(SPACING_MD)
                .align_y(Alignment::Center),
        )
        .padding([0.0, SPACING_MD])
        .width(Length::Fill)
        .height(Length::Fixed(CONTACT_CARD_HEIGHT))
        .align_y(Alignment::Center);

        if self.tinted {
            card.style(|theme: &Theme| {
                let campus = theme.campus();
                tinted_box(campus.section_blue, campus.section_blue_strong)
            })
            .into()
        } else {
            card.style(container_inset).into()
        }
    }
}
