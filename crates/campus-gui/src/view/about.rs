//! About page.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use campus_model::{CREDITS, Person};

use crate::component::PageHeader;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    CampusColors, ICON_SIZE_LG, SPACING_LG, SPACING_MD, SPACING_SM, TEXT_SIZE_BODY,
    container_card,
};

const PURPOSE: &str = "A utility hub for BITS Hyderabad students. The idea is to simplify \
    access to campus resources, information, and services.";

const AIM: &str = "Our aim is to bring commonly used details like the mess menu, contacts, and \
    map together in one place with a clean, responsive interface.";

const OUTRO: &str = "Feel free to reach out for suggestions or contributions!";

/// Render the about page.
pub fn view_about(_state: &AppState) -> Element<'_, Message> {
    let header = PageHeader::new("About Campus Essentials")
        .icon(lucide::info().size(ICON_SIZE_LG))
        .view();

    let mut built_by = row![paragraph("Built by")]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);
    for (index, person) in CREDITS.developers.iter().enumerate() {
        if index > 0 {
            built_by = built_by.push(paragraph("and"));
        }
        built_by = built_by.push(person_link(person));
    }

    let body = column![
        built_by.wrap(),
        paragraph(PURPOSE),
        paragraph(AIM),
        paragraph(OUTRO),
    ]
    .spacing(SPACING_MD);

    container(column![header, body].spacing(SPACING_LG))
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(container_card)
        .into()
}

fn paragraph(content: &'static str) -> Element<'static, Message> {
    text(content)
        .size(TEXT_SIZE_BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.campus().text_secondary),
        })
        .into()
}

/// A developer's name, clickable when they have a profile.
fn person_link(person: &'static Person) -> Element<'static, Message> {
    let name = text(person.name).size(TEXT_SIZE_BODY);
    let Some(url) = person.profile_url else {
        return name.into();
    };

    button(name)
        .on_press(Message::OpenUrl(url.to_string()))
        .padding(0)
        .style(|theme: &Theme, status| {
            let link = theme.campus().link;
            button::Style {
                background: None,
                text_color: match status {
                    button::Status::Hovered => theme.campus().accent_hover,
                    _ => link,
                },
                ..Default::default()
            }
        })
        .into()
}
