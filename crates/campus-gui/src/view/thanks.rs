//! Thanks page: developers and the people who collected the auto-driver
//! numbers.

use iced::widget::{column, container, text};
use iced::{Element, Length, Theme};

use campus_model::CREDITS;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    CampusColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, TEXT_SIZE_BODY,
    TEXT_SIZE_HEADING, TEXT_SIZE_SM, TEXT_SIZE_TITLE, container_card, container_inset,
};

/// Render the thanks page.
pub fn view_thanks(_state: &AppState) -> Element<'_, Message> {
    let title = container(text("Thank You!").size(TEXT_SIZE_HEADING + 6.0)).center_x(Length::Fill);

    let intro = container(muted(
        "This website was built with love and dedication to simplify campus life for students.",
        TEXT_SIZE_BODY + 2.0,
    ))
    .center_x(Length::Fill);

    let developers = credit_box(
        "Developers",
        None,
        CREDITS.developers.iter().map(|person| person.name),
    );

    let contributors = credit_box(
        "Contributors",
        Some(
            "Special thanks to these people who have provided the auto numbers operating at Main Gate:",
        ),
        CREDITS.contributors.iter().copied(),
    );

    let footer = container(muted(
        "We sincerely thank everyone who supported us in making this project a reality.",
        TEXT_SIZE_SM,
    ))
    .padding(iced::Padding::ZERO.top(SPACING_XL))
    .center_x(Length::Fill);

    container(
        column![title, intro, developers, contributors, footer].spacing(SPACING_LG),
    )
    .padding(SPACING_LG)
    .width(Length::Fill)
    .style(container_card)
    .into()
}

fn credit_box(
    heading: &'static str,
    intro: Option<&'static str>,
    names: impl Iterator<Item = &'static str>,
) -> Element<'static, Message> {
    let mut content = column![text(heading).size(TEXT_SIZE_TITLE)];
    if let Some(intro) = intro {
        content = content.push(muted(intro, TEXT_SIZE_BODY));
    }
    content = content.push(
        column(names.map(|name| muted(format!("• {name}"), TEXT_SIZE_BODY))).spacing(SPACING_SM),
    );

    container(content.spacing(SPACING_MD))
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(container_inset)
        .into()
}

fn muted<'a>(content: impl text::IntoFragment<'a>, size: f32) -> Element<'a, Message> {
    text(content)
        .size(size)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.campus().text_secondary),
        })
        .into()
}
