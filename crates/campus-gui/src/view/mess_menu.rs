//! Weekly mess menu page.
//!
//! One row per weekday with the three meals in columns. Today's row is
//! highlighted.

use iced::widget::{column, container, row, text};
use iced::{Border, Element, Length, Theme};
use iced_fonts::lucide;

use campus_model::{Meal, MenuDay, WEEKLY_MENU};

use crate::component::PageHeader;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{
    BORDER_WIDTH_THIN, CampusColors, ICON_SIZE_LG, SPACING_LG, SPACING_SM, TEXT_SIZE_BODY,
    TEXT_SIZE_SM, container_card,
};

/// Width share of the day column against each meal column.
const DAY_PORTION: u16 = 1;
const MEAL_PORTION: u16 = 3;

/// Render the mess menu page.
pub fn view_mess_menu(state: &AppState) -> Element<'_, Message> {
    let header = PageHeader::new("Weekly Mess Menu")
        .icon(lucide::utensils().size(ICON_SIZE_LG))
        .view();

    let mut table = column![heading_row()];
    for day in WEEKLY_MENU {
        table = table.push(menu_row(day, day.day == state.today));
    }

    container(column![header, table].spacing(SPACING_LG))
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(container_card)
        .into()
}

fn heading_row() -> Element<'static, Message> {
    let mut cells = row![cell(text("Day").size(TEXT_SIZE_BODY), DAY_PORTION)];
    for meal in Meal::ALL {
        cells = cells.push(cell(text(meal.label()).size(TEXT_SIZE_BODY), MEAL_PORTION));
    }

    container(cells)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.campus().surface_header.into()),
            ..Default::default()
        })
        .into()
}

fn menu_row(day: &'static MenuDay, is_today: bool) -> Element<'static, Message> {
    let mut cells = row![cell(
        text(day.day_label()).size(TEXT_SIZE_BODY),
        DAY_PORTION
    )];
    for meal in Meal::ALL {
        cells = cells.push(cell(text(day.meal(meal)).size(TEXT_SIZE_SM), MEAL_PORTION));
    }

    container(cells)
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            if is_today {
                container::Style {
                    background: Some(theme.campus().highlight_today.into()),
                    ..Default::default()
                }
            } else {
                container::Style::default()
            }
        })
        .into()
}

fn cell<'a>(
    content: impl Into<Element<'a, Message>>,
    portion: u16,
) -> Element<'a, Message> {
    container(content)
        .padding(SPACING_SM)
        .width(Length::FillPortion(portion))
        .style(|theme: &Theme| container::Style {
            border: Border {
                width: BORDER_WIDTH_THIN,
                color: theme.campus().border,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
