//! Map page: location picker, selected-location card, map viewport and the
//! quick-access grid.

use iced::widget::{button, column, container, opaque, row, stack, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use campus_model::{LOCATIONS, LocationRecord};

use crate::component::{MapCanvas, PageHeader, chip_columns, chip_grid};
use crate::message::{MapMessage, Message};
use crate::state::AppState;
use crate::theme::{
    BORDER_RADIUS_MD, CampusColors, ICON_SIZE_LG, ICON_SIZE_SM, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS, TEXT_SIZE_BODY, TEXT_SIZE_SM, TEXT_SIZE_TITLE, button_ghost,
    button_primary, container_card, container_inset, tinted_box,
};

/// Location buttons per row.
const PICKER_COLUMNS: usize = 2;

/// Widest the marker's name card may get.
const POPUP_MAX_WIDTH: f32 = 280.0;

/// Narrowest a quick-access cell may get.
const QUICK_ACCESS_MIN_WIDTH: f32 = 140.0;

// =============================================================================
// PAGE
// =============================================================================

/// Render the map page.
pub fn view_map(state: &AppState) -> Element<'_, Message> {
    let header = PageHeader::new("Campus Navigation")
        .icon(lucide::map_pin().size(ICON_SIZE_LG))
        .subtitle(
            "Explore BITS Hyderabad campus locations with interactive map and quick directions.",
        )
        .view();

    let selected = state.picker.selected();

    let canvas = MapCanvas::new(
        &state.map.viewport,
        &state.map.tiles,
        &state.map.canvas,
        selected.point(),
    )
    .view();

    let mut map = stack![canvas, zoom_controls(state)];
    if state.map.popup_open {
        map = map.push(marker_popup(selected));
    }

    let attribution = text(state.map.attribution.as_str())
        .size(TEXT_SIZE_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.campus().text_muted),
        });

    let content = column![
        header,
        location_buttons(selected),
        selected_card(selected),
        column![map, attribution].spacing(SPACING_XS),
        quick_access(state.card_inner_width()),
    ]
    .spacing(SPACING_LG);

    container(content)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(container_card)
        .into()
}

// =============================================================================
// SECTIONS
// =============================================================================

fn location_buttons(selected: &'static LocationRecord) -> Element<'static, Message> {
    let buttons = LOCATIONS
        .iter()
        .map(|location| {
            let is_selected = location.id == selected.id;
            button(text(location.name).size(TEXT_SIZE_SM))
                .on_press(Message::Map(MapMessage::SelectLocation(location.id)))
                .padding(SPACING_SM + 4.0)
                .width(Length::Fill)
                .style(if is_selected {
                    button_primary
                } else {
                    button_ghost
                })
                .into()
        })
        .collect();

    chip_grid(buttons, PICKER_COLUMNS)
}

fn selected_card(location: &'static LocationRecord) -> Element<'static, Message> {
    let title = row![
        container(lucide::map_pin().size(ICON_SIZE_SM)).style(|theme: &Theme| {
            container::Style {
                text_color: Some(theme.extended_palette().primary.base.color),
                ..Default::default()
            }
        }),
        text(location.name).size(TEXT_SIZE_TITLE),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let mut details = column![title].spacing(SPACING_SM);
    if let Some(description) = location.description {
        details = details.push(text(description).size(TEXT_SIZE_BODY).style(
            |theme: &Theme| text::Style {
                color: Some(theme.campus().text_secondary),
            },
        ));
    }

    let open = button(
        row![
            lucide::map_pin().size(ICON_SIZE_SM),
            text("Open in Google Maps").size(TEXT_SIZE_BODY),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .on_press(Message::Map(MapMessage::OpenSelected))
    .padding([SPACING_SM, SPACING_MD])
    .style(button_primary);

    container(details.push(open).spacing(SPACING_MD))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(container_inset)
        .into()
}

fn zoom_controls(state: &AppState) -> Element<'static, Message> {
    let viewport = &state.map.viewport;
    let zoom_button = |icon: iced::widget::Text<'static>, steps: i8, enabled: bool| {
        button(icon.size(ICON_SIZE_SM))
            .on_press_maybe(enabled.then_some(Message::Map(MapMessage::Zoom(steps))))
            .padding(SPACING_XS + 2.0)
            .style(button_ghost)
    };

    container(
        container(
            column![
                zoom_button(lucide::plus(), 1, viewport.can_zoom_in()),
                zoom_button(lucide::minus(), -1, viewport.can_zoom_out()),
            ]
            .spacing(SPACING_XS),
        )
        .padding(SPACING_XS)
        .style(container_card),
    )
    .padding(SPACING_SM)
    .into()
}

/// Name card shown above the map after clicking the marker.
fn marker_popup(location: &'static LocationRecord) -> Element<'static, Message> {
    let close = button(lucide::x().size(ICON_SIZE_SM))
        .on_press(Message::Map(MapMessage::CloseMarkerPopup))
        .padding(SPACING_XS)
        .style(button_ghost);

    let mut card = column![
        row![
            text(location.name).size(TEXT_SIZE_BODY).width(Length::Fill),
            close
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    ]
    .spacing(SPACING_XS)
    .max_width(POPUP_MAX_WIDTH);
    if let Some(description) = location.description {
        card = card.push(text(description).size(TEXT_SIZE_SM).style(
            |theme: &Theme| text::Style {
                color: Some(theme.campus().text_secondary),
            },
        ));
    }

    container(opaque(
        container(card)
            .padding(SPACING_SM)
            .style(container_card),
    ))
    .padding(SPACING_SM)
    .center_x(Length::Fill)
    .into()
}

fn quick_access(width: f32) -> Element<'static, Message> {
    let cells = LOCATIONS
        .iter()
        .map(|location| {
            button(
                column![
                    text(location.name).size(TEXT_SIZE_SM),
                    row![
                        lucide::map_pin().size(TEXT_SIZE_SM),
                        text("View").size(TEXT_SIZE_SM),
                    ]
                    .spacing(SPACING_XS)
                    .align_y(Alignment::Center),
                ]
                .spacing(SPACING_XS)
                .align_x(Alignment::Center)
                .width(Length::Fill),
            )
            .on_press(Message::Map(MapMessage::OpenLocation(location.id)))
            .padding(SPACING_SM + 4.0)
            .width(Length::Fill)
            .style(|theme: &Theme, status| {
                let campus = theme.campus();
                let mut style = tinted_box(campus.section_blue, campus.section_blue_strong);
                if matches!(status, button::Status::Hovered | button::Status::Pressed) {
                    style.background = Some(campus.accent_light.into());
                }
                button::Style {
                    background: style.background,
                    text_color: campus.link,
                    border: iced::Border {
                        radius: BORDER_RADIUS_MD.into(),
                        ..style.border
                    },
                    ..Default::default()
                }
            })
            .into()
        })
        .collect();

    let heading = text("Quick Access").size(TEXT_SIZE_TITLE);

    column![
        heading,
        chip_grid(cells, chip_columns(width, QUICK_ACCESS_MIN_WIDTH)),
    ]
    .spacing(SPACING_MD)
    .into()
}
