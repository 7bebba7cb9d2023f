//! Home page: the stack of disclosure panels.
//!
//! Each panel body is built from the static catalog with fixed-height rows,
//! cards and chips. [`PanelContent`] computes the natural extent of a body
//! from the same constants, which is what a panel animates towards when it
//! opens.

use std::path::Path;
use std::time::Instant;

use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length, Theme};
use iced_fonts::lucide;

use campus_model::{
    ALTERNATE_ROUTES, AUTO_DRIVERS, BUS_212, MESS_TIMINGS, OUTLET_PHONES, OUTLETS, WARDEN_CONTACTS,
};

use crate::component::info_list::{
    BOX_PADDING, CHIP_HEIGHT, CHIP_MIN_WIDTH, PILL_HEIGHT, PILL_MIN_WIDTH, ROW_HEIGHT,
    boxed_height, grid_height, key_value_height, paragraph_height, sections_height, stack_height,
    stacked_height,
};
use crate::component::{
    CONTACT_CARD_HEIGHT, CONTACT_CARD_MIN_WIDTH, ContactCard, DisclosurePanel, Emphasis, InfoRow,
    NESTED_BODY_PADDING, NESTED_HEADER_HEIGHT, PANEL_BODY_PADDING, chip_columns, chip_grid,
    key_value_list, pill, stacked_list,
};
use crate::message::{HomeMessage, Message};
use crate::state::{AppState, Measure, PanelId, PanelSet};
use crate::theme::{
    BORDER_RADIUS_MD, BORDER_WIDTH_ACCENT, CampusColors, ICON_SIZE_LG, ICON_SIZE_SM, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XS, TEXT_SIZE_BODY, TEXT_SIZE_SM, container_inset, tinted_box,
};

/// Height of the heading line inside a tinted box.
const BOX_HEADING_HEIGHT: f32 = 24.0;

/// Height of the photographed menu in the nested panel.
const MENU_PHOTO_HEIGHT: f32 = 360.0;

/// Wardens are shown in at most two columns.
const MAX_WARDEN_COLUMNS: usize = 2;

const OUTLET_PHONES_HINT: &str = "Tap on a contact to call directly.";

const AUTO_DRIVERS_HINT: &str =
    "We recommend contacting any available driver at random to ensure fair distribution of rides.";

const ROUTES_NOTE: &str =
    "Confirm with the conductor before boarding to ensure it stops at your destination.";

const ROUTES_HEADING: &str = "From Secunderabad to Thumkunta/Tandoor Junction:";

// =============================================================================
// PAGE
// =============================================================================

/// Render the home page.
pub fn view_home(state: &AppState) -> Element<'_, Message> {
    let width = state.card_inner_width();

    let panels = PanelId::HOME.into_iter().map(|id| {
        let body = panel_body(id, state, width);
        panel(id, &state.panels, state.frame, body)
    });

    column(panels).spacing(SPACING_MD).width(Length::Fill).into()
}

fn panel<'a>(
    id: PanelId,
    panels: &PanelSet,
    now: Instant,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut panel = DisclosurePanel::new(id.title(), body, Message::Home(HomeMessage::TogglePanel(id)))
        .state(panels.is_open(id), panels.height_at(id, now));

    if id.parent().is_some() {
        panel = panel
            .icon(panel_icon(id).size(ICON_SIZE_SM))
            .nested();
    } else {
        panel = panel.icon(panel_icon(id).size(ICON_SIZE_LG));
    }
    panel.view()
}

fn panel_icon<'a>(id: PanelId) -> iced::widget::Text<'a> {
    match id {
        PanelId::MessTimings => lucide::utensils(),
        PanelId::MenuPhoto => lucide::image(),
        PanelId::Outlets => lucide::store(),
        PanelId::OutletPhones => lucide::phone(),
        PanelId::AutoDrivers => lucide::car(),
        PanelId::Wardens => lucide::user(),
        PanelId::Bus212 | PanelId::AlternateRoutes => lucide::bus(),
    }
}

fn panel_body(id: PanelId, state: &AppState, width: f32) -> Element<'_, Message> {
    match id {
        PanelId::MessTimings => mess_timings(state),
        PanelId::MenuPhoto => menu_photo(&state.settings.assets.menu_photo),
        PanelId::Outlets => outlets(),
        PanelId::OutletPhones => outlet_phones(),
        PanelId::AutoDrivers => auto_drivers(width),
        PanelId::Wardens => wardens(width),
        PanelId::Bus212 => bus_212(),
        PanelId::AlternateRoutes => alternate_routes(width),
    }
}

// =============================================================================
// PANEL BODIES
// =============================================================================

fn mess_timings(state: &AppState) -> Element<'_, Message> {
    let timings = key_value_list(
        MESS_TIMINGS
            .iter()
            .map(|slot| InfoRow::new(slot.meal, slot.hours)),
    );

    let timings_box = section_box(
        box_heading(lucide::clock_four(), "Mess Timings", Section::Green),
        timings,
        Section::Green,
    );

    let photo = panel(
        PanelId::MenuPhoto,
        &state.panels,
        state.frame,
        panel_body(PanelId::MenuPhoto, state, state.card_inner_width()),
    );

    column![timings_box, photo].spacing(SPACING_MD).into()
}

fn menu_photo(path: &Path) -> Element<'_, Message> {
    image(image::Handle::from_path(path))
        .width(Length::Fill)
        .height(Length::Fixed(MENU_PHOTO_HEIGHT))
        .content_fit(ContentFit::Contain)
        .into()
}

fn outlets() -> Element<'static, Message> {
    stacked_list(OUTLETS.iter().map(|outlet| {
        let emphasis = if outlet.is_closed() {
            Emphasis::Danger
        } else {
            Emphasis::Normal
        };
        InfoRow::new(outlet.name, outlet.hours).emphasis(emphasis)
    }))
}

fn outlet_phones() -> Element<'static, Message> {
    let cards = OUTLET_PHONES
        .iter()
        .map(|contact| ContactCard::new(*contact, Message::Dial).tinted().view());

    column![
        hint(OUTLET_PHONES_HINT),
        column(cards).spacing(SPACING_SM),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn auto_drivers(width: f32) -> Element<'static, Message> {
    let chips = AUTO_DRIVERS
        .iter()
        .enumerate()
        .map(|(index, phone)| {
            button(
                column![
                    text((index + 1).to_string()).size(TEXT_SIZE_SM),
                    text(phone.as_str())
                        .size(TEXT_SIZE_SM)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.campus().link),
                        }),
                ]
                .spacing(SPACING_XS)
                .align_x(Alignment::Center),
            )
            .on_press(Message::Dial(*phone))
            .width(Length::Fill)
            .height(Length::Fixed(CHIP_HEIGHT))
            .style(|theme: &Theme, status| {
                let campus = theme.campus();
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => campus.surface_hover,
                    _ => campus.surface_header,
                };
                button::Style {
                    background: Some(background.into()),
                    text_color: theme.palette().text,
                    border: iced::Border {
                        radius: BORDER_RADIUS_MD.into(),
                        width: 1.0,
                        color: campus.border,
                    },
                    ..Default::default()
                }
            })
            .into()
        })
        .collect();

    column![
        hint(AUTO_DRIVERS_HINT),
        chip_grid(chips, chip_columns(width, CHIP_MIN_WIDTH)),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn wardens(width: f32) -> Element<'static, Message> {
    let cards = WARDEN_CONTACTS
        .iter()
        .map(|contact| ContactCard::new(*contact, Message::Dial).view())
        .collect();

    chip_grid(cards, warden_columns(width))
}

fn warden_columns(width: f32) -> usize {
    chip_columns(width, CONTACT_CARD_MIN_WIDTH).min(MAX_WARDEN_COLUMNS)
}

fn bus_212() -> Element<'static, Message> {
    let departures = |times: &'static [&'static str], section: Section| {
        let rows = times.iter().map(move |time| {
            row![
                accent_bar(section),
                lucide::clock_four().size(ICON_SIZE_SM),
                text(*time).size(TEXT_SIZE_BODY)
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
            .height(Length::Fixed(ROW_HEIGHT))
            .into()
        });
        container(column(rows).spacing(SPACING_SM))
            .height(Length::Fixed(stack_height(
                BUS_212.max_departures(),
                ROW_HEIGHT,
                SPACING_SM,
            )))
            .style(move |theme: &Theme| container::Style {
                text_color: Some(section.strong(theme)),
                ..Default::default()
            })
    };

    let from_campus = section_box(
        box_heading(
            lucide::map_pin(),
            format!("From {}", BUS_212.campus_stop),
            Section::Green,
        ),
        departures(BUS_212.from_campus, Section::Green),
        Section::Green,
    );
    let from_city = section_box(
        box_heading(
            lucide::map_pin(),
            format!("From {}", BUS_212.city_stop),
            Section::Blue,
        ),
        departures(BUS_212.from_city, Section::Blue),
        Section::Blue,
    );

    row![from_campus, from_city].spacing(SPACING_LG).into()
}

fn alternate_routes(width: f32) -> Element<'static, Message> {
    let note = section_box(
        box_heading(lucide::triangle_alert(), "Important Note", Section::Amber),
        text(ROUTES_NOTE)
            .size(TEXT_SIZE_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.campus().section_amber_strong),
            }),
        Section::Amber,
    );

    let pills = ALTERNATE_ROUTES.iter().map(|route| pill(route)).collect();
    let routes = container(
        column![
            text(ROUTES_HEADING).size(TEXT_SIZE_BODY),
            chip_grid(pills, route_columns(width)),
        ]
        .spacing(SPACING_SM),
    )
    .padding(BOX_PADDING)
    .width(Length::Fill)
    .style(container_inset);

    column![note, routes].spacing(SPACING_MD).into()
}

fn route_columns(width: f32) -> usize {
    chip_columns(boxed_width(width), PILL_MIN_WIDTH)
}

// =============================================================================
// SHARED PIECES
// =============================================================================

/// Tint of a section box.
#[derive(Debug, Clone, Copy)]
enum Section {
    Green,
    Blue,
    Amber,
}

impl Section {
    fn strong(self, theme: &Theme) -> iced::Color {
        let campus = theme.campus();
        match self {
            Self::Green => campus.section_green_strong,
            Self::Blue => campus.section_blue_strong,
            Self::Amber => campus.section_amber_strong,
        }
    }

    fn style(self, theme: &Theme) -> container::Style {
        let campus = theme.campus();
        match self {
            Self::Green => tinted_box(campus.section_green, campus.section_green_strong),
            Self::Blue => tinted_box(campus.section_blue, campus.section_blue_strong),
            Self::Amber => tinted_box(campus.section_amber, campus.section_amber_strong),
        }
    }
}

fn box_heading<'a>(
    icon: iced::widget::Text<'a>,
    title: impl text::IntoFragment<'a>,
    section: Section,
) -> Element<'a, Message> {
    container(
        row![icon.size(ICON_SIZE_SM), text(title).size(TEXT_SIZE_BODY)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .height(Length::Fixed(BOX_HEADING_HEIGHT))
    .align_y(Alignment::Center)
    .style(move |theme: &Theme| container::Style {
        text_color: Some(section.strong(theme)),
        ..Default::default()
    })
    .into()
}

fn section_box<'a>(
    heading: Element<'a, Message>,
    content: impl Into<Element<'a, Message>>,
    section: Section,
) -> Element<'a, Message> {
    container(column![heading, content.into()].spacing(SPACING_SM))
        .padding(BOX_PADDING)
        .width(Length::Fill)
        .style(move |theme: &Theme| section.style(theme))
        .into()
}

/// Leading accent edge of a schedule entry.
fn accent_bar(section: Section) -> Element<'static, Message> {
    container(Space::new())
        .width(Length::Fixed(BORDER_WIDTH_ACCENT))
        .height(Length::Fixed(ROW_HEIGHT))
        .style(move |theme: &Theme| container::Style {
            background: Some(section.strong(theme).into()),
            ..Default::default()
        })
        .into()
}

fn hint(content: &'static str) -> Element<'static, Message> {
    text(content)
        .size(TEXT_SIZE_SM)
        .width(Length::Fill)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.campus().text_secondary),
        })
        .into()
}

fn boxed_width(width: f32) -> f32 {
    (width - 2.0 * BOX_PADDING).max(0.0)
}

// =============================================================================
// MEASUREMENT
// =============================================================================

/// The body of one home-page panel, for measurement.
///
/// Extents include the body's bottom padding, i.e. they are the height the
/// panel's collapsible region needs to show the whole body.
pub struct PanelContent<'a> {
    id: PanelId,
    panels: &'a PanelSet,
    now: Instant,
}

impl<'a> PanelContent<'a> {
    pub fn new(id: PanelId, panels: &'a PanelSet, now: Instant) -> Self {
        Self { id, panels, now }
    }

    fn content_height(&self, width: f32) -> f32 {
        match self.id {
            PanelId::MessTimings => {
                let timings = boxed_height(
                    BOX_HEADING_HEIGHT + SPACING_SM + key_value_height(MESS_TIMINGS.len()),
                );
                let photo = PanelContent::new(PanelId::MenuPhoto, self.panels, self.now);
                let photo_body = self
                    .panels
                    .height_at(PanelId::MenuPhoto, self.now)
                    .resolve(photo.natural_extent(width));
                sections_height(&[timings, NESTED_HEADER_HEIGHT + photo_body], SPACING_MD)
            }
            PanelId::MenuPhoto => MENU_PHOTO_HEIGHT,
            PanelId::Outlets => stacked_height(OUTLETS.len()),
            PanelId::OutletPhones => sections_height(
                &[
                    paragraph_height(OUTLET_PHONES_HINT, TEXT_SIZE_SM, width),
                    stack_height(OUTLET_PHONES.len(), CONTACT_CARD_HEIGHT, SPACING_SM),
                ],
                SPACING_MD,
            ),
            PanelId::AutoDrivers => sections_height(
                &[
                    paragraph_height(AUTO_DRIVERS_HINT, TEXT_SIZE_SM, width),
                    grid_height(
                        AUTO_DRIVERS.len(),
                        chip_columns(width, CHIP_MIN_WIDTH),
                        CHIP_HEIGHT,
                    ),
                ],
                SPACING_MD,
            ),
            PanelId::Wardens => grid_height(
                WARDEN_CONTACTS.len(),
                warden_columns(width),
                CONTACT_CARD_HEIGHT,
            ),
            PanelId::Bus212 => boxed_height(
                BOX_HEADING_HEIGHT
                    + SPACING_SM
                    + stack_height(BUS_212.max_departures(), ROW_HEIGHT, SPACING_SM),
            ),
            PanelId::AlternateRoutes => {
                let inner = boxed_width(width);
                let note = boxed_height(
                    BOX_HEADING_HEIGHT
                        + SPACING_SM
                        + paragraph_height(ROUTES_NOTE, TEXT_SIZE_SM, inner),
                );
                let routes = boxed_height(
                    paragraph_height(ROUTES_HEADING, TEXT_SIZE_BODY, inner)
                        + SPACING_SM
                        + grid_height(ALTERNATE_ROUTES.len(), route_columns(width), PILL_HEIGHT),
                );
                sections_height(&[note, routes], SPACING_MD)
            }
        }
    }
}

impl Measure for PanelContent<'_> {
    fn natural_extent(&self, available_width: f32) -> f32 {
        let padding = if self.id.parent().is_some() {
            NESTED_BODY_PADDING
        } else {
            PANEL_BODY_PADDING
        };
        let width = if self.id.parent().is_some() {
            (available_width - 2.0 * NESTED_BODY_PADDING).max(0.0)
        } else {
            available_width
        };
        self.content_height(width) + padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_includes_bottom_padding() {
        let panels = PanelSet::new();
        let now = Instant::now();
        let extent = PanelContent::new(PanelId::Outlets, &panels, now).natural_extent(600.0);
        assert_eq!(extent, stacked_height(OUTLETS.len()) + PANEL_BODY_PADDING);
    }

    #[test]
    fn test_narrow_width_grows_auto_driver_grid() {
        let panels = PanelSet::new();
        let now = Instant::now();
        let content = PanelContent::new(PanelId::AutoDrivers, &panels, now);
        assert!(content.natural_extent(200.0) > content.natural_extent(800.0));
    }

    #[test]
    fn test_mess_timings_includes_open_menu_photo() {
        let mut panels = PanelSet::new();
        let now = Instant::now();
        let closed = PanelContent::new(PanelId::MessTimings, &panels, now).natural_extent(600.0);

        let settings = crate::state::AnimationSettings {
            duration_ms: 0,
            ..Default::default()
        };
        panels.toggle(PanelId::MenuPhoto, MENU_PHOTO_HEIGHT, now, &settings);
        let open = PanelContent::new(PanelId::MessTimings, &panels, now).natural_extent(600.0);

        assert!(open > closed);
    }

    #[test]
    fn test_every_panel_measures_positive() {
        let panels = PanelSet::new();
        let now = Instant::now();
        for id in PanelId::ALL {
            assert!(PanelContent::new(id, &panels, now).natural_extent(640.0) > 0.0);
        }
    }
}
