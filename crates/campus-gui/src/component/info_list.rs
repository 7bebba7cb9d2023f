//! Data-driven list and grid helpers.
//!
//! Every row and cell here has a fixed height so a list's natural extent can
//! be computed from its length without laying it out. The `*_height`
//! functions return exactly what the matching builder renders.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::component::{key_value_list, chip_grid, chip_columns};
//!
//! key_value_list(MESS_TIMINGS.iter().map(|slot| InfoRow::new(slot.meal, slot.hours)))
//!
//! let columns = chip_columns(width, CHIP_MIN_WIDTH);
//! chip_grid(chips, columns)
//! ```

use iced::widget::{Space, column, container, row, space, text};
use iced::{Alignment, Border, Element, Length, Theme};

use crate::theme::{
    BORDER_RADIUS_FULL, CampusColors, SPACING_MD, SPACING_SM, TEXT_SIZE_BODY, TEXT_SIZE_SM,
};

/// Height of a single-line label/value row.
pub const ROW_HEIGHT: f32 = 32.0;

/// Height of a two-line row (name above value).
pub const STACKED_ROW_HEIGHT: f32 = 44.0;

/// Height of a chip in a [`chip_grid`].
pub const CHIP_HEIGHT: f32 = 56.0;

/// Narrowest a phone chip may get before the grid drops a column.
pub const CHIP_MIN_WIDTH: f32 = 150.0;

/// Narrowest a route pill cell may get.
pub const PILL_MIN_WIDTH: f32 = 88.0;

/// Height of a route pill cell.
pub const PILL_HEIGHT: f32 = 32.0;

/// Most columns any grid uses.
pub const MAX_GRID_COLUMNS: usize = 6;

/// Line height multiplier used to estimate wrapped paragraphs.
const LINE_HEIGHT: f32 = 1.3;

/// Average glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.52;

// =============================================================================
// ROWS
// =============================================================================

/// How a value should stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Normal,
    /// Rendered in the danger color (e.g., closed outlets).
    Danger,
}

/// One label/value row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoRow<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub emphasis: Emphasis,
}

impl<'a> InfoRow<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            emphasis: Emphasis::Normal,
        }
    }

    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }
}

fn value_text<'a, M: 'a>(value: &'a str, emphasis: Emphasis) -> Element<'a, M> {
    text(value)
        .size(TEXT_SIZE_BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(match emphasis {
                Emphasis::Normal => theme.campus().text_secondary,
                Emphasis::Danger => theme.palette().danger,
            }),
        })
        .into()
}

/// Rows with the label on the left and the value on the right.
pub fn key_value_list<'a, M: 'a>(rows: impl IntoIterator<Item = InfoRow<'a>>) -> Element<'a, M> {
    column(rows.into_iter().map(|info| {
        row![
            text(info.label).size(TEXT_SIZE_BODY),
            space::horizontal(),
            value_text(info.value, info.emphasis),
        ]
        .align_y(Alignment::Center)
        .height(Length::Fixed(ROW_HEIGHT))
        .into()
    }))
    .spacing(SPACING_SM)
    .width(Length::Fill)
    .into()
}

/// Rows with the label above the value.
pub fn stacked_list<'a, M: 'a>(rows: impl IntoIterator<Item = InfoRow<'a>>) -> Element<'a, M> {
    column(rows.into_iter().map(|info| {
        column![
            text(info.label).size(TEXT_SIZE_BODY),
            value_text(info.value, info.emphasis),
        ]
        .height(Length::Fixed(STACKED_ROW_HEIGHT))
        .into()
    }))
    .spacing(SPACING_SM)
    .width(Length::Fill)
    .into()
}

// =============================================================================
// GRIDS
// =============================================================================

/// Number of grid columns that fit `width` with cells at least `min_width`.
pub fn chip_columns(width: f32, min_width: f32) -> usize {
    let slot = min_width + SPACING_SM;
    let fit = ((width + SPACING_SM) / slot).floor();
    if fit.is_finite() && fit >= 1.0 {
        (fit as usize).min(MAX_GRID_COLUMNS)
    } else {
        1
    }
}

/// Rows needed for `count` cells in `columns` columns.
pub fn grid_rows(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

/// Cells laid out left to right in rows of `columns`.
///
/// The last row is padded so every cell keeps the same width.
pub fn chip_grid<'a, M: 'a>(cells: Vec<Element<'a, M>>, columns: usize) -> Element<'a, M> {
    let columns = columns.max(1);
    let mut grid = column![].spacing(SPACING_SM).width(Length::Fill);
    let mut cells = cells.into_iter().peekable();

    while cells.peek().is_some() {
        let mut line = row![].spacing(SPACING_SM).width(Length::Fill);
        for _ in 0..columns {
            line = match cells.next() {
                Some(cell) => line.push(container(cell).width(Length::FillPortion(1))),
                None => line.push(Space::new().width(Length::FillPortion(1))),
            };
        }
        grid = grid.push(line);
    }

    grid.into()
}

/// A rounded route badge.
pub fn pill<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(
        container(text(label).size(TEXT_SIZE_SM))
            .padding([4.0, 12.0])
            .style(|theme: &Theme| {
                let campus = theme.campus();
                container::Style {
                    background: Some(campus.section_blue.into()),
                    text_color: Some(campus.section_blue_strong),
                    border: Border {
                        radius: BORDER_RADIUS_FULL.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }),
    )
    .height(Length::Fixed(PILL_HEIGHT))
    .align_y(Alignment::Center)
    .into()
}

// =============================================================================
// HEIGHTS
// =============================================================================

/// Height of `count` fixed-height items separated by `spacing`.
pub fn stack_height(count: usize, item: f32, spacing: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * item + (count - 1) as f32 * spacing
}

/// Sum of `sections` separated by `spacing`.
pub fn sections_height(sections: &[f32], spacing: f32) -> f32 {
    let total: f32 = sections.iter().sum();
    total + sections.len().saturating_sub(1) as f32 * spacing
}

/// Height of [`key_value_list`] with `count` rows.
pub fn key_value_height(count: usize) -> f32 {
    stack_height(count, ROW_HEIGHT, SPACING_SM)
}

/// Height of [`stacked_list`] with `count` rows.
pub fn stacked_height(count: usize) -> f32 {
    stack_height(count, STACKED_ROW_HEIGHT, SPACING_SM)
}

/// Height of a grid of `count` cells of height `cell`.
pub fn grid_height(count: usize, columns: usize, cell: f32) -> f32 {
    stack_height(grid_rows(count, columns), cell, SPACING_SM)
}

/// Estimated height of a wrapped paragraph.
pub fn paragraph_height(content: &str, size: f32, width: f32) -> f32 {
    let per_line = (width / (size * GLYPH_WIDTH)).floor().max(1.0);
    let lines = (content.chars().count() as f32 / per_line).ceil().max(1.0);
    lines * size * LINE_HEIGHT
}

/// Padding inside tinted boxes.
pub const BOX_PADDING: f32 = SPACING_MD;

/// Height of a tinted box around content of height `inner`.
pub fn boxed_height(inner: f32) -> f32 {
    inner + 2.0 * BOX_PADDING
}
