//! Map canvas.
//!
//! Draws the cached tiles of a [`MapViewport`] and a marker at the selected
//! coordinate. Tiles that are still loading or failed stay blank. The drawn
//! geometry is cached in the `canvas::Cache` owned by the map state and is
//! rebuilt only when that cache is cleared or the widget size changes.
//!
//! Input: dragging with the left button pans, the wheel zooms, and a click
//! on the marker toggles its name card. A click anywhere else hides it.

use iced::mouse;
use iced::widget::canvas::{Frame, Path, Stroke};
use iced::widget::{canvas, container, image};
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme};

use campus_map::{MapViewport, PlacedTile, TileCache};
use campus_model::GeoPoint;

use crate::message::{MapMessage, Message};
use crate::theme::{BORDER_RADIUS_MD, CampusColors, MAP_HEIGHT};

/// Marker radius in pixels.
const MARKER_RADIUS: f32 = 9.0;

/// Extra pixels around the marker that still count as a hit.
const MARKER_HIT_SLOP: f32 = 4.0;

/// Cursor travel before a press becomes a drag instead of a click.
const DRAG_THRESHOLD: f32 = 4.0;

/// Trackpad scroll distance per zoom level.
const PIXELS_PER_ZOOM_STEP: f32 = 60.0;

/// Tiled map with a location marker.
pub struct MapCanvas<'a> {
    viewport: &'a MapViewport,
    tiles: &'a TileCache<image::Handle>,
    cache: &'a canvas::Cache,
    marker: GeoPoint,
}

/// Pointer state between canvas events.
#[derive(Debug, Default)]
pub struct Gesture {
    drag: Option<Drag>,
    /// Unspent trackpad scroll, in pixels.
    scroll: f32,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    start: Point,
    last: Point,
    moved: bool,
}

impl Gesture {
    fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|drag| drag.moved)
    }

    /// Whole zoom steps for a wheel movement. Line deltas zoom one level
    /// per event; pixel deltas accumulate.
    fn zoom_steps(&mut self, delta: mouse::ScrollDelta) -> i8 {
        match delta {
            mouse::ScrollDelta::Lines { y, .. } => {
                if y > 0.0 {
                    1
                } else if y < 0.0 {
                    -1
                } else {
                    0
                }
            }
            mouse::ScrollDelta::Pixels { y, .. } => {
                self.scroll += y;
                let steps = (self.scroll / PIXELS_PER_ZOOM_STEP).trunc();
                self.scroll -= steps * PIXELS_PER_ZOOM_STEP;
                steps.clamp(f32::from(i8::MIN), f32::from(i8::MAX)) as i8
            }
        }
    }
}

impl<'a> MapCanvas<'a> {
    pub fn new(
        viewport: &'a MapViewport,
        tiles: &'a TileCache<image::Handle>,
        cache: &'a canvas::Cache,
        marker: GeoPoint,
    ) -> Self {
        Self {
            viewport,
            tiles,
            cache,
            marker,
        }
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, Message> {
        container(
            canvas(self)
                .width(Length::Fill)
                .height(Length::Fixed(MAP_HEIGHT)),
        )
        .width(Length::Fill)
        .clip(true)
        .style(|theme: &Theme| container::Style {
            border: iced::Border {
                radius: BORDER_RADIUS_MD.into(),
                width: 1.0,
                color: theme.campus().border,
            },
            ..Default::default()
        })
        .into()
    }

    /// Where the marker sits inside `bounds`.
    fn marker_position(&self, bounds: Rectangle) -> Point {
        let at = self
            .viewport
            .with_size(bounds.width, bounds.height)
            .project(self.marker);
        Point::new(at.x, at.y)
    }

    fn hits_marker(&self, bounds: Rectangle, position: Point) -> bool {
        self.marker_position(bounds).distance(position) <= MARKER_RADIUS + MARKER_HIT_SLOP
    }

    fn draw_tile(&self, frame: &mut Frame, placed: &PlacedTile) {
        if let Some(handle) = self.tiles.ready(&placed.tile) {
            let bounds = Rectangle::new(
                Point::new(placed.x, placed.y),
                Size::new(PlacedTile::SIZE, PlacedTile::SIZE),
            );
            frame.draw_image(bounds, canvas::Image::new(handle.clone()));
        }
    }
}

impl canvas::Program<Message> for MapCanvas<'_> {
    type State = Gesture;

    fn update(
        &self,
        gesture: &mut Gesture,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let canvas::Event::Mouse(event) = event else {
            return None;
        };

        match *event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = cursor.position_over(bounds)?;
                gesture.drag = Some(Drag {
                    start: position,
                    last: position,
                    moved: false,
                });
                Some(canvas::Action::capture())
            }

            mouse::Event::CursorMoved { position } => {
                let drag = gesture.drag.as_mut()?;
                if !drag.moved {
                    if position.distance(drag.start) < DRAG_THRESHOLD {
                        return Some(canvas::Action::capture());
                    }
                    drag.moved = true;
                }
                let delta = position - drag.last;
                drag.last = position;
                Some(
                    canvas::Action::publish(Message::Map(MapMessage::Pan {
                        dx: delta.x,
                        dy: delta.y,
                    }))
                    .and_capture(),
                )
            }

            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                let drag = gesture.drag.take()?;
                if drag.moved {
                    return Some(canvas::Action::capture());
                }
                let position = cursor.position_in(bounds)?;
                let message = if self.hits_marker(bounds, position) {
                    MapMessage::ToggleMarkerPopup
                } else {
                    MapMessage::CloseMarkerPopup
                };
                Some(canvas::Action::publish(Message::Map(message)).and_capture())
            }

            mouse::Event::WheelScrolled { delta } => {
                if !cursor.is_over(bounds) {
                    return None;
                }
                let steps = gesture.zoom_steps(delta);
                if steps == 0 {
                    return Some(canvas::Action::capture());
                }
                Some(
                    canvas::Action::publish(Message::Map(MapMessage::Zoom(steps)))
                        .and_capture(),
                )
            }

            _ => None,
        }
    }

    fn draw(
        &self,
        _gesture: &Gesture,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let campus = theme.campus();
            let palette = theme.palette();

            frame.fill_rectangle(Point::ORIGIN, frame.size(), campus.surface_hover);

            // Place tiles against the real widget size, not the size last
            // reported to the state.
            let viewport = self.viewport.with_size(bounds.width, bounds.height);
            for placed in viewport.visible_tiles() {
                self.draw_tile(frame, &placed);
            }

            let marker = Path::circle(self.marker_position(bounds), MARKER_RADIUS);
            frame.fill(&marker, palette.danger);
            frame.stroke(
                &marker,
                Stroke::default()
                    .with_color(campus.text_on_accent)
                    .with_width(2.5),
            );
        });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        gesture: &Gesture,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if gesture.is_dragging() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if self.hits_marker(bounds, position) => mouse::Interaction::Pointer,
            Some(_) => mouse::Interaction::Grab,
            None => mouse::Interaction::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_lines_zoom_one_level() {
        let mut gesture = Gesture::default();
        assert_eq!(
            gesture.zoom_steps(mouse::ScrollDelta::Lines { x: 0.0, y: 3.0 }),
            1
        );
        assert_eq!(
            gesture.zoom_steps(mouse::ScrollDelta::Lines { x: 0.0, y: -0.5 }),
            -1
        );
        assert_eq!(
            gesture.zoom_steps(mouse::ScrollDelta::Lines { x: 2.0, y: 0.0 }),
            0
        );
    }

    #[test]
    fn test_trackpad_scroll_accumulates() {
        let mut gesture = Gesture::default();
        let pixels = |y| mouse::ScrollDelta::Pixels { x: 0.0, y };

        assert_eq!(gesture.zoom_steps(pixels(40.0)), 0);
        assert_eq!(gesture.zoom_steps(pixels(40.0)), 1);
        assert_eq!(gesture.zoom_steps(pixels(-30.0)), 0);
        assert_eq!(gesture.zoom_steps(pixels(-130.0)), -2);
    }
}
