use glam::Vec2;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Painter, Shape},
};

use super::scene::GameRenderer;
use super::surface::{Anchor, DisplayList, DrawCommand, TextSize, palette};

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// The part of the terminal showing the playfield, letterboxed to keep its
/// aspect ratio. Maps terminal cells to playfield coordinates and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    bounds: Vec2,
}

impl Viewport {
    pub fn fit(screen: Rect, bounds: Vec2) -> Self {
        // Columns per row that keep the playfield undistorted
        let ratio = bounds.x / bounds.y * CELL_ASPECT;

        let (width, height) = if screen.height == 0 || screen.width == 0 {
            (0, 0)
        } else if screen.width as f32 / screen.height as f32 > ratio {
            let width = (screen.height as f32 * ratio).round() as u16;
            (width.min(screen.width), screen.height)
        } else {
            let height = (screen.width as f32 / ratio).round() as u16;
            (screen.width, height.min(screen.height))
        };

        let area = Rect {
            x: screen.x + (screen.width - width) / 2,
            y: screen.y + (screen.height - height) / 2,
            width,
            height,
        };

        Self { area, bounds }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Playfield units covered by one terminal cell
    pub fn cell_size(&self) -> Vec2 {
        if self.area.is_empty() {
            return self.bounds;
        }
        self.bounds / Vec2::new(self.area.width as f32, self.area.height as f32)
    }

    /// Playfield point under the center of a terminal cell.
    /// Cells outside the viewport snap to its nearest edge.
    pub fn to_world(&self, column: u16, row: u16) -> Vec2 {
        if self.area.is_empty() {
            return self.bounds / 2.0;
        }

        let col = column.clamp(self.area.left(), self.area.right() - 1) - self.area.x;
        let row = row.clamp(self.area.top(), self.area.bottom() - 1) - self.area.y;
        (Vec2::new(col as f32, row as f32) + 0.5) * self.cell_size()
    }
}

impl GameRenderer {
    /// Presents a composed frame on a half-block canvas inside the viewport
    pub fn draw(&self, frame: &mut Frame, viewport: &Viewport, display: &DisplayList) {
        let bounds = viewport.bounds();
        let cell = viewport.cell_size();
        // Half-block pixels are one column wide and half a row tall
        let sample_step = (cell.x.min(cell.y / 2.0) / 2.0).max(0.1);

        let canvas = Canvas::default()
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, bounds.x as f64])
            .y_bounds([0.0, bounds.y as f64])
            .background_color(palette::BLACK)
            .paint(|ctx| {
                for command in display.commands() {
                    match command {
                        DrawCommand::Rect { pos, size, color } => {
                            if let Some(rect) = FilledRect::clipped(*pos, *size, bounds, *color) {
                                ctx.draw(&rect);
                            }
                        }
                        DrawCommand::Circle {
                            center,
                            radius,
                            color,
                        } => {
                            let (x, y) = to_canvas(*center, bounds);
                            ctx.draw(&FilledCircle {
                                x,
                                y,
                                radius: *radius as f64,
                                step: sample_step as f64,
                                color: *color,
                            });
                        }
                        DrawCommand::Text {
                            text,
                            size,
                            color,
                            anchor,
                        } => {
                            let text = styled_text(text, *size);
                            let origin = text_origin(*anchor, text.chars().count(), cell, bounds);
                            let (x, y) = to_canvas(origin, bounds);
                            ctx.print(x, y, text_line(text, *size, *color));
                        }
                    }
                }
            });

        frame.render_widget(canvas, viewport.area);
    }
}

/// Playfield y grows downward, canvas y grows upward
fn to_canvas(point: Vec2, bounds: Vec2) -> (f64, f64) {
    (point.x as f64, (bounds.y - point.y) as f64)
}

/// Large text is spaced out to stand apart from the rest
fn styled_text(text: &str, size: TextSize) -> String {
    match size {
        TextSize::Large => text
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        TextSize::Medium | TextSize::Small => text.to_string(),
    }
}

fn text_line(text: String, size: TextSize, color: Color) -> Line<'static> {
    let style = Style::default().fg(color);
    let style = match size {
        TextSize::Large | TextSize::Medium => style.add_modifier(Modifier::BOLD),
        TextSize::Small => style,
    };
    Line::styled(text, style)
}

/// Top-left playfield point where the first character goes
fn text_origin(anchor: Anchor, chars: usize, cell: Vec2, bounds: Vec2) -> Vec2 {
    let origin = match anchor {
        Anchor::TopLeft(point) => point,
        Anchor::Center(point) => point - Vec2::new(chars as f32 * cell.x / 2.0, 0.0),
    };
    origin.clamp(Vec2::ZERO, bounds)
}

/// Solid rectangle in canvas coordinates
struct FilledRect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    color: Color,
}

impl FilledRect {
    /// Clips a playfield rectangle to the canvas; `None` if nothing is visible
    fn clipped(pos: Vec2, size: Vec2, bounds: Vec2, color: Color) -> Option<Self> {
        let min = pos.max(Vec2::ZERO);
        let max = (pos + size).min(bounds);
        if min.x >= max.x || min.y >= max.y {
            return None;
        }

        let (left, top) = to_canvas(min, bounds);
        let (right, bottom) = to_canvas(max, bounds);
        Some(Self {
            left,
            top,
            right,
            bottom,
            color,
        })
    }
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        let (Some((x0, y0)), Some((x1, y1))) = (
            painter.get_point(self.left, self.top),
            painter.get_point(self.right, self.bottom),
        ) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                painter.paint(x, y, self.color);
            }
        }
    }
}

/// Solid disc in canvas coordinates, painted by sampling its area
struct FilledCircle {
    x: f64,
    y: f64,
    radius: f64,
    step: f64,
    color: Color,
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter) {
        let steps = (2.0 * self.radius / self.step).ceil() as i32;
        let r2 = self.radius * self.radius;

        for i in 0..=steps {
            let dx = -self.radius + i as f64 * self.step;
            for j in 0..=steps {
                let dy = -self.radius + j as f64 * self.step;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                if let Some((x, y)) = painter.get_point(self.x + dx, self.y + dy) {
                    painter.paint(x, y, self.color);
                }
            }
        }
    }
}
