use glam::Vec2;
use ratatui::style::Color;

/// Fixed colors used by every scene
pub mod palette {
    use ratatui::style::Color;

    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const BLUE: Color = Color::Rgb(0, 100, 255);
    pub const GRAY: Color = Color::Rgb(50, 50, 50);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Large,
    Medium,
    Small,
}

/// Where a piece of text is pinned, in playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Center(Vec2),
    TopLeft(Vec2),
}

/// Primitive drawing target. Calls are fire-and-forget and painted in order.
pub trait Surface {
    /// Filled axis-aligned rectangle with its top-left corner at `pos`
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_text(&mut self, text: &str, size: TextSize, color: Color, anchor: Anchor);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        size: TextSize,
        color: Color,
        anchor: Anchor,
    },
}

/// Records draw calls for one frame so they can be presented in a single pass
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every text string in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { pos, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, size: TextSize, color: Color, anchor: Anchor) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            size,
            color,
            anchor,
        });
    }
}
