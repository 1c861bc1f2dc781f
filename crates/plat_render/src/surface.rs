//! The presentation boundary. The simulation describes a frame as an ordered
//! list of primitive draw commands; whatever owns the window (canvas, GPU,
//! terminal) replays them. Later commands paint over earlier ones.

use glam::Vec2;
use plat_core::geometry::Aabb;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::rgb(0.0, 0.502, 0.0);
    pub const DARK_GREEN: Color = Color::rgb(0.0, 0.392, 0.0);
    pub const LIGHT_GREEN: Color = Color::rgb(0.565, 0.933, 0.565);
    pub const LIGHT_BLUE: Color = Color::rgb(0.678, 0.847, 0.902);
    pub const ORANGE: Color = Color::rgb(1.0, 0.647, 0.0);
    pub const DARK_ORANGE: Color = Color::rgb(1.0, 0.549, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const GOLD: Color = Color::rgb(1.0, 0.843, 0.0);
    pub const BROWN: Color = Color::rgb(0.647, 0.165, 0.165);
    pub const BEIGE: Color = Color::rgb(0.961, 0.961, 0.863);
    pub const PEACH_PUFF: Color = Color::rgb(1.0, 0.855, 0.725);
    pub const GRAY: Color = Color::rgb(0.502, 0.502, 0.502);
    pub const DARK_GRAY: Color = Color::rgb(0.663, 0.663, 0.663);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect { rect: Aabb, color: Color },
    StrokeRect { rect: Aabb, color: Color },
    /// Ellipse inscribed in `rect`.
    FillEllipse { rect: Aabb, color: Color },
    Line { from: Vec2, to: Vec2, color: Color },
    /// `pos` is the text baseline origin.
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
    },
}

impl DrawCommand {
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        let shift = Vec2::new(dx, dy);
        match self {
            Self::FillRect { rect, color } => Self::FillRect {
                rect: rect.translated(dx, dy),
                color,
            },
            Self::StrokeRect { rect, color } => Self::StrokeRect {
                rect: rect.translated(dx, dy),
                color,
            },
            Self::FillEllipse { rect, color } => Self::FillEllipse {
                rect: rect.translated(dx, dy),
                color,
            },
            Self::Line { from, to, color } => Self::Line {
                from: from + shift,
                to: to + shift,
                color,
            },
            Self::Text {
                pos,
                text,
                size,
                color,
            } => Self::Text {
                pos: pos + shift,
                text,
                size,
                color,
            },
        }
    }
}

/// Anything that can accept draw primitives.
pub trait RenderSurface {
    fn draw(&mut self, command: DrawCommand);

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.draw(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Aabb, color: Color) {
        self.draw(DrawCommand::StrokeRect { rect, color });
    }

    fn fill_ellipse(&mut self, rect: Aabb, color: Color) {
        self.draw(DrawCommand::FillEllipse { rect, color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.draw(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Color) {
        self.draw(DrawCommand::Text {
            pos,
            text: text.to_string(),
            size,
            color,
        });
    }
}

/// Records commands in submission order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderSurface for DrawList {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Shifts every command by a fixed offset before forwarding it, e.g. to move
/// world-space geometry into camera space.
pub struct Translated<'a, S: RenderSurface + ?Sized> {
    inner: &'a mut S,
    dx: f32,
    dy: f32,
}

impl<'a, S: RenderSurface + ?Sized> Translated<'a, S> {
    pub fn new(inner: &'a mut S, dx: f32, dy: f32) -> Self {
        Self { inner, dx, dy }
    }
}

impl<S: RenderSurface + ?Sized> RenderSurface for Translated<'_, S> {
    fn draw(&mut self, command: DrawCommand) {
        self.inner.draw(command.translated(self.dx, self.dy));
    }
}
