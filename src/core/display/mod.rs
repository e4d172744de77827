//=========================================================================
// Display
//=========================================================================
//
// Retained 2D visuals: rectangles and text labels.
//
// Architecture:
//   DrawSurface (capability) ◄── DisplayList (retained store)
//        ▲                              │
//   QteManager, widgets           iter_by_depth() → renderer
//
// Coordinates are in world pixels. Elements marked `fixed` ignore the
// camera scroll and stay put on screen.
//
//=========================================================================

//=== Module Declarations =================================================

mod display_list;

//=== Public API ==========================================================

pub use display_list::DisplayList;

//=== VisualHandle ========================================================

/// Ownership handle for a created visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(pub(crate) u64);

//=== Color ===============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::from_hex(0x000000);
    pub const WHITE: Self = Self::from_hex(0xffffff);

    /// Builds a color from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

//=== Origin ==============================================================

/// Anchor point of an element, as a fraction of its size.
/// `(0, 0)` is the top-left corner, `(0.5, 0.5)` the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Origin {
    pub const TOP_LEFT: Self = Self::new(0.0, 0.0);
    pub const CENTER: Self = Self::new(0.5, 0.5);
    pub const LEFT_CENTER: Self = Self::new(0.0, 0.5);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::CENTER
    }
}

//=== RectSpec ============================================================

/// A filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub origin: Origin,
    pub fill: Color,
    pub alpha: f32,
    pub depth: i32,
    pub fixed: bool,
}

impl RectSpec {
    /// Centred white rectangle at depth 0.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            origin: Origin::CENTER,
            fill: Color::WHITE,
            alpha: 1.0,
            depth: 0,
            fixed: false,
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    /// Pins the rectangle to the screen.
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Top-left corner after applying the origin.
    pub fn top_left(&self) -> (f32, f32) {
        (
            self.x - self.width * self.origin.x,
            self.y - self.height * self.origin.y,
        )
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        let (left, top) = self.top_left();
        px >= left && px <= left + self.width && py >= top && py <= top + self.height
    }
}

//=== TextSpec ============================================================

/// A single-line text label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub x: f32,
    pub y: f32,
    pub content: String,
    pub font_size: u32,
    pub color: Color,
    pub bold: bool,
    pub monospace: bool,
    pub origin: Origin,
    pub depth: i32,
    pub fixed: bool,
}

impl TextSpec {
    /// Centred 16 px white text at depth 0.
    pub fn new(x: f32, y: f32, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            font_size: 16,
            color: Color::WHITE,
            bold: false,
            monospace: false,
            origin: Origin::CENTER,
            depth: 0,
            fixed: false,
        }
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }
}

//=== Visual ==============================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    Rect(RectSpec),
    Text(TextSpec),
}

impl Visual {
    pub fn depth(&self) -> i32 {
        match self {
            Visual::Rect(rect) => rect.depth,
            Visual::Text(text) => text.depth,
        }
    }

    pub fn is_fixed(&self) -> bool {
        match self {
            Visual::Rect(rect) => rect.fixed,
            Visual::Text(text) => text.fixed,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        match self {
            Visual::Rect(rect) => (rect.x, rect.y),
            Visual::Text(text) => (text.x, text.y),
        }
    }
}

//=== DrawSurface Trait ===================================================

/// Drawing capability: create, update and destroy visuals.
///
/// Updates and destroys on unknown handles return `false`. Destroying
/// the same handle twice is harmless.
pub trait DrawSurface {
    fn create_rect(&mut self, spec: RectSpec) -> VisualHandle;

    fn create_text(&mut self, spec: TextSpec) -> VisualHandle;

    /// Changes a rectangle's width. Position and origin are untouched.
    fn set_rect_width(&mut self, handle: VisualHandle, width: f32) -> bool;

    fn set_position(&mut self, handle: VisualHandle, x: f32, y: f32) -> bool;

    fn destroy(&mut self, handle: VisualHandle) -> bool;
}

//=========================================================================
// Unit Tests
//=========================================================================
