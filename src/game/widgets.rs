//=========================================================================
// Widgets
//=========================================================================
//
// Small screen-fixed UI pieces built from display primitives.
//
//=========================================================================

use crate::core::display::{DisplayList, DrawSurface, RectSpec, TextSpec, VisualHandle};
use crate::core::input::{MouseButton, StateTracker};

use super::config::{ACCENT, ACCENT_HOVER, PANEL, PANEL_HOVER};

//=== Button ==============================================================

/// Clickable panel with an accent outline and a centred label. Recolors
/// while hovered.
#[derive(Debug)]
pub struct Button {
    bounds: RectSpec,
    border: VisualHandle,
    background: VisualHandle,
    label: VisualHandle,
    hovered: bool,
}

impl Button {
    /// Creates the button's visuals. The outline is a slightly larger rect
    /// created first at the same depth, so the background paints over its
    /// middle; the label sits one depth above.
    pub fn spawn(
        display: &mut DisplayList,
        x: f32,
        y: f32,
        size: (f32, f32),
        text: &str,
        font_size: u32,
        depth: i32,
    ) -> Self {
        let bounds = RectSpec::new(x, y, size.0, size.1)
            .with_fill(PANEL)
            .with_depth(depth)
            .fixed();
        let border = display.create_rect(
            RectSpec::new(x, y, size.0 + 4.0, size.1 + 4.0)
                .with_fill(ACCENT)
                .with_depth(depth)
                .fixed(),
        );
        let background = display.create_rect(bounds.clone());
        let label = display.create_text(
            TextSpec::new(x, y, text)
                .with_font_size(font_size)
                .with_color(ACCENT)
                .bold()
                .monospace()
                .with_depth(depth + 1)
                .fixed(),
        );

        Self {
            bounds,
            border,
            background,
            label,
            hovered: false,
        }
    }

    /// Tracks the cursor and recolors on enter / leave.
    pub fn update_hover(&mut self, display: &mut DisplayList, cursor: (f32, f32)) {
        let hovered = self.bounds.contains(cursor.0, cursor.1);
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;

        let (fill, accent) = if hovered {
            (PANEL_HOVER, ACCENT_HOVER)
        } else {
            (PANEL, ACCENT)
        };
        display.set_fill(self.background, fill);
        display.set_fill(self.border, accent);
        display.set_text_color(self.label, accent);
    }

    /// Left button went down over the button this tick.
    pub fn clicked(&self, input: &StateTracker) -> bool {
        let (x, y) = input.mouse_position();
        self.bounds.contains(x, y) && input.is_button_pressed(MouseButton::Left)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn destroy(self, display: &mut DisplayList) {
        display.destroy(self.border);
        display.destroy(self.background);
        display.destroy(self.label);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::Visual;
    use crate::core::input::{InputEvent, Modifiers};

    fn button(display: &mut DisplayList) -> Button {
        Button::spawn(display, 100.0, 100.0, (200.0, 50.0), "GO", 20, 10)
    }

    #[test]
    fn hover_recolors_background_and_label() {
        let mut display = DisplayList::new();
        let mut button = button(&mut display);

        button.update_hover(&mut display, (110.0, 90.0));
        assert!(button.is_hovered());
        match display.get(button.background) {
            Some(Visual::Rect(rect)) => assert_eq!(rect.fill, PANEL_HOVER),
            other => panic!("expected rect, got {:?}", other),
        }
        match display.get(button.border) {
            Some(Visual::Rect(rect)) => assert_eq!(rect.fill, ACCENT_HOVER),
            other => panic!("expected rect, got {:?}", other),
        }
        match display.get(button.label) {
            Some(Visual::Text(text)) => assert_eq!(text.color, ACCENT_HOVER),
            other => panic!("expected text, got {:?}", other),
        }

        button.update_hover(&mut display, (500.0, 500.0));
        assert!(!button.is_hovered());
        match display.get(button.background) {
            Some(Visual::Rect(rect)) => assert_eq!(rect.fill, PANEL),
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn click_requires_press_inside() {
        let mut display = DisplayList::new();
        let button = button(&mut display);
        let mut input = StateTracker::new();

        input.begin_frame();
        input.process_events(&[
            InputEvent::MouseMoved { x: 300.0, y: 100.0 },
            InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::NONE },
        ]);
        assert!(!button.clicked(&input));

        input.begin_frame();
        input.process_events(&[InputEvent::MouseMoved { x: 150.0, y: 110.0 }]);
        assert!(!button.clicked(&input), "held button is not a new click");

        input.begin_frame();
        input.process_events(&[
            InputEvent::MouseButtonUp { button: MouseButton::Left, modifiers: Modifiers::NONE },
            InputEvent::MouseButtonDown { button: MouseButton::Left, modifiers: Modifiers::NONE },
        ]);
        assert!(button.clicked(&input));
    }

    #[test]
    fn outline_paints_under_background() {
        let mut display = DisplayList::new();
        let button = button(&mut display);

        let order: Vec<_> = display.iter_by_depth().into_iter().map(|(h, _)| h).collect();
        assert_eq!(order, vec![button.border, button.background, button.label]);
    }

    #[test]
    fn destroy_removes_every_visual() {
        let mut display = DisplayList::new();
        let button = button(&mut display);
        assert_eq!(display.len(), 3);

        button.destroy(&mut display);
        assert!(display.is_empty());
    }
}
