use crate::{
    foundation::core::{Point, Vec2},
    view::viewport::{Viewport, ViewportConfig},
};

/// Keyboard keys the canvas reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ZoomIn,
    ZoomOut,
}

impl Key {
    /// Map a DOM-style key name. Unknown keys map to `None`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "+" | "=" => Some(Key::ZoomIn),
            "-" => Some(Key::ZoomOut),
            _ => None,
        }
    }
}

/// On-screen navigation buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavButton {
    Left,
    Up,
    Down,
    Right,
    ZoomIn,
    ZoomOut,
}

/// Raw input delivered to the canvas surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,
    Wheel { delta_y: f64 },
    Key(Key),
    Button(NavButton),
}

/// Pointer drag state.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is held down; `last` is the previous pointer position.
    Dragging { last: Point },
}

/// Applies input events to a [`Viewport`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportController {
    pub viewport: Viewport,
    pub config: ViewportConfig,
    pub drag: DragState,
}

impl ViewportController {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            viewport: Viewport::default(),
            config,
            drag: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(p) => self.drag = DragState::Dragging { last: p },
            InputEvent::PointerMove(p) => {
                if let DragState::Dragging { last } = self.drag {
                    self.viewport.apply_pan(p - last);
                    self.drag = DragState::Dragging { last: p };
                }
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => self.drag = DragState::Idle,
            InputEvent::Wheel { delta_y } => {
                let delta = -delta_y * self.config.wheel_zoom_factor;
                self.viewport.apply_zoom_delta(delta, &self.config);
            }
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Button(button) => self.handle_button(button),
        }
    }

    fn handle_key(&mut self, key: Key) {
        let step = self.config.pan_step;
        match key {
            Key::ArrowUp => self.viewport.apply_pan(Vec2::new(0.0, step)),
            Key::ArrowDown => self.viewport.apply_pan(Vec2::new(0.0, -step)),
            Key::ArrowLeft => self.viewport.apply_pan(Vec2::new(step, 0.0)),
            Key::ArrowRight => self.viewport.apply_pan(Vec2::new(-step, 0.0)),
            Key::ZoomIn => self
                .viewport
                .apply_zoom_delta(self.config.key_zoom_step, &self.config),
            Key::ZoomOut => self
                .viewport
                .apply_zoom_delta(-self.config.key_zoom_step, &self.config),
        }
    }

    // Pan buttons mirror the arrow keys; zoom buttons use their own step.
    fn handle_button(&mut self, button: NavButton) {
        match button {
            NavButton::Left => self.handle_key(Key::ArrowLeft),
            NavButton::Up => self.handle_key(Key::ArrowUp),
            NavButton::Down => self.handle_key(Key::ArrowDown),
            NavButton::Right => self.handle_key(Key::ArrowRight),
            NavButton::ZoomIn => self
                .viewport
                .apply_zoom_delta(self.config.button_zoom_step, &self.config),
            NavButton::ZoomOut => self
                .viewport
                .apply_zoom_delta(-self.config.button_zoom_step, &self.config),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/input.rs"]
mod tests;
