use glam::Vec2;

use super::event::MouseButton;

/// Which gesture class a held button drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragKind {
    Rotate,
    Translate,
}

/// Tracks the cursor position and the buttons currently driving gestures.
///
/// Each gesture class is owned by at most one button at a time; rotation
/// and translation can be held simultaneously.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerState {
    pub pos: Vec2,
    rotate_button: Option<MouseButton>,
    translate_button: Option<MouseButton>,
}

impl PointerState {
    /// Update the cursor position.
    pub fn handle_mouse_position(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// Whether some button currently drives `kind`.
    pub fn is_held(&self, kind: DragKind) -> bool {
        self.slot(kind).is_some()
    }

    /// Bind `button` to `kind`. Returns `false` if `kind` is already held.
    pub fn press(&mut self, kind: DragKind, button: MouseButton) -> bool {
        let slot = self.slot_mut(kind);
        if slot.is_some() {
            return false;
        }
        *slot = Some(button);
        true
    }

    /// Release `button`, returning the gestures it was driving.
    pub fn release(&mut self, button: MouseButton) -> Vec<DragKind> {
        let mut released = Vec::new();
        for kind in [DragKind::Rotate, DragKind::Translate] {
            let slot = self.slot_mut(kind);
            if *slot == Some(button) {
                *slot = None;
                released.push(kind);
            }
        }
        released
    }

    /// Release every held gesture.
    pub fn release_all(&mut self) -> Vec<DragKind> {
        let mut released = Vec::new();
        for kind in [DragKind::Rotate, DragKind::Translate] {
            if self.slot_mut(kind).take().is_some() {
                released.push(kind);
            }
        }
        released
    }

    fn slot(&self, kind: DragKind) -> Option<MouseButton> {
        match kind {
            DragKind::Rotate => self.rotate_button,
            DragKind::Translate => self.translate_button,
        }
    }

    fn slot_mut(&mut self, kind: DragKind) -> &mut Option<MouseButton> {
        match kind {
            DragKind::Rotate => &mut self.rotate_button,
            DragKind::Translate => &mut self.translate_button,
        }
    }
}
