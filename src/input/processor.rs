//! Converts raw platform events into navigation commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! which button drives which gesture, modifier keys) and the key-binding
//! map. It is the only thing that sits between raw window events and
//! [`Trackball::execute`](crate::camera::trackball::Trackball::execute).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::{DragKind, PointerState};
use crate::command::NavCommand;
use crate::options::{Options, DEFAULT_ZOOM_STEP};

/// Maps physical key strings to discrete [`NavCommand`]s.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyR"`, `"Equal"`, `"Minus"`, etc.
///
/// Only *discrete* commands make sense as key bindings; gesture commands
/// carry pointer positions and come from the mouse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the key-bindable subset of [`NavCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Return to the default pose.
    Reset,
    /// Zoom in by one step.
    ZoomIn,
    /// Zoom out by one step.
    ZoomOut,
}

impl KeyCommandTag {
    fn to_command(self, zoom_step: f32) -> NavCommand {
        match self {
            Self::Reset => NavCommand::Reset,
            Self::ZoomIn => NavCommand::ZoomIn { factor: zoom_step },
            Self::ZoomOut => NavCommand::ZoomOut { factor: zoom_step },
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyR".into(), KeyCommandTag::Reset),
            ("Equal".into(), KeyCommandTag::ZoomIn),
            ("NumpadAdd".into(), KeyCommandTag::ZoomIn),
            ("Minus".into(), KeyCommandTag::ZoomOut),
            ("NumpadSubtract".into(), KeyCommandTag::ZoomOut),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the tag bound to a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.get(key).copied()
    }

    /// Bind a key, returning the tag it replaced.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        tag: KeyCommandTag,
    ) -> Option<KeyCommandTag> {
        self.bindings.insert(key.into(), tag)
    }

    /// Remove a key binding, returning its tag.
    pub fn unbind(&mut self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.remove(key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`NavCommand`]s.
///
/// Left drag rotates, shift + left drag or right/middle drag translates,
/// and the wheel zooms by `zoom_step` per unit of scroll.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// for cmd in input_processor.handle_event(event) {
///     trackball.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyR") {
///     trackball.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Cursor position and gesture-owning buttons.
    state: PointerState,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Zoom multiplier per unit of scroll.
    zoom_step: f32,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PointerState::default(),
            shift_pressed: false,
            zoom_step: DEFAULT_ZOOM_STEP,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Create a processor from loaded options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            zoom_step: options.trackball.zoom_step,
            ..Self::with_key_bindings(options.keybindings.clone())
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        (self.state.pos.x, self.state.pos.y)
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Zoom multiplier per unit of scroll.
    #[must_use]
    pub fn zoom_step(&self) -> f32 {
        self.zoom_step
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// End every gesture a held button is driving, e.g. when the window
    /// loses focus mid-drag.
    pub fn release_mouse_state(&mut self) -> Vec<NavCommand> {
        self.state
            .release_all()
            .into_iter()
            .map(end_command)
            .collect()
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<NavCommand> {
        self.key_bindings
            .lookup(key)
            .map(|tag| tag.to_command(self.zoom_step))
    }

    /// Process a raw input event and return the commands it produces.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<NavCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => {
                self.handle_scroll(delta).into_iter().collect()
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                Vec::new()
            }
            InputEvent::Resized { width, height } => {
                vec![NavCommand::Resize { width, height }]
            }
        }
    }

    /// Cursor moved: continue every held gesture.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Vec<NavCommand> {
        self.state.handle_mouse_position(x, y);
        let pos = self.state.pos;

        let mut commands = Vec::new();
        if self.state.is_held(DragKind::Rotate) {
            commands.push(NavCommand::UpdateRotation { pos });
        }
        if self.state.is_held(DragKind::Translate) {
            commands.push(NavCommand::UpdateTranslation { pos });
        }
        commands
    }

    /// Button press begins a gesture at the cursor; release ends the
    /// gesture(s) that button started.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Vec<NavCommand> {
        if !pressed {
            return self
                .state
                .release(button)
                .into_iter()
                .map(end_command)
                .collect();
        }

        let kind = match button {
            MouseButton::Left if !self.shift_pressed => DragKind::Rotate,
            _ => DragKind::Translate,
        };
        if !self.state.press(kind, button) {
            return Vec::new();
        }

        let pos = self.state.pos;
        log::trace!("{button:?} press begins {kind:?} at {pos}");
        vec![match kind {
            DragKind::Rotate => NavCommand::BeginRotation { pos },
            DragKind::Translate => NavCommand::BeginTranslation { pos },
        }]
    }

    /// Wheel: positive scroll zooms in by `zoom_step^delta`.
    fn handle_scroll(&self, delta: f32) -> Option<NavCommand> {
        if delta == 0.0 || !delta.is_finite() {
            return None;
        }
        let factor = self.zoom_step.powf(delta.abs());
        Some(if delta > 0.0 {
            NavCommand::ZoomIn { factor }
        } else {
            NavCommand::ZoomOut { factor }
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn end_command(kind: DragKind) -> NavCommand {
    match kind {
        DragKind::Rotate => NavCommand::EndRotation,
        DragKind::Translate => NavCommand::EndTranslation,
    }
}
