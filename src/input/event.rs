/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`NavCommand`](crate::command::NavCommand) values.
///
/// # Example
///
/// ```ignore
/// use trackball::camera::{Trackball, Viewport};
/// use trackball::input::{InputEvent, InputProcessor, MouseButton};
///
/// let mut trackball = Trackball::new(Viewport::from_size(800.0, 600.0));
/// let mut input = InputProcessor::new();
/// for event in [
///     InputEvent::CursorMoved { x: 400.0, y: 300.0 },
///     InputEvent::MouseButton { button: MouseButton::Left, pressed: true },
///     InputEvent::CursorMoved { x: 450.0, y: 300.0 },
/// ] {
///     for cmd in input.handle_event(event) {
///         trackball.execute(cmd);
///     }
/// }
/// assert!(trackball.is_rotating());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// Drawable area resized.
    Resized {
        /// New width in physical pixels.
        width: f32,
        /// New height in physical pixels.
        height: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Translate a winit window event, if it is one the trackball uses.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                Some(Self::ModifiersChanged {
                    shift: modifiers.state().shift_key(),
                })
            }
            WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width as f32,
                height: size.height as f32,
            }),
            _ => None,
        }
    }
}

/// Key string for a pressed physical key, in the `KeyCode` debug format
/// used by [`KeyBindings`](super::KeyBindings) (`"KeyR"`, `"Equal"`, ...).
#[cfg(feature = "winit")]
#[must_use]
pub fn pressed_key_name(event: &winit::event::WindowEvent) -> Option<String> {
    use winit::event::{ElementState, WindowEvent};
    use winit::keyboard::PhysicalKey;

    match event {
        WindowEvent::KeyboardInput { event, .. }
            if event.state == ElementState::Pressed && !event.repeat =>
        {
            match event.physical_key {
                PhysicalKey::Code(code) => Some(format!("{code:?}")),
                PhysicalKey::Unidentified(_) => None,
            }
        }
        _ => None,
    }
}
