use crate::constants::POINTER_GRAVITY_RANGE;
use helix_core::{HelixError, TiltReading, TiltSource};
use winit::keyboard::{Key, NamedKey};

/// Keyboard commands understood by the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleMetrics,
    Quit,
}

#[inline]
pub fn command_for_key(key: &Key) -> Option<Command> {
    match key {
        Key::Character(c) if c.eq_ignore_ascii_case("m") => Some(Command::ToggleMetrics),
        Key::Named(NamedKey::Escape) => Some(Command::Quit),
        _ => None,
    }
}

/// Desktop stand-in for the motion sensor: the cursor position inside the
/// window plays the role of the gravity vector.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTilt {
    uv: Option<[f32; 2]>,
}

impl PointerTilt {
    /// Record a cursor position in pixels.
    pub fn set_cursor(&mut self, x: f32, y: f32, width: u32, height: u32) {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        self.uv = Some([(x / w).clamp(0.0, 1.0), (y / h).clamp(0.0, 1.0)]);
    }

    pub fn clear(&mut self) {
        self.uv = None;
    }

    /// Gravity-like components within +-POINTER_GRAVITY_RANGE; a centered
    /// cursor is level.
    pub fn gravity(&self) -> Option<[f32; 2]> {
        self.uv.map(|[u, v]| {
            [
                (u * 2.0 - 1.0) * POINTER_GRAVITY_RANGE,
                (1.0 - v * 2.0) * POINTER_GRAVITY_RANGE,
            ]
        })
    }
}

impl TiltSource for PointerTilt {
    fn poll(&mut self) -> Result<TiltReading, HelixError> {
        self.gravity()
            .map(|[gx, gy]| TiltReading::from_gravity(gx, gy))
            .ok_or(HelixError::SensorUnavailable)
    }
}
