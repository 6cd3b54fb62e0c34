use crate::constants::{POINTER_NDC_SENTINEL, POINTER_PITCH_GAIN, POINTER_YAW_GAIN};
use crate::viewport::Viewport;
use glam::Vec2;

/// Latest pointer sample, in both NDC and client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
    pub pixel: Vec2,
    /// False once the pointer left the window or the touch ended.
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            ndc: Vec2::splat(POINTER_NDC_SENTINEL),
            pixel: Vec2::ZERO,
            active: false,
        }
    }
}

/// Group orientation the pointer is asking for, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TargetOrientation {
    pub yaw: f32,
    pub pitch: f32,
}

#[derive(Clone, Debug)]
pub struct InputTracker {
    pointer: PointerState,
    target: TargetOrientation,
    has_moved: bool,
    yaw_gain: f32,
    pitch_gain: f32,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::with_gains(POINTER_YAW_GAIN, POINTER_PITCH_GAIN)
    }
}

impl InputTracker {
    pub fn with_gains(yaw_gain: f32, pitch_gain: f32) -> Self {
        Self {
            pointer: PointerState::default(),
            target: TargetOrientation::default(),
            has_moved: false,
            yaw_gain,
            pitch_gain,
        }
    }

    pub fn pointer_moved(&mut self, client: Vec2, viewport: &Viewport) {
        let ndc = client_to_ndc(client, viewport);
        self.pointer = PointerState {
            ndc,
            pixel: client,
            active: true,
        };
        self.has_moved = true;
        self.target = TargetOrientation {
            yaw: ndc.x * self.yaw_gain,
            pitch: ndc.y * self.pitch_gain,
        };
    }

    /// Track the first touch point. Returns false (and changes nothing) for an empty list.
    pub fn touch_moved(&mut self, touches: &[Vec2], viewport: &Viewport) -> bool {
        match touches.first() {
            Some(&first) => {
                self.pointer_moved(first, viewport);
                true
            }
            None => false,
        }
    }

    pub fn pointer_left(&mut self) {
        self.pointer.active = false;
    }

    /// Any lifted finger parks the pointer, even while others stay down;
    /// the next touch move brings it back at a fresh position.
    pub fn touch_ended(&mut self) {
        self.pointer_left();
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn target(&self) -> TargetOrientation {
        self.target
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }
}

/// Map client pixels to NDC: x grows right, y grows up, both in `[-1, 1]` inside the viewport.
#[inline]
pub fn client_to_ndc(client: Vec2, viewport: &Viewport) -> Vec2 {
    let w = viewport.width.max(1.0);
    let h = viewport.height.max(1.0);
    Vec2::new((client.x / w) * 2.0 - 1.0, -(client.y / h) * 2.0 + 1.0)
}
