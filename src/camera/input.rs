use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::controller::CameraController;
use crate::camera::core::MoveDirection;

/// Converts raw window events into camera mutations.
///
/// Owns the transient input state the camera itself must not: the previous
/// cursor position (seeded from the first sample so activation does not
/// produce a huge look jump) and the currently held movement keys, which
/// [`integrate`](Self::integrate) applies once per frame scaled by the
/// frame time.
pub struct InputHandler {
    last_cursor: Option<Vec2>,
    forward_held: bool,
    backward_held: bool,
    left_held: bool,
    right_held: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a handler with no cursor history and no held keys.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_cursor: None,
            forward_held: false,
            backward_held: false,
            left_held: false,
            right_held: false,
        }
    }

    /// Returns true if the event was consumed by the camera.
    pub fn handle_event(
        &mut self,
        controller: &mut CameraController,
        event: &WindowEvent,
    ) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let current =
                    Vec2::new(position.x as f32, position.y as f32);
                if let Some(last) = self.last_cursor {
                    // Screen Y grows downward; pitch grows upward.
                    let x_offset = current.x - last.x;
                    let y_offset = last.y - current.y;
                    controller
                        .camera
                        .process_mouse_movement(x_offset, y_offset);
                }
                self.last_cursor = Some(current);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * 0.01
                    }
                };
                controller.camera.process_mouse_scroll(scroll);
                true
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let pressed = event.state == ElementState::Pressed;
                self.handle_key(code, pressed)
            }
            WindowEvent::Focused(false) => {
                // Re-seed on refocus so the pointer warp while unfocused
                // does not register as a look delta.
                self.last_cursor = None;
                false
            }
            _ => false,
        }
    }

    /// Record a movement key press/release. Returns true if the key is a
    /// movement binding.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) -> bool {
        match code {
            KeyCode::KeyW => self.forward_held = pressed,
            KeyCode::KeyS => self.backward_held = pressed,
            KeyCode::KeyA => self.left_held = pressed,
            KeyCode::KeyD => self.right_held = pressed,
            _ => return false,
        }
        true
    }

    /// Apply the held movement keys for this frame.
    ///
    /// `dt` is the wall-clock frame time in seconds; movement is
    /// frame-rate independent by construction.
    pub fn integrate(&self, controller: &mut CameraController, dt: f32) {
        let camera = &mut controller.camera;
        if self.forward_held {
            camera.process_keyboard(MoveDirection::Forward, dt);
        }
        if self.backward_held {
            camera.process_keyboard(MoveDirection::Backward, dt);
        }
        if self.left_held {
            camera.process_keyboard(MoveDirection::Left, dt);
        }
        if self.right_held {
            camera.process_keyboard(MoveDirection::Right, dt);
        }
    }

    /// Forget the cursor history so the next sample re-seeds instead of
    /// producing an offset.
    pub fn reset_cursor_tracking(&mut self) {
        self.last_cursor = None;
    }

    /// True while any movement key is held.
    #[must_use]
    pub const fn any_movement_held(&self) -> bool {
        self.forward_held
            || self.backward_held
            || self.left_held
            || self.right_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::Camera;
    use glam::Vec3;

    // Key handling and integration are testable without a GPU; the
    // cursor path goes through handle_event and needs a winit event, so
    // the seeding logic is exercised directly on a Camera here.

    #[test]
    fn movement_keys_toggle_held_state() {
        let mut handler = InputHandler::new();
        assert!(handler.handle_key(KeyCode::KeyW, true));
        assert!(handler.any_movement_held());
        assert!(handler.handle_key(KeyCode::KeyW, false));
        assert!(!handler.any_movement_held());
        // Non-movement keys are not consumed
        assert!(!handler.handle_key(KeyCode::KeyQ, true));
    }

    #[test]
    fn opposed_keys_cancel_out() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::Y);
        let start = camera.position;
        // Forward and backward in the same frame with equal dt
        camera.process_keyboard(
            crate::camera::core::MoveDirection::Forward,
            0.016,
        );
        camera.process_keyboard(
            crate::camera::core::MoveDirection::Backward,
            0.016,
        );
        assert!((camera.position - start).length() < 1e-6);
    }

    #[test]
    fn first_sample_seeds_without_rotating() {
        // Mirror of the handler's CursorMoved arm: a None history must
        // produce no offset, only a seed.
        let mut last_cursor: Option<Vec2> = None;
        let mut camera = Camera::new(Vec3::ZERO, Vec3::Y);
        let yaw_before = camera.yaw();

        let first = Vec2::new(500.0, 425.0);
        if let Some(last) = last_cursor {
            camera.process_mouse_movement(
                first.x - last.x,
                last.y - first.y,
            );
        }
        last_cursor = Some(first);
        assert_eq!(camera.yaw(), yaw_before);

        // Second sample: cursor moved up and right → yaw and pitch grow
        let second = Vec2::new(510.0, 405.0);
        if let Some(last) = last_cursor {
            camera.process_mouse_movement(
                second.x - last.x,
                last.y - second.y,
            );
        }
        assert!(camera.yaw() > yaw_before);
        assert!(camera.pitch() > 0.0);
    }
}
