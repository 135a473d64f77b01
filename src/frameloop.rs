//! The per-frame driver.
//!
//! [`FrameLoop::run_frame`] runs one iteration: read the clock, update
//! [`WorldTime`](crate::resources::worldtime::WorldTime), run the update
//! schedule, then hand the world to the renderer. The clock and renderer are
//! traits so tests can drive frames with a fixed step and a recording
//! renderer.

use bevy_ecs::prelude::*;
use log::trace;

use crate::systems::time::update_world_time;

/// Source of the time elapsed since the previous frame.
pub trait FrameClock {
    fn delta_seconds(&mut self) -> f32;
}

/// Raylib's measured frame time.
#[derive(Debug, Default, Clone, Copy)]
pub struct RaylibClock;

impl FrameClock for RaylibClock {
    fn delta_seconds(&mut self) -> f32 {
        // SAFETY: only reads raylib's frame timer; valid once the window exists.
        unsafe { raylib::ffi::GetFrameTime() }
    }
}

/// Same delta every frame.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub step: f32,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl FrameClock for FixedClock {
    fn delta_seconds(&mut self) -> f32 {
        self.step
    }
}

/// Draws the world once per frame.
pub trait FrameRenderer {
    fn render(&mut self, world: &mut World);
}

/// Renderer that draws nothing. Handy for headless runs.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl FrameRenderer for NullRenderer {
    fn render(&mut self, _world: &mut World) {}
}

pub struct FrameLoop {
    update: Schedule,
    frames: u64,
}

impl FrameLoop {
    pub fn new(update: Schedule) -> Self {
        Self { update, frames: 0 }
    }

    /// Run one frame. The renderer is invoked every time, whatever the
    /// schedule did.
    pub fn run_frame(
        &mut self,
        world: &mut World,
        clock: &mut dyn FrameClock,
        renderer: &mut dyn FrameRenderer,
    ) {
        let dt = clock.delta_seconds();
        update_world_time(world, dt);

        self.update.run(world);
        world.clear_trackers();

        renderer.render(world);
        self.frames += 1;
        trace!("Frame {} done (dt={:.4})", self.frames, dt);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
