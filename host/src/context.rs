//! Host context

use crate::{event::Event, scene::SceneGraph};
use input::InputTracker;
use std::mem;

pub mod input;

/// Everything the host hands to the mod on each callback: the rendering surface, the active scene
/// and the input state.
#[derive(Debug)]
#[must_use]
pub struct Context<S, G> {
    surface: S,
    scene: G,
    input: InputTracker,
}

impl<S, G> Context<S, G> {
    pub fn new(surface: S, scene: G) -> Self {
        Self {
            surface,
            scene,
            input: InputTracker::default(),
        }
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn scene(&self) -> &G {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut G {
        &mut self.scene
    }

    #[inline]
    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    #[inline]
    pub fn input_mut(&mut self) -> &mut InputTracker {
        &mut self.input
    }

    #[inline]
    pub fn handle_event(&mut self, event: Event) {
        self.input.handle_event(event);
    }

    /// Finish the current tick.
    #[inline]
    pub fn end_frame(&mut self) {
        self.input.update();
    }
}

impl<S, G: SceneGraph> Context<S, G> {
    /// Make `scene` the active scene, returning the previous one.
    pub fn change_scene(&mut self, scene: G) -> G {
        tracing::debug!(
            "active scene changed: {} -> {}",
            self.scene.scene_name(),
            scene.scene_name()
        );
        mem::replace(&mut self.scene, scene)
    }
}
