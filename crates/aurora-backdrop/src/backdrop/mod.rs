//! The animated backdrop component
//!
//! State lives in a shared core; the host only ever holds weak references
//! to it, so a late callback can never revive a dropped backdrop.

mod shared;
mod snapshot;
mod subscriptions;

pub use snapshot::BackdropSnapshot;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use aurora_host::{Host, SurfaceSize};

use self::shared::{BackdropCore, SharedCore};
use crate::config::BackdropConfig;
use crate::math::Vec2;
use crate::renderer::Renderer;
use crate::shading::ShadingParameters;
use crate::state::BackdropState;

/// A full-viewport animated gradient behind the page content
///
/// Dropping the handle destroys the backdrop.
pub struct AnimatedBackdrop<H: Host> {
    core: SharedCore<H>,
    host: Rc<H>,
}

impl<H: Host> AnimatedBackdrop<H> {
    /// Mount a backdrop on the host page
    ///
    /// Removes any stale surface with the configured id, mounts a fresh one
    /// as the first child of the page root and starts animating (or starts
    /// paused when the page is hidden).
    pub fn mount(host: Rc<H>, config: BackdropConfig) -> Self {
        Self {
            core: shared::mount(host.clone(), config.validated()),
            host,
        }
    }

    pub fn state(&self) -> BackdropState {
        self.read(|c| c.state(), BackdropState::Destroyed)
    }

    /// Virtual time in seconds
    pub fn time(&self) -> f64 {
        self.read(|c| c.render.time, 0.0)
    }

    /// Resolution passed to the shading function (CSS pixels)
    pub fn resolution(&self) -> Vec2 {
        self.read(|c| c.resolution, Vec2::ZERO)
    }

    pub fn shading_parameters(&self) -> ShadingParameters {
        self.read(|c| c.shading_parameters(), ShadingParameters::default())
    }

    /// The mounted surface, until destroyed
    pub fn surface(&self) -> Option<H::Surface> {
        self.read(|c| c.surface.clone(), None)
    }

    pub fn surface_size(&self) -> Option<SurfaceSize> {
        self.read(|c| c.surface_size, None)
    }

    pub fn has_renderer(&self) -> bool {
        self.read(|c| c.renderer.is_some(), false)
    }

    /// Frames successfully drawn by the attached renderer
    pub fn frames_drawn(&self) -> u64 {
        self.read(|c| c.frames_drawn, 0)
    }

    pub fn config(&self) -> BackdropConfig {
        self.read(|c| c.config.clone(), BackdropConfig::default())
    }

    /// Re-read the viewport and resize surface and renderer
    ///
    /// Never changes state or time.
    pub fn resize(&self) {
        if let Ok(mut core) = self.core.try_borrow_mut() {
            core.apply_viewport();
        }
    }

    /// Install a renderer sized to the current surface
    ///
    /// Returns false (and releases the renderer) once destroyed.
    pub fn attach_renderer<R: Renderer + 'static>(&self, renderer: R) -> bool {
        attach(&self.core, Box::new(renderer))
    }

    /// Tear down: cancel the pending frame, revoke listeners, release the
    /// renderer and unmount the surface. Idempotent.
    pub fn destroy(&self) {
        if let Ok(mut core) = self.core.try_borrow_mut() {
            core.destroy();
        }
    }

    pub fn snapshot(&self) -> BackdropSnapshot {
        self.read(BackdropSnapshot::capture, BackdropSnapshot::destroyed())
    }

    /// Weak handle for callbacks that may outlive this instance
    pub fn downgrade(&self) -> BackdropRef<H> {
        BackdropRef {
            core: Rc::downgrade(&self.core),
            host: self.host.clone(),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&BackdropCore<H>) -> T, busy: T) -> T {
        match self.core.try_borrow() {
            Ok(core) => f(&core),
            Err(_) => busy,
        }
    }
}

impl<H: Host> Drop for AnimatedBackdrop<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Non-owning handle to an [`AnimatedBackdrop`]
pub struct BackdropRef<H: Host> {
    core: Weak<RefCell<BackdropCore<H>>>,
    host: Rc<H>,
}

impl<H: Host> Clone for BackdropRef<H> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            host: self.host.clone(),
        }
    }
}

impl<H: Host> BackdropRef<H> {
    /// Whether the backdrop is still alive and not destroyed
    pub fn is_live(&self) -> bool {
        let Some(core) = self.core.upgrade() else {
            return false;
        };
        let state = match core.try_borrow() {
            Ok(core) => core.state(),
            Err(_) => return true,
        };
        state != BackdropState::Destroyed
    }

    /// Attach a renderer if the backdrop is still live
    ///
    /// A dropped backdrop rejects the renderer and releases it.
    pub fn attach_renderer<R: Renderer + 'static>(&self, renderer: R) -> bool {
        let mut renderer: Box<dyn Renderer> = Box::new(renderer);
        match self.core.upgrade() {
            Some(core) => attach(&core, renderer),
            None => {
                renderer.release();
                self.host
                    .debug_write("[aurora] Renderer rejected: backdrop dropped");
                false
            }
        }
    }
}

fn attach<H: Host>(core: &SharedCore<H>, mut renderer: Box<dyn Renderer>) -> bool {
    match core.try_borrow_mut() {
        Ok(mut core) => core.attach_renderer(renderer),
        Err(_) => {
            renderer.release();
            false
        }
    }
}
