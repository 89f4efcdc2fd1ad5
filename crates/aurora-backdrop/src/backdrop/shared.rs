//! Shared backdrop state and the handlers host callbacks run

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use aurora_host::{FrameCallback, Host, HostEvent, Listener, SurfaceSize};

use super::subscriptions::Subscriptions;
use crate::clock::FrameClock;
use crate::config::BackdropConfig;
use crate::math::Vec2;
use crate::renderer::Renderer;
use crate::shading::ShadingParameters;
use crate::state::{BackdropState, RenderState};

pub(crate) type SharedCore<H> = Rc<RefCell<BackdropCore<H>>>;

/// Everything one backdrop instance owns
pub(crate) struct BackdropCore<H: Host> {
    pub host: Rc<H>,
    pub config: BackdropConfig,
    destroyed: bool,
    pub surface: Option<H::Surface>,
    pub surface_size: Option<SurfaceSize>,
    pub renderer: Option<Box<dyn Renderer>>,
    pub render: RenderState,
    clock: FrameClock,
    pub resolution: Vec2,
    pub subscriptions: Subscriptions,
    pub frames_drawn: u64,
}

impl<H: Host> BackdropCore<H> {
    /// A core with no surface yet; [`mount`] fills it in
    fn new(host: Rc<H>, config: BackdropConfig) -> Self {
        let now = host.now_ms();
        Self {
            host,
            config,
            destroyed: false,
            surface: None,
            surface_size: None,
            renderer: None,
            render: RenderState::new(false),
            clock: FrameClock::started_at(now),
            resolution: Vec2::ZERO,
            subscriptions: Subscriptions::default(),
            frames_drawn: 0,
        }
    }

    pub fn state(&self) -> BackdropState {
        if self.destroyed {
            BackdropState::Destroyed
        } else if self.render.playing {
            BackdropState::Active
        } else {
            BackdropState::Paused
        }
    }

    pub fn shading_parameters(&self) -> ShadingParameters {
        ShadingParameters::new(self.render.time as f32, self.resolution)
    }

    /// Size the surface and renderer to the host viewport
    pub fn apply_viewport(&mut self) {
        if self.destroyed {
            return;
        }
        let size = SurfaceSize::from_viewport(self.host.viewport(), self.config.max_pixel_ratio);
        if let Some(surface) = &self.surface {
            self.host.size_surface(surface, size);
        }
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(size.pixel_width, size.pixel_height);
        }
        self.resolution = Vec2::new(size.css_width, size.css_height);
        self.surface_size = Some(size);
    }

    /// React to a visibility change; returns true when the frame loop
    /// must be restarted
    pub fn handle_visibility_change(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        let hidden = self.host.is_page_hidden();
        match (hidden, self.render.playing) {
            (true, true) => {
                self.render.playing = false;
                self.subscriptions.cancel_frame(&*self.host);
                self.host.debug_write(&format!(
                    "[aurora] Paused at t={:.3}s",
                    self.render.time
                ));
                false
            }
            (false, false) => {
                self.render.playing = true;
                // Hidden time is never caught up
                self.clock.reset(self.host.now_ms());
                self.host.debug_write(&format!(
                    "[aurora] Resumed at t={:.3}s",
                    self.render.time
                ));
                true
            }
            _ => false,
        }
    }

    /// Run one frame; returns true when another frame should be requested
    pub fn on_frame(&mut self, timestamp_ms: f64) -> bool {
        self.subscriptions.frame = None;
        if self.state() != BackdropState::Active {
            return false;
        }
        let delta = self.clock.delta_seconds(timestamp_ms);
        self.render.advance(delta, self.config.time_scale);
        self.draw();
        true
    }

    fn draw(&mut self) {
        let params = self.shading_parameters();
        let Some(mut renderer) = self.renderer.take() else {
            return;
        };
        match renderer.draw(&params) {
            Ok(()) => {
                self.frames_drawn += 1;
                self.renderer = Some(renderer);
            }
            Err(e) if e.is_fatal() => {
                self.host
                    .debug_write(&format!("[aurora] Draw failed, releasing renderer: {}", e));
                renderer.release();
            }
            Err(e) => {
                self.host.debug_write(&format!("[aurora] {}", e));
                self.renderer = Some(renderer);
            }
        }
    }

    /// Install a renderer; rejected (and released) once destroyed
    pub fn attach_renderer(&mut self, mut renderer: Box<dyn Renderer>) -> bool {
        if self.destroyed {
            renderer.release();
            self.host
                .debug_write("[aurora] Renderer rejected: backdrop destroyed");
            return false;
        }
        if let Some(size) = self.surface_size {
            renderer.resize(size.pixel_width, size.pixel_height);
        }
        if let Some(mut previous) = self.renderer.replace(renderer) {
            previous.release();
        }
        self.host.debug_write("[aurora] Renderer attached");
        true
    }

    /// Tear everything down. Every step checks presence first, so this is
    /// safe after partial construction and on repeated calls.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.render.playing = false;
        self.subscriptions.revoke_all(&*self.host);
        if let Some(mut renderer) = self.renderer.take() {
            renderer.release();
            self.host.debug_write("[aurora] Renderer released");
        }
        if let Some(surface) = self.surface.take() {
            self.host.unmount_surface(&surface);
        }
        self.host.debug_write("[aurora] Destroyed");
    }
}

/// Mount a new backdrop on the host page
///
/// Never fails: a surface that cannot be mounted yields an already
/// destroyed instance.
pub(crate) fn mount<H: Host>(host: Rc<H>, config: BackdropConfig) -> SharedCore<H> {
    let mut core = BackdropCore::new(host.clone(), config);

    if host.remove_stale_surface(&core.config.element_id) {
        host.debug_write(&format!(
            "[aurora] Removed stale surface '{}'",
            core.config.element_id
        ));
    }

    match host.mount_surface(&core.config.element_id) {
        Ok(surface) => core.surface = Some(surface),
        Err(e) => {
            host.debug_write(&format!("[aurora] Failed to mount surface: {}", e));
            core.destroyed = true;
            return Rc::new(RefCell::new(core));
        }
    }
    core.apply_viewport();

    let shared = Rc::new(RefCell::new(core));
    subscribe(&shared, HostEvent::Resize);
    subscribe(&shared, HostEvent::VisibilityChange);

    let hidden = host.is_page_hidden();
    if let Ok(mut core) = shared.try_borrow_mut() {
        core.render.playing = !hidden;
        core.clock.reset(host.now_ms());
        host.debug_write(&format!(
            "[aurora] Mounted {}x{} at ratio {} ({})",
            core.resolution.x,
            core.resolution.y,
            core.surface_size.map_or(1.0, |s| s.pixel_ratio),
            core.state().id()
        ));
    }
    if !hidden {
        schedule_frame(&shared);
    }
    shared
}

fn subscribe<H: Host>(core: &SharedCore<H>, event: HostEvent) {
    let weak = Rc::downgrade(core);
    let listener: Listener = match event {
        HostEvent::Resize => Box::new(move || {
            if let Some(core) = weak.upgrade() {
                if let Ok(mut core) = core.try_borrow_mut() {
                    core.apply_viewport();
                }
            }
        }),
        HostEvent::VisibilityChange => Box::new(move || on_visibility_change(&weak)),
    };

    let host = core.borrow().host.clone();
    match host.subscribe(event, listener) {
        Ok(id) => {
            if let Ok(mut core) = core.try_borrow_mut() {
                match event {
                    HostEvent::Resize => core.subscriptions.resize = Some(id),
                    HostEvent::VisibilityChange => core.subscriptions.visibility = Some(id),
                }
            }
        }
        Err(e) => host.debug_write(&format!(
            "[aurora] Failed to subscribe to {}: {}",
            event.dom_name(),
            e
        )),
    }
}

fn on_visibility_change<H: Host>(weak: &Weak<RefCell<BackdropCore<H>>>) {
    let Some(core) = weak.upgrade() else {
        return;
    };
    let resume = match core.try_borrow_mut() {
        Ok(mut core) => core.handle_visibility_change(),
        Err(_) => false,
    };
    if resume {
        schedule_frame(&core);
    }
}

/// Request the next frame unless one is already pending
pub(crate) fn schedule_frame<H: Host>(core: &SharedCore<H>) {
    let host = match core.try_borrow() {
        Ok(c) if c.state() == BackdropState::Active && c.subscriptions.frame.is_none() => {
            c.host.clone()
        }
        _ => return,
    };

    let weak = Rc::downgrade(core);
    let callback: FrameCallback = Box::new(move |timestamp| {
        if let Some(core) = weak.upgrade() {
            run_frame(&core, timestamp);
        }
    });

    match host.request_frame(callback) {
        Ok(id) => {
            if let Ok(mut core) = core.try_borrow_mut() {
                core.subscriptions.frame = Some(id);
            }
        }
        Err(e) => host.debug_write(&format!("[aurora] Frame request failed: {}", e)),
    }
}

fn run_frame<H: Host>(core: &SharedCore<H>, timestamp_ms: f64) {
    let again = match core.try_borrow_mut() {
        Ok(mut core) => core.on_frame(timestamp_ms),
        Err(_) => false,
    };
    if again {
        schedule_frame(core);
    }
}
