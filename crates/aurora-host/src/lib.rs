//! Host environment abstraction for the Aurora backdrop
//!
//! This crate defines the [`Host`] trait that lets the backdrop run inside
//! different environments (a browser page, an in-memory test double) by
//! abstracting every interaction with the page around it.
//!
//! # Platform Implementations
//!
//! - **Browser**: `document.body` as the page root, `requestAnimationFrame`
//!   for frames, `performance.now()` for time, `console.log` for debug output
//! - **Mock**: `aurora-host-mock`, a deterministic host for unit tests

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

/// Listener invoked when a subscribed host event fires
pub type Listener = Box<dyn FnMut()>;

/// Callback invoked once with the frame timestamp (milliseconds)
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Host environment trait
///
/// Implementations provide environment-specific functionality for:
/// - Surface management (mount, size, unmount the drawing surface)
/// - Viewport and page visibility queries
/// - Event subscriptions (resize, visibility change)
/// - Per-frame scheduling
/// - Time measurement and debug output
///
/// All methods are called from a single thread. Implementations must never
/// invoke a listener or frame callback synchronously from inside the method
/// that registered it.
///
/// # Associated Types
///
/// - `Surface`: handle to a mounted drawing surface
///   - In a browser: the `<canvas>` element
///   - In tests: an opaque numeric handle
pub trait Host: 'static {
    /// Handle to a mounted drawing surface
    type Surface: Clone + 'static;

    // === Surfaces ===

    /// Remove any element already carrying the reserved `id`
    ///
    /// Used before mounting so a re-initialized page never ends up with two
    /// surfaces. Returns `true` if something was removed.
    fn remove_stale_surface(&self, id: &str) -> bool;

    /// Mount a new surface as the first child of the page content root
    ///
    /// The surface is fixed to the viewport, sits below all other content
    /// and ignores pointer input.
    ///
    /// # Returns
    /// * `Ok(Surface)` - Handle to the mounted surface
    /// * `Err(HostError::NoDocument)` - There is no page to mount into
    /// * `Err(HostError::SurfaceUnavailable)` - The surface could not be created
    fn mount_surface(&self, id: &str) -> Result<Self::Surface, HostError>;

    /// Apply a CSS and backing-store size to a mounted surface
    fn size_surface(&self, surface: &Self::Surface, size: SurfaceSize);

    /// Detach a surface from the page
    ///
    /// Unmounting a surface that is no longer attached is a no-op.
    fn unmount_surface(&self, surface: &Self::Surface);

    // === Viewport ===

    /// Current viewport metrics
    fn viewport(&self) -> Viewport;

    /// Whether the page is currently hidden (e.g. a backgrounded tab)
    fn is_page_hidden(&self) -> bool;

    // === Events ===

    /// Subscribe a listener to a host event
    ///
    /// # Returns
    /// * `Ok(SubscriptionId)` - Handle used to revoke the subscription
    /// * `Err(HostError::SubscriptionFailed)` - The listener could not be installed
    fn subscribe(&self, event: HostEvent, listener: Listener) -> Result<SubscriptionId, HostError>;

    /// Revoke a subscription. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);

    // === Frames ===

    /// Request a single callback before the next display refresh
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameRequestId, HostError>;

    /// Cancel a pending frame request. Unknown or fired ids are ignored.
    fn cancel_frame(&self, id: FrameRequestId);

    // === Time & Debug ===

    /// Monotonic time in milliseconds, on the same base as frame timestamps
    ///
    /// In a browser: `performance.now()`
    fn now_ms(&self) -> f64;

    /// Write a debug message to the environment's console/log
    fn debug_write(&self, msg: &str);
}

/// Host errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostError {
    /// No window or document to attach to
    NoDocument,
    /// The drawing surface could not be created or inserted
    SurfaceUnavailable,
    /// An event listener could not be installed
    SubscriptionFailed,
    /// The per-frame callback could not be scheduled
    FrameRequestFailed,
    /// Operation not supported in this environment
    NotSupported,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            HostError::NoDocument => "no document available",
            HostError::SurfaceUnavailable => "drawing surface unavailable",
            HostError::SubscriptionFailed => "failed to subscribe to host event",
            HostError::FrameRequestFailed => "failed to request animation frame",
            HostError::NotSupported => "operation not supported by host",
        };
        f.write_str(msg)
    }
}

/// Host events a component may subscribe to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostEvent {
    /// The viewport changed size
    Resize,
    /// The page switched between hidden and visible
    VisibilityChange,
}

impl HostEvent {
    /// DOM event name for this host event
    pub fn dom_name(&self) -> &'static str {
        match self {
            HostEvent::Resize => "resize",
            HostEvent::VisibilityChange => "visibilitychange",
        }
    }
}

/// Handle to an event subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

impl SubscriptionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Handle to a pending frame request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequestId(pub u64);

impl FrameRequestId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Viewport metrics reported by the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels
    pub width: f32,
    /// Height in CSS pixels
    pub height: f32,
    /// Raw device pixel ratio (uncapped)
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0, 1.0)
    }
}

/// Size applied to a drawing surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    /// CSS width in pixels
    pub css_width: f32,
    /// CSS height in pixels
    pub css_height: f32,
    /// Backing-store width in device pixels
    pub pixel_width: u32,
    /// Backing-store height in device pixels
    pub pixel_height: u32,
    /// Pixel ratio actually applied (after capping)
    pub pixel_ratio: f32,
}

impl SurfaceSize {
    /// Size a surface to fill `viewport`, capping the pixel ratio at `max_ratio`
    ///
    /// Non-finite or non-positive ratios fall back to 1. Backing-store
    /// dimensions are floored and never below 1 pixel.
    pub fn from_viewport(viewport: Viewport, max_ratio: f32) -> Self {
        let raw = viewport.device_pixel_ratio;
        let ratio = if raw.is_finite() && raw > 0.0 { raw } else { 1.0 };
        let ratio = ratio.min(max_ratio.max(1.0));

        let css_width = sanitize_extent(viewport.width);
        let css_height = sanitize_extent(viewport.height);

        Self {
            css_width,
            css_height,
            pixel_width: ((css_width * ratio) as u32).max(1),
            pixel_height: ((css_height * ratio) as u32).max(1),
            pixel_ratio: ratio,
        }
    }
}

fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
