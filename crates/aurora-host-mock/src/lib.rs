//! Mock host implementation for testing the Aurora backdrop
//!
//! This provides a mock implementation of the [`Host`] trait that can be
//! used to drive the backdrop lifecycle without a browser: a simulated page
//! root, a manual clock, a frame queue flushed on demand and captured debug
//! output.

#![no_std]
extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use aurora_host::{
    FrameCallback, FrameRequestId, Host, HostError, HostEvent, Listener, SubscriptionId,
    SurfaceSize, Viewport,
};

/// Handle to a surface mounted on the mock page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MockSurface(pub u64);

/// Simulated page element
#[derive(Clone, Debug)]
struct MockElement {
    handle: u64,
    id: String,
    size: Option<SurfaceSize>,
}

struct MockListener {
    event: HostEvent,
    listener: Rc<RefCell<Listener>>,
}

/// Mock host for unit testing
///
/// Elements of the page root are kept in document order; index 0 is the
/// first child. Frame callbacks queue up until [`MockHost::fire_frame`] is
/// called, so tests decide exactly when a display refresh happens.
pub struct MockHost {
    /// Simulated time in milliseconds
    time_ms: Cell<f64>,
    viewport: Cell<Viewport>,
    hidden: Cell<bool>,
    /// Page root children, in order
    root: RefCell<Vec<MockElement>>,
    listeners: RefCell<BTreeMap<u64, MockListener>>,
    frames: RefCell<BTreeMap<u64, FrameCallback>>,
    next_handle: Cell<u64>,
    /// Total frame requests ever made
    frame_requests: Cell<u64>,
    /// Captured debug messages
    debug_log: RefCell<Vec<String>>,
    fail_mount: Cell<Option<HostError>>,
    fail_subscribe: Cell<bool>,
    fail_frames: Cell<bool>,
}

impl MockHost {
    /// Create a new mock host with a 1920x1080 viewport at ratio 1
    pub fn new() -> Self {
        Self::with_viewport(Viewport::default())
    }

    /// Create a mock host with a specific viewport
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            time_ms: Cell::new(0.0),
            viewport: Cell::new(viewport),
            hidden: Cell::new(false),
            root: RefCell::new(Vec::new()),
            listeners: RefCell::new(BTreeMap::new()),
            frames: RefCell::new(BTreeMap::new()),
            next_handle: Cell::new(1),
            frame_requests: Cell::new(0),
            debug_log: RefCell::new(Vec::new()),
            fail_mount: Cell::new(None),
            fail_subscribe: Cell::new(false),
            fail_frames: Cell::new(false),
        }
    }

    fn next_id(&self) -> u64 {
        let id = self.next_handle.get();
        self.next_handle.set(id + 1);
        id
    }

    // === Clock ===

    /// Advance the simulated time
    pub fn advance_time(&self, ms: f64) {
        self.time_ms.set(self.time_ms.get() + ms);
    }

    /// Set the simulated time to a specific value
    pub fn set_time(&self, ms: f64) {
        self.time_ms.set(ms);
    }

    // === Page ===

    /// Insert an element with `id` at the front of the page root, as a
    /// previous page load would have left behind
    pub fn inject_stale_surface(&self, id: &str) -> MockSurface {
        let handle = self.next_id();
        self.root.borrow_mut().insert(
            0,
            MockElement {
                handle,
                id: String::from(id),
                size: None,
            },
        );
        MockSurface(handle)
    }

    /// Append an ordinary content element to the page root
    pub fn append_content(&self, id: &str) -> MockSurface {
        let handle = self.next_id();
        self.root.borrow_mut().push(MockElement {
            handle,
            id: String::from(id),
            size: None,
        });
        MockSurface(handle)
    }

    /// Number of page root elements carrying `id`
    pub fn surfaces_with_id(&self, id: &str) -> usize {
        self.root.borrow().iter().filter(|e| e.id == id).count()
    }

    /// Total number of page root elements
    pub fn element_count(&self) -> usize {
        self.root.borrow().len()
    }

    /// Handle of the first page root child, if any
    pub fn first_child(&self) -> Option<MockSurface> {
        self.root.borrow().first().map(|e| MockSurface(e.handle))
    }

    /// Whether `surface` is still attached to the page
    pub fn is_attached(&self, surface: MockSurface) -> bool {
        self.root.borrow().iter().any(|e| e.handle == surface.0)
    }

    /// Last size applied to `surface`
    pub fn surface_size(&self, surface: MockSurface) -> Option<SurfaceSize> {
        self.root
            .borrow()
            .iter()
            .find(|e| e.handle == surface.0)
            .and_then(|e| e.size)
    }

    // === Events ===

    /// Change the viewport and dispatch a resize event
    pub fn resize_to(&self, width: f32, height: f32, device_pixel_ratio: f32) {
        self.viewport
            .set(Viewport::new(width, height, device_pixel_ratio));
        self.dispatch(HostEvent::Resize);
    }

    /// Change page visibility and dispatch a visibility change event
    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
        self.dispatch(HostEvent::VisibilityChange);
    }

    /// Change page visibility without dispatching (page state at mount time)
    pub fn set_hidden_silently(&self, hidden: bool) {
        self.hidden.set(hidden);
    }

    /// Invoke every live listener subscribed to `event`
    ///
    /// Listeners are collected first so they can call back into the host;
    /// a listener revoked by an earlier one in the same dispatch is skipped.
    pub fn dispatch(&self, event: HostEvent) {
        let targets: Vec<(u64, Rc<RefCell<Listener>>)> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, l)| l.event == event)
            .map(|(id, l)| (*id, l.listener.clone()))
            .collect();

        for (id, listener) in targets {
            if !self.listeners.borrow().contains_key(&id) {
                continue;
            }
            let mut listener = listener.borrow_mut();
            (*listener)();
        }
    }

    /// Number of live subscriptions for `event`
    pub fn listener_count(&self, event: HostEvent) -> usize {
        self.listeners
            .borrow()
            .values()
            .filter(|l| l.event == event)
            .count()
    }

    // === Frames ===

    /// Run every pending frame callback with the current time
    ///
    /// Callbacks requested while flushing wait for the next call.
    /// Returns the number of callbacks run.
    pub fn fire_frame(&self) -> usize {
        let pending = core::mem::take(&mut *self.frames.borrow_mut());
        let now = self.time_ms.get();
        let count = pending.len();
        for (_, callback) in pending {
            callback(now);
        }
        count
    }

    /// Advance time by `ms` and then fire a frame
    pub fn step(&self, ms: f64) -> usize {
        self.advance_time(ms);
        self.fire_frame()
    }

    /// Number of frame callbacks waiting for the next refresh
    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Total number of frame requests ever made
    pub fn frame_request_count(&self) -> u64 {
        self.frame_requests.get()
    }

    // === Failure injection ===

    /// Make the next and all following mounts fail with `error`
    pub fn fail_mounts_with(&self, error: Option<HostError>) {
        self.fail_mount.set(error);
    }

    /// Make subscriptions fail
    pub fn fail_subscriptions(&self, fail: bool) {
        self.fail_subscribe.set(fail);
    }

    /// Make frame requests fail
    pub fn fail_frame_requests(&self, fail: bool) {
        self.fail_frames.set(fail);
    }

    // === Debug log ===

    /// Get all captured debug messages
    pub fn get_debug_log(&self) -> Vec<String> {
        self.debug_log.borrow().clone()
    }

    /// Clear the debug log
    pub fn clear_debug_log(&self) {
        self.debug_log.borrow_mut().clear();
    }

    /// Check if a specific message was logged
    pub fn has_log_containing(&self, substr: &str) -> bool {
        self.debug_log
            .borrow()
            .iter()
            .any(|msg| msg.contains(substr))
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MockHost {
    type Surface = MockSurface;

    fn remove_stale_surface(&self, id: &str) -> bool {
        let mut root = self.root.borrow_mut();
        let before = root.len();
        root.retain(|e| e.id != id);
        before != root.len()
    }

    fn mount_surface(&self, id: &str) -> Result<Self::Surface, HostError> {
        if let Some(err) = self.fail_mount.get() {
            return Err(err);
        }
        let handle = self.next_id();
        self.root.borrow_mut().insert(
            0,
            MockElement {
                handle,
                id: String::from(id),
                size: None,
            },
        );
        self.debug_log
            .borrow_mut()
            .push(format!("[mock-host] Mounted surface '{}' as #{}", id, handle));
        Ok(MockSurface(handle))
    }

    fn size_surface(&self, surface: &Self::Surface, size: SurfaceSize) {
        if let Some(el) = self
            .root
            .borrow_mut()
            .iter_mut()
            .find(|e| e.handle == surface.0)
        {
            el.size = Some(size);
        }
    }

    fn unmount_surface(&self, surface: &Self::Surface) {
        let mut root = self.root.borrow_mut();
        let before = root.len();
        root.retain(|e| e.handle != surface.0);
        if before != root.len() {
            self.debug_log
                .borrow_mut()
                .push(format!("[mock-host] Unmounted surface #{}", surface.0));
        }
    }

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn is_page_hidden(&self) -> bool {
        self.hidden.get()
    }

    fn subscribe(&self, event: HostEvent, listener: Listener) -> Result<SubscriptionId, HostError> {
        if self.fail_subscribe.get() {
            return Err(HostError::SubscriptionFailed);
        }
        let id = self.next_id();
        self.listeners.borrow_mut().insert(
            id,
            MockListener {
                event,
                listener: Rc::new(RefCell::new(listener)),
            },
        );
        Ok(SubscriptionId::new(id))
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().remove(&id.id());
    }

    fn request_frame(&self, callback: FrameCallback) -> Result<FrameRequestId, HostError> {
        if self.fail_frames.get() {
            return Err(HostError::FrameRequestFailed);
        }
        let id = self.next_id();
        self.frames.borrow_mut().insert(id, callback);
        self.frame_requests.set(self.frame_requests.get() + 1);
        Ok(FrameRequestId::new(id))
    }

    fn cancel_frame(&self, id: FrameRequestId) {
        self.frames.borrow_mut().remove(&id.id());
    }

    fn now_ms(&self) -> f64 {
        self.time_ms.get()
    }

    fn debug_write(&self, msg: &str) {
        self.debug_log.borrow_mut().push(String::from(msg));
    }
}
