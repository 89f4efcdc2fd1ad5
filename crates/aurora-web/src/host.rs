//! Browser implementation of the host boundary

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use aurora_host::{
    FrameCallback, FrameRequestId, Host, HostError, HostEvent, Listener, SubscriptionId,
    SurfaceSize, Viewport,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::log;

/// Inline styles of the backdrop canvas: fixed behind everything, inert
const SURFACE_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("z-index", "-1"),
    ("pointer-events", "none"),
    ("display", "block"),
];

struct EventSubscription {
    event: HostEvent,
    closure: Closure<dyn FnMut()>,
}

struct PendingFrame {
    handle: i32,
    _closure: Closure<dyn FnMut(f64)>,
}

/// Host backed by `window` and `document`
///
/// Resize listeners attach to `window`, visibility listeners to `document`.
/// Frame closures stay alive until the browser has run them; ids of fired
/// frames are collected and their closures dropped on the next request,
/// cancel or unsubscribe, never from inside the closure itself.
pub struct WebHost {
    window: Window,
    document: Document,
    next_id: Cell<u64>,
    listeners: RefCell<HashMap<u64, EventSubscription>>,
    frames: RefCell<HashMap<u64, PendingFrame>>,
    fired: Rc<RefCell<Vec<u64>>>,
}

impl WebHost {
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoDocument)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self {
            window,
            document,
            next_id: Cell::new(1),
            listeners: RefCell::new(HashMap::new()),
            frames: RefCell::new(HashMap::new()),
            fired: Rc::new(RefCell::new(Vec::new())),
        })
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn event_target(&self, event: HostEvent) -> &web_sys::EventTarget {
        match event {
            HostEvent::Resize => self.window.as_ref(),
            HostEvent::VisibilityChange => self.document.as_ref(),
        }
    }

    /// Drop closures of frames the browser has already run
    fn purge_fired(&self) {
        let fired: Vec<u64> = self.fired.borrow_mut().drain(..).collect();
        if fired.is_empty() {
            return;
        }
        let mut frames = self.frames.borrow_mut();
        for id in fired {
            frames.remove(&id);
        }
    }

    /// Number of frame closures still held
    pub fn retained_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    fn create_canvas(&self, id: &str) -> Result<HtmlCanvasElement, JsValue> {
        let canvas: HtmlCanvasElement = self.document.create_element("canvas")?.dyn_into()?;
        canvas.set_id(id);
        canvas.set_attribute("aria-hidden", "true")?;
        let style = canvas.style();
        for (name, value) in SURFACE_STYLES {
            style.set_property(name, value)?;
        }
        Ok(canvas)
    }
}

impl Host for WebHost {
    type Surface = HtmlCanvasElement;

    fn remove_stale_surface(&self, id: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(element) => {
                element.remove();
                true
            }
            None => false,
        }
    }

    fn mount_surface(&self, id: &str) -> Result<Self::Surface, HostError> {
        let body = self.document.body().ok_or(HostError::NoDocument)?;
        let canvas = self.create_canvas(id).map_err(|e| {
            log(&format!("[aurora-web] Failed to create canvas: {:?}", e));
            HostError::SurfaceUnavailable
        })?;
        let first = body.first_child();
        body.insert_before(&canvas, first.as_ref()).map_err(|e| {
            log(&format!("[aurora-web] Failed to insert canvas: {:?}", e));
            HostError::SurfaceUnavailable
        })?;
        Ok(canvas)
    }

    fn size_surface(&self, surface: &Self::Surface, size: SurfaceSize) {
        surface.set_width(size.pixel_width);
        surface.set_height(size.pixel_height);
        let style = surface.style();
        let _ = style.set_property("width", &format!("{}px", size.css_width));
        let _ = style.set_property("height", &format!("{}px", size.css_height));
    }

    fn unmount_surface(&self, surface: &Self::Surface) {
        surface.remove();
    }

    fn viewport(&self) -> Viewport {
        let extent = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Viewport::new(
            extent(self.window.inner_width()),
            extent(self.window.inner_height()),
            self.window.device_pixel_ratio() as f32,
        )
    }

    fn is_page_hidden(&self) -> bool {
        self.document.hidden()
    }

    fn subscribe(&self, event: HostEvent, listener: Listener) -> Result<SubscriptionId, HostError> {
        let mut listener = listener;
        let closure = Closure::wrap(Box::new(move || listener()) as Box<dyn FnMut()>);
        self.event_target(event)
            .add_event_listener_with_callback(
                event.dom_name(),
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
            )
            .map_err(|_| HostError::SubscriptionFailed)?;

        let id = self.next_id();
        self.listeners
            .borrow_mut()
            .insert(id, EventSubscription { event, closure });
        Ok(SubscriptionId::new(id))
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.purge_fired();

        let removed = self.listeners.borrow_mut().remove(&id.id());
        if let Some(sub) = removed {
            let _ = self.event_target(sub.event).remove_event_listener_with_callback(
                sub.event.dom_name(),
                sub.closure.as_ref().unchecked_ref::<js_sys::Function>(),
            );
        }
    }

    fn request_frame(&self, callback: FrameCallback) -> Result<FrameRequestId, HostError> {
        self.purge_fired();

        let id = self.next_id();
        let fired = self.fired.clone();
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(callback) = callback.take() {
                callback(timestamp);
            }
            // Recorded after the callback so a request made from inside it
            // cannot drop this closure while it runs
            fired.borrow_mut().push(id);
        }) as Box<dyn FnMut(f64)>);

        let handle = self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(|_| HostError::FrameRequestFailed)?;
        self.frames.borrow_mut().insert(
            id,
            PendingFrame {
                handle,
                _closure: closure,
            },
        );
        Ok(FrameRequestId::new(id))
    }

    fn cancel_frame(&self, id: FrameRequestId) {
        self.purge_fired();

        let removed = self.frames.borrow_mut().remove(&id.id());
        if let Some(frame) = removed {
            let _ = self.window.cancel_animation_frame(frame.handle);
        }
    }

    fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn debug_write(&self, msg: &str) {
        log(msg);
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        let ids: Vec<u64> = self.listeners.borrow().keys().copied().collect();
        for id in ids {
            self.unsubscribe(SubscriptionId::new(id));
        }
        let frames: Vec<u64> = self.frames.borrow().keys().copied().collect();
        for id in frames {
            self.cancel_frame(FrameRequestId::new(id));
        }
    }
}
