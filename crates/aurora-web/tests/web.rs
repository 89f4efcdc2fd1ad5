//! Browser tests for the web host and page shell
//!
//! Run with `wasm-pack test --headless --firefox crates/aurora-web`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use aurora_host::{FrameRequestId, Host, HostEvent, SurfaceSize, Viewport};
use aurora_web::{PageShell, WebHost};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn count_with_id(id: &str) -> u32 {
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .query_selector_all(&format!("#{}", id))
        .unwrap()
        .length()
}

/// Resolves after the browser's next animation frame has run
async fn next_animation_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = web_sys::window().unwrap().request_animation_frame(&resolve);
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn test_mount_surface_is_first_body_child() {
    let host = WebHost::new().unwrap();
    let canvas = host.mount_surface("aurora-test-first").unwrap();

    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    let first = body.first_element_child().unwrap();
    assert_eq!(first.id(), "aurora-test-first");

    let style = canvas.style();
    assert_eq!(style.get_property_value("pointer-events").unwrap(), "none");
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
    assert_eq!(style.get_property_value("z-index").unwrap(), "-1");

    host.unmount_surface(&canvas);
    assert_eq!(count_with_id("aurora-test-first"), 0);
}

#[wasm_bindgen_test]
fn test_size_surface_sets_backing_store() {
    let host = WebHost::new().unwrap();
    let canvas = host.mount_surface("aurora-test-size").unwrap();
    let size = SurfaceSize::from_viewport(Viewport::new(300.0, 200.0, 3.0), 2.0);
    host.size_surface(&canvas, size);

    assert_eq!(canvas.width(), 600);
    assert_eq!(canvas.height(), 400);
    assert_eq!(canvas.style().get_property_value("width").unwrap(), "300px");
    host.unmount_surface(&canvas);
}

#[wasm_bindgen_test]
fn test_remove_stale_surface() {
    let host = WebHost::new().unwrap();
    host.mount_surface("aurora-test-stale").unwrap();
    assert!(host.remove_stale_surface("aurora-test-stale"));
    assert!(!host.remove_stale_surface("aurora-test-stale"));
    assert_eq!(count_with_id("aurora-test-stale"), 0);
}

#[wasm_bindgen_test]
fn test_subscribe_and_unsubscribe() {
    let host = WebHost::new().unwrap();
    let id = host.subscribe(HostEvent::Resize, Box::new(|| {})).unwrap();
    host.unsubscribe(id);
    // Unknown ids are ignored
    host.unsubscribe(id);
}

#[wasm_bindgen_test]
fn test_cancelled_frame_is_released() {
    let host = WebHost::new().unwrap();
    let id = host.request_frame(Box::new(|_: f64| {})).unwrap();
    assert_eq!(host.retained_frames(), 1);
    host.cancel_frame(id);
    assert_eq!(host.retained_frames(), 0);
}

#[wasm_bindgen_test]
async fn test_fired_frame_released_on_cancel() {
    let host = WebHost::new().unwrap();
    let ran = Rc::new(Cell::new(false));
    let flag = ran.clone();
    host.request_frame(Box::new(move |_: f64| flag.set(true)))
        .unwrap();

    next_animation_frame().await;
    assert!(ran.get());
    assert_eq!(host.retained_frames(), 1);

    // Cancelling an unknown request still drops fired closures
    host.cancel_frame(FrameRequestId::new(u64::MAX));
    assert_eq!(host.retained_frames(), 0);
}

#[wasm_bindgen_test]
async fn test_fired_frame_released_on_unsubscribe() {
    let host = WebHost::new().unwrap();
    let sub = host
        .subscribe(HostEvent::VisibilityChange, Box::new(|| {}))
        .unwrap();
    host.request_frame(Box::new(|_: f64| {})).unwrap();

    next_animation_frame().await;
    assert_eq!(host.retained_frames(), 1);

    host.unsubscribe(sub);
    assert_eq!(host.retained_frames(), 0);
}

#[wasm_bindgen_test]
fn test_page_shell_replaces_backdrop() {
    let mut shell = PageShell::new().unwrap();
    assert_eq!(shell.backdrop_state(), "none");
    assert_eq!(shell.get_backdrop_json(), "null");

    shell.mount_backdrop();
    shell.mount_backdrop();
    assert_eq!(count_with_id("aurora-bg"), 1);
    assert_ne!(shell.backdrop_state(), "destroyed");

    shell.unmount_backdrop();
    assert_eq!(shell.backdrop_state(), "none");
    assert_eq!(count_with_id("aurora-bg"), 0);
}

#[wasm_bindgen_test]
fn test_page_shell_config() {
    let shell = PageShell::with_config(r#"{"elementId": "aurora-alt", "timeScale": 0.5}"#).unwrap();
    let json = shell.get_config_json();
    assert!(json.contains("\"elementId\":\"aurora-alt\""));
    assert!(PageShell::with_config("{").is_err());
}
