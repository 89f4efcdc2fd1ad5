//! Integration tests for BackdropRegistry
//!
//! Repeated page setup must never leave two surfaces or two frame loops.

use std::rc::Rc;

use aurora_backdrop::{BackdropConfig, BackdropRegistry, BackdropState, SoftwareRenderer};
use aurora_host::HostEvent;
use aurora_host_mock::MockHost;

fn registry(host: &Rc<MockHost>) -> BackdropRegistry<MockHost> {
    BackdropRegistry::new(host.clone(), BackdropConfig::default())
}

#[test]
fn test_second_construction_owns_the_only_surface() {
    let host = Rc::new(MockHost::new());
    host.append_content("hero");
    let mut registry = registry(&host);

    let a = registry.replace().surface().unwrap();
    let b = registry.replace().surface().unwrap();

    assert_ne!(a, b);
    assert!(!host.is_attached(a));
    assert!(host.is_attached(b));
    assert_eq!(host.surfaces_with_id("aurora-bg"), 1);
    assert_eq!(host.first_child(), Some(b));
    assert_eq!(host.listener_count(HostEvent::Resize), 1);
    assert_eq!(host.listener_count(HostEvent::VisibilityChange), 1);
    assert_eq!(host.pending_frames(), 1);
    assert!(host.has_log_containing("Replacing existing backdrop"));
}

#[test]
fn test_full_page_lifecycle() {
    let host = Rc::new(MockHost::new());
    let mut registry = registry(&host);

    // A, then B
    registry.replace();
    let b = registry.replace().surface();
    assert_eq!(host.surfaces_with_id("aurora-bg"), 1);
    assert_eq!(host.first_child(), b);

    host.step(2000.0);
    let before = registry.current().unwrap().time();
    assert!((before - 0.6).abs() < 1e-9);

    // Hide: paused, nothing scheduled
    host.set_hidden(true);
    let current = registry.current().unwrap();
    assert_eq!(current.state(), BackdropState::Paused);
    assert_eq!(host.pending_frames(), 0);
    let requests = host.frame_request_count();
    host.step(30_000.0);
    assert_eq!(host.frame_request_count(), requests);

    // Show: active again, time resumes from the pre-hide value
    host.set_hidden(false);
    let current = registry.current().unwrap();
    assert_eq!(current.state(), BackdropState::Active);
    assert!((current.time() - before).abs() < 1e-12);
    host.step(1000.0);
    assert!((registry.current().unwrap().time() - (before + 0.3)).abs() < 1e-9);

    // Destroy B
    registry.current().unwrap().destroy();
    assert_eq!(host.surfaces_with_id("aurora-bg"), 0);
    assert_eq!(host.pending_frames(), 0);
    let requests = host.frame_request_count();
    host.step(1000.0);
    assert_eq!(host.frame_request_count(), requests);
}

#[test]
fn test_replacement_stops_previous_frame_loop() {
    let host = Rc::new(MockHost::new());
    let mut registry = registry(&host);
    registry.replace();
    host.step(16.0);
    registry.replace();

    // Only the new instance's first frame is pending
    assert_eq!(host.pending_frames(), 1);
    assert_eq!(host.step(16.0), 1);
    assert_eq!(host.pending_frames(), 1);
}

#[test]
fn test_software_renderer_draws_through_registry() {
    let host = Rc::new(MockHost::with_viewport(aurora_host::Viewport::new(64.0, 36.0, 1.0)));
    let mut registry = registry(&host);
    let backdrop = registry.replace();
    assert!(backdrop.attach_renderer(SoftwareRenderer::new(1, 1)));

    host.step(16.0);
    host.step(16.0);
    assert_eq!(registry.current().unwrap().frames_drawn(), 2);

    registry.clear();
    assert!(registry.current().is_none());
    assert_eq!(host.surfaces_with_id("aurora-bg"), 0);
    assert!(host.has_log_containing("Renderer released"));
}
