//! Aurora Backdrop
//!
//! A continuously animated, full-viewport procedural gradient that sits
//! behind all page content and never intercepts input.
//!
//! # Architecture
//!
//! - **Shading**: per-pixel color from domain-warped fractal value noise,
//!   evaluated on the CPU ([`shading::shade`]) and by an equivalent WGSL
//!   shader on the GPU
//! - **Lifecycle**: [`AnimatedBackdrop`] owns the surface, the renderer and
//!   every host subscription; pauses while the page is hidden
//! - **Registry**: [`BackdropRegistry`] keeps at most one live backdrop
//! - **Host**: all environment access goes through [`aurora_host::Host`]
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use aurora_backdrop::{BackdropConfig, BackdropRegistry};
//!
//! let mut registry = BackdropRegistry::new(Rc::new(host), BackdropConfig::default());
//! let backdrop = registry.replace();
//! backdrop.attach_renderer(renderer);
//! ```

pub mod backdrop;
pub mod clock;
pub mod config;
pub mod math;
pub mod registry;
pub mod renderer;
pub mod shading;
pub mod state;

#[cfg(feature = "wasm")]
pub mod background;

pub use backdrop::{AnimatedBackdrop, BackdropRef, BackdropSnapshot};
pub use clock::FrameClock;
pub use config::{BackdropConfig, ConfigError};
pub use registry::BackdropRegistry;
pub use renderer::{RenderError, Renderer, SoftwareRenderer};
pub use shading::ShadingParameters;
pub use state::{BackdropState, RenderState};

#[cfg(feature = "wasm")]
pub use background::GpuRenderer;
