//! Core math types for shading

mod color;
mod interp;
mod vec2;

pub use color::Rgb;
pub use interp::{fade, fract, mix, smoothstep};
pub use vec2::{Mat2, Vec2};
