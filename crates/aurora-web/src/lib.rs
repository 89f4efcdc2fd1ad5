//! Browser bindings for the Aurora backdrop
//!
//! - [`WebHost`]: the [`Host`](aurora_host::Host) boundary over `window`
//!   and `document`
//! - [`PageShell`]: the object the landing page holds; mounts, replaces and
//!   tears down the backdrop and attaches the GPU renderer once a context
//!   is available

mod host;
mod shell;

pub use host::WebHost;
pub use shell::PageShell;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
