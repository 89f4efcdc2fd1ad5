//! Page-facing wrapper around the backdrop registry

use std::rc::Rc;

use aurora_backdrop::{BackdropConfig, BackdropRegistry, GpuRenderer};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::host::WebHost;
use crate::log;

/// WASM-bindgen wrapper owning the page's backdrop
#[wasm_bindgen]
pub struct PageShell {
    registry: BackdropRegistry<WebHost>,
}

#[wasm_bindgen]
impl PageShell {
    /// Create a shell with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PageShell, JsValue> {
        Self::create(BackdropConfig::default())
    }

    /// Create a shell from a JSON config, e.g. `{"timeScale": 0.5}`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<PageShell, JsValue> {
        let config =
            BackdropConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::create(config)
    }

    fn create(config: BackdropConfig) -> Result<PageShell, JsValue> {
        let host = WebHost::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            registry: BackdropRegistry::new(Rc::new(host), config),
        })
    }

    /// Mount a fresh backdrop, replacing any existing one
    ///
    /// The GPU renderer is created asynchronously; until then (or if no GPU
    /// context is available) the backdrop animates without drawing.
    #[wasm_bindgen(js_name = mountBackdrop)]
    pub fn mount_backdrop(&mut self) {
        let backdrop = self.registry.replace();
        let Some(canvas) = backdrop.surface() else {
            return;
        };
        let handle = backdrop.downgrade();

        spawn_local(async move {
            log("[aurora-web] Initializing GPU renderer...");
            match GpuRenderer::new(canvas).await {
                Ok(renderer) => {
                    if handle.attach_renderer(renderer) {
                        log("[aurora-web] GPU renderer ready");
                    }
                }
                Err(e) => log(&format!(
                    "[aurora-web] GPU renderer unavailable, continuing without drawing: {}",
                    e
                )),
            }
        });
    }

    /// Destroy the current backdrop
    #[wasm_bindgen(js_name = unmountBackdrop)]
    pub fn unmount_backdrop(&mut self) {
        self.registry.clear();
    }

    /// "active" | "paused" | "destroyed" | "none"
    #[wasm_bindgen(js_name = backdropState)]
    pub fn backdrop_state(&self) -> String {
        self.registry
            .current()
            .map(|b| b.state().id())
            .unwrap_or("none")
            .to_string()
    }

    /// Virtual time of the current backdrop in seconds
    #[wasm_bindgen(js_name = backdropTime)]
    pub fn backdrop_time(&self) -> f64 {
        self.registry.current().map_or(0.0, |b| b.time())
    }

    /// Snapshot of the current backdrop as JSON, or `null`
    #[wasm_bindgen(js_name = getBackdropJson)]
    pub fn get_backdrop_json(&self) -> String {
        self.registry
            .current()
            .map(|b| b.snapshot().to_json())
            .unwrap_or_else(|| "null".to_string())
    }

    /// Active configuration as JSON
    #[wasm_bindgen(js_name = getConfigJson)]
    pub fn get_config_json(&self) -> String {
        serde_json::to_string(self.registry.config()).unwrap_or_else(|_| "{}".to_string())
    }
}
