use gloo::console;
use js_sys::{Object, Reflect};
use kagami_core::PageConfig;
use wasm_bindgen::{JsCast, JsValue};

// e.g. `window.__KAGAMI_CONFIG = { upload_max_edge: 800 }`
pub const CONFIG_GLOBAL: &str = "__KAGAMI_CONFIG";

pub fn load_page_config() -> PageConfig {
    let defaults = PageConfig::default();
    let Some(overrides) = config_object() else {
        return defaults;
    };
    let (config, rejected) = defaults.with_overrides(|key| {
        let value = Reflect::get(&overrides, &JsValue::from_str(key)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(value.as_f64().unwrap_or(f64::NAN))
    });
    for item in rejected {
        console::warn!("ignoring config override", item.key, item.value);
    }
    config
}

fn config_object() -> Option<Object> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value.dyn_into::<Object>().ok()
}
