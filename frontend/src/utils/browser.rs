use wasm_bindgen::JsValue;
use web_sys::Window;

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

/// Reads `window[name]`, treating `undefined` and `null` as absent.
pub fn global(name: &str) -> Result<Option<JsValue>, String> {
    let window = window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|_| format!("Cannot read window.{}", name))?;
    if value.is_undefined() || value.is_null() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_global_is_absent() {
        assert!(global("__HARDHAT_MISSING").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn object_global_is_loaded_as_config() {
        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"app_title".into(), &"From page".into()).unwrap();
        js_sys::Reflect::set(&window().unwrap(), &crate::config::CONFIG_GLOBAL.into(), &config)
            .unwrap();
        let loaded = crate::config::load().unwrap();
        assert_eq!(loaded.app_title(), "From page");
    }
}
