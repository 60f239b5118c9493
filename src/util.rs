// Browser helpers shared by components
use web_sys::{Storage, Window};

use crate::model::OverlayError;

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

/// Console logging and panic messages in the browser. Natively a no-op.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    }
}

pub fn window() -> Result<Window, OverlayError> {
    web_sys::window().ok_or(OverlayError::NoWindow)
}

pub fn local_storage() -> Result<Storage, OverlayError> {
    match window()?.local_storage() {
        Ok(Some(store)) => Ok(store),
        Ok(None) => Err(OverlayError::Storage("localStorage unavailable".to_string())),
        Err(e) => Err(OverlayError::Storage(format!("{:?}", e))),
    }
}

/// CSS pixel length. Whole values print without a fraction.
pub fn css_px(value: f64) -> String {
    format!("{}px", value)
}
