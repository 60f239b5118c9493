// Persistence of OverlaySettings in localStorage
use log::warn;

use crate::model::{OverlayError, OverlaySettings};
use crate::util::local_storage;

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

pub const SETTINGS_KEY: &str = "to_settings";

/// Missing fields take their defaults; out-of-range values are clamped.
pub fn decode(raw: &str) -> Result<OverlaySettings, OverlayError> {
    let settings: OverlaySettings = serde_json::from_str(raw)?;
    Ok(settings.sanitized())
}

pub fn encode(settings: &OverlaySettings) -> Result<String, OverlayError> {
    Ok(serde_json::to_string(settings)?)
}

fn read() -> Result<Option<OverlaySettings>, OverlayError> {
    let store = local_storage()?;
    let raw = store
        .get_item(SETTINGS_KEY)
        .map_err(|e| OverlayError::Storage(format!("{:?}", e)))?;
    raw.as_deref().map(decode).transpose()
}

/// Stored settings, or the defaults when nothing usable is stored.
pub fn load() -> OverlaySettings {
    match read() {
        Ok(Some(settings)) => settings,
        Ok(None) => OverlaySettings::default(),
        Err(e) => {
            warn!("falling back to default settings: {}", e);
            OverlaySettings::default()
        }
    }
}

pub fn save(settings: &OverlaySettings) -> Result<(), OverlayError> {
    let raw = encode(settings)?;
    local_storage()?
        .set_item(SETTINGS_KEY, &raw)
        .map_err(|e| OverlayError::Storage(format!("{:?}", e)))
}

pub fn forget() -> Result<(), OverlayError> {
    local_storage()?
        .remove_item(SETTINGS_KEY)
        .map_err(|e| OverlayError::Storage(format!("{:?}", e)))
}
