pub mod dom;
pub mod overlay;
pub mod settings;
pub mod web_touch;

pub use dom::{DomHost, DomIndicator, DomOverlay};
pub use overlay::{IndicatorView, TouchOverlay, ViewHost, pressure_scale};
