pub mod app;
pub mod intro_overlay;
pub mod settings_modal;
pub mod stats_panel;
pub mod touch_overlay_view;

pub use app::App;
pub use touch_overlay_view::TouchOverlayView;
