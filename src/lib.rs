//! Touch visualization overlay for the browser.
//!
//! `state::overlay` holds the platform neutral core that maps active touches to
//! indicator views; `state::web_touch` and `state::dom` connect it to DOM touch
//! events and elements; `components` is the yew shell around it.

pub mod components;
pub mod model;
pub mod state;
pub mod util;
