//! Core data models for the touch overlay.
//! Geometry, the touch records delivered by the platform, and overlay configuration.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Side length of an indicator when nothing else is configured.
pub const DEFAULT_INDICATOR_EDGE: f64 = 50.0;
/// Force of an average touch. Pressure scaling is relative to this.
pub const UNIT_FORCE: f64 = 1.0;
pub const MIN_INDICATOR_EDGE: f64 = 16.0;
pub const DEFAULT_OPACITY: f64 = 0.6;
pub const MAX_INDICATOR_EDGE: f64 = 160.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn square(edge: f64) -> Self {
        Self::new(edge, edge)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::square(DEFAULT_INDICATOR_EDGE)
    }
}

/// Position and size of a view in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub origin: Point,
    pub size: Size,
}

impl Frame {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Frame of `size` whose center sits on `center` (origin = center - size / 2).
    pub fn centered_on(center: Point, size: Size) -> Self {
        Self {
            origin: Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Same size, moved so that its center is `center`.
    pub fn with_center(self, center: Point) -> Self {
        Self::centered_on(center, self.size)
    }
}

/// Platform identity of one contact, stable while the contact lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Stationary,
    Ended,
    Cancelled,
    /// Hover phases reported by pointer devices that are not in contact.
    RegionEntered,
    RegionMoved,
    RegionExited,
}

impl TouchPhase {
    /// Ended and cancelled touches release their indicator.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// A force reading. `value` is in units of [`UNIT_FORCE`], bounded by `max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Force {
    pub value: f64,
    pub max: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchRecord {
    pub id: TouchId,
    pub phase: TouchPhase,
    pub location: Point,
    /// `None` on devices without pressure support.
    pub force: Option<Force>,
}

impl TouchRecord {
    pub fn new(id: TouchId, phase: TouchPhase, location: Point) -> Self {
        Self {
            id,
            phase,
            location,
            force: None,
        }
    }

    pub fn with_force(mut self, force: Force) -> Self {
        self.force = Some(force);
        self
    }
}

/// One delivery from the platform event stream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEventRecord {
    pub touches: Vec<TouchRecord>,
}

impl TouchEventRecord {
    pub fn new(touches: Vec<TouchRecord>) -> Self {
        Self { touches }
    }

    pub fn single(touch: TouchRecord) -> Self {
        Self::new(vec![touch])
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }
}

/// Immutable overlay configuration supplied at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayConfig {
    pub indicator_size: Size,
    pub pressure_enabled: bool,
    pub unit_force: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            indicator_size: Size::default(),
            pressure_enabled: false,
            unit_force: UNIT_FORCE,
        }
    }
}

/// Visual style applied to every DOM indicator when it is created.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorStyle {
    pub color: String,
    pub opacity: f64,
}

/// User-editable settings of the demo shell, persisted as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub indicator_edge: f64,
    pub pressure_enabled: bool,
    pub color: String,
    pub opacity: f64,
    pub show_touch_count: bool,
    /// Suppress scrolling/zooming while touches are visualized.
    pub capture_default: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            indicator_edge: DEFAULT_INDICATOR_EDGE,
            pressure_enabled: false,
            color: "#58a6ff".to_string(),
            opacity: DEFAULT_OPACITY,
            show_touch_count: true,
            capture_default: true,
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

impl OverlaySettings {
    /// Clamp values that came from storage or user input into their usable ranges.
    pub fn sanitized(mut self) -> Self {
        self.indicator_edge = finite_or(self.indicator_edge, DEFAULT_INDICATOR_EDGE)
            .clamp(MIN_INDICATOR_EDGE, MAX_INDICATOR_EDGE);
        self.opacity = finite_or(self.opacity, DEFAULT_OPACITY).clamp(0.1, 1.0);
        if self.color.trim().is_empty() {
            self.color = Self::default().color;
        }
        self
    }

    pub fn to_config(&self) -> OverlayConfig {
        OverlayConfig {
            indicator_size: Size::square(self.indicator_edge),
            pressure_enabled: self.pressure_enabled,
            unit_force: UNIT_FORCE,
        }
    }

    pub fn indicator_style(&self) -> IndicatorStyle {
        IndicatorStyle {
            color: self.color.clone(),
            opacity: self.opacity,
        }
    }
}

/// Live touch counters shown by the stats panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchStats {
    pub active: usize,
    pub peak: usize,
}

pub enum TouchStatsAction {
    /// Indicator count reported after a touch event.
    Count(usize),
    ResetPeak,
}

impl Reducible for TouchStats {
    type Action = TouchStatsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            TouchStatsAction::Count(active) => TouchStats {
                active,
                peak: self.peak.max(active),
            },
            TouchStatsAction::ResetPeak => TouchStats {
                active: self.active,
                peak: self.active,
            },
        };
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

/// Failures of the browser shell around the overlay core.
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("dom error: {0}")]
    Dom(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("settings decode error: {0}")]
    Settings(#[from] serde_json::Error),
}
