//! Touch overlay: keeps one indicator view per active touch.
//!
//! `TouchOverlay` consumes platform touch events and maintains a map from
//! touch identity to the indicator it created for that touch. Indicators are
//! created on `Began`, re-centered on `Moved`, and detached on `Ended` or
//! `Cancelled`. With pressure enabled every event also rescales the indicator
//! of each touch that reports force.
//!
//! The overlay is platform neutral: indicators are produced by a factory and
//! shown through a [`ViewHost`], so the DOM layer and the tests plug in their
//! own view types.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use std::collections::HashMap;

use log::{debug, trace};

use crate::model::{Frame, OverlayConfig, TouchEventRecord, TouchId, TouchPhase, TouchRecord};

/// A view the overlay can position and scale.
pub trait IndicatorView {
    fn frame(&self) -> Frame;
    fn set_frame(&mut self, frame: Frame);
    /// Uniform scale around the view's center.
    fn set_scale(&mut self, scale: f64);
}

/// The view hierarchy indicators are shown in. Attached views go on top of
/// existing content.
pub trait ViewHost<V> {
    fn attach(&mut self, view: &V);
    fn detach(&mut self, view: &V);
}

pub type IndicatorFactory<V> = Box<dyn Fn(Frame) -> V>;
pub type IndicatorCustomizer<V> = Box<dyn Fn(&mut V)>;

/// Scale for a force reading: `max(1, sqrt(force / unit_force))`.
pub fn pressure_scale(force: f64, unit_force: f64) -> f64 {
    if unit_force <= 0.0 {
        return 1.0;
    }
    // NaN from a negative reading collapses to 1 through f64::max.
    (force / unit_force).sqrt().max(1.0)
}

pub struct TouchOverlay<V, H> {
    config: OverlayConfig,
    factory: IndicatorFactory<V>,
    customize: Option<IndicatorCustomizer<V>>,
    host: H,
    indicators: HashMap<TouchId, V>,
}

impl<V: IndicatorView, H: ViewHost<V>> TouchOverlay<V, H> {
    pub fn new(config: OverlayConfig, factory: impl Fn(Frame) -> V + 'static, host: H) -> Self {
        Self {
            config,
            factory: Box::new(factory),
            customize: None,
            host,
            indicators: HashMap::new(),
        }
    }

    /// Run `customize` once on every indicator before it is attached.
    pub fn with_customizer(mut self, customize: impl Fn(&mut V) + 'static) -> Self {
        self.customize = Some(Box::new(customize));
        self
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn active_count(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_tracking(&self, id: TouchId) -> bool {
        self.indicators.contains_key(&id)
    }

    pub fn indicator(&self, id: TouchId) -> Option<&V> {
        self.indicators.get(&id)
    }

    /// Apply one delivered event, touch by touch, in delivery order.
    pub fn handle(&mut self, event: &TouchEventRecord) {
        for touch in &event.touches {
            self.apply_phase(touch);
            if self.config.pressure_enabled {
                self.apply_pressure(touch);
            }
        }
    }

    /// Detach and drop every indicator.
    pub fn clear(&mut self) {
        for (id, view) in self.indicators.drain() {
            debug!("releasing indicator for touch {}", id.0);
            self.host.detach(&view);
        }
    }

    fn apply_phase(&mut self, touch: &TouchRecord) {
        match touch.phase {
            TouchPhase::Began => self.begin(touch),
            TouchPhase::Moved => self.move_to(touch),
            phase if phase.is_terminal() => self.release(touch.id),
            // Stationary and hover phases leave indicators alone.
            _ => {}
        }
    }

    fn begin(&mut self, touch: &TouchRecord) {
        // A reused identity after a missed end must not leave its old indicator behind.
        self.release(touch.id);
        let frame = Frame::centered_on(touch.location, self.config.indicator_size);
        let mut view = (self.factory)(frame);
        if let Some(customize) = &self.customize {
            customize(&mut view);
        }
        self.host.attach(&view);
        debug!(
            "indicator for touch {} at ({:.1}, {:.1})",
            touch.id.0, touch.location.x, touch.location.y
        );
        self.indicators.insert(touch.id, view);
    }

    fn move_to(&mut self, touch: &TouchRecord) {
        match self.indicators.get_mut(&touch.id) {
            Some(view) => {
                let frame = view.frame().with_center(touch.location);
                view.set_frame(frame);
            }
            None => trace!("move for untracked touch {}", touch.id.0),
        }
    }

    fn release(&mut self, id: TouchId) {
        if let Some(view) = self.indicators.remove(&id) {
            debug!("releasing indicator for touch {}", id.0);
            self.host.detach(&view);
        }
    }

    fn apply_pressure(&mut self, touch: &TouchRecord) {
        let Some(force) = touch.force else {
            return;
        };
        if let Some(view) = self.indicators.get_mut(&touch.id) {
            let reading = force.value.min(force.max);
            view.set_scale(pressure_scale(reading, self.config.unit_force));
        }
    }
}
