// DOM-backed indicator views and the layer they are attached to
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::model::{Frame, IndicatorStyle, OverlayError};
use crate::state::overlay::{IndicatorView, TouchOverlay, ViewHost};
use crate::util::css_px;

pub type DomOverlay = TouchOverlay<DomIndicator, DomHost>;

impl From<JsValue> for OverlayError {
    fn from(err: JsValue) -> Self {
        OverlayError::Dom(format!("{:?}", err))
    }
}

const BASE_STYLE: [(&str, &str); 6] = [
    ("position", "absolute"),
    ("border-radius", "50%"),
    ("pointer-events", "none"),
    ("box-sizing", "border-box"),
    ("border", "2px solid rgba(255,255,255,0.85)"),
    ("transform-origin", "center"),
];

/// An absolutely positioned `<div>` following one touch.
/// Holds no element when creation failed; it then renders nothing.
pub struct DomIndicator {
    element: Option<HtmlElement>,
    frame: Frame,
}

impl DomIndicator {
    pub fn create(document: &Document, frame: Frame) -> Result<Self, OverlayError> {
        let element = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| OverlayError::Dom("indicator is not an HtmlElement".to_string()))?;
        let indicator = Self {
            element: Some(element),
            frame,
        };
        for (prop, value) in BASE_STYLE {
            indicator.set_style(prop, value);
        }
        indicator.apply_frame();
        Ok(indicator)
    }

    pub fn detached(frame: Frame) -> Self {
        Self {
            element: None,
            frame,
        }
    }

    pub fn element(&self) -> Option<&HtmlElement> {
        self.element.as_ref()
    }

    pub fn set_appearance(&mut self, style: &IndicatorStyle) {
        self.set_style("background", &style.color);
        self.set_style("opacity", &format!("{:.2}", style.opacity));
    }

    fn set_style(&self, prop: &str, value: &str) {
        if let Some(el) = &self.element {
            if let Err(e) = el.style().set_property(prop, value) {
                warn!("indicator style {}: {:?}", prop, e);
            }
        }
    }

    fn apply_frame(&self) {
        let f = self.frame;
        self.set_style("left", &css_px(f.origin.x));
        self.set_style("top", &css_px(f.origin.y));
        self.set_style("width", &css_px(f.size.width));
        self.set_style("height", &css_px(f.size.height));
    }
}

impl IndicatorView for DomIndicator {
    fn frame(&self) -> Frame {
        self.frame
    }

    fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
        self.apply_frame();
    }

    fn set_scale(&mut self, scale: f64) {
        self.set_style("transform", &format!("scale({:.3})", scale));
    }
}

/// Factory for the overlay: builds indicators in `document`, falling back
/// to an element-less indicator when the DOM refuses.
pub fn indicator_factory(document: Document) -> impl Fn(Frame) -> DomIndicator {
    move |frame| {
        DomIndicator::create(&document, frame).unwrap_or_else(|e| {
            warn!("indicator unavailable: {}", e);
            DomIndicator::detached(frame)
        })
    }
}

/// The overlay layer element. Later children paint above earlier ones.
pub struct DomHost {
    layer: HtmlElement,
}

impl DomHost {
    pub fn new(layer: HtmlElement) -> Self {
        Self { layer }
    }
}

impl ViewHost<DomIndicator> for DomHost {
    fn attach(&mut self, view: &DomIndicator) {
        if let Some(el) = view.element() {
            if let Err(e) = self.layer.append_child(el) {
                warn!("attach indicator: {:?}", e);
            }
        }
    }

    fn detach(&mut self, view: &DomIndicator) {
        if let Some(el) = view.element() {
            el.remove();
        }
    }
}
