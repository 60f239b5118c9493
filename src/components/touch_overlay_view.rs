use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement, TouchEvent, Window};
use yew::prelude::*;

use crate::model::{OverlayError, OverlaySettings, Point};
use crate::state::dom::indicator_factory;
use crate::state::web_touch::{TOUCH_EVENTS, blocks_default, record_from_event, targets_control};
use crate::state::{DomHost, DomIndicator, DomOverlay, TouchOverlay};
use crate::util::window;

#[derive(Properties, PartialEq, Clone)]
pub struct TouchOverlayViewProps {
    pub settings: OverlaySettings,
    /// Emitted with the number of visible indicators after every touch event.
    #[prop_or_default]
    pub on_count: Callback<usize>,
    #[prop_or_default]
    pub children: Children,
}

/// Live listeners plus the overlay they feed. Dropped on unmount or settings change.
struct Attachment {
    target: HtmlElement,
    window: Window,
    on_touch: Closure<dyn FnMut(TouchEvent)>,
    on_blur: Closure<dyn FnMut(Event)>,
    overlay: Rc<RefCell<DomOverlay>>,
    on_count: Callback<usize>,
}

impl Attachment {
    fn listen(&self) -> Result<(), OverlayError> {
        let on_touch = self.on_touch.as_ref().unchecked_ref();
        for name in TOUCH_EVENTS {
            self.target.add_event_listener_with_callback(name, on_touch)?;
        }
        let on_blur = self.on_blur.as_ref().unchecked_ref();
        self.window.add_event_listener_with_callback("blur", on_blur)?;
        Ok(())
    }

    fn detach(self) {
        let on_touch = self.on_touch.as_ref().unchecked_ref();
        for name in TOUCH_EVENTS {
            let _ = self.target.remove_event_listener_with_callback(name, on_touch);
        }
        let on_blur = self.on_blur.as_ref().unchecked_ref();
        let _ = self.window.remove_event_listener_with_callback("blur", on_blur);
        self.overlay.borrow_mut().clear();
        self.on_count.emit(0);
    }
}

fn attach(
    container_ref: &NodeRef,
    layer_ref: &NodeRef,
    settings: &OverlaySettings,
    on_count: Callback<usize>,
) -> Result<Attachment, OverlayError> {
    let target = container_ref
        .cast::<HtmlElement>()
        .ok_or_else(|| OverlayError::Dom("overlay container not mounted".to_string()))?;
    let layer = layer_ref
        .cast::<HtmlElement>()
        .ok_or_else(|| OverlayError::Dom("indicator layer not mounted".to_string()))?;
    let window = window()?;
    let document = window.document().ok_or(OverlayError::NoDocument)?;

    let style = settings.indicator_style();
    let overlay = TouchOverlay::new(
        settings.to_config(),
        indicator_factory(document),
        DomHost::new(layer),
    )
    .with_customizer(move |indicator: &mut DomIndicator| indicator.set_appearance(&style));
    debug!(
        "touch overlay attached, indicator {:?}, pressure {}",
        overlay.config().indicator_size,
        overlay.config().pressure_enabled
    );
    let overlay = Rc::new(RefCell::new(overlay));

    let on_touch = {
        let overlay = overlay.clone();
        let target_tc = target.clone();
        let on_count = on_count.clone();
        let capture_default = settings.capture_default;
        Closure::wrap(Box::new(move |e: TouchEvent| {
            let rect = target_tc.get_bounding_client_rect();
            let record = record_from_event(&e, Point::new(rect.left(), rect.top()));
            if record.is_empty() {
                return;
            }
            let count = {
                let mut ov = overlay.borrow_mut();
                ov.handle(&record);
                ov.active_count()
            };
            if blocks_default(&e.type_(), capture_default, targets_control(&e)) {
                e.prevent_default();
            }
            on_count.emit(count);
        }) as Box<dyn FnMut(_)>)
    };

    // Touches in flight when the page loses focus never get their end event.
    let on_blur = {
        let overlay = overlay.clone();
        let on_count = on_count.clone();
        Closure::wrap(Box::new(move |_e: Event| {
            let mut ov = overlay.borrow_mut();
            if ov.active_count() > 0 {
                debug!("window blur, releasing {} indicators", ov.active_count());
                ov.clear();
                on_count.emit(0);
            }
        }) as Box<dyn FnMut(_)>)
    };

    let attachment = Attachment {
        target,
        window,
        on_touch,
        on_blur,
        overlay,
        on_count,
    };
    // Closures must outlive every listener that was registered before a failure.
    if let Err(e) = attachment.listen() {
        attachment.detach();
        return Err(e);
    }
    Ok(attachment)
}

#[function_component(TouchOverlayView)]
pub fn touch_overlay_view(props: &TouchOverlayViewProps) -> Html {
    let container_ref = use_node_ref();
    let layer_ref = use_node_ref();
    {
        let container_ref = container_ref.clone();
        let layer_ref = layer_ref.clone();
        let on_count = props.on_count.clone();
        use_effect_with(props.settings.clone(), move |settings| {
            let attachment = match attach(&container_ref, &layer_ref, settings, on_count) {
                Ok(a) => Some(a),
                Err(e) => {
                    warn!("touch overlay inactive: {}", e);
                    None
                }
            };
            move || {
                if let Some(a) = attachment {
                    a.detach();
                }
            }
        });
    }

    let touch_action = if props.settings.capture_default {
        "none"
    } else {
        "auto"
    };
    html! {
        <div ref={container_ref} style={format!("position:relative; width:100%; height:100%; overflow:hidden; touch-action:{};", touch_action)}>
            { props.children.clone() }
            <div ref={layer_ref} style="position:absolute; inset:0; pointer-events:none; overflow:hidden; z-index:1000;"></div>
        </div>
    }
}
