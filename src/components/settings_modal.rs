use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{MAX_INDICATOR_EDGE, MIN_INDICATOR_EDGE, OverlaySettings};
use crate::util::css_px;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub settings: OverlaySettings,
    pub on_change: Callback<OverlaySettings>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    // Every control edits a copy of the current settings and emits it whole.
    let edit = |apply: fn(&mut OverlaySettings, &HtmlInputElement)| {
        let cb = props.on_change.clone();
        let current = props.settings.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = current.clone();
            apply(&mut next, &input);
            cb.emit(next.sanitized());
        })
    };
    let toggle_pressure_cb = edit(|s, input| s.pressure_enabled = input.checked());
    let toggle_count_cb = edit(|s, input| s.show_touch_count = input.checked());
    let toggle_capture_cb = edit(|s, input| s.capture_default = input.checked());
    let edge_cb = edit(|s, input| {
        if let Ok(v) = input.value().parse::<f64>() {
            s.indicator_edge = v;
        }
    });
    let opacity_cb = edit(|s, input| {
        if let Ok(v) = input.value().parse::<f64>() {
            s.opacity = v;
        }
    });
    let color_cb = edit(|s, input| s.color = input.value());

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if win
                    .confirm_with_message("Restore the default overlay settings?")
                    .unwrap_or(false)
                {
                    cb.emit(());
                }
            } else {
                cb.emit(());
            }
        })
    };

    let s = &props.settings;
    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Overlay Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Indicator Size"}</span>
                    <input type="range" min={MIN_INDICATOR_EDGE.to_string()} max={MAX_INDICATOR_EDGE.to_string()} step="2" value={s.indicator_edge.to_string()} onchange={edge_cb} />
                    <span style="min-width:44px; text-align:right;">{ css_px(s.indicator_edge) }</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Opacity"}</span>
                    <input type="range" min="0.1" max="1" step="0.05" value={s.opacity.to_string()} onchange={opacity_cb} />
                    <span style="min-width:44px; text-align:right;">{ format!("{:.0}%", s.opacity * 100.0) }</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px;">
                    <span style="flex:1;">{"Color"}</span>
                    <input type="color" value={s.color.clone()} onchange={color_cb} />
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={s.pressure_enabled} onchange={toggle_pressure_cb} />
                    <span>{"Scale With Pressure"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={s.show_touch_count} onchange={toggle_count_cb} />
                    <span>{"Show Touch Count"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={s.capture_default} onchange={toggle_capture_cb} />
                    <span>{"Block Scrolling While Touching"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Restore Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Pressure scaling needs a device that reports touch force. Settings are stored in this browser."}</div>
        </div>
    </div>}
}
