use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub hide_intro: Callback<()>,
    pub open_settings: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let hide_cb = props.hide_intro.clone();
    let hide_btn = Callback::from(move |_| hide_cb.emit(()));
    let settings_cb = {
        let cb = props.open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4; z-index:20;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{"Touch Overlay"}</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Every finger on the screen gets a marker. Handy for screen recordings and live demos."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Touch anywhere: a marker appears centered under each finger."}</li>
                <li>{"Drag: the marker follows; other fingers keep their markers."}</li>
                <li>{"Lift or cancel: the marker disappears."}</li>
                <li>{"Enable pressure scaling in Settings to grow markers with force."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={settings_cb}>{"Settings"}</button>
                <button onclick={hide_btn}>{"Start"}</button>
            </div>
        </div>
    }
}
