use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub active_touches: usize,
    pub peak_touches: usize,
    pub pressure_enabled: bool,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:50px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let open_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let pressure_label = if props.pressure_enabled { "On" } else { "Off" };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:10px; font-size:14px; z-index:10;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"☝"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Touches"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.active_touches }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"▲"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Peak"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ props.peak_touches }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f85149;", icon_style)}>{"◉"}</span>
                <span style={format!("{} color:#f85149;", label_style)}>{"Pressure"}</span>
                <span style={format!("{} color:#f85149;", value_style)}>{ pressure_label }</span>
            </div>
            <button onclick={open_cb} style="padding:4px 8px;">{"Settings"}</button>
        </div>
    }
}
