use log::warn;
use yew::prelude::*;

use super::{
    intro_overlay::IntroOverlay, settings_modal::SettingsModal, stats_panel::StatsPanel,
    touch_overlay_view::TouchOverlayView,
};
use crate::model::{OverlaySettings, TouchStats, TouchStatsAction};
use crate::state::settings;

#[function_component(App)]
pub fn app() -> Html {
    let overlay_settings = use_state(settings::load);
    let stats = use_reducer_eq(TouchStats::default);
    let show_settings = use_state(|| false);
    let show_intro = use_state(|| true);

    // Persist settings changes
    {
        use_effect_with((*overlay_settings).clone(), move |s| {
            if let Err(e) = settings::save(s) {
                warn!("settings not saved: {}", e);
            }
            || ()
        });
    }

    let on_count = {
        let stats = stats.dispatcher();
        Callback::from(move |n: usize| stats.dispatch(TouchStatsAction::Count(n)))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let open_settings_btn = {
        let cb = open_settings.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let hide_intro = {
        let show_intro = show_intro.clone();
        Callback::from(move |_| show_intro.set(false))
    };
    let change_settings = {
        let overlay_settings = overlay_settings.clone();
        Callback::from(move |next: OverlaySettings| overlay_settings.set(next))
    };
    let reset_settings = {
        let overlay_settings = overlay_settings.clone();
        let stats = stats.clone();
        Callback::from(move |_| {
            if let Err(e) = settings::forget() {
                warn!("stored settings not removed: {}", e);
            }
            overlay_settings.set(OverlaySettings::default());
            stats.dispatch(TouchStatsAction::ResetPeak);
        })
    };

    let s = (*overlay_settings).clone();
    html! {
        <div style="position:fixed; inset:0; background:#0d1117; color:#c9d1d9; font-family:sans-serif; user-select:none;">
            <TouchOverlayView settings={s.clone()} on_count={on_count}>
                if s.show_touch_count {
                    <StatsPanel
                        active_touches={stats.active}
                        peak_touches={stats.peak}
                        pressure_enabled={s.pressure_enabled}
                        on_open_settings={open_settings.clone()}
                    />
                } else {
                    <button onclick={open_settings_btn} style="position:absolute; top:12px; left:12px; padding:4px 8px; z-index:10;">{"Settings"}</button>
                }
                <IntroOverlay show={*show_intro} hide_intro={hide_intro} open_settings={open_settings} />
                <SettingsModal
                    show={*show_settings}
                    on_close={close_settings}
                    settings={s.clone()}
                    on_change={change_settings}
                    on_reset={reset_settings}
                />
            </TouchOverlayView>
        </div>
    }
}
