use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use matburn_core::{DefaultsConfig, MonitorState, UsageStat};

use crate::api;

#[component]
pub fn SystemMonitor() -> impl IntoView {
    let (state, set_state) = signal(MonitorState::new());
    let interval_ms = DefaultsConfig::default().monitor_interval_ms;

    // Poll /system-stats for the lifetime of the component. Polls are not
    // serialized: should one outlive the interval, whichever response
    // arrives last overwrites the sample.
    Effect::new(move || {
        let poll = move || {
            spawn_local(async move {
                match api::fetch_system_stats().await {
                    Ok(sample) => set_state.update(|m| m.apply(sample)),
                    Err(e) => {
                        // Transient failures are expected while polling;
                        // keep the stale sample, the next tick retries.
                        logging::warn!("stats poll failed: {e}");
                        set_state.update(|m| m.poll_failed());
                    }
                }
            });
        };

        let callback = Closure::wrap(Box::new(poll) as Box<dyn Fn()>);
        let cb_ref = callback.as_ref().unchecked_ref();

        // First sample right away, then the steady cadence.
        let _ = web_sys::window().unwrap().set_timeout_with_callback(cb_ref);

        let interval_id = web_sys::window()
            .unwrap()
            .set_interval_with_callback_and_timeout_and_arguments_0(cb_ref, interval_ms as i32)
            .unwrap();
        callback.forget();

        on_cleanup(move || {
            web_sys::window()
                .unwrap()
                .clear_interval_with_handle(interval_id);
        });
    });

    view! {
        <div class="monitor">
            <div class="monitor-header">
                <span class="monitor-title">"Live Monitor"</span>
                <span class=move || {
                    if state.get().connected {
                        "status-dot connected"
                    } else {
                        "status-dot disconnected"
                    }
                }></span>
            </div>

            <UsageGauge label="RAM" stat=Signal::derive(move || state.get().sample.map(|s| s.ram)) />
            <UsageGauge label="Disk" stat=Signal::derive(move || state.get().sample.map(|s| s.disk)) />
        </div>
    }
}

#[component]
fn UsageGauge(label: &'static str, stat: Signal<Option<UsageStat>>) -> impl IntoView {
    view! {
        <div class="gauge">
            <div class="gauge-labels">
                <span class="gauge-name">{label}</span>
                <span class="gauge-value">
                    {move || {
                        stat.get()
                            .map(|s| format!("{:.1} / {:.1} GB", s.used_gb, s.total_gb))
                            .unwrap_or_default()
                    }}
                </span>
            </div>
            <div class="bar-track">
                <div
                    class="bar"
                    style:width=move || {
                        format!("{:.1}%", stat.get().map(|s| s.percent).unwrap_or(0.0))
                    }
                ></div>
            </div>
            <div class="gauge-percent">
                {move || {
                    stat.get()
                        .map(|s| format!("{:.0}%", s.percent))
                        .unwrap_or_else(|| "--".to_string())
                }}
            </div>
        </div>
    }
}
