use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use matburn_core::{DefaultsConfig, StressRun};

use crate::api;

/// Clear the pending countdown interval, if any. Whichever of the network
/// resolution, the countdown expiry, or panel teardown gets here first takes
/// the handle; the others find it empty.
fn cancel_countdown(handle: StoredValue<Option<i32>>) {
    let id = handle.try_update_value(|h| h.take()).flatten();
    if let (Some(id), Some(window)) = (id, web_sys::window()) {
        window.clear_interval_with_handle(id);
    }
}

#[component]
pub fn StressPanel() -> impl IntoView {
    let (run, set_run) = signal(StressRun::new());
    let tick_handle: StoredValue<Option<i32>> = StoredValue::new(None);
    let defaults = DefaultsConfig::default();
    let duration = defaults.stress_duration_secs;
    let tick_ms = defaults.countdown_tick_ms;

    on_cleanup(move || cancel_countdown(tick_handle));

    let start = move |_| {
        let mut started = false;
        set_run.update(|r| started = r.start(duration));
        if !started {
            return;
        }

        // Fire the request first; the countdown must not delay it. The
        // response is the only completion signal, however late it arrives.
        spawn_local(async move {
            let outcome = api::stress_test(duration).await;
            cancel_countdown(tick_handle);
            match outcome {
                Ok(report) => set_run.update(|r| r.resolve(report)),
                Err(e) => {
                    logging::error!("stress test failed: {e}");
                    set_run.update(|r| r.fail(e.to_string()));
                }
            }
        });

        // Cosmetic countdown, one step per second, self-cancelling at zero.
        let callback = Closure::wrap(Box::new(move || {
            let mut expired = false;
            set_run.update(|r| expired = r.tick());
            if expired {
                cancel_countdown(tick_handle);
            }
        }) as Box<dyn Fn()>);

        let id = web_sys::window()
            .unwrap()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                tick_ms as i32,
            )
            .unwrap();
        callback.forget();
        tick_handle.set_value(Some(id));
    };

    view! {
        <div class="panel stress-panel">
            <div class="panel-header">
                <span class="panel-title">"STRESS.TEST"</span>
                <span class="panel-tag">{format!("{duration}s full load")}</span>
            </div>

            <div class="panel-body">
                {move || {
                    let state = run.get();
                    if state.running {
                        let status = if state.awaiting_report() {
                            "Countdown elapsed, waiting for report..."
                        } else {
                            "Maximizing device load..."
                        };
                        view! {
                            <div class="countdown-wrap">
                                <span class="countdown">{state.countdown()}</span>
                                <p class="status running">{status}</p>
                            </div>
                        }
                        .into_any()
                    } else if let Some(report) = state.report {
                        view! {
                            <div class="report">
                                <p class="report-title">"Test complete"</p>
                                <p>"Ops performed: " {report.matrix_operations.to_string()}</p>
                                <p>"Device: " {report.device}</p>
                            </div>
                        }
                        .into_any()
                    } else if let Some(error) = state.error {
                        view! {
                            <p class="status error">"Stress test failed: " {error}</p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <p class="status idle">
                                "Warning: high load sequence. The host may become unresponsive."
                            </p>
                        }
                        .into_any()
                    }
                }}
            </div>

            <button class="run-btn danger" disabled=move || run.get().running on:click=start>
                {move || if run.get().running { "Stressing system..." } else { "Initiate stress test" }}
            </button>
        </div>
    }
}
