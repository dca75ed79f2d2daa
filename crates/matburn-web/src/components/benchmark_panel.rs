use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use matburn_core::{BenchmarkRun, DefaultsConfig};

use crate::api;

#[component]
pub fn BenchmarkPanel() -> impl IntoView {
    let (run, set_run) = signal(BenchmarkRun::new());
    let matrix_size = DefaultsConfig::default().matrix_size;

    let execute = move |_| {
        let mut started = false;
        set_run.update(|r| started = r.start());
        if !started {
            return;
        }

        spawn_local(async move {
            match api::run_benchmark(matrix_size).await {
                Ok(result) => set_run.update(|r| r.resolve(result)),
                Err(e) => {
                    logging::error!("benchmark failed: {e}");
                    set_run.update(|r| r.fail(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="panel benchmark-panel">
            <div class="panel-header">
                <span class="panel-title">"SYS.BENCHMARK"</span>
                <span class="panel-tag">{format!("{matrix_size}x{matrix_size} matmul")}</span>
            </div>

            <div class="panel-body">
                {move || {
                    let state = run.get();
                    if state.running {
                        view! {
                            <p class="status running">"Running matrix multiplication..."</p>
                        }
                        .into_any()
                    } else if let Some(result) = state.result {
                        view! {
                            <div class="results">
                                <div class="timing">
                                    <div class="timing-labels">
                                        <span class="timing-name">{result.cpu_label().to_string()}</span>
                                        <span class="timing-value">{result.cpu_time_label()}</span>
                                    </div>
                                    <div class="bar-track">
                                        <div
                                            class="bar cpu-bar"
                                            style:width=format!("{:.2}%", result.cpu_bar_percent())
                                        ></div>
                                    </div>
                                </div>
                                <div class="timing accel">
                                    <div class="timing-labels">
                                        <span class="timing-name">{result.accel_label().to_string()}</span>
                                        <span class="timing-value">{result.accel_time_label()}</span>
                                    </div>
                                    <div class="bar-track">
                                        <div
                                            class="bar accel-bar"
                                            style:width=format!("{:.2}%", result.accel_bar_percent())
                                        ></div>
                                    </div>
                                </div>
                                <p class="summary">{result.summary.clone()}</p>
                            </div>
                        }
                        .into_any()
                    } else if let Some(error) = state.error {
                        view! {
                            <p class="status error">"Benchmark failed: " {error}</p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <p class="status idle">"Ready. Waiting for user input..."</p>
                        }
                        .into_any()
                    }
                }}
            </div>

            <button class="run-btn" disabled=move || run.get().running on:click=execute>
                {move || if run.get().running { "Running..." } else { "Execute" }}
            </button>
        </div>
    }
}
