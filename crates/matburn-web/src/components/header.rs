use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"MatBurn"</h1>
            <span class="subtitle">"Compute Benchmark Dashboard"</span>
        </header>
    }
}
