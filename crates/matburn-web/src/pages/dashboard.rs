use leptos::prelude::*;

use crate::components::benchmark_panel::BenchmarkPanel;
use crate::components::stress_panel::StressPanel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page dashboard-page">
            <BenchmarkPanel />
            <StressPanel />
        </div>
    }
}
