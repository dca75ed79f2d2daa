use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::header::Header;
use crate::components::system_monitor::SystemMonitor;
use crate::pages::dashboard::DashboardPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Header />
                <div class="app-body">
                    <main class="content">
                        <Routes fallback=|| view! { <p>"Page not found"</p> }>
                            <Route path=path!("/") view=DashboardPage />
                        </Routes>
                    </main>
                    <aside class="monitor-sidebar">
                        <SystemMonitor />
                    </aside>
                </div>
            </div>
        </Router>
    }
}
