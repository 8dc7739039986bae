use leptos::*;
use leptos_router::*;

use crate::components::layout::Layout;
use crate::components::{CompareGraphPage, DataTable, GraphPage};
use crate::config::provide_config;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // Endpoint and polling settings are read once and shared by every page
    provide_config();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=DataTable />
                    <Route path="graphs" view=GraphPage />
                    <Route path="compare-graphs" view=CompareGraphPage />
                </Route>
            </Routes>
        </Router>
    }
}
