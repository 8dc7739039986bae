use leptos::*;
use leptos_router::*;

/// Layout component with navbar and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content container">
                <Outlet />
            </main>
        </div>
    }
}

/// Navbar with one tab per page
#[component]
fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;

    // Home only matches exactly, since every path starts with "/"
    let is_active = move |path: &str| {
        let current = pathname.get();
        if path == "/" {
            current == "/"
        } else {
            current.starts_with(path)
        }
    };
    let tab_class = move |path: &'static str| {
        move || if is_active(path) { "tab active" } else { "tab" }
    };

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Sensor Data Dashboard"</h1>
                <div class="navbar-tabs">
                    <A href="/" exact=true class=tab_class("/")>
                        "Home"
                    </A>
                    <A href="/graphs" class=tab_class("/graphs")>
                        "Graphs"
                    </A>
                    <A href="/compare-graphs" class=tab_class("/compare-graphs")>
                        "Compare Graphs"
                    </A>
                </div>
            </div>
        </nav>
    }
}
