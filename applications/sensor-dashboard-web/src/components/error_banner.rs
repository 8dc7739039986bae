use leptos::*;

/// Error banner shown above a page's content
///
/// Hidden with the close button until the next message arrives.
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    let (dismissed, set_dismissed) = create_signal(false);

    view! {
        <Show when=move || !dismissed.get()>
            <div class="error-banner" role="alert">
                <span>{message.clone()}</span>
                <button
                    class="banner-close"
                    aria-label="Dismiss"
                    on:click=move |_| set_dismissed.set(true)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
