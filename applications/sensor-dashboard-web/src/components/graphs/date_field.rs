use leptos::*;

/// Labelled `<input type="date">` bound to a form field
#[component]
pub fn DateField(
    id: &'static str,
    label: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type="date"
                class="form-control"
                prop:value=move || value.get()
                on:input=move |ev| on_change.call(event_target_value(&ev))
            />
        </div>
    }
}
