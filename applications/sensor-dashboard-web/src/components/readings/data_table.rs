use leptos::*;

use super::readings_table::ReadingsTable;
use crate::api::ApiClient;
use crate::components::error_banner::ErrorBanner;
use crate::config::use_config;
use crate::controller::use_fetch_controller;
use crate::models::{ReadingRow, TableFilter, TableQuery};

const FETCH_FAULT: &str = "Failed to fetch data";

/// Readings table page with date/location filters and optional auto-refresh
#[component]
pub fn DataTable() -> impl IntoView {
    let config = use_config();
    let client = ApiClient::from_config(&config);

    let filter = create_rw_signal(TableFilter::default());

    let readings = use_fetch_controller(
        move || Ok(filter.with_untracked(TableFilter::query)),
        move |query: TableQuery| {
            let client = client.clone();
            async move { client.get_readings(&query).await }
        },
        FETCH_FAULT,
        config.poll_interval_ms,
    );

    let error = readings.error_signal();

    let on_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        readings.search();
    };

    // Clear the filters, then fetch everything
    let on_reset = move |_| {
        filter.update(TableFilter::clear);
        readings.search();
    };

    let rows = move || {
        readings.with_data(|data| {
            data.map(|readings| readings.iter().map(ReadingRow::from).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="readings-page">
            <form class="filter-form" on:submit=on_search>
                <div class="form-group">
                    <label for="filter-date">"Date"</label>
                    <div class="input-group">
                        <input
                            id="filter-date"
                            type="date"
                            class="form-control"
                            prop:value=move || filter.with(|f| f.date.clone())
                            on:input=move |ev| filter.update(|f| f.date = event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="btn btn-outline"
                            on:click=move |_| filter.update(|f| f.date.clear())
                        >
                            "Clear"
                        </button>
                    </div>
                </div>
                <div class="form-group">
                    <label for="filter-location">"Location"</label>
                    <input
                        id="filter-location"
                        type="text"
                        class="form-control"
                        placeholder="Enter location"
                        prop:value=move || filter.with(|f| f.location.clone())
                        on:input=move |ev| filter.update(|f| f.location = event_target_value(&ev))
                    />
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Search"</button>
                    <button type="button" class="btn btn-secondary" on:click=on_reset>
                        "Reset"
                    </button>
                </div>
            </form>

            <div class="polling-controls">
                <button
                    type="button"
                    class=move || if readings.is_polling() { "btn btn-danger" } else { "btn btn-success" }
                    on:click=move |_| readings.toggle_polling()
                >
                    {move || {
                        if readings.is_polling() {
                            "Stop Refreshing Data"
                        } else {
                            "Start Refreshing Data"
                        }
                    }}
                </button>
            </div>

            {move || error.get().map(|message| view! { <ErrorBanner message=message /> })}

            <Show when=move || readings.is_loading()>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || view! { <ReadingsTable rows=rows() /> }}
        </div>
    }
}
