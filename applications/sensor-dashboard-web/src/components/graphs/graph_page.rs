use leptos::*;

use super::date_field::DateField;
use super::line_chart::LineChart;
use crate::api::ApiClient;
use crate::components::error_banner::ErrorBanner;
use crate::config::use_config;
use crate::controller::use_fetch_controller;
use crate::models::{ChartData, GraphForm, GraphQuery};

const GRAPH_FAULT: &str = "Failed to fetch graph data. Please try again later.";

/// pH graph for a single location over a date range
#[component]
pub fn GraphPage() -> impl IntoView {
    let config = use_config();
    let client = ApiClient::from_config(&config);

    let form = create_rw_signal(GraphForm::default());

    let graph = use_fetch_controller(
        move || form.with_untracked(GraphForm::query),
        move |query: GraphQuery| {
            let client = client.clone();
            async move {
                client
                    .get_graph_data(&query)
                    .await
                    .map(|points| ChartData::single(&query.location, &points))
            }
        },
        GRAPH_FAULT,
        config.poll_interval_ms,
    );

    let error = graph.error_signal();

    view! {
        <div class="graph-page">
            <h2>"pH Value Graph"</h2>

            {move || error.get().map(|message| view! { <ErrorBanner message=message /> })}

            <form class="graph-form" on:submit=move |ev| {
                ev.prevent_default();
                graph.search();
            }>
                <DateField
                    id="graph-start-date"
                    label="Start Date"
                    value=Signal::derive(move || form.with(|f| f.start_date.clone()))
                    on_change=Callback::new(move |value| form.update(|f| f.start_date = value))
                />
                <DateField
                    id="graph-end-date"
                    label="End Date"
                    value=Signal::derive(move || form.with(|f| f.end_date.clone()))
                    on_change=Callback::new(move |value| form.update(|f| f.end_date = value))
                />
                <div class="form-group">
                    <label for="graph-location">"Location"</label>
                    <input
                        id="graph-location"
                        type="text"
                        class="form-control"
                        placeholder="Enter location"
                        prop:value=move || form.with(|f| f.location.clone())
                        on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary">"Generate Graph"</button>
            </form>

            <Show when=move || graph.is_loading()>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || graph.with_data(|chart| chart.cloned()).map(|data| view! { <LineChart data=data /> })}
        </div>
    }
}
