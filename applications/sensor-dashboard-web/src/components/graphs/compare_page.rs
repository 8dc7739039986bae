use leptos::*;

use super::date_field::DateField;
use super::line_chart::LineChart;
use crate::api::ApiClient;
use crate::components::error_banner::ErrorBanner;
use crate::config::use_config;
use crate::controller::use_fetch_controller;
use crate::models::{ChartData, CompareForm, CompareQuery};

const GRAPH_FAULT: &str = "Failed to fetch graph data. Please try again later.";

/// pH graphs for several locations plotted against each other
#[component]
pub fn CompareGraphPage() -> impl IntoView {
    let config = use_config();
    let client = ApiClient::from_config(&config);

    let form = create_rw_signal(CompareForm::default());

    let comparison = use_fetch_controller(
        move || form.with_untracked(CompareForm::query),
        move |query: CompareQuery| {
            let client = client.clone();
            async move {
                client
                    .get_compare_graph_data(&query)
                    .await
                    .map(|response| ChartData::comparison(&query.locations, &response))
            }
        },
        GRAPH_FAULT,
        config.poll_interval_ms,
    );

    let error = comparison.error_signal();

    let add_location = move |_| {
        form.update(|f| {
            f.add_location();
        });
    };

    view! {
        <div class="compare-page">
            <h2>"Compare pH Values Across Locations"</h2>

            {move || error.get().map(|message| view! { <ErrorBanner message=message /> })}

            <form class="graph-form" on:submit=move |ev| {
                ev.prevent_default();
                comparison.search();
            }>
                <DateField
                    id="compare-start-date"
                    label="Start Date"
                    value=Signal::derive(move || form.with(|f| f.start_date.clone()))
                    on_change=Callback::new(move |value| form.update(|f| f.start_date = value))
                />
                <DateField
                    id="compare-end-date"
                    label="End Date"
                    value=Signal::derive(move || form.with(|f| f.end_date.clone()))
                    on_change=Callback::new(move |value| form.update(|f| f.end_date = value))
                />
                <div class="form-group">
                    <label for="compare-location">"Location"</label>
                    <input
                        id="compare-location"
                        type="text"
                        class="form-control"
                        placeholder="Enter location"
                        prop:value=move || form.with(|f| f.location_input.clone())
                        on:input=move |ev| {
                            form.update(|f| f.location_input = event_target_value(&ev))
                        }
                    />
                    <button type="button" class="btn btn-secondary" on:click=add_location>
                        "Add Location"
                    </button>
                </div>

                <div class="location-list">
                    <For
                        each=move || form.with(|f| f.locations.to_vec())
                        key=|location| location.clone()
                        children=move |location| {
                            let target = location.clone();
                            view! {
                                <div class="location-item">
                                    <span>{location}</span>
                                    <button
                                        type="button"
                                        class="btn btn-danger btn-sm"
                                        on:click=move |_| {
                                            form.update(|f| {
                                                f.remove_location(&target);
                                            })
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>

                <button type="submit" class="btn btn-primary">"Generate Comparison Graph"</button>
            </form>

            <Show when=move || comparison.is_loading()>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || {
                comparison
                    .with_data(|chart| chart.cloned())
                    .map(|data| view! { <LineChart data=data /> })
            }}
        </div>
    }
}
