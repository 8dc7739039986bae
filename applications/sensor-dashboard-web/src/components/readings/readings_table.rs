use leptos::*;

use crate::models::ReadingRow;

/// Table of readings, or a placeholder row when there are none
#[component]
pub fn ReadingsTable(rows: Vec<ReadingRow>) -> impl IntoView {
    let body = if rows.is_empty() {
        view! {
            <tr>
                <td colspan="6" class="text-center">"No data available"</td>
            </tr>
        }
        .into_view()
    } else {
        rows.into_iter()
            .map(|row| {
                view! {
                    <tr>
                        <td>{row.id}</td>
                        <td>{row.ph_value}</td>
                        <td>{row.temperature}</td>
                        <td>{row.location}</td>
                        <td>{row.time}</td>
                        <td>{row.date}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="table-responsive">
            <table class="table table-striped">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"pH Value"</th>
                        <th>"Temperature"</th>
                        <th>"Location"</th>
                        <th>"Time"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
