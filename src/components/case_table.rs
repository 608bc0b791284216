//! Case list table for the court-cases page.

use leptos::prelude::*;

use crate::net::types::Case;

/// Read-only table of cases for one town. Rows are keyed by docket number;
/// missing optional fields render as `"N/A"`.
#[component]
pub fn CaseTable(cases: Vec<Case>, town: String) -> impl IntoView {
    let count = cases.len();

    view! {
        <div class="case-table">
            <h3 class="case-table__title">
                {format!("Court Cases - {town} ({count} cases)")}
            </h3>
            <table class="case-table__table">
                <thead>
                    <tr>
                        <th>"Docket Number"</th>
                        <th>"Case Name"</th>
                        <th>"Address"</th>
                        <th>"Town"</th>
                        <th>"Zip Code"</th>
                        <th>"Defendant Name"</th>
                    </tr>
                </thead>
                <tbody>
                    {cases
                        .iter()
                        .map(|case| {
                            view! {
                                <tr>
                                    <td class="case-table__docket">{case.docket_number.clone()}</td>
                                    <td>{case.case_name.clone()}</td>
                                    <td>{case.address_display().to_owned()}</td>
                                    <td>{case.town_display().to_owned()}</td>
                                    <td>{case.zip_code_display().to_owned()}</td>
                                    <td>{case.defendant_display().to_owned()}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
            <p class="case-table__caption">{format!("Court cases for {town}")}</p>
        </div>
    }
}
