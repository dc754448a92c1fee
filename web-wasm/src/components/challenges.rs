//! Challenges table component

use leptos::prelude::*;

use crate::content::challenges;

#[component]
pub fn Challenges() -> impl IntoView {
    view! {
        <div class="challenges">
            <div class="tab-intro">
                <h2>"Project Challenges"</h2>
                <p>"Key technical challenges for this MVP and how I'd approach them"</p>
            </div>

            <table class="challenges-table">
                <thead>
                    <tr>
                        <th>"Problem"</th>
                        <th>"Why Teams Fail"</th>
                        <th>"My Solution"</th>
                        <th>"Tech Used"</th>
                    </tr>
                </thead>
                <tbody>
                    {challenges()
                        .into_iter()
                        .map(|challenge| view! {
                            <tr>
                                <td class="challenge-problem">{challenge.problem}</td>
                                <td class="text-muted">{challenge.why_teams_fail}</td>
                                <td>{challenge.solution}</td>
                                <td>
                                    <div class="badge-row">
                                        {challenge
                                            .tech_used
                                            .iter()
                                            .map(|tech| view! {
                                                <span class="badge">{*tech}</span>
                                            })
                                            .collect_view()}
                                    </div>
                                </td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
