//! Progress bar component

use leptos::prelude::*;

#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<u32>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div
                class="progress-fill"
                style=move || format!("width: {}%", percent.get())
            />
        </div>
    }
}
