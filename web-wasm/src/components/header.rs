//! Site header component

use leptos::prelude::*;

use crate::content::{AUTHOR_NAME, AUTHOR_ROLE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-title">
                <h1>"PlumbPro MVP"</h1>
                <p class="text-muted">"Project Proposal"</p>
            </div>
            <div class="header-author">
                <p>{AUTHOR_NAME}</p>
                <p class="text-muted">{AUTHOR_ROLE}</p>
            </div>
        </header>
    }
}
