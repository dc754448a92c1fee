//! Tabbed navigation component
//!
//! The active tab value is owned by the caller; this component only reports
//! selection changes.

use leptos::prelude::*;

use crate::app::Tab;

#[component]
pub fn TabBar<F>(active_tab: ReadSignal<Tab>, on_select: F) -> impl IntoView
where
    F: Fn(Tab) + 'static + Clone + Send,
{
    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class="tab-trigger"
                            class:active=move || active_tab.get() == tab
                            on:click=move |_| on_select(tab)
                        >
                            {tab.title()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
