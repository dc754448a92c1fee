//! Main application component

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{
    challenges::Challenges, header::Header, inspection_demo::InspectionDemo, proposal::Proposal,
    tab_bar::TabBar, toast::ToastStack,
};

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 2500;

/// Top-level navigation tabs
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Demo,
    Challenges,
    Proposal,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Demo, Tab::Challenges, Tab::Proposal];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Demo => "App",
            Tab::Challenges => "Challenges",
            Tab::Proposal => "Proposal",
        }
    }
}

/// Transient user-facing notification
#[derive(Clone)]
pub struct Toast {
    pub id: u64,
    pub title: &'static str,
    pub description: String,
}

fn set_document_title(tab: Tab) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("PlumbPro MVP - {}", tab.title()));
    }
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(Tab::Demo);
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let next_toast_id = StoredValue::new(0u64);

    // Toast surface: push, then drop the same toast after its display time
    let notify = move |title: &'static str, description: String| {
        let id = next_toast_id.get_value();
        next_toast_id.set_value(id + 1);
        set_toasts.update(|list| list.push(Toast { id, title, description }));
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            set_toasts.update(|list| list.retain(|toast| toast.id != id));
        });
    };

    let on_tab_select = move |tab: Tab| {
        set_active_tab.set(tab);
        set_document_title(tab);
    };
    set_document_title(Tab::Demo);

    view! {
        <div class="page">
            <Header />

            <main class="main">
                <TabBar active_tab=active_tab on_select=on_tab_select />

                {move || match active_tab.get() {
                    Tab::Demo => view! {
                        <section class="tab-content">
                            <div class="tab-intro">
                                <h2>"Interactive Demo"</h2>
                                <p>
                                    "Experience the mobile field inspection form. Tap items to mark pass/fail, add photos, and generate PDF reports."
                                </p>
                            </div>
                            <InspectionDemo on_notify=notify />
                        </section>
                    }.into_any(),
                    Tab::Challenges => view! {
                        <section class="tab-content">
                            <Challenges />
                        </section>
                    }.into_any(),
                    Tab::Proposal => view! {
                        <section class="tab-content">
                            <Proposal />
                        </section>
                    }.into_any(),
                }}
            </main>

            <footer class="footer">
                <p>"Built with Rust, Leptos, WebAssembly"</p>
                <p>"© 2026 " {crate::content::AUTHOR_NAME}</p>
            </footer>

            <ToastStack toasts=toasts />
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_tab_titles_cover_all_tabs() {
        let titles: Vec<&str> = Tab::ALL.iter().map(|tab| tab.title()).collect();
        assert_eq!(titles, vec!["App", "Challenges", "Proposal"]);
    }

    #[wasm_bindgen_test]
    fn wasm_set_document_title_uses_tab_title() {
        set_document_title(Tab::Challenges);
        let document = web_sys::window().unwrap().document().unwrap();
        assert_eq!(document.title(), "PlumbPro MVP - Challenges");
    }

    #[wasm_bindgen_test]
    fn wasm_fresh_session_starts_empty() {
        let session = plumbpro_common::InspectionSession::new();
        assert_eq!(session.progress_percent(), 0);
        assert_eq!(session.score(), 0);
        assert!(!session.can_submit());
    }
}
