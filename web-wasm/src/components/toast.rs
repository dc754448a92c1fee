//! Toast notification surface

use leptos::prelude::*;

use crate::app::Toast;

#[component]
pub fn ToastStack(toasts: ReadSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class="toast">
                            <p class="toast-title">{toast.title}</p>
                            <p class="toast-description">{toast.description.clone()}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
