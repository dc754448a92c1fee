//! Interactive field-inspection demo
//!
//! Owns one InspectionSession behind a signal and renders the phone-frame
//! mock per stage. All mutation goes through the session's named
//! operations; the send flow awaits a timer future between the scripted
//! milestones.

use gloo::timers::future::TimeoutFuture;
use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use plumbpro_common::{
    InspectionSession, ItemStatus, ReportSummary, Stage, MILESTONE_DELAY_MS, SEND_MILESTONES,
    SETTLE_DELAY_MS,
};

use crate::components::progress_bar::ProgressBar;

/// Today's date the way the report preview shows it
fn today() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("en-US", &JsValue::UNDEFINED)
        .into()
}

#[component]
pub fn InspectionDemo<F>(on_notify: F) -> impl IntoView
where
    F: Fn(&'static str, String) + 'static + Clone + Send + Sync,
{
    let (session, set_session) = signal(InspectionSession::new());

    view! {
        <div class="phone-frame">
            <div class="phone-screen">
                <div class="status-bar">
                    <span>"9:41"</span>
                    <span class="battery" />
                </div>

                <div class="demo-header">
                    <div>
                        <h2>"Field Inspection"</h2>
                        <p class="text-muted">"PlumbPro MVP Demo"</p>
                    </div>
                    <span class="stage-badge">
                        {move || session.get().current_step().label()}
                    </span>
                </div>

                <div class="demo-content">
                    {
                        let on_notify = on_notify.clone();
                        move || match session.get().current_step() {
                            Stage::Form => view! {
                                <FormStage session=session set_session=set_session on_notify=on_notify.clone() />
                            }.into_any(),
                            Stage::Review => view! {
                                <ReviewStage session=session set_session=set_session />
                            }.into_any(),
                            Stage::Sending => view! {
                                <SendingStage session=session />
                            }.into_any(),
                            Stage::Complete => view! {
                                <CompleteStage session=session set_session=set_session />
                            }.into_any(),
                        }
                    }
                </div>
            </div>
        </div>
        <p class="demo-hint text-muted">
            "Interactive demo: Tap items to inspect, mark pass/fail, add photos & notes."
        </p>
    }
}

#[component]
fn FormStage<F>(
    session: ReadSignal<InspectionSession>,
    set_session: WriteSignal<InspectionSession>,
    on_notify: F,
) -> impl IntoView
where
    F: Fn(&'static str, String) + 'static + Clone + Send + Sync,
{
    let on_submit = move |_| {
        set_session.update(|s| {
            if let Err(err) = s.submit() {
                logging::warn!("submit rejected: {err}");
            }
        });
    };

    view! {
        <div class="stage-form">
            <div class="card">
                <h3 class="card-title">"Customer Info"</h3>
                <div class="form-group">
                    <label for="customer-name">"Name"</label>
                    <input
                        type="text"
                        id="customer-name"
                        prop:value=move || session.get().customer.name.clone()
                        on:input=move |ev| {
                            set_session.update(|s| s.customer.name = event_target_value(&ev));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="customer-email">"Email"</label>
                    <input
                        type="email"
                        id="customer-email"
                        prop:value=move || session.get().customer.email.clone()
                        on:input=move |ev| {
                            set_session.update(|s| s.customer.email = event_target_value(&ev));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="customer-address">"Address"</label>
                    <input
                        type="text"
                        id="customer-address"
                        prop:value=move || session.get().customer.address.clone()
                        on:input=move |ev| {
                            set_session.update(|s| s.customer.address = event_target_value(&ev));
                        }
                    />
                </div>
            </div>

            <div class="progress-row">
                <span class="text-muted">"Inspection Progress"</span>
                <span>
                    {move || {
                        let s = session.get();
                        format!("{}/{}", s.completed_count(), s.items().len())
                    }}
                </span>
            </div>
            <ProgressBar percent=Signal::derive(move || session.get().progress_percent()) />

            <div class="item-list">
                <For
                    each=move || session.get().items().to_vec()
                    key=|item| item.id.clone()
                    children=move |item| {
                        let on_notify = on_notify.clone();
                        view! {
                            <ItemCard
                                id=item.id
                                name=item.name
                                description=item.description
                                session=session
                                set_session=set_session
                                on_notify=on_notify
                            />
                        }
                    }
                />
            </div>

            <button
                class="btn btn-primary btn-block"
                disabled=move || !session.get().can_submit()
                on:click=on_submit
            >
                "Generate Report"
            </button>
        </div>
    }
}

#[component]
fn ItemCard<F>(
    id: String,
    name: String,
    description: String,
    session: ReadSignal<InspectionSession>,
    set_session: WriteSignal<InspectionSession>,
    on_notify: F,
) -> impl IntoView
where
    F: Fn(&'static str, String) + 'static + Clone + Send + Sync,
{
    // Item fields are read back through the session by id so the card
    // re-renders on every mutation even though the For key never changes.
    // Derived signals are Copy, so each view closure reads them directly.
    let item_status = Signal::derive({
        let id = id.clone();
        move || {
            session
                .get()
                .items()
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.status)
                .unwrap_or_default()
        }
    });
    let item_notes = Signal::derive({
        let id = id.clone();
        move || {
            session
                .get()
                .items()
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.notes.clone())
                .unwrap_or_default()
        }
    });
    let item_photos = Signal::derive({
        let id = id.clone();
        move || {
            session
                .get()
                .items()
                .iter()
                .find(|i| i.id == id)
                .map(|i| {
                    i.photos
                        .iter()
                        .cloned()
                        .zip(i.photo_labels.iter().cloned())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        }
    });
    let photo_count = Signal::derive({
        let id = id.clone();
        move || {
            session
                .get()
                .items()
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.photos.len())
                .unwrap_or(0)
        }
    });
    let is_active = Signal::derive({
        let id = id.clone();
        move || session.get().active_item_id() == Some(id.as_str())
    });

    let on_toggle = {
        let id = id.clone();
        move |_| set_session.update(|s| s.toggle_active_item(&id))
    };

    let set_status = {
        let id = id.clone();
        let on_notify = on_notify.clone();
        move |status: ItemStatus| {
            set_session.update(|s| match s.set_item_status(&id, status) {
                Ok(item) => {
                    on_notify("Item Updated", format!("{} marked {}", item.name, item.status.label()));
                }
                Err(err) => logging::warn!("status update failed: {err}"),
            });
        }
    };
    let set_pass = {
        let set_status = set_status.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            set_status(ItemStatus::Pass);
        }
    };
    let set_fail = {
        let set_status = set_status.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            set_status(ItemStatus::Fail);
        }
    };
    let set_na = {
        let set_status = set_status.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            set_status(ItemStatus::Na);
        }
    };

    let on_notes = {
        let id = id.clone();
        move |ev| {
            let text = event_target_value(&ev);
            set_session.update(|s| {
                if let Err(err) = s.set_item_notes(&id, &text) {
                    logging::warn!("notes update failed: {err}");
                }
            });
        }
    };

    let on_add_photo = StoredValue::new({
        let id = id.clone();
        let item_name = name.clone();
        let on_notify = on_notify.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            set_session.update(|s| match s.add_photo(&id) {
                Ok(Some(label)) => {
                    on_notify("Photo Attached", format!("{} photo added to {}", label, item_name));
                }
                Ok(None) => {}
                Err(err) => logging::warn!("photo attach failed: {err}"),
            });
        }
    });

    view! {
        <div class="card item-card" class:active=move || is_active.get() on:click=on_toggle>
            <div class="item-row">
                <div class="item-label">
                    <span class="item-name">{name.clone()}</span>
                    <span class="item-description text-muted">{description}</span>
                </div>
                <div class="item-state">
                    {move || {
                        let count = photo_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge photo-badge">{format!("📷 {}", count)}</span>
                        })
                    }}
                    {move || match item_status.get() {
                        ItemStatus::Pending => None,
                        status => Some(view! {
                            <span class=format!("status-icon {}", status.as_str())>
                                {status.label()}
                            </span>
                        }),
                    }}
                </div>
            </div>

            <Show when=move || is_active.get()>
                <div class="item-detail" on:click=|ev| ev.stop_propagation()>
                    <div class="status-buttons">
                        <button
                            class="btn btn-small"
                            class:selected=move || item_status.get() == ItemStatus::Pass
                            on:click=set_pass.clone()
                        >
                            "Pass"
                        </button>
                        <button
                            class="btn btn-small"
                            class:selected=move || item_status.get() == ItemStatus::Fail
                            on:click=set_fail.clone()
                        >
                            "Fail"
                        </button>
                        <button
                            class="btn btn-small"
                            class:selected=move || item_status.get() == ItemStatus::Na
                            on:click=set_na.clone()
                        >
                            "N/A"
                        </button>
                    </div>

                    <textarea
                        placeholder="Add notes..."
                        prop:value=move || item_notes.get()
                        on:input=on_notes.clone()
                    ></textarea>

                    <div class="photo-row">
                        {move || {
                            item_photos
                                .get()
                                .into_iter()
                                .map(|(url, label)| view! {
                                    <figure class="photo-thumb">
                                        <img src=url alt=label.clone() />
                                        <figcaption>{label}</figcaption>
                                    </figure>
                                })
                                .collect_view()
                        }}
                        <Show when=move || photo_count.get() < 2>
                            <button class="btn btn-small photo-add" on:click=move |ev| on_add_photo.with_value(|f| f(ev))>
                                "📷"
                            </button>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ReviewStage(
    session: ReadSignal<InspectionSession>,
    set_session: WriteSignal<InspectionSession>,
) -> impl IntoView {
    let summary = Signal::derive(move || ReportSummary::from_session(&session.get(), &today()));

    // Scripted delivery: one timer await per milestone, short settle, then
    // the complete screen. No cancellation path.
    let on_send = move |_| {
        let payload = ReportSummary::from_session(&session.get_untracked(), &today());
        set_session.update(|s| {
            if let Err(err) = s.begin_sending() {
                logging::warn!("send rejected: {err}");
            }
        });
        spawn_local(async move {
            for milestone in SEND_MILESTONES {
                TimeoutFuture::new(MILESTONE_DELAY_MS).await;
                set_session.update(|s| {
                    if let Err(err) = s.advance_sending(milestone) {
                        logging::warn!("milestone dropped: {err}");
                    }
                });
                logging::log!("send progress: {}% - {}", milestone.percent, milestone.message);
            }
            TimeoutFuture::new(SETTLE_DELAY_MS).await;
            set_session.update(|s| {
                if let Err(err) = s.finish_sending() {
                    logging::warn!("completion dropped: {err}");
                }
            });
            // the whole "delivery" is this log line
            match serde_json::to_string(&payload) {
                Ok(json) => logging::log!("delivery payload: {json}"),
                Err(err) => logging::warn!("payload serialization failed: {err}"),
            }
        });
    };

    let on_back = move |_| {
        set_session.update(|s| {
            if let Err(err) = s.back_to_edit() {
                logging::warn!("back rejected: {err}");
            }
        });
    };

    view! {
        <div class="stage-review">
            <div class="card score-card">
                <p class="text-muted">"Inspection Score"</p>
                <p class="score-value">{move || format!("{}%", summary.get().score)}</p>
                <p class="score-band text-muted">{move || summary.get().score_band}</p>
            </div>

            <div class="card report-preview">
                <h3 class="card-title">"PDF Preview"</h3>
                <dl class="report-fields">
                    <dt>"Customer"</dt>
                    <dd>{move || summary.get().customer_name}</dd>
                    <dt>"Address"</dt>
                    <dd>{move || summary.get().address}</dd>
                    <dt>"Date"</dt>
                    <dd>{move || summary.get().date}</dd>
                    <dt>"Items Checked"</dt>
                    <dd>{move || summary.get().items_checked}</dd>
                </dl>
                <ul class="report-lines">
                    {move || {
                        summary
                            .get()
                            .lines
                            .into_iter()
                            .map(|line| view! {
                                <li>
                                    <span class="text-muted">{line.name}</span>
                                    <span class=format!("line-status {}", line.status.as_str())>
                                        {line.status.label()}
                                    </span>
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>
            </div>

            <button class="btn btn-primary btn-block" on:click=on_send>
                "Email PDF to Customer"
            </button>
            <button class="btn btn-secondary btn-block" on:click=on_back>
                "Back to Edit"
            </button>
        </div>
    }
}

#[component]
fn SendingStage(session: ReadSignal<InspectionSession>) -> impl IntoView {
    view! {
        <div class="stage-sending">
            <h3>"Sending Report"</h3>
            <ProgressBar percent=Signal::derive(move || session.get().sending_progress() as u32) />
            <p class="sending-message text-muted">
                {move || {
                    let s = session.get();
                    if s.sending_message().is_empty() {
                        "Preparing report...".to_string()
                    } else {
                        format!("{}... {}%", s.sending_message(), s.sending_progress())
                    }
                }}
            </p>
        </div>
    }
}

#[component]
fn CompleteStage(
    session: ReadSignal<InspectionSession>,
    set_session: WriteSignal<InspectionSession>,
) -> impl IntoView {
    let on_reset = move |_| set_session.update(|s| s.reset());

    view! {
        <div class="stage-complete">
            <div class="complete-check">"✓"</div>
            <h3>"Report Sent!"</h3>
            <p class="text-muted">
                {move || {
                    let s = session.get();
                    format!(
                        "PDF inspection report has been emailed to {} ({}) and synced with the CRM.",
                        s.customer.name, s.customer.email
                    )
                }}
            </p>

            <div class="card artifact">
                <div>
                    <p>{move || ReportSummary::from_session(&session.get(), "").file_name()}</p>
                    <p class="text-muted">"Sent to customer"</p>
                </div>
                <span class="status-icon pass">"✓"</span>
            </div>
            <div class="card artifact">
                <div>
                    <p>"CRM Contact Updated"</p>
                    <p class="text-muted">"Custom fields synced"</p>
                </div>
                <span class="status-icon pass">"✓"</span>
            </div>

            <button class="btn btn-secondary" on:click=on_reset>
                "Start New Inspection"
            </button>
        </div>
    }
}
