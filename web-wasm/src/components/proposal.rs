//! Proposal tab: understanding, stack, timeline, experience, contact

use leptos::prelude::*;

use crate::content::{
    past_projects, timeline, AUTHOR_EMAIL, AUTHOR_GITHUB, AUTHOR_LINKEDIN, AUTHOR_NAME,
    AUTHOR_PHONE, NOT_THIS_PROJECT,
};

#[component]
pub fn Proposal() -> impl IntoView {
    view! {
        <div class="proposal">
            <div class="card">
                <h3 class="card-title">"I Read Your Posting Carefully"</h3>
                <p class="text-muted">
                    "You're building a scalable MVP for plumbing field technicians that captures job data on-site and generates branded PDF reports with photos and scoring. This is not a Zapier automation or GHL-dependent system - it's a real custom backend where your database is the source of truth."
                </p>
                <div class="want-grid">
                    <div class="want-item">
                        <p>"Multi-client Ready from Day 1"</p>
                        <p class="text-muted">"RLS-based tenant isolation, not a rewrite later"</p>
                    </div>
                    <div class="want-item">
                        <p>"Database = Source of Truth"</p>
                        <p class="text-muted">"GHL is optional sync target, not a dependency"</p>
                    </div>
                    <div class="want-item">
                        <p>"Pixel-Perfect PDF Generation"</p>
                        <p class="text-muted">"Photos in correct sections, branded layout"</p>
                    </div>
                    <div class="want-item">
                        <p>"Mobile-First Field Experience"</p>
                        <p class="text-muted">"Works on tablets, slow networks, offline"</p>
                    </div>
                </div>
                <div class="dont-want">
                    <p class="dont-want-title">"What You Said You Don't Want"</p>
                    <div class="badge-row">
                        {NOT_THIS_PROJECT
                            .iter()
                            .map(|item| view! { <span class="badge badge-outline">{*item}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="card">
                <h3 class="card-title">"8-Week Timeline"</h3>
                <span class="badge badge-outline">"Jan 27 - Mar 21, 2026"</span>
                <ol class="timeline">
                    {timeline()
                        .into_iter()
                        .map(|phase| view! {
                            <li class="timeline-phase">
                                <div class="timeline-head">
                                    <span class="badge">{phase.week}</span>
                                    <span class="timeline-name">{phase.phase}</span>
                                </div>
                                <ul class="timeline-tasks">
                                    {phase
                                        .tasks
                                        .iter()
                                        .map(|task| view! { <li class="text-muted">{*task}</li> })
                                        .collect_view()}
                                </ul>
                                <p class="timeline-deliverable">
                                    "Deliverable: " {phase.deliverable}
                                </p>
                            </li>
                        })
                        .collect_view()}
                </ol>
                <p class="text-muted">
                    "Phase 2 (Optional): After MVP launch, we can add full GHL integration, admin analytics, and additional inspection templates. This keeps the MVP focused and ships faster."
                </p>
            </div>

            <div class="card">
                <h3 class="card-title">"Relevant Experience"</h3>
                <p class="text-muted">"I've built systems with the exact patterns this project needs:"</p>
                <div class="project-grid">
                    {past_projects()
                        .into_iter()
                        .map(|project| view! {
                            <div class="project">
                                <div class="project-head">
                                    <h4>{project.name}</h4>
                                    <span class="badge badge-outline">{project.kind}</span>
                                </div>
                                <p class="text-muted">{project.description}</p>
                                <div class="badge-row">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|tag| view! { <span class="badge">{*tag}</span> })
                                        .collect_view()}
                                </div>
                                <p class="project-relevance">{project.relevance}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card contact-card">
                <h2>"Let's Discuss"</h2>
                <p class="text-muted">
                    "Happy to do a quick call to discuss architecture or answer questions"
                </p>
                <h3>{AUTHOR_NAME}</h3>
                <div class="contact-links">
                    <a class="btn btn-secondary" href=format!("mailto:{}", AUTHOR_EMAIL)>
                        {AUTHOR_EMAIL}
                    </a>
                    <a class="btn btn-secondary" href=format!("tel:{}", AUTHOR_PHONE)>
                        {AUTHOR_PHONE}
                    </a>
                </div>
                <div class="contact-links">
                    <a class="btn btn-tertiary" href=AUTHOR_LINKEDIN target="_blank" rel="noopener noreferrer">
                        "LinkedIn"
                    </a>
                    <a class="btn btn-tertiary" href=AUTHOR_GITHUB target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                </div>
            </div>
        </div>
    }
}
