//! Static page content
//!
//! The challenges table and the proposal tab render fixed content; nothing
//! here is editable at runtime.

/// One row of the challenges table
#[derive(Clone)]
pub struct Challenge {
    pub problem: &'static str,
    pub why_teams_fail: &'static str,
    pub solution: &'static str,
    pub tech_used: &'static [&'static str],
}

/// One phase of the delivery timeline
#[derive(Clone)]
pub struct TimelinePhase {
    pub week: &'static str,
    pub phase: &'static str,
    pub tasks: &'static [&'static str],
    pub deliverable: &'static str,
}

/// A past project shown under relevant experience
#[derive(Clone)]
pub struct PastProject {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub relevance: &'static str,
}

pub const AUTHOR_NAME: &str = "Humam Al Rubaye";
pub const AUTHOR_ROLE: &str = "Full-Stack Developer";
pub const AUTHOR_EMAIL: &str = "humameu4@gmail.com";
pub const AUTHOR_PHONE: &str = "518-965-9700";
pub const AUTHOR_LINKEDIN: &str = "https://linkedin.com/in/humam-alrubaye";
pub const AUTHOR_GITHUB: &str = "https://github.com/HumamAl";

/// What the client explicitly said they don't want
pub const NOT_THIS_PROJECT: [&str; 4] = [
    "GoHighLevel-only builds",
    "Zapier-first architectures",
    "WordPress-based solutions",
    "Forms + automation without a real backend",
];

pub fn challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            problem: "Multi-tenant database architecture",
            why_teams_fail: "Build single-tenant first, painful rewrites later. Or over-engineer with complex sharding from day one.",
            solution: "Row-level security with tenant_id from the start. Simple to implement, scales to thousands of clients without schema changes.",
            tech_used: &["PostgreSQL RLS", "Supabase", "Tenant Context"],
        },
        Challenge {
            problem: "Pixel-perfect PDF generation",
            why_teams_fail: "Use basic HTML-to-PDF libraries that break layouts, misplace photos, and produce inconsistent results across devices.",
            solution: "Puppeteer with templated HTML/CSS. Precise control over page breaks, photo placement, and consistent rendering.",
            tech_used: &["Puppeteer", "HTML Templates", "S3 Storage"],
        },
        Challenge {
            problem: "Photo placement in specific sections",
            why_teams_fail: "Photos dumped at end of document, or basic grid layouts. No context linking photos to inspection items.",
            solution: "Photos tagged with section IDs, rendered inline with their inspection items. 'Before Photos' section auto-generated.",
            tech_used: &["Metadata Tagging", "Template Engine", "Lazy Loading"],
        },
        Challenge {
            problem: "GoHighLevel CRM integration",
            why_teams_fail: "Make GHL the source of truth. Data inconsistencies when GHL API is slow or fields change. Tight coupling breaks features.",
            solution: "Database is source of truth. GHL sync is async, one-way push. Decoupled architecture means CRM changes don't break core app.",
            tech_used: &["REST API", "Webhook Queues", "Retry Logic"],
        },
        Challenge {
            problem: "Mobile-first field experience",
            why_teams_fail: "Desktop app 'scaled down' to mobile. Tiny buttons, horizontal scrolling, slow on 3G, no offline capability.",
            solution: "PWA designed mobile-first. Large touch targets, offline-capable forms, camera integration, works on slow networks.",
            tech_used: &["React PWA", "Service Workers", "IndexedDB"],
        },
    ]
}

pub fn timeline() -> Vec<TimelinePhase> {
    vec![
        TimelinePhase {
            week: "Jan 27 - Feb 7",
            phase: "Foundation",
            tasks: &[
                "PostgreSQL schema with RLS multi-tenancy",
                "Node.js/Express API architecture",
                "React PWA shell with offline support",
                "S3 bucket setup for photos/PDFs",
            ],
            deliverable: "Working API + empty mobile form",
        },
        TimelinePhase {
            week: "Feb 10 - Feb 21",
            phase: "Core Features",
            tasks: &[
                "Mobile inspection form with validation",
                "Camera integration + photo upload to S3",
                "Scoring engine (pass/fail calculation)",
                "Local storage for offline inspections",
            ],
            deliverable: "Functional field form (no PDF yet)",
        },
        TimelinePhase {
            week: "Feb 24 - Mar 7",
            phase: "PDF & Email",
            tasks: &[
                "HTML template with branding placeholders",
                "Puppeteer PDF generation service",
                "Photo placement in Before/After sections",
                "SendGrid email delivery",
            ],
            deliverable: "Complete inspection -> PDF -> email flow",
        },
        TimelinePhase {
            week: "Mar 10 - Mar 21",
            phase: "Polish & Deploy",
            tasks: &[
                "Admin dashboard (view/regenerate reports)",
                "GHL API integration (Phase 2 prep)",
                "Testing + bug fixes",
                "Production deployment (Railway/Vercel)",
            ],
            deliverable: "Production-ready MVP",
        },
    ]
}

pub fn past_projects() -> Vec<PastProject> {
    vec![
        PastProject {
            name: "Service Business Suite",
            kind: "Multi-tenant SaaS",
            description: "Scheduling, invoicing, and client management for service businesses. Built with the exact multi-tenant patterns this project needs.",
            tags: &["React", "Node.js", "PostgreSQL RLS", "Multi-tenant"],
            relevance: "Same architecture pattern",
        },
        PastProject {
            name: "Field Report Generator",
            kind: "Internal Tool",
            description: "PDF generation system for property inspections with photo placement in specific sections. Puppeteer + HTML templates.",
            tags: &["Puppeteer", "S3", "PDF Generation"],
            relevance: "Same PDF approach",
        },
        PastProject {
            name: "Mobile Data Collection",
            kind: "PWA",
            description: "Offline-capable mobile forms for field workers. IndexedDB caching, background sync, camera integration.",
            tags: &["React PWA", "IndexedDB", "Service Workers"],
            relevance: "Same mobile-first UX",
        },
        PastProject {
            name: "CRM Integration Layer",
            kind: "API Service",
            description: "Async sync service connecting custom databases to various CRMs. Webhook handling, retry logic, decoupled architecture.",
            tags: &["BullMQ", "Webhooks", "GHL API"],
            relevance: "Same CRM sync pattern",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenges_complete() {
        let rows = challenges();
        assert_eq!(rows.len(), 5);
        for row in rows {
            assert!(!row.problem.is_empty());
            assert!(!row.tech_used.is_empty());
        }
    }

    #[test]
    fn test_timeline_four_phases() {
        let phases = timeline();
        assert_eq!(phases.len(), 4);
        assert_eq!(phases[0].phase, "Foundation");
        assert_eq!(phases[3].deliverable, "Production-ready MVP");
        for phase in phases {
            assert_eq!(phase.tasks.len(), 4);
        }
    }

    #[test]
    fn test_past_projects() {
        assert_eq!(past_projects().len(), 4);
    }
}
