//! Report summary built from a session
//!
//! Backs the review-screen preview and the simulated delivery payload shown
//! on the complete screen. The date comes in as a plain string so this
//! crate stays free of platform bindings; the web layer formats it from
//! `js_sys::Date`.

use serde::{Deserialize, Serialize};

use crate::session::InspectionSession;
use crate::types::ItemStatus;

/// One name/status line of the report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub name: String,
    pub status: ItemStatus,
    pub notes: String,
    pub photo_count: usize,
}

/// Snapshot of a finished inspection, serialized as the "sent" artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub customer_name: String,
    pub customer_email: String,
    pub address: String,
    pub date: String,
    pub items_checked: usize,
    pub score: u32,
    pub score_band: String,
    pub lines: Vec<ReportLine>,
}

impl ReportSummary {
    pub fn from_session(session: &InspectionSession, date: &str) -> Self {
        let lines = session
            .items()
            .iter()
            .map(|item| ReportLine {
                name: item.name.clone(),
                status: item.status,
                notes: item.notes.clone(),
                photo_count: item.photos.len(),
            })
            .collect();

        Self {
            customer_name: session.customer.name.clone(),
            customer_email: session.customer.email.clone(),
            address: session.customer.address.clone(),
            date: date.to_string(),
            items_checked: session.items().len(),
            score: session.score(),
            score_band: session.score_band().label().to_string(),
            lines,
        }
    }

    /// Simulated PDF file name shown on the complete screen
    pub fn file_name(&self) -> String {
        let slug: String = self
            .customer_name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        format!("inspection_report_{}.pdf", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemStatus;

    fn reviewed_session() -> InspectionSession {
        let mut session = InspectionSession::new();
        for id in ["1", "2", "3", "4"] {
            session.set_item_status(id, ItemStatus::Pass).unwrap();
        }
        session.set_item_status("5", ItemStatus::Fail).unwrap();
        session.set_item_notes("5", "loose fixture").unwrap();
        session.add_photo("5").unwrap();
        session.submit().unwrap();
        session
    }

    #[test]
    fn test_summary_from_session() {
        let session = reviewed_session();
        let summary = ReportSummary::from_session(&session, "1/27/2026");

        assert_eq!(summary.customer_name, "John Smith");
        assert_eq!(summary.date, "1/27/2026");
        assert_eq!(summary.items_checked, 5);
        assert_eq!(summary.score, 80);
        assert_eq!(summary.score_band, "Good");
        assert_eq!(summary.lines.len(), 5);
        assert_eq!(summary.lines[4].status, ItemStatus::Fail);
        assert_eq!(summary.lines[4].notes, "loose fixture");
        assert_eq!(summary.lines[4].photo_count, 1);
    }

    #[test]
    fn test_summary_serialize_camel_case() {
        let summary = ReportSummary::from_session(&reviewed_session(), "1/27/2026");
        let json = serde_json::to_string(&summary).expect("serialize failed");
        assert!(json.contains("\"customerName\":\"John Smith\""));
        assert!(json.contains("\"itemsChecked\":5"));
        assert!(json.contains("\"scoreBand\":\"Good\""));
        assert!(json.contains("\"photoCount\":1"));
    }

    #[test]
    fn test_file_name_slug() {
        let summary = ReportSummary::from_session(&reviewed_session(), "");
        assert_eq!(summary.file_name(), "inspection_report_john_smith.pdf");
    }
}
