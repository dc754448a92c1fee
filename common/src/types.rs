//! Inspection data model
//!
//! Types shared between the session logic and the web UI:
//! - ItemStatus / InspectionItem: one checklist entry and its disposition
//! - CustomerInfo: editable customer fields
//! - Stage: coarse position in the form → review → sending → complete flow
//! - ScoreBand: qualitative label for the computed score

use serde::{Deserialize, Serialize};

/// Disposition of a single inspection item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemStatus {
    #[default]
    Pending,
    Pass,
    Fail,
    Na,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Pass => "pass",
            ItemStatus::Fail => "fail",
            ItemStatus::Na => "na",
        }
    }

    /// Short uppercase label for report lines and toasts
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "PENDING",
            ItemStatus::Pass => "PASS",
            ItemStatus::Fail => "FAIL",
            ItemStatus::Na => "N/A",
        }
    }
}

/// One fixed checklist entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectionItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
    pub notes: String,
    /// Attached photo data URLs, capped at 2, append-only
    pub photos: Vec<String>,
    /// One label per photo, same length as `photos`
    pub photo_labels: Vec<String>,
}

impl InspectionItem {
    fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }
}

/// Customer fields, free text, no validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl Default for CustomerInfo {
    fn default() -> Self {
        Self {
            name: "John Smith".to_string(),
            email: "john.smith@example.com".to_string(),
            address: "123 Main St, Garden Grove, CA".to_string(),
        }
    }
}

/// Session stage, strictly forward-moving except review → form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    #[default]
    Form,
    Review,
    Sending,
    Complete,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Form => "form",
            Stage::Review => "review",
            Stage::Sending => "sending",
            Stage::Complete => "complete",
        }
    }

    /// Badge text shown in the demo header
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Form => "In Progress",
            Stage::Review => "Review",
            Stage::Sending => "Sending",
            Stage::Complete => "Complete",
        }
    }
}

/// Qualitative band for an inspection score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsAttention,
    RequiresRepair,
}

impl ScoreBand {
    /// Thresholds: >=90 excellent, >=80 good, >=60 needs attention
    pub fn for_score(score: u32) -> Self {
        if score >= 90 {
            ScoreBand::Excellent
        } else if score >= 80 {
            ScoreBand::Good
        } else if score >= 60 {
            ScoreBand::NeedsAttention
        } else {
            ScoreBand::RequiresRepair
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsAttention => "Needs Attention",
            ScoreBand::RequiresRepair => "Requires Repair",
        }
    }
}

/// Labels attached to photos in order
pub const PHOTO_LABELS: [&str; 2] = ["Before", "After"];

/// Placeholder photo data URLs used by the demo (no real upload)
pub const MOCK_PHOTOS: [&str; 2] = [
    "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100'%3E%3Crect fill='%23334155' width='100' height='100'/%3E%3Ctext fill='%2394a3b8' x='50%25' y='50%25' text-anchor='middle' dy='.3em' font-size='12'%3EPhoto 1%3C/text%3E%3C/svg%3E",
    "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100'%3E%3Crect fill='%23334155' width='100' height='100'/%3E%3Ctext fill='%2394a3b8' x='50%25' y='50%25' text-anchor='middle' dy='.3em' font-size='12'%3EPhoto 2%3C/text%3E%3C/svg%3E",
];

/// The fixed five-item checklist; items are never added or removed at runtime
pub fn canonical_items() -> Vec<InspectionItem> {
    vec![
        InspectionItem::new(
            "1",
            "Water Heater Condition",
            "Tank age, corrosion, relief valve and venting",
        ),
        InspectionItem::new(
            "2",
            "Pipe Integrity",
            "Visible supply and drain lines, joints, signs of leaks",
        ),
        InspectionItem::new(
            "3",
            "Water Pressure",
            "Static pressure at an exterior hose bib, 40-80 psi expected",
        ),
        InspectionItem::new(
            "4",
            "Drain Function",
            "Flow and drainage at sinks, tubs and floor drains",
        ),
        InspectionItem::new(
            "5",
            "Fixtures Check",
            "Faucets, toilets and shutoff valves operate correctly",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_status_default() {
        assert_eq!(ItemStatus::default(), ItemStatus::Pending);
    }

    #[test]
    fn test_item_status_as_str() {
        assert_eq!(ItemStatus::Pass.as_str(), "pass");
        assert_eq!(ItemStatus::Fail.as_str(), "fail");
        assert_eq!(ItemStatus::Na.as_str(), "na");
        assert_eq!(ItemStatus::Pending.as_str(), "pending");
    }

    #[test]
    fn test_item_status_serialize() {
        let json = serde_json::to_string(&ItemStatus::Na).expect("serialize failed");
        assert_eq!(json, "\"na\"");
    }

    #[test]
    fn test_inspection_item_serialize() {
        let mut item = InspectionItem::new("3", "Water Pressure", "Static pressure check");
        item.status = ItemStatus::Pass;
        item.photos.push("data:...".to_string());
        item.photo_labels.push("Before".to_string());

        let json = serde_json::to_string(&item).expect("serialize failed");
        assert!(json.contains("\"id\":\"3\""));
        assert!(json.contains("\"status\":\"pass\""));
        assert!(json.contains("\"photoLabels\":[\"Before\"]"));
    }

    #[test]
    fn test_inspection_item_deserialize_missing_fields() {
        // only an id, everything else takes defaults
        let json = r#"{"id": "2"}"#;
        let item: InspectionItem = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(item.id, "2");
        assert_eq!(item.status, ItemStatus::Pending);
        assert!(item.notes.is_empty());
        assert!(item.photos.is_empty());
    }

    #[test]
    fn test_customer_defaults() {
        let customer = CustomerInfo::default();
        assert_eq!(customer.name, "John Smith");
        assert_eq!(customer.email, "john.smith@example.com");
        assert_eq!(customer.address, "123 Main St, Garden Grove, CA");
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::Form.label(), "In Progress");
        assert_eq!(Stage::Review.label(), "Review");
        assert_eq!(Stage::Sending.label(), "Sending");
        assert_eq!(Stage::Complete.label(), "Complete");
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(89), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(80), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(79), ScoreBand::NeedsAttention);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::NeedsAttention);
        assert_eq!(ScoreBand::for_score(59), ScoreBand::RequiresRepair);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::RequiresRepair);
    }

    #[test]
    fn test_canonical_items() {
        let items = canonical_items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].name, "Water Heater Condition");
        assert_eq!(items[4].id, "5");
        for item in &items {
            assert_eq!(item.status, ItemStatus::Pending);
            assert!(item.notes.is_empty());
            assert!(item.photos.is_empty());
            assert!(item.photo_labels.is_empty());
        }
    }

    #[test]
    fn test_photo_constants_aligned() {
        assert_eq!(MOCK_PHOTOS.len(), PHOTO_LABELS.len());
    }
}
