//! End-to-end session flow tests
//!
//! Drives a full inspection the way the demo UI does: disposition every
//! item, submit, run the send script, land on complete, then reset.

use plumbpro_common::{
    InspectionSession, ItemStatus, ReportSummary, ScoreBand, Stage, SEND_MILESTONES,
};

/// Happy path: inspect, review, send, complete, reset
#[test]
fn test_full_inspection_flow() {
    let mut session = InspectionSession::new();
    session.customer.name = "Maria Lopez".to_string();
    session.customer.address = "9 Harbor Blvd, Anaheim, CA".to_string();

    // field work: four passes, one failure with notes and both photos
    for id in ["1", "2", "3", "4"] {
        session.set_item_status(id, ItemStatus::Pass).unwrap();
    }
    session.set_item_status("5", ItemStatus::Fail).unwrap();
    session.set_item_notes("5", "toilet shutoff valve seized").unwrap();
    assert_eq!(session.add_photo("5").unwrap(), Some("Before"));
    assert_eq!(session.add_photo("5").unwrap(), Some("After"));

    assert_eq!(session.progress_percent(), 100);
    assert!(session.can_submit());
    session.submit().unwrap();
    assert_eq!(session.current_step(), Stage::Review);
    assert_eq!(session.score(), 80);
    assert_eq!(session.score_band(), ScoreBand::Good);

    // the review screen builds its preview from the same snapshot the
    // complete screen reports as sent
    let summary = ReportSummary::from_session(&session, "1/27/2026");
    assert_eq!(summary.customer_name, "Maria Lopez");
    assert_eq!(summary.score, 80);
    assert_eq!(summary.lines[4].photo_count, 2);
    assert_eq!(summary.file_name(), "inspection_report_maria_lopez.pdf");

    // scripted delivery: every milestone raises the bar, then complete
    session.begin_sending().unwrap();
    let mut previous = 0u8;
    for milestone in SEND_MILESTONES {
        session.advance_sending(milestone).unwrap();
        assert!(session.sending_progress() > previous);
        previous = session.sending_progress();
    }
    session.finish_sending().unwrap();
    assert_eq!(session.current_step(), Stage::Complete);
    assert_eq!(session.sending_progress(), 100);

    // start-new-inspection returns to the pristine form
    session.reset();
    assert_eq!(session.current_step(), Stage::Form);
    assert_eq!(session.customer.name, "John Smith");
    assert!(session.items().iter().all(|i| i.status == ItemStatus::Pending));
}

/// Review round trip keeps field data intact
#[test]
fn test_back_to_edit_round_trip() {
    let mut session = InspectionSession::new();
    for id in ["1", "2", "3", "4", "5"] {
        session.set_item_status(id, ItemStatus::Na).unwrap();
    }
    session.set_item_notes("2", "not accessible").unwrap();
    session.submit().unwrap();
    session.back_to_edit().unwrap();

    assert_eq!(session.current_step(), Stage::Form);
    assert_eq!(session.items()[1].notes, "not accessible");
    assert!(session.can_submit());

    // all-N/A report scores 0 without dividing by zero
    session.submit().unwrap();
    assert_eq!(session.score(), 0);
}

/// The send stage cannot be entered from the form, nor left early
#[test]
fn test_send_stage_edges() {
    let mut session = InspectionSession::new();
    assert!(session.begin_sending().is_err());

    for id in ["1", "2", "3", "4", "5"] {
        session.set_item_status(id, ItemStatus::Pass).unwrap();
    }
    session.submit().unwrap();
    session.begin_sending().unwrap();

    // no backward edge out of sending
    assert!(session.back_to_edit().is_err());
    assert!(session.submit().is_err());

    session.finish_sending().unwrap();
    assert!(session.finish_sending().is_err());
}
