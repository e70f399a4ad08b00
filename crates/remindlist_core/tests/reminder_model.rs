use chrono::{TimeZone, Utc};
use remindlist_core::{Reminder, ReminderDraft, ReminderId, ReminderStatus, ReminderStore};
use uuid::Uuid;

#[test]
fn reminder_serialization_uses_expected_wire_fields() {
    let id = ReminderId::from_uuid(
        Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap(),
    )
    .unwrap();
    let reminder = Reminder {
        id,
        title: "pay rent".to_string(),
        description: String::new(),
        due_at: Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap(),
        status: ReminderStatus::Completed,
        created_at: Utc.with_ymd_and_hms(2026, 1, 20, 8, 0, 0).unwrap(),
        completed_at: Some(Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap()),
    };

    let json = serde_json::to_value(&reminder).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["status"], "completed");
    assert_eq!(json["due_at"], "2026-02-01T09:30:00Z");
    assert_eq!(json["completed_at"], "2026-02-01T10:00:00Z");

    let decoded: Reminder = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, reminder);
}

#[test]
fn created_reminder_is_pending_with_trimmed_title() {
    let mut store = ReminderStore::new();
    let due = Utc.with_ymd_and_hms(2026, 4, 2, 7, 0, 0).unwrap();

    let reminder = store
        .create(ReminderDraft::new("  stretch  ", "ten minutes", due))
        .unwrap();

    assert!(!reminder.id.as_uuid().is_nil());
    assert_eq!(reminder.title, "stretch");
    assert_eq!(reminder.description, "ten minutes");
    assert_eq!(reminder.due_at, due);
    assert_eq!(reminder.status, ReminderStatus::Pending);
    assert!(reminder.is_pending());
    assert_eq!(reminder.completed_at, None);
}

#[test]
fn generated_ids_are_unique() {
    let mut store = ReminderStore::new();
    let due = Utc.with_ymd_and_hms(2026, 4, 2, 7, 0, 0).unwrap();
    let a = store.create(ReminderDraft::new("a", "", due)).unwrap();
    let b = store.create(ReminderDraft::new("a", "", due)).unwrap();
    assert_ne!(a.id, b.id);
}
