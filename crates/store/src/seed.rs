//! Bootstrap announcements installed at startup.

use crate::entity_store::EntityStore;
use crate::models::announcement::NewAnnouncement;

/// Author id used for seeded announcements.
pub const SEED_AUTHOR_ID: &str = "admin";

fn default_announcements() -> Vec<NewAnnouncement> {
    vec![
        NewAnnouncement {
            id: Some("1".to_string()),
            title: "Welcome to GoBasera".to_string(),
            content: "We are excited to have you here!".to_string(),
            author_id: SEED_AUTHOR_ID.to_string(),
        },
        NewAnnouncement {
            id: Some("2".to_string()),
            title: "Community Meeting".to_string(),
            content: "Join us this Friday for our monthly community meeting.".to_string(),
            author_id: SEED_AUTHOR_ID.to_string(),
        },
    ]
}

/// Insert the default announcements, skipping ids that already exist.
///
/// Returns the number of announcements inserted.
pub async fn seed_announcements(store: &EntityStore) -> usize {
    let mut inserted = 0;
    for announcement in default_announcements() {
        if let Some(id) = &announcement.id {
            if store.announcement_exists(id).await {
                continue;
            }
        }
        store.insert_announcement(announcement).await;
        inserted += 1;
    }
    tracing::info!(inserted, "Seeded announcements");
    inserted
}
