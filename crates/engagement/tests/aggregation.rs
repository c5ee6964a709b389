//! Tests for the summary projection and its fingerprint.

mod common;

use assert_matches::assert_matches;
use board_core::error::CoreError;
use board_core::fingerprint::compute_fingerprint;
use board_core::reactions::{ReactionTally, ReactionType};
use common::{comment, fixture, ANNOUNCEMENT};

#[tokio::test]
async fn fresh_announcement_has_zero_engagement() {
    let fx = fixture().await;
    let summary = fx.summaries.get_summary(ANNOUNCEMENT).await.unwrap();

    assert_eq!(summary.comment_count, 0);
    assert_eq!(summary.reactions, ReactionTally::default());
    assert_eq!(summary.last_activity_at, summary.created_at);
    assert_eq!(summary.title, "Welcome");
}

#[tokio::test]
async fn last_activity_tracks_newest_comment() {
    let fx = fixture().await;
    fx.clock.advance(chrono::Duration::minutes(1));
    fx.comments.create(ANNOUNCEMENT, comment("first")).await.unwrap();
    fx.clock.advance(chrono::Duration::minutes(1));
    let newest = fx.comments.create(ANNOUNCEMENT, comment("second")).await.unwrap();

    let summary = fx.summaries.get_summary(ANNOUNCEMENT).await.unwrap();
    assert_eq!(summary.comment_count, 2);
    assert_eq!(summary.last_activity_at, newest.created_at);
}

#[tokio::test]
async fn reactions_are_tallied_by_kind() {
    let fx = fixture().await;
    for (user, kind) in [
        ("u1", ReactionType::Up),
        ("u2", ReactionType::Up),
        ("u3", ReactionType::Heart),
    ] {
        fx.reactions.create(ANNOUNCEMENT, user, kind, None).await.unwrap();
    }

    let summary = fx.summaries.get_summary(ANNOUNCEMENT).await.unwrap();
    assert_eq!(
        summary.reactions,
        ReactionTally {
            up: 2,
            down: 0,
            heart: 1
        }
    );
}

#[tokio::test]
async fn unknown_summary_is_not_found() {
    let fx = fixture().await;
    let err = fx.summaries.get_summary("missing").await.unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Announcement", .. });
}

#[tokio::test]
async fn list_and_detail_agree() {
    let fx = fixture().await;
    fx.comments.create(ANNOUNCEMENT, comment("hi")).await.unwrap();

    let listed = fx.summaries.list_summaries().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], fx.summaries.get_summary(ANNOUNCEMENT).await.unwrap());
}

#[tokio::test]
async fn fingerprint_follows_engagement_changes() {
    let fx = fixture().await;
    let initial = compute_fingerprint(&fx.summaries.list_summaries().await).unwrap();
    let again = compute_fingerprint(&fx.summaries.list_summaries().await).unwrap();
    assert_eq!(initial, again);

    fx.reactions
        .create(ANNOUNCEMENT, "u1", ReactionType::Down, None)
        .await
        .unwrap();
    let after_reaction = compute_fingerprint(&fx.summaries.list_summaries().await).unwrap();
    assert_ne!(initial, after_reaction);

    fx.clock.advance(chrono::Duration::seconds(1));
    fx.comments.create(ANNOUNCEMENT, comment("hi")).await.unwrap();
    let after_comment = compute_fingerprint(&fx.summaries.list_summaries().await).unwrap();
    assert_ne!(after_reaction, after_comment);
}
