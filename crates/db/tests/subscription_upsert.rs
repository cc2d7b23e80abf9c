//! Integration tests for the subscription repository: upsert keyed on
//! `fcm_token`, listing, and delete-by-token.

use lostfound_core::subscription::NotificationPreferences;
use lostfound_db::models::subscription::{CreateSubscription, UpdateSubscription};
use lostfound_db::repositories::SubscriptionRepo;
use sqlx::PgPool;

fn subscribe(token: &str, email: Option<&str>) -> CreateSubscription {
    CreateSubscription {
        fcm_token: Some(token.to_string()),
        email: email.map(str::to_string),
        preferences: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_inserts_with_default_preferences(pool: PgPool) {
    let input = subscribe("tok-1", Some("a@example.com")).validate().unwrap();
    let saved = SubscriptionRepo::upsert(&pool, &input).await.unwrap();

    assert!(saved.id > 0);
    assert_eq!(saved.fcm_token, "tok-1");
    assert_eq!(saved.email.as_deref(), Some("a@example.com"));
    assert_eq!(saved.preferences.0, NotificationPreferences::subscriber_default());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_upsert_overwrites_in_place(pool: PgPool) {
    let first = SubscriptionRepo::upsert(
        &pool,
        &subscribe("tok-1", Some("first@example.com")).validate().unwrap(),
    )
    .await
    .unwrap();

    let second = SubscriptionRepo::upsert(
        &pool,
        &subscribe("tok-1", Some("second@example.com")).validate().unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.email.as_deref(), Some("second@example.com"));

    let all = SubscriptionRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].email.as_deref(), Some("second@example.com"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_preferences(pool: PgPool) {
    SubscriptionRepo::upsert(&pool, &subscribe("tok-2", None).validate().unwrap())
        .await
        .unwrap();

    let prefs = NotificationPreferences {
        notify_on_lost: Some(false),
        notify_in_area: Some(true),
        area_radius: Some(5.0),
        ..Default::default()
    };
    let update = UpdateSubscription {
        email: None,
        preferences: Some(prefs.clone()),
    }
    .validate("tok-2")
    .unwrap();
    let updated = SubscriptionRepo::upsert(&pool, &update).await.unwrap();

    assert_eq!(updated.preferences.0, prefs);
    let stored = SubscriptionRepo::find_by_token(&pool, "tok-2")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, updated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_preferences_read_back_as_empty(pool: PgPool) {
    sqlx::query("INSERT INTO subscriptions (fcm_token) VALUES ('legacy')")
        .execute(&pool)
        .await
        .unwrap();

    let all = SubscriptionRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].preferences.0, NotificationPreferences::default());
    assert_eq!(
        serde_json::to_value(&all[0]).unwrap()["preferences"],
        serde_json::json!({})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_by_token(pool: PgPool) {
    SubscriptionRepo::upsert(&pool, &subscribe("tok-3", None).validate().unwrap())
        .await
        .unwrap();

    assert!(SubscriptionRepo::delete_by_token(&pool, "tok-3").await.unwrap());
    assert!(!SubscriptionRepo::delete_by_token(&pool, "tok-3").await.unwrap());
    assert!(SubscriptionRepo::find_by_token(&pool, "tok-3")
        .await
        .unwrap()
        .is_none());
}
