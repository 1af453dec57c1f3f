use crate::domain::models::{Notification, NotificationTarget, NotificationVerb};
use crate::error::Result;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Repository for the notification inbox
#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert within the caller's transaction so the notification commits
    /// or rolls back together with the write that triggered it.
    pub async fn insert_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipient_id: Uuid,
        actor_id: Uuid,
        verb: NotificationVerb,
        target: NotificationTarget,
    ) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications
                (id, recipient_id, actor_id, verb, target_kind, target_id, is_read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE, NOW())
            RETURNING id, recipient_id, actor_id, verb, target_kind, target_id, is_read, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(recipient_id)
        .bind(actor_id)
        .bind(verb.as_str())
        .bind(target.kind())
        .bind(target.id())
        .fetch_one(&mut **tx)
        .await?;

        Ok(notification)
    }

    pub async fn list_for(
        &self,
        recipient_id: Uuid,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, recipient_id, actor_id, verb, target_kind, target_id, is_read, created_at
            FROM notifications
            WHERE recipient_id = $1
              AND ($2::bool = FALSE OR is_read = FALSE)
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(recipient_id)
        .bind(unread_only)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    pub async fn unread_count(&self, recipient_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM notifications
            WHERE recipient_id = $1 AND is_read = FALSE
            "#,
        )
        .bind(recipient_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Recipient-scoped, so marking someone else's notification behaves as
    /// not-found. Idempotent for already-read rows.
    pub async fn mark_read(&self, recipient_id: Uuid, notification_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE id = $1 AND recipient_id = $2
            "#,
        )
        .bind(notification_id)
        .bind(recipient_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn mark_all_read(&self, recipient_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE recipient_id = $1 AND is_read = FALSE
            "#,
        )
        .bind(recipient_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
