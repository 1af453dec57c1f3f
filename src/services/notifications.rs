/// Notification fan-out and inbox reads.
///
/// Fan-out is synchronous: the insert happens inside the transaction of
/// the comment or like that triggered it, so both commit or roll back
/// together. Follows never reach this module.
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::models::{Notification, NotificationTarget, NotificationVerb};
use crate::error::{AppError, Result};
use crate::metrics;
use crate::repository::NotificationRepository;

/// Self-actions are never announced to their own actor.
pub fn should_notify(recipient_id: Uuid, actor_id: Uuid) -> bool {
    recipient_id != actor_id
}

#[derive(Clone)]
pub struct NotificationService {
    repo: NotificationRepository,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: NotificationRepository::new(pool),
        }
    }

    /// Record a notification inside the caller's open transaction.
    /// Returns None when the emission is suppressed (actor == recipient).
    pub async fn notify_in_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        recipient_id: Uuid,
        actor_id: Uuid,
        verb: NotificationVerb,
        target: NotificationTarget,
    ) -> Result<Option<Notification>> {
        if !should_notify(recipient_id, actor_id) {
            tracing::debug!(
                actor_id = %actor_id,
                verb = verb.as_str(),
                "notification suppressed for self action"
            );
            metrics::helpers::record_fanout("suppressed");
            return Ok(None);
        }

        let notification = self
            .repo
            .insert_in_tx(tx, recipient_id, actor_id, verb, target)
            .await?;
        metrics::helpers::record_fanout("emitted");

        Ok(Some(notification))
    }

    pub async fn list(
        &self,
        recipient_id: Uuid,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>> {
        self.repo
            .list_for(recipient_id, unread_only, limit, offset)
            .await
    }

    pub async fn unread_count(&self, recipient_id: Uuid) -> Result<i64> {
        self.repo.unread_count(recipient_id).await
    }

    /// Marking someone else's notification (or an unknown id) is a 404.
    pub async fn mark_read(&self, recipient_id: Uuid, notification_id: Uuid) -> Result<()> {
        let updated = self.repo.mark_read(recipient_id, notification_id).await?;
        if updated {
            Ok(())
        } else {
            Err(AppError::NotFound("Notification not found".into()))
        }
    }

    pub async fn mark_all_read(&self, recipient_id: Uuid) -> Result<u64> {
        self.repo.mark_all_read(recipient_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_action_suppressed() {
        let user = Uuid::new_v4();
        assert!(!should_notify(user, user));
    }

    #[test]
    fn test_foreign_action_notifies() {
        assert!(should_notify(Uuid::new_v4(), Uuid::new_v4()));
    }
}
