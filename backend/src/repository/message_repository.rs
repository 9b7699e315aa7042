use crate::repository::{now_timestamp, Database};
use shared::error::PortalError;
use shared::model::{ContactRequest, MessageDto};

pub async fn insert_message(db: &Database, request: ContactRequest) -> Result<u64, PortalError> {
    db.write(move |tables| {
        let id = tables.next_message_id();
        tables.messages.push(MessageDto {
            id,
            name: request.name,
            email: request.email,
            company: request.company,
            message: request.message,
            created_at: now_timestamp(),
        });
        id
    }).await
}

/// Newest first, at most `limit` entries.
pub async fn list_messages(db: &Database, limit: usize) -> Vec<MessageDto> {
    let mut messages = db.read().await.messages.clone();
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    messages.truncate(limit);
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn newest_first_with_limit() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).await.unwrap();
        for idx in 0..5 {
            let request = ContactRequest {
                name: format!("n{idx}"),
                email: "x@y.z".to_string(),
                message: "hola".to_string(),
                ..ContactRequest::default()
            };
            assert_eq!(insert_message(&db, request).await.unwrap(), idx + 1);
        }
        let messages = list_messages(&db, 3).await;
        assert_eq!(messages.iter().map(|m| m.id).collect::<Vec<_>>(), vec![5, 4, 3]);
    }
}
