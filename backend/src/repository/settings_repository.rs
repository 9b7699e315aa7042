use crate::repository::Database;
use shared::error::PortalError;
use std::collections::BTreeMap;

pub async fn all_settings(db: &Database) -> BTreeMap<String, String> {
    db.read().await.settings.clone()
}

/// Upserts all entries and returns the full map.
pub async fn upsert_settings(db: &Database, entries: Vec<(String, String)>) -> Result<BTreeMap<String, String>, PortalError> {
    db.write(move |tables| {
        tables.settings.extend(entries);
        tables.settings.clone()
    }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_merges() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).await.unwrap();
        upsert_settings(&db, vec![("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())]).await.unwrap();
        let all = upsert_settings(&db, vec![("a".to_string(), "3".to_string())]).await.unwrap();
        assert_eq!(all.get("a").map(String::as_str), Some("3"));
        assert_eq!(all.get("b").map(String::as_str), Some("2"));
        assert_eq!(all_settings(&db).await, all);
    }
}
