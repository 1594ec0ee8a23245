//! Repository Integration Tests
//!
//! Tests for the SQLite repositories with an in-memory database.

#[cfg(test)]
mod tests {
    use crate::domain::{Account, Category, DomainError, GroceryItem};
    use crate::repository::{init_db, AccountRepository, AccountStore, ItemRepository, ItemStore};
    use chrono::NaiveDate;
    use std::path::PathBuf;

    async fn setup_test_db() -> (ItemRepository, AccountRepository) {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        (
            ItemRepository::new(db_state.shared()),
            AccountRepository::new(db_state.shared()),
        )
    }

    fn item(name: &str, category: Category, day: u32, quantity: u32) -> GroceryItem {
        let expiry = NaiveDate::from_ymd_opt(2024, 7, day).unwrap();
        GroceryItem::new(name.to_string(), category, expiry, quantity)
    }

    #[tokio::test]
    async fn test_load_unknown_user_is_empty() {
        let (items, _) = setup_test_db().await;
        let loaded = items.load_items("nobody").await.expect("Load failed");
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load_preserves_order() {
        let (items, _) = setup_test_db().await;

        let saved = vec![
            item("Milk", Category::Dairy, 2, 1),
            item("Bread", Category::Pantry, 4, 2),
            item("Saffron", Category::Custom("Spices".into()), 30, 1),
        ];
        items.save_items("u1", &saved).await.expect("Save failed");

        let loaded = items.load_items("u1").await.expect("Load failed");
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_save_replaces_collection() {
        let (items, _) = setup_test_db().await;

        let first = vec![item("Milk", Category::Dairy, 2, 1), item("Eggs", Category::Dairy, 9, 1)];
        items.save_items("u1", &first).await.unwrap();
        items.save_items("u1", &first[1..]).await.unwrap();

        let loaded = items.load_items("u1").await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Eggs");
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let (items, _) = setup_test_db().await;

        items.save_items("u1", &[item("Milk", Category::Dairy, 2, 1)]).await.unwrap();
        items.save_items("u2", &[item("Steak", Category::Meat, 3, 2)]).await.unwrap();
        items.save_items("u1", &[]).await.unwrap();

        assert!(items.load_items("u1").await.unwrap().is_empty());
        assert_eq!(items.load_items("u2").await.unwrap()[0].name, "Steak");
    }

    #[tokio::test]
    async fn test_account_insert_and_find() {
        let (_, accounts) = setup_test_db().await;

        let account = Account::new("Ana".into(), "ana@example.com".into(), "hash".into());
        accounts.insert(&account).await.expect("Insert failed");

        let by_email = accounts.find_by_email("ana@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, account.id);
        assert_eq!(by_email.created_at.timestamp_millis(), account.created_at.timestamp_millis());

        let by_id = accounts.find_by_id(&account.id).await.unwrap();
        assert_eq!(by_id.map(|a| a.email), Some("ana@example.com".to_string()));
        assert!(accounts.find_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let (_, accounts) = setup_test_db().await;

        let first = Account::new("Ana".into(), "ana@example.com".into(), "hash".into());
        let second = Account::new("Other".into(), "ana@example.com".into(), "hash".into());
        accounts.insert(&first).await.unwrap();

        let err = accounts.insert(&second).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_profile() {
        let (_, accounts) = setup_test_db().await;

        let account = Account::new("Ana".into(), "ana@example.com".into(), "hash".into());
        accounts.insert(&account).await.unwrap();

        let updated = accounts
            .update_profile(&account.id, "Ana Lopez", Some("555-0100"))
            .await
            .expect("Update failed");
        assert_eq!(updated.name, "Ana Lopez");
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));

        let missing = accounts.update_profile("nope", "x", None).await.unwrap_err();
        assert!(matches!(missing, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_closed_database_reports_error() {
        let db_state = init_db(&PathBuf::from(":memory:")).await.unwrap();
        let items = ItemRepository::new(db_state.shared());
        db_state.close().await;

        let err = items.load_items("u1").await.unwrap_err();
        assert_eq!(err, DomainError::Internal("Database not initialized".to_string()));
    }

    #[tokio::test]
    async fn test_corrupt_quantity_is_reported() {
        let db_state = init_db(&PathBuf::from(":memory:")).await.unwrap();
        {
            let guard = db_state.conn.lock().await;
            let conn = guard.as_ref().unwrap();
            conn.execute(
                "INSERT INTO grocery_items (id, user_id, name, category, expiry_date, quantity, position)
                 VALUES ('i1', 'u1', 'Milk', 'Dairy', '2024-07-02', 'lots', 0)",
                [],
            )
            .unwrap();
        }

        let items = ItemRepository::new(db_state.shared());
        let err = items.load_items("u1").await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn test_file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("data").join("grocery.db");

        {
            let db_state = init_db(&db_path).await.unwrap();
            let items = ItemRepository::new(db_state.shared());
            items.save_items("u1", &[item("Milk", Category::Dairy, 2, 3)]).await.unwrap();
        }

        let db_state = init_db(&db_path).await.unwrap();
        let items = ItemRepository::new(db_state.shared());
        let loaded = items.load_items("u1").await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].quantity, 3);
    }
}
