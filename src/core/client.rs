//! Client business logic - Handles all client-related operations.
//!
//! Provides functions for registering, retrieving, and searching clients.
//! Uniqueness of the document number and email is enforced by the store.

use crate::{
    entities::{Client, client},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};

/// Registers a new client, performing input validation.
///
/// The names, document number, and email must be non-empty; whitespace is
/// trimmed before storing. A fresh external token is assigned on creation.
pub async fn create_client(
    db: &DatabaseConnection,
    first_name: String,
    last_name: String,
    document_number: String,
    phone: Option<String>,
    email: String,
) -> Result<client::Model> {
    for (field, value) in [
        ("first name", &first_name),
        ("last name", &last_name),
        ("document number", &document_number),
        ("email", &email),
    ] {
        if value.trim().is_empty() {
            return Err(Error::Config {
                message: format!("Client {field} cannot be empty"),
            });
        }
    }

    let new_client = client::ActiveModel {
        uid: Set(Uuid::new_v4()),
        first_name: Set(first_name.trim().to_string()),
        last_name: Set(last_name.trim().to_string()),
        document_number: Set(document_number.trim().to_string()),
        phone: Set(phone),
        email: Set(email.trim().to_string()),
        ..Default::default()
    };

    Ok(new_client.insert(db).await?)
}

/// Retrieves a client by its unique ID.
pub async fn get_client_by_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Option<client::Model>> {
    Client::find_by_id(client_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a client by document number, the natural key operators look up by.
pub async fn get_client_by_document(
    db: &DatabaseConnection,
    document_number: &str,
) -> Result<Option<client::Model>> {
    Client::find()
        .filter(client::Column::DocumentNumber.eq(document_number))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all clients, ordered by last then first name.
pub async fn get_all_clients(db: &DatabaseConnection) -> Result<Vec<client::Model>> {
    Client::find()
        .order_by_asc(client::Column::LastName)
        .order_by_asc(client::Column::FirstName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Searches clients by substring over the fields the back-office dashboard
/// exposes: first name, last name, and document number.
pub async fn search_clients(db: &DatabaseConnection, query: &str) -> Result<Vec<client::Model>> {
    Client::find()
        .filter(
            Condition::any()
                .add(client::Column::FirstName.contains(query))
                .add(client::Column::LastName.contains(query))
                .add(client::Column::DocumentNumber.contains(query)),
        )
        .order_by_asc(client::Column::LastName)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_client_trims_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let client = create_client(
            &db,
            "  Ada ".to_string(),
            "Lovelace".to_string(),
            "D-100".to_string(),
            Some("+44 20 1234".to_string()),
            "ada@example.com".to_string(),
        )
        .await?;

        assert_eq!(client.first_name, "Ada");
        assert_eq!(client.phone.as_deref(), Some("+44 20 1234"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_client_rejects_empty_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_client(
            &db,
            "   ".to_string(),
            "Lovelace".to_string(),
            "D-100".to_string(),
            None,
            "ada@example.com".to_string(),
        )
        .await;

        assert!(matches!(result, Err(Error::Config { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_document_number_is_unique() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_client(&db, "D-100").await?;
        let duplicate = create_client(
            &db,
            "Grace".to_string(),
            "Hopper".to_string(),
            "D-100".to_string(),
            None,
            "grace@example.com".to_string(),
        )
        .await;

        assert!(matches!(duplicate, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_client_by_document() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_client(&db, "D-100").await?;

        let found = get_client_by_document(&db, "D-100").await?.unwrap();
        assert_eq!(found.id, created.id);

        assert!(get_client_by_document(&db, "D-999").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_clients_ordered_by_name() -> Result<()> {
        let db = setup_test_db().await?;

        create_client(
            &db,
            "Grace".to_string(),
            "Hopper".to_string(),
            "D-200".to_string(),
            None,
            "grace@example.com".to_string(),
        )
        .await?;
        create_client(
            &db,
            "Charles".to_string(),
            "Babbage".to_string(),
            "D-100".to_string(),
            None,
            "charles@example.com".to_string(),
        )
        .await?;

        let clients = get_all_clients(&db).await?;
        assert_eq!(clients[0].last_name, "Babbage");
        assert_eq!(clients[1].last_name, "Hopper");

        Ok(())
    }

    #[tokio::test]
    async fn test_search_clients_matches_name_and_document() -> Result<()> {
        let db = setup_test_db().await?;

        create_client(
            &db,
            "Ada".to_string(),
            "Lovelace".to_string(),
            "D-100".to_string(),
            None,
            "ada@example.com".to_string(),
        )
        .await?;
        create_client(
            &db,
            "Grace".to_string(),
            "Hopper".to_string(),
            "D-200".to_string(),
            None,
            "grace@example.com".to_string(),
        )
        .await?;

        // SQLite LIKE matches case-insensitively over ASCII
        let by_name = search_clients(&db, "love").await?;
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].last_name, "Lovelace");

        let by_document = search_clients(&db, "D-2").await?;
        assert_eq!(by_document.len(), 1);
        assert_eq!(by_document[0].first_name, "Grace");

        let none = search_clients(&db, "turing").await?;
        assert!(none.is_empty());

        Ok(())
    }
}
