//! PostgreSQL document store: one `documents` table with a `jsonb` payload.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, types::Json};

use crate::store::{Collection, Document, DocumentStore, StoreError, expect_object};

const LIST_DOCUMENTS_SQL: &str = include_str!("sql/list_documents.sql");
const GET_DOCUMENT_SQL: &str = include_str!("sql/get_document.sql");
const FIND_DOCUMENTS_BY_FIELD_SQL: &str = include_str!("sql/find_documents_by_field.sql");
const INSERT_DOCUMENT_SQL: &str = include_str!("sql/insert_document.sql");
const SET_DOCUMENT_SQL: &str = include_str!("sql/set_document.sql");
const MERGE_DOCUMENT_SQL: &str = include_str!("sql/merge_document.sql");
const DELETE_DOCUMENT_SQL: &str = include_str!("sql/delete_document.sql");

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn write(
        &self,
        sql: &'static str,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<Document, StoreError> {
        expect_object(&data)?;

        let document = query_as::<Postgres, Document>(sql)
            .bind(collection.as_str())
            .bind(key)
            .bind(Json(data))
            .fetch_one(&self.pool)
            .await?;

        Ok(document)
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn list(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let documents = query_as::<Postgres, Document>(LIST_DOCUMENTS_SQL)
            .bind(collection.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(documents)
    }

    async fn get(
        &self,
        collection: Collection,
        key: &str,
    ) -> Result<Option<Document>, StoreError> {
        let document = query_as::<Postgres, Document>(GET_DOCUMENT_SQL)
            .bind(collection.as_str())
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(document)
    }

    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let documents = query_as::<Postgres, Document>(FIND_DOCUMENTS_BY_FIELD_SQL)
            .bind(collection.as_str())
            .bind(field)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;

        Ok(documents)
    }

    async fn insert(
        &self,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<Document, StoreError> {
        self.write(INSERT_DOCUMENT_SQL, collection, key, data).await
    }

    async fn set(
        &self,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<Document, StoreError> {
        self.write(SET_DOCUMENT_SQL, collection, key, data).await
    }

    async fn merge(
        &self,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<Document, StoreError> {
        self.write(MERGE_DOCUMENT_SQL, collection, key, data).await
    }

    async fn delete(&self, collection: Collection, key: &str) -> Result<bool, StoreError> {
        let rows_affected = query(DELETE_DOCUMENT_SQL)
            .bind(collection.as_str())
            .bind(key)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}

impl<'r> FromRow<'r, PgRow> for Document {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            key: row.try_get("key")?,
            data: row.try_get::<Json<Value>, _>("data")?.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::test::TestDb;

    use super::*;

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn insert_then_get_round_trips_the_payload() -> TestResult {
        let db = TestDb::new().await;
        let store = PgDocumentStore::new(db.pool().clone());

        store
            .insert(Collection::Cars, "k1", json!({ "id": "k1", "slug": "supra" }))
            .await?;

        let stored = store.get(Collection::Cars, "k1").await?;

        assert_eq!(
            stored,
            Some(Document::new("k1", json!({ "id": "k1", "slug": "supra" })))
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn insert_rejects_taken_keys() -> TestResult {
        let db = TestDb::new().await;
        let store = PgDocumentStore::new(db.pool().clone());

        store.insert(Collection::Cars, "k1", json!({})).await?;

        let result = store.insert(Collection::Cars, "k1", json!({})).await;

        assert!(matches!(result, Err(StoreError::AlreadyExists)));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn merge_is_a_shallow_upsert() -> TestResult {
        let db = TestDb::new().await;
        let store = PgDocumentStore::new(db.pool().clone());

        store
            .set(
                Collection::Inquiries,
                "i1",
                json!({ "status": "pending", "email": "a@example.com" }),
            )
            .await?;

        let merged = store
            .merge(Collection::Inquiries, "i1", json!({ "status": "contacted" }))
            .await?;

        assert_eq!(
            merged.data,
            json!({ "status": "contacted", "email": "a@example.com" })
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn find_by_field_and_delete() -> TestResult {
        let db = TestDb::new().await;
        let store = PgDocumentStore::new(db.pool().clone());

        store.set(Collection::Cars, "k1", json!({ "slug": "supra" })).await?;
        store.set(Collection::Cars, "k2", json!({ "slug": "nsx" })).await?;
        store.set(Collection::Cars, "k3", json!({ "slug": 7 })).await?;

        let found = store.find_by_field(Collection::Cars, "slug", "nsx").await?;

        assert_eq!(found.len(), 1);
        assert!(store.find_by_field(Collection::Cars, "slug", "7").await?.is_empty());
        assert!(store.delete(Collection::Cars, "k2").await?);
        assert!(!store.delete(Collection::Cars, "k2").await?);
        assert_eq!(store.list(Collection::Cars).await?.len(), 2);

        Ok(())
    }
}
