//! Repository layer for category operations.
//!
//! Every mutating method is one unit of work: begin a transaction, perform the
//! read/write sequence, commit. An early return (lookup miss) drops the
//! transaction, which rolls back and hands the connection back to the pool.

use crate::domain::Category;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Check that the store is reachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a category with its caller-supplied id and return the row as
    /// persisted, re-read inside the same transaction.
    ///
    /// # Errors
    /// A duplicate id fails with the engine's unique-constraint error.
    pub async fn create_category(&self, category: &Category) -> Result<Category, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO categories (id, name) VALUES (?, ?)")
            .bind(category.id)
            .bind(&category.name)
            .execute(&mut *tx)
            .await?;

        let created: Category =
            sqlx::query_as("SELECT id, name FROM categories WHERE id = ?")
                .bind(category.id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        debug!(id = created.id, "category created");
        Ok(created)
    }

    /// Return every category in the store's natural order.
    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM categories")
            .fetch_all(&self.pool)
            .await
    }

    /// Look up a single category by primary key.
    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Overwrite the name of the category with the given id and return the
    /// updated row, or `None` when no row matches.
    pub async fn rename_category(
        &self,
        id: i64,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE categories SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let updated: Category =
            sqlx::query_as("SELECT id, name FROM categories WHERE id = ?")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        debug!(id, "category renamed");
        Ok(Some(updated))
    }

    /// Remove the category with the given id and return its last-known
    /// values, or `None` when no row matches.
    pub async fn delete_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<Category> =
            sqlx::query_as("SELECT id, name FROM categories WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(category) = existing else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(id, "category deleted");
        Ok(Some(category))
    }
}
