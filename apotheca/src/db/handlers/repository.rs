//! Base repository trait and table-parameterized query helpers.

use std::collections::HashMap;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, QueryBuilder};

/// Contains the Repository trait.
///
/// A repository is basically a data access layer for a postgres table. It
/// provides methods for creating, reading, updating, and deleting entities,
/// as well as listing them with simple filters.
///
/// Each repository maps rows to its entity type via sqlx::FromRow.
use crate::db::errors::Result;

/// Base repository trait providing common database operations
///
/// This trait has separate associated types for create requests, update requests, and responses.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The request type for updating entities
    type UpdateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// The filter type for list operations
    type Filter: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// Get lots of entities by their IDs, keyed by ID
    async fn get_bulk(&mut self, ids: Vec<Self::Id>) -> Result<HashMap<Self::Id, Self::Response>>;

    /// List entities with filtering and pagination
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>>;

    /// Delete an entity by ID
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;

    /// Update an entity by ID
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response>;
}

// Raw-SQL helpers shared by the entity repositories for their
// lookup-by-unique-field operations. `table` and `column` are compile-time
// constants at every call site, never user input; only `value` is bound.

/// Fetch a single row from `table` where the text `column` equals `value`.
///
/// Lookup failures are logged and reported as "no row" rather than
/// propagated; callers treat a missing row and a failed lookup the same way.
pub(crate) async fn fetch_one_where<T>(db: &mut PgConnection, table: &str, column: &str, value: &str) -> Result<Option<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut query = QueryBuilder::new("SELECT * FROM ");
    query.push(table);
    query.push(" WHERE ");
    query.push(column);
    query.push(" = ");
    query.push_bind(value.to_string());

    match query.build_query_as::<T>().fetch_optional(db).await {
        Ok(row) => Ok(row),
        Err(e) => {
            tracing::error!("Lookup on {table}.{column} failed: {e}");
            Ok(None)
        }
    }
}

/// Fetch every row from `table`, ordered by `order_by`.
pub(crate) async fn fetch_all_from<T>(db: &mut PgConnection, table: &str, order_by: &str) -> Result<Vec<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut query = QueryBuilder::new("SELECT * FROM ");
    query.push(table);
    query.push(" ORDER BY ");
    query.push(order_by);

    Ok(query.build_query_as::<T>().fetch_all(db).await?)
}

/// Delete the row with the given id from `table`. Returns whether a row was deleted.
pub(crate) async fn delete_from(db: &mut PgConnection, table: &str, id: uuid::Uuid) -> Result<bool> {
    let mut query = QueryBuilder::new("DELETE FROM ");
    query.push(table);
    query.push(" WHERE id = ");
    query.push_bind(id);

    let result = query.build().execute(db).await?;
    Ok(result.rows_affected() > 0)
}
