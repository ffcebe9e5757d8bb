//! Database repository for employee roles.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::{self, Repository},
    models::roles::{RoleCreateDBRequest, RoleDBResponse, RoleUpdateDBRequest},
};
use crate::types::{Operation, RoleId, abbrev_uuid};
use sqlx::{FromRow, PgConnection};
use tracing::instrument;

/// Filter for listing roles
#[derive(Debug, Clone)]
pub struct RoleFilter {
    pub skip: i64,
    pub limit: i64,
}

impl RoleFilter {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }
}

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
}

pub struct Roles<'c> {
    db: &'c mut PgConnection,
}

impl From<Role> for RoleDBResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
        }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Roles<'c> {
    type CreateRequest = RoleCreateDBRequest;
    type UpdateRequest = RoleUpdateDBRequest;
    type Response = RoleDBResponse;
    type Id = RoleId;
    type Filter = RoleFilter;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let role = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO role (name, description)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(RoleDBResponse::from(role))
    }

    #[instrument(skip(self), fields(role_id = %abbrev_uuid(&id)), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let role = sqlx::query_as::<_, Role>("SELECT * FROM role WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(role.map(RoleDBResponse::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()), err)]
    async fn get_bulk(&mut self, ids: Vec<RoleId>) -> Result<std::collections::HashMap<RoleId, RoleDBResponse>> {
        if ids.is_empty() {
            return Ok(std::collections::HashMap::new());
        }

        let roles = sqlx::query_as::<_, Role>("SELECT * FROM role WHERE id = ANY($1)")
            .bind(&ids)
            .fetch_all(&mut *self.db)
            .await?;

        let mut result = std::collections::HashMap::new();
        for role in roles {
            result.insert(role.id, RoleDBResponse::from(role));
        }

        Ok(result)
    }

    #[instrument(skip(self, filter), fields(limit = filter.limit, skip = filter.skip), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let roles = sqlx::query_as::<_, Role>("SELECT * FROM role ORDER BY name LIMIT $1 OFFSET $2")
            .bind(filter.limit)
            .bind(filter.skip)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(roles.into_iter().map(RoleDBResponse::from).collect())
    }

    #[instrument(skip(self), fields(role_id = %abbrev_uuid(&id)), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        // The admin role is required by the initial-admin bootstrap
        if let Some(role) = self.get_by_id(id).await? {
            if role.name == crate::auth::permissions::ADMIN_ROLE {
                return Err(DbError::ProtectedEntity {
                    operation: Operation::DeleteAll,
                    reason: "Cannot delete the admin role".to_string(),
                    entity_type: "Role".to_string(),
                    entity_id: Some(id.to_string()),
                });
            }
        }

        repository::delete_from(self.db, "role", id).await
    }

    #[instrument(skip(self, request), fields(role_id = %abbrev_uuid(&id)), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // Atomic update with conditional field updates
        let role = sqlx::query_as::<_, Role>(
            r#"
            UPDATE role SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.description)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(RoleDBResponse::from(role))
    }
}

impl<'c> Roles<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, name), err)]
    pub async fn get_by_name(&mut self, name: &str) -> Result<Option<RoleDBResponse>> {
        let role = repository::fetch_one_where::<Role>(self.db, "role", "name", name).await?;
        Ok(role.map(RoleDBResponse::from))
    }
}
