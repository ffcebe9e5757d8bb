//! Database models for clients.

use crate::types::ClientId;
use chrono::{DateTime, NaiveDate, Utc};

/// Database request for creating a new client
#[derive(Debug, Clone)]
pub struct ClientCreateDBRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
}

/// Database request for updating a client
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ClientUpdateDBRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub password_hash: Option<String>,
}

/// Database response for a client
#[derive(Debug, Clone)]
pub struct ClientDBResponse {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
