//! Author entity referenced by posts.

use chrono::{DateTime, Utc};

/// A post author, managed through the admin CLI.
///
/// Deleting an author cascades to their posts.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Author {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating an author.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub username: String,
    pub email: String,
}
