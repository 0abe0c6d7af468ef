//! Comment entity attached to a post.

use chrono::{DateTime, Utc};

/// A reader comment on a post.
///
/// Comments are shown oldest-first. The `active` flag is the moderation
/// switch: deactivated comments stay in the database but disappear from
/// public views.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub active: bool,
}

/// Input data for creating a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}
