//! Tag entity for post categorization.

/// A tag with a unique name and URL-friendly slug.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}
