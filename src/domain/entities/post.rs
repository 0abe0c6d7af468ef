//! Post entity representing a blog entry.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

/// Publication state of a post.
///
/// Drafts are only visible through the admin CLI; every public read path
/// filters on [`PostStatus::Published`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            other => Err(format!("unknown post status: {other}")),
        }
    }
}

/// A blog post with its author name and tag names resolved.
///
/// `author` carries the username joined from the authors table; `tags`
/// carries tag names aggregated from the join table. Tag slugs are derived
/// from names (see [`crate::web::filters::slugify`]), so names are enough to
/// build tag links.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub uuid: Uuid,
    pub title: String,
    pub slug: String,
    pub author_id: i64,
    pub author: String,
    pub body: String,
    pub publish: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub status: PostStatus,
    pub tags: Vec<String>,
}

impl Post {
    /// Canonical path of the post: `/blog/{year}/{month}/{day}/{slug}`.
    ///
    /// Month and day are not zero-padded, matching the URL scheme used by
    /// the detail route.
    pub fn url_path(&self) -> String {
        format!(
            "/blog/{}/{}/{}/{}",
            self.publish.year(),
            self.publish.month(),
            self.publish.day(),
            self.slug
        )
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

/// Input data for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub author_id: i64,
    pub body: String,
    /// Publication timestamp; `None` lets the database default to now.
    pub publish: Option<DateTime<Utc>>,
    pub status: PostStatus,
}

/// A post annotated with its total comment count.
///
/// Used by the "most commented" sidebar widget. The count covers all
/// comments, including ones hidden from public view.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentedPost {
    #[sqlx(flatten)]
    pub post: Post,
    pub total_comments: i64,
}
