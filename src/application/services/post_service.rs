//! Post listing, detail and search service.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::pagination::PageInfo;
use crate::config::SearchMode;
use crate::domain::entities::{CommentedPost, Post, Tag};
use crate::domain::repositories::{PostRepository, TagRepository};
use crate::error::AppError;

/// Posts with the same tag shown under a post detail.
const SIMILAR_LIMIT: i64 = 4;

/// Widget sizes for the sidebar.
const SIDEBAR_LIMIT: i64 = 5;

/// Cap on search results; the search page is not paginated.
const SEARCH_LIMIT: i64 = 100;

/// One page of published posts, with the tag filter resolved.
#[derive(Debug, Clone)]
pub struct PostListing {
    pub posts: Vec<Post>,
    pub page: PageInfo,
    pub tag: Option<Tag>,
}

/// Data for the sidebar widgets rendered on every page.
#[derive(Debug, Clone)]
pub struct Sidebar {
    pub total_posts: i64,
    pub latest_posts: Vec<Post>,
    pub most_commented: Vec<CommentedPost>,
}

/// Service for reading published posts.
///
/// Wraps the post and tag repositories with the behavior the HTML views
/// need: forgiving pagination, tag-filtered listings, date+slug lookups and
/// title search.
pub struct PostService<P: PostRepository, T: TagRepository> {
    posts: Arc<P>,
    tags: Arc<T>,
    page_size: u32,
    search_mode: SearchMode,
}

impl<P: PostRepository, T: TagRepository> PostService<P, T> {
    /// Creates a new post service.
    pub fn new(posts: Arc<P>, tags: Arc<T>, page_size: u32, search_mode: SearchMode) -> Self {
        Self {
            posts,
            tags,
            page_size,
            search_mode,
        }
    }

    /// One page of published posts, optionally filtered by tag.
    ///
    /// `page_param` is the raw `page` query value; see
    /// [`PageInfo::resolve`] for how bad values are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when `tag_slug` names no tag.
    pub async fn page(
        &self,
        page_param: Option<&str>,
        tag_slug: Option<&str>,
    ) -> Result<PostListing, AppError> {
        let tag = match tag_slug {
            Some(slug) => Some(
                self.tags
                    .find_by_slug(slug)
                    .await?
                    .ok_or_else(|| AppError::not_found("Tag not found"))?,
            ),
            None => None,
        };

        let tag_slug = tag.as_ref().map(|t| t.slug.clone());
        let total = self.posts.count_published(tag_slug.clone()).await?;
        let page = PageInfo::resolve(page_param, total, self.page_size);

        let posts = self
            .posts
            .list_published(tag_slug, page.offset, page.limit)
            .await?;

        Ok(PostListing { posts, page, tag })
    }

    /// Finds a published post by publish date and slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the date is invalid or no
    /// published post matches.
    pub async fn detail(
        &self,
        year: i32,
        month: u32,
        day: u32,
        slug: &str,
    ) -> Result<Post, AppError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        self.posts
            .find_published_by_date_slug(date, slug)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))
    }

    /// Finds a published post by id (used by the share page).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the post is missing or a draft.
    pub async fn published_by_id(&self, id: i64) -> Result<Post, AppError> {
        self.posts
            .find_published_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))
    }

    /// Up to four published posts sharing tags with `post_id`, ranked by
    /// how many tags they share.
    pub async fn similar(&self, post_id: i64) -> Result<Vec<Post>, AppError> {
        self.posts.similar_to(post_id, SIMILAR_LIMIT).await
    }

    /// Searches published posts by title, ranked by relevance.
    ///
    /// The strategy (trigram similarity or weighted full-text) is chosen by
    /// configuration.
    pub async fn search(&self, query: &str) -> Result<Vec<Post>, AppError> {
        match self.search_mode {
            SearchMode::Trigram => self.posts.search_trigram(query, SEARCH_LIMIT).await,
            SearchMode::Fulltext => self.posts.search_fulltext(query, SEARCH_LIMIT).await,
        }
    }

    /// Collects the sidebar widget data shown on every page.
    pub async fn sidebar(&self) -> Result<Sidebar, AppError> {
        let total_posts = self.posts.count_published(None).await?;
        let latest_posts = self.posts.latest(SIDEBAR_LIMIT).await?;
        let most_commented = self.posts.most_commented(SIDEBAR_LIMIT).await?;

        Ok(Sidebar {
            total_posts,
            latest_posts,
            most_commented,
        })
    }
}
