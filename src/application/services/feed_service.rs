//! RSS feed and sitemap service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rss::{Channel, ChannelBuilder, Guid, Item, ItemBuilder};

use crate::config::SiteSettings;
use crate::domain::entities::Post;
use crate::domain::repositories::PostRepository;
use crate::error::AppError;
use crate::utils::text::truncate_words;

/// Words kept from the post body in a feed item description.
const DESCRIPTION_WORDS: usize = 30;

/// Upper bound on sitemap entries.
const SITEMAP_LIMIT: i64 = 50_000;

/// One URL entry of the sitemap.
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: DateTime<Utc>,
}

/// Service producing the RSS channel and the sitemap entries.
pub struct FeedService<P: PostRepository> {
    posts: Arc<P>,
    site: SiteSettings,
}

impl<P: PostRepository> FeedService<P> {
    /// Creates a new feed service.
    pub fn new(posts: Arc<P>, site: SiteSettings) -> Self {
        Self { posts, site }
    }

    /// Builds the RSS channel with the most recent published posts.
    ///
    /// Item descriptions are the post body cut to thirty words; the UUID
    /// serves as a stable non-permalink GUID.
    pub async fn channel(&self) -> Result<Channel, AppError> {
        let posts = self.posts.latest(self.site.feed_size).await?;

        let items: Vec<Item> = posts.iter().map(|post| self.item(post)).collect();

        let link = self
            .absolute("/blog")
            .unwrap_or_else(|| self.site.base_url.to_string());

        Ok(ChannelBuilder::default()
            .title(self.site.title.clone())
            .link(link)
            .description(self.site.description.clone())
            .items(items)
            .build())
    }

    /// Sitemap entries for every published post, newest first.
    pub async fn sitemap_entries(&self) -> Result<Vec<SitemapEntry>, AppError> {
        let posts = self
            .posts
            .list_published(None, 0, SITEMAP_LIMIT)
            .await?;

        Ok(posts
            .iter()
            .filter_map(|post| {
                self.absolute(&post.url_path()).map(|loc| SitemapEntry {
                    loc,
                    lastmod: post.updated,
                })
            })
            .collect())
    }

    fn item(&self, post: &Post) -> Item {
        let mut guid = Guid::default();
        guid.set_value(post.uuid.to_string());
        guid.set_permalink(false);

        ItemBuilder::default()
            .title(Some(post.title.clone()))
            .link(self.absolute(&post.url_path()))
            .description(Some(truncate_words(&post.body, DESCRIPTION_WORDS)))
            .guid(Some(guid))
            .pub_date(Some(post.publish.to_rfc2822()))
            .build()
    }

    fn absolute(&self, path: &str) -> Option<String> {
        self.site
            .base_url
            .join(path)
            .map(|url| url.to_string())
            .ok()
    }
}
