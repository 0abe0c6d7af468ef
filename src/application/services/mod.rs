//! Application services.

mod comment_service;
mod feed_service;
mod post_service;
mod share_service;

pub use comment_service::CommentService;
pub use feed_service::{FeedService, SitemapEntry};
pub use post_service::{PostListing, PostService, Sidebar};
pub use share_service::{ShareRequest, ShareService};
