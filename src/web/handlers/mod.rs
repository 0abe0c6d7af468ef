//! Template rendering handlers for the blog pages.

mod detail;
mod feed;
mod health;
mod list;
mod search;
mod share;

pub use detail::{post_comment_handler, post_detail_handler};
pub use feed::{post_feed_handler, sitemap_handler};
pub use health::health_handler;
pub use list::{post_list_by_tag_handler, post_list_handler};
pub use search::post_search_handler;
pub use share::{post_share_form_handler, post_share_send_handler};
