//! PostgreSQL repository implementations.

mod pg_author_repository;
mod pg_comment_repository;
mod pg_post_repository;
mod pg_tag_repository;

pub use pg_author_repository::PgAuthorRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_post_repository::PgPostRepository;
pub use pg_tag_repository::PgTagRepository;
