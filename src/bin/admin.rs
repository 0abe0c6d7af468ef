//! CLI administration tool for the blog engine.
//!
//! Provides commands for managing authors, posts and comment moderation
//! without a web admin console.
//!
//! # Usage
//!
//! ```bash
//! # Create an author
//! cargo run --bin admin -- author create
//!
//! # Create a post (interactive; the slug is derived from the title)
//! cargo run --bin admin -- post create
//!
//! # List drafts
//! cargo run --bin admin -- post list --status draft
//!
//! # Publish a post
//! cargo run --bin admin -- post publish my-first-post
//!
//! # Retag a post
//! cargo run --bin admin -- post tag my-first-post rust web
//!
//! # Moderate comments
//! cargo run --bin admin -- comment list
//! cargo run --bin admin -- comment hide 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;

use blog_engine::domain::entities::{NewAuthor, NewPost, PostStatus};
use blog_engine::domain::repositories::{
    AuthorRepository, CommentRepository, PostRepository, TagRepository,
};
use blog_engine::infrastructure::persistence::{
    PgAuthorRepository, PgCommentRepository, PgPostRepository, PgTagRepository,
};

/// CLI tool for managing the blog engine.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage authors
    Author {
        #[command(subcommand)]
        action: AuthorAction,
    },

    /// Manage posts
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Moderate comments
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Author management subcommands.
#[derive(Subcommand)]
enum AuthorAction {
    /// Create a new author
    Create,
    /// List all authors
    List,
}

/// Post management subcommands.
#[derive(Subcommand)]
enum PostAction {
    /// Create a new post interactively
    Create,
    /// List posts, optionally filtered by status
    List {
        /// Filter: draft or published
        #[arg(long)]
        status: Option<String>,
    },
    /// Publish the post with the given slug
    Publish { slug: String },
    /// Replace the tags of the post with the given slug
    Tag {
        slug: String,
        /// Tag names; slugs are derived automatically
        #[arg(required = true)]
        tags: Vec<String>,
    },
}

/// Comment moderation subcommands.
#[derive(Subcommand)]
enum CommentAction {
    /// List comments (most recent first)
    List {
        /// Only show deactivated comments
        #[arg(long)]
        hidden: bool,
    },
    /// Deactivate a comment
    Hide { id: i64 },
    /// Reactivate a comment
    Show { id: i64 },
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check connectivity and show content counts
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = Arc::new(
        PgPool::connect(&database_url)
            .await
            .context("Failed to connect to database")?,
    );

    match cli.command {
        Commands::Author { action } => handle_author(action, pool).await,
        Commands::Post { action } => handle_post(action, pool).await,
        Commands::Comment { action } => handle_comment(action, pool).await,
        Commands::Db { action } => handle_db(action, pool).await,
    }
}

async fn handle_author(action: AuthorAction, pool: Arc<PgPool>) -> Result<()> {
    let authors = PgAuthorRepository::new(pool);

    match action {
        AuthorAction::Create => {
            let username: String = Input::new().with_prompt("Username").interact_text()?;
            let email: String = Input::new().with_prompt("Email").interact_text()?;

            let author = authors.create(NewAuthor { username, email }).await?;
            println!(
                "{} author {} (id {})",
                "Created".green().bold(),
                author.username.bold(),
                author.id
            );
        }
        AuthorAction::List => {
            let all = authors.list().await?;
            if all.is_empty() {
                println!("{}", "No authors yet.".yellow());
            }
            for author in all {
                println!("{:>5}  {:<20}  {}", author.id, author.username, author.email);
            }
        }
    }

    Ok(())
}

async fn handle_post(action: PostAction, pool: Arc<PgPool>) -> Result<()> {
    let posts = PgPostRepository::new(pool.clone());
    let tags = PgTagRepository::new(pool.clone());
    let authors = PgAuthorRepository::new(pool);

    match action {
        PostAction::Create => {
            let title: String = Input::new().with_prompt("Title").interact_text()?;

            let slug: String = Input::new()
                .with_prompt("Slug")
                .default(slug::slugify(&title))
                .interact_text()?;

            let username: String = Input::new()
                .with_prompt("Author username")
                .interact_text()?;
            let author = authors
                .find_by_username(&username)
                .await?
                .with_context(|| format!("No author named '{username}'"))?;

            let body: String = Input::new()
                .with_prompt("Body (markdown)")
                .interact_text()?;

            let publish_now = Confirm::new()
                .with_prompt("Publish now?")
                .default(false)
                .interact()?;

            let status = if publish_now {
                PostStatus::Published
            } else {
                PostStatus::Draft
            };

            let tag_line: String = Input::new()
                .with_prompt("Tags (comma separated)")
                .allow_empty(true)
                .interact_text()?;

            let post = posts
                .create(NewPost {
                    title,
                    slug,
                    author_id: author.id,
                    body,
                    publish: None,
                    status,
                })
                .await?;

            let mut tag_ids = Vec::new();
            for name in tag_line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                tag_ids.push(tags.get_or_create(name).await?.id);
            }
            if !tag_ids.is_empty() {
                tags.replace_for_post(post.id, &tag_ids).await?;
            }

            println!(
                "{} {} post {} at {}",
                "Created".green().bold(),
                post.status,
                post.slug.bold(),
                post.url_path()
            );
        }
        PostAction::List { status } => {
            let status = status
                .map(|s| s.parse::<PostStatus>().map_err(anyhow::Error::msg))
                .transpose()?;

            let all = posts.list(status, 100).await?;
            if all.is_empty() {
                println!("{}", "No posts found.".yellow());
            }
            for post in all {
                let status = match post.status {
                    PostStatus::Published => "published".green(),
                    PostStatus::Draft => "draft".yellow(),
                };
                println!(
                    "{:>5}  {:<10}  {:<30}  {}  by {}",
                    post.id,
                    status,
                    post.slug,
                    post.publish.format("%Y-%m-%d"),
                    post.author
                );
            }
        }
        PostAction::Publish { slug } => match posts.publish(&slug).await? {
            Some(post) => println!(
                "{} {} at {}",
                "Published".green().bold(),
                post.slug.bold(),
                post.url_path()
            ),
            None => println!("{} no post with slug '{}'", "Error:".red().bold(), slug),
        },
        PostAction::Tag { slug, tags: names } => {
            let post = posts
                .find_by_slug(&slug)
                .await?
                .with_context(|| format!("No post with slug '{slug}'"))?;

            let mut tag_ids = Vec::new();
            for name in &names {
                tag_ids.push(tags.get_or_create(name).await?.id);
            }
            tags.replace_for_post(post.id, &tag_ids).await?;

            println!(
                "{} {} with: {}",
                "Tagged".green().bold(),
                post.slug.bold(),
                names.join(", ")
            );
        }
    }

    Ok(())
}

async fn handle_comment(action: CommentAction, pool: Arc<PgPool>) -> Result<()> {
    let comments = PgCommentRepository::new(pool);

    match action {
        CommentAction::List { hidden } => {
            let filter = if hidden { Some(false) } else { None };
            let all = comments.list(filter, 100).await?;
            if all.is_empty() {
                println!("{}", "No comments found.".yellow());
            }
            for comment in all {
                let state = if comment.active {
                    "active".green()
                } else {
                    "hidden".red()
                };
                println!(
                    "{:>5}  {}  post {:>4}  {:<20}  {}",
                    comment.id,
                    state,
                    comment.post_id,
                    comment.name,
                    comment.created.format("%Y-%m-%d %H:%M")
                );
            }
        }
        CommentAction::Hide { id } => set_comment_active(&comments, id, false).await?,
        CommentAction::Show { id } => set_comment_active(&comments, id, true).await?,
    }

    Ok(())
}

async fn set_comment_active(
    comments: &PgCommentRepository,
    id: i64,
    active: bool,
) -> Result<()> {
    let verb = if active { "Reactivated" } else { "Hidden" };

    if comments.set_active(id, active).await? {
        println!("{} comment {}", verb.green().bold(), id);
    } else {
        println!("{} no comment with id {}", "Error:".red().bold(), id);
    }

    Ok(())
}

async fn handle_db(action: DbAction, pool: Arc<PgPool>) -> Result<()> {
    match action {
        DbAction::Check => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool.as_ref())
                .await?;
            let posts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
                .fetch_one(pool.as_ref())
                .await?;
            let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
                .fetch_one(pool.as_ref())
                .await?;

            println!("{} {}", "Connected:".green().bold(), version);
            println!("Posts: {posts}");
            println!("Comments: {comments}");
        }
    }

    Ok(())
}
