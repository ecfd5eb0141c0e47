//! WordPress store - inspection CLI over a WordPress database.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::{legacy_hash, PostFilter};
use wp_store_lib::config::WpStoreConfig;
use wp_store_lib::repository::{PageParams, DEFAULT_PAGE_SIZE};
use wp_store_lib::WpStore;

#[derive(Parser)]
#[command(name = "wp-store")]
#[command(about = "Inspect a WordPress database")]
struct Cli {
    /// Overrides WP_DATABASE_URL / DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check database connectivity
    Ping,
    /// Post lookups
    Post {
        #[command(subcommand)]
        action: PostCommands,
    },
    /// Term lookups
    Term {
        #[command(subcommand)]
        action: TermCommands,
    },
    /// Site options
    Options {
        #[command(subcommand)]
        action: OptionCommands,
    },
    /// List blogroll links
    Links {
        /// Include links not marked visible
        #[arg(long)]
        all: bool,
    },
    /// Show a user by login
    User { login: String },
    /// List users a page at a time
    Users {
        #[arg(long, default_value_t = 1)]
        page: u64,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: u64,
    },
    /// Print the legacy MD5 digest of a password
    HashPassword { password: String },
}

#[derive(Subcommand)]
enum PostCommands {
    /// Show a post by ID
    Show { id: u64 },
    /// List posts, newest first
    List {
        #[arg(long)]
        published: bool,
        #[arg(long = "type")]
        post_type: Option<String>,
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Resolve a /YYYY/MM/DD/slug/ permalink
    Permalink { path: String },
    /// Tags of a post
    Tags { id: u64 },
    /// Categories of a post
    Categories { id: u64 },
    /// Comments on a post
    Comments { id: u64 },
}

#[derive(Subcommand)]
enum TermCommands {
    /// Posts carrying a term
    Posts { id: u64 },
}

#[derive(Subcommand)]
enum OptionCommands {
    /// Read one option by name
    Get { name: String },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Commands::HashPassword { password } = &cli.command {
        println!("{}", legacy_hash(password));
        return Ok(());
    }

    let mut config = WpStoreConfig::from_env();
    if let Some(url) = cli.database_url {
        config = config.with_database_url(url);
    }
    let store = WpStore::connect(&config).await?;

    match cli.command {
        Commands::Ping => {
            store.database().ping().await?;
            println!("ok");
        }
        Commands::Post { action } => match action {
            PostCommands::Show { id } => print_json(&store.posts().get_post(id).await?)?,
            PostCommands::List {
                published,
                post_type,
                limit,
            } => {
                let filter = PostFilter {
                    published_only: published,
                    post_type,
                    limit,
                };
                print_json(&store.posts().list_posts(filter).await?)?
            }
            PostCommands::Permalink { path } => {
                print_json(&store.posts().find_by_permalink_path(&path).await?)?
            }
            PostCommands::Tags { id } => print_json(&store.posts().tags(id).await?)?,
            PostCommands::Categories { id } => print_json(&store.posts().categories(id).await?)?,
            PostCommands::Comments { id } => {
                print_json(&store.comments().post_comments(id).await?)?
            }
        },
        Commands::Term { action } => match action {
            TermCommands::Posts { id } => print_json(&store.posts().term_posts(id).await?)?,
        },
        Commands::Options { action } => match action {
            OptionCommands::Get { name } => print_json(&store.site().option(&name).await?)?,
        },
        Commands::Links { all } => print_json(&store.site().links(!all).await?)?,
        Commands::User { login } => print_json(&store.users().get_user_by_login(&login).await?)?,
        Commands::Users { page, per_page } => {
            let params = PageParams::new(page, per_page);
            print_json(&store.users().users_page(params).await?)?
        }
        Commands::HashPassword { .. } => {}
    }

    Ok(())
}
