//! CLI entry point for pressline

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pressline")]
#[command(version)]
#[command(about = "Fetch WordPress posts and generate static Markdown pages", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a listing page of posts with their authors
    Posts {
        /// Listing page number
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Fetch the rendered content of a static page
    Page {
        /// WordPress page id
        id: u64,
    },

    /// List local content (slugs, paths)
    List {
        #[arg(default_value = "slugs")]
        r#type: String,
    },

    /// Show the front-matter and body behind a slug
    Show { slug: String },

    /// Generate static pages
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pressline=debug,info"
    } else {
        "pressline=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Posts { page } => {
            let site = pressline::Pressline::new(&base_dir)?;
            pressline::commands::fetch::posts(&site, page).await?;
        }

        Commands::Page { id } => {
            let site = pressline::Pressline::new(&base_dir)?;
            pressline::commands::fetch::page(&site, id).await?;
        }

        Commands::List { r#type } => {
            let site = pressline::Pressline::new(&base_dir)?;
            pressline::commands::list::run(&site, &r#type)?;
        }

        Commands::Show { slug } => {
            let site = pressline::Pressline::new(&base_dir)?;
            pressline::commands::show::run(&site, &slug)?;
        }

        Commands::Generate => {
            let site = pressline::Pressline::new(&base_dir)?;
            tracing::info!("Generating static pages...");
            let count = site.generate()?;
            println!("Generated {} pages", count);
        }

        Commands::Clean => {
            let site = pressline::Pressline::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("pressline version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
