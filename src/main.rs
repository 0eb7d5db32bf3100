mod carousel;
mod config;
mod database;
mod entities;
mod http_server;
mod logging;
mod ports;
mod services;
mod spotify_embed;
mod supabase_rs;
#[cfg(test)]
mod test_utils;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::Context};

use crate::{
    config::SiteConfig,
    database::Database,
    http_server::{app::HttpServerConfig, state::AppState},
    logging::init_tracing,
    services::{
        album_sync::{AlbumSync, current_year},
        albums::AlbumService,
        artists::ArtistService,
        awards::AwardService,
        storage::{MediaService, StorageLocation, client::SupabaseStorageAdapter},
    },
    spotify_embed::{album_id_from_input, fetch_album_entity},
};

const SERVICE_NAME: &str = "artistone";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The site config file to use
    #[arg(short, long, env = "ARTISTONE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `artistone=debug,tower_http=debug`
    #[arg(long, default_value = "info", global = true, env = "LOG_LEVEL")]
    log_level: String,

    /// OTLP collector to export spans to
    #[arg(long, env = "OTLP_ENDPOINT", global = true)]
    otlp_endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn is_directory(s: &str) -> Result<PathBuf, String> {
    let p: PathBuf = s.into();
    if p.is_dir() {
        Ok(p)
    } else {
        Err(format!("`{}` is not an existing directory", s))
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the portfolio site
    Serve {
        /// The port to run the server on
        #[arg(short, long, default_value = "3000", env = "ARTISTONE_HTTP_PORT")]
        port: u16,

        /// Backend database holding artists, albums and awards
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,

        /// Base URL of the hosted backend (storage API and public files)
        #[arg(long, env = "SUPABASE_URL")]
        supabase_url: String,

        /// Public (anon) API key used to list storage folders
        #[arg(long, env = "SUPABASE_ANON_KEY")]
        supabase_key: String,

        /// Directory served under /static instead of the bundled assets
        #[arg(long, value_parser = is_directory)]
        static_dir: Option<PathBuf>,
    },
    /// Pull album metadata and tracks from the Spotify embed page
    SyncAlbum {
        /// Spotify album id or album URL
        album: String,

        /// Slug of the album row to update
        slug: String,

        /// Write the changes to the database instead of only printing SQL
        #[arg(long)]
        sync: bool,

        /// Database to write to with --sync
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,
    },
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Create a default config file, if it doesn't exist
    CreateDefault,
    /// Print the path to the config file
    Path,
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        // Usage errors exit with 1; --help and --version keep clap's handling.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args();
    let tracer_provider = init_tracing(
        SERVICE_NAME,
        args.otlp_endpoint.as_deref(),
        &args.log_level,
    )?;

    let result = run(args).await;

    if let Some(provider) = tracer_provider {
        if let Err(e) = provider.shutdown() {
            eprintln!("Failed to flush traces: {e}");
        }
    }

    result
}

async fn run(args: Args) -> Result<()> {
    tracing::debug!("Loading configuration");
    let config = match &args.config {
        Some(path) => SiteConfig::from_file(path),
        None => SiteConfig::load(),
    }
    .wrap_err("Failed to load artistone config")?;

    match args.command {
        Commands::Serve {
            port,
            database_url,
            supabase_url,
            supabase_key,
            static_dir,
        } => {
            let database = Arc::new(Database::connect(&database_url).await?);
            let storage = SupabaseStorageAdapter::new(&supabase_url, supabase_key)?;
            let location = StorageLocation::new(supabase_url, config.bucket.clone());

            let state = AppState {
                albums: AlbumService::new(database.clone(), location.clone()),
                artists: ArtistService::new(database.clone(), location.clone()),
                awards: AwardService::new(database),
                media: MediaService::new(Arc::new(storage), location),
                config,
            };

            tracing::info!("Starting HTTP server on port: {}", port);
            http_server::app::start(HttpServerConfig {
                port,
                state,
                static_dir,
            })
            .await?;
        }
        Commands::SyncAlbum {
            album,
            slug,
            sync,
            database_url,
        } => {
            let album_id = album_id_from_input(&album);
            println!("Fetching Spotify data...");
            println!("  Album ID: {album_id}");
            println!("  Target Slug: {slug}");

            let client = reqwest::Client::new();
            let entity = fetch_album_entity(&client, &album_id)
                .await
                .wrap_err("Failed to fetch album from Spotify")?;
            let album_sync = AlbumSync::from_entity(&album_id, entity, current_year());

            println!();
            print!("{}", album_sync.summary());
            println!();
            println!("{}", "=".repeat(60));
            println!("SQL (paste into the database SQL editor):");
            println!("{}", "=".repeat(60));
            println!();
            print!("{}", album_sync.to_sql(&slug));
            println!();
            println!("{}", "=".repeat(60));

            match (sync, database_url) {
                (true, Some(database_url)) => {
                    println!("Syncing to database...");
                    let database = Database::connect(&database_url).await?;
                    let tracks = album_sync.apply(&database, &slug).await?;
                    println!("Synced successfully! ({tracks} tracks)");
                }
                (true, None) => {
                    tracing::warn!("--sync needs a database url (DATABASE_URL), skipping");
                }
                (false, Some(_)) => println!("Add --sync to write directly to the database"),
                (false, None) => {}
            }
        }
        Commands::Config(config_commands) => match config_commands {
            ConfigCommands::CreateDefault => {
                tracing::debug!("Creating default config");
                let path = SiteConfig::create_default()?;
                tracing::info!(path = %path.display(), "Default config ready");
            }
            ConfigCommands::Path => match SiteConfig::config_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("No default config path found"),
            },
        },
    }

    Ok(())
}
