//! # MicroPinout CLI
//!
//! Headless front-end over the same commands a mobile UI would call. Every
//! subcommand prints pretty JSON on stdout; errors print the `ApiError` JSON
//! on stderr and exit non-zero.
//!
//! ```text
//! micropinout boards --query esp
//! micropinout open arduino-uno
//! micropinout favorite rpi-pico
//! micropinout diagram arduino-uno --width 480 --select 13
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use micropinout::commands::{board, catalog, config, library, pinout};
use micropinout::error::ApiError;
use micropinout::state::ConfigState;
use micropinout::{bootstrap, init_tracing, AppContext};

#[derive(Parser)]
#[command(name = "micropinout")]
#[command(version, about = "Microcontroller pinout reference", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "MICROPINOUT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or search boards
    Boards {
        /// Matches name, description or manufacturer
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only boards in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only boards from this manufacturer
        #[arg(short, long, conflicts_with_all = ["query", "category"])]
        manufacturer: Option<String>,
    },
    /// Show a board without recording a visit
    Show {
        /// Board id (e.g. arduino-uno)
        id: String,
    },
    /// Open a board and add it to the recents
    Open { id: String },
    /// List board categories
    Categories,
    /// List manufacturers
    Manufacturers,
    /// Toggle a board's favorite status
    Favorite { id: String },
    /// List favorite boards
    Favorites,
    /// List recently viewed boards
    Recent,
    /// Lay out a board's pin diagram
    Diagram {
        id: String,

        /// Rendered board width in pixels
        #[arg(short, long)]
        width: Option<f64>,

        /// Pin number to highlight
        #[arg(short, long)]
        select: Option<u32>,
    },
    /// Show one pin's details
    Pin { id: String, number: u32 },
    /// Reload the catalog and show its status
    Reload,
    /// Show the active configuration
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing();
    info!("Starting MicroPinout");

    let config = match ConfigState::load(cli.config) {
        Ok(config) => config,
        Err(e) => return fail(ApiError::from(e)),
    };

    let ctx = match bootstrap(config).await {
        Ok(ctx) => ctx,
        Err(e) => return fail(e),
    };

    let result = run(&ctx, cli.command).await;

    if let Some(ref db) = ctx.database {
        db.close().await;
    }

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

async fn run(ctx: &AppContext, command: Commands) -> Result<String, ApiError> {
    let state = &ctx.state;

    match command {
        Commands::Boards {
            query,
            category,
            manufacturer,
        } => match manufacturer {
            Some(m) => to_json(&board::get_boards_by_manufacturer(state, &m)),
            None => to_json(&board::search_boards(state, &query, category.as_deref())?),
        },
        Commands::Show { id } => to_json(&board::get_board(state, &id)?),
        Commands::Open { id } => to_json(&library::open_board(state, &id).await?),
        Commands::Categories => to_json(&board::get_categories(state)),
        Commands::Manufacturers => to_json(&board::get_manufacturers(state)),
        Commands::Favorite { id } => to_json(&library::toggle_favorite(state, &id).await?),
        Commands::Favorites => to_json(&library::get_favorites(state)),
        Commands::Recent => to_json(&library::get_recents(state)),
        Commands::Diagram { id, width, select } => {
            if let Some(number) = select {
                pinout::select_pin(state, &id, number)?;
            }
            to_json(&pinout::get_diagram(state, &ctx.config, &id, width)?)
        }
        Commands::Pin { id, number } => to_json(&pinout::select_pin(state, &id, number)?),
        Commands::Reload => to_json(&catalog::reload_catalog(state, &ctx.config).await?),
        Commands::Config => to_json(&config::get_config(&ctx.config)),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::internal(e.to_string()))
}

fn fail(err: ApiError) -> ExitCode {
    match serde_json::to_string_pretty(&err) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", err),
    }
    ExitCode::FAILURE
}
