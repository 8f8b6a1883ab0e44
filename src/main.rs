mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use itinerary_core::config::{DefaultView, ItineraryConfig};
use itinerary_core::store::TripStore;
use itinerary_core::{Itinerary, TripKind};
use tracing_subscriber::EnvFilter;

use commands::{ItemArgs, OptionalField, SaveTarget};

#[derive(Parser)]
#[command(name = "itinerary")]
#[command(about = "View and edit your trip itinerary of flights and stays")]
struct Cli {
    /// Trip items file (defaults to data_file in ~/.config/itinerary/config.toml)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Load the trip items into memory and never write them back
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Log more detail (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List items day by day
    List {
        /// Only show items on this day (YYYY-MM-DD, "today" or "tomorrow")
        #[arg(short, long)]
        date: Option<String>,

        /// Only show flights or stays
        #[arg(short, long)]
        kind: Option<TripKind>,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Show the trip as a calendar grid
    Calendar {
        /// Highlight this day and list its items
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show trip dates, counts and places
    Summary,
    /// Show a single item
    Show {
        /// Item id or unique id prefix
        id: String,
    },
    /// Add a flight or stay (prompts for anything missing)
    Add {
        #[command(flatten)]
        fields: ItemArgs,
    },
    /// Edit an item (prompts for every field when no flags are given)
    Edit {
        /// Item id or unique id prefix
        id: String,

        #[command(flatten)]
        fields: ItemArgs,

        /// Empty an optional field
        #[arg(long, value_enum, value_name = "FIELD")]
        clear: Vec<OptionalField>,
    },
    /// Delete an item
    Delete {
        /// Item id or unique id prefix
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Replace all items with the built-in sample trip
    Reset {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ItineraryConfig::load()?;

    if cli.ephemeral {
        let mut itinerary = commands::open_ephemeral(cli.file, &config);
        run(cli.command, &mut itinerary, &config)
    } else {
        let mut itinerary = commands::open_itinerary(cli.file, &config);
        run(cli.command, &mut itinerary, &config)
    }
}

fn run<S: TripStore + SaveTarget>(
    command: Option<Commands>,
    itinerary: &mut Itinerary<S>,
    config: &ItineraryConfig,
) -> Result<()> {
    let viewing = matches!(
        command,
        None | Some(Commands::List { json: false, .. } | Commands::Calendar { .. } | Commands::Summary)
    );
    if viewing && let Some(notice) = commands::seed_notice(itinerary) {
        println!("{}\n", notice);
    }

    match command {
        None => match config.default_view {
            DefaultView::Calendar => commands::calendar::run(itinerary, None),
            DefaultView::List => commands::list::run(itinerary, None, None, false),
        },
        Some(Commands::List { date, kind, json }) => {
            let date = commands::parse_date_arg(date.as_deref())?;
            commands::list::run(itinerary, date, kind, json)
        }
        Some(Commands::Calendar { date }) => {
            let date = commands::parse_date_arg(date.as_deref())?;
            commands::calendar::run(itinerary, date)
        }
        Some(Commands::Summary) => commands::summary::run(itinerary),
        Some(Commands::Show { id }) => commands::show::run(itinerary, &id),
        Some(Commands::Add { fields }) => commands::add::run(itinerary, fields),
        Some(Commands::Edit { id, fields, clear }) => commands::edit::run(itinerary, &id, fields, clear),
        Some(Commands::Delete { id, yes }) => commands::delete::run(itinerary, &id, yes),
        Some(Commands::Reset { yes }) => commands::reset::run(itinerary, yes),
    }
}
