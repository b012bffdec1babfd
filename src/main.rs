//! Store Inventory
//!
//! Loads the three item lists and either runs the interactive query loop or
//! writes the combined inventory file.

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use store_inventory::export::FULL_INVENTORY_FILE;
use store_inventory::inventory::{
    DEFAULT_MANUFACTURER_LIST, DEFAULT_PRICE_LIST, DEFAULT_SERVICE_DATES_LIST,
};
use store_inventory::{
    export_full_inventory, export_reports, Inventory, QueryMatcher, SourcePaths,
};

/// Electronics store inventory - joins item lists, exports and answers queries
#[derive(Parser, Debug)]
#[command(name = "store_inventory")]
#[command(version, about, long_about = None)]
struct Args {
    /// Manufacturer list: item_id,manufacturer,item_type[,damaged]
    #[arg(long, default_value = DEFAULT_MANUFACTURER_LIST)]
    manufacturers: PathBuf,

    /// Price list: item_id,price
    #[arg(long, default_value = DEFAULT_PRICE_LIST)]
    prices: PathBuf,

    /// Service date list: item_id,MM/DD/YYYY
    #[arg(long, default_value = DEFAULT_SERVICE_DATES_LIST)]
    service_dates: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer "manufacturer and type" queries from the console
    Query,
    /// Write the joined inventory sorted by manufacturer
    Export {
        /// Output file for the full inventory
        #[arg(short, long, default_value = FULL_INVENTORY_FILE)]
        output: PathBuf,

        /// Also write per-type, past-service-date and damaged reports next to the output
        #[arg(long, default_value_t = false)]
        reports: bool,
    },
}

fn main() {
    // Logs go to stderr; set RUST_LOG=debug to trace parsing and matching
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> store_inventory::Result<()> {
    let paths = SourcePaths {
        manufacturers: args.manufacturers,
        prices: args.prices,
        service_dates: args.service_dates,
    };
    let today = chrono::Local::now().date_naive();
    let inventory = Inventory::load(&paths, today)?;

    match args.command {
        Command::Query => {
            let stdin = io::stdin();
            QueryMatcher::new(&inventory).run_session(stdin.lock(), io::stdout().lock())
        }
        Command::Export { output, reports } => {
            export_full_inventory(&inventory, &output)?;
            if reports {
                let dir = output
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."));
                let written = export_reports(&inventory, &dir, today)?;
                log::info!("Wrote {} report files to {}", written.len(), dir.display());
            }
            Ok(())
        }
    }
}
