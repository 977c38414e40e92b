// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use std::env;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::{Config, Location, ROUTE_TABLE, VERSION};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("-h") | Some("--help") | Some("help") => print_help(),
        Some("routes") => print_routes(),
        Some("-V") | Some("--version") => println!("folio {}", VERSION),
        start => {
            let config = Config::from_env();
            init_logging(&config)?;
            run_ui_mode(config, Location::parse(start.unwrap_or("/")))?;
        }
    }

    Ok(())
}

fn print_help() {
    println!("📁 folio {} - portfolio in the terminal", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("\nUsage:");
    println!("  folio [PATH]     Start at PATH (e.g. /certifications?cert=3)");
    println!("  folio routes     Print the route table");
    println!("  folio --help     Show this message");
    println!("\nEnvironment:");
    println!("  FOLIO_DATA_DIR   Preferences and log directory (default: ~/.folio)");
    println!("  FOLIO_LOG        Log filter (default: folio=info)");
    println!("  FOLIO_BASE_URL   Origin used in share links (default: http://localhost:3000)");
    println!("  FOLIO_THEME_HINT light | dark (default: derived from COLORFGBG)");
}

fn print_routes() {
    println!("🧭 Routes");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (path, page) in ROUTE_TABLE {
        println!("  {:<18} {}", path, page);
    }
}

/// The terminal belongs to the UI, so logs go to `<data_dir>/folio.log`
fn init_logging(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating data directory {}", config.data_dir.display()))?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())
        .with_context(|| format!("opening log file {}", config.log_path().display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| folio::config::DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// SQLite-backed preferences, or the no-op store if the file can't be opened
#[cfg(feature = "tui")]
fn open_preferences(config: &Config) -> folio::Preferences {
    use folio::{Preferences, SqliteStore};

    match SqliteStore::open(&config.preferences_path()) {
        Ok(store) => Preferences::new(Box::new(store)),
        Err(err) => {
            tracing::warn!(
                path = %config.preferences_path().display(),
                error = %err,
                "preference store unavailable, preferences will not persist"
            );
            Preferences::unavailable()
        }
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: Config, start: Location) -> Result<()> {
    use folio::{App, Catalog, Services};

    println!("🖥️  Loading folio...\n");

    let prefs = open_preferences(&config);
    let catalog = Catalog::sample();
    println!(
        "✓ Loaded {} projects, {} certifications, {} posts\n",
        catalog.projects.len(),
        catalog.certifications.len(),
        catalog.posts.len()
    );
    println!("Starting UI at {}... (Press 'q' to quit)\n", start);

    let mut app = App::new(catalog, Services::system(prefs), config, start);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: Config, start: Location) -> Result<()> {
    eprintln!("❌ TUI mode not available! (requested {})", start);
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
