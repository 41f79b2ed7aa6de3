//! Black Fang CLI
//!
//! Command-line interface for working with the dashboard offline:
//! - Render a section as HTML or JSON
//! - Replay recorded page events against a fresh session
//! - Show the start-up view state
//! - Generate a config file

use anyhow::{bail, Context};
use blackfang::config::Config;
use blackfang::data::DataStore;
use blackfang::events::Event;
use blackfang::render::{self, RenderContext};
use blackfang::session::{Clock, Session};
use blackfang::Section;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "blackfang-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Offline tools for the Black Fang Intelligence dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dashboard data file, overriding the config
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Pin "now" for relative ages (RFC 3339), overriding the config
    #[arg(long, global = true)]
    pub at: Option<DateTime<Utc>>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one section
    Render {
        /// Section id (landing, dashboard, competitors, reports, alerts, settings)
        section: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },

    /// Replay a JSON array of events against a fresh session
    Replay {
        /// Path to the events file
        path: PathBuf,
        /// Print the final page instead of the final state
        #[arg(long)]
        page: bool,
    },

    /// Show the view state right after start-up
    State,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Html,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(data) = &cli.data {
        config.dashboard.data_file = Some(data.clone());
    }
    if let Some(at) = cli.at {
        config.dashboard.fixed_now = Some(at);
    }
    config.logging.init_tracing();

    match cli.command {
        Commands::Render { section, format } => {
            let Ok(section) = section.parse::<Section>() else {
                bail!("Unknown section '{}'", section);
            };
            let store = load_store(&config)?;
            let ctx = RenderContext::new(&store, config.dashboard.clock().now());

            match format {
                Format::Html => print!("{}", render::section_fragment(section, &ctx)),
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&render::section_view(section, &ctx))?
                ),
            }
        }

        Commands::Replay { path, page } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            let events: Vec<Event> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse events in {:?}", path))?;

            let mut session = start_session(&config)?;
            for (i, event) in events.iter().enumerate() {
                let outcome = session.dispatch(event);
                eprintln!(
                    "#{} {:?}: {} action(s){}",
                    i + 1,
                    event.kind,
                    outcome.actions.len(),
                    outcome
                        .notice
                        .map(|n| format!(" - \"{}\"", n))
                        .unwrap_or_default()
                );
            }

            if page {
                print!("{}", session.render_page("Black Fang Intelligence"));
            } else {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            }
        }

        Commands::State => {
            let session = start_session(&config)?;
            println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        }

        Commands::Config { output } => {
            let config = blackfang::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn load_store(config: &Config) -> anyhow::Result<DataStore> {
    config
        .dashboard
        .load_store()
        .context("Failed to load dashboard data")
}

fn start_session(config: &Config) -> anyhow::Result<Session> {
    let clock: Clock = config.dashboard.clock();
    let mut session = Session::new(Arc::new(load_store(config)?)).with_clock(clock);
    session.start();
    Ok(session)
}
