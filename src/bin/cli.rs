//! folio CLI
//!
//! Loads the portfolio content and prints or renders it.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use folio::{
    error::{AppError, Result},
    models::{Config, Project},
    render::render_page,
    services::{ALL_CATEGORIES, ContentFetcher, ContentLoader},
    state::{AppState, LoadStatus, Page, Theme},
    storage::FilePreferenceStore,
};

/// folio - Portfolio content engine
#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Portfolio content engine")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "storage/config.toml", global = true)]
    config: PathBuf,

    /// Directory for local preferences (default: storage.dir from config)
    #[arg(short, long, global = true)]
    storage_dir: Option<PathBuf>,

    /// Content location to try, in order; replaces the configured sources
    #[arg(long = "source", global = true)]
    sources: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick featured projects for the home page
    Featured {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List projects, filtered and sorted by importance
    Projects {
        /// Category to show ("all" for every category)
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Case-insensitive text to search for
        #[arg(long, default_value = "")]
        search: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List category filter options
    Categories,

    /// Render the site to HTML
    Render {
        #[arg(long, value_enum, default_value_t = PageArg::Home)]
        page: PageArg,

        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,

        #[arg(long, default_value = "")]
        search: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Validate configuration
    Validate,
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between dark and light
    Toggle,
    /// Set a specific theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PageArg {
    Home,
    Projects,
}

impl From<PageArg> for Page {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Home => Page::Home,
            PageArg::Projects => Page::Projects,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn build_loader(config: &Config, sources: Vec<String>) -> Result<ContentLoader> {
    if sources.is_empty() {
        ContentLoader::from_config(config)
    } else {
        Ok(ContentLoader::new(ContentFetcher::from_config(config)?, sources))
    }
}

/// Load content, failing when no source answered.
async fn load_required(state: &AppState<FilePreferenceStore>, loader: &ContentLoader) -> Result<()> {
    state.load(loader).await;
    if state.content().snapshot().status == LoadStatus::Unavailable {
        return Err(AppError::Unavailable {
            attempted: loader.locations().len(),
        });
    }
    Ok(())
}

fn print_projects(projects: &[Project], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(projects)?);
        return Ok(());
    }
    for project in projects {
        println!(
            "{} [{}] importance={}",
            project.name,
            project.category_label(),
            project.importance
        );
    }
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load_if_exists(&cli.config)?;
    let found = loaded.is_some();
    let config = loaded.unwrap_or_default();
    init_logging(cli.verbose, &config.logging.level);
    if !found {
        log::warn!(
            "Config not found at {}. Using defaults.",
            cli.config.display()
        );
    }

    let storage_dir = cli.storage_dir.unwrap_or_else(|| config.storage_dir());
    let preferences = FilePreferenceStore::new(&storage_dir);
    let mut state = AppState::new(&config, preferences);
    let mut rng = rand::thread_rng();

    match cli.command {
        Command::Featured { json } => {
            let loader = build_loader(&config, cli.sources)?;
            load_required(&state, &loader).await?;
            let featured = state.featured(&mut rng);
            if featured.is_empty() {
                log::info!("No projects to feature.");
            }
            print_projects(&featured, json)?;
        }

        Command::Projects {
            category,
            search,
            json,
        } => {
            let loader = build_loader(&config, cli.sources)?;
            load_required(&state, &loader).await?;
            state.set_category(category);
            state.set_search(search);
            let listing = state.listing();
            if listing.is_empty() {
                log::info!("No projects match those filters.");
            }
            print_projects(&listing, json)?;
        }

        Command::Categories => {
            let loader = build_loader(&config, cli.sources)?;
            load_required(&state, &loader).await?;
            for category in state.categories() {
                println!("{category}");
            }
        }

        Command::Render {
            page,
            category,
            search,
            output,
        } => {
            let loader = build_loader(&config, cli.sources)?;
            // An unavailable source still renders, with the error shown.
            state.load(&loader).await;
            state.router_mut().go_to(page.into());
            state.set_category(category);
            state.set_search(search);

            let html = render_page(&state.view(&mut rng));
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, html)?;
                    log::info!("Rendered {} page to {}", state.router().page(), path.display());
                }
                None => print!("{html}"),
            }
        }

        Command::Theme { action } => match action.unwrap_or(ThemeAction::Show) {
            ThemeAction::Show => println!("{}", state.theme().theme()),
            ThemeAction::Toggle => {
                let theme = state.theme_mut().toggle()?;
                log::info!("Theme switched to {}", theme);
                println!("{theme}");
            }
            ThemeAction::Set { theme } => {
                state.theme_mut().set(theme.into())?;
                println!("{}", state.theme().theme());
            }
        },

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            for (i, source) in config.sources()?.iter().enumerate() {
                log::info!("Source {}: {}", i + 1, source);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
