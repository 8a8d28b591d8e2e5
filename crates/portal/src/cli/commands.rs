//! # CLI Layer
//!
//! The **only** place in the workspace that:
//! - Reads process arguments and environment
//! - Installs the log subscriber
//! - Prints to stdout
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns shell arguments into [`Cli`]
//! 2. **Context Setup**: configuration, dataset and acting viewer become a [`PortalApi`]
//! 3. **Dispatch**: each command calls one API method
//! 4. **Output Formatting**: `render` produces tables, option lists or JSON
//!
//! Errors bubble up as `anyhow::Error` with context; `main` prints them and
//! exits with status 1.

use super::render;
use super::setup::{Cli, Commands, ListArgs, OutputMode};
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::Parser;
use portalapp::api::PortalApi;
use portalapp::config::PortalConfig;
use portalapp::dataset::Dataset;
use portalapp::options::Role;
use portalapp::screens::{Screen, Viewer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "PORTAL_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = PortalConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }
    if let Some(path) = &cli.data {
        config.data_file = Some(path.clone());
    }

    if let Commands::Config = cli.command {
        let global = PortalConfig::global_path();
        print!("{}", render::render_config(&config, global.as_deref()));
        return Ok(());
    }

    let api = build_api(&cli, config)?;
    match &cli.command {
        Commands::List(args) => handle_list(&api, args),
        Commands::Options {
            screen,
            dimension,
            output,
        } => handle_options(&api, screen, dimension, *output),
        Commands::Config => Ok(()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "portal=debug,portalapp=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so JSON output on stdout stays machine-readable.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn build_api(cli: &Cli, config: PortalConfig) -> Result<PortalApi> {
    let path = config.data_file.clone().ok_or_else(|| {
        anyhow!("no dataset given: pass --data or set PORTAL_DATA_FILE")
    })?;
    let dataset = Dataset::load(&path)
        .with_context(|| format!("loading dataset {}", path.display()))?;

    let role: Role = cli.role.parse().unwrap_or_default();
    let viewer = match &cli.user {
        Some(name) => Viewer::named(role, name.as_str()),
        None => Viewer::new(role),
    };
    tracing::debug!(%role, user = ?viewer.name, locale = %config.locale, "viewer ready");

    Ok(PortalApi::new(dataset, config, viewer))
}

fn handle_list(api: &PortalApi, args: &ListArgs) -> Result<()> {
    let screen: Screen = args.screen.parse()?;
    let result = api.list(screen, &args.to_request())?;

    let text = match args.output {
        OutputMode::Text => render::render_list(&result, Utc::now()),
        OutputMode::Json => render::render_json(&result)?,
    };
    print!("{}", text);
    Ok(())
}

fn handle_options(
    api: &PortalApi,
    screen: &str,
    dimension: &str,
    output: OutputMode,
) -> Result<()> {
    let screen: Screen = screen.parse()?;
    let options = if dimension == "sort" {
        api.sort_options(screen)
    } else {
        api.options(screen, dimension)?
    };

    let text = match output {
        OutputMode::Text => render::render_options(&options),
        OutputMode::Json => render::render_json(&options)?,
    };
    print!("{}", text);
    Ok(())
}
