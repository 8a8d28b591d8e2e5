use clap::{Args, Parser, Subcommand, ValueEnum};
use portalapp::api::ListRequest;
use portalapp::query::SortDirection;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "portal",
    bin_name = "portal",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Search, filter and sort graduation portal records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset JSON file (defaults to `data_file` from the configuration)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Configuration file read before the global portal.toml
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Locale used to sort text (e.g. en, sv, ar)
    #[arg(long, global = true, help_heading = "Options")]
    pub locale: Option<String>,

    /// Acting role: student, supervisor, coordinator or admin
    #[arg(long, global = true, default_value = "admin", help_heading = "Options")]
    pub role: String,

    /// Acting user's name, for ownership rules
    #[arg(long, global = true, help_heading = "Options")]
    pub user: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a screen's records
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Show the options a filter offers
    #[command(display_order = 2)]
    Options {
        /// projects, proposals, users or files
        screen: String,

        /// Dimension name, or `sort` for the sort keys
        dimension: String,

        #[arg(long, value_enum, default_value_t = OutputMode::Text)]
        output: OutputMode,
    },

    /// Show the effective configuration
    #[command(display_order = 3)]
    Config,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// projects, proposals, users or files
    pub screen: String,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub priority: Option<String>,

    #[arg(long)]
    pub department: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Any other dimension, as name=value (repeatable)
    #[arg(long = "filter", value_name = "NAME=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort key (unknown keys use the screen default)
    #[arg(long)]
    pub sort: Option<String>,

    /// Ascending order
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Descending order
    #[arg(long, conflicts_with = "asc")]
    pub desc: bool,

    #[arg(long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,
}

impl ListArgs {
    pub fn direction(&self) -> Option<SortDirection> {
        match (self.asc, self.desc) {
            (true, _) => Some(SortDirection::Asc),
            (_, true) => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn to_request(&self) -> ListRequest {
        let named = [
            ("status", &self.status),
            ("priority", &self.priority),
            ("department", &self.department),
            ("category", &self.category),
        ];

        let mut request = ListRequest::default();
        for (name, value) in named {
            if let Some(value) = value {
                request = request.with_dimension(name, value.as_str());
            }
        }
        for (name, value) in &self.filters {
            request = request.with_dimension(name.as_str(), value.as_str());
        }
        if let Some(query) = &self.search {
            request = request.with_search(query.as_str());
        }
        match &self.sort {
            Some(key) => request.with_sort(key.as_str(), self.direction()),
            None => ListRequest {
                direction: self.direction(),
                ..request
            },
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Text,
    Json,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}
