use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wingit_core::{
    TargetFilters, DEFAULT_DAYS_BACK, DEFAULT_MAX_SPECIES, DEFAULT_MIN_FREQUENCY,
    DEFAULT_RADIUS_KM,
};

#[derive(Parser)]
#[command(name = "wingit")]
#[command(version)]
#[command(about = "Likely lifers near you, from your eBird history and recent sightings")]
pub struct Cli {
    #[command(flatten)]
    pub sources: SourceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where personal history and recent observations come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Personal checklist export (JSON)
    #[arg(long, env = "WINGIT_PERSONAL_JSON", global = true)]
    pub personal: Option<PathBuf>,

    /// Recent-nearby snapshot (JSON array), used when no live fetch applies
    #[arg(long, env = "WINGIT_RECENT_JSON", global = true)]
    pub recent: Option<PathBuf>,

    /// eBird API token for live recent observations
    #[arg(long, env = "EBIRD_API_TOKEN", hide_env_values = true, global = true)]
    pub ebird_token: Option<String>,

    /// Override the eBird API base URL
    #[arg(long, env = "EBIRD_BASE_URL", global = true)]
    pub ebird_base_url: Option<String>,

    /// Config file (defaults to ~/.wingit/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdio
    Serve,

    /// Compute target species once and print the result as JSON
    Targets {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the field-checklist prompt text
    Prompt {
        /// Birding location or general area
        #[arg(long, default_value = "")]
        location: String,

        /// Time window label, e.g. "last 7 days"
        #[arg(long, default_value = "")]
        day_range: String,
    },

    /// Print version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Place name or `lat,lng`
    #[arg(long, allow_hyphen_values = true)]
    pub location: String,

    #[arg(long, default_value_t = DEFAULT_RADIUS_KM, allow_negative_numbers = true)]
    pub radius_km: f64,

    #[arg(long, default_value_t = DEFAULT_DAYS_BACK, allow_negative_numbers = true)]
    pub days_back: i64,

    #[arg(long)]
    pub include_heard_only: bool,

    #[arg(long, default_value_t = DEFAULT_MIN_FREQUENCY, allow_negative_numbers = true)]
    pub min_frequency: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_SPECIES, allow_negative_numbers = true)]
    pub max_species: i64,
}

impl From<FilterArgs> for TargetFilters {
    fn from(args: FilterArgs) -> Self {
        TargetFilters {
            location: args.location,
            radius_km: args.radius_km,
            days_back: args.days_back,
            include_heard_only: args.include_heard_only,
            min_frequency: args.min_frequency,
            max_species: args.max_species,
        }
    }
}
