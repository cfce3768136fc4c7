use std::path::PathBuf;

use clap::Parser;
use mealguard_core::domain::common::{CatalogConfig, MealguardConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealguard-api", about = "MealGuard HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Optional JSON seed file for the dish catalog; the built-in demo
    /// catalog is used when absent.
    #[arg(long, env = "MEALGUARD_CATALOG_SEED")]
    pub catalog_seed: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "MEALGUARD_SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "MEALGUARD_SERVER_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api".
    #[arg(long, env = "MEALGUARD_SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "MEALGUARD_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long, env = "MEALGUARD_LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long, env = "MEALGUARD_LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for MealguardConfig {
    fn from(args: Args) -> Self {
        Self {
            catalog: CatalogConfig {
                seed_path: args.catalog_seed,
            },
        }
    }
}
