use std::path::PathBuf;

use clap::{Parser, Subcommand};

use alyomi_catalog::{CatalogConfig, DEFAULT_PAGE_SIZE};
use alyomi_observability::LogFormat;

/// Query a static storefront catalog snapshot.
#[derive(Debug, Parser)]
#[command(name = "alyomi", version)]
pub struct Cli {
    /// Product snapshot (JSON array).
    #[arg(long, env = "ALYOMI_SNAPSHOT", default_value = "data/products.json")]
    pub snapshot: PathBuf,

    /// Products per listing page.
    #[arg(long, env = "ALYOMI_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Products on the home view.
    #[arg(long, env = "ALYOMI_HOME_LIMIT", default_value_t = 50)]
    pub home_limit: usize,

    /// Products kept in the hot-deal listing.
    #[arg(long, env = "ALYOMI_HOT_DEAL_LIMIT", default_value_t = 50)]
    pub hot_deal_limit: usize,

    /// Log format on stderr: json or pretty.
    #[arg(long, env = "ALYOMI_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a navigation fragment (e.g. `#category=Toys&page=2`) and print the view.
    View {
        #[arg(default_value = "")]
        fragment: String,
    },
    /// Print the category bar entries.
    Categories,
    /// Print the card view-model of one product.
    Card { id: String },
}

impl Cli {
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            page_size: self.page_size,
            home_limit: self.home_limit,
            hot_deal_limit: self.hot_deal_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_view_with_defaults() {
        let cli = Cli::try_parse_from(["alyomi", "view", "#hotdeal"]).unwrap();
        assert_eq!(cli.catalog_config().page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(cli.log_format, LogFormat::Json);
        match cli.command {
            Command::View { fragment } => assert_eq!(fragment, "#hotdeal"),
            other => panic!("Expected view, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["alyomi", "--log-format", "xml", "categories"]).is_err());
    }
}
