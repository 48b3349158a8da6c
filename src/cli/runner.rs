//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PagerConfig, PaginationSettings};
use crate::error::{Error, Result};
use crate::pager::Pager;
use serde_json::{json, Value};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Show { page, offset } => self.show(*page, *offset).await,
            Commands::Walk { max_pages } => self.walk(*max_pages).await,
            Commands::Bounds {
                count,
                first_page,
                page,
                offset,
            } => self.bounds(*count, *first_page, *page, *offset),
            Commands::Validate => self.validate(),
        }
    }

    /// Load the config file, then apply command-line overrides
    fn load_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => {
                let fetch_url = self.cli.fetch_url.clone().ok_or_else(|| {
                    Error::config("No config file given (use -c) and no --fetch-url")
                })?;
                let count_url = self.cli.count_url.clone().ok_or_else(|| {
                    Error::config("No config file given (use -c) and no --count-url")
                })?;
                PagerConfig::new(fetch_url, count_url)
            }
        };

        if let Some(url) = &self.cli.fetch_url {
            config.fetch_url.clone_from(url);
        }
        if let Some(url) = &self.cli.count_url {
            config.count_url.clone_from(url);
        }
        if let Some(limit) = self.cli.limit {
            config.pagination.limit = limit;
        }

        config.validate()?;
        Ok(config)
    }

    /// Show one page
    async fn show(&self, page: Option<u64>, offset: Option<u64>) -> Result<()> {
        let mut config = self.load_config()?;
        if page.is_some() || offset.is_some() {
            config.pagination.page = page;
            config.pagination.offset = offset;
        }

        let mut pager = Pager::from_config(&config)?;
        pager.initialize().await?;
        self.output_page(&pager);
        Ok(())
    }

    /// Walk from the starting page to the last one
    async fn walk(&self, max_pages: Option<usize>) -> Result<()> {
        let config = self.load_config()?;
        let mut pager = Pager::from_config(&config)?;
        pager.initialize().await?;

        let mut printed = 0;
        loop {
            self.output_page(&pager);
            printed += 1;

            if max_pages.is_some_and(|max| printed >= max) || pager.snapshot().is_last_page() {
                break;
            }

            let before = pager.pagination().page();
            pager.go_to_next_page().await?;
            if pager.pagination().page() == before {
                debug!("Page {} has no successor, stopping", before);
                break;
            }
        }

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!("Printed {printed} page(s)")
            }
        }));
        Ok(())
    }

    /// Print boundaries for a limit and count
    fn bounds(
        &self,
        count: u64,
        first_page: u64,
        page: Option<u64>,
        offset: Option<u64>,
    ) -> Result<()> {
        let settings = PaginationSettings {
            limit: self
                .cli
                .limit
                .unwrap_or_else(|| PaginationSettings::default().limit),
            first_page,
            page,
            offset,
            count: Some(count),
        };
        let pagination = settings.build()?;

        self.output_message(&json!({
            "type": "BOUNDS",
            "pagination": pagination.snapshot(),
        }));
        Ok(())
    }

    /// Validate the config
    fn validate(&self) -> Result<()> {
        let config = self.load_config()?;

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Config is valid: {} (count: {})",
                    config.fetch_url, config.count_url
                )
            }
        }));
        Ok(())
    }

    /// Output the pager's current page
    fn output_page(&self, pager: &Pager) {
        self.output_message(&json!({
            "type": "PAGE",
            "pagination": pager.snapshot(),
            "records": pager.list(),
        }));
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
