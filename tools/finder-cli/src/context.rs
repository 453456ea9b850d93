//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use finder_core::catalog::CatalogSource;
use finder_core::config::FinderConfig;
use finder_core::view::ViewController;
use tracing::debug;

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Finder configuration.
    pub config: FinderConfig,
    /// Where the configuration came from, if a file was used.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading the given config file or discovering one.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                let config = FinderConfig::load(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?;
                (config, Some(path))
            }
            None => match FinderConfig::discover(&cwd) {
                Some((path, loaded)) => {
                    let config = loaded
                        .with_context(|| format!("Failed to load config: {}", path.display()))?;
                    (config, Some(path))
                }
                None => (FinderConfig::default(), None),
            },
        };

        match config_path {
            Some(ref path) => debug!(path = %path.display(), "config loaded"),
            None => debug!("no config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory that relative catalog paths resolve against.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path())
    }

    /// Build a view over the configured catalog and load it.
    ///
    /// A failed load is reported as a warning; the view is still returned
    /// with an empty catalog.
    pub async fn load_view(
        &self,
        search_term: String,
    ) -> ViewController<Box<dyn CatalogSource>> {
        let source = self.config.catalog_source(self.base_dir());
        let mut view =
            ViewController::with_options(source, search_term, self.config.initial_options());

        let spinner = self.output.spinner("Loading products...");
        let loaded = view.load().await;
        spinner.finish_and_clear();

        match loaded {
            Ok(count) => self.output.debug(&format!("Loaded {} products", count)),
            Err(e) => self.output.warn(&format!("Could not load products: {}", e)),
        }

        view
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
