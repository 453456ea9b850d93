//! Configuration management commands.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use finder_core::config::{CatalogSourceKind, FinderConfig};

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    println!();
    println!("{}", ctx.config.to_toml()?);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("finder.toml");

    if config_path.exists() && !force {
        let overwrite = console::user_attended()
            && Confirm::new()
                .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
                .default(false)
                .interact()
                .context("Failed to read confirmation")?;

        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
    }

    FinderConfig::default().save(&config_path)?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

/// Problems found in a configuration, split by severity.
#[derive(Debug, Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn check_config(config: &FinderConfig, ctx: &Context) -> Findings {
    let mut findings = Findings::default();
    let defaults = &config.defaults;

    if defaults.min_price.is_some_and(|min| min < 0.0) {
        findings
            .errors
            .push("defaults.min_price must not be negative".to_string());
    }

    if let (Some(min), Some(max)) = (defaults.min_price, defaults.max_price) {
        if min > max {
            findings.warnings.push(format!(
                "defaults.min_price ({}) exceeds defaults.max_price ({}); every search will be empty",
                min, max
            ));
        }
    }

    if let CatalogSourceKind::File(ref path) = config.catalog.source {
        let resolved = ctx.base_dir().join(path);
        if !resolved.is_file() {
            findings
                .errors
                .push(format!("catalog.source file not found: {}", resolved.display()));
        }
    }

    if defaults.sort == finder_core::search::SortOption::Unsorted {
        findings
            .warnings
            .push("defaults.sort is not a known sort; results keep catalog order".to_string());
    }

    findings
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let findings = check_config(&ctx.config, ctx);

    if findings.errors.is_empty() && findings.warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &findings.errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &findings.warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !findings.errors.is_empty() {
        bail!("Configuration has {} error(s)", findings.errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
