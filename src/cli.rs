// CLI module - command-line argument parsing and handlers
//
// Running with no subcommand starts the TUI. Subcommands:
// - fetch [QUERY..]: one-shot catalog fetch, printed to stdout (headless)
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use crate::demo::DemoCatalog;
use crate::fetch::{CatalogSource, SpellClient};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Grimoire - terminal browser for the Wizard World spell catalog
#[derive(Parser)]
#[command(name = "grimoire")]
#[command(version = VERSION)]
#[command(about = "Terminal browser for the Wizard World spell catalog", long_about = None)]
pub struct Cli {
    /// Serve bundled sample spells instead of hitting the network
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the catalog once and print it (no TUI)
    Fetch {
        /// Name filter; multiple words are joined with spaces
        query: Vec<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle the `config` subcommand
pub fn handle_config(show: bool, reset: bool, path: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset();
    } else {
        // No flag provided, show usage
        println!("Usage: grimoire config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
}

/// One-shot fetch: print name, incantation and light for each record.
/// This is the headless counterpart of the TUI list.
pub async fn run_fetch_once(config: &Config, query: &str) -> Result<()> {
    let spells = if config.demo_mode {
        DemoCatalog::new()
            .fetch(query)
            .await
            .context("demo fetch failed")?
    } else {
        let client = SpellClient::new(config.api_url.clone(), config.request_timeout())
            .context("Failed to create HTTP client")?;
        client.fetch(query).await.context("fetch failed")?
    };

    if spells.is_empty() {
        eprintln!("No spells matched {:?}", query.trim());
        return Ok(());
    }

    for spell in &spells {
        println!(
            "{:<40} {:<25} {}",
            spell.name,
            spell.incantation.as_deref().unwrap_or("-"),
            spell.light.as_deref().unwrap_or("-"),
        );
    }
    eprintln!("{} spells", spells.len());

    Ok(())
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("api_url = {:?}", config.api_url);
    println!("debounce_ms = {}", config.debounce_ms);
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    println!("demo = {}", config.demo_mode);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    // Create parent directory
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}
