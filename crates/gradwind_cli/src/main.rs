//! Gradwind CLI
//!
//! Convert CSS gradients to utility classes and build gradients from colors.

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use gradwind_core::{generate_css_text, ClassEmitter, PRESETS};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{GradwindConfig, OutputFormat, CONFIG_FILE};

const PARSE_FAILURE: &str = "Invalid CSS gradient format. Please check your syntax.";

#[derive(Parser, Debug)]
#[command(name = "gradwind", version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./gradwind.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a CSS gradient to classes
    Convert {
        /// e.g. "linear-gradient(45deg, #ff6b6b, #4ecdc4)"
        gradient: String,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Build a linear gradient from colors
    Generate {
        #[arg(required = true)]
        colors: Vec<String>,

        /// Angle in degrees
        #[arg(short, long, allow_negative_numbers = true)]
        angle: Option<f32>,

        /// Opacity in percent (0-100)
        #[arg(short, long)]
        opacity: Option<f32>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the built-in color presets
    Presets {
        /// Angle in degrees
        #[arg(short, long, allow_negative_numbers = true)]
        angle: Option<f32>,
    },

    /// Write a gradwind.toml with the default settings
    Init {
        /// Directory to create the file in
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Commands::Init { path, force } = &cli.command {
        return cmd_init(path, *force);
    }

    let config = GradwindConfig::load(cli.config.as_deref())?;
    debug!(?config, "Loaded configuration");

    let defaults = &config.defaults;
    let emitter = ClassEmitter::new(config.converter.clone());

    match cli.command {
        Commands::Convert { gradient, format } => {
            cmd_convert(&emitter, &gradient, format.unwrap_or(defaults.format))
        }
        Commands::Generate {
            colors,
            angle,
            opacity,
            format,
        } => cmd_generate(
            &emitter,
            &colors,
            angle.unwrap_or(defaults.angle),
            opacity.unwrap_or(defaults.opacity),
            format.unwrap_or(defaults.format),
        ),
        Commands::Presets { angle } => {
            cmd_presets(&emitter, angle.unwrap_or(defaults.angle));
            Ok(())
        }
        Commands::Init { .. } => Ok(()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_convert(emitter: &ClassEmitter, gradient: &str, format: OutputFormat) -> Result<()> {
    let conversion = emitter.convert(gradient).context(PARSE_FAILURE)?;
    info!(kind = %conversion.gradient.kind, stops = conversion.gradient.stops.len(), "Converted gradient");

    match format {
        OutputFormat::Text => {
            println!("{}", conversion.classes);
            if let Some(warning) = &conversion.warning {
                eprintln!("warning: {warning}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&conversion)
                .context("Failed to serialize conversion")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn cmd_generate(
    emitter: &ClassEmitter,
    colors: &[String],
    angle: f32,
    opacity: f32,
    format: OutputFormat,
) -> Result<()> {
    let css = generate_css_text(colors, angle, opacity);
    let classes = emitter.generate(colors, angle);

    match format {
        OutputFormat::Text => {
            println!("CSS:     {css}");
            println!("Classes: {classes}");
        }
        OutputFormat::Json => {
            let json = json!({
                "colors": colors,
                "angle": angle,
                "opacity": opacity,
                "css": css,
                "classes": classes,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&json).context("Failed to serialize output")?
            );
        }
    }

    Ok(())
}

fn cmd_presets(emitter: &ClassEmitter, angle: f32) {
    for preset in PRESETS {
        println!("{}", preset.name);
        println!("  colors:  {}", preset.colors.join(", "));
        println!("  css:     {}", generate_css_text(preset.colors, angle, 100.0));
        println!("  classes: {}", emitter.generate(preset.colors, angle));
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            config_path.display()
        );
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))?;

    let content = GradwindConfig::default().to_toml()?;
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {}", config_path.display());
    Ok(())
}
