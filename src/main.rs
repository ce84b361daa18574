//! palette - pick palette colors into gradient slots and print the CSS.

mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use palette_core::{
    BootstrapStyles, ColorCatalog, ColorName, History, PaletteConfig, PaletteController,
    Projection, SessionHistory, SlotState, StyleResolver, Stylesheet,
};
use palette_core::share;

use terminal::TerminalSurface;

/// Pick palette colors into gradient slots and print the CSS gradient.
///
/// Without --colour or --url the slots are shuffled.
#[derive(Parser, Debug)]
#[command(name = "palette")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Color for the next slot, e.g. blue-500 (repeatable)
    #[arg(short, long = "colour", value_name = "NAME")]
    colours: Vec<String>,

    /// Load slots from a share URL or query string
    #[arg(short, long)]
    url: Option<String>,

    /// Number of gradient slots (2 or 3)
    #[arg(short, long, default_value = "3")]
    slots: usize,

    /// Don't produce a share URL
    #[arg(long)]
    no_url: bool,

    /// CSS file with .bd-<name> background rules
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// Seed for shuffling
    #[arg(long)]
    seed: Option<u64>,

    /// Page path for share URLs
    #[arg(long, default_value = "/")]
    path: String,

    /// Reject colors outside the palette
    #[arg(long)]
    strict: bool,

    /// Print the resolved color catalog and exit
    #[arg(long)]
    catalog: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// JSON output for one run.
#[derive(Serialize)]
struct Report<'a> {
    slots: &'a SlotState,
    projection: Option<&'a Projection>,
    share_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = PaletteConfig::new(args.slots)?.with_url_sync(!args.no_url);
    let resolver = load_styles(args.stylesheet.as_ref())?;
    let catalog = ColorCatalog::resolve(&resolver);

    if args.catalog {
        print_catalog(&catalog, args.json)?;
        return Ok(());
    }

    let colours = parse_colours(&args.colours, &catalog, args.strict)?;
    let location = initial_location(&args);

    let mut controller = PaletteController::with_catalog(
        config,
        catalog,
        TerminalSurface::new(config.slot_count),
        SessionHistory::new(location),
    );

    if colours.is_empty() {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let source = controller.load_with(&mut rng);
        info!("Initial colours from {:?}", source);
    } else {
        if colours.len() > config.slot_count {
            warn!(
                "{} colours given for {} slots, extra colours ignored",
                colours.len(),
                config.slot_count
            );
        }
        for (index, name) in colours.into_iter().enumerate() {
            controller.select_color(index, name);
        }
    }

    let share_url = config.url_sync.then(|| controller.history().location());

    if args.json {
        let report = Report {
            slots: controller.slots(),
            projection: controller.projection(),
            share_url,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", controller.surface().code);
    if let Some(url) = share_url {
        println!();
        println!("Share: {}", url);
    }

    Ok(())
}

/// Built-in palette, optionally overridden by a stylesheet.
fn load_styles(stylesheet: Option<&PathBuf>) -> Result<Box<dyn StyleResolver>> {
    let Some(path) = stylesheet else {
        return Ok(Box::new(BootstrapStyles::new()));
    };

    let sheet = Stylesheet::from_file(path)
        .with_context(|| format!("Failed to load stylesheet {}", path.display()))?;
    info!("Loaded {} rule(s) from {}", sheet.len(), path.display());
    Ok(Box::new(sheet.with_fallback(BootstrapStyles::new())))
}

fn parse_colours(raw: &[String], catalog: &ColorCatalog, strict: bool) -> Result<Vec<ColorName>> {
    raw.iter()
        .map(|name| {
            if strict {
                return ColorName::parse(name).with_context(|| format!("Invalid colour '{}'", name));
            }
            let name = ColorName::new(name.trim());
            if !catalog.contains(&name) {
                warn!("'{}' is not in the palette", name);
            }
            Ok(name)
        })
        .collect()
}

fn print_catalog(catalog: &ColorCatalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.to_json())?);
        return Ok(());
    }
    for (name, hex) in catalog.entries() {
        println!("{:<12} {}", name, hex.unwrap_or("-"));
    }
    Ok(())
}

/// History location to start from: the `--url` if given, else `--path`.
fn initial_location(args: &Args) -> String {
    share::normalize_location(args.url.as_deref().unwrap_or(&args.path))
}
