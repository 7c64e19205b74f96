//! # Beamsketch CLI
//!
//! Renders beam diagrams to PDF, SVG or PNG: either one of the built-in
//! gallery figures, or a sheet read as JSON from stdin.
//!
//! ```text
//! beamsketch gallery --list
//! beamsketch gallery cantilever --out cantilever.pdf
//! beamsketch example-sheet > sheet.json
//! beamsketch render --out figure.svg --legend < sheet.json
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

mod gallery;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sketch_core::{export, Drawing, ExportSettings, Sheet};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "beamsketch", version)]
#[command(about = "Draw structural beam diagrams")]
struct Cmd {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    action: Action,
}

/// Export overrides shared by all subcommands
#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Points per drawing unit
    #[arg(long, global = true)]
    unit_pt: Option<f64>,

    /// Raster resolution for PNG output
    #[arg(long, global = true)]
    dpi: Option<f64>,

    /// Add a legend for labelled vectors
    #[arg(long, global = true)]
    legend: bool,

    /// Print the recorded drawing as JSON to stdout
    #[arg(long, global = true)]
    dump: bool,
}

#[derive(Subcommand)]
enum Action {
    /// Render a built-in figure
    Gallery {
        /// Figure name (see --list)
        name: Option<String>,

        /// List the available figures
        #[arg(long)]
        list: bool,

        /// Output file; the extension picks the format (pdf, svg, png)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render a sheet read as JSON from stdin
    Render {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print an example sheet as JSON
    ExampleSheet,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gallery { name, list, out } => {
            if list {
                for name in gallery::NAMES {
                    println!("{}", name);
                }
                return Ok(());
            }
            let name = name.ok_or_else(|| anyhow!("pass a figure name or --list"))?;
            let sheet = gallery::figure(&name).ok_or_else(|| {
                anyhow!("unknown figure '{}', expected one of: {}", name, gallery::NAMES.join(", "))
            })?;
            tracing::info!(figure = %name, "gallery");
            output(&sheet, out, &cmd.output)
        }
        Action::Render { out } => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("reading sheet from stdin")?;
            let sheet = Sheet::from_json(&json)?;
            tracing::info!(title = %sheet.meta.title, items = sheet.item_count(), "render");
            output(&sheet, out, &cmd.output)
        }
        Action::ExampleSheet => {
            println!("{}", gallery::simply_supported().to_json()?);
            Ok(())
        }
    }
}

/// Sheet settings with command-line overrides applied
fn settings_for(sheet: &Sheet, args: &OutputArgs) -> ExportSettings {
    let mut settings = sheet.settings.clone();
    if let Some(unit_pt) = args.unit_pt {
        settings.unit_pt = unit_pt;
    }
    if let Some(dpi) = args.dpi {
        settings.dpi = dpi;
    }
    if args.legend {
        settings.show_legend = true;
    }
    settings
}

fn output(sheet: &Sheet, out: Option<PathBuf>, args: &OutputArgs) -> Result<()> {
    if out.is_none() && !args.dump {
        bail!("nothing to do: pass --out <file> or --dump");
    }

    let drawing: Drawing = sheet.render()?;
    if args.dump {
        println!("{}", serde_json::to_string_pretty(&drawing)?);
    }

    if let Some(path) = out {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let settings = settings_for(sheet, args);
        export::save(&drawing, &path, &settings).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), shapes = drawing.len(), "saved");
    }
    Ok(())
}
