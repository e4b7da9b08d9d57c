//! MediaLive shape inspector
//!
//! Decodes a JSON or YAML document as a named MediaLive shape and prints its
//! debug rendering, structural hash and canonical encoding.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use medialive_model::wire::registry;
use medialive_model::{ConfigLoader, WireCodec, WireFormat, init_logging};
use tracing::info;

#[derive(Parser)]
#[command(name = "medialive-shape")]
#[command(about = "Inspect MediaLive configuration documents", version)]
struct Cli {
    /// YAML configuration file (defaults and MEDIALIVE_* variables otherwise)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Document format, overriding the configuration
    #[arg(long, value_name = "json|yaml")]
    format: Option<WireFormat>,

    /// Pretty-print the re-encoded document
    #[arg(long)]
    pretty: bool,

    /// List the shape names that can be inspected
    #[arg(long, conflicts_with_all = ["shape", "file"])]
    list: bool,

    /// Shape name, e.g. H264Settings
    #[arg(required_unless_present = "list")]
    shape: Option<String>,

    /// Document to decode
    #[arg(required_unless_present = "list")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::from_yaml(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ConfigLoader::load(None)?,
    };
    if let Some(format) = cli.format {
        config.wire_format = format;
    }
    if cli.pretty {
        config.pretty = true;
    }

    init_logging(config.log_format);

    if cli.list {
        for name in registry::shape_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let (Some(shape), Some(file)) = (cli.shape, cli.file) else {
        bail!("a shape name and a document are required");
    };

    info!(shape = %shape, file = %file.display(), format = %config.wire_format, "Inspecting document");

    let codec = WireCodec::new(&config);
    let inspection = registry::inspect_file(&codec, &shape, &file)
        .with_context(|| format!("inspecting {}", file.display()))?;

    println!("{}", inspection.debug);
    println!("hash: {}", inspection.hash);
    println!("{}", inspection.encoded.trim_end());

    Ok(())
}
