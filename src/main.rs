use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use placeholder_icons::icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-icons",
    version,
    about = "Write placeholder app icons (32x32.png, 128x128.png, 128x128@2x.png) into the current directory"
)]
struct Args {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let _args = Args::parse();

    icon_gen::generate_icons(Path::new("."))
}
