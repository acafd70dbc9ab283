use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use yt_block_icons::{generate_icons, Options};

#[derive(Debug, Parser)]
#[clap(
    name = "yt-block-icons",
    about = "Generate the 16/32/48/128 px PNG icons for the YouTube blocker extension"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    output: PathBuf,

    /// TrueType/OpenType font for the "YT" label. Defaults to $YT_ICONS_FONT or a system font.
    #[clap(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Also write manifest-icons.json with the manifest "icons" block
    #[clap(long)]
    manifest: bool,

    /// Print debug diagnostics
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    generate_icons(&Options {
        output: args.output,
        font: args.font,
        manifest: args.manifest,
    })?;

    Ok(())
}
