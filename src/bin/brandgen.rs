use std::path::PathBuf;

use clap::{Parser, Subcommand};

use brandgen::{BrandConfig, BrandgenResult, RunSummary};

#[derive(Parser, Debug)]
#[command(name = "brandgen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Legacy PWA icons: pwa-192x192.png and pwa-512x512.png.
    Icons(CommonArgs),
    /// App icons, maskable aliases, and the captioned OG image.
    Assets(CommonArgs),
    /// Logo-only OG image (the v1 layout).
    Og(CommonArgs),
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Source logo path.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Optional config JSON overriding defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl CommonArgs {
    fn into_config(self) -> BrandgenResult<BrandConfig> {
        let mut cfg = match &self.config {
            Some(path) => BrandConfig::from_path(path)?,
            None => BrandConfig::default(),
        };
        if let Some(logo) = self.logo {
            cfg.logo = logo;
        }
        if let Some(out) = self.out {
            cfg.out_dir = out;
        }
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let summary = match cli.cmd {
        Command::Icons(args) => run(args, brandgen::run_legacy_icons)?,
        Command::Assets(args) => run(args, brandgen::run_asset_suite)?,
        Command::Og(args) => run(args, brandgen::run_og_v1)?,
    };

    for path in &summary.written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn run(
    args: CommonArgs,
    entry: fn(&BrandConfig) -> BrandgenResult<RunSummary>,
) -> anyhow::Result<RunSummary> {
    let cfg = args.into_config()?;
    Ok(entry(&cfg)?)
}
