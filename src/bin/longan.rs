use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use longan::deck::{DeckBuilder, DeckFile, SignaturePolicy};
use longan::layout::{CanvasPreset, LayoutEngine, LayoutGeometry, LayoutKind};

#[derive(Parser, Debug)]
#[command(name = "longan", version, about = "Generate PowerPoint decks from YAML slide specs")]
struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace). Overrides LONGAN_LOG.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a deck file into a .pptx presentation.
    Build(BuildArgs),
    /// Print zone rectangles, in inches, for each layout kind.
    Zones(ZonesArgs),
    /// Validate a deck file and its geometry without writing anything.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Input deck file (YAML).
    deck: PathBuf,

    /// Output path. Defaults to the deck's `output` entry, then `<deck>.pptx`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Which slides carry the signature.
    #[arg(long, value_enum)]
    signature: Option<SignatureChoice>,

    /// Canvas preset, replacing the deck's canvas.
    #[arg(long, value_enum)]
    canvas: Option<CanvasChoice>,
}

#[derive(Args, Debug)]
struct ZonesArgs {
    #[arg(long, value_enum, default_value_t = CanvasChoice::Widescreen)]
    canvas: CanvasChoice,

    /// Only print this layout kind.
    #[arg(long, value_enum)]
    kind: Option<KindChoice>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Input deck file (YAML).
    deck: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SignatureChoice {
    None,
    FirstAndLast,
    EverySlide,
}

impl From<SignatureChoice> for SignaturePolicy {
    fn from(choice: SignatureChoice) -> Self {
        match choice {
            SignatureChoice::None => SignaturePolicy::None,
            SignatureChoice::FirstAndLast => SignaturePolicy::FirstAndLast,
            SignatureChoice::EverySlide => SignaturePolicy::EverySlide,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CanvasChoice {
    #[value(name = "16x9", alias = "widescreen")]
    Widescreen,
    #[value(name = "4x3", alias = "standard")]
    Standard,
}

impl From<CanvasChoice> for CanvasPreset {
    fn from(choice: CanvasChoice) -> Self {
        match choice {
            CanvasChoice::Widescreen => CanvasPreset::Widescreen,
            CanvasChoice::Standard => CanvasPreset::Standard,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Standard,
    Split,
    BigNumber,
    #[value(alias = "cover")]
    Title,
    Closing,
}

impl From<KindChoice> for LayoutKind {
    fn from(choice: KindChoice) -> Self {
        match choice {
            KindChoice::Standard => LayoutKind::Standard,
            KindChoice::Split => LayoutKind::Split,
            KindChoice::BigNumber => LayoutKind::BigNumber,
            KindChoice::Title => LayoutKind::Title,
            KindChoice::Closing => LayoutKind::Closing,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Zones(args) => cmd_zones(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("LONGAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_deck(path: &Path) -> anyhow::Result<DeckFile> {
    DeckFile::load(path).with_context(|| format!("load deck '{}'", path.display()))
}

fn default_output(deck: &Path) -> PathBuf {
    let stem = deck
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "deck".to_string());
    PathBuf::from(format!("{}.pptx", stem))
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let deck = load_deck(&args.deck)?;
    let (mut config, slides) = deck.into_parts();

    if let Some(canvas) = args.canvas {
        config.geometry.canvas = CanvasPreset::from(canvas).canvas();
    }
    if let Some(signature) = args.signature {
        config.signature.policy = signature.into();
    }
    config
        .validate()
        .with_context(|| format!("invalid configuration in '{}'", args.deck.display()))?;

    let output = args
        .output
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| default_output(&args.deck));

    let report = DeckBuilder::new(config)
        .save(&slides, &output)
        .with_context(|| format!("write presentation '{}'", output.display()))?;

    println!("Presentation saved to: {}", report.path.display());
    println!("Total slides: {}", report.slide_count);
    Ok(())
}

fn cmd_zones(args: ZonesArgs) -> anyhow::Result<()> {
    let preset = CanvasPreset::from(args.canvas);
    let engine = LayoutEngine::new(LayoutGeometry::for_canvas(preset.canvas()));
    let kinds: Vec<LayoutKind> = match args.kind {
        Some(kind) => vec![kind.into()],
        None => LayoutKind::ALL.to_vec(),
    };

    println!("canvas {}", engine.geometry().canvas);
    for kind in kinds {
        println!("{}", kind);
        for (name, zone) in engine.zones(kind).named() {
            println!("  {:<12} {}", name, zone);
        }
        if kind == LayoutKind::Standard {
            println!("standard with image");
            for (name, zone) in engine.standard_with_image().named() {
                println!("  {:<12} {}", name, zone);
            }
        }
    }
    println!("signature      {}", engine.signature());
    println!("footer         {}", engine.footer());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let deck = load_deck(&args.deck)?;
    deck.config
        .validate()
        .with_context(|| format!("invalid configuration in '{}'", args.deck.display()))?;
    if deck.slides.is_empty() {
        anyhow::bail!("'{}' has no slides", args.deck.display());
    }

    let (config, slides) = deck.into_parts();
    let plans = DeckBuilder::new(config).plan(&slides);
    let missing: Vec<_> = plans
        .iter()
        .filter_map(|p| p.skipped_image.as_ref().map(|path| (p.index, path)))
        .collect();

    println!("{}: {} slides", args.deck.display(), plans.len());
    for (index, path) in &missing {
        println!("  slide {}: image not found: {}", index + 1, path.display());
    }
    Ok(())
}
