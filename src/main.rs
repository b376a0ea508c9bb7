use clap::Parser;
use quire::{QuireError, RenderBuilder, Scale};
use std::path::PathBuf;

/// Renders a document skeleton and prints the resulting draw operations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Skeleton JSON produced by the layout stage
    skeleton: PathBuf,

    /// Documents config JSON (page margins, layout type, caching)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Component width; defaults to the stacked page size
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Component height; defaults to the stacked page size
    #[arg(long, requires = "width")]
    height: Option<f64>,

    /// Device scale of the host scene
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Print the ops and page offsets as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), QuireError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("quire=info")).init();

    let args = Args::parse();

    let mut builder = RenderBuilder::new()
        .with_skeleton_file(&args.skeleton)?
        .with_parent_scale(Scale::uniform(args.scale));
    if let Some(config) = &args.config {
        builder = builder.with_config_file(config)?;
    }
    if let (Some(width), Some(height)) = (args.width, args.height) {
        builder = builder.with_size(width, height);
    }

    let mut renderer = builder.build()?;
    let output = renderer.render(None)?;
    log::info!(
        "Rendered {} page(s): {} span(s) painted, {} skipped",
        output.stats.pages,
        output.stats.spans_painted,
        output.stats.spans_skipped
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for page in &output.pages {
        println!("page {} at ({}, {})", page.index, page.left, page.top);
    }
    for op in &output.ops {
        println!("{}", op);
    }
    Ok(())
}
