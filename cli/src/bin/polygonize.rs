use clap::{Parser, Subcommand};
use cli::{ExtractArgs, parse_color};
use color_eyre::eyre::Result;
use polygonize::{ExtractionConfig, Grid, draw_outlines, load_image, render, save_image};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract polygon outlines from an image
    Extract {
        /// Path to the input image (.png, .jpg, .jpeg)
        #[arg(short, long)]
        input: PathBuf,
        #[command(flatten)]
        options: ExtractArgs,
        /// Write GeoJSON here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write a copy of the input with the outlines drawn on it
        #[arg(long)]
        overlay: Option<PathBuf>,
        /// Outline color for the overlay (RRGGBB or RRGGBBAA)
        #[arg(long, default_value = "ff0000")]
        overlay_color: String,
    },
    /// Write the image as the classifier sees it
    Render {
        /// Path to the input image
        #[arg(short, long)]
        input: PathBuf,
        /// Path of the rendered image
        #[arg(short, long)]
        output: PathBuf,
        #[command(flatten)]
        options: ExtractArgs,
    },
    /// Print the JSON schema of the configuration file
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Extract {
            input,
            options,
            output,
            overlay,
            overlay_color,
        } => {
            extract(input, options, output.as_deref(), overlay.as_deref(), overlay_color)?;
        }
        Commands::Render {
            input,
            output,
            options,
        } => {
            render_image(input, output, options)?;
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&ExtractionConfig::schema())?);
        }
    }

    Ok(())
}

fn extract(
    input: &Path,
    options: &ExtractArgs,
    output: Option<&Path>,
    overlay: Option<&Path>,
    overlay_color: &str,
) -> Result<()> {
    let config = options.resolve()?;
    info!("Config: {:?}", config);

    let pipeline = config.build_pipeline()?;
    info!("{}", pipeline.info());

    let grid = load_image(input)?;
    let result = pipeline.process(&grid);

    for (i, polygon) in result.polygons.iter().enumerate() {
        info!(
            "Polygon {}: {} vertices, area {:.1}",
            i,
            polygon.len(),
            polygon.area()
        );
    }

    match output {
        Some(path) => {
            result.save_geojson(path)?;
            info!("GeoJSON written to {}", path.display());
        }
        None => println!("{}", result.to_geojson_string()?),
    }

    if let Some(path) = overlay {
        let color = parse_color(overlay_color)?;
        let canvas = draw_outlines(grid.as_image(), &result.polygons, color);
        save_image(path, &Grid::from(canvas))?;
        info!("Overlay written to {}", path.display());
    }

    info!("✅ Extracted {} polygons from {}", result.polygons.len(), input.display());
    Ok(())
}

fn render_image(input: &Path, output: &Path, options: &ExtractArgs) -> Result<()> {
    let config = options.resolve()?;
    let classifier = config.filter.classifier()?;

    let grid = load_image(input)?;
    save_image(output, &render(&grid, &classifier))?;

    info!("Rendered {} -> {}", input.display(), output.display());
    Ok(())
}
