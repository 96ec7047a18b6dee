use anyhow::{Context, Result, bail};
use cardsheet::layout::pack_grid;
use cardsheet::{CardColor, LayoutOptions, Orientation, Project, sheet_pixel_size};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod ingest;

#[derive(Parser)]
#[command(name = "cardsheet", about = "Photo card sheet layout and export", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose photos onto 10x15 cm cards and export PNGs
    Compose {
        /// Input image file(s)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        out: PathBuf,

        /// Slot padding in pixels at base resolution
        #[arg(long, default_value = "18")]
        padding: f32,

        /// Corner rounding radius in pixels at base resolution
        #[arg(long, default_value = "24")]
        rounding: f32,

        /// Card background color (hex, e.g. #ffffff)
        #[arg(long, default_value = "#ffffff")]
        background: String,

        /// Card orientation
        #[arg(long, default_value = "landscape", value_enum)]
        orientation: OrientationArg,

        /// Also bundle all cards into cards.zip
        #[arg(long)]
        archive: bool,
    },

    /// Show the free-form grid chosen for a given image count
    Plan {
        /// Number of images to place on one sheet
        #[arg(long)]
        count: usize,

        /// Cell padding in pixels
        #[arg(long, default_value = "18")]
        padding: f32,

        /// Sheet orientation
        #[arg(long, default_value = "landscape", value_enum)]
        orientation: OrientationArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Landscape,
    Portrait,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Landscape => Self::Landscape,
            OrientationArg::Portrait => Self::Portrait,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compose {
            input,
            out,
            padding,
            rounding,
            background,
            orientation,
            archive,
        } => {
            compose(
                input,
                out,
                LayoutOptions { padding, rounding },
                background,
                orientation.into(),
                archive,
            )
            .await
        }
        Commands::Plan {
            count,
            padding,
            orientation,
        } => {
            plan(count, padding, orientation.into());
            Ok(())
        }
    }
}

async fn compose(
    input: Vec<PathBuf>,
    out: PathBuf,
    options: LayoutOptions,
    background: String,
    orientation: Orientation,
    archive: bool,
) -> Result<()> {
    options.validate()?;
    let background: CardColor = background
        .parse()
        .with_context(|| format!("invalid background color {background:?}"))?;

    let mut project = Project::new();
    for decoded in ingest::decode_batch(&input).await {
        project.add_image(decoded.name, decoded.pixels);
    }
    if project.library.is_empty() {
        bail!("no inputs could be decoded as images");
    }

    // First card carries the orientation so cards appended during
    // auto-fill inherit it.
    if let Some(card) = project.cards.card_mut(0) {
        card.orientation = orientation;
    }
    project.auto_fill();
    for card in project.cards.cards_mut() {
        card.background = background;
    }

    tokio::fs::create_dir_all(&out).await?;
    let paths =
        cardsheet_export::export_cards(&project.cards, &project.library, &options, &out).await?;
    println!("Wrote {} card(s) to {}", paths.len(), out.display());

    if archive {
        let path =
            cardsheet_export::export_archive(&project.cards, &project.library, &options, &out)
                .await?;
        println!("Bundled archive at {}", path.display());
    }
    Ok(())
}

fn plan(count: usize, padding: f32, orientation: Orientation) {
    let (width, height) = sheet_pixel_size(orientation);
    let fit = pack_grid(count, width as f32, height as f32, padding);
    println!(
        "{} image(s) on a {}x{} sheet: {} x {} grid, cells {:.0}x{:.0} px, {} empty cell(s)",
        count,
        width,
        height,
        fit.cols,
        fit.rows,
        fit.cell_width,
        fit.cell_height,
        fit.empty_cells(count)
    );
}
