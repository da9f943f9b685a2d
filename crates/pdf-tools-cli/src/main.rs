use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use pdf_async_runtime::{PdfCommand, PdfUpdate, spawn_worker};
use pdf_jpeg::{ConvertOptions, SelectedFile};
use std::path::PathBuf;

mod logger;

#[derive(Parser)]
#[command(name = "pdft", about = "Convert JPEG images to PDF", version)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert JPEG files into a PDF, one image per page
    Convert {
        /// Input image file(s); files that are not JPEGs are skipped
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long, required_unless_present = "plan_only")]
        output: Option<PathBuf>,

        /// Options file (JSON), see `init-config`
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Output orientation
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Show the placement of each image only, don't generate PDF
        #[arg(long)]
        plan_only: bool,
    },

    /// Write the default options to a JSON file
    InitConfig {
        /// Path of the options file to create
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    Letter,
    Legal,
    Tabloid,
    A3,
    A4,
    A5,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for pdf_jpeg::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
        }
    }
}

impl From<OrientationArg> for pdf_jpeg::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::StderrLogger::new(level).init()?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
            paper,
            orientation,
            title,
            plan_only,
        } => {
            let mut options = match config {
                Some(path) => ConvertOptions::load(&path).await?,
                None => ConvertOptions::default(),
            };
            if let Some(paper) = paper {
                options.paper_size = paper.into();
            }
            if let Some(orientation) = orientation {
                options.orientation = orientation.into();
            }
            if let Some(title) = title {
                options.title = title;
            }

            let files: Vec<SelectedFile> = input.into_iter().map(SelectedFile::from_path).collect();

            if plan_only {
                let selection = pdf_jpeg::Selection::filter(files)?;
                let plans = pdf_jpeg::plan_layout(selection.files(), &options).await?;
                println!("Layout ({} page(s)):", plans.len());
                for (i, plan) in plans.iter().enumerate() {
                    let p = &plan.placement;
                    println!(
                        "  {:>3}. {} ({}x{} px) scale {:.4} → {:.2} x {:.2} pt at ({:.2}, {:.2})",
                        i + 1,
                        plan.file_name,
                        plan.image_width,
                        plan.image_height,
                        p.scale,
                        p.width,
                        p.height,
                        p.x,
                        p.y
                    );
                }
                return Ok(());
            }

            // Required by clap unless --plan-only was given
            let Some(output) = output else {
                bail!("--output is required");
            };

            let (command_tx, mut update_rx, handle) = spawn_worker();
            command_tx.send(PdfCommand::SelectFiles { files })?;
            command_tx.send(PdfCommand::Convert {
                options,
                output_path: output,
            })?;
            drop(command_tx);

            while let Some(update) = update_rx.recv().await {
                match update {
                    PdfUpdate::Error { message } => bail!(message),
                    progress @ PdfUpdate::Progress { .. } => log::debug!("{progress}"),
                    other => println!("{other}"),
                }
            }
            handle.await?;
        }

        Commands::InitConfig { path } => {
            ConvertOptions::default().save(&path).await?;
            println!("Wrote default options → {}", path.display());
        }
    }

    Ok(())
}
