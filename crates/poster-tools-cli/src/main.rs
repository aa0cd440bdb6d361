mod logger;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use poster_records::{
    CreateCsvOptions, DEFAULT_ATTRIBUTE_COUNT, DEFAULT_CSV_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_SEED,
};
use poster_render::constants::DEFAULT_PHONE_NUMBERS;
use poster_render::{ExportFormat, PaperSize, PosterOptions, RenderContext};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mposter", about = "Missing poster tools CLI", version)]
struct Cli {
    /// Show layout decisions and other debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a record CSV from a directory of portraits
    #[command(alias = "create_csv")]
    CreateCsv {
        /// Directory with images named after persons
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Directory the CSV is written to
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// CSV file name
        #[arg(short = 'f', long, default_value = DEFAULT_CSV_NAME)]
        output_filename: String,

        /// Seed for reproducible records
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Attributes per person
        #[arg(short, long, default_value_t = DEFAULT_ATTRIBUTE_COUNT)]
        n_attributes: usize,
    },

    /// Render one poster per CSV row
    #[command(alias = "csv_to_missing_posters")]
    CsvToPosters {
        /// Record CSV created by `create-csv`
        #[arg(short, long)]
        csv_path: PathBuf,

        /// Output directory for posters
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Phone numbers to choose from on each poster
        #[arg(short, long, num_args = 1.., default_values = DEFAULT_PHONE_NUMBERS)]
        numbers: Vec<String>,

        /// Output file extension (pdf, jpg, png, ...)
        #[arg(long, default_value = "pdf")]
        format: String,

        /// Render resolution (overrides the config file)
        #[arg(long)]
        dpi: Option<u32>,

        /// Paper size (overrides the config file)
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// JSON file with poster options
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::CreateCsv {
            input_dir,
            output_dir,
            output_filename,
            seed,
            n_attributes,
        } => {
            let options = CreateCsvOptions {
                input_dir,
                output_dir,
                file_name: output_filename,
                n_attributes,
                seed,
            };
            let path = poster_records::create_csv(&options).await?;
            println!("CSV saved to {}", path.display());
        }

        Commands::CsvToPosters {
            csv_path,
            output_dir,
            numbers,
            format,
            dpi,
            paper,
            config,
        } => {
            let mut options = match &config {
                Some(path) => PosterOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => PosterOptions::default(),
            };
            if let Some(dpi) = dpi {
                options.dpi = dpi;
            }
            if let Some(paper) = paper {
                options.paper_size = paper.into();
            }

            // Reject a bad extension before touching any record
            ExportFormat::from_extension(&format, options.jpeg_quality)?;
            let ctx = RenderContext::new(&options)?;

            let records = poster_records::load_from_csv(&csv_path)
                .await
                .with_context(|| format!("Failed to read {}", csv_path.display()))?;
            tokio::fs::create_dir_all(&output_dir).await?;
            info!(
                "Rendering {} posters at {} DPI on {}",
                records.len(),
                options.dpi,
                options.paper_size.name()
            );

            let mut failed = 0;
            for record in &records {
                let file_name = poster_records::output_file_name(&record.name, &format);
                let output = output_dir.join(file_name);
                let result = poster_render::generate_poster(&ctx, record, &numbers, &output).await;
                if let Err(e) = result {
                    error!("Skipping {}: {}", record.name, e);
                    failed += 1;
                }
            }

            println!(
                "Finished {} of {} missing posters → {}",
                records.len() - failed,
                records.len(),
                output_dir.display()
            );
            if failed > 0 {
                bail!("{} of {} posters failed", failed, records.len());
            }
        }
    }

    Ok(())
}
