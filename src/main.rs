use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
mod logging;
mod puzzle;
mod utils;

use puzzle::LogSource;
use utils::FetchError;

/// Find the puzzle URLs in an Apache log and print them or download the images
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Destination directory for downloaded images
    #[arg(short = 'd', long)]
    todir: Option<PathBuf>,

    /// Category that picks the sort order (default: first `_` segment of LOGFILE)
    #[arg(long)]
    category: Option<String>,

    /// Host the URLs are rebuilt against (default: second `_` segment of LOGFILE)
    #[arg(long)]
    host: Option<String>,

    /// Apache logfile to extract urls from
    logfile: PathBuf,
}

impl Args {
    /// Source for the log, with flags taking priority over the file name.
    fn log_source(&self) -> Result<LogSource, puzzle::PuzzleError> {
        match (&self.category, &self.host) {
            (Some(category), Some(host)) => Ok(LogSource::new(category, host)),
            (category, host) => {
                let mut source = LogSource::from_path(&self.logfile)?;
                if let Some(category) = category {
                    source.category = category.clone();
                }
                if let Some(host) = host {
                    source.host = host.clone();
                }
                Ok(source)
            }
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let img_urls = puzzle::read_urls(&args.logfile, &args.log_source()?)?;

    match args.todir {
        Some(dest_dir) => download(&img_urls, &dest_dir).await,
        None => {
            println!("{}", img_urls.join("\n"));
            Ok(())
        }
    }
}

async fn download(img_urls: &[String], dest_dir: &Path) -> anyhow::Result<()> {
    match utils::images::download_images(img_urls, dest_dir).await {
        Ok(count) => {
            tracing::info!("saved {} images to {}", count, dest_dir.display());
            Ok(())
        }
        Err(e @ FetchError::CreateDir { .. }) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e).with_context(|| format!("downloading into {}", dest_dir.display())),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if std::env::args_os().len() <= 1 {
        eprintln!("{}", Args::command().render_usage());
        std::process::exit(1);
    }

    let args = Args::parse();
    logging::init_logging();

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
