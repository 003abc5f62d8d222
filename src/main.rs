use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use line_sticker_dl::{Config, Event, PackageId, StickerDownloader};

/// Download a LINE sticker pack
#[derive(Parser)]
#[command(name = "line-sticker-dl")]
#[command(author, version)]
#[command(after_help = "EXAMPLES:
    # Download pack 12345 into ./output/LINE_12345
    line-sticker-dl 12345

    # Static PNGs only, four downloads at a time
    line-sticker-dl --static --jobs 4 12345
")]
struct Cli {
    /// LINE Store ID of the pack
    package_id: u64,

    /// Always download static PNGs
    #[arg(long = "static")]
    static_only: bool,

    /// Download into this folder
    #[arg(long, value_name = "DIR", default_value = "output")]
    output: PathBuf,

    /// Keep stickers that were already downloaded instead of overwriting them
    #[arg(long)]
    skip_existing: bool,

    /// Number of stickers downloaded at the same time
    #[arg(short, long, value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: u16,

    /// Give up on a request after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            output_dir: cli.output.clone(),
            static_only: cli.static_only,
            skip_existing: cli.skip_existing,
            max_concurrent_downloads: usize::from(cli.jobs),
            request_timeout: cli.timeout.map(Duration::from_secs),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> line_sticker_dl::Result<()> {
    let downloader = StickerDownloader::new(Config::from(cli))?;

    let mut events = downloader.subscribe();
    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => print_event(&event),
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    });

    println!("Getting LINE sticker pack...");
    let result = downloader.download_pack(PackageId(cli.package_id)).await;

    // Closing the channel lets the printer drain and exit
    drop(downloader);
    printer.await.ok();

    result.map(|_| ())
}

fn print_event(event: &Event) {
    match event {
        Event::MetadataFetched { title, author, .. } => {
            println!("=> {title} by {author}");
        }
        Event::Downloading { index, total, .. } => {
            println!("  Downloading {index}/{total}...");
        }
        Event::Downloaded { sticker_id, .. } => {
            println!("    => {sticker_id}: SUCCESS!");
        }
        Event::Skipped { sticker_id, .. } => {
            println!("    => {sticker_id}: already exists, skipped");
        }
        Event::DownloadFailed { sticker_id, error } => {
            println!("    => {sticker_id}: FAILED! ({error})");
        }
        Event::ReportWritten { path } => {
            println!("Wrote {}", path.display());
        }
        Event::Complete {
            succeeded, failed, ..
        } => {
            println!("DONE! {succeeded} saved, {failed} failed");
        }
    }
}

fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();
}
