use crate::cd::Msf;
use crate::combine::combine_bin_cue;
use crate::commands::Cli;
use clap::Parser;
use clap::error::ErrorKind;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::{error, info};
use std::process::ExitCode;

mod cd;
mod combine;
mod commands;
mod util;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    if let Err(err) = LogWrapper::new(pb.clone(), logger).try_init() {
        eprintln!("Failed to initialize logging: {err}");
        return ExitCode::from(1);
    }
    log::set_max_level(level);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    match combine_bin_cue(pb, cli.input_cue, cli.force, cli.assume_yes).await {
        Ok(result) => {
            info!(
                "Merged {} track files into {:?}",
                result.track_files.len(),
                result.output_bin_path
            );

            for (index, track) in result.track_files.iter().enumerate() {
                match Msf::from_byte_offset(track.start_offset) {
                    Ok(timestamp) => println!("Track {:02}: {timestamp}", index + 1),
                    Err(_) => println!(
                        "Track {:02}: byte offset {}",
                        index + 1,
                        track.start_offset
                    ),
                }
            }

            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
