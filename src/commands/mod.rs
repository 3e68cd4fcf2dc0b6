use clap::Parser;
use std::path::PathBuf;

/// Combines the .bin files of a multi-bin CUE/BIN disc image into a single
/// .bin and rewrites the .cue sheet to match.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the input .cue file
    #[arg(value_name = "INPUT_CUE")]
    pub input_cue: PathBuf,

    /// Force overwrite of the output .bin file if it already exists
    #[arg(long, short = 'f', value_name = "FORCE", default_value_t = false)]
    pub force: bool,

    /// Continue past malformed cue lines without prompting
    #[arg(long, short = 'y', value_name = "YES", default_value_t = false)]
    pub assume_yes: bool,
}
