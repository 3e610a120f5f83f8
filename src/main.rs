//! vtb - Video Timeline Browser
//!
//! Browse a video through a timeline of key moments and segments.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::open::OpenArgs;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-dev+",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("VTB_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VTB_BUILD_DATE"),
    ")"
);

/// Video Timeline Browser
#[derive(Parser, Debug)]
#[command(name = "vtb")]
#[command(version = VERSION)]
#[command(about = "Navigate a video through a timeline of key moments and segments")]
#[command(
    long_about = "Navigate a video through a timeline of key moments and segments.

Load a video file (or the built-in sample) and browse it in the terminal:
silent and highlighted segments are drawn on the timeline, key moments are
marked on it and listed beside the player. Click or press Enter on a moment
to jump to it.

EXAMPLES:
    vtb talk.mp4                  Open a video
    vtb --sample                  Open the built-in sample
    vtb moments --at 45           List key moments active at 0:45
    vtb config show               Show the current configuration",
    after_help = concat!("Source: https://github.com/", env!("VTB_REPO_NAME"))
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    open: OpenArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive browser (default command)
    Open(OpenArgs),

    /// Print the key moments list
    #[command(long_about = "Print the key moments list without starting the browser.

Moments within two seconds of --at are marked as active.

EXAMPLES:
    vtb moments
    vtb moments --at 120
    vtb moments --moments talk-moments.json --json")]
    Moments {
        /// JSON file with key moments (replaces the built-in list)
        #[arg(long, value_name = "PATH")]
        moments: Option<PathBuf>,

        /// Playback position in seconds used to mark active moments
        #[arg(long, value_name = "SECS")]
        at: Option<f64>,

        /// Print the moments as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration file in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => commands::open::handle(cli.open),
        Some(Commands::Open(args)) => commands::open::handle(args),
        Some(Commands::Moments { moments, at, json }) => {
            commands::moments::handle(moments, at, json)
        }
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_file_argument_opens() {
        let cli = Cli::try_parse_from(["vtb", "talk.mp4"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.open.file, Some(PathBuf::from("talk.mp4")));
    }

    #[test]
    fn file_and_sample_conflict() {
        assert!(Cli::try_parse_from(["vtb", "talk.mp4", "--sample"]).is_err());
    }

    #[test]
    fn moments_subcommand_parses_position() {
        let cli = Cli::try_parse_from(["vtb", "moments", "--at", "45"]).unwrap();
        match cli.command {
            Some(Commands::Moments { at, json, .. }) => {
                assert_eq!(at, Some(45.0));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
