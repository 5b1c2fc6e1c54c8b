//! XVGI project file generator CLI.

use clap::Parser;
use vgproj_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_mesh, run_reconstruction, run_volume_block, run_volume_stack};

fn main() {
    let cli = Cli::parse();
    init_logging(&LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
    });

    let result = match &cli.command {
        Command::Mesh(args) => run_mesh(args),
        Command::VolumeStack(args) => run_volume_stack(args),
        Command::VolumeBlock(args) => run_volume_block(args),
        Command::Reconstruction(args) => run_reconstruction(args),
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
