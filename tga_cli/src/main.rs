mod command;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::error;

use crate::run::run;

#[derive(Parser, Debug)]
#[command(
    name = "tga",
    about = "Apply pixel operations to uncompressed truecolor TGA images",
    after_help = "Methods:\n  \
        multiply|subtract|overlay|screen <file.tga>\n  \
        combine <green.tga> <blue.tga>\n  \
        flip\n  \
        onlyred|onlygreen|onlyblue\n  \
        addred|addgreen|addblue <int>\n  \
        scalered|scalegreen|scaleblue <int>"
)]
pub struct Cli {
    /// Where the result is written (.tga).
    output: Option<String>,
    /// Image the chain starts from (.tga).
    input: Option<String>,
    /// Methods and their arguments, applied left to right.
    #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    methods: Vec<String>,
    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
    /// Also write rotating log files into this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match common::setup_logging(&cli.log_level, cli.log_dir.as_deref()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Logger initialization failed: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let (Some(output), Some(input)) = (cli.output.as_deref(), cli.input.as_deref()) else {
        // Printing help can only fail if stdout is gone.
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    match run(output, input, &cli.methods) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
