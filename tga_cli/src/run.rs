use std::path::Path;

use anyhow::Context;
use common::require_tga_extension;
use log::{debug, info};
use tga::Image;

use crate::command::{parse_commands, CliError, Command};

/// Reads `input`, applies the method chain and writes `output`.
///
/// Every argument is checked before the input image is decoded, and nothing is
/// written unless the whole chain succeeds.
pub fn run<S: AsRef<str>>(output: &str, input: &str, methods: &[S]) -> anyhow::Result<()> {
    for filename in [output, input] {
        if let Err(e) = require_tga_extension(filename) {
            debug!("{}", e);
            return Err(CliError::InvalidFileName.into());
        }
    }
    if !Path::new(input).is_file() {
        return Err(CliError::FileDoesNotExist.into());
    }

    let commands = parse_commands(methods)?;
    commands.iter().try_for_each(Command::check_operands)?;

    let mut image = Image::read_file(input)
        .with_context(|| format!("Failed to read {}", input))
        .context("Failed to read input image.")?;
    info!("Loaded {} ({})", input, image.header());

    for command in commands {
        let operation = command.load()?;
        debug!("Applying {}", operation);
        image.apply(&operation)?;
    }

    image
        .save_file(output)
        .with_context(|| format!("Failed to write {}", output))
        .context("Failed to write output image.")?;
    info!("Saved {}", output);

    Ok(())
}
