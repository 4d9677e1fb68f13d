use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use common::has_tga_extension;
use tga::{BlendMode, Channel, Image, Operation};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("Invalid file name.")]
    InvalidFileName,
    #[error("File does not exist.")]
    FileDoesNotExist,
    #[error("Invalid method name.")]
    InvalidMethod,
    #[error("Missing argument.")]
    MissingArgument,
    #[error("Invalid argument, expected number.")]
    ExpectedNumber,
    #[error("Invalid argument, invalid file name.")]
    InvalidOperandName,
    #[error("Invalid argument, file does not exist.")]
    OperandDoesNotExist,
}

/// A parsed method token with its raw arguments. Operand files are not read yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Blend { mode: BlendMode, operand: String },
    Combine { green: String, blue: String },
    Flip,
    Only(Channel),
    Add(Channel, i32),
    Scale(Channel, i32),
}

/// Method names without their arguments.
#[derive(Debug, Clone, Copy)]
enum Method {
    Blend(BlendMode),
    Combine,
    Flip,
    Only(Channel),
    Add(Channel),
    Scale(Channel),
}

impl Method {
    fn parse(token: &str) -> Option<Method> {
        if let Ok(mode) = BlendMode::from_str(token) {
            return Some(Method::Blend(mode));
        }

        let channel = |suffix: &str| Channel::from_str(suffix).ok();
        match token {
            "combine" => Some(Method::Combine),
            "flip" => Some(Method::Flip),
            _ => {
                if let Some(rest) = token.strip_prefix("only") {
                    channel(rest).map(Method::Only)
                } else if let Some(rest) = token.strip_prefix("add") {
                    channel(rest).map(Method::Add)
                } else if let Some(rest) = token.strip_prefix("scale") {
                    channel(rest).map(Method::Scale)
                } else {
                    None
                }
            }
        }
    }

    fn arg_count(self) -> usize {
        match self {
            Method::Blend(_) | Method::Add(_) | Method::Scale(_) => 1,
            Method::Combine => 2,
            Method::Flip | Method::Only(_) => 0,
        }
    }
}

/// Splits the method tokens that follow the input file into commands.
pub fn parse_commands<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Command>, CliError> {
    let mut commands = Vec::new();
    let mut rest = tokens;

    while let Some((token, tail)) = rest.split_first() {
        let method = Method::parse(token.as_ref()).ok_or(CliError::InvalidMethod)?;
        let argc = method.arg_count();
        if tail.len() < argc {
            return Err(CliError::MissingArgument);
        }
        let (args, tail) = tail.split_at(argc);
        let arg = |i: usize| args[i].as_ref().to_string();

        let command = match method {
            Method::Blend(mode) => Command::Blend {
                mode,
                operand: arg(0),
            },
            Method::Combine => Command::Combine {
                green: arg(0),
                blue: arg(1),
            },
            Method::Flip => Command::Flip,
            Method::Only(channel) => Command::Only(channel),
            Method::Add(channel) => Command::Add(channel, parse_number(&arg(0))?),
            Method::Scale(channel) => Command::Scale(channel, parse_number(&arg(0))?),
        };

        commands.push(command);
        rest = tail;
    }

    Ok(commands)
}

fn parse_number(arg: &str) -> Result<i32, CliError> {
    arg.trim().parse().map_err(|_| CliError::ExpectedNumber)
}

fn file_exists(filename: &str) -> bool {
    Path::new(filename).is_file()
}

/// Checks an operand of a blend method.
fn check_operand(filename: &str) -> Result<(), CliError> {
    match (has_tga_extension(filename), file_exists(filename)) {
        (true, true) => Ok(()),
        (false, false) => Err(CliError::InvalidOperandName),
        _ => Err(CliError::OperandDoesNotExist),
    }
}

impl Command {
    /// Validates operand file names without reading them.
    pub fn check_operands(&self) -> Result<(), CliError> {
        match self {
            Command::Blend { operand, .. } => check_operand(operand),
            Command::Combine { green, blue } => {
                let ok = |f: &str| has_tga_extension(f) && file_exists(f);
                if ok(green.as_str()) && ok(blue.as_str()) {
                    Ok(())
                } else {
                    Err(CliError::OperandDoesNotExist)
                }
            }
            Command::Flip | Command::Only(_) | Command::Add(..) | Command::Scale(..) => Ok(()),
        }
    }

    /// Decodes operand images and produces the library operation.
    pub fn load(self) -> anyhow::Result<Operation> {
        let read = |filename: &str| {
            Image::read_file(filename)
                .with_context(|| format!("Failed to read operand {}", filename))
                .context(CliError::FileDoesNotExist)
        };

        let operation = match self {
            Command::Blend { mode, operand } => Operation::Blend {
                mode,
                operand: read(operand.as_str())?,
            },
            Command::Combine { green, blue } => Operation::Combine {
                green: read(green.as_str())?,
                blue: read(blue.as_str())?,
            },
            Command::Flip => Operation::Flip,
            Command::Only(channel) => Operation::Only(channel),
            Command::Add(channel, value) => Operation::Add(channel, value),
            Command::Scale(channel, value) => Operation::Scale(channel, value),
        };

        Ok(operation)
    }
}

#[cfg(test)]
mod tests {
    use common::test_utils::{missing_test_path, write_test_file};

    use super::*;

    fn parse(line: &str) -> Result<Vec<Command>, CliError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        parse_commands(&tokens)
    }

    #[test]
    fn parses_every_method() {
        let commands = parse(
            "multiply a.tga subtract b.tga screen c.tga overlay d.tga combine g.tga b.tga \
             flip onlyred onlygreen onlyblue addred 10 addgreen -5 addblue 0 \
             scalered 2 scalegreen 3 scaleblue -1",
        )
        .unwrap();

        assert_eq!(
            commands,
            [
                Command::Blend {
                    mode: BlendMode::Multiply,
                    operand: "a.tga".into()
                },
                Command::Blend {
                    mode: BlendMode::Subtract,
                    operand: "b.tga".into()
                },
                Command::Blend {
                    mode: BlendMode::Screen,
                    operand: "c.tga".into()
                },
                Command::Blend {
                    mode: BlendMode::Overlay,
                    operand: "d.tga".into()
                },
                Command::Combine {
                    green: "g.tga".into(),
                    blue: "b.tga".into()
                },
                Command::Flip,
                Command::Only(Channel::Red),
                Command::Only(Channel::Green),
                Command::Only(Channel::Blue),
                Command::Add(Channel::Red, 10),
                Command::Add(Channel::Green, -5),
                Command::Add(Channel::Blue, 0),
                Command::Scale(Channel::Red, 2),
                Command::Scale(Channel::Green, 3),
                Command::Scale(Channel::Blue, -1),
            ]
        );
    }

    #[test]
    fn empty_chain_is_valid() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert_eq!(parse("flip blur"), Err(CliError::InvalidMethod));
        assert_eq!(parse("onlyalpha"), Err(CliError::InvalidMethod));
        assert_eq!(parse("addpurple 3"), Err(CliError::InvalidMethod));
        assert_eq!(parse("Flip"), Err(CliError::InvalidMethod));
    }

    #[test]
    fn missing_arguments_are_reported() {
        assert_eq!(parse("multiply"), Err(CliError::MissingArgument));
        assert_eq!(parse("combine g.tga"), Err(CliError::MissingArgument));
        assert_eq!(parse("flip addred"), Err(CliError::MissingArgument));
        assert_eq!(parse("scaleblue"), Err(CliError::MissingArgument));
    }

    #[test]
    fn numbers_must_parse() {
        assert_eq!(parse("addred ten"), Err(CliError::ExpectedNumber));
        assert_eq!(parse("scalered 1.5"), Err(CliError::ExpectedNumber));
        assert_eq!(parse("addgreen 99999999999"), Err(CliError::ExpectedNumber));
    }

    #[test]
    fn operand_checks_follow_extension_and_existence() {
        let existing = write_test_file("cli_operand.tga", &[0]);
        let existing = existing.to_str().unwrap();
        let existing_other = write_test_file("cli_operand.bin", &[0]);
        let existing_other = existing_other.to_str().unwrap();
        let missing = missing_test_path("cli_missing.tga");
        let missing = missing.to_str().unwrap();
        let missing_other = missing_test_path("cli_missing.bin");
        let missing_other = missing_other.to_str().unwrap();

        let blend = |f: &str| Command::Blend {
            mode: BlendMode::Screen,
            operand: f.to_string(),
        };
        assert_eq!(blend(existing).check_operands(), Ok(()));
        assert_eq!(
            blend(missing_other).check_operands(),
            Err(CliError::InvalidOperandName)
        );
        assert_eq!(
            blend(missing).check_operands(),
            Err(CliError::OperandDoesNotExist)
        );
        assert_eq!(
            blend(existing_other).check_operands(),
            Err(CliError::OperandDoesNotExist)
        );

        let combine = |g: &str, b: &str| Command::Combine {
            green: g.to_string(),
            blue: b.to_string(),
        };
        assert_eq!(combine(existing, existing).check_operands(), Ok(()));
        assert_eq!(
            combine(existing, missing).check_operands(),
            Err(CliError::OperandDoesNotExist)
        );
        assert_eq!(
            combine(existing_other, existing).check_operands(),
            Err(CliError::OperandDoesNotExist)
        );
    }

    #[test]
    fn load_keeps_scalar_commands() {
        assert_eq!(
            Command::Add(Channel::Red, 4).load().unwrap().to_string(),
            "addred"
        );
        assert_eq!(Command::Flip.load().unwrap().to_string(), "flip");
    }

    #[test]
    fn load_reports_unreadable_operand() {
        let path = write_test_file("cli_garbage.tga", &[1, 2, 3]);
        let command = Command::Blend {
            mode: BlendMode::Multiply,
            operand: path.to_str().unwrap().to_string(),
        };

        let err = command.load().unwrap_err();
        assert_eq!(
            err.downcast_ref::<CliError>(),
            Some(&CliError::FileDoesNotExist)
        );
    }
}
