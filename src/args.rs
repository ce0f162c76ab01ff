use crate::error::{GenerateError, GenerateResult};

use std::path::{Path, PathBuf};

/// Token separating driver arguments from ours.
pub const SEPARATOR: &str = "--";

/// Positional values the tool runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    target: String,
    output_directory: PathBuf,
}

impl InvocationArgs {
    /// Parses the full process argument list, program name included.
    ///
    /// Everything up to and including the first `--` is ignored; exactly two
    /// tokens must follow it.
    pub fn parse<I, S>(args: I) -> GenerateResult<InvocationArgs>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).skip(1).collect();
        let positionals = match args.iter().position(|a| a == SEPARATOR) {
            Some(index) => &args[index + 1..],
            None => {
                return Err(GenerateError::InvalidArguments {
                    reason: args.join(" "),
                })
            }
        };

        let (target, output_directory) = match positionals {
            [target, output_directory] => (target, output_directory),
            _ => {
                return Err(GenerateError::InvalidArguments {
                    reason: positionals.join(" "),
                })
            }
        };

        if target.is_empty() || target.contains(['/', '\\']) {
            return Err(GenerateError::InvalidArguments {
                reason: format!("target name must be a plain file stem: \"{target}\""),
            });
        }

        Ok(InvocationArgs {
            target: target.clone(),
            output_directory: PathBuf::from(output_directory),
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }
}
