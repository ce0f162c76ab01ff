mod args;
mod codegen;
mod error;
mod logging;
mod output;
mod source;

use crate::{
    args::InvocationArgs,
    output::OutputFile,
    source::{validate_entries, Environment},
};

use std::{env::args, process::ExitCode};

use anyhow::Result;
use tracing::{debug, info, warn};

fn main() -> ExitCode {
    logging::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "generation failed");
            println!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let invocation = InvocationArgs::parse(args())?;
    let name = invocation.target();
    info!(type_name = name, output = %invocation.output_directory().display(), "arguments parsed");

    let environment = Environment::from_process()?;
    debug!(source = %environment.source_directory().display(), "source directory resolved");
    let source = environment.source_for(name);
    let entries = source.load_entries()?;
    let settings = source.load_settings()?;
    info!(type_name = name, entries = entries.len(), "config loaded");

    for warning in validate_entries(name, &entries) {
        warn!(type_name = name, "{warning}");
    }

    let code = codegen::render(name, &entries, &settings.conformances);
    debug!(type_name = name, bytes = code.len(), "rendered");

    let output = OutputFile::new(invocation.output_directory(), name);
    output.write_atomically(&code)?;
    info!(type_name = name, path = %output.path().display(), "written");

    Ok(())
}
