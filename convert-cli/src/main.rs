use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{error::ErrorKind, Parser};
use fragment_core::{
    config::JobTemplate,
    convert,
    io::{output_path, read_input, write_output},
};

use crate::error::{CliError, Result};

mod error;

/// Converts a fragmented molecule into an RI-MP2 fragment job document, written
/// to `output-<INPUT>`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input document holding the molecule and its fragmentation
    input: PathBuf,
}

/// Converts the input named in `args`, returning where the job document went.
fn run<I, T>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(CliError::Usage(e)),
    };
    log::debug!("parsed arguments: {args:?}");

    let input = read_input(&args.input)?;
    let document = convert(&input, &JobTemplate::default())?;
    log::info!(
        "{} atoms in {} fragments",
        document.topology.n_atoms(),
        document.topology.n_fragments()
    );

    let output = output_path(&args.input);
    write_output(&output, &document)?;
    Ok(output)
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    match run(std::env::args_os()) {
        Ok(output) => {
            println!("job document written to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("conversion failed: {e}");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
