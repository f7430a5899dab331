use clap::Parser;
use log::LevelFilter;
use markdown2html::{convert_file, ConvertError, ConvertResult, ExitCode};
use std::path::PathBuf;

/// Convert a markdown file to HTML.
///
/// Takes exactly two arguments. Log verbosity comes from `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Markdown file to read
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    input: PathBuf,

    /// HTML file to write (created or overwritten)
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> std::process::ExitCode {
    let exit = match parse_cli().and_then(|cli| {
        init_logging();
        run(&cli)
    }) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            report(&err);
            err.exit_code()
        }
    };

    std::process::ExitCode::from(exit as u8)
}

fn parse_cli() -> ConvertResult<Cli> {
    Cli::try_parse().map_err(|err| ConvertError::Usage(err.render().to_string()))
}

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> ConvertResult<()> {
    let summary = convert_file(&cli.input, &cli.output)?;
    log::debug!(
        "{} input lines produced {} fragments",
        summary.lines,
        summary.fragments
    );
    Ok(())
}

fn report(err: &ConvertError) {
    match err {
        // clap's rendering already ends with a newline
        ConvertError::Usage(usage) => eprint!("{usage}"),
        _ => eprintln!("{err}"),
    }
}
