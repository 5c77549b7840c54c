//! gmi2html CLI - gemtext to HTML converter

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use gmi2html::{Gmi2Html, Shell};

#[derive(Parser)]
#[command(name = "gmi2html")]
#[command(version)]
#[command(about = "Convert gemtext documents to HTML", long_about = None)]
struct Cli {
    /// Shell template wrapping the output ({{ Title }} and {{ Content }})
    #[arg(short, long, value_name = "FILE", env = "GMI2HTML_TEMPLATE")]
    template: Option<PathBuf>,

    /// Input gemtext files (stdin if none given)
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let shell = match &cli.template {
        Some(path) => Shell::from_file(path)?,
        None => Shell::default(),
    };

    let converter = Gmi2Html::new().with_shell(shell);
    let result = if cli.inputs.is_empty() {
        log::debug!("Reading gemtext from stdin");
        converter.parse_reader(io::stdin().lock())?
    } else {
        converter.parse_files(cli.inputs.as_slice())?
    };

    let document = result.to_document()?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
