//! # Figsel CLI Application
//!
//! Line-oriented shell over the view selector. Each command is one user
//! interaction; after it runs the shell prints what the window would show.
//!
//! ```text
//! > select figure3
//! Display:  figures/figure3a.png
//! Buttons:  [Panel A]* [Panel B]
//! Panel:    collapsed
//! ```

mod commands;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use fig_core::catalog::Catalog;
use fig_core::file_io::{catalog_to_json, load_catalog};

use commands::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive the Figsel view selector from the terminal", long_about = None)]
struct Cli {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long, value_name = "CATALOG")]
    catalog: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(short, long, value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Print the view state as JSON after every command
    #[arg(long)]
    json: bool,

    /// Print the active catalog as JSON and exit
    #[arg(long)]
    dump_catalog: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    fig_core::logging::init(cli.verbose);

    let catalog = match &cli.catalog {
        Some(path) => match load_catalog(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("Failed to load catalog: {}", e);
                eprintln!("Error: {}", e);
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
                return ExitCode::FAILURE;
            }
        },
        None => Catalog::builtin(),
    };

    if cli.dump_catalog {
        return match catalog_to_json(&catalog) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut shell = Shell::new(catalog, cli.json);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.script {
        Some(path) => match fs::read_to_string(path) {
            Ok(script) => shell.run_script(&script, &mut out),
            Err(e) => {
                eprintln!("Error: cannot read script '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => run_interactive(&mut shell, &mut out),
    };

    match result {
        Ok(()) if cli.script.is_some() && shell.failures() > 0 => {
            eprintln!("Error: {} command(s) in the script failed", shell.failures());
            ExitCode::FAILURE
        }
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Prompt/read/execute until `quit` or end of input
fn run_interactive(shell: &mut Shell, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Figsel CLI - {}", shell.catalog().title)?;
    writeln!(out, "Type 'help' for commands.")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        if !shell.execute(&line?, out)? {
            return Ok(());
        }
    }
}
