//! Identify the delimiter of a delimited text file.

use clap::Parser;
use tabclean_cli::cli::IdentifyCli;
use tabclean_cli::commands::run_identify;
use tabclean_cli::logging::init_logging;
use tabclean_cli::summary::render_identify;

fn main() {
    let cli = IdentifyCli::parse();
    cli.logging.color.write_global();
    if let Err(error) = init_logging(&cli.logging.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let rendered = run_identify(&cli).and_then(|outcome| {
        render_identify(&outcome, cli.mode()).map_err(anyhow::Error::from)
    });
    let exit_code = match rendered {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
