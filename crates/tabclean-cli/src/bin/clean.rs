//! Clean a delimited file into CSV and a SQL script.

use clap::Parser;
use tabclean_cli::cli::CleanCli;
use tabclean_cli::commands::run_clean;
use tabclean_cli::logging::init_logging;
use tabclean_cli::summary::render_clean;

fn main() {
    let cli = CleanCli::parse();
    cli.logging.color.write_global();
    if let Err(error) = init_logging(&cli.logging.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match run_clean(&cli) {
        Ok(outcome) => {
            if !cli.quiet {
                println!("{}", render_clean(&outcome));
            }
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
