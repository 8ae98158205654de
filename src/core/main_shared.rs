use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::core::cli::Args;
use crate::core::cmds;
use crate::core::cmds::report::ReportOptions;
use crate::core::logging::init_logging;
use crate::types::{AppError, AppResult};
use crate::types::config::{CliOverrides, config, init_with_overrides};

pub fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        input: args.input,
        evasion_keywords: args.evasion_keywords,
        log_level: args.log_level,
        log_color: args.log_color,
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides);

    // Initialize logging after config so level/color are applied
    init_logging();
    debug!("Current working directory: {}", env::current_dir()?.display());

    let input = PathBuf::from(config().input());
    let options = ReportOptions {
        evasion_keywords: config().evasion_keywords(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let exit_code = match cmds::execute_report(&input, &options, &mut out) {
        Ok(()) => 0,
        Err(e) if e.is_broken_pipe() => {
            debug!("stdout closed early: {e}");
            0
        }
        Err(e) if e.is_input_error() => {
            writeln!(out, "Error: {e}")?;
            out.flush()?;
            // A missing file is a recoverable outcome; an unreadable one is a failure
            match e {
                AppError::InputNotFound(_) => 0,
                _ => 1,
            }
        }
        Err(e) => return Err(e),
    };

    // Exit with appropriate code
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
