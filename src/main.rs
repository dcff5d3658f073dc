mod chat;
mod cli;
mod commands;
mod error;
mod layout;
mod merge;
mod output;
mod split;

use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::context::RunContext;

fn main() -> Result<()> {
    setup_broken_pipe_handling();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = RunContext::from_args(cli.dir, cli.json, cli.no_color);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Merge => commands::merge::run(&ctx)?,
        Commands::Split => commands::split::run(&ctx)?,
        Commands::Run => commands::pipeline::run(&ctx)?,
    }

    Ok(())
}

/// Initialize logging based on the `--verbose` flag or `CHATFOLD_LOG` env var.
///
/// - `CHATFOLD_LOG` env var: full filter control (e.g. `CHATFOLD_LOG=chatfold::merge=debug`)
/// - `--verbose`: sets `chatfold` crate to `Debug` level
/// - Otherwise: `Warn` level only
fn init_logging(verbose: bool) {
    let env_var = std::env::var("CHATFOLD_LOG").ok();

    let mut builder = env_logger::Builder::new();
    builder.format_target(true);
    builder.format_module_path(false);

    if let Some(ref filter) = env_var {
        builder.parse_filters(filter);
    } else if verbose {
        builder.filter_module("chatfold", log::LevelFilter::Debug);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }

    builder.init();
}

/// Handle broken pipe gracefully instead of panicking.
///
/// When output is piped to a process that exits early (e.g. `chatfold split --json | head -1`),
/// `println!` panics because the runtime sets SIGPIPE to SIG_IGN. On Unix SIGPIPE is reset
/// to its default; everywhere a panic hook exits quietly on stdout pipe failures.
fn setup_broken_pipe_handling() {
    #[cfg(unix)]
    unsafe {
        // SIGPIPE = 13, SIG_DFL = 0
        unsafe extern "C" {
            fn signal(sig: i32, handler: usize) -> usize;
        }
        signal(13, 0);
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info
            .payload()
            .downcast_ref::<String>()
            .map(|s| s.as_str())
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("");

        if msg.contains("failed printing to stdout") {
            std::process::exit(0);
        }

        default_hook(info);
    }));
}
