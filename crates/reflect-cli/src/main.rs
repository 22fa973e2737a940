//! Reflect CLI - a personal journal with moods, categories and writing streaks
//!
//! This is the command-line interface for Reflect. It is a thin layer over
//! `reflect-core`: every command opens the journal store, performs one
//! operation and renders the result.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};
use tracing::{debug, info_span};

use reflect_core::JournalError;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::constants::ROOT_SPAN_NAME;
use crate::errors::{exit_code_for, CliError};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_format);

    let span = info_span!(ROOT_SPAN_NAME, version = reflect_core::VERSION);
    let _guard = span.enter();

    if let Err(err) = run(&cli) {
        debug!(error = ?err, "Command failed");
        let ui_ctx = UiContext::from_env(false, None, cli.no_color, cli.ascii);
        print_error(&ui_ctx, &err.to_string(), error_hint(&err));
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Some(Commands::Init(args)) => commands::handle_init(cli, args),
        Some(Commands::Add(args)) => commands::handle_add(&ctx, args),
        Some(Commands::Edit(args)) => commands::handle_edit(&ctx, args),
        Some(Commands::List(args)) => commands::handle_list(&ctx, args),
        Some(Commands::Show(args)) => commands::handle_show(&ctx, args),
        Some(Commands::Delete(args)) => commands::handle_delete(&ctx, args),
        Some(Commands::Favorite(args)) => commands::handle_favorite(&ctx, args),
        Some(Commands::Stats(args)) => commands::handle_stats(&ctx, args),
        Some(Commands::Completions(args)) => commands::handle_completions(args.shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

fn error_hint(err: &anyhow::Error) -> Option<&str> {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.hint.as_deref();
    }
    match err.downcast_ref::<JournalError>() {
        Some(JournalError::NotFound(_)) => Some("Run `reflect list` to see entry IDs."),
        _ => None,
    }
}
