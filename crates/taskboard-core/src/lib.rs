pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod session;

use std::ffi::OsString;
use std::io::{
  self,
  IsTerminal,
  Read
};

use clap::Parser;
use tracing::{
  debug,
  info
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let pre =
    cli::preprocess_args(&raw_args);
  let cli = cli::GlobalCli::parse_from(
    pre.cleaned_args
  );

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting taskboard"
  );
  debug!(?pre.rc_overrides, "preprocessed rc overrides");

  let mut cfg = config::Config::load(
    cli.boardrc.as_deref()
  )?;
  cfg.apply_overrides(
    pre.rc_overrides.into_iter().chain(
      cli
        .rc_overrides
        .iter()
        .map(|kv| {
          (
            kv.key.clone(),
            kv.value.clone()
          )
        })
    )
  );

  let mut session =
    session::Session::from_config(
      &cfg
    )?;

  let stdin = io::stdin();
  let interactive =
    stdin.is_terminal();
  let initial = cli
    .initial_command()
    .map(|line| format!("{line}\n"))
    .unwrap_or_default();

  session.run(
    io::Cursor::new(initial)
      .chain(stdin.lock()),
    io::stdout().lock(),
    interactive
  )?;

  info!("done");
  Ok(())
}
