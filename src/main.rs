//! LED sprite runner (default binary).
//!
//! Draws the compiled-in 16x16 sprite centered on the panel at ~20 fps until
//! Ctrl-C. Without a panel attached, `--backend terminal` (the default)
//! previews it in a truecolor terminal.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use led_sprite::app;
use led_sprite::config::{self, Config};
use led_sprite::engine::RunFlag;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_matches(&config::command().get_matches());

    let status = app::report(run(&config), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(status)
}

fn run(config: &Config) -> Result<()> {
    let flag = RunFlag::new();
    flag.install_interrupt_handler()
        .context("failed to install interrupt handler")?;

    log::debug!("{config:?}");
    app::run(config, &flag)?;
    Ok(())
}
