mod args;
mod commands;
mod global_settings;

use crate::args::build_cli;
use crate::global_settings::{Domain, GlobalSettings};
use anyhow::Result;
use log::debug;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let settings = GlobalSettings::new(&matches);

    env_logger::Builder::new()
        .filter_level(settings.log_level())
        .parse_default_env()
        .init();
    debug!("domain={:?} json={}", settings.domain, settings.json);

    match matches.subcommand() {
        Some(("completions", sub)) => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell").copied()
            {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
        }
        Some((name, sub)) => {
            let output = match settings.domain {
                Domain::Int4 => commands::run::<i32>(name, sub, &settings)?,
                Domain::Float8 => commands::run::<f64>(name, sub, &settings)?,
            };
            println!("{}", output);
        }
        None => {}
    }

    Ok(())
}
