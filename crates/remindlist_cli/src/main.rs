//! Interactive line-oriented front end.
//!
//! # Responsibility
//! - Resolve configuration, start logging and own one session store.
//! - Read commands from stdin and print replies until `quit` or EOF.

mod command;

use command::{parse_command, Command, Session, HELP};
use log::{error, info};
use remindlist_core::{core_version, init_logging, CoreConfig, ReminderStore};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(config.log_level, config.log_dir.as_deref()) {
        eprintln!("logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={} tie_break={}",
        core_version(),
        config.completed_tie_break.as_str()
    );

    let mut session = Session::new(ReminderStore::with_config(config.store_config()));
    println!("remindlist {}", core_version());
    println!("{HELP}");

    match run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_io module=cli status=error error={err}");
            eprintln!("i/o error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let command = match parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("error: {message}");
                continue;
            }
        };
        if command == Command::Quit {
            return Ok(());
        }
        match session.apply(command) {
            Ok(reply) => println!("{reply}"),
            Err(message) => println!("error: {message}"),
        }
    }
}
