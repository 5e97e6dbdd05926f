//! Interactive session.
//!
//! The shell owns a transient store, so a login without `--remember` lasts
//! until the shell exits, like a session tied to one browser tab.

use crate::app::App;
use crate::cli::{Command, ShellCommand, ShellLine};
use clap::Parser;
use colored::*;
use eyre::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tasknest_core::{KeyValueStore, MemoryStore};

pub fn run_shell<P: KeyValueStore>(persistent: &P) -> Result<()> {
    let transient = MemoryStore::new();
    let app = App::new(persistent, &transient);

    println!("{}", "TaskNest shell".bright_cyan().bold());
    println!(
        "Type {} for commands, {} to leave",
        "help".yellow(),
        "exit".yellow()
    );

    let mut rl =
        DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

    loop {
        match rl.readline(&format!("{} ", "tasknest>".bright_green())) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);

                match ShellLine::try_parse_from(input.split_whitespace()) {
                    Ok(ShellLine {
                        command: ShellCommand::Exit,
                    }) => break,
                    Ok(ShellLine {
                        command: ShellCommand::App(Command::Shell),
                    }) => println!("Already inside a shell session."),
                    Ok(ShellLine {
                        command: ShellCommand::App(command),
                    }) => match app.execute(command) {
                        Ok(output) => println!("{output}"),
                        Err(err) => println!("{} {err}", "✗".red()),
                    },
                    Err(err) => {
                        let _ = err.print();
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => return Err(eyre::eyre!("Readline error: {}", err)),
        }
    }

    println!("Goodbye!");
    Ok(())
}
