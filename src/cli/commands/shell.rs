//! Interactive navigation shell.

use crate::core::navigator::Navigator;
use crate::core::page_state::BrowseMode;
use crate::core::route::Route;
use crate::models::config::Config;
use crate::services::tmdb::Transport;
use anyhow::Result;
use colored::Colorize;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Go(Route),
    Search(String),
    Open(usize),
    Next,
    Prev,
    Mode(BrowseMode),
    Genre(String),
    Season(u32),
    Show,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let needs_arg = |what: &str| format!("'{}' needs {}", word, what);

        match word.to_lowercase().as_str() {
            "" | "show" | "r" => Ok(ShellCommand::Show),
            "home" => Ok(ShellCommand::Go(Route::Home)),
            "movies" => Ok(ShellCommand::Go(Route::Movies)),
            "tv" => Ok(ShellCommand::Go(Route::Tv)),
            "go" => rest
                .parse()
                .map(ShellCommand::Go)
                .map_err(|e: crate::Error| e.to_string()),
            "search" | "s" => Ok(ShellCommand::Search(rest.to_string())),
            "open" | "o" => rest
                .parse()
                .map(ShellCommand::Open)
                .map_err(|_| needs_arg("a listed number")),
            "next" | "n" => Ok(ShellCommand::Next),
            "prev" | "p" => Ok(ShellCommand::Prev),
            "mode" | "m" => rest
                .parse()
                .map(ShellCommand::Mode)
                .map_err(|e: crate::Error| e.to_string()),
            "genre" | "g" if !rest.is_empty() => Ok(ShellCommand::Genre(rest.to_string())),
            "genre" | "g" => Err(needs_arg("a genre id, name or 'all'")),
            "season" => rest
                .parse()
                .map(ShellCommand::Season)
                .map_err(|_| needs_arg("a season number")),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            // A bare number opens the listed title
            _ => line
                .parse()
                .map(ShellCommand::Open)
                .map_err(|_| format!("Unknown command: {}", word)),
        }
    }
}

/// What happened after running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The page changed and should be redrawn.
    Redraw,
    /// Nothing to do; the control is disabled or absent here.
    Ignored,
    /// Output already printed.
    Handled,
    Quit,
}

/// Execute shell command.
pub async fn execute_shell(config: &Config, route: &str) -> Result<()> {
    let route: Route = route.parse()?;
    let mut navigator = super::open_navigator(config, route).await?;
    println!("{}", navigator.render());
    println!();
    println!("{}", "Type 'help' for commands.".dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_prompt(navigator.route());
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.red());
                continue;
            }
        };

        match run(&mut navigator, command).await {
            Outcome::Redraw => println!("{}", navigator.render()),
            Outcome::Ignored => println!("{}", "Nothing to do here.".yellow()),
            Outcome::Handled => {}
            Outcome::Quit => break,
        }
    }

    Ok(())
}

/// Apply one command to the navigator.
pub async fn run<T: Transport>(navigator: &mut Navigator<T>, command: ShellCommand) -> Outcome {
    let changed = match command {
        ShellCommand::Go(route) => {
            navigator.navigate(route).await;
            true
        }
        ShellCommand::Search(text) => match Route::search(&text) {
            Some(route) => {
                navigator.navigate(route).await;
                true
            }
            None => false,
        },
        ShellCommand::Open(n) => navigator.open_listed(n).await,
        ShellCommand::Next => navigator.next_page().await,
        ShellCommand::Prev => navigator.prev_page().await,
        ShellCommand::Mode(mode) => navigator.select_mode(mode).await,
        ShellCommand::Genre(input) => navigator.select_genre(&input).await,
        ShellCommand::Season(n) => navigator.toggle_season(n).await,
        ShellCommand::Show => true,
        ShellCommand::Help => {
            print_help();
            return Outcome::Handled;
        }
        ShellCommand::Quit => return Outcome::Quit,
    };

    if changed {
        Outcome::Redraw
    } else {
        Outcome::Ignored
    }
}

fn print_prompt(route: &Route) {
    use std::io::Write;

    print!("{} ", format!("cineverse {}>", route).cyan());
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!("{}", "Commands:".bold());
    for (usage, what) in [
        ("home | movies | tv", "Go to a browse page"),
        ("go <route>", "Go to /, /movies, /tv, /movie/ID, /tv/ID or /search?q=TEXT"),
        ("search <text>", "Search movies, TV shows and people"),
        ("open <n> | <n>", "Open the n-th listed title"),
        ("next | prev", "Change page"),
        ("mode <name>", "trending, latest, top-rated or genre"),
        ("genre <id|name|all>", "Filter by genre (genre mode)"),
        ("season <n>", "Expand or collapse a season (TV detail)"),
        ("show", "Redraw the current page"),
        ("quit", "Leave the shell"),
    ] {
        println!("  {} {}", format!("{:<22}", usage).green(), what);
    }
}
