//! Command line argument definitions.

use clap::{Parser, Subcommand};

/// CineVerse - Browse movies and TV shows from TMDB in your terminal
#[derive(Parser, Debug)]
#[command(name = "cineverse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one page and exit
    Open {
        /// Route to open: /, /movies, /tv, /movie/ID, /tv/ID, /search?q=TEXT
        #[arg(value_name = "ROUTE", default_value = "/")]
        route: String,

        /// Browse mode: trending, latest, top-rated, genre
        #[arg(short, long)]
        mode: Option<String>,

        /// Genre id or name (genre mode only)
        #[arg(short, long)]
        genre: Option<String>,

        /// Page number
        #[arg(short, long)]
        page: Option<u32>,

        /// Season to expand (TV detail pages only)
        #[arg(short, long)]
        season: Option<u32>,
    },

    /// Start the interactive navigation shell
    Shell {
        /// Route to start on
        #[arg(value_name = "ROUTE", default_value = "/")]
        route: String,
    },

    /// Check TMDB connectivity and credentials
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_open_with_options() {
        let cli = Cli::parse_from([
            "cineverse", "open", "/movies", "--mode", "genre", "--genre", "28", "--page", "3",
        ]);
        match cli.command {
            Commands::Open {
                route,
                mode,
                genre,
                page,
                season,
            } => {
                assert_eq!(route, "/movies");
                assert_eq!(mode.as_deref(), Some("genre"));
                assert_eq!(genre.as_deref(), Some("28"));
                assert_eq!(page, Some(3));
                assert_eq!(season, None);
            }
            other => panic!("Expected Open, got {:?}", other),
        }
    }

    #[test]
    fn test_shell_defaults_to_home() {
        let cli = Cli::parse_from(["cineverse", "--verbose", "shell"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Shell { route } => assert_eq!(route, "/"),
            other => panic!("Expected Shell, got {:?}", other),
        }
    }
}
