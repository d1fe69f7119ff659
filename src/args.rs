use crate::{search::DEFAULT_CONFIG_FILE, style::ColorChoice};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const BASE_PATH_ENV: &str = "MAPCHECK_BASE";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// When to colorize the output.
    #[clap(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show where the layer highlighting functions are defined and used.
    Functions {
        /// Map configuration file to search.
        #[clap(default_value = DEFAULT_CONFIG_FILE)]
        file: PathBuf,
    },
    /// Show every mention of the welcome screen, ignoring case.
    Welcome {
        /// Map configuration file to search.
        #[clap(default_value = DEFAULT_CONFIG_FILE)]
        file: PathBuf,
    },
    /// Show lines containing the given keywords with surrounding context.
    Find(FindArgs),
    /// Check that the electricity map implementation is in place.
    Verify {
        /// Root directory of the map project.
        #[clap(env = BASE_PATH_ENV, default_value = ".")]
        base: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct FindArgs {
    /// Literal text to search for. Multiple keywords may be provided.
    #[clap(short = 'k', long = "keyword", required = true)]
    pub keywords: Vec<String>,
    /// Files or directories to search. Directories are searched recursively.
    #[clap(default_value = DEFAULT_CONFIG_FILE)]
    pub paths: Vec<PathBuf>,
    /// Number of lines shown before each match.
    #[clap(short = 'B', long, default_value_t = 1)]
    pub before: usize,
    /// Number of lines shown after each match.
    #[clap(short = 'A', long, default_value_t = 5)]
    pub after: usize,
    /// Searches case insensitively.
    #[clap(short = 'i', long)]
    pub ignore_case: bool,
    /// Search hidden files and directories.
    /// By default, hidden files and directories are skipped.
    #[clap(short = '.', long = "hidden")]
    pub search_hidden: bool,
    /// Include files and directories for searching that match the given glob.
    /// Multiple globs may be provided.
    #[clap(short, long)]
    pub glob: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn find_defaults() {
        let args = Args::try_parse_from(["mapcheck", "find", "-k", "drawElectricityPermits"]).unwrap();
        assert_eq!(args.color, ColorChoice::Auto);
        let Command::Find(find) = args.command else {
            panic!("expected find subcommand");
        };
        assert_eq!(find.keywords, vec!["drawElectricityPermits"]);
        assert_eq!(find.paths, vec![PathBuf::from(DEFAULT_CONFIG_FILE)]);
        assert_eq!((find.before, find.after), (1, 5));
        assert!(!find.ignore_case);
        assert!(!find.search_hidden);
    }

    #[test]
    fn find_requires_keyword() {
        assert!(Args::try_parse_from(["mapcheck", "find", "js"]).is_err());
    }

    #[test]
    fn find_with_options() {
        let args = Args::try_parse_from([
            "mapcheck", "find", "-k", "a", "--keyword", "b", "-i", "-B", "2", "-A", "0", "js",
            "css", "--color", "never",
        ])
        .unwrap();
        assert_eq!(args.color, ColorChoice::Never);
        let Command::Find(find) = args.command else {
            panic!("expected find subcommand");
        };
        assert_eq!(find.keywords, vec!["a", "b"]);
        assert_eq!(find.paths, vec![PathBuf::from("js"), PathBuf::from("css")]);
        assert_eq!((find.before, find.after), (2, 0));
        assert!(find.ignore_case);
    }

    #[test]
    fn verify_takes_explicit_base() {
        let args = Args::try_parse_from(["mapcheck", "verify", "/srv/map"]).unwrap();
        let Command::Verify { base } = args.command else {
            panic!("expected verify subcommand");
        };
        assert_eq!(base, PathBuf::from("/srv/map"));
    }

    #[test]
    fn functions_defaults_to_map_config() {
        let args = Args::try_parse_from(["mapcheck", "functions"]).unwrap();
        let Command::Functions { file } = args.command else {
            panic!("expected functions subcommand");
        };
        assert_eq!(file, PathBuf::from(DEFAULT_CONFIG_FILE));
    }
}
