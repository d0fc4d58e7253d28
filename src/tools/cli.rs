use clap::Parser;
use log::info;
use std::{fmt::Display, fmt::Formatter, path::PathBuf};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}
impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Verbosity {
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Text file to read for input
    pub file: PathBuf,
    /// Print the code table
    pub show_table: bool,
    /// Print the encoded text as '0'/'1' steps
    pub show_bits: bool,
    /// Decode the encoded text again and compare
    pub check: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            file: PathBuf::new(),
            show_table: false,
            show_bits: false,
            check: false,
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Static Huffman coding of a text file",
    long_about = "
    Counts the characters of a text file, builds a Huffman code for them and encodes
    the text with it. The encoded text is shown as a string of '0' and '1' steps."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    file: PathBuf,

    /// Print the code table
    #[clap(short = 't', long = "table")]
    table: bool,

    /// Print the encoded text
    #[clap(short = 'b', long = "bits")]
    bits: bool,

    /// Decode the encoded text and verify it matches the input
    #[clap(short = 'c', long = "check")]
    check: bool,

    /// Sets verbosity. -v shows errors, -vvvvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: u8,

    /// Suppress everything but the requested output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let verbose = match (args.quiet, args.v) {
            (true, _) => Verbosity::Quiet,
            (false, 0 | 1) => Verbosity::Errors,
            (false, 2) => Verbosity::Warnings,
            (false, 3) => Verbosity::Info,
            (false, 4) => Verbosity::Debug,
            (false, _) => Verbosity::Trace,
        };
        Self {
            file: args.file,
            show_table: args.table,
            show_bits: args.bits,
            check: args.check,
            verbose,
        }
    }
}

/// Parse the command line into HuffOpts and set the log level to match.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    info!("Verbosity set to {}", opts.verbose);
    info!("Getting input from the file {}", opts.file.display());
    opts
}

#[cfg(test)]
mod test {
    use super::{Args, HuffOpts, Verbosity};
    use clap::Parser;

    fn opts(argv: &[&str]) -> HuffOpts {
        HuffOpts::from(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults_test() {
        let o = opts(&["huff", "in.txt"]);
        assert_eq!(o.file.to_str(), Some("in.txt"));
        assert!(!o.show_table && !o.show_bits && !o.check);
        assert_eq!(o.verbose, Verbosity::Errors);
    }

    #[test]
    fn flags_test() {
        let o = opts(&["huff", "-tbc", "-vvvv", "in.txt"]);
        assert!(o.show_table && o.show_bits && o.check);
        assert_eq!(o.verbose, Verbosity::Debug);
    }

    #[test]
    fn quiet_wins_test() {
        let o = opts(&["huff", "-vvv", "--quiet", "in.txt"]);
        assert_eq!(o.verbose, Verbosity::Quiet);
        assert_eq!(o.verbose.level_filter(), log::LevelFilter::Off);
    }

    #[test]
    fn file_is_required_test() {
        assert!(Args::try_parse_from(["huff"]).is_err());
    }
}
