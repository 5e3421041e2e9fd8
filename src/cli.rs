use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "murex",
    about = "Minimal generic pattern matcher over pluggable text views",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the lines of a file (or stdin) that match a pattern
    Match {
        /// Pattern over the minimal grammar: literals, ^ $ . *
        pattern: String,

        /// Input file; reads stdin when omitted
        file: Option<String>,

        /// Text view to match under
        #[arg(long, value_enum, default_value = "cluster")]
        view: ViewKind,

        /// Print only the count of matching lines
        #[arg(short, long)]
        count: bool,
    },

    /// Compare per-view matching cost over a corpus, line by line
    Bench {
        /// Pattern over the minimal grammar: literals, ^ $ . *
        #[arg(short, long)]
        pattern: String,

        /// Corpus file to match line by line
        #[arg(short, long)]
        corpus: String,

        /// Emit reports as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Which text decomposition the matcher runs over.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    /// UTF-8 code units (bytes)
    Utf8,
    /// UTF-16 code units
    Utf16,
    /// Unicode scalar values
    Scalar,
    /// Extended grapheme clusters
    Cluster,
}
