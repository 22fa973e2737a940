use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use reflect_core::VERSION;

/// Reflect - a personal journal with moods, categories and writing streaks
#[derive(Parser)]
#[command(name = "reflect")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal database
    #[arg(short, long, global = true, env = "REFLECT_JOURNAL")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the journal will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry title (at most 100 characters)
    #[arg(long)]
    pub title: String,

    /// Entry body
    #[arg(long)]
    pub body: String,

    /// Mood tag (e.g. happy, calm, anxious)
    #[arg(long)]
    pub mood: Option<String>,

    /// Category tag (e.g. work, health, travel)
    #[arg(long)]
    pub category: Option<String>,

    /// Attachment reference (path or URI)
    #[arg(long)]
    pub attachment: Option<String>,

    /// Mark the entry as a favorite
    #[arg(long)]
    pub favorite: bool,

    /// Set custom creation date/time (ISO-8601 or YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New body
    #[arg(long)]
    pub body: Option<String>,

    /// New mood tag
    #[arg(long, conflicts_with = "clear_mood")]
    pub mood: Option<String>,

    /// Remove the mood tag
    #[arg(long)]
    pub clear_mood: bool,

    /// New category tag
    #[arg(long, conflicts_with = "clear_category")]
    pub category: Option<String>,

    /// Remove the category tag
    #[arg(long)]
    pub clear_category: bool,

    /// New attachment reference
    #[arg(long, conflicts_with = "clear_attachment")]
    pub attachment: Option<String>,

    /// Remove the attachment
    #[arg(long)]
    pub clear_attachment: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive text search over title and body
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by mood tag
    #[arg(long, conflicts_with = "category")]
    pub mood: Option<String>,

    /// Filter by category tag
    #[arg(long)]
    pub category: Option<String>,

    /// Only favorite entries
    #[arg(long, conflicts_with_all = ["search", "mood", "category"])]
    pub favorites: bool,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for commands that only take an entry ID
#[derive(Args)]
pub struct IdArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and journal database
    Init(InitArgs),

    /// Add a new entry
    Add(AddArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// List entries, newest first
    List(ListArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// Delete an entry
    Delete(IdArgs),

    /// Toggle an entry's favorite flag
    Favorite(IdArgs),

    /// Show totals, writing streak and tag distributions
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_favorites_conflicts_with_search() {
        let result = Cli::try_parse_from(["reflect", "list", "--favorites", "--search", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mood_and_category_are_exclusive() {
        let result =
            Cli::try_parse_from(["reflect", "list", "--mood", "sad", "--category", "work"]);
        assert!(result.is_err());
        let ok = Cli::try_parse_from(["reflect", "list", "--search", "x", "--mood", "sad"]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["reflect", "stats", "--verbose", "--log-format", "json"])
            .expect("should parse");
        assert!(cli.verbose);
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
