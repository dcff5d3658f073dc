use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "chatfold",
    version = env!("CHATFOLD_VERSION"),
    about = "Merge voice-note transcripts into a chat export and split it into parts"
)]
pub struct Cli {
    /// Directory holding _chat.txt and transcriptions/ (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output (transcript lookups, part boundaries)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Runs merge then split when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Replace voice-note lines in _chat.txt with transcripts, writing chat_2.txt
    Merge,

    /// Split chat_2.txt into chats_divided/chat_partNNN.txt
    Split,

    /// Merge, then split
    Run,
}
