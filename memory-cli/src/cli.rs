//! CLI parser and command execution.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use memory::{ConversationMemory, ExportedMessage, MemoryConfig};
use prompt::RephraseQueryPrompt;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "convo")]
#[command(about = "Inspect conversation memory snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Default retrieval window (overrides MEMORY_WINDOW_SIZE). 0 = all, negative = skip first N.
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub window_size: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the display transcript of a snapshot.
    Transcript {
        /// Snapshot file: JSON array of {"role", "message"} entries.
        file: PathBuf,
        /// Window for this call; defaults to the configured window size.
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
        /// Leave out the most recent message of the window.
        #[arg(long)]
        previous: bool,
    },
    /// Print the chat-format messages (optional system entry first) as JSON.
    Chat {
        file: PathBuf,
        /// System context (overrides MEMORY_SYSTEM_CONTEXT).
        #[arg(short, long)]
        system: Option<String>,
    },
    /// Print the rephrase-query prompt built from the snapshot's conversation.
    Rephrase {
        file: PathBuf,
        #[arg(short, long)]
        query: String,
        /// Dataframe description; repeat for several dataframes.
        #[arg(short, long = "dataframe")]
        dataframes: Vec<String>,
    },
}

/// Builds a memory from `config` and appends the snapshot stored at `path`.
pub fn load_memory(path: &Path, config: &MemoryConfig) -> Result<ConversationMemory> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read snapshot {}", path.display()))?;
    let snapshot: Vec<ExportedMessage> = serde_json::from_str(&raw)
        .with_context(|| format!("Parse snapshot {}", path.display()))?;

    let mut memory = ConversationMemory::from_config(config);
    memory
        .restore(snapshot)
        .with_context(|| format!("Restore snapshot {}", path.display()))?;
    debug!(
        path = %path.display(),
        count = memory.count(),
        window_size = memory.window_size(),
        "Snapshot loaded"
    );
    Ok(memory)
}

/// Runs one command and returns the text to print.
pub fn run(cli: Cli, config: MemoryConfig) -> Result<String> {
    let config = match cli.window_size {
        Some(size) => config.with_window_size(size),
        None => config,
    };

    match cli.command {
        Commands::Transcript {
            file,
            limit,
            previous,
        } => {
            let memory = load_memory(&file, &config)?;
            let text = if previous {
                memory.get_previous_conversation(limit)?
            } else {
                memory.get_conversation(limit)?
            };
            Ok(text)
        }
        Commands::Chat { file, system } => {
            let config = match system {
                Some(system) => config.with_system_context(system),
                None => config,
            };
            let memory = load_memory(&file, &config)?;
            Ok(serde_json::to_string_pretty(&memory.to_chat_format())?)
        }
        Commands::Rephrase {
            file,
            query,
            dataframes,
        } => {
            let memory = load_memory(&file, &config)?;
            let conversation = memory.get_conversation(None)?;
            Ok(RephraseQueryPrompt::new(query, &dataframes, conversation).render())
        }
    }
}
