//! Proof-Trail CLI - chain-of-custody log operations: keygen, append, verify.

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

use commands::{append, canonicalize, keygen, list, verify};

/// Record profile stored in a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Flat custody events (camelCase, bare hex digests).
    Event,
    /// Extensible envelopes (snake_case, `sha256:`-tagged digests).
    Envelope,
}

#[derive(Parser)]
#[command(name = "prooftrail")]
#[command(about = "Tamper-evident custody log operations: keygen, append, verify")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an Ed25519 keypair as PKCS#8 / SPKI PEM files
    Keygen {
        /// Directory the key files are written into
        #[arg(long, default_value = ".")]
        out_dir: String,
    },
    /// Append a custody event continuing the chain in a log
    Append {
        /// Path to the log file (created if missing)
        log: String,
        /// Session identifier
        #[arg(long)]
        session: String,
        /// Task identifier
        #[arg(long)]
        task: String,
        /// Acting agent identifier
        #[arg(long)]
        agent: String,
        /// Model name
        #[arg(long)]
        model: String,
        /// Tool name, if a tool was invoked
        #[arg(long)]
        tool: Option<String>,
        /// Step input content (hashed into the event)
        #[arg(long)]
        input: String,
        /// Step output content (hashed into the event)
        #[arg(long)]
        output: String,
        /// Private key PEM used to sign the event's digest
        #[arg(long)]
        key: Option<String>,
    },
    /// Verify the hash chain of a log
    Verify {
        /// Path to the log file
        log: String,
        /// Record profile stored in the log
        #[arg(long, value_enum, default_value_t = Profile::Event)]
        profile: Profile,
        /// Exit with error code if the chain is corrupted
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List records in a log
    List {
        /// Path to the log file
        log: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Keygen { out_dir } => keygen::run(out_dir),
        Commands::Append {
            log,
            session,
            task,
            agent,
            model,
            tool,
            input,
            output,
            key,
        } => append::run(append::AppendArgs {
            log,
            session,
            task,
            agent,
            model,
            tool,
            input,
            output,
            key,
        }),
        Commands::Verify {
            log,
            profile,
            strict,
            json,
        } => verify::run(log, profile, strict, json),
        Commands::List { log, json } => list::run(log, json),
        Commands::Canonicalize { input } => canonicalize::run(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
