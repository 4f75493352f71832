use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use ipa_cli::commands::translate_ops::DictOptions;
use ipa_cli::commands::{catalog_ops, config_ops, translate_ops};
use ipa_core::settings::UnknownMode;

#[derive(Parser)]
#[command(name = "ipatool", about = "Dictionary-based IPA transcription")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    config: Option<String>,
    /// Write JSON trace logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct DictArgs {
    /// Directory containing <code>.json dictionaries
    #[arg(long)]
    dict_dir: Option<PathBuf>,
    /// Language to load (repeatable, later ones win on conflicts)
    #[arg(short, long = "lang")]
    langs: Vec<String>,
    /// Disable the tokenization cache
    #[arg(long)]
    no_cache: bool,
}

impl From<DictArgs> for DictOptions {
    fn from(a: DictArgs) -> Self {
        DictOptions {
            dict_dir: a.dict_dir,
            languages: a.langs,
            no_cache: a.no_cache,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnknownArg {
    /// Omit unknown characters (logged as warnings)
    Drop,
    /// Copy unknown characters through unchanged
    Keep,
    /// Copy unknown characters wrapped in brackets
    Mark,
}

impl From<UnknownArg> for UnknownMode {
    fn from(a: UnknownArg) -> Self {
        match a {
            UnknownArg::Drop => UnknownMode::Drop,
            UnknownArg::Keep => UnknownMode::Keep,
            UnknownArg::Mark => UnknownMode::Mark,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List supported languages (* = loaded by default)
    Languages,
    /// Show how a sentence is segmented
    Tokenize {
        /// Sentence to tokenize (reads stdin lines if omitted)
        sentence: Option<String>,
        #[command(flatten)]
        dict: DictArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Transcribe a sentence to IPA
    Translate {
        /// Sentence to translate (reads stdin lines if omitted)
        sentence: Option<String>,
        #[command(flatten)]
        dict: DictArgs,
        /// How to handle characters with no dictionary entry
        #[arg(long, value_enum)]
        unknown: Option<UnknownArg>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every pronunciation listed for a word
    Lookup {
        word: String,
        #[command(flatten)]
        dict: DictArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
}

fn main() {
    let cli = Cli::parse();

    ipa_core::trace_init::init_tracing(cli.log_dir.as_deref());
    if let Some(ref file) = cli.config {
        config_ops::load_custom(file);
    }

    match cli.command {
        Command::Languages => catalog_ops::languages(),
        Command::Tokenize {
            sentence,
            dict,
            json,
        } => translate_ops::tokenize_cmd(&dict.into(), sentence.as_deref(), json),
        Command::Translate {
            sentence,
            dict,
            unknown,
            json,
        } => translate_ops::translate_cmd(
            &dict.into(),
            sentence.as_deref(),
            unknown.map(UnknownMode::from),
            json,
        ),
        Command::Lookup { word, dict, json } => {
            translate_ops::lookup_cmd(&dict.into(), &word, json)
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
