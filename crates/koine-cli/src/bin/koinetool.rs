use clap::{Parser, Subcommand};

use koine_cli::commands::{config_ops, convert_ops, dict_ops, fetch_ops, text_ops};
use koine_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "koinetool", about = "Greek New Testament annotation tool")]
struct Cli {
    /// Custom settings TOML (see settings-export)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom gloss TOML (see gloss-export)
    #[arg(long, global = true)]
    glosses: Option<String>,
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annotate MorphGNT files and write JSON
    Convert {
        /// Corpus file or directory of *-morphgnt.txt files
        input: String,
        /// Output directory
        output_dir: String,
        /// Dictionary (compiled, Strong's XML or TSV)
        #[arg(long)]
        dictionary: Option<String>,
        /// Comma-separated book ids, or "all"
        #[arg(long)]
        books: Option<String>,
    },
    /// Download MorphGNT SBLGNT files and Strong's dictionary
    Fetch {
        /// Output directory
        output_dir: String,
        /// Comma-separated book ids, or "all"
        #[arg(long, default_value = "all")]
        books: String,
    },
    /// Transcribe Greek words into katakana
    Katakana {
        /// Greek words
        #[arg(required = true)]
        words: Vec<String>,
        /// Honour a rough breathing on either vowel of a diphthong
        #[arg(long)]
        either_breathing: bool,
    },
    /// Transliterate Greek words into Latin script
    Translit {
        /// Greek words
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Decode a morphology code
    Decode {
        /// Part-of-speech tag (e.g. V-, N-, RA)
        pos: String,
        /// 8-character morphology code (e.g. 3IAI----)
        code: String,
    },
    /// Compile a dictionary source into the binary format
    DictCompile {
        /// Dictionary source
        #[arg(long, default_value = "strongs")]
        source: String,
        /// Input file
        input_file: String,
        /// Output file
        output_file: String,
    },
    /// Show dictionary info
    DictInfo {
        /// Dictionary file (compiled, Strong's XML or TSV)
        file: String,
    },
    /// Look up a lemma in the dictionary (exact match)
    DictLookup {
        /// Dictionary file
        dict_file: String,
        /// Lemma (accented Greek)
        lemma: String,
    },
    /// Export default glosses as TOML
    GlossExport,
    /// Validate a custom gloss TOML file
    GlossValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }
    if let Some(file) = &cli.glosses {
        config_ops::load_glosses(file);
    }

    match cli.command {
        Command::Convert {
            input,
            output_dir,
            dictionary,
            books,
        } => convert_ops::convert(&input, &output_dir, dictionary.as_deref(), books.as_deref()),
        Command::Fetch { output_dir, books } => fetch_ops::fetch(&output_dir, &books),
        Command::Katakana {
            words,
            either_breathing,
        } => text_ops::katakana_cmd(&words, either_breathing),
        Command::Translit { words } => text_ops::translit_cmd(&words),
        Command::Decode { pos, code } => text_ops::decode_cmd(&pos, &code),
        Command::DictCompile {
            source,
            input_file,
            output_file,
        } => dict_ops::compile(&source, &input_file, &output_file),
        Command::DictInfo { file } => dict_ops::info(&file),
        Command::DictLookup { dict_file, lemma } => dict_ops::lookup(&dict_file, &lemma),
        Command::GlossExport => config_ops::gloss_export(),
        Command::GlossValidate { file } => config_ops::gloss_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
