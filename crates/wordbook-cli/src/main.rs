use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordbook_core::{Dictionary, Language, Translator};
use wordbook_store::import_translations;

mod config;

use self::config::Config;

#[derive(Parser)]
#[command(name = "wordbook", about = "Bidirectional word-translation lookup")]
struct Cli {
    /// Word to translate
    word: String,

    /// Source language name (e.g. "polish")
    #[arg(long)]
    from: Option<String>,

    /// Target language name (e.g. "english")
    #[arg(long)]
    to: Option<String>,

    /// Extra dictionary file to load, as <from>:<to>=<path>
    #[arg(long = "import", value_name = "FROM:TO=PATH")]
    imports: Vec<String>,

    /// Skip the built-in demo dictionaries
    #[arg(long)]
    no_demo: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("WORDBOOK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let translator = build_translator(&cli, &config)?;

    match (&cli.from, &cli.to) {
        (Some(from), Some(to)) => {
            let from = parse_language(from)?;
            let to = parse_language(to)?;
            // Routing and lookup errors are rendered in place of a result.
            match translator.translate_word(&cli.word, from, to) {
                Ok(candidates) => println!("{}", render_candidates(candidates)),
                Err(e) => println!("{e}"),
            }
        }
        (None, None) => {
            let results = translator.detect_language_translate_word(&cli.word);
            if results.is_empty() {
                println!("'{}' not found in any held dictionary", cli.word);
            }
            for (pair, candidates) in translator.detect_language(&cli.word).iter().zip(results) {
                println!("{} -> {}: {}", pair.0, pair.1, render_candidates(candidates));
            }
        }
        _ => bail!("--from and --to must be given together"),
    }

    Ok(())
}

fn build_translator(cli: &Cli, config: &Config) -> anyhow::Result<Translator> {
    let mut translator = Translator::new();

    if let Some(dir) = &config.data_dir {
        for (from, to, path) in scan_data_dir(dir)? {
            let mut dictionary = Dictionary::new(from, to);
            import_translations(&mut dictionary, &path)
                .with_context(|| format!("loading {}", path.display()))?;
            translator.add_dictionary(dictionary);
        }
    }

    for spec in &cli.imports {
        let (from, to, path) = parse_import_spec(spec)?;
        let mut dictionary = Dictionary::new(from, to);
        import_translations(&mut dictionary, &path)
            .with_context(|| format!("loading {}", path.display()))?;
        translator.add_dictionary(dictionary);
    }

    if translator.is_empty() && !cli.no_demo {
        seed_demo_dictionaries(&mut translator);
    }

    tracing::debug!("holding {} dictionaries: {translator}", translator.len());
    Ok(translator)
}

/// Files named `<from>_<to>.json` become dictionaries; anything else in the
/// directory is skipped with a warning.
fn scan_data_dir(dir: &Path) -> anyhow::Result<Vec<(Language, Language, PathBuf)>> {
    let mut found = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("reading data dir {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        match pair_from_stem(stem) {
            Some((from, to)) => found.push((from, to, path)),
            None => tracing::warn!("skipping {}: not a <from>_<to>.json name", path.display()),
        }
    }
    // Deterministic load order regardless of directory iteration order.
    found.sort_by(|a, b| a.2.cmp(&b.2));
    Ok(found)
}

fn pair_from_stem(stem: &str) -> Option<(Language, Language)> {
    let (from, to) = stem.split_once('_')?;
    Some((Language::from_name(from)?, Language::from_name(to)?))
}

fn parse_import_spec(spec: &str) -> anyhow::Result<(Language, Language, PathBuf)> {
    let (pair, path) = spec
        .split_once('=')
        .with_context(|| format!("bad --import '{spec}': expected <from>:<to>=<path>"))?;
    let (from, to) = pair
        .split_once(':')
        .with_context(|| format!("bad --import '{spec}': expected <from>:<to>=<path>"))?;
    Ok((parse_language(from)?, parse_language(to)?, PathBuf::from(path)))
}

fn parse_language(name: &str) -> anyhow::Result<Language> {
    Language::from_name(name).with_context(|| {
        let known: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
        format!("unknown language '{name}' (known: {})", known.join(", "))
    })
}

fn render_candidates(candidates: &std::collections::HashSet<String>) -> String {
    let mut list: Vec<&str> = candidates.iter().map(String::as_str).collect();
    list.sort_unstable();
    list.join(", ")
}

fn seed_demo_dictionaries(translator: &mut Translator) {
    let mut pol_eng = Dictionary::new(Language::Polish, Language::English);
    pol_eng.add_translation("kot", ["cat"]);
    pol_eng.add_translation("pasta", ["paste"]);
    pol_eng.add_translation("makaron", ["pasta"]);
    pol_eng.add_translation("herb", ["crest"]);
    pol_eng.add_translation("zioło", ["herb"]);
    pol_eng.add_translation("szkło", ["glass"]);
    pol_eng.add_translation("szklanka", ["glass"]);
    pol_eng.add_translation("wiosna", ["spring"]);
    pol_eng.add_translation("sprężyna", ["spring"]);

    let mut eng_pol = Dictionary::new(Language::English, Language::Polish);
    eng_pol.add_translation("cat", ["kot"]);
    eng_pol.add_translation("spring", ["wiosna", "sprężyna"]);

    let mut pol_esp = Dictionary::new(Language::Polish, Language::Spanish);
    pol_esp.add_translation("kot", ["gato"]);

    translator.add_dictionary(pol_eng);
    translator.add_dictionary(eng_pol);
    translator.add_dictionary(pol_esp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_from_stem_resolves_known_names() {
        assert_eq!(
            pair_from_stem("polish_english"),
            Some((Language::Polish, Language::English))
        );
        assert_eq!(pair_from_stem("polish"), None);
        assert_eq!(pair_from_stem("polish_klingon"), None);
    }

    #[test]
    fn parse_import_spec_accepts_pair_and_path() {
        let (from, to, path) = parse_import_spec("polish:english=data/pol_eng.json").unwrap();
        assert_eq!((from, to), (Language::Polish, Language::English));
        assert_eq!(path, PathBuf::from("data/pol_eng.json"));
    }

    #[test]
    fn parse_import_spec_rejects_bad_shapes() {
        assert!(parse_import_spec("polish:english").is_err());
        assert!(parse_import_spec("polish=path.json").is_err());
    }

    #[test]
    fn demo_dictionaries_cover_both_directions() {
        let mut translator = Translator::new();
        seed_demo_dictionaries(&mut translator);

        assert!(
            translator
                .translate_word("kot", Language::Polish, Language::Spanish)
                .is_ok()
        );
        assert!(
            translator
                .translate_word("spring", Language::English, Language::Polish)
                .is_ok()
        );
        assert_eq!(translator.detect_language_translate_word("kot").len(), 2);
    }
}
