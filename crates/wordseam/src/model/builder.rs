//! # Model Builder

use std::env;
use std::path::{Path, PathBuf};

use crate::errors::{WSResult, WordseamError};
use crate::language::Language;
use crate::lexicon::{LexiconEdits, build_cost_table, io::load_word_list_path};
use crate::model::language_model::LanguageModel;

/// Environment variable naming the directory holding built-in
/// dictionary artifacts, consulted when no explicit directory is set.
pub const DICT_DIR_ENV: &str = "WORDSEAM_DICT_DIR";

/// Where the ranked base word list comes from.
#[derive(Clone, Debug)]
enum WordSource {
    /// A built-in language's named artifact.
    Language(Language),

    /// An explicit artifact path ("custom" mode).
    Artifact(PathBuf),

    /// An in-memory word list, most frequent first.
    Words(Vec<String>),
}

/// Builder for [`LanguageModel`].
///
/// Defaults to English, which requires a resolvable dictionary
/// directory; see [`ModelBuilder::dict_dir`] and [`DICT_DIR_ENV`].
///
/// ```rust,ignore
/// use wordseam::{Language, LanguageModel};
///
/// let model = LanguageModel::builder()
///     .language(Language::De)
///     .dict_dir("/opt/wordseam/dicts")
///     .add_words(["palaeoloxodon"])
///     .build()?;
/// ```
#[derive(Clone, Debug)]
pub struct ModelBuilder {
    source: WordSource,
    dict_dir: Option<PathBuf>,
    edits: LexiconEdits,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self {
            source: WordSource::Language(Language::En),
            dict_dir: None,
            edits: LexiconEdits::default(),
        }
    }
}

impl ModelBuilder {
    /// Create a builder with default settings (English).
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a built-in language's dictionary artifact.
    pub fn language(mut self, language: Language) -> Self {
        self.source = WordSource::Language(language);
        self
    }

    /// Use a custom dictionary artifact at the given path.
    ///
    /// The model gets the base spacing rule sets (no per-language
    /// overrides).
    pub fn custom_artifact<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = WordSource::Artifact(path.as_ref().to_path_buf());
        self
    }

    /// Use an in-memory ranked word list, most frequent first.
    pub fn word_list<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = WordSource::Words(words.into_iter().map(Into::into).collect());
        self
    }

    /// Directory holding built-in dictionary artifacts.
    ///
    /// Takes precedence over the [`DICT_DIR_ENV`] environment variable.
    pub fn dict_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.dict_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Words to add to the dictionary.
    ///
    /// Added words are lowercased; by default, words already present in
    /// the base list are dropped (see [`ModelBuilder::overwrite`]).
    pub fn add_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edits.add_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Words to remove from the dictionary.
    pub fn blacklist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edits.blacklist = words.into_iter().map(Into::into).collect();
        self
    }

    /// Insert added words with highest priority (lowest cost).
    pub fn add_to_top(mut self, add_to_top: bool) -> Self {
        self.edits.add_to_top = add_to_top;
        self
    }

    /// Let added words replace base entries of the same spelling,
    /// repositioning them per [`ModelBuilder::add_to_top`]. Useful for
    /// changing split behavior even for existing entries.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.edits.overwrite = overwrite;
        self
    }

    /// Resolve a built-in language's artifact path.
    fn resolve_artifact(&self, language: Language) -> WSResult<PathBuf> {
        let dir = self
            .dict_dir
            .clone()
            .or_else(|| env::var_os(DICT_DIR_ENV).map(PathBuf::from));
        Self::resolve_artifact_in(dir, language)
    }

    /// Resolve an artifact name against an already-determined directory.
    fn resolve_artifact_in(dir: Option<PathBuf>, language: Language) -> WSResult<PathBuf> {
        let name = language.artifact_name();
        match dir {
            Some(dir) => Ok(dir.join(name)),
            None => Err(WordseamError::NoDictionaryDir {
                artifact: name.to_string(),
            }),
        }
    }

    /// Build the [`LanguageModel`].
    ///
    /// ## Returns
    /// The model, or a configuration / artifact error. Failures leave
    /// no partial state behind.
    pub fn build(self) -> WSResult<LanguageModel> {
        let (words, language) = match &self.source {
            WordSource::Language(language) => {
                let path = self.resolve_artifact(*language)?;
                (load_word_list_path(path)?, Some(*language))
            }
            WordSource::Artifact(path) => (load_word_list_path(path)?, None),
            WordSource::Words(words) => (words.clone(), None),
        };

        let table = build_cost_table(words, &self.edits)?;

        log::debug!(
            "model built: language={language:?}, {} words, window {}",
            table.len(),
            table.max_word_len(),
        );

        Ok(LanguageModel::from_parts(table, language))
    }
}
