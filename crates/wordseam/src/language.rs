//! # Built-In Languages

use strum_macros::{Display, EnumIter, EnumString};

use crate::errors::{WSResult, WordseamError};

/// Languages with a named built-in dictionary artifact.
///
/// Codes parse and display in lowercase (`"en"`, `"de"`, ...). Custom
/// dictionaries bypass this enum entirely; see
/// [`crate::model::ModelBuilder::custom_artifact`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// German.
    De,
    /// French.
    Fr,
    /// Spanish.
    Es,
    /// Italian.
    It,
    /// Portuguese.
    Pt,
}

impl Language {
    /// Parse a language code.
    ///
    /// ## Arguments
    /// * `code` - a lowercase two-letter code, e.g. `"en"`.
    ///
    /// ## Returns
    /// The language, or [`WordseamError::UnsupportedLanguage`].
    pub fn from_code(code: &str) -> WSResult<Self> {
        code.parse()
            .map_err(|_| WordseamError::UnsupportedLanguage {
                code: code.to_string(),
            })
    }

    /// The file name of this language's dictionary artifact.
    pub fn artifact_name(&self) -> &'static str {
        match self {
            Language::En => "en_dict.txt.gz",
            Language::De => "de_dict.txt.gz",
            Language::Fr => "fr_dict.txt.gz",
            Language::Es => "es_dict.txt.gz",
            Language::It => "it_dict.txt.gz",
            Language::Pt => "pt_dict.txt.gz",
        }
    }
}
