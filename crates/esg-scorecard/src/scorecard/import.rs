use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::catalog::{QuestionCatalog, QuestionId};
use super::disclosure::DisclosureSheet;
use super::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum DisclosureImportError {
    #[error("failed to read disclosure export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid disclosure CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: '{value}' is not a yes/no answer")]
    InvalidAnswer { row: usize, value: String },
    #[error("row {row}: {source}")]
    Question {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

/// Reads `Question,Answer` CSV exports into a disclosure sheet.
///
/// Blank answers leave the question unanswered so completeness is still
/// enforced at evaluation time.
pub struct DisclosureCsvImporter;

impl DisclosureCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        catalog: &QuestionCatalog,
    ) -> Result<DisclosureSheet, DisclosureImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, catalog)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        catalog: &QuestionCatalog,
    ) -> Result<DisclosureSheet, DisclosureImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut sheet = DisclosureSheet::new();

        for (index, record) in csv_reader.deserialize::<DisclosureRow>().enumerate() {
            // Header is line 1.
            let row = index + 2;
            let DisclosureRow { question, answer } = record?;

            let id: QuestionId = question.parse().map_err(|_| DisclosureImportError::Question {
                row,
                source: ValidationError::UnknownQuestion(question.clone()),
            })?;

            if !catalog.contains(&id) {
                return Err(DisclosureImportError::Question {
                    row,
                    source: ValidationError::UnknownQuestion(question),
                });
            }

            let Some(raw) = answer else {
                continue;
            };
            let yes = parse_answer(&raw)
                .ok_or(DisclosureImportError::InvalidAnswer { row, value: raw })?;

            sheet
                .answer(catalog, id, yes)
                .map_err(|source| DisclosureImportError::Question { row, source })?;
        }

        Ok(sheet)
    }
}

#[derive(Debug, Deserialize)]
struct DisclosureRow {
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "Answer", default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_answer(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}
