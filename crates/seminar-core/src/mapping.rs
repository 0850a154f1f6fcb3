//! Header-to-category mapping.
//!
//! Every category is located by marker substrings in the CSV header
//! (compared case-insensitively). A category may list several markers; a
//! header belongs to it when any of them matches, and exactly one header
//! must belong to each category. Column position in the source file is
//! irrelevant.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, MappingError};
use crate::models::category::{Category, SCORE_CATEGORY_COUNT, ScoreCategory, TEXT_CATEGORY_COUNT, TextCategory};

/// Alternative markers for one category. Any one of them may match.
///
/// In JSON this is either a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MarkersRepr")]
pub struct Markers(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum MarkersRepr {
    One(String),
    Many(Vec<String>),
}

impl From<MarkersRepr> for Markers {
    fn from(repr: MarkersRepr) -> Self {
        match repr {
            MarkersRepr::One(marker) => Markers(vec![marker]),
            MarkersRepr::Many(markers) => Markers(markers),
        }
    }
}

impl Markers {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Markers(markers.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    fn is_blank(&self) -> bool {
        self.0.is_empty() || self.0.iter().any(|m| m.trim().is_empty())
    }

    fn matches(&self, header: &str) -> bool {
        let header = header.to_lowercase();
        self.0
            .iter()
            .any(|m| header.contains(&m.trim().to_lowercase()))
    }
}

impl fmt::Display for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, marker) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "'{marker}'")?;
        }
        Ok(())
    }
}

/// Markers identifying the score and free-text columns of a feedback file.
///
/// Categories missing from either map fall back to their default markers,
/// so a JSON override only needs to list the columns that differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(default)]
    pub scores: BTreeMap<ScoreCategory, Markers>,
    #[serde(default)]
    pub text: BTreeMap<TextCategory, Markers>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            scores: ScoreCategory::ALL
                .iter()
                .map(|c| (*c, Markers::new(c.default_markers().iter().copied())))
                .collect(),
            text: TextCategory::ALL
                .iter()
                .map(|c| (*c, Markers::new(c.default_markers().iter().copied())))
                .collect(),
        }
    }
}

/// Source header for each category, as resolved against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    scores: [String; SCORE_CATEGORY_COUNT],
    text: [String; TEXT_CATEGORY_COUNT],
}

impl ResolvedColumns {
    pub fn score_header(&self, category: ScoreCategory) -> &str {
        &self.scores[category.index()]
    }

    pub fn text_header(&self, category: TextCategory) -> &str {
        &self.text[category.index()]
    }
}

impl ColumnMapping {
    pub fn from_json(json: &str) -> Result<Self, MappingError> {
        let mapping: ColumnMapping = serde_json::from_str(json)?;
        mapping.validate()?;
        Ok(mapping)
    }

    pub fn from_path(path: &Path) -> Result<Self, MappingError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), MappingError> {
        for category in ScoreCategory::ALL {
            if self.score_markers(category).is_blank() {
                return Err(MappingError::EmptyMarker(category.into()));
            }
        }
        for category in TextCategory::ALL {
            if self.text_markers(category).is_blank() {
                return Err(MappingError::EmptyMarker(category.into()));
            }
        }
        Ok(())
    }

    pub fn score_markers(&self, category: ScoreCategory) -> Markers {
        self.scores
            .get(&category)
            .cloned()
            .unwrap_or_else(|| Markers::new(category.default_markers().iter().copied()))
    }

    pub fn text_markers(&self, category: TextCategory) -> Markers {
        self.text
            .get(&category)
            .cloned()
            .unwrap_or_else(|| Markers::new(category.default_markers().iter().copied()))
    }

    /// Resolve every category to exactly one of `headers`.
    pub fn resolve<'a, I>(&self, headers: I) -> Result<ResolvedColumns, ExtractError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().collect();

        let scores = ScoreCategory::ALL
            .map(|c| find_header(&headers, c.into(), self.score_markers(c)));
        let text = TextCategory::ALL
            .map(|c| find_header(&headers, c.into(), self.text_markers(c)));

        Ok(ResolvedColumns {
            scores: collect_array(scores)?,
            text: collect_array(text)?,
        })
    }
}

fn find_header(headers: &[&str], category: Category, markers: Markers) -> Result<String, ExtractError> {
    let matches: Vec<&str> = headers
        .iter()
        .copied()
        .filter(|h| markers.matches(h))
        .collect();

    match matches.as_slice() {
        [] => Err(ExtractError::MissingColumn { category, markers }),
        [header] => Ok((*header).to_string()),
        _ => Err(ExtractError::AmbiguousColumn {
            category,
            markers,
            headers: matches.iter().map(|h| h.to_string()).collect(),
        }),
    }
}

fn collect_array<const N: usize>(
    results: [Result<String, ExtractError>; N],
) -> Result<[String; N], ExtractError> {
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, result) in out.iter_mut().zip(results) {
        *slot = result?;
    }
    Ok(out)
}
