use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of score columns in every feedback dataset.
pub const SCORE_CATEGORY_COUNT: usize = 6;

/// Number of free-text columns in every feedback dataset.
pub const TEXT_CATEGORY_COUNT: usize = 3;

/// The six rated dimensions of a seminar, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Importance,
    Methods,
    Results,
    Discussion,
    ResearchQuality,
    PresentationQuality,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; SCORE_CATEGORY_COUNT] = [
        ScoreCategory::Importance,
        ScoreCategory::Methods,
        ScoreCategory::Results,
        ScoreCategory::Discussion,
        ScoreCategory::ResearchQuality,
        ScoreCategory::PresentationQuality,
    ];

    /// Column position in a score row.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::Importance => "Importance",
            ScoreCategory::Methods => "Methods",
            ScoreCategory::Results => "Results",
            ScoreCategory::Discussion => "Discussion",
            ScoreCategory::ResearchQuality => "Research Quality",
            ScoreCategory::PresentationQuality => "Presentation Quality",
        }
    }

    /// Header markers used when no mapping is configured. Exports label
    /// some columns in more than one wording, so any of these may match.
    pub fn default_markers(self) -> &'static [&'static str] {
        match self {
            ScoreCategory::Importance => &["[Importance]"],
            ScoreCategory::Methods => &["[Methods]"],
            ScoreCategory::Results => &["[Results]"],
            ScoreCategory::Discussion => {
                &["[Discussion]", "[Future Discussion]", "[Future_Discussion]"]
            }
            ScoreCategory::ResearchQuality => &[
                "[Research Quality]",
                "[Quality of Research]",
                "[Quality_of_Research]",
            ],
            ScoreCategory::PresentationQuality => &[
                "[Presentation Quality]",
                "[Quality of Presentation]",
                "[Quality_of_Presentation]",
            ],
        }
    }
}

/// The free-text questions of the feedback form, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCategory {
    KeyTakeaways,
    Strengths,
    Improvements,
}

impl TextCategory {
    pub const ALL: [TextCategory; TEXT_CATEGORY_COUNT] = [
        TextCategory::KeyTakeaways,
        TextCategory::Strengths,
        TextCategory::Improvements,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            TextCategory::KeyTakeaways => "Key Takeaways",
            TextCategory::Strengths => "Strengths",
            TextCategory::Improvements => "Improvements",
        }
    }

    /// Page heading in the rendered report.
    pub fn title(self) -> &'static str {
        match self {
            TextCategory::KeyTakeaways => "Key Takeaways",
            TextCategory::Strengths => "Speaker Strengths",
            TextCategory::Improvements => "Suggestions for Improvement",
        }
    }

    pub fn default_markers(self) -> &'static [&'static str] {
        match self {
            TextCategory::KeyTakeaways => &["Key Takeaways"],
            TextCategory::Strengths => &["Strengths"],
            TextCategory::Improvements => &["Improvement"],
        }
    }
}

/// Either kind of mapped column, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Score(ScoreCategory),
    Text(TextCategory),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Score(c) => write!(f, "score column '{}'", c.label()),
            Category::Text(c) => write!(f, "text column '{}'", c.label()),
        }
    }
}

impl From<ScoreCategory> for Category {
    fn from(c: ScoreCategory) -> Self {
        Category::Score(c)
    }
}

impl From<TextCategory> for Category {
    fn from(c: TextCategory) -> Self {
        Category::Text(c)
    }
}
