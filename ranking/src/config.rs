use crate::error::{RankError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which item text is scored against the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Title only
    Title,
    /// Subtitle only
    Subtitle,
    /// Title and subtitle joined by a single space
    #[default]
    TitleAndSubtitle,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Subtitle => "subtitle",
            SortField::TitleAndSubtitle => "titleAndSubtitle",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(SortField::Title),
            "subtitle" => Ok(SortField::Subtitle),
            "titleAndSubtitle" => Ok(SortField::TitleAndSubtitle),
            other => Err(RankError::UnknownSortField(other.to_string())),
        }
    }
}

/// Options for a single ranking call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankOptions {
    /// Text each item is scored on
    #[serde(default)]
    pub sort_by: SortField,

    /// Keep only items scoring strictly above this (0 disables filtering)
    #[serde(default)]
    pub min_score: f64,

    /// Keep at most this many items (0 disables truncation)
    #[serde(default)]
    pub max_results: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            sort_by: SortField::default(),
            min_score: 0.0,
            max_results: 0,
        }
    }
}

impl RankOptions {
    /// Build options from loosely typed caller values.
    ///
    /// Negative `max_results` is rejected rather than guessed at.
    pub fn from_raw(sort_by: &str, min_score: f64, max_results: i64) -> Result<Self> {
        let sort_by = sort_by.parse()?;
        let max_results = usize::try_from(max_results).map_err(|_| {
            RankError::InvalidOption(format!("max_results must be >= 0, got {max_results}"))
        })?;
        let options = Self {
            sort_by,
            min_score,
            max_results,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn with_sort_by(mut self, sort_by: SortField) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Validate options
    pub fn validate(&self) -> Result<()> {
        if !self.min_score.is_finite() {
            return Err(RankError::InvalidOption(format!(
                "min_score must be finite, got {}",
                self.min_score
            )));
        }
        Ok(())
    }
}

/// Configuration for the reserved-prefix command palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteConfig {
    /// Query prefix that switches to the palette
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Minimum score for a command to stay listed
    #[serde(default = "default_palette_min_score")]
    pub min_score: f64,

    /// Icon for commands with positive polarity
    #[serde(default = "default_positive_icon")]
    pub positive_icon: String,

    /// Icon for commands with negative polarity
    #[serde(default = "default_negative_icon")]
    pub negative_icon: String,

    /// Title of the row shown when nothing matches
    #[serde(default = "default_no_results_title")]
    pub no_results_title: String,

    /// Icon of the row shown when nothing matches
    #[serde(default = "default_no_results_icon")]
    pub no_results_icon: String,
}

fn default_prefix() -> String {
    "plugin:".to_string()
}

fn default_palette_min_score() -> f64 {
    10.0
}

fn default_positive_icon() -> String {
    "icons/palette_positive.png".to_string()
}

fn default_negative_icon() -> String {
    "icons/palette_negative.png".to_string()
}

fn default_no_results_title() -> String {
    "No Results".to_string()
}

fn default_no_results_icon() -> String {
    "icons/palette_empty.png".to_string()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            min_score: default_palette_min_score(),
            positive_icon: default_positive_icon(),
            negative_icon: default_negative_icon(),
            no_results_title: default_no_results_title(),
            no_results_icon: default_no_results_icon(),
        }
    }
}

impl PaletteConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(RankError::InvalidOption(
                "palette prefix must not be empty".to_string(),
            ));
        }
        if !self.min_score.is_finite() {
            return Err(RankError::InvalidOption(format!(
                "palette min_score must be finite, got {}",
                self.min_score
            )));
        }
        Ok(())
    }

    /// Options the palette ranks its commands with.
    pub fn rank_options(&self) -> RankOptions {
        RankOptions::default()
            .with_sort_by(SortField::Title)
            .with_min_score(self.min_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options() {
        let options = RankOptions::default();
        assert_eq!(options.sort_by, SortField::TitleAndSubtitle);
        assert_eq!(options.min_score, 0.0);
        assert_eq!(options.max_results, 0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_sort_field_names() {
        for field in [
            SortField::Title,
            SortField::Subtitle,
            SortField::TitleAndSubtitle,
        ] {
            assert_eq!(field.to_string().parse::<SortField>(), Ok(field));
        }

        assert_eq!(
            "relevance".parse::<SortField>(),
            Err(RankError::UnknownSortField("relevance".to_string()))
        );
    }

    #[test]
    fn test_from_raw() {
        let options = RankOptions::from_raw("title", 10.0, 5).unwrap();
        assert_eq!(
            options,
            RankOptions {
                sort_by: SortField::Title,
                min_score: 10.0,
                max_results: 5,
            }
        );

        assert!(matches!(
            RankOptions::from_raw("score", 0.0, 0),
            Err(RankError::UnknownSortField(_))
        ));
        assert!(matches!(
            RankOptions::from_raw("title", 0.0, -1),
            Err(RankError::InvalidOption(_))
        ));
        assert!(matches!(
            RankOptions::from_raw("title", f64::NAN, 0),
            Err(RankError::InvalidOption(_))
        ));
    }

    #[test]
    fn test_options_from_json() {
        let options: RankOptions =
            serde_json::from_str(r#"{"sortBy":"subtitle","maxResults":3}"#).unwrap();
        assert_eq!(options.sort_by, SortField::Subtitle);
        assert_eq!(options.min_score, 0.0);
        assert_eq!(options.max_results, 3);

        assert!(serde_json::from_str::<RankOptions>(r#"{"sortBy":"bogus"}"#).is_err());
        assert!(serde_json::from_str::<RankOptions>(r#"{"maxResults":-2}"#).is_err());
    }

    #[test]
    fn test_palette_config() {
        let config = PaletteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.prefix, "plugin:");

        let options = config.rank_options();
        assert_eq!(options.sort_by, SortField::Title);
        assert_eq!(options.min_score, 10.0);
        assert_eq!(options.max_results, 0);

        let config = PaletteConfig {
            prefix: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_palette_config_partial_json() {
        let config: PaletteConfig = serde_json::from_str(r#"{"prefix":"pm:"}"#).unwrap();
        assert_eq!(config.prefix, "pm:");
        assert_eq!(config.no_results_title, "No Results");
        assert_eq!(config.min_score, 10.0);
    }
}
