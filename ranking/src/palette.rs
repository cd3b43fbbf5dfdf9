//! Reserved-prefix command palette.
//!
//! A query such as `plugin:set` lists the registered maintenance commands,
//! ranked by their description against the text after the prefix.

use crate::config::PaletteConfig;
use crate::error::{RankError, Result};
use crate::item::ResultItem;
use crate::list::ResultList;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Selects the icon a command is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    Positive,
    Negative,
}

/// A single palette entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteCommand {
    /// Short id, e.g. "settings"
    pub id: String,

    /// Shown as the result title and matched against the query
    pub description: String,

    /// Handler invoked when the entry is chosen
    pub command: String,

    pub polarity: Polarity,
}

impl PaletteCommand {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        command: impl Into<String>,
        polarity: Polarity,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            command: command.into(),
            polarity,
        }
    }
}

/// Commands available to the palette, in registration order.
///
/// Built once at startup and shared by reference afterwards.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<PaletteCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The maintenance commands every plugin gets.
    pub fn builtin() -> Self {
        Self {
            commands: vec![
                PaletteCommand::new("help", "Open plugin help", "open_help", Polarity::Positive),
                PaletteCommand::new(
                    "settings",
                    "Open plugin settings directory",
                    "open_settings_dir",
                    Polarity::Positive,
                ),
                PaletteCommand::new(
                    "cache",
                    "Open plugin cache directory",
                    "open_cache_dir",
                    Polarity::Positive,
                ),
                PaletteCommand::new("logs", "Open plugin log file", "open_log", Polarity::Positive),
                PaletteCommand::new(
                    "clear-cache",
                    "Delete plugin cache",
                    "clear_cache",
                    Polarity::Negative,
                ),
            ],
        }
    }

    /// Add a command. Ids must be unique.
    pub fn register(&mut self, command: PaletteCommand) -> Result<()> {
        if self.get(&command.id).is_some() {
            return Err(RankError::InvalidOption(format!(
                "palette command '{}' is already registered",
                command.id
            )));
        }
        info!("Registered palette command '{}'", command.id);
        self.commands.push(command);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&PaletteCommand> {
        self.commands.iter().find(|command| command.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Resolves palette queries against a registry.
pub struct CommandPalette<'a> {
    registry: &'a CommandRegistry,
    config: &'a PaletteConfig,
}

impl<'a> CommandPalette<'a> {
    pub fn new(registry: &'a CommandRegistry, config: &'a PaletteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    pub fn config(&self) -> &PaletteConfig {
        self.config
    }

    /// Whether `query` is addressed to the palette.
    pub fn matches(&self, query: &str) -> bool {
        query.starts_with(&self.config.prefix)
    }

    /// The text after the prefix with surrounding whitespace removed, or
    /// `None` if the prefix is absent.
    pub fn remainder<'q>(&self, query: &'q str) -> Option<&'q str> {
        query.strip_prefix(&self.config.prefix).map(str::trim)
    }

    /// Build the palette results for `query`.
    ///
    /// Returns `Ok(None)` when the query does not carry the prefix. A bare
    /// prefix lists every command in registration order; otherwise commands
    /// are ranked by title and anything at or below the configured minimum
    /// score is dropped. An empty result gets a single placeholder row.
    pub fn resolve(&self, query: &str) -> Result<Option<ResultList>> {
        let Some(remainder) = self.remainder(query) else {
            return Ok(None);
        };

        let mut list: ResultList = self.registry.iter().map(|c| self.to_item(c)).collect();

        if !remainder.is_empty() {
            list.rank(remainder, &self.config.rank_options())?;
        }

        if list.is_empty() {
            list.append(ResultItem::placeholder(
                self.config.no_results_title.clone(),
                self.config.no_results_icon.clone(),
            ));
        }

        debug!(
            "Palette query '{}' resolved to {} items",
            remainder,
            list.len()
        );
        Ok(Some(list))
    }

    fn to_item(&self, command: &PaletteCommand) -> ResultItem {
        let icon = match command.polarity {
            Polarity::Positive => &self.config.positive_icon,
            Polarity::Negative => &self.config.negative_icon,
        };
        ResultItem::new(command.description.clone())
            .with_icon(icon.clone())
            .with_action(command.command.clone(), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(list: &ResultList) -> Vec<&str> {
        list.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_builtin_registry() {
        let registry = CommandRegistry::builtin();
        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.get("settings").map(|c| c.command.as_str()),
            Some("open_settings_dir")
        );
        assert_eq!(
            registry.get("clear-cache").map(|c| c.polarity),
            Some(Polarity::Negative)
        );
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = CommandRegistry::new();
        assert!(registry.is_empty());
        registry
            .register(PaletteCommand::new("a", "A", "run_a", Polarity::Positive))
            .unwrap();

        let err = registry
            .register(PaletteCommand::new("a", "Other", "run_other", Polarity::Negative))
            .unwrap_err();

        assert!(matches!(err, RankError::InvalidOption(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_non_palette_query() {
        let registry = CommandRegistry::builtin();
        let config = PaletteConfig::default();
        let palette = CommandPalette::new(&registry, &config).unwrap();

        assert!(!palette.matches("settings"));
        assert_eq!(palette.remainder("settings"), None);
        assert_eq!(palette.resolve("settings").unwrap(), None);
    }

    #[test]
    fn test_bare_prefix_lists_everything() {
        let registry = CommandRegistry::builtin();
        let config = PaletteConfig::default();
        let palette = CommandPalette::new(&registry, &config).unwrap();

        let list = palette.resolve("plugin:").unwrap().unwrap();

        assert_eq!(
            titles(&list),
            vec![
                "Open plugin help",
                "Open plugin settings directory",
                "Open plugin cache directory",
                "Open plugin log file",
                "Delete plugin cache",
            ]
        );
        let item = &list.items()[4];
        assert_eq!(item.icon_path, "icons/palette_negative.png");
        assert_eq!(item.action.command, "clear_cache");
        assert_eq!(item.action.parameter(), "");
    }

    #[test_log::test]
    fn test_palette_ranks_remainder() {
        let registry = CommandRegistry::builtin();
        let config = PaletteConfig::default();
        let palette = CommandPalette::new(&registry, &config).unwrap();

        let list = palette.resolve("plugin: cache").unwrap().unwrap();

        // "Delete plugin cache" is shorter than "Open plugin cache directory".
        assert_eq!(
            titles(&list),
            vec!["Delete plugin cache", "Open plugin cache directory"]
        );
    }

    #[test]
    fn test_palette_no_results() {
        let registry = CommandRegistry::builtin();
        let config = PaletteConfig::default();
        let palette = CommandPalette::new(&registry, &config).unwrap();

        let list = palette.resolve("plugin:zzz").unwrap().unwrap();

        assert_eq!(titles(&list), vec!["No Results"]);
        assert!(!list.items()[0].action.is_actionable());
        assert_eq!(list.items()[0].icon_path, "icons/palette_empty.png");
    }

    #[test]
    fn test_palette_with_empty_registry() {
        let registry = CommandRegistry::new();
        let config = PaletteConfig::default();
        let palette = CommandPalette::new(&registry, &config).unwrap();

        let list = palette.resolve("plugin:").unwrap().unwrap();
        assert_eq!(titles(&list), vec!["No Results"]);
    }

    #[test]
    fn test_palette_rejects_invalid_config() {
        let registry = CommandRegistry::new();
        let config = PaletteConfig {
            prefix: String::new(),
            ..Default::default()
        };
        assert!(CommandPalette::new(&registry, &config).is_err());
    }
}
