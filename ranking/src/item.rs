use serde::{Deserialize, Serialize};

/// What the host invokes when a result is chosen.
///
/// Every action carries exactly one positional parameter, even when it is
/// empty. The fixed-size array keeps that true on the wire as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Name of the handler to invoke
    pub command: String,

    /// Single positional argument passed to the handler
    pub parameters: [String; 1],

    /// Whether the host stays open after the action runs
    #[serde(default = "default_keep_open")]
    pub keep_open_after_action: bool,
}

fn default_keep_open() -> bool {
    true
}

impl Action {
    /// Create a new action
    pub fn new(command: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            parameters: [parameter.into()],
            keep_open_after_action: default_keep_open(),
        }
    }

    /// The single positional argument
    pub fn parameter(&self) -> &str {
        &self.parameters[0]
    }

    /// Actions with no command are placeholders the host cannot run.
    pub fn is_actionable(&self) -> bool {
        !self.command.is_empty()
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// One rankable, actionable entry shown by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    /// Primary display text
    pub title: String,

    /// Secondary display text
    #[serde(default)]
    pub subtitle: String,

    /// Icon reference, passed through untouched
    #[serde(default)]
    pub icon_path: String,

    /// Invocation descriptor
    #[serde(default)]
    pub action: Action,
}

impl ResultItem {
    /// Create an item with only a title; everything else takes its default.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            icon_path: String::new(),
            action: Action::default(),
        }
    }

    /// A non-actionable row, e.g. "No Results".
    pub fn placeholder(title: impl Into<String>, icon_path: impl Into<String>) -> Self {
        Self::new(title).with_icon(icon_path)
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_icon(mut self, icon_path: impl Into<String>) -> Self {
        self.icon_path = icon_path.into();
        self
    }

    /// Set the command and its single parameter. Keeps the current
    /// `keep_open_after_action` value.
    pub fn with_action(mut self, command: impl Into<String>, parameter: impl Into<String>) -> Self {
        let keep_open = self.action.keep_open_after_action;
        self.action = Action::new(command, parameter);
        self.action.keep_open_after_action = keep_open;
        self
    }

    pub fn keep_open(mut self, keep_open: bool) -> Self {
        self.action.keep_open_after_action = keep_open;
        self
    }
}
