use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of an operation, unique within one pipeline store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(pub u64);

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op-{}", self.0)
    }
}

/// The closed set of rename operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationKind {
    FindReplace,
    Prefix,
    Suffix,
    RemoveCharacters,
    CaseChange,
    Numbering,
    DateTime,
    Regex,
    Trim,
    Extension,
}

impl OperationKind {
    pub const ALL: [OperationKind; 10] = [
        OperationKind::FindReplace,
        OperationKind::Prefix,
        OperationKind::Suffix,
        OperationKind::RemoveCharacters,
        OperationKind::CaseChange,
        OperationKind::Numbering,
        OperationKind::DateTime,
        OperationKind::Regex,
        OperationKind::Trim,
        OperationKind::Extension,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::FindReplace => "find-replace",
            OperationKind::Prefix => "prefix",
            OperationKind::Suffix => "suffix",
            OperationKind::RemoveCharacters => "remove-characters",
            OperationKind::CaseChange => "case-change",
            OperationKind::Numbering => "numbering",
            OperationKind::DateTime => "date-time",
            OperationKind::Regex => "regex",
            OperationKind::Trim => "trim",
            OperationKind::Extension => "extension",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown operation kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for OperationKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FindReplaceConfig {
    pub find: String,
    pub replace: String,
    pub case_sensitive: bool,
    pub use_regex: bool,
    pub replace_all: bool,
}

impl Default for FindReplaceConfig {
    fn default() -> Self {
        Self {
            find: String::new(),
            replace: String::new(),
            case_sensitive: false,
            use_regex: false,
            replace_all: true,
        }
    }
}

/// Shared by the prefix and suffix kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AffixConfig {
    pub text: String,
    pub add_counter: bool,
    pub counter_start: i64,
    pub counter_step: i64,
    pub counter_padding: usize,
}

impl Default for AffixConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            add_counter: false,
            counter_start: 1,
            counter_step: 1,
            counter_padding: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoveMode {
    #[default]
    FirstN,
    LastN,
    Range,
    Characters,
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RemoveConfig {
    pub mode: RemoveMode,
    pub count: usize,
    pub start: usize,
    pub end: usize,
    pub characters: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseTarget {
    Upper,
    #[default]
    Lower,
    Title,
    Sentence,
    Camel,
    Snake,
    Kebab,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseConfig {
    pub target: CaseTarget,
}

/// Where a generated token goes relative to the working name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    Prefix,
    Suffix,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NumberingConfig {
    pub position: Placement,
    pub start_number: i64,
    pub step: i64,
    pub padding: usize,
    pub separator: String,
    pub format: String,
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            position: Placement::Prefix,
            start_number: 1,
            step: 1,
            padding: 3,
            separator: "_".to_string(),
            format: "[N]".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateSource {
    #[default]
    Current,
    Modified,
    /// Reads the modification timestamp; creation time is not supplied by file acquisition
    Created,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DateTimeConfig {
    pub source: DateSource,
    pub format: String,
    pub position: Placement,
    pub separator: String,
}

impl Default for DateTimeConfig {
    fn default() -> Self {
        Self {
            source: DateSource::Current,
            format: "YYYY-MM-DD".to_string(),
            position: Placement::Prefix,
            separator: "_".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RegexConfig {
    pub pattern: String,
    pub replacement: String,
    pub flags: String,
}

impl Default for RegexConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            replacement: String::new(),
            flags: "g".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TrimConfig {
    pub trim_whitespace: bool,
    pub collapse_spaces: bool,
    pub remove_chars: String,
    pub replace_spaces_with: String,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            collapse_spaces: true,
            remove_chars: String::new(),
            replace_spaces_with: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionAction {
    Change,
    Add,
    Remove,
    #[default]
    Lowercase,
    Uppercase,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ExtensionConfig {
    pub action: ExtensionAction,
    pub new_extension: String,
}

/// Configuration of an operation; the variant is the operation's kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "config", rename_all = "kebab-case")]
pub enum OperationConfig {
    FindReplace(FindReplaceConfig),
    Prefix(AffixConfig),
    Suffix(AffixConfig),
    RemoveCharacters(RemoveConfig),
    CaseChange(CaseConfig),
    Numbering(NumberingConfig),
    DateTime(DateTimeConfig),
    Regex(RegexConfig),
    Trim(TrimConfig),
    Extension(ExtensionConfig),
}

/// A single step of the rename pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub id: OperationId,

    #[serde(default = "enabled_by_default")]
    pub enabled: bool,

    #[serde(flatten)]
    pub config: OperationConfig,
}

fn enabled_by_default() -> bool {
    true
}

/// Ordered list of operations; applied strictly in list order
pub type Pipeline = Vec<Operation>;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Config patch must be a JSON object")]
    NotAnObject,

    #[error("Invalid config for {kind}: {source}")]
    Invalid {
        kind: OperationKind,
        #[source]
        source: serde_json::Error,
    },
}
