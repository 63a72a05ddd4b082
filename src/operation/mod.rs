mod types;

pub use types::*;

use serde_json::Value;

impl OperationConfig {
    /// Configuration a newly added operation of `kind` starts with
    pub fn default_for(kind: OperationKind) -> Self {
        match kind {
            OperationKind::FindReplace => OperationConfig::FindReplace(FindReplaceConfig::default()),
            OperationKind::Prefix => OperationConfig::Prefix(AffixConfig::default()),
            OperationKind::Suffix => OperationConfig::Suffix(AffixConfig::default()),
            OperationKind::RemoveCharacters => {
                OperationConfig::RemoveCharacters(RemoveConfig::default())
            }
            OperationKind::CaseChange => OperationConfig::CaseChange(CaseConfig::default()),
            OperationKind::Numbering => OperationConfig::Numbering(NumberingConfig::default()),
            OperationKind::DateTime => OperationConfig::DateTime(DateTimeConfig::default()),
            OperationKind::Regex => OperationConfig::Regex(RegexConfig::default()),
            OperationKind::Trim => OperationConfig::Trim(TrimConfig::default()),
            OperationKind::Extension => OperationConfig::Extension(ExtensionConfig::default()),
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            OperationConfig::FindReplace(_) => OperationKind::FindReplace,
            OperationConfig::Prefix(_) => OperationKind::Prefix,
            OperationConfig::Suffix(_) => OperationKind::Suffix,
            OperationConfig::RemoveCharacters(_) => OperationKind::RemoveCharacters,
            OperationConfig::CaseChange(_) => OperationKind::CaseChange,
            OperationConfig::Numbering(_) => OperationKind::Numbering,
            OperationConfig::DateTime(_) => OperationKind::DateTime,
            OperationConfig::Regex(_) => OperationKind::Regex,
            OperationConfig::Trim(_) => OperationKind::Trim,
            OperationConfig::Extension(_) => OperationKind::Extension,
        }
    }

    /// Overlay the fields of `patch` onto this config.
    ///
    /// The merged result is parsed back as the same kind, so a patch can
    /// never change an operation's kind or leave it with a foreign shape.
    pub fn merged(&self, patch: &Value) -> Result<OperationConfig, PatchError> {
        let patch = patch.as_object().ok_or(PatchError::NotAnObject)?;
        let kind = self.kind();

        let mut tagged = serde_json::to_value(self).map_err(|source| PatchError::Invalid {
            kind,
            source,
        })?;

        if let Some(Value::Object(fields)) = tagged.get_mut("config") {
            for (key, value) in patch {
                fields.insert(key.clone(), value.clone());
            }
        }

        serde_json::from_value(tagged).map_err(|source| PatchError::Invalid { kind, source })
    }
}

impl Operation {
    /// A new, enabled operation with the default config for `kind`
    pub fn new(id: OperationId, kind: OperationKind) -> Self {
        Self {
            id,
            enabled: true,
            config: OperationConfig::default_for(kind),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.config.kind()
    }
}
