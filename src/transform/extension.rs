use crate::operation::{ExtensionAction, ExtensionConfig};

/// `ext` with exactly one leading dot, or empty
fn normalize(ext: &str) -> String {
    let trimmed = ext.trim_start_matches('.');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(".{}", trimmed)
    }
}

/// Rewrite the extension component (leading dot included, or empty)
pub fn apply_extension(extension: &str, config: &ExtensionConfig) -> String {
    match config.action {
        ExtensionAction::Change => normalize(&config.new_extension),
        ExtensionAction::Add => format!("{}{}", extension, normalize(&config.new_extension)),
        ExtensionAction::Remove => String::new(),
        ExtensionAction::Lowercase => extension.to_lowercase(),
        ExtensionAction::Uppercase => extension.to_uppercase(),
    }
}
