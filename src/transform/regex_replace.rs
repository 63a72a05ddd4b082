use tracing::debug;

use crate::operation::RegexConfig;

use super::pattern::compile_pattern;

pub fn regex_replace(name: &str, config: &RegexConfig) -> String {
    if config.pattern.is_empty() {
        return name.to_string();
    }

    match compile_pattern(&config.pattern, &config.flags) {
        Ok(pattern) => pattern.replace(name, &config.replacement),
        Err(e) => {
            debug!(pattern = %config.pattern, flags = %config.flags, error = %e, "Ignoring invalid regex operation");
            name.to_string()
        }
    }
}
