use crate::operation::AffixConfig;

use super::numbering::{counter_value, pad_number, COUNTER_TOKEN};
use super::TransformError;

/// The affix text with its optional counter rendered in
fn affix_text(config: &AffixConfig, index: usize) -> Result<String, TransformError> {
    if !config.add_counter {
        return Ok(config.text.clone());
    }

    let value = counter_value(config.counter_start, config.counter_step, index)?;
    let counter = pad_number(value, config.counter_padding)?;

    if config.text.contains(COUNTER_TOKEN) {
        Ok(config.text.replace(COUNTER_TOKEN, &counter))
    } else {
        Ok(format!("{}{}", config.text, counter))
    }
}

pub fn apply_prefix(name: &str, config: &AffixConfig, index: usize) -> Result<String, TransformError> {
    Ok(format!("{}{}", affix_text(config, index)?, name))
}

pub fn apply_suffix(name: &str, config: &AffixConfig, index: usize) -> Result<String, TransformError> {
    Ok(format!("{}{}", name, affix_text(config, index)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn affix(text: &str, add_counter: bool) -> AffixConfig {
        AffixConfig {
            text: text.to_string(),
            add_counter,
            ..AffixConfig::default()
        }
    }

    #[test]
    fn test_plain_prefix_and_suffix() {
        assert_eq!(apply_prefix("song", &affix("2024_", false), 4).unwrap(), "2024_song");
        assert_eq!(apply_suffix("song", &affix("_final", false), 4).unwrap(), "song_final");
    }

    #[test]
    fn test_token_kept_literal_without_counter() {
        assert_eq!(apply_prefix("a", &affix("[N]-", false), 0).unwrap(), "[N]-a");
    }

    #[test]
    fn test_counter_appended_after_text() {
        let config = affix("take", true);
        assert_eq!(apply_suffix("shot_", &config, 0).unwrap(), "shot_take001");
        assert_eq!(apply_suffix("shot_", &config, 1).unwrap(), "shot_take002");
    }

    #[test]
    fn test_counter_substituted_into_token() {
        let config = AffixConfig {
            text: "[N] - ".to_string(),
            add_counter: true,
            counter_start: 0,
            counter_step: 10,
            counter_padding: 2,
        };
        assert_eq!(apply_prefix("track", &config, 3).unwrap(), "30 - track");
    }

    #[test]
    fn test_counter_overflow_propagates() {
        let config = AffixConfig {
            add_counter: true,
            counter_start: i64::MAX,
            ..AffixConfig::default()
        };
        assert!(apply_prefix("x", &config, 1).is_err());
    }
}
