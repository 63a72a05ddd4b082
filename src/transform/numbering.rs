use crate::operation::{NumberingConfig, Placement};

use super::{TransformError, MAX_PADDING};

/// Token replaced by the counter inside formats and affix text
pub const COUNTER_TOKEN: &str = "[N]";

/// `start + index * step`, failing instead of wrapping
pub fn counter_value(start: i64, step: i64, index: usize) -> Result<i64, TransformError> {
    i64::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(step))
        .and_then(|offset| start.checked_add(offset))
        .ok_or(TransformError::CounterOverflow { index })
}

/// Decimal rendering of `value`, left-padded with zeros to `width` characters
pub fn pad_number(value: i64, width: usize) -> Result<String, TransformError> {
    if width > MAX_PADDING {
        return Err(TransformError::PaddingTooLarge {
            requested: width,
            max: MAX_PADDING,
        });
    }
    Ok(format!("{:0>width$}", value.to_string(), width = width))
}

/// Place `token` relative to `name`, joined by `separator`
pub(crate) fn place(name: &str, token: &str, position: Placement, separator: &str) -> String {
    match position {
        Placement::Prefix => format!("{}{}{}", token, separator, name),
        Placement::Suffix => format!("{}{}{}", name, separator, token),
        Placement::Replace => token.to_string(),
    }
}

pub fn apply_numbering(
    name: &str,
    config: &NumberingConfig,
    index: usize,
) -> Result<String, TransformError> {
    let value = counter_value(config.start_number, config.step, index)?;
    let counter = pad_number(value, config.padding)?;
    let formatted = config.format.replace(COUNTER_TOKEN, &counter);

    Ok(place(name, &formatted, config.position, &config.separator))
}
