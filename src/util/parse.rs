use std::time::Duration;

use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a duration string of the form `<number><unit>` where the unit is
/// one of `s`, `m`, `h` or `d`.
///
/// Used by the timed moderation commands (`/mute`, `/tempban`) to interpret
/// user-supplied durations such as `10m` or `1h`.
///
/// # Arguments
/// - `value` - The duration string to parse
///
/// # Returns
/// - `Ok(Duration)` - Successfully parsed duration
/// - `Err(AppError::InternalErr(ParseDuration))` - Empty string, unknown
///   unit, or non-numeric magnitude
pub fn parse_duration(value: &str) -> Result<Duration, AppError> {
    let invalid = || InternalError::ParseDuration {
        value: value.to_string(),
    };

    let unit = value.chars().last().ok_or_else(invalid)?;
    let magnitude = value[..value.len() - unit.len_utf8()]
        .parse::<u64>()
        .map_err(|_| invalid())?;

    let seconds = match unit {
        's' => magnitude,
        'm' => magnitude * 60,
        'h' => magnitude * 60 * 60,
        'd' => magnitude * 24 * 60 * 60,
        _ => return Err(invalid().into()),
    };

    Ok(Duration::from_secs(seconds))
}
