use crate::error::config::ConfigError;

/// Parses a Discord snowflake (user, channel or guild ID) from a config value.
///
/// # Arguments
/// - `name` - Name of the environment variable, used in the error
/// - `value` - Raw value to parse
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed, non-zero snowflake
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a positive integer
pub fn parse_snowflake(name: &str, value: &str) -> Result<u64, ConfigError> {
    let id = value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    if id == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "snowflake IDs cannot be zero".to_string(),
        });
    }

    Ok(id)
}

/// Parses an embed color given as `#RRGGBB`, `0xRRGGBB` or a decimal integer.
///
/// # Returns
/// - `Ok(u32)` - RGB color value
/// - `Err(ConfigError::InvalidEnvVar)` - Malformed value or out of RGB range
pub fn parse_embed_color(name: &str, value: &str) -> Result<u32, ConfigError> {
    let value = value.trim();
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason,
    };

    let hex = value
        .strip_prefix('#')
        .or_else(|| value.strip_prefix("0x"))
        .or_else(|| value.strip_prefix("0X"));

    let parsed = match hex {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    }
    .map_err(|e| invalid(e.to_string()))?;

    if parsed > 0xFF_FF_FF {
        return Err(invalid(format!("{:#x} is outside the RGB range", parsed)));
    }

    Ok(parsed)
}
