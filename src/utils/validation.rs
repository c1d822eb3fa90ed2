use crate::utils::error::{CheckError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value)) {
        return Ok(());
    }
    Err(CheckError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected one of: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "checks.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "   ").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        let levels = ["trace", "debug", "info"];
        assert!(validate_one_of("logging.level", "info", &levels).is_ok());
        assert!(validate_one_of("logging.level", "DEBUG", &levels).is_ok());

        let err = validate_one_of("logging.level", "loud", &levels).unwrap_err();
        assert!(err.to_string().contains("trace, debug, info"));
    }
}
