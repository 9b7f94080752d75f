use crate::utils::error::{Result, TaggerError};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(TaggerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(TaggerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(TaggerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| TaggerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_required_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TaggerError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TaggerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Elasticsearch index names must be lowercase and cannot start with `-`, `_` or `+`.
pub fn validate_index_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    let invalid = |reason: &str| TaggerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: name.to_string(),
        reason: reason.to_string(),
    };

    if name.starts_with(['-', '_', '+']) {
        return Err(invalid("Index name cannot start with '-', '_' or '+'"));
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(invalid("Index name must be lowercase"));
    }
    const ILLEGAL: &[char] = &['\\', '/', '*', '?', '"', '<', '>', '|', ' ', ',', '#', ':'];
    if name.contains(ILLEGAL) {
        return Err(invalid("Index name contains an illegal character"));
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TaggerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("classifier.base_url", "https://api.openai.com/v1").is_ok());
        assert!(validate_url("index.url", "http://localhost:9200").is_ok());
        assert!(validate_url("index.url", "").is_err());
        assert!(validate_url("index.url", "invalid-url").is_err());
        assert!(validate_url("index.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("server.bind", "127.0.0.1:5000").is_ok());
        assert!(validate_socket_addr("server.bind", "0.0.0.0:80").is_ok());
        assert!(validate_socket_addr("server.bind", "localhost").is_err());
    }

    #[test]
    fn test_validate_required_string_reports_missing() {
        let err = validate_required_string("classifier.api_key", "  ").unwrap_err();
        assert!(matches!(err, TaggerError::MissingConfigError { .. }));
        assert!(validate_required_string("classifier.api_key", "sk-test").is_ok());
    }

    #[test]
    fn test_validate_index_name() {
        assert!(validate_index_name("index.name", "influencer_personas").is_ok());
        assert!(validate_index_name("index.name", "Influencers").is_err());
        assert!(validate_index_name("index.name", "_private").is_err());
        assert!(validate_index_name("index.name", "a/b").is_err());
        assert!(validate_index_name("index.name", "").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("classifier.request_timeout_seconds", 60u64, 1, 600).is_ok());
        assert!(validate_range("classifier.request_timeout_seconds", 0u64, 1, 600).is_err());
        assert!(validate_range("classifier.request_timeout_seconds", 601u64, 1, 600).is_err());
    }
}
