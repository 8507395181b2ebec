//! Client-side validation for sensor configuration documents.
//!
//! The backend enforces the same rules; validating here lets the console
//! reject bad input before issuing a request.

use std::net::IpAddr;

use crate::SUPPORTED_FIELDS;
use crate::model::{CaptureConfig, FilterConfig, OutputConfig, SensorConfig};

/// Rule violations found in a configuration document or identifier
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} seconds, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },

    #[error("max_payload must be at most 65535, got {0}")]
    PayloadTooLarge(u32),

    #[error("invalid {list} entry '{entry}': {reason}")]
    InvalidAddress {
        list: &'static str,
        entry: String,
        reason: String,
    },

    #[error("at least one output field is required")]
    NoOutputFields,

    #[error("unsupported output field '{0}'")]
    UnsupportedField(String),

    #[error("{0} is required")]
    MissingIdentifier(&'static str),

    #[error("{0} too long (max 128 characters)")]
    IdentifierTooLong(&'static str),

    #[error("{kind} contains invalid character: {ch}")]
    InvalidIdentifierChar { kind: &'static str, ch: char },
}

/// Validate a full configuration document.
pub fn validate_config(config: &SensorConfig) -> Result<(), ValidationError> {
    validate_capture(&config.capture)?;
    validate_filter(&config.filter)?;
    validate_output(&config.output)?;
    Ok(())
}

fn validate_capture(capture: &CaptureConfig) -> Result<(), ValidationError> {
    let range = |field: &'static str, value: u32| {
        if value > 3600 {
            Err(ValidationError::OutOfRange {
                field,
                min: 0,
                max: 3600,
                value,
            })
        } else {
            Ok(())
        }
    };
    range("idle_timeout", capture.idle_timeout)?;
    range("active_timeout", capture.active_timeout)?;
    range("stats_interval", capture.stats_interval)?;
    if capture.max_payload > 65535 {
        return Err(ValidationError::PayloadTooLarge(capture.max_payload));
    }
    Ok(())
}

fn validate_filter(filter: &FilterConfig) -> Result<(), ValidationError> {
    for entry in &filter.ip_whitelist {
        validate_address(entry).map_err(|reason| ValidationError::InvalidAddress {
            list: "ip_whitelist",
            entry: entry.clone(),
            reason,
        })?;
    }
    for entry in &filter.ip_blacklist {
        validate_address(entry).map_err(|reason| ValidationError::InvalidAddress {
            list: "ip_blacklist",
            entry: entry.clone(),
            reason,
        })?;
    }
    Ok(())
}

fn validate_output(output: &OutputConfig) -> Result<(), ValidationError> {
    if output.fields.is_empty() {
        return Err(ValidationError::NoOutputFields);
    }
    for field in &output.fields {
        if !SUPPORTED_FIELDS.contains(&field.as_str()) {
            return Err(ValidationError::UnsupportedField(field.clone()));
        }
    }
    Ok(())
}

// Accepts a bare IP or CIDR notation.
fn validate_address(entry: &str) -> Result<(), String> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err("empty address".to_string());
    }
    match entry.split_once('/') {
        None => {
            entry
                .parse::<IpAddr>()
                .map_err(|_| "invalid IP address".to_string())?;
        }
        Some((addr, prefix)) => {
            let addr: IpAddr = addr
                .parse()
                .map_err(|_| "invalid CIDR format".to_string())?;
            let max_prefix = if addr.is_ipv4() { 32 } else { 128 };
            let prefix: u8 = prefix
                .parse()
                .map_err(|_| "invalid CIDR format".to_string())?;
            if prefix > max_prefix {
                return Err("invalid CIDR format".to_string());
            }
        }
    }
    Ok(())
}

/// Validate a cluster name: non-empty, at most 128 characters, and
/// limited to letters, digits, underscore, and hyphen.
pub fn validate_cluster_name(name: &str) -> Result<(), ValidationError> {
    validate_identifier(name, "cluster name", false)
}

/// Validate a node id: same rules as a cluster name, plus dots.
pub fn validate_node_id(node_id: &str) -> Result<(), ValidationError> {
    validate_identifier(node_id, "node ID", true)
}

fn validate_identifier(
    value: &str,
    kind: &'static str,
    allow_dot: bool,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingIdentifier(kind));
    }
    if value.len() > 128 {
        return Err(ValidationError::IdentifierTooLong(kind));
    }
    for ch in value.chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || (allow_dot && ch == '.');
        if !ok {
            return Err(ValidationError::InvalidIdentifierChar { kind, ch });
        }
    }
    Ok(())
}
