//! flowconf-api - Shared types for the flowconf console API
//!
//! This crate provides the foundational types used across the flowconf
//! client crates:
//! - The `{code, message, data}` response envelope
//! - Configuration scope, document, and history models
//! - Console API path constants and builders
//! - Client-side configuration validation

pub mod model;
pub mod path;
pub mod validate;

// Re-exports for convenience
pub use model::{
    ApiResponse, CaptureConfig, ConfigDocument, ConfigHistoryEntry, ConfigScope, FieldDescriptor,
    FilterConfig, LoginRequest, LoginResult, OutputConfig, RollbackRequest, RollbackResult,
    SaveConfigRequest, SavedVersion, SensorConfig, SettingsRequest, SettingsSaved,
    StatusReportConfig, SystemStatus,
};
pub use validate::{ValidationError, validate_cluster_name, validate_config, validate_node_id};

/// Output fields a sensor can be configured to emit
pub const SUPPORTED_FIELDS: &[&str] = &[
    "flowStartMilliseconds",
    "flowEndMilliseconds",
    "sourceIPv4Address",
    "destinationIPv4Address",
    "sourceTransportPort",
    "destinationTransportPort",
    "protocolIdentifier",
    "silkAppLabel",
    "octetTotalCount",
    "packetTotalCount",
    "initialTCPFlags",
    "ipClassOfService",
    "ingressInterface",
    "egressInterface",
];

/// History page size used when the caller does not supply a limit
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;
