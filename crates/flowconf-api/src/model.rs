//! Wire models for the flowconf console API
//!
//! The backend wraps every response in a `{code, message, data}` envelope
//! and uses snake_case field names throughout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic API response envelope. `code == 0` means success; any other
/// code carries an application error in `message`. Error envelopes omit
/// `data`, and some reads legitimately return a null payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

/// Level at which a configuration document applies.
///
/// Cluster scope requires a cluster name; node scope requires both a
/// cluster name and a node id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigScope {
    #[default]
    Global,
    Cluster,
    Node,
}

impl ConfigScope {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigScope::Global => "global",
            ConfigScope::Cluster => "cluster",
            ConfigScope::Node => "node",
        }
    }

    pub fn requires_cluster(self) -> bool {
        matches!(self, ConfigScope::Cluster | ConfigScope::Node)
    }

    pub fn requires_node(self) -> bool {
        matches!(self, ConfigScope::Node)
    }
}

impl std::fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ConfigScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(ConfigScope::Global),
            "cluster" => Ok(ConfigScope::Cluster),
            "node" => Ok(ConfigScope::Node),
            _ => Err(format!("Invalid config scope: {}", s)),
        }
    }
}

/// Packet capture settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Capture interface name, e.g. eth0
    pub interface: String,
    /// IPFIX export port
    pub ipfix_port: u16,
    /// Idle flow timeout in seconds
    pub idle_timeout: u32,
    /// Active flow timeout in seconds
    pub active_timeout: u32,
    /// Stats emission interval in seconds
    pub stats_interval: u32,
    /// Enable application labeling
    #[serde(rename = "enable_applabel")]
    pub enable_app_label: bool,
    /// Enable deep packet inspection
    pub enable_dpi: bool,
    /// Maximum payload bytes to capture
    pub max_payload: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            interface: "eth0".to_string(),
            ipfix_port: 18000,
            idle_timeout: 60,
            active_timeout: 60,
            stats_interval: 300,
            enable_app_label: true,
            enable_dpi: false,
            max_payload: 1024,
        }
    }
}

/// Traffic filter settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub ip_whitelist: Vec<String>,
    pub ip_blacklist: Vec<String>,
    pub src_ports: Vec<u16>,
    pub dst_ports: Vec<u16>,
    pub bpf_filter: String,
}

/// Exported field selection
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub fields: Vec<String>,
}

/// Periodic status reporting settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReportConfig {
    pub status_report_url: String,
    pub status_report_interval_sec: u32,
    /// Container hostname; the sensor falls back to $HOSTNAME when empty
    pub uuid: String,
}

/// Complete sensor configuration document body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub capture: CaptureConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
    pub status_report: StatusReportConfig,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            capture: CaptureConfig::default(),
            filter: FilterConfig {
                ip_whitelist: Vec::new(),
                ip_blacklist: Vec::new(),
                src_ports: Vec::new(),
                dst_ports: Vec::new(),
                bpf_filter: "ip and not port 22".to_string(),
            },
            output: OutputConfig {
                fields: vec![
                    "flowStartMilliseconds".to_string(),
                    "flowEndMilliseconds".to_string(),
                    "sourceIPv4Address".to_string(),
                    "destinationIPv4Address".to_string(),
                    "sourceTransportPort".to_string(),
                    "destinationTransportPort".to_string(),
                    "protocolIdentifier".to_string(),
                    "silkAppLabel".to_string(),
                ],
            },
            status_report: StatusReportConfig {
                status_report_url: String::new(),
                status_report_interval_sec: 60,
                uuid: String::new(),
            },
        }
    }
}

/// Catalog entry describing a supported output field
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
}

/// Current configuration document at one scope instance.
///
/// `cluster` and `node` are present only for the scopes that carry them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(default)]
    pub config: SensorConfig,
    pub version: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: String,
}

/// Immutable history record appended on every save or rollback.
///
/// The document body is carried as the JSON string exactly as stored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigHistoryEntry {
    pub id: i64,
    pub scope: ConfigScope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    pub version: i64,
    pub config_json: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: String,
}

impl ConfigHistoryEntry {
    /// Decode the stored document body.
    pub fn config(&self) -> Result<SensorConfig, serde_json::Error> {
        serde_json::from_str(&self.config_json)
    }
}

/// Login request body
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response payload
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginResult {
    pub username: String,
    pub token: String,
}

/// Body for saving a configuration document at any scope.
///
/// The author is caller-supplied, not derived from the session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveConfigRequest {
    pub config: SensorConfig,
    pub created_by: String,
}

/// Response payload for a successful save
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SavedVersion {
    pub version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
}

/// Body for rolling a scope instance back to a prior version.
///
/// Rollback is a forward-moving save: the backend appends a new history
/// entry whose body equals the target version's body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RollbackRequest {
    pub scope: ConfigScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    pub version: i64,
    pub created_by: String,
}

/// Response payload for a successful rollback
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RollbackResult {
    pub new_version: i64,
}

/// System settings update body
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettingsRequest {
    pub zookeeper_servers: String,
}

/// Response payload for a settings save
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SettingsSaved {
    pub connected: bool,
}

/// Coordination service connectivity as reported by the backend
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZookeeperStatus {
    pub connected: bool,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub servers: Vec<String>,
}

/// Backend database connectivity
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DatabaseStatus {
    pub connected: bool,
}

/// Overall backend status
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SystemStatus {
    pub zookeeper: ZookeeperStatus,
    pub database: DatabaseStatus,
}
