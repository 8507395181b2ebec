// ConsoleClient - facade for all console API operations

use std::{collections::HashMap, sync::Arc};

use tracing::debug;

use flowconf_api::{
    ConfigDocument, ConfigHistoryEntry, ConfigScope, DEFAULT_HISTORY_LIMIT, FieldDescriptor,
    LoginRequest, LoginResult, RollbackRequest, RollbackResult, SaveConfigRequest, SavedVersion,
    SensorConfig, SettingsRequest, SettingsSaved, SystemStatus,
    path::console_api_path,
};

use crate::{
    config::HttpClientConfig,
    error::Result,
    http::ConsoleHttpClient,
    session::SessionTokens,
};

/// Typed client for the flowconf console API.
///
/// One method per backend resource; every method is a pure request
/// builder. Semantic validation (field existence, permissions, version
/// existence for rollback) is the backend's job and surfaces as a
/// transport-layer error.
pub struct ConsoleClient {
    http: ConsoleHttpClient,
}

impl ConsoleClient {
    /// Create a new ConsoleClient with the given configuration and
    /// session token store.
    pub fn new(config: HttpClientConfig, session: Arc<SessionTokens>) -> Result<Self> {
        let http = ConsoleHttpClient::new(config, session)?;
        Ok(Self { http })
    }

    /// Create a new ConsoleClient from a single server address with a
    /// fresh, unauthenticated session.
    pub fn from_server_addr(addr: &str) -> Result<Self> {
        Self::new(HttpClientConfig::new(addr), Arc::new(SessionTokens::new()))
    }

    pub fn session(&self) -> &Arc<SessionTokens> {
        self.http.session()
    }

    // ============================================================================
    // Auth
    // ============================================================================

    /// Log in and record the returned token in the session store; the
    /// persistent slot is used when `remember` is set.
    pub async fn login(&self, username: &str, password: &str, remember: bool) -> Result<LoginResult> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result: LoginResult = self
            .http
            .post_json(console_api_path::AUTH_LOGIN, &request)
            .await?
            .unwrap_or_default();

        if !result.token.is_empty() {
            debug!("login succeeded for {}", result.username);
            if remember {
                self.session().store_persistent(result.token.clone());
            } else {
                self.session().store_session(result.token.clone());
            }
        }
        Ok(result)
    }

    // ============================================================================
    // Settings / Status
    // ============================================================================

    pub async fn get_settings(&self) -> Result<HashMap<String, String>> {
        Ok(self
            .http
            .get(console_api_path::SETTINGS)
            .await?
            .unwrap_or_default())
    }

    pub async fn save_settings(&self, settings: &SettingsRequest) -> Result<SettingsSaved> {
        Ok(self
            .http
            .post_json(console_api_path::SETTINGS, settings)
            .await?
            .unwrap_or_default())
    }

    pub async fn system_status(&self) -> Result<SystemStatus> {
        Ok(self
            .http
            .get(console_api_path::STATUS)
            .await?
            .unwrap_or_default())
    }

    // ============================================================================
    // Field catalog / defaults
    // ============================================================================

    pub async fn supported_fields(&self) -> Result<Vec<FieldDescriptor>> {
        Ok(self
            .http
            .get(console_api_path::FIELDS)
            .await?
            .unwrap_or_default())
    }

    pub async fn default_config(&self) -> Result<SensorConfig> {
        Ok(self
            .http
            .get(console_api_path::CONFIG_DEFAULT)
            .await?
            .unwrap_or_default())
    }

    // ============================================================================
    // Global configuration
    // ============================================================================

    /// Current global configuration, or None when nothing has been
    /// saved yet.
    pub async fn global_config(&self) -> Result<Option<ConfigDocument>> {
        self.http.get(console_api_path::CONFIG_GLOBAL).await
    }

    pub async fn save_global_config(
        &self,
        config: &SensorConfig,
        created_by: &str,
    ) -> Result<SavedVersion> {
        let request = SaveConfigRequest {
            config: config.clone(),
            created_by: created_by.to_string(),
        };
        Ok(self
            .http
            .post_json(console_api_path::CONFIG_GLOBAL, &request)
            .await?
            .unwrap_or_default())
    }

    pub async fn global_config_history(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<ConfigHistoryEntry>> {
        Ok(self
            .http
            .get_with_query(
                console_api_path::CONFIG_GLOBAL_HISTORY,
                &[("limit", limit.unwrap_or(DEFAULT_HISTORY_LIMIT))],
            )
            .await?
            .unwrap_or_default())
    }

    // ============================================================================
    // Cluster configuration
    // ============================================================================

    pub async fn list_clusters(&self) -> Result<Vec<String>> {
        Ok(self
            .http
            .get(console_api_path::CLUSTERS)
            .await?
            .unwrap_or_default())
    }

    pub async fn cluster_config(&self, cluster: &str) -> Result<Option<ConfigDocument>> {
        self.http
            .get(&console_api_path::cluster_config(cluster))
            .await
    }

    pub async fn save_cluster_config(
        &self,
        cluster: &str,
        config: &SensorConfig,
        created_by: &str,
    ) -> Result<SavedVersion> {
        let request = SaveConfigRequest {
            config: config.clone(),
            created_by: created_by.to_string(),
        };
        Ok(self
            .http
            .post_json(&console_api_path::cluster_config(cluster), &request)
            .await?
            .unwrap_or_default())
    }

    pub async fn cluster_config_history(
        &self,
        cluster: &str,
        limit: Option<u32>,
    ) -> Result<Vec<ConfigHistoryEntry>> {
        Ok(self
            .http
            .get_with_query(
                &console_api_path::cluster_config_history(cluster),
                &[("limit", limit.unwrap_or(DEFAULT_HISTORY_LIMIT))],
            )
            .await?
            .unwrap_or_default())
    }

    // ============================================================================
    // Node configuration
    // ============================================================================

    pub async fn list_nodes(&self, cluster: &str) -> Result<Vec<String>> {
        Ok(self
            .http
            .get(&console_api_path::cluster_nodes(cluster))
            .await?
            .unwrap_or_default())
    }

    pub async fn node_config(&self, cluster: &str, node: &str) -> Result<Option<ConfigDocument>> {
        self.http
            .get(&console_api_path::node_config(cluster, node))
            .await
    }

    pub async fn save_node_config(
        &self,
        cluster: &str,
        node: &str,
        config: &SensorConfig,
        created_by: &str,
    ) -> Result<SavedVersion> {
        let request = SaveConfigRequest {
            config: config.clone(),
            created_by: created_by.to_string(),
        };
        Ok(self
            .http
            .post_json(&console_api_path::node_config(cluster, node), &request)
            .await?
            .unwrap_or_default())
    }

    pub async fn node_config_history(
        &self,
        cluster: &str,
        node: &str,
        limit: Option<u32>,
    ) -> Result<Vec<ConfigHistoryEntry>> {
        Ok(self
            .http
            .get_with_query(
                &console_api_path::node_config_history(cluster, node),
                &[("limit", limit.unwrap_or(DEFAULT_HISTORY_LIMIT))],
            )
            .await?
            .unwrap_or_default())
    }

    // ============================================================================
    // Rollback
    // ============================================================================

    /// Roll a scope instance back to a prior version.
    ///
    /// The backend appends a new history entry whose body equals the
    /// target version's body and advances the current version; nothing
    /// is rewound or deleted. `cluster_name` and `node_id` are omitted
    /// from the body for scopes they do not apply to.
    pub async fn rollback_config(
        &self,
        scope: ConfigScope,
        cluster_name: Option<&str>,
        node_id: Option<&str>,
        version: i64,
        created_by: &str,
    ) -> Result<RollbackResult> {
        let request = RollbackRequest {
            scope,
            cluster_name: cluster_name.map(str::to_string),
            node_id: node_id.map(str::to_string),
            version,
            created_by: created_by.to_string(),
        };
        Ok(self
            .http
            .post_json(console_api_path::CONFIG_ROLLBACK, &request)
            .await?
            .unwrap_or_default())
    }
}
