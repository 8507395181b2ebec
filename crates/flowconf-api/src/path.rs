// Console API paths, relative to the /api/v1 context path

pub mod console_api_path {
    // Auth
    pub const AUTH_LOGIN: &str = "/auth/login";

    // Settings and status
    pub const SETTINGS: &str = "/settings";
    pub const STATUS: &str = "/status";

    // Field catalog and defaults
    pub const FIELDS: &str = "/fields";
    pub const CONFIG_DEFAULT: &str = "/config/default";

    // Global scope
    pub const CONFIG_GLOBAL: &str = "/config/global";
    pub const CONFIG_GLOBAL_HISTORY: &str = "/config/global/history";

    // Cluster catalog
    pub const CLUSTERS: &str = "/clusters";

    // Rollback
    pub const CONFIG_ROLLBACK: &str = "/config/rollback";

    /// Path for one cluster's configuration.
    ///
    /// Identifiers are interpolated verbatim; callers must supply names
    /// free of path-breaking characters (see `validate_cluster_name`).
    pub fn cluster_config(cluster: &str) -> String {
        format!("/config/cluster/{}", cluster)
    }

    pub fn cluster_config_history(cluster: &str) -> String {
        format!("/config/cluster/{}/history", cluster)
    }

    pub fn cluster_nodes(cluster: &str) -> String {
        format!("/clusters/{}/nodes", cluster)
    }

    pub fn node_config(cluster: &str, node: &str) -> String {
        format!("/config/cluster/{}/node/{}", cluster, node)
    }

    pub fn node_config_history(cluster: &str, node: &str) -> String {
        format!("/config/cluster/{}/node/{}/history", cluster, node)
    }
}
