//! Client configuration.

/// Configuration for the lifeview client.
///
/// Everything the browser side needs is explicit here: the endpoint, the two
/// element ids the surrounding markup must provide, and the poll cadence.
#[derive(Clone, Debug)]
pub struct ViewConfig {
    /// Endpoint the client POSTs to for a fresh game state (default:
    /// `"/live"`).
    pub api_url: String,
    /// The `id` attribute of the table element (default: `"game-table"`).
    pub table_id: String,
    /// The `id` attribute of the counter element (default: `"counter"`).
    pub counter_id: String,
    /// Milliseconds between polls (default: `500`).
    pub poll_interval_ms: u32,
    /// Log at `Debug` instead of `Info` (default: `false`).
    pub debug: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            api_url: "/live".into(),
            table_id: "game-table".into(),
            counter_id: "counter".into(),
            poll_interval_ms: 500,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.api_url, "/live");
        assert_eq!(config.table_id, "game-table");
        assert_eq!(config.counter_id, "counter");
        assert_eq!(config.poll_interval_ms, 500);
        assert!(!config.debug);
    }
}
