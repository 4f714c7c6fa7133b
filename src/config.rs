use serde::{Deserialize, Serialize};

/// What `reset` does with snapshots recorded after the opening position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Move the cursor to the opening; later snapshots stay reachable with redo.
    #[default]
    KeepHistory,
    /// Drop everything except the opening snapshot.
    DiscardHistory,
}

/// Controller configuration, usually handed over by the UI as a plain object.
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub restart: RestartPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_history_on_restart() {
        assert_eq!(GameConfig::default().restart, RestartPolicy::KeepHistory);
    }
}
