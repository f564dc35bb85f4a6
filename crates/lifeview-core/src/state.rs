//! The [`GameState`] payload answered by the simulation server.

use serde::{Deserialize, Serialize};

use crate::world::World;

/// One complete server snapshot: the current and previous generations plus
/// the server's generation counter.
///
/// Produced fresh on every fetch and discarded once painted; the client
/// never mutates or caches it. `world` and `previous_world` are expected to
/// share dimensions, but nothing breaks when they don't — missing previous
/// cells read as dead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub world: World,
    pub previous_world: World,
    pub life_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_payload() {
        let state: GameState = serde_json::from_str(
            r#"{"world": [[true,false]], "previous_world": [[false,true]], "life_count": 1}"#,
        )
        .unwrap();
        assert_eq!(state.world, World::new(vec![vec![true, false]]));
        assert_eq!(state.previous_world, World::new(vec![vec![false, true]]));
        assert_eq!(state.life_count, 1);
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(serde_json::from_str::<GameState>(r#"{"world": [[true]]}"#).is_err());
    }

    #[test]
    fn rejects_non_boolean_cells() {
        let err = serde_json::from_str::<GameState>(
            r#"{"world": [[1,0]], "previous_world": [], "life_count": 0}"#,
        );
        assert!(err.is_err());
    }
}
