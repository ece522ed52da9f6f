use serde::{Deserialize, Serialize};

/// One online player as reported by `/up/world/world/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub name: String,
    pub health: f64,
    pub armor: f64,
}

/// Subset of the Dynmap live-data payload that replies are built from.
/// Unknown fields (`updates`, `timestamp`, player coordinates, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerStatus {
    pub players: Vec<Player>,
    /// World time of day, `ticks` in `0..24000` where 0 is 06:00.
    pub servertime: i64,
    pub has_storm: bool,
    pub is_thundering: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dynmap_payload() {
        let body = r#"{
            "currentcount": 2,
            "hasStorm": true,
            "isThundering": false,
            "servertime": 13500,
            "timestamp": 1700000000000,
            "players": [
                {"world": "world", "armor": 5, "name": "Steve", "x": 1.0, "y": 64.0, "z": -3.5, "health": 19.6, "type": "player", "account": "Steve"},
                {"name": "Alex", "health": 20, "armor": 0}
            ],
            "updates": []
        }"#;

        let status: ServerStatus = serde_json::from_str(body).unwrap();
        assert_eq!(status.players.len(), 2);
        assert_eq!(status.players[0].name, "Steve");
        assert_eq!(status.players[0].armor, 5.0);
        assert_eq!(status.players[1].health, 20.0);
        assert_eq!(status.servertime, 13500);
        assert!(status.has_storm);
        assert!(!status.is_thundering);
    }

    #[test]
    fn missing_fields_default() {
        let status: ServerStatus = serde_json::from_str("{}").unwrap();
        assert!(status.players.is_empty());
        assert_eq!(status.servertime, 0);
        assert!(!status.has_storm);
    }
}
