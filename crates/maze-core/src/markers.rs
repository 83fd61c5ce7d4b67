//! Marker characters that give grid cells their meaning.

/// Impassable cell.
pub const WALL: char = '#';
/// Where the search begins.
pub const START: char = 'S';
/// Where the search ends.
pub const GOAL: char = 'G';

/// The set of characters a [`Grid`](crate::Grid) interprets.
///
/// Any character other than `wall` is walkable; `start` and `goal` are only
/// looked up by [`Grid::locate_endpoints`](crate::Grid::locate_endpoints).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Markers {
    pub wall: char,
    pub start: char,
    pub goal: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            wall: WALL,
            start: START,
            goal: GOAL,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let m: Markers = serde_json::from_str(r#"{"wall":"X"}"#).unwrap();
        assert_eq!(m.wall, 'X');
        assert_eq!(m.start, START);
        assert_eq!(m.goal, GOAL);
    }
}
