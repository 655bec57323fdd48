//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two participants of a game: the human-controlled player and the CPU.
//!
//! ## SideMap
//!
//! Per-side data storage with O(1) access, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The human-controlled side.
    Player,
    /// The computer-controlled side.
    Cpu,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Cpu];

    /// The other side.
    ///
    /// ```
    /// use rust_gridiron::core::Side;
    ///
    /// assert_eq!(Side::Player.opponent(), Side::Cpu);
    /// assert_eq!(Side::Cpu.opponent(), Side::Player);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }

    /// Short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Cpu => "cpu",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The part a side plays on a single down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The side with possession.
    Offense,
    /// The side without possession.
    Defense,
}

impl Role {
    /// The role of the side with the given possession status.
    #[must_use]
    pub const fn for_side(side: Side, possession: Side) -> Self {
        match (side, possession) {
            (Side::Player, Side::Player) | (Side::Cpu, Side::Cpu) => Role::Offense,
            _ => Role::Defense,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Offense => f.write_str("offense"),
            Role::Defense => f.write_str("defense"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use rust_gridiron::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::default();
/// scores[Side::Cpu] += 7;
///
/// assert_eq!(scores[Side::Player], 0);
/// assert_eq!(scores[Side::Cpu], 7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    /// Value for the human side.
    pub player: T,
    /// Value for the CPU side.
    pub cpu: T,
}

impl<T> SideMap<T> {
    /// Create a map from explicit values.
    pub const fn new(player: T, cpu: T) -> Self {
        Self { player, cpu }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(Side) -> T) -> Self {
        Self {
            player: factory(Side::Player),
            cpu: factory(Side::Cpu),
        }
    }

    /// Iterate over `(Side, &T)` pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Cpu, &self.cpu)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Player => &self.player,
            Side::Cpu => &self.cpu,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Player => &mut self.player,
            Side::Cpu => &mut self.cpu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for side in Side::ALL {
            assert_ne!(side, side.opponent());
            assert_eq!(side, side.opponent().opponent());
        }
    }

    #[test]
    fn test_role_for_side() {
        assert_eq!(Role::for_side(Side::Player, Side::Player), Role::Offense);
        assert_eq!(Role::for_side(Side::Cpu, Side::Player), Role::Defense);
        assert_eq!(Role::for_side(Side::Cpu, Side::Cpu), Role::Offense);
        assert_eq!(Role::for_side(Side::Player, Side::Cpu), Role::Defense);
    }

    #[test]
    fn test_side_map_index() {
        let mut map = SideMap::from_fn(|side| if side == Side::Player { 1 } else { 2 });
        assert_eq!(map[Side::Player], 1);
        assert_eq!(map[Side::Cpu], 2);

        map[Side::Player] += 10;
        assert_eq!(map.player, 11);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &11), (Side::Cpu, &2)]);
    }

    #[test]
    fn test_side_serde() {
        let json = serde_json::to_string(&Side::Cpu).unwrap();
        assert_eq!(json, "\"cpu\"");
        let back: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Side::Cpu);
    }
}
