//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Side length of a room grid; coordinates run 0..ROOM_SIZE
pub const ROOM_SIZE: u8 = 50;

/// Unique identifier for controlled and hostile mobile units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Unique identifier for stationary structures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StructureId(pub u32);

/// Unique identifier for energy sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceId(pub u32);

/// Unique identifier for dropped resource piles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DropId(pub u32);

/// Identifier for a named room region
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u32);

/// Behavior tag determining which decision procedure governs a unit
///
/// Closed enum rather than a free-form string tag: an unknown role is a
/// compile error, not a unit that silently does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Parks at a source and harvests into an adjacent container
    Miner,
    /// Harvests until full, then drops the load for transporters
    DropHarvester,
    /// Contention-aware harvester that also delivers its own load
    StrongHarvester,
    /// Hauls dropped and buffered energy to deposit structures
    Transporter,
    /// Feeds the room controller
    Upgrader,
    /// Maintains damaged structures
    Repairer,
    /// Melee line-holder and invasion spearhead
    Soldier,
    /// Stand-off skirmisher escorting the defensive line
    Ranger,
    /// Stand-off skirmisher that travels with the invasion force
    RangedAttacker,
    /// Keeps other units alive
    Healer,
}

impl Role {
    /// Units that hold the line; escorts attach themselves to these
    pub fn is_defender(self) -> bool {
        matches!(self, Role::Soldier)
    }
}

/// Compass direction of a room exit
///
/// `ALL` fixes the enumeration order used wherever exits are scanned, so
/// first-match selection over exits is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// Grid position within a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub room: RoomId,
    pub x: u8,
    pub y: u8,
}

impl Pos {
    pub fn new(room: RoomId, x: u8, y: u8) -> Self {
        Self { room, x, y }
    }

    /// Chebyshev range to another position in the same room
    ///
    /// Cross-room ranges are undefined; movement between rooms goes through
    /// the pathing oracle, never through a straight-line range.
    pub fn range_to(&self, other: Pos) -> Option<u32> {
        if self.room != other.room {
            return None;
        }
        let dx = self.x.abs_diff(other.x) as u32;
        let dy = self.y.abs_diff(other.y) as u32;
        Some(dx.max(dy))
    }

    /// Adjacency test: same room and range <= 1
    pub fn is_adjacent_to(&self, other: Pos) -> bool {
        matches!(self.range_to(other), Some(r) if r <= 1)
    }

    /// Whether `other` lies within `range` of this position (same room)
    pub fn in_range_of(&self, other: Pos, range: u32) -> bool {
        matches!(self.range_to(other), Some(r) if r <= range)
    }
}

/// Body part counts for a mobile unit
///
/// The decision layer only reads these; part damage and regeneration belong
/// to the host runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub work: u8,
    pub carry: u8,
    pub attack: u8,
    pub ranged_attack: u8,
    pub heal: u8,
    pub moves: u8,
}

/// Resource store of a unit or structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub used: u32,
    pub capacity: u32,
}

impl Store {
    pub fn new(used: u32, capacity: u32) -> Self {
        Self { used, capacity }
    }

    pub fn empty(capacity: u32) -> Self {
        Self { used: 0, capacity }
    }

    pub fn free_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.used)
    }

    pub fn is_full(&self) -> bool {
        self.free_capacity() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.used == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_chebyshev() {
        let room = RoomId(1);
        let a = Pos::new(room, 10, 10);
        assert_eq!(a.range_to(Pos::new(room, 13, 11)), Some(3));
        assert_eq!(a.range_to(Pos::new(room, 10, 10)), Some(0));
        assert_eq!(a.range_to(Pos::new(room, 9, 14)), Some(4));
    }

    #[test]
    fn test_cross_room_range_is_undefined() {
        let a = Pos::new(RoomId(1), 10, 10);
        let b = Pos::new(RoomId(2), 10, 10);
        assert_eq!(a.range_to(b), None);
        assert!(!a.is_adjacent_to(b));
    }

    #[test]
    fn test_adjacency_boundary() {
        let room = RoomId(1);
        let a = Pos::new(room, 10, 10);
        assert!(a.is_adjacent_to(Pos::new(room, 11, 11)));
        assert!(a.is_adjacent_to(a));
        assert!(!a.is_adjacent_to(Pos::new(room, 12, 10)));
    }

    #[test]
    fn test_store_boundaries() {
        let mut store = Store::empty(50);
        assert!(store.is_empty());
        assert!(!store.is_full());
        store.used = 49;
        assert!(!store.is_full());
        store.used = 50;
        assert!(store.is_full());
        assert_eq!(store.free_capacity(), 0);
    }

    #[test]
    fn test_id_ordering_is_stable() {
        let mut ids = vec![SourceId(3), SourceId(1), SourceId(2)];
        ids.sort_unstable();
        assert_eq!(ids, vec![SourceId(1), SourceId(2), SourceId(3)]);
    }

    #[test]
    fn test_direction_order_fixed() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West
            ]
        );
        assert_eq!(Direction::West.index(), 3);
    }

    #[test]
    fn test_defender_tag() {
        assert!(Role::Soldier.is_defender());
        assert!(!Role::Ranger.is_defender());
        assert!(!Role::Healer.is_defender());
    }
}
