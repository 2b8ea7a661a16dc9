//! Read-only query facade over the tick snapshot
//!
//! Every query is a pure function of the snapshot. Ties are always broken
//! by the lowest entity id after the primary key, so identical snapshots
//! yield identical answers regardless of container iteration order.

use std::cmp::Reverse;

use crate::core::types::{Pos, RoomId, Tick, UnitId};
use crate::world::objects::{DroppedEnergy, Hostile, Ownership, Source, Structure, StructureKind, Unit};
use crate::world::{Room, WorldSnapshot};

/// Movement-cost estimates supplied by the host's pathing layer
///
/// The decision layer never computes paths; it only compares costs. `None`
/// marks a destination as unreachable and removes it from candidacy.
pub trait DistanceOracle {
    fn path_cost(&self, from: Pos, to: Pos) -> Option<u32>;
}

/// Straight-line fallback estimator
///
/// Chebyshev range within a room; a flat pessimistic constant across rooms,
/// so in-room candidates always win over remote ones but remote targets
/// remain reachable when they are the only option. Hosts with a real
/// pathing backend should supply their own oracle.
pub struct LinearDistance;

/// Cost assigned to any cross-room destination by `LinearDistance`
pub const CROSS_ROOM_COST: u32 = 100;

impl DistanceOracle for LinearDistance {
    fn path_cost(&self, from: Pos, to: Pos) -> Option<u32> {
        match from.range_to(to) {
            Some(range) => Some(range),
            None => Some(CROSS_ROOM_COST),
        }
    }
}

/// Query facade bundling the snapshot with the distance oracle
pub struct WorldView<'a> {
    snapshot: &'a WorldSnapshot,
    paths: &'a dyn DistanceOracle,
}

impl<'a> WorldView<'a> {
    pub fn new(snapshot: &'a WorldSnapshot, paths: &'a dyn DistanceOracle) -> Self {
        Self { snapshot, paths }
    }

    pub fn tick(&self) -> Tick {
        self.snapshot.tick
    }

    pub fn room(&self, id: RoomId) -> Option<&'a Room> {
        self.snapshot.rooms.get(&id)
    }

    pub fn is_observed(&self, id: RoomId) -> bool {
        self.snapshot.rooms.contains_key(&id)
    }

    pub fn units(&self) -> &'a [Unit] {
        &self.snapshot.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&'a Unit> {
        self.snapshot.units.iter().find(|u| u.id == id)
    }

    pub fn units_in_room(&self, room: RoomId) -> impl Iterator<Item = &'a Unit> + 'a {
        self.snapshot
            .units
            .iter()
            .filter(move |u| u.pos.room == room)
    }

    pub fn hostiles_in_room(&self, room: RoomId) -> impl Iterator<Item = &'a Hostile> + 'a {
        self.snapshot
            .hostiles
            .iter()
            .filter(move |h| h.pos.room == room)
    }

    /// Resolve a source id anywhere in the observed world
    pub fn source(&self, id: crate::core::types::SourceId) -> Option<&'a Source> {
        self.snapshot
            .rooms
            .values()
            .flat_map(|r| r.sources.iter())
            .find(|s| s.id == id)
    }

    pub fn path_cost(&self, from: Pos, to: Pos) -> Option<u32> {
        self.paths.path_cost(from, to)
    }

    /// All structures of one kind in a room
    pub fn structures_of_kind(
        &self,
        room: RoomId,
        kind: StructureKind,
    ) -> impl Iterator<Item = &'a Structure> + 'a {
        self.room(room)
            .map(|r| r.structures.iter())
            .into_iter()
            .flatten()
            .filter(move |s| s.kind == kind)
    }

    // === RANGE QUERIES (straight-line, same room) ===

    pub fn nearest_hostile(&self, from: Pos) -> Option<&'a Hostile> {
        self.hostiles_in_room(from.room)
            .filter_map(|h| from.range_to(h.pos).map(|r| (r, h)))
            .min_by_key(|(r, h)| (*r, h.id))
            .map(|(_, h)| h)
    }

    pub fn hostiles_within(&self, from: Pos, range: u32) -> usize {
        self.hostiles_in_room(from.room)
            .filter(|h| from.in_range_of(h.pos, range))
            .count()
    }

    pub fn nearest_hostile_structure(&self, from: Pos) -> Option<&'a Structure> {
        let room = self.room(from.room)?;
        room.structures
            .iter()
            .filter(|s| s.owner == Ownership::Hostile)
            .filter_map(|s| from.range_to(s.pos).map(|r| (r, s)))
            .min_by_key(|(r, s)| (*r, s.id))
            .map(|(_, s)| s)
    }

    pub fn nearest_friendly_where(
        &self,
        from: Pos,
        pred: impl Fn(&Unit) -> bool,
    ) -> Option<&'a Unit> {
        self.units_in_room(from.room)
            .filter(|u| pred(u))
            .filter_map(|u| from.range_to(u.pos).map(|r| (r, u)))
            .min_by_key(|(r, u)| (*r, u.id))
            .map(|(_, u)| u)
    }

    /// The friendly unit missing the most hit points, if any is hurt
    pub fn most_damaged_friendly(&self, room: RoomId, exclude: UnitId) -> Option<&'a Unit> {
        self.units_in_room(room)
            .filter(|u| u.id != exclude && u.hits_deficit() > 0)
            .min_by_key(|u| (Reverse(u.hits_deficit()), u.id))
    }

    /// Nearest structure within `range` matching the predicate
    pub fn structure_within(
        &self,
        from: Pos,
        range: u32,
        pred: impl Fn(&Structure) -> bool,
    ) -> Option<&'a Structure> {
        let room = self.room(from.room)?;
        room.structures
            .iter()
            .filter(|s| pred(s))
            .filter_map(|s| from.range_to(s.pos).map(|r| (r, s)))
            .filter(|(r, _)| *r <= range)
            .min_by_key(|(r, s)| (*r, s.id))
            .map(|(_, s)| s)
    }

    /// Nearest structure by range matching the predicate, unbounded
    pub fn nearest_structure_where(
        &self,
        from: Pos,
        pred: impl Fn(&Structure) -> bool,
    ) -> Option<&'a Structure> {
        self.structure_within(from, u32::MAX, pred)
    }

    // === PATH QUERIES (oracle cost) ===

    pub fn path_nearest_source(
        &self,
        from: Pos,
        pred: impl Fn(&Source) -> bool,
    ) -> Option<&'a Source> {
        let room = self.room(from.room)?;
        room.sources
            .iter()
            .filter(|s| pred(s))
            .filter_map(|s| self.path_cost(from, s.pos).map(|c| (c, s)))
            .min_by_key(|(c, s)| (*c, s.id))
            .map(|(_, s)| s)
    }

    pub fn path_nearest_structure(
        &self,
        from: Pos,
        pred: impl Fn(&Structure) -> bool,
    ) -> Option<&'a Structure> {
        self.path_nearest_structure_among([from.room], from, pred)
    }

    /// Path-nearest structure across several rooms (cross-room hauling)
    pub fn path_nearest_structure_among(
        &self,
        rooms: impl IntoIterator<Item = RoomId>,
        from: Pos,
        pred: impl Fn(&Structure) -> bool,
    ) -> Option<&'a Structure> {
        rooms
            .into_iter()
            .filter_map(|id| self.room(id))
            .flat_map(|room| room.structures.iter())
            .filter(|s| pred(s))
            .filter_map(|s| self.path_cost(from, s.pos).map(|c| (c, s)))
            .min_by_key(|(c, s)| (*c, s.id))
            .map(|(_, s)| s)
    }

    pub fn path_nearest_dropped(&self, from: Pos) -> Option<&'a DroppedEnergy> {
        let room = self.room(from.room)?;
        room.dropped
            .iter()
            .filter(|d| d.amount > 0)
            .filter_map(|d| self.path_cost(from, d.pos).map(|c| (c, d)))
            .min_by_key(|(c, d)| (*c, d.id))
            .map(|(_, d)| d)
    }
}
