//! Observed world state for one tick
//!
//! The host runtime rebuilds a `WorldSnapshot` from its own state each tick
//! and hands it to the decision pass. Nothing here survives the tick; the
//! snapshot is the oracle's answer sheet, not a live connection to it.

pub mod objects;
pub mod view;

pub use objects::{
    Controller, DroppedEnergy, Hostile, Ownership, Source, Structure, StructureKind, Unit,
};
pub use view::{DistanceOracle, LinearDistance, WorldView};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, Pos, RoomId, Tick};

/// A named region: sources, structures, controller, exits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Adjacent room per compass direction; `None` where the map edge or a
    /// sealed border blocks travel
    pub exits: [Option<RoomId>; 4],
    pub controller: Option<Controller>,
    pub sources: Vec<Source>,
    pub structures: Vec<Structure>,
    pub dropped: Vec<DroppedEnergy>,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            exits: [None; 4],
            controller: None,
            sources: Vec::new(),
            structures: Vec::new(),
            dropped: Vec::new(),
        }
    }

    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits[direction.index()]
    }

    /// Default idle destination: the controller's position
    pub fn rally_point(&self) -> Option<Pos> {
        self.controller.as_ref().map(|c| c.pos)
    }
}

/// Everything observed this tick
///
/// Rooms absent from `rooms` are unobserved: they may still be referenced
/// by an exit entry, which is exactly what the invasion planner exploits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: Tick,
    pub rooms: AHashMap<RoomId, Room>,
    /// Controlled units, all rooms
    pub units: Vec<Unit>,
    /// Observed hostile units, all rooms
    pub hostiles: Vec<Hostile>,
}

impl WorldSnapshot {
    pub fn new(tick: Tick) -> Self {
        Self {
            tick,
            ..Self::default()
        }
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }
}
