//! Persistent per-unit and per-room records
//!
//! The store itself lives with the host; this crate defines the record
//! shapes and is handed the whole map by reference each tick. A unit's
//! record is written only by that unit's own decision procedure: the engine
//! clones the record, lets the procedure mutate the clone, and writes it
//! back before the next unit runs.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{RoomId, Role, SourceId, Store, UnitId};

/// Cross-tick record owned by a single unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitMemory {
    pub role: Role,
    /// Gather/deliver phase flag; see `update_working`
    #[serde(default)]
    pub working: bool,
    /// Sticky harvest assignment, revalidated before every use
    #[serde(default)]
    pub assigned_source: Option<SourceId>,
    /// Room this unit is committed to invading
    #[serde(default)]
    pub invasion_target: Option<RoomId>,
}

impl UnitMemory {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            working: false,
            assigned_source: None,
            invasion_target: None,
        }
    }

    /// Advance the gather/deliver hysteresis
    ///
    /// `working` flips false→true only when free capacity is exactly zero
    /// and true→false only when the store is exactly empty. No transition
    /// happens at any intermediate fill level, so a unit never oscillates
    /// mid-load.
    pub fn update_working(&mut self, store: &Store) {
        if !self.working && store.is_full() {
            self.working = true;
        } else if self.working && store.is_empty() {
            self.working = false;
        }
    }
}

/// Cross-tick record for a room
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMemory {
    /// When set, transporters in this room may also deliver into the
    /// target room's storage
    #[serde(default)]
    pub haul_target: Option<RoomId>,
}

/// The whole injected store
///
/// Records persist until overwritten; reclaiming entries for dead units is
/// the host's job, which is why lookups tolerate stale ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColonyMemory {
    pub units: AHashMap<UnitId, UnitMemory>,
    pub rooms: AHashMap<RoomId, RoomMemory>,
}

impl ColonyMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitMemory> {
        self.units.get(&id)
    }

    pub fn insert_unit(&mut self, id: UnitId, record: UnitMemory) {
        self.units.insert(id, record);
    }

    pub fn room(&self, id: RoomId) -> Option<&RoomMemory> {
        self.rooms.get(&id)
    }

    /// Configured cross-room haul destination for a room, if any
    pub fn haul_target(&self, room: RoomId) -> Option<RoomId> {
        self.rooms.get(&room).and_then(|r| r.haul_target)
    }
}
