//! Entities the decision layer reads: sources, structures, units
//!
//! The core never creates or destroys any of these; it only inspects them
//! and issues intents against their ids.

use serde::{Deserialize, Serialize};

use crate::core::types::{Body, DropId, Pos, Role, SourceId, Store, StructureId, UnitId};

/// Who holds an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    Friendly,
    Hostile,
    Unclaimed,
}

/// A harvestable energy source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub pos: Pos,
    pub energy: u32,
    pub energy_capacity: u32,
}

impl Source {
    pub fn is_active(&self) -> bool {
        self.energy > 0
    }

    /// Concurrent-harvester capacity of this source
    pub fn harvest_slots(&self, energy_per_slot: u32) -> u32 {
        if energy_per_slot == 0 {
            return 0;
        }
        self.energy_capacity / energy_per_slot
    }
}

/// Type tag of a stationary structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Spawn,
    Extension,
    Tower,
    Storage,
    Container,
    Wall,
    Rampart,
    Road,
}

impl StructureKind {
    pub fn is_wall(self) -> bool {
        matches!(self, StructureKind::Wall)
    }

    /// Structures units withdraw buffered energy from
    pub fn is_energy_buffer(self) -> bool {
        matches!(self, StructureKind::Container | StructureKind::Storage)
    }
}

/// A stationary entity with hit points and, for storage-like kinds, a store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub id: StructureId,
    pub kind: StructureKind,
    pub owner: Ownership,
    pub pos: Pos,
    pub hits: u32,
    pub hits_max: u32,
    pub store: Option<Store>,
}

impl Structure {
    /// Absolute damage, the within-tier repair ordering key
    pub fn damage(&self) -> u32 {
        self.hits_max.saturating_sub(self.hits)
    }

    pub fn is_damaged(&self) -> bool {
        self.hits < self.hits_max
    }

    pub fn stored(&self) -> u32 {
        self.store.map(|s| s.used).unwrap_or(0)
    }

    pub fn free_capacity(&self) -> u32 {
        self.store.map(|s| s.free_capacity()).unwrap_or(0)
    }

    pub fn has_free_capacity(&self) -> bool {
        self.free_capacity() > 0
    }
}

/// The room controller: ownership anchor and rally point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Controller {
    pub pos: Pos,
    pub owner: Ownership,
    pub level: u8,
}

/// Energy lying on the ground, awaiting pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroppedEnergy {
    pub id: DropId,
    pub pos: Pos,
    pub amount: u32,
}

/// A controlled mobile unit
///
/// `role` mirrors the persisted memory record; the host copies it into the
/// snapshot when rebuilding units so decisions never run without a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub role: Role,
    pub pos: Pos,
    pub hits: u32,
    pub hits_max: u32,
    pub store: Store,
    pub body: Body,
}

impl Unit {
    /// Missing hit points, the healer's target ordering key
    pub fn hits_deficit(&self) -> u32 {
        self.hits_max.saturating_sub(self.hits)
    }
}

/// An observed hostile unit
///
/// Hostiles carry no role tag or store; the decision layer only needs their
/// position, durability, and combat body parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub id: UnitId,
    pub pos: Pos,
    pub hits: u32,
    pub hits_max: u32,
    pub body: Body,
}
