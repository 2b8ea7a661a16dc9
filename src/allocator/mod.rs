//! Resource contention heuristics: harvest slots and deposit targets
//!
//! No locks anywhere. Every allocation is recomputed from the snapshot and
//! the shared memory view; because the engine writes each unit's record
//! back before the next unit runs, assignments made earlier in the pass
//! raise the occupancy counts seen later in the same pass. That ordering
//! dependence is accepted as the cheap substitute for real reservation.

use crate::core::config::DecisionConfig;
use crate::core::types::{Role, RoomId, SourceId, UnitId};
use crate::memory::{ColonyMemory, UnitMemory};
use crate::world::objects::{Ownership, Source, Structure, StructureKind, Unit};
use crate::world::WorldView;

/// Deposit search order shared by delivering roles
pub const DELIVERY_PREFERENCES: [StructureKind; 3] = [
    StructureKind::Storage,
    StructureKind::Extension,
    StructureKind::Spawn,
];

/// Count other same-role units holding a sticky assignment to `source`
///
/// Only units present in the snapshot count, so records left behind by
/// dead units never consume a slot.
pub fn slot_occupancy(
    view: &WorldView,
    colony: &ColonyMemory,
    source: SourceId,
    role: Role,
    exclude: UnitId,
) -> u32 {
    view.units()
        .iter()
        .filter(|u| u.id != exclude && u.role == role)
        .filter(|u| {
            colony
                .unit(u.id)
                .is_some_and(|m| m.assigned_source == Some(source))
        })
        .count() as u32
}

/// Pick (or keep) a harvest source for a contention-aware harvester
///
/// The sticky assignment survives while the source still holds energy and
/// has a free slot; anything else forces a fresh pick of the path-nearest
/// source with free capacity, ties broken by lowest source id. The sticky
/// reference in `memory` is rewritten either way. `None` means every
/// source is depleted or saturated and the caller should idle at the rally
/// point.
pub fn select_harvest_source<'a>(
    view: &WorldView<'a>,
    unit: &Unit,
    memory: &mut UnitMemory,
    colony: &ColonyMemory,
    config: &DecisionConfig,
) -> Option<&'a Source> {
    if let Some(id) = memory.assigned_source {
        if let Some(source) = view.source(id) {
            let occupied = slot_occupancy(view, colony, id, unit.role, unit.id);
            if source.is_active() && occupied < source.harvest_slots(config.energy_per_slot) {
                return Some(source);
            }
        }
    }

    let fresh = view.path_nearest_source(unit.pos, |s| {
        s.is_active()
            && slot_occupancy(view, colony, s.id, unit.role, unit.id)
                < s.harvest_slots(config.energy_per_slot)
    });
    memory.assigned_source = fresh.map(|s| s.id);
    fresh
}

/// Pick a structure to deliver the carried load into
///
/// Walks `preferences` in order; the first kind with any free-capacity
/// structure wins, and within that kind the path-nearest structure (ties
/// by lowest id). Candidates are restricted to the unit's current room,
/// except that `haul_target`'s storage is also eligible when the caller
/// passes one (transporters read it from room memory; harvesters always
/// pass `None` and stay home). `None` means nothing can take the load and
/// the caller should idle.
pub fn select_deposit_target<'a>(
    view: &WorldView<'a>,
    unit: &Unit,
    haul_target: Option<RoomId>,
    preferences: &[StructureKind],
) -> Option<&'a Structure> {
    let home = unit.pos.room;

    for &kind in preferences {
        let mut rooms = vec![home];
        if kind == StructureKind::Storage {
            if let Some(remote) = haul_target {
                rooms.push(remote);
            }
        }

        let found = view.path_nearest_structure_among(rooms, unit.pos, |s| {
            s.kind == kind && s.owner != Ownership::Hostile && s.has_free_capacity()
        });
        if found.is_some() {
            return found;
        }
    }

    None
}
