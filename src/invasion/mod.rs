//! Invasion planning: where to strike, and whether the strike can win
//!
//! Target choice runs over exit directions in the fixed North, East,
//! South, West order, so the short-circuiting first match is deterministic.
//! Force assessment is recomputed from the snapshot every time it is
//! needed; nothing here is stored.

use crate::core::types::{Body, Direction, RoomId};
use crate::memory::ColonyMemory;
use crate::world::objects::Ownership;
use crate::world::{Room, WorldView};

/// Scoring seam for combat strength
///
/// The shipped estimator is deliberately coarse; hosts wanting to weigh
/// healing, terrain, or unit counts can swap in their own without touching
/// any call site.
pub trait ForceEstimator {
    fn unit_power(&self, body: &Body) -> u32;
}

/// Linear part-count heuristic: attack + 2 x ranged attack
///
/// Ignores healing capacity, terrain, and anything beyond part counts.
/// A known simplification, kept because it is cheap and monotonic.
pub struct LinearForce;

impl ForceEstimator for LinearForce {
    fn unit_power(&self, body: &Body) -> u32 {
        body.attack as u32 + 2 * body.ranged_attack as u32
    }
}

/// Choose an invasion target among the room's neighbors
///
/// Scanning exits in fixed order, the first adjacent room that is either
/// never observed (unknown risk accepted) or observed with an unclaimed
/// controller wins immediately. Rooms we own, rooms claimed by anyone
/// else, and controller-less rooms are skipped. `None` when no exit
/// qualifies.
pub fn choose_target(view: &WorldView, room: &Room) -> Option<RoomId> {
    for direction in Direction::ALL {
        let Some(next) = room.exit(direction) else {
            continue;
        };

        match view.room(next) {
            None => return Some(next),
            Some(observed) => {
                if let Some(controller) = &observed.controller {
                    if controller.owner == Ownership::Unclaimed {
                        return Some(next);
                    }
                }
            }
        }
    }

    None
}

/// Whether the assembled strike force can plausibly take the target room
///
/// Allied power sums over units in `source_room` whose memory commits them
/// to `target`; hostile power sums over every hostile observed in the
/// target. The attacker must be strictly stronger: a tie is a loss.
pub fn can_succeed(
    view: &WorldView,
    source_room: RoomId,
    target: RoomId,
    colony: &ColonyMemory,
    forces: &dyn ForceEstimator,
) -> bool {
    let hostile_power: u32 = view
        .hostiles_in_room(target)
        .map(|h| forces.unit_power(&h.body))
        .sum();

    let allied_power: u32 = view
        .units_in_room(source_room)
        .filter(|u| {
            colony
                .unit(u.id)
                .and_then(|m| m.invasion_target)
                == Some(target)
        })
        .map(|u| forces.unit_power(&u.body))
        .sum();

    allied_power > hostile_power
}
