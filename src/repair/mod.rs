//! Repair priority ordering for maintenance roles
//!
//! Damaged structures are ranked by a fixed tier weight, then by absolute
//! damage, then by lowest id. Walls are excluded from candidacy outright
//! rather than ranked low: maintenance units never touch them, a wall at
//! 1 hit must not starve a barely-scratched spawn.

use crate::world::objects::{Structure, StructureKind};

/// Fixed tier weight of a structure kind for repair ordering
///
/// Higher weight is repaired first regardless of damage amount.
pub fn tier_weight(kind: StructureKind) -> u8 {
    match kind {
        StructureKind::Spawn => 6,
        StructureKind::Extension => 5,
        StructureKind::Tower => 4,
        StructureKind::Storage => 3,
        StructureKind::Container => 2,
        StructureKind::Wall
        | StructureKind::Rampart
        | StructureKind::Road => 0,
    }
}

/// Whether a structure may be repaired by maintenance roles at all
pub fn is_repair_candidate(structure: &Structure) -> bool {
    !structure.kind.is_wall() && structure.is_damaged()
}

/// The single best repair target, if any candidate exists
///
/// A fold over the candidates: the running best is replaced whenever a
/// candidate has a strictly higher tier, or the same tier and strictly
/// more damage; exact ties go to the lower structure id.
pub fn best_target<'a>(
    structures: impl IntoIterator<Item = &'a Structure>,
) -> Option<&'a Structure> {
    structures
        .into_iter()
        .filter(|s| is_repair_candidate(s))
        .fold(None, |best: Option<&Structure>, candidate| match best {
            None => Some(candidate),
            Some(current) => {
                if outranks(candidate, current) {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        })
}

/// All repair candidates, most urgent first
///
/// Same ordering as `best_target`; re-ranking an unchanged set yields the
/// same sequence.
pub fn rank<'a>(structures: impl IntoIterator<Item = &'a Structure>) -> Vec<&'a Structure> {
    let mut candidates: Vec<&Structure> = structures
        .into_iter()
        .filter(|s| is_repair_candidate(s))
        .collect();
    candidates.sort_by(|a, b| {
        tier_weight(b.kind)
            .cmp(&tier_weight(a.kind))
            .then(b.damage().cmp(&a.damage()))
            .then(a.id.cmp(&b.id))
    });
    candidates
}

fn outranks(candidate: &Structure, current: &Structure) -> bool {
    let candidate_tier = tier_weight(candidate.kind);
    let current_tier = tier_weight(current.kind);
    if candidate_tier != current_tier {
        return candidate_tier > current_tier;
    }
    if candidate.damage() != current.damage() {
        return candidate.damage() > current.damage();
    }
    candidate.id < current.id
}
