//! Harvest-role decision procedures

use crate::actions::{Action, Decision};
use crate::allocator;
use crate::roles::context::DecisionContext;
use crate::world::objects::{Source, StructureKind};

/// Miner: park at a source, harvest, feed an adjacent container
///
/// No contention logic, no hauling. When carrying anything and a container
/// with free capacity sits adjacent, unload into it; otherwise keep
/// working the nearest active source.
pub fn run_miner(ctx: &mut DecisionContext) -> Decision {
    let unit = ctx.unit;

    if !unit.store.is_empty() {
        if let Some(container) = ctx.view.structure_within(unit.pos, 1, |s| {
            s.kind == StructureKind::Container && s.has_free_capacity()
        }) {
            return Decision::act(Action::Transfer(container.id));
        }
    }

    match ctx.view.path_nearest_source(unit.pos, Source::is_active) {
        Some(source) if unit.pos.is_adjacent_to(source.pos) => {
            Decision::act(Action::Harvest(source.id))
        }
        Some(source) => Decision::move_to(source.pos, ctx.reuse()),
        None => ctx.rally(),
    }
}

/// Drop-harvester: harvest until full, then dump the load on the ground
///
/// Decouples harvesting from hauling; transporters pick the piles up.
pub fn run_drop_harvester(ctx: &mut DecisionContext) -> Decision {
    let unit = ctx.unit;

    if unit.store.is_full() {
        return Decision::act(Action::DropEnergy);
    }

    match ctx.view.path_nearest_source(unit.pos, Source::is_active) {
        Some(source) if unit.pos.is_adjacent_to(source.pos) => {
            Decision::act(Action::Harvest(source.id))
        }
        Some(source) => Decision::move_to(source.pos, ctx.reuse()),
        None => ctx.rally(),
    }
}

/// Strong harvester: contention-aware harvesting plus own delivery
///
/// Source choice goes through the slot allocator. A full load is delivered
/// Storage -> Extension -> Spawn within the current room; when all three
/// are unavailable the unit rallies rather than blocking its source.
pub fn run_strong_harvester(ctx: &mut DecisionContext) -> Decision {
    let unit = ctx.unit;

    if unit.store.is_full() {
        return match allocator::select_deposit_target(
            ctx.view,
            unit,
            None,
            &allocator::DELIVERY_PREFERENCES,
        ) {
            Some(target) if unit.pos.is_adjacent_to(target.pos) => {
                Decision::act(Action::Transfer(target.id))
            }
            Some(target) => Decision::move_to(target.pos, ctx.reuse()),
            None => ctx.rally(),
        };
    }

    match allocator::select_harvest_source(ctx.view, unit, ctx.memory, ctx.colony, ctx.config) {
        Some(source) if unit.pos.is_adjacent_to(source.pos) => {
            Decision::act(Action::Harvest(source.id))
        }
        Some(source) => Decision::move_to(source.pos, ctx.reuse()),
        None => ctx.rally(),
    }
}
