//! Distribution-role decision procedures
//!
//! Transporter, Upgrader, and Repairer all run the same two-phase
//! hysteresis: gather until exactly full, spend until exactly empty. The
//! phases differ only in where energy comes from and where it goes.

use crate::actions::{Action, Decision};
use crate::allocator;
use crate::repair;
use crate::roles::context::DecisionContext;
use crate::world::objects::{Ownership, Source, StructureKind};

/// Transporter: drain drop-harvester piles and containers into deposits
pub fn run_transporter(ctx: &mut DecisionContext) -> Decision {
    ctx.memory.update_working(&ctx.unit.store);
    if ctx.memory.working {
        deliver(ctx)
    } else {
        collect_hauled(ctx)
    }
}

/// Upgrader: gather energy, then feed the room controller
pub fn run_upgrader(ctx: &mut DecisionContext) -> Decision {
    ctx.memory.update_working(&ctx.unit.store);
    if ctx.memory.working {
        upgrade_controller(ctx)
    } else {
        collect_energy(ctx)
    }
}

/// Repairer: gather energy, then work the repair-priority ranking
///
/// With nothing left to repair, spare energy goes into the controller so
/// the unit is never idle while carrying.
pub fn run_repairer(ctx: &mut DecisionContext) -> Decision {
    ctx.memory.update_working(&ctx.unit.store);
    if !ctx.memory.working {
        return collect_energy(ctx);
    }

    let Some(room) = ctx.room() else {
        return Decision::hold();
    };

    match repair::best_target(
        room.structures
            .iter()
            .filter(|s| s.owner != Ownership::Hostile),
    ) {
        Some(target) if ctx.unit.pos.in_range_of(target.pos, ctx.config.repair_range) => {
            Decision::act(Action::Repair(target.id))
        }
        Some(target) => Decision::move_to(target.pos, ctx.reuse()),
        None => upgrade_controller(ctx),
    }
}

/// Gather phase shared by upgrader and repairer
///
/// Buffered energy beats raw harvesting: withdraw from the nearest
/// container or storage holding any, falling back to the nearest active
/// source, falling back to the rally point.
fn collect_energy(ctx: &DecisionContext) -> Decision {
    let unit = ctx.unit;

    if let Some(buffer) = ctx.view.path_nearest_structure(unit.pos, |s| {
        s.kind.is_energy_buffer() && s.stored() > 0 && s.owner != Ownership::Hostile
    }) {
        return if unit.pos.is_adjacent_to(buffer.pos) {
            Decision::act(Action::Withdraw(buffer.id))
        } else {
            Decision::move_to(buffer.pos, ctx.reuse())
        };
    }

    match ctx.view.path_nearest_source(unit.pos, Source::is_active) {
        Some(source) if unit.pos.is_adjacent_to(source.pos) => {
            Decision::act(Action::Harvest(source.id))
        }
        Some(source) => Decision::move_to(source.pos, ctx.reuse()),
        None => ctx.rally(),
    }
}

/// Transporter gather phase: ground piles first, then containers
///
/// Storage is a delivery target only for this role, never a pickup point.
fn collect_hauled(ctx: &DecisionContext) -> Decision {
    let unit = ctx.unit;

    if let Some(pile) = ctx.view.path_nearest_dropped(unit.pos) {
        return if unit.pos.is_adjacent_to(pile.pos) {
            Decision::act(Action::Pickup(pile.id))
        } else {
            Decision::move_to(pile.pos, ctx.reuse())
        };
    }

    if let Some(buffer) = ctx.view.path_nearest_structure(unit.pos, |s| {
        s.kind == StructureKind::Container && s.stored() > 0 && s.owner != Ownership::Hostile
    }) {
        return if unit.pos.is_adjacent_to(buffer.pos) {
            Decision::act(Action::Withdraw(buffer.id))
        } else {
            Decision::move_to(buffer.pos, ctx.reuse())
        };
    }

    ctx.rally()
}

fn deliver(ctx: &DecisionContext) -> Decision {
    let unit = ctx.unit;
    let haul_target = ctx.colony.haul_target(unit.pos.room);

    match allocator::select_deposit_target(
        ctx.view,
        unit,
        haul_target,
        &allocator::DELIVERY_PREFERENCES,
    ) {
        Some(target) if unit.pos.is_adjacent_to(target.pos) => {
            Decision::act(Action::Transfer(target.id))
        }
        Some(target) => Decision::move_to(target.pos, ctx.reuse()),
        None => ctx.rally(),
    }
}

fn upgrade_controller(ctx: &DecisionContext) -> Decision {
    let unit = ctx.unit;
    match ctx.room().and_then(|r| r.controller.as_ref()) {
        Some(controller) if unit.pos.in_range_of(controller.pos, ctx.config.upgrade_range) => {
            Decision::act(Action::UpgradeController)
        }
        Some(controller) => Decision::move_to(controller.pos, ctx.reuse()),
        None => Decision::hold(),
    }
}
