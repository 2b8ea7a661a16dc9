//! Combat and support role decision procedures

use rand::Rng;

use crate::actions::{Action, Decision};
use crate::core::types::{Pos, ROOM_SIZE};
use crate::roles::context::DecisionContext;
use crate::world::objects::{Ownership, StructureKind};

/// Soldier: melee line-holder and invasion spearhead
///
/// Hostiles in the current room always take precedence. With none present
/// and an invasion target set, the soldier travels there, clears hostile
/// structures, and patrols; without a target it rallies at the controller.
pub fn run_soldier(ctx: &mut DecisionContext) -> Decision {
    let unit = ctx.unit;

    if let Some(hostile) = ctx.view.nearest_hostile(unit.pos) {
        return if unit.pos.is_adjacent_to(hostile.pos) {
            Decision::act(Action::Attack(hostile.id))
        } else {
            Decision::move_to(hostile.pos, ctx.reuse())
        };
    }

    if let Some(target) = ctx.memory.invasion_target {
        if unit.pos.room != target {
            return Decision::travel(target, ctx.reuse());
        }
        if let Some(structure) = ctx.view.nearest_hostile_structure(unit.pos) {
            return if unit.pos.is_adjacent_to(structure.pos) {
                Decision::act(Action::AttackStructure(structure.id))
            } else {
                Decision::move_to(structure.pos, ctx.reuse())
            };
        }
        return patrol(ctx);
    }

    ctx.rally()
}

/// Ranger: stand-off skirmisher attached to the defensive line
pub fn run_ranger(ctx: &mut DecisionContext) -> Decision {
    ranged_engagement(ctx, false)
}

/// Ranged attacker: same engagement rules, but travels with invasions
pub fn run_ranged_attacker(ctx: &mut DecisionContext) -> Decision {
    ranged_engagement(ctx, true)
}

/// Healer: keep the most-wounded friendly alive, shadow the line otherwise
///
/// Self-heal rides on every decision; it is never traded away for healing
/// someone else.
pub fn run_healer(ctx: &mut DecisionContext) -> Decision {
    let unit = ctx.unit;

    let decision = match ctx.view.most_damaged_friendly(unit.pos.room, unit.id) {
        Some(patient) => {
            let range = unit.pos.range_to(patient.pos).unwrap_or(u32::MAX);
            if range <= 1 {
                Decision::act(Action::Heal(patient.id))
            } else if range <= ctx.config.ranged_heal_range {
                // Close in and heal at range on the way
                Decision::act(Action::RangedHeal(patient.id))
                    .while_moving_to(patient.pos, ctx.reuse())
            } else {
                Decision::move_to(patient.pos, ctx.reuse())
            }
        }
        None => escort_or_rally(ctx),
    };

    decision.with_self_heal()
}

/// Shared stand-off engagement for ranged units
///
/// Disengage below the flee trigger, area-attack when crowded, single
/// target otherwise, close to stand-off range when too far. Quiet rooms
/// fall through to invasion travel (ranged attackers only), then escort.
fn ranged_engagement(ctx: &mut DecisionContext, travels_with_invasion: bool) -> Decision {
    let unit = ctx.unit;
    let config = ctx.config;

    if let Some(hostile) = ctx.view.nearest_hostile(unit.pos) {
        let range = unit.pos.range_to(hostile.pos).unwrap_or(u32::MAX);
        if range <= config.flee_trigger_range {
            return Decision::flee(hostile.pos, ctx.reuse());
        }
        if ctx.view.hostiles_within(unit.pos, config.standoff_range) >= 2 {
            return Decision::act(Action::RangedMassAttack);
        }
        if range <= config.standoff_range {
            return Decision::act(Action::RangedAttack(hostile.id));
        }
        return Decision::move_to(hostile.pos, ctx.reuse());
    }

    if travels_with_invasion {
        if let Some(target) = ctx.memory.invasion_target {
            if unit.pos.room != target {
                return Decision::travel(target, ctx.reuse());
            }
        }
    }

    escort_or_rally(ctx)
}

/// Idle posture for combat units: shadow a defender, else loiter at a spawn
fn escort_or_rally(ctx: &DecisionContext) -> Decision {
    let unit = ctx.unit;

    if let Some(defender) = ctx
        .view
        .nearest_friendly_where(unit.pos, |u| u.role.is_defender() && u.id != unit.id)
    {
        return if unit.pos.in_range_of(defender.pos, ctx.config.escort_range) {
            Decision::hold()
        } else {
            Decision::move_to(defender.pos, ctx.reuse())
        };
    }

    if let Some(spawn) = ctx.view.nearest_structure_where(unit.pos, |s| {
        s.kind == StructureKind::Spawn && s.owner == Ownership::Friendly
    }) {
        return if unit.pos.in_range_of(spawn.pos, ctx.config.spawn_rally_range) {
            Decision::hold()
        } else {
            Decision::move_to(spawn.pos, ctx.reuse())
        };
    }

    ctx.rally()
}

/// One random step, staying off the room border
fn patrol(ctx: &mut DecisionContext) -> Decision {
    let unit = ctx.unit;
    let dx: i16 = ctx.rng.gen_range(-1..=1);
    let dy: i16 = ctx.rng.gen_range(-1..=1);
    let x = (unit.pos.x as i16 + dx).clamp(1, ROOM_SIZE as i16 - 2) as u8;
    let y = (unit.pos.y as i16 + dy).clamp(1, ROOM_SIZE as i16 - 2) as u8;
    Decision::move_to(Pos::new(unit.pos.room, x, y), 0)
}
