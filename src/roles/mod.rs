//! Per-role decision procedures
//!
//! One procedure per role, all sharing the same context shape. Dispatch is
//! an exhaustive match over the closed `Role` enum: adding a role without
//! a procedure is a compile error, not a unit that stands still.

pub mod combat;
pub mod context;
pub mod harvest;
pub mod logistics;

pub use context::DecisionContext;

use crate::actions::Decision;
use crate::core::types::Role;

/// Run the decision procedure for the context's unit
pub fn decide(ctx: &mut DecisionContext) -> Decision {
    match ctx.unit.role {
        Role::Miner => harvest::run_miner(ctx),
        Role::DropHarvester => harvest::run_drop_harvester(ctx),
        Role::StrongHarvester => harvest::run_strong_harvester(ctx),
        Role::Transporter => logistics::run_transporter(ctx),
        Role::Upgrader => logistics::run_upgrader(ctx),
        Role::Repairer => logistics::run_repairer(ctx),
        Role::Soldier => combat::run_soldier(ctx),
        Role::Ranger => combat::run_ranger(ctx),
        Role::RangedAttacker => combat::run_ranged_attacker(ctx),
        Role::Healer => combat::run_healer(ctx),
    }
}
