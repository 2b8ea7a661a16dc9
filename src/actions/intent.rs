//! The intent vocabulary decision procedures emit
//!
//! A `Decision` is the complete answer for one unit for one tick: at most
//! one movement request, at most one action, plus the healer's standing
//! self-heal. The host executes it and, where the simulation reports
//! per-action results, feeds them back as `ActionOutcome`s.

use serde::{Deserialize, Serialize};

use crate::core::types::{DropId, Pos, RoomId, StructureId, UnitId};

/// Something a unit does to a target this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Harvest(crate::core::types::SourceId),
    Transfer(StructureId),
    Withdraw(StructureId),
    Pickup(DropId),
    /// Drop the whole carried load on the current tile
    DropEnergy,
    Attack(UnitId),
    AttackStructure(StructureId),
    RangedAttack(UnitId),
    /// Area attack hitting everything in range
    RangedMassAttack,
    Heal(UnitId),
    RangedHeal(UnitId),
    Repair(StructureId),
    UpgradeController,
}

/// Where a movement request points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    /// A tile, typically the chosen target's position
    Pos(Pos),
    /// Another room; the pathing layer picks the exit
    Room(RoomId),
    /// Flee: maximize distance from this position
    AwayFrom(Pos),
}

/// A request against the host's pathing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub destination: Destination,
    /// Ticks the pathing layer may reuse a cached path; an optimization
    /// hint only
    pub reuse_path: u32,
}

/// One unit's complete answer for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Decision {
    pub movement: Option<MoveRequest>,
    pub action: Option<Action>,
    /// Healers set this on every decision; it composes with any action
    pub self_heal: bool,
}

impl Decision {
    /// Do nothing this tick
    pub fn hold() -> Self {
        Self::default()
    }

    pub fn act(action: Action) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    pub fn move_to(pos: Pos, reuse_path: u32) -> Self {
        Self {
            movement: Some(MoveRequest {
                destination: Destination::Pos(pos),
                reuse_path,
            }),
            ..Self::default()
        }
    }

    pub fn travel(room: RoomId, reuse_path: u32) -> Self {
        Self {
            movement: Some(MoveRequest {
                destination: Destination::Room(room),
                reuse_path,
            }),
            ..Self::default()
        }
    }

    pub fn flee(from: Pos, reuse_path: u32) -> Self {
        Self {
            movement: Some(MoveRequest {
                destination: Destination::AwayFrom(from),
                reuse_path,
            }),
            ..Self::default()
        }
    }

    /// Attach a movement request, keeping the action
    pub fn while_moving_to(mut self, pos: Pos, reuse_path: u32) -> Self {
        self.movement = Some(MoveRequest {
            destination: Destination::Pos(pos),
            reuse_path,
        });
        self
    }

    pub fn with_self_heal(mut self) -> Self {
        self.self_heal = true;
        self
    }

    /// True when the unit was left with nothing at all to do
    pub fn is_hold(&self) -> bool {
        self.movement.is_none() && self.action.is_none() && !self.self_heal
    }
}

/// A defensive structure's single action for the tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerAction {
    Attack(UnitId),
    Repair(StructureId),
}

/// Result code the host reports after executing an action
///
/// Only `Completed` and `NotInRange` are expected in normal operation;
/// anything else is surfaced to the operator log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Completed,
    /// Target valid but too far; the movement request covers the retry
    NotInRange,
    /// Host-specific failure code
    Failed(i32),
}
