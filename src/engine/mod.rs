//! The per-tick decision pass
//!
//! One full sweep over every controlled unit and tower, in ascending id
//! order, producing the tick's complete set of intents. Each unit's memory
//! record is cloned, mutated by its own role procedure, and written back
//! before the next unit runs; that write-back is what lets earlier source
//! assignments raise the slot counts seen by later units in the same pass.
//!
//! A unit with a missing memory record is skipped with a warning and no
//! other unit is affected.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::actions::{Action, ActionOutcome, Decision, TowerAction};
use crate::core::config::DecisionConfig;
use crate::core::types::{Role, RoomId, StructureId, Tick, UnitId};
use crate::memory::ColonyMemory;
use crate::roles::{self, DecisionContext};
use crate::tower;
use crate::world::objects::{Ownership, Structure, StructureKind};
use crate::world::{DistanceOracle, WorldSnapshot, WorldView};

/// Observability events emitted during a pass
///
/// Hosts feed these into logs or overlays; the pass itself never reads
/// them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionEvent {
    /// A unit received a decision with something to do
    Planned { unit: UnitId, role: Role },
    /// A unit found no candidate anywhere and is holding position
    IdleFallback { unit: UnitId, role: Role },
    /// A unit had no memory record and was skipped
    SkippedNoMemory { unit: UnitId },
}

/// Complete output of one decision pass
#[derive(Debug, Clone, Default)]
pub struct TickPlan {
    pub tick: Tick,
    pub decisions: Vec<(UnitId, Decision)>,
    pub tower_actions: Vec<(StructureId, TowerAction)>,
    pub events: Vec<DecisionEvent>,
}

/// Run the decision pass for every controlled unit and tower
///
/// Deterministic for a given snapshot, memory state, and config: units run
/// in ascending id order and the patrol rng is seeded from the tick.
pub fn plan_tick(
    snapshot: &WorldSnapshot,
    paths: &dyn DistanceOracle,
    colony: &mut ColonyMemory,
    config: &DecisionConfig,
) -> TickPlan {
    let view = WorldView::new(snapshot, paths);
    let mut rng = ChaCha8Rng::seed_from_u64(snapshot.tick);
    let mut plan = TickPlan {
        tick: snapshot.tick,
        ..TickPlan::default()
    };

    let mut unit_ids: Vec<UnitId> = snapshot.units.iter().map(|u| u.id).collect();
    unit_ids.sort_unstable();

    for id in unit_ids {
        let Some(unit) = view.unit(id) else {
            continue;
        };
        let Some(record) = colony.unit(id) else {
            tracing::warn!(unit = id.0, "no memory record for unit, skipping");
            plan.events.push(DecisionEvent::SkippedNoMemory { unit: id });
            continue;
        };

        let mut local = record.clone();
        let decision = {
            let mut ctx = DecisionContext {
                view: &view,
                unit,
                memory: &mut local,
                colony: &*colony,
                config,
                rng: &mut rng,
            };
            roles::decide(&mut ctx)
        };
        colony.insert_unit(id, local);

        tracing::debug!(unit = id.0, role = ?unit.role, "decision planned");
        plan.events.push(if decision.is_hold() {
            DecisionEvent::IdleFallback {
                unit: id,
                role: unit.role,
            }
        } else {
            DecisionEvent::Planned {
                unit: id,
                role: unit.role,
            }
        });
        plan.decisions.push((id, decision));
    }

    plan_towers(&view, snapshot, config, &mut plan);
    plan
}

fn plan_towers(
    view: &WorldView,
    snapshot: &WorldSnapshot,
    config: &DecisionConfig,
    plan: &mut TickPlan,
) {
    let mut room_ids: Vec<RoomId> = snapshot.rooms.keys().copied().collect();
    room_ids.sort_unstable();

    for room_id in room_ids {
        let mut towers: Vec<&Structure> = view
            .structures_of_kind(room_id, StructureKind::Tower)
            .filter(|s| s.owner == Ownership::Friendly)
            .collect();
        towers.sort_by_key(|s| s.id);

        for structure in towers {
            if let Some(action) = tower::run_tower(view, structure, config) {
                plan.tower_actions.push((structure.id, action));
            }
        }
    }
}

/// Record the host's report of how an issued action went
///
/// Completion and out-of-range are routine; anything else is surfaced with
/// enough context to diagnose. Never panics, never retries: the next pass
/// re-derives everything anyway.
pub fn report_outcome(unit: UnitId, action: Action, outcome: ActionOutcome) {
    match outcome {
        ActionOutcome::Completed => {
            tracing::trace!(unit = unit.0, ?action, "action completed");
        }
        ActionOutcome::NotInRange => {
            tracing::debug!(unit = unit.0, ?action, "target out of range, closing");
        }
        ActionOutcome::Failed(code) => {
            tracing::warn!(unit = unit.0, ?action, code, "action failed");
        }
    }
}
