//! Context provided to every role decision procedure

use rand_chacha::ChaCha8Rng;

use crate::actions::Decision;
use crate::core::config::DecisionConfig;
use crate::memory::{ColonyMemory, UnitMemory};
use crate::world::objects::Unit;
use crate::world::{Room, WorldView};

/// Everything a role procedure may look at for one unit's decision
///
/// `memory` is the unit's own record (a clone the engine writes back);
/// `colony` is a read-only view of everyone else's records. A procedure
/// can therefore never write another unit's state.
pub struct DecisionContext<'a> {
    pub view: &'a WorldView<'a>,
    pub unit: &'a Unit,
    pub memory: &'a mut UnitMemory,
    pub colony: &'a ColonyMemory,
    pub config: &'a DecisionConfig,
    pub rng: &'a mut ChaCha8Rng,
}

impl<'a> DecisionContext<'a> {
    /// The unit's current room, if observed
    pub fn room(&self) -> Option<&'a Room> {
        self.view.room(self.unit.pos.room)
    }

    /// Path-reuse hint for movement requests
    pub fn reuse(&self) -> u32 {
        self.config.reuse_path
    }

    /// Idle fallback: head for the rally point (the room controller)
    ///
    /// Every no-candidate condition lands here, so an idle unit is always
    /// somewhere predictable instead of blocking a source or a doorway.
    pub fn rally(&self) -> Decision {
        match self.room().and_then(Room::rally_point) {
            Some(pos) => Decision::move_to(pos, self.reuse()),
            None => Decision::hold(),
        }
    }
}
