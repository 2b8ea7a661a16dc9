//! Defensive tower decision logic
//!
//! Towers are state-free: one decision per tick from the snapshot alone.
//! Attacking always wins over maintenance; a tower never splits its energy.

use crate::actions::TowerAction;
use crate::core::config::DecisionConfig;
use crate::world::objects::{Ownership, Structure};
use crate::world::WorldView;

/// Decide a tower's single action for this tick
///
/// Nearest hostile in the room first; otherwise the nearest non-wall
/// structure worn below the repair threshold. `None` when the room is
/// quiet and intact.
pub fn run_tower(
    view: &WorldView,
    tower: &Structure,
    config: &DecisionConfig,
) -> Option<TowerAction> {
    if let Some(hostile) = view.nearest_hostile(tower.pos) {
        return Some(TowerAction::Attack(hostile.id));
    }

    view.nearest_structure_where(tower.pos, |s| {
        !s.kind.is_wall()
            && s.owner != Ownership::Hostile
            && (s.hits as f32) < (s.hits_max as f32) * config.tower_repair_threshold
    })
    .map(|s| TowerAction::Repair(s.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Body, Pos, RoomId, StructureId, UnitId};
    use crate::world::objects::{Hostile, StructureKind};
    use crate::world::{LinearDistance, Room, WorldSnapshot};

    fn pos(x: u8, y: u8) -> Pos {
        Pos::new(RoomId(1), x, y)
    }

    fn tower(p: Pos) -> Structure {
        Structure {
            id: StructureId(1),
            kind: StructureKind::Tower,
            owner: Ownership::Friendly,
            pos: p,
            hits: 3000,
            hits_max: 3000,
            store: None,
        }
    }

    fn structure(id: u32, kind: StructureKind, p: Pos, hits: u32, hits_max: u32) -> Structure {
        Structure {
            id: StructureId(id),
            kind,
            owner: Ownership::Friendly,
            pos: p,
            hits,
            hits_max,
            store: None,
        }
    }

    #[test]
    fn test_attack_takes_precedence_over_repair() {
        let mut snapshot = WorldSnapshot::new(1);
        let mut room = Room::new(RoomId(1));
        room.structures.push(tower(pos(10, 10)));
        room.structures
            .push(structure(2, StructureKind::Road, pos(11, 10), 10, 100));
        snapshot.add_room(room);
        snapshot.hostiles = vec![Hostile {
            id: UnitId(50),
            pos: pos(40, 40),
            hits: 100,
            hits_max: 100,
            body: Body::default(),
        }];

        let view = WorldView::new(&snapshot, &LinearDistance);
        let action = run_tower(&view, &tower(pos(10, 10)), &DecisionConfig::default());
        assert_eq!(action, Some(TowerAction::Attack(UnitId(50))));
    }

    #[test]
    fn test_repairs_only_below_threshold() {
        let mut snapshot = WorldSnapshot::new(1);
        let mut room = Room::new(RoomId(1));
        // 85% of max: above the 0.8 threshold, left alone
        room.structures
            .push(structure(2, StructureKind::Extension, pos(11, 10), 85, 100));
        // 60% of max: repaired
        room.structures
            .push(structure(3, StructureKind::Road, pos(20, 10), 60, 100));
        snapshot.add_room(room);

        let view = WorldView::new(&snapshot, &LinearDistance);
        let action = run_tower(&view, &tower(pos(10, 10)), &DecisionConfig::default());
        assert_eq!(action, Some(TowerAction::Repair(StructureId(3))));
    }

    #[test]
    fn test_walls_never_repaired() {
        let mut snapshot = WorldSnapshot::new(1);
        let mut room = Room::new(RoomId(1));
        room.structures
            .push(structure(2, StructureKind::Wall, pos(11, 10), 1, 1_000_000));
        snapshot.add_room(room);

        let view = WorldView::new(&snapshot, &LinearDistance);
        let action = run_tower(&view, &tower(pos(10, 10)), &DecisionConfig::default());
        assert_eq!(action, None);
    }

    #[test]
    fn test_nearest_worn_structure_wins() {
        let mut snapshot = WorldSnapshot::new(1);
        let mut room = Room::new(RoomId(1));
        room.structures
            .push(structure(2, StructureKind::Road, pos(30, 10), 10, 100));
        room.structures
            .push(structure(3, StructureKind::Road, pos(12, 10), 50, 100));
        snapshot.add_room(room);

        let view = WorldView::new(&snapshot, &LinearDistance);
        let action = run_tower(&view, &tower(pos(10, 10)), &DecisionConfig::default());
        assert_eq!(action, Some(TowerAction::Repair(StructureId(3))));
    }

    #[test]
    fn test_quiet_intact_room_does_nothing() {
        let mut snapshot = WorldSnapshot::new(1);
        snapshot.add_room(Room::new(RoomId(1)));

        let view = WorldView::new(&snapshot, &LinearDistance);
        let action = run_tower(&view, &tower(pos(10, 10)), &DecisionConfig::default());
        assert_eq!(action, None);
    }
}
