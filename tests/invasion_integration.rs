//! Invasion planning over a small multi-room map

use colony_mind::core::types::{Body, Direction, Pos, Role, RoomId, Store, UnitId};
use colony_mind::invasion::{can_succeed, choose_target, ForceEstimator, LinearForce};
use colony_mind::memory::{ColonyMemory, UnitMemory};
use colony_mind::world::objects::{Controller, Hostile, Ownership, Unit};
use colony_mind::world::{LinearDistance, Room, WorldSnapshot, WorldView};

fn room_with_controller(id: u32, owner: Ownership) -> Room {
    let mut room = Room::new(RoomId(id));
    room.controller = Some(Controller {
        pos: Pos::new(RoomId(id), 25, 25),
        owner,
        level: 2,
    });
    room
}

fn fighter(id: u32, room: u32, attack: u8, ranged: u8) -> Unit {
    Unit {
        id: UnitId(id),
        role: Role::Soldier,
        pos: Pos::new(RoomId(room), 10, 10),
        hits: 100,
        hits_max: 100,
        store: Store::empty(0),
        body: Body {
            attack,
            ranged_attack: ranged,
            moves: 4,
            ..Body::default()
        },
    }
}

fn garrison(id: u32, room: u32, attack: u8, ranged: u8) -> Hostile {
    Hostile {
        id: UnitId(id),
        pos: Pos::new(RoomId(room), 30, 30),
        hits: 100,
        hits_max: 100,
        body: Body {
            attack,
            ranged_attack: ranged,
            ..Body::default()
        },
    }
}

#[test]
fn unobserved_exit_wins_over_everything_else() {
    let mut snapshot = WorldSnapshot::new(1);
    let mut home = room_with_controller(1, Ownership::Friendly);
    home.exits[Direction::North.index()] = Some(RoomId(2));
    home.exits[Direction::East.index()] = Some(RoomId(3));
    snapshot.add_room(home.clone());

    // North neighbor observed and unclaimed; east neighbor never seen
    snapshot.add_room(room_with_controller(2, Ownership::Hostile));

    let view = WorldView::new(&snapshot, &LinearDistance);
    assert_eq!(choose_target(&view, &home), Some(RoomId(3)));
}

#[test]
fn fully_claimed_neighborhood_yields_no_target() {
    let mut snapshot = WorldSnapshot::new(1);
    let mut home = room_with_controller(1, Ownership::Friendly);
    for (i, direction) in Direction::ALL.iter().enumerate() {
        home.exits[direction.index()] = Some(RoomId(10 + i as u32));
    }
    snapshot.add_room(home.clone());
    snapshot.add_room(room_with_controller(10, Ownership::Friendly));
    snapshot.add_room(room_with_controller(11, Ownership::Hostile));
    snapshot.add_room(room_with_controller(12, Ownership::Friendly));
    snapshot.add_room(room_with_controller(13, Ownership::Hostile));

    let view = WorldView::new(&snapshot, &LinearDistance);
    assert_eq!(choose_target(&view, &home), None);
}

#[test]
fn planned_strike_checks_out_then_garrison_growth_cancels_it() {
    let mut snapshot = WorldSnapshot::new(1);
    let mut home = room_with_controller(1, Ownership::Friendly);
    home.exits[Direction::South.index()] = Some(RoomId(2));
    snapshot.add_room(home.clone());
    snapshot.add_room(room_with_controller(2, Ownership::Unclaimed));

    snapshot.units = vec![fighter(1, 1, 4, 1), fighter(2, 1, 2, 2)];
    snapshot.hostiles = vec![garrison(50, 2, 3, 2)];

    let mut colony = ColonyMemory::new();
    for unit in &snapshot.units {
        let mut record = UnitMemory::new(Role::Soldier);
        record.invasion_target = Some(RoomId(2));
        colony.insert_unit(unit.id, record);
    }

    let view = WorldView::new(&snapshot, &LinearDistance);
    let target = choose_target(&view, &home).expect("unclaimed neighbor is a target");
    assert_eq!(target, RoomId(2));

    // Allied 6 + 6 = 12 against hostile 7: go
    assert!(can_succeed(&view, RoomId(1), target, &colony, &LinearForce));

    // Reinforcements arrive: 7 + 6 = 13 > 12, strike is off
    snapshot.hostiles.push(garrison(51, 2, 2, 2));
    let view = WorldView::new(&snapshot, &LinearDistance);
    assert!(!can_succeed(&view, RoomId(1), target, &colony, &LinearForce));
}

#[test]
fn assessment_is_recomputed_not_cached() {
    let mut snapshot = WorldSnapshot::new(1);
    snapshot.add_room(room_with_controller(1, Ownership::Friendly));
    snapshot.add_room(room_with_controller(2, Ownership::Unclaimed));
    snapshot.units = vec![fighter(1, 1, 5, 0)];
    snapshot.hostiles = vec![];

    let mut colony = ColonyMemory::new();
    let mut record = UnitMemory::new(Role::Soldier);
    record.invasion_target = Some(RoomId(2));
    colony.insert_unit(UnitId(1), record);

    let view = WorldView::new(&snapshot, &LinearDistance);
    assert!(can_succeed(&view, RoomId(1), RoomId(2), &colony, &LinearForce));

    // The committed unit leaves the staging room: same memory, new world
    snapshot.units[0].pos = Pos::new(RoomId(2), 10, 10);
    let view = WorldView::new(&snapshot, &LinearDistance);
    assert!(!can_succeed(&view, RoomId(1), RoomId(2), &colony, &LinearForce));
}

#[test]
fn custom_estimator_slots_in_without_call_site_changes() {
    struct HealAware;
    impl ForceEstimator for HealAware {
        fn unit_power(&self, body: &Body) -> u32 {
            body.attack as u32 + 2 * body.ranged_attack as u32 + body.heal as u32
        }
    }

    let mut snapshot = WorldSnapshot::new(1);
    snapshot.add_room(room_with_controller(1, Ownership::Friendly));
    snapshot.add_room(room_with_controller(2, Ownership::Unclaimed));
    let mut medic = fighter(1, 1, 2, 0);
    medic.body.heal = 3;
    snapshot.units = vec![medic];
    snapshot.hostiles = vec![garrison(50, 2, 3, 0)];

    let mut colony = ColonyMemory::new();
    let mut record = UnitMemory::new(Role::Soldier);
    record.invasion_target = Some(RoomId(2));
    colony.insert_unit(UnitId(1), record);

    let view = WorldView::new(&snapshot, &LinearDistance);
    // Linear heuristic sees 2 vs 3 and declines
    assert!(!can_succeed(&view, RoomId(1), RoomId(2), &colony, &LinearForce));
    // A heal-aware scorer sees 5 vs 3 and commits
    assert!(can_succeed(&view, RoomId(1), RoomId(2), &colony, &HealAware));
}
