pub mod intent;

pub use intent::{Action, ActionOutcome, Decision, Destination, MoveRequest, TowerAction};
