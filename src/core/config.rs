//! Decision tuning constants with documented defaults
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::Deserialize;

use crate::core::error::{ColonyError, Result};

/// Configuration for the decision procedures
///
/// Defaults match the simulation rules the heuristics were tuned against.
/// Hosts may override individual fields through `from_toml_str`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    // === HARVEST ALLOCATION ===
    /// Energy-capacity divisor determining concurrent harvest slots
    ///
    /// A source supports `energy_capacity / energy_per_slot` simultaneous
    /// harvesters. At the default (300), a 3000-capacity source carries
    /// ten slots; a depleted-cycle 1500 source carries five.
    pub energy_per_slot: u32,

    // === COMBAT RANGES ===
    /// Preferred engagement range for ranged units
    ///
    /// Skirmishers close to this range and stop; it is the maximum range
    /// of their ranged attack.
    pub standoff_range: u32,

    /// Range at or below which a ranged unit disengages
    ///
    /// Must be strictly less than `standoff_range`, otherwise skirmishers
    /// flee the fights they are trying to pick.
    pub flee_trigger_range: u32,

    /// How close an escort stays to the defender it shadows
    pub escort_range: u32,

    /// Idle buffer around a spawn for combat units with nothing to do
    pub spawn_rally_range: u32,

    // === WORK RANGES ===
    /// Maximum range of the repair action
    pub repair_range: u32,

    /// Maximum range of the controller-upgrade action
    pub upgrade_range: u32,

    /// Maximum range of the ranged-heal action
    pub ranged_heal_range: u32,

    // === MAINTENANCE ===
    /// Fraction of max hits below which a tower considers a structure
    /// worth repairing
    ///
    /// At 0.8, structures are let to wear 20% before tower energy is spent
    /// on them, keeping towers charged for defense.
    pub tower_repair_threshold: f32,

    // === MOVEMENT ===
    /// Path-reuse hint forwarded with every movement request
    ///
    /// Purely an optimization directive for the host's pathing layer; the
    /// decision procedures never read it back.
    pub reuse_path: u32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            energy_per_slot: 300,

            standoff_range: 3,
            flee_trigger_range: 1,
            escort_range: 2,
            spawn_rally_range: 3,

            repair_range: 3,
            upgrade_range: 3,
            ranged_heal_range: 3,

            tower_repair_threshold: 0.8,

            reuse_path: 5,
        }
    }
}

impl DecisionConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text, validating the result
    ///
    /// Missing fields fall back to defaults, so hosts can override a single
    /// constant without restating the rest.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.energy_per_slot == 0 {
            return Err(ColonyError::InvalidConfig(
                "energy_per_slot must be positive".into(),
            ));
        }

        if self.flee_trigger_range >= self.standoff_range {
            return Err(ColonyError::InvalidConfig(format!(
                "flee_trigger_range ({}) must be < standoff_range ({})",
                self.flee_trigger_range, self.standoff_range
            )));
        }

        if !(self.tower_repair_threshold > 0.0 && self.tower_repair_threshold <= 1.0) {
            return Err(ColonyError::InvalidConfig(format!(
                "tower_repair_threshold ({}) must be in (0, 1]",
                self.tower_repair_threshold
            )));
        }

        if self.repair_range == 0 || self.upgrade_range == 0 || self.ranged_heal_range == 0 {
            return Err(ColonyError::InvalidConfig(
                "work ranges must be positive".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<DecisionConfig> = OnceLock::new();

/// Get the global decision config (initializes with defaults if not set)
pub fn config() -> &'static DecisionConfig {
    CONFIG.get_or_init(DecisionConfig::default)
}

/// Set the global decision config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: DecisionConfig) -> std::result::Result<(), DecisionConfig> {
    CONFIG.set(config)
}
