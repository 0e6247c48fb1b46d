//! dungeon_calc - Bit-exact damage calculation engine for a mystery-dungeon
//! roguelike battle system.
//!
//! This library reproduces the damage formula of the game's fixed-point
//! engine quirk for quirk: truncation and rounding happen at the same bit
//! widths, known bugs are preserved rather than fixed, and identical inputs
//! with identical RNG responses produce bit-identical outputs on every
//! platform. It exists so external tools can predict exact damage, hit
//! probability, and critical-hit behavior for a given attacker, defender,
//! move, and battlefield state.
//!
//! The calculation pipeline lives in [`damage`]; everything else is the data
//! model it runs on (entities, battlefield state, reference catalogs) or
//! supporting plumbing (fixed-point math, name directories, the scenario
//! loader, the RNG abstraction).

/// Fixed-point arithmetic with game-exact rounding and saturation
pub mod fixed;

/// Elemental types and the matchup tables
pub mod types;

/// Ability identifiers
pub mod abilities;

/// IQ skill identifiers
pub mod iq;

/// Item identifiers and item-class predicates
pub mod items;

/// Exclusive item effects and their damage tables
pub mod exclusive;

/// Move identifiers and the move reference catalog
pub mod moves;

/// Species identifiers and the species reference catalog
pub mod species;

/// Stage multiplier tables and mechanics constants
pub mod mechanics;

/// Name/identifier directories for every enumerable category
pub mod names;

/// Combatant data model
pub mod entity;

/// Dungeon-wide battlefield state
pub mod dungeon;

/// The per-calculation diagnostic trace
pub mod diag;

/// The dungeon RNG abstraction
pub mod rng;

/// The damage calculation engine
pub mod damage;

/// Scenario configuration loader
pub mod config;

// Re-export commonly used types
pub use abilities::AbilityId;
pub use config::{parse_scenario, ConfigError, Scenario};
pub use damage::{
    simulate_damage_calc, simulate_damage_calc_generic, simulate_damage_calc_projectile,
    DamageData,
};
pub use diag::DamageCalcDiag;
pub use dungeon::{DamageMessage, DungeonState, FixedRoomId, Weather};
pub use entity::{Monster, MonsterEntity, StatModifiers, StatusFlags, Statuses};
pub use exclusive::ExclusiveItemEffectId;
pub use fixed::{DecFx16_16, Fx32, Fx64};
pub use iq::IqSkillId;
pub use items::ItemId;
pub use moves::{MoveCategory, MoveId, MoveUse};
pub use rng::{DungeonRng, MockDungeonRng};
pub use species::{Gender, SpeciesId};
pub use types::{TypeId, TypeMatchup};
