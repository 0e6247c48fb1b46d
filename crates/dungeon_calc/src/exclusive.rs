//! Exclusive item effect identifiers and their damage-negation tables.
//!
//! Exclusive items grant flaggable passive effects rather than being modeled
//! as held items. The pipeline consults individual effect flags plus two
//! data tables: the per-type damage negation/absorption table and the
//! weather-keyed evasion boosts.

use crate::dungeon::Weather;
use crate::types::TypeId;

/// Exclusive item effect identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ExclusiveItemEffectId {
    /// Plain stat boost carried by the exclusive-item stat boost fields;
    /// also doubles as the "no effect" filler in keyed tables.
    StatBoost = 0,
    MiracleEye,
    Scrappy,
    HalvedDamage,
    HalvedPhysicalDamage,
    HalvedSpecialDamage,
    BypassReflectLightScreen,
    NoCriticalHits,
    DamageBoost50Pct,

    // Per-type damage negation
    NoNormalDamage,
    NoFireDamage,
    NoWaterDamage,
    NoGrassDamage,
    NoElectricDamage,
    NoIceDamage,
    NoFightingDamage,
    NoPoisonDamage,
    NoGroundDamage,
    NoFlyingDamage,
    NoPsychicDamage,
    NoBugDamage,
    NoRockDamage,
    NoGhostDamage,
    NoDragonDamage,
    NoDarkDamage,
    NoSteelDamage,

    // Per-type damage absorption (heals instead of negating outright)
    AbsorbFireDamage,
    AbsorbWaterDamage,
    AbsorbGrassDamage,
    AbsorbElectricDamage,
    AbsorbIceDamage,

    // Weather-keyed evasion boosts
    EvasionBoostSunny,
    EvasionBoostSandstorm,
    EvasionBoostCloudy,
    EvasionBoostRain,
    EvasionBoostHail,
    EvasionBoostFog,
    EvasionBoostSnow,
}

/// Size of per-monster exclusive item effect flag arrays.
pub const EXCLUSIVE_EFFECT_COUNT: usize = 38;

impl Default for ExclusiveItemEffectId {
    fn default() -> ExclusiveItemEffectId {
        ExclusiveItemEffectId::StatBoost
    }
}

/// How a type-keyed exclusive effect disposes of incoming damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeDamageDisposition {
    /// Damage is negated outright (nothing happens to the defender).
    Negates,
    /// The hit still counts as damage dealt, but the defender heals.
    Absorbs,
}

/// One entry of the per-type damage negation table.
#[derive(Clone, Copy, Debug)]
pub struct TypeDamageNegatingEntry {
    pub type_id: TypeId,
    pub effect: ExclusiveItemEffectId,
    pub disposition: TypeDamageDisposition,
}

const fn negate(type_id: TypeId, effect: ExclusiveItemEffectId) -> TypeDamageNegatingEntry {
    TypeDamageNegatingEntry {
        type_id,
        effect,
        disposition: TypeDamageDisposition::Negates,
    }
}

const fn absorb(type_id: TypeId, effect: ExclusiveItemEffectId) -> TypeDamageNegatingEntry {
    TypeDamageNegatingEntry {
        type_id,
        effect,
        disposition: TypeDamageDisposition::Absorbs,
    }
}

/// Exclusive item effects that negate or absorb damage of a specific type.
pub static TYPE_DAMAGE_NEGATING_EXCLUSIVE_ITEM_EFFECTS: [TypeDamageNegatingEntry; 22] = [
    negate(TypeId::Normal, ExclusiveItemEffectId::NoNormalDamage),
    negate(TypeId::Fire, ExclusiveItemEffectId::NoFireDamage),
    negate(TypeId::Water, ExclusiveItemEffectId::NoWaterDamage),
    negate(TypeId::Grass, ExclusiveItemEffectId::NoGrassDamage),
    negate(TypeId::Electric, ExclusiveItemEffectId::NoElectricDamage),
    negate(TypeId::Ice, ExclusiveItemEffectId::NoIceDamage),
    negate(TypeId::Fighting, ExclusiveItemEffectId::NoFightingDamage),
    negate(TypeId::Poison, ExclusiveItemEffectId::NoPoisonDamage),
    negate(TypeId::Ground, ExclusiveItemEffectId::NoGroundDamage),
    negate(TypeId::Flying, ExclusiveItemEffectId::NoFlyingDamage),
    negate(TypeId::Psychic, ExclusiveItemEffectId::NoPsychicDamage),
    negate(TypeId::Bug, ExclusiveItemEffectId::NoBugDamage),
    negate(TypeId::Rock, ExclusiveItemEffectId::NoRockDamage),
    negate(TypeId::Ghost, ExclusiveItemEffectId::NoGhostDamage),
    negate(TypeId::Dragon, ExclusiveItemEffectId::NoDragonDamage),
    negate(TypeId::Dark, ExclusiveItemEffectId::NoDarkDamage),
    negate(TypeId::Steel, ExclusiveItemEffectId::NoSteelDamage),
    absorb(TypeId::Fire, ExclusiveItemEffectId::AbsorbFireDamage),
    absorb(TypeId::Water, ExclusiveItemEffectId::AbsorbWaterDamage),
    absorb(TypeId::Grass, ExclusiveItemEffectId::AbsorbGrassDamage),
    absorb(TypeId::Electric, ExclusiveItemEffectId::AbsorbElectricDamage),
    absorb(TypeId::Ice, ExclusiveItemEffectId::AbsorbIceDamage),
];

/// Per-weather evasion-boosting exclusive item effects. `None` for weathers
/// without a matching item line.
pub fn evasion_boost_effect_for_weather(weather: Weather) -> Option<ExclusiveItemEffectId> {
    match weather {
        Weather::Clear => None,
        Weather::Sunny => Some(ExclusiveItemEffectId::EvasionBoostSunny),
        Weather::Sandstorm => Some(ExclusiveItemEffectId::EvasionBoostSandstorm),
        Weather::Cloudy => Some(ExclusiveItemEffectId::EvasionBoostCloudy),
        Weather::Rain => Some(ExclusiveItemEffectId::EvasionBoostRain),
        Weather::Hail => Some(ExclusiveItemEffectId::EvasionBoostHail),
        Weather::Fog => Some(ExclusiveItemEffectId::EvasionBoostFog),
        Weather::Snow => Some(ExclusiveItemEffectId::EvasionBoostSnow),
    }
}
