//! Tunable mechanics data: stage multiplier tables, item and crit constants,
//! and the per-move multiplier tables used by the dispatch step.
//!
//! These values come from the game's data pools. They are data, not logic;
//! changing them must never require touching the pipeline itself.

use crate::fixed::{Fx32, Fx64};
use crate::items::ItemId;
use crate::types::TypeId;

// ============================================================================
// Stat stage multipliers
// ============================================================================

const fn fx(raw: u32) -> Fx32 {
    Fx32::from_raw(raw)
}

/// Offensive stat multiplier per stage (10 is neutral).
#[rustfmt::skip]
pub static OFFENSIVE_STAT_STAGE_MULTIPLIERS: [Fx32; 21] = [
    fx(32),  fx(51),  fx(76),  fx(102), fx(128), fx(153), fx(179), fx(204),
    fx(230), fx(243), fx(256), fx(307), fx(358), fx(409), fx(460), fx(511),
    fx(562), fx(613), fx(664), fx(715), fx(766),
];

/// Defensive stat multiplier per stage (10 is neutral). Drops off faster
/// below neutral than the offensive curve.
#[rustfmt::skip]
pub static DEFENSIVE_STAT_STAGE_MULTIPLIERS: [Fx32; 21] = [
    fx(26),  fx(38),  fx(51),  fx(64),  fx(77),  fx(102), fx(128), fx(141),
    fx(153), fx(179), fx(256), fx(307), fx(332), fx(358), fx(384), fx(409),
    fx(435), fx(460), fx(486), fx(511), fx(537),
];

/// Accuracy multiplier per stage for male attackers.
#[rustfmt::skip]
pub static MALE_ACCURACY_STAGE_MULTIPLIERS: [Fx32; 21] = [
    fx(33),  fx(46),  fx(58),  fx(71),  fx(84),  fx(97),  fx(110), fx(128),
    fx(166), fx(205), fx(256), fx(269), fx(282), fx(294), fx(307), fx(320),
    fx(333), fx(345), fx(358), fx(371), fx(384),
];

/// Accuracy multiplier per stage for female attackers.
#[rustfmt::skip]
pub static FEMALE_ACCURACY_STAGE_MULTIPLIERS: [Fx32; 21] = [
    fx(38),  fx(51),  fx(64),  fx(77),  fx(90),  fx(102), fx(115), fx(141),
    fx(179), fx(217), fx(256), fx(269), fx(282), fx(294), fx(307), fx(320),
    fx(333), fx(345), fx(358), fx(371), fx(384),
];

/// Evasion multiplier per stage for male defenders. Note the off-unity
/// neutral entry: males are slightly easier to hit at stage 10.
#[rustfmt::skip]
pub static MALE_EVASION_STAGE_MULTIPLIERS: [Fx32; 21] = [
    fx(543), fx(512), fx(486), fx(460), fx(435), fx(409), fx(384), fx(358),
    fx(332), fx(307), fx(263), fx(256), fx(230), fx(204), fx(179), fx(153),
    fx(128), fx(102), fx(77),  fx(51),  fx(26),
];

/// Evasion multiplier per stage for female defenders.
#[rustfmt::skip]
pub static FEMALE_EVASION_STAGE_MULTIPLIERS: [Fx32; 21] = [
    fx(543), fx(512), fx(486), fx(460), fx(435), fx(409), fx(384), fx(358),
    fx(332), fx(307), fx(256), fx(243), fx(230), fx(204), fx(179), fx(153),
    fx(128), fx(102), fx(77),  fx(51),  fx(26),
];

// ============================================================================
// Scalar constants
// ============================================================================

pub const TINTED_LENS_MULTIPLIER: Fx32 = Fx32::CONST_1_4;
pub const SOLID_ROCK_MULTIPLIER: Fx64 = Fx64::CONST_0_75;
pub const BURN_DAMAGE_MULTIPLIER: Fx32 = Fx32::CONST_0_8;
pub const CLOUDY_DAMAGE_MULTIPLIER: Fx64 = Fx64::CONST_0_75;
pub const ME_FIRST_MULTIPLIER: Fx32 = Fx32::CONST_1_5;
pub const POWER_PITCHER_DAMAGE_MULTIPLIER: Fx32 = Fx32::CONST_1_5;
pub const AIR_BLADE_DAMAGE_MULTIPLIER: Fx32 = Fx32::CONST_1_5;

pub const POWER_BAND_STAT_BOOST: i32 = 6;
pub const SPECIAL_BAND_STAT_BOOST: i32 = 6;
pub const DEF_SCARF_STAT_BOOST: i32 = 8;
pub const ZINC_BAND_STAT_BOOST: i32 = 8;
pub const AURA_BOW_STAT_BOOST: i32 = 5;
pub const MUNCH_BELT_STAT_BOOST: i32 = 5;
pub const SCOPE_LENS_CRIT_RATE_BOOST: i32 = 15;
pub const SUPER_LUCK_CRIT_RATE_BOOST: i32 = 10;
pub const TYPE_ADVANTAGE_MASTER_CRIT_RATE: i32 = 40;
pub const DETECT_BAND_MOVE_ACCURACY_DROP: i32 = 30;
pub const QUICK_DODGER_MOVE_ACCURACY_DROP: i32 = 10;

pub const TECHNICIAN_MOVE_POWER_THRESHOLD: i32 = 4;
pub const OFFENSE_STAT_MAX: i32 = 999;
pub const MAX_HP_CAP: i32 = 999;

// Thrown projectile powers
pub const STICK_POWER: i16 = 2;
pub const IRON_THORN_POWER: i16 = 3;
pub const SILVER_SPIKE_POWER: i16 = 6;
pub const GOLD_FANG_POWER: i16 = 7;
pub const CACNEA_SPIKE_POWER: i16 = 5;
pub const CORSOLA_TWIG_POWER: i16 = 15;
pub const GOLD_THORN_POWER: i16 = 10;

// ============================================================================
// Per-move multiplier tables
// ============================================================================

pub const DIG_DAMAGE_MULTIPLIER: Fx32 = Fx32::CONST_0_5;
pub const RAZOR_WIND_DAMAGE_MULTIPLIER: Fx32 = Fx32::CONST_1_5;
pub const FACADE_DAMAGE_MULTIPLIER: Fx32 = Fx32::from_parts(2, 0);
pub const FOCUS_PUNCH_DAMAGE_MULTIPLIER: Fx32 = Fx32::from_parts(2, 0);
pub const SKY_ATTACK_DAMAGE_MULTIPLIER: Fx32 = Fx32::from_parts(2, 0);
pub const SOLARBEAM_DAMAGE_MULTIPLIER: Fx32 = Fx32::from_parts(2, 0);
pub const FLY_DAMAGE_MULTIPLIER: Fx32 = Fx32::CONST_1_7;
pub const DIVE_DAMAGE_MULTIPLIER: Fx32 = Fx32::CONST_1_7;
pub const BOUNCE_DAMAGE_MULTIPLIER: Fx32 = Fx32::CONST_1_7;
pub const SKULL_BASH_DAMAGE_MULTIPLIER: Fx32 = Fx32::from_parts(2, 0);
pub const SHADOW_FORCE_DAMAGE_MULTIPLIER: Fx32 = Fx32::from_parts(2, 0);

/// Rollout / Ice Ball ramp, indexed by prior successive hits (capped at 9).
#[rustfmt::skip]
pub static ROLLOUT_DAMAGE_MULT_TABLE: [Fx32; 10] = [
    fx(256), fx(307), fx(358), fx(409), fx(460),
    fx(511), fx(562), fx(613), fx(664), fx(715),
];

/// Reversal / Flail, indexed by the attacker's HP quartile (0 = lowest).
pub static REVERSAL_DAMAGE_MULT_TABLE: [Fx32; 4] = [fx(512), fx(384), fx(256), fx(128)];

/// Water Spout, indexed by the attacker's HP quartile.
pub static WATER_SPOUT_DAMAGE_MULT_TABLE: [Fx32; 4] = [fx(128), fx(256), fx(384), fx(512)];

/// Eruption, indexed by the attacker's HP quartile.
pub static ERUPTION_DAMAGE_MULT_TABLE: [Fx32; 4] = [fx(128), fx(256), fx(384), fx(512)];

/// Wring Out / Crush Grip, indexed by the defender's HP quartile.
pub static WRING_OUT_DAMAGE_MULT_TABLE: [Fx32; 4] = [fx(128), fx(256), fx(384), fx(512)];

/// Last Resort, indexed by the number of other moves out of uses minus one.
pub static LAST_RESORT_DAMAGE_MULT_TABLE: [Fx32; 4] = [fx(307), fx(384), fx(435), fx(512)];

/// Weather Ball damage multiplier, indexed by weather.
#[rustfmt::skip]
pub static WEATHER_BALL_DAMAGE_MULT_TABLE: [Fx32; 8] = [
    fx(256), fx(512), fx(512), fx(256), fx(512), fx(512), fx(256), fx(512),
];

/// Weather Ball type, indexed by weather.
pub static WEATHER_BALL_TYPE_TABLE: [TypeId; 8] = [
    TypeId::Normal, // Clear
    TypeId::Fire,   // Sunny
    TypeId::Rock,   // Sandstorm
    TypeId::Normal, // Cloudy
    TypeId::Water,  // Rain
    TypeId::Ice,    // Hail
    TypeId::Normal, // Fog
    TypeId::Ice,    // Snow
];

// ============================================================================
// Natural Gift
// ============================================================================

/// One entry of the Natural Gift item table.
#[derive(Clone, Copy, Debug)]
pub struct NaturalGiftInfo {
    pub item_id: ItemId,
    pub type_id: TypeId,
    /// Boost added to Natural Gift's default base power of 1 during the
    /// damage calculation.
    pub base_power_boost: i16,
}

const fn gift(item_id: ItemId, type_id: TypeId, base_power_boost: i16) -> NaturalGiftInfo {
    NaturalGiftInfo {
        item_id,
        type_id,
        base_power_boost,
    }
}

/// Items usable with Natural Gift and the type/power they grant.
pub static NATURAL_GIFT_ITEM_TABLE: [NaturalGiftInfo; 11] = [
    gift(ItemId::CheriBerry, TypeId::Fire, 1),
    gift(ItemId::ChestoBerry, TypeId::Water, 1),
    gift(ItemId::PechaBerry, TypeId::Electric, 1),
    gift(ItemId::RawstBerry, TypeId::Grass, 1),
    gift(ItemId::AspearBerry, TypeId::Ice, 1),
    gift(ItemId::LeppaBerry, TypeId::Fighting, 2),
    gift(ItemId::OranBerry, TypeId::Poison, 2),
    gift(ItemId::PersimBerry, TypeId::Ground, 2),
    gift(ItemId::LumBerry, TypeId::Flying, 2),
    gift(ItemId::SitrusBerry, TypeId::Psychic, 3),
    gift(ItemId::BlastSeed, TypeId::Dragon, 4),
];
