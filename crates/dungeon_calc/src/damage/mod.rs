//! The damage calculation engine: entry points, the per-move dispatch
//! table, and the assembled pipeline.
//!
//! A calculation flows through up to four stages:
//!
//! 1. **Pre-checks** - semi-invulnerable forced misses, Soundproof,
//!    Forewarn, the first hit check, and redirect abilities. Any failure
//!    aborts with zero damage.
//! 2. **Dispatch** - a per-move rule selecting the damage multiplier (or a
//!    whole-formula override for Weather Ball and Natural Gift).
//! 3. **Core formula** - stat/modifier resolution, the fixed-point damage
//!    expression, and crit resolution.
//! 4. **Damage sequence** - the second hit check and ability/item
//!    immunities.
//!
//! The engine mutates the attacker's two transient flags and the
//! battlefield's diagnostic trace; callers running what-if variants must
//! clone their inputs per run.

mod effects;
mod formula;
mod hit;

pub use formula::calc_damage;
pub use effects::{
    calc_type_based_damage_effects, flash_fire_should_activate, genders_equal_not_genderless,
    get_type_matchup,
};
pub use hit::{
    apply_ability_and_effect_immunities, execute_move_effect_prechecks, move_hit_check,
    run_damage_sequence,
};

use crate::dungeon::{DamageMessage, DungeonState, Weather};
use crate::entity::{MonsterEntity, StatusFlags};
use crate::fixed::{div4_trunc, Fx32};
use crate::mechanics;
use crate::moves::{self, MoveCategory, MoveId, MoveUse};
use crate::types::{TypeId, TypeMatchup};

// ============================================================================
// Result type
// ============================================================================

/// Outcome of a damage calculation.
#[derive(Clone, Debug)]
pub struct DamageData {
    /// Damage dealt by the move.
    pub damage: i32,
    /// Message to display.
    pub damage_message: DamageMessage,
    /// Result of the combined type matchup calculation.
    pub type_matchup: TypeMatchup,
    /// Type of the move used.
    pub type_id: TypeId,
    /// Category of the move used.
    pub category: MoveCategory,
    /// Whether there was a critical hit.
    pub critical_hit: bool,
    /// Set when the matchup ends in full immunity from Flash Fire,
    /// Levitate, or magnet-rise hovering. Only consulted to skip the
    /// set-damage override downstream.
    pub full_type_immunity: bool,
    /// Set at various points to indicate no damage should be dealt;
    /// checked at the very end and overrides everything else.
    pub no_damage: bool,
    /// The defender healed instead of taking damage. The in-game code
    /// heals mid-sequence; this engine only calculates, so the fact is
    /// reported instead.
    pub healed: bool,
}

impl Default for DamageData {
    fn default() -> DamageData {
        DamageData {
            damage: 0,
            damage_message: DamageMessage::Move,
            type_matchup: TypeMatchup::Immune,
            type_id: TypeId::None,
            category: MoveCategory::Physical,
            critical_hit: false,
            full_type_immunity: false,
            no_damage: false,
            healed: false,
        }
    }
}

// ============================================================================
// Per-move dispatch
// ============================================================================

/// The damage-multiplier rule a move resolves to before the core formula.
///
/// Keeping this a closed set of tagged rules (instead of ad-hoc branches)
/// keeps the per-move data testable apart from the formula.
#[derive(Clone, Copy, Debug)]
enum MoveDamageRule {
    /// Multiplier 1.
    Neutral,
    /// Multiplier 0 (the null move).
    Zero,
    /// A fixed multiplier.
    Mult(Fx32),
    /// Doubles when the defender has one of the given statuses.
    DoubleIfDefenderStatus(StatusFlags),
    /// A fixed multiplier when the attacker has a burn-group status.
    MultIfAttackerBurnGroup(Fx32),
    /// Indexed by the attacker's HP quartile.
    AttackerHpTier(&'static [Fx32; 4]),
    /// Indexed by the defender's HP quartile.
    DefenderHpTier(&'static [Fx32; 4]),
    /// Rollout-style ramp over prior successive hits.
    SuccessiveHitRamp,
    /// Triple-Kick-style ramp: hits + 1, capped at 3.
    SuccessiveHitCount,
    /// The defender's species weight scalar.
    DefenderWeight,
    /// The attacker's stockpile counter.
    StockpileCounter,
    /// Remaining-uses fraction tiers.
    TrumpCardTiers,
    /// Requires an exhausted move slot; tiered by how many.
    LastResortTiers,
    /// Doubles below half HP.
    DoubleIfDefenderHalfHp,
    /// Doubles at minimum speed.
    DoubleIfAttackerSpeedDown,
    /// Halved in weather that blocks the charge turn's sunlight.
    SolarBeamWeather,
    /// Fails outright unless the defender has a sleep-group status.
    RequiresSleepingDefender,
    /// Full formula override (type and multiplier from weather).
    WeatherBallOverride,
    /// Full formula override (type and power from the held item).
    NaturalGiftOverride,
}

/// Resolve the damage rule for a move. Moves without special handling get
/// the neutral rule.
fn damage_rule(move_id: MoveId) -> MoveDamageRule {
    use MoveDamageRule::*;
    match move_id {
        MoveId::Nothing => Zero,
        MoveId::IceBall | MoveId::Rollout => SuccessiveHitRamp,
        MoveId::Dig => Mult(mechanics::DIG_DAMAGE_MULTIPLIER),
        MoveId::WeatherBall => WeatherBallOverride,
        MoveId::Whirlpool | MoveId::Surf => DoubleIfDefenderStatus(StatusFlags::DIVING),
        MoveId::Gust | MoveId::Twister => {
            DoubleIfDefenderStatus(StatusFlags::FLYING.union(StatusFlags::BOUNCING))
        }
        MoveId::RazorWind => Mult(mechanics::RAZOR_WIND_DAMAGE_MULTIPLIER),
        MoveId::Facade => MultIfAttackerBurnGroup(mechanics::FACADE_DAMAGE_MULTIPLIER),
        MoveId::FocusPunch => Mult(mechanics::FOCUS_PUNCH_DAMAGE_MULTIPLIER),
        MoveId::Reversal | MoveId::Flail => AttackerHpTier(&mechanics::REVERSAL_DAMAGE_MULT_TABLE),
        MoveId::SmellingSalt => DoubleIfDefenderStatus(StatusFlags::PARALYSIS),
        MoveId::LowKick | MoveId::GrassKnot => DefenderWeight,
        MoveId::SkyAttack => Mult(mechanics::SKY_ATTACK_DAMAGE_MULTIPLIER),
        MoveId::WaterSpout => AttackerHpTier(&mechanics::WATER_SPOUT_DAMAGE_MULT_TABLE),
        MoveId::Earthquake => DoubleIfDefenderStatus(StatusFlags::DIGGING),
        MoveId::SolarBeam => SolarBeamWeather,
        MoveId::Fly => Mult(mechanics::FLY_DAMAGE_MULTIPLIER),
        MoveId::Dive => Mult(mechanics::DIVE_DAMAGE_MULTIPLIER),
        MoveId::Bounce => Mult(mechanics::BOUNCE_DAMAGE_MULTIPLIER),
        MoveId::HiJumpKick | MoveId::BlastBurn => Mult(Fx32::from(2)),
        MoveId::TripleKick => SuccessiveHitCount,
        MoveId::SpitUp => StockpileCounter,
        MoveId::Eruption => AttackerHpTier(&mechanics::ERUPTION_DAMAGE_MULT_TABLE),
        MoveId::DreamEater => RequiresSleepingDefender,
        MoveId::SkullBash => Mult(mechanics::SKULL_BASH_DAMAGE_MULTIPLIER),
        MoveId::RegularAttack => Mult(Fx32::CONST_0_5),
        MoveId::NaturalGift => NaturalGiftOverride,
        MoveId::TrumpCard => TrumpCardTiers,
        MoveId::Brine => DoubleIfDefenderHalfHp,
        MoveId::WringOut | MoveId::CrushGrip => {
            DefenderHpTier(&mechanics::WRING_OUT_DAMAGE_MULT_TABLE)
        }
        MoveId::GyroBall => DoubleIfAttackerSpeedDown,
        MoveId::ShadowForce => Mult(mechanics::SHADOW_FORCE_DAMAGE_MULTIPLIER),
        MoveId::LastResort => LastResortTiers,
        MoveId::WakeUpSlap => DoubleIfDefenderStatus(StatusFlags::SLEEP_GROUP),
        _ => Neutral,
    }
}

/// Index into the HP-quartile multiplier tables.
fn hp_tier_index(entity: &MonsterEntity) -> usize {
    let hp = entity.monster.hp as i32;
    let max_hp =
        (entity.monster.max_hp_stat as i32 + entity.monster.max_hp_boost as i32).min(999);
    if hp <= div4_trunc(max_hp) {
        0
    } else if hp <= div4_trunc(max_hp * 2) {
        1
    } else if hp <= div4_trunc(max_hp * 3) {
        2
    } else {
        3
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// The shared tail of every entry point: the core formula followed by the
/// damage sequence.
#[allow(clippy::too_many_arguments)]
fn simulate_damage_calc_shared(
    damage_data: &mut DamageData,
    dungeon: &mut DungeonState,
    attacker: &mut MonsterEntity,
    defender: &mut MonsterEntity,
    attack_type: TypeId,
    attack_power: i32,
    damage_mult: Fx32,
    move_id: MoveId,
) -> i32 {
    let crit_chance = moves::get_move_crit_chance(move_id) as i32;
    calc_damage(
        dungeon,
        attacker,
        defender,
        attack_type,
        attack_power,
        crit_chance,
        damage_data,
        damage_mult,
        move_id,
        true,
    );
    run_damage_sequence(dungeon, attacker, defender, move_id, damage_data)
}

fn simulate_damage_calc_with_mult(
    damage_data: &mut DamageData,
    dungeon: &mut DungeonState,
    attacker: &mut MonsterEntity,
    defender: &mut MonsterEntity,
    move_use: &MoveUse,
    damage_mult: Fx32,
) -> i32 {
    if !execute_move_effect_prechecks(dungeon, attacker, defender, move_use.id) {
        return 0;
    }

    let attack_type = attacker.get_move_type(move_use.id, dungeon);
    let attack_power = attacker.get_move_power(move_use);
    simulate_damage_calc_shared(
        damage_data,
        dungeon,
        attacker,
        defender,
        attack_type,
        attack_power,
        damage_mult,
        move_use.id,
    )
}

fn simulate_damage_calc_weather_ball(
    damage_data: &mut DamageData,
    dungeon: &mut DungeonState,
    attacker: &mut MonsterEntity,
    defender: &mut MonsterEntity,
    ginseng: u8,
) -> i32 {
    if !execute_move_effect_prechecks(dungeon, attacker, defender, MoveId::WeatherBall) {
        return 0;
    }

    let weather = attacker.perceived_weather(dungeon);
    let attack_type = mechanics::WEATHER_BALL_TYPE_TABLE[weather as usize];
    let damage_mult = mechanics::WEATHER_BALL_DAMAGE_MULT_TABLE[weather as usize];
    let attack_power = attacker.get_move_power(&MoveUse {
        id: MoveId::WeatherBall,
        ginseng,
        ..MoveUse::default()
    });
    simulate_damage_calc_shared(
        damage_data,
        dungeon,
        attacker,
        defender,
        attack_type,
        attack_power,
        damage_mult,
        MoveId::WeatherBall,
    )
}

fn simulate_damage_calc_natural_gift(
    damage_data: &mut DamageData,
    dungeon: &mut DungeonState,
    attacker: &mut MonsterEntity,
    defender: &mut MonsterEntity,
    ginseng: u8,
) -> i32 {
    if !execute_move_effect_prechecks(dungeon, attacker, defender, MoveId::NaturalGift) {
        return 0;
    }

    let move_use = MoveUse {
        id: MoveId::NaturalGift,
        ginseng,
        ..MoveUse::default()
    };
    if attacker.monster.held_item.id != crate::items::ItemId::Nothing {
        if let Some(gift) = attacker.natural_gift_info() {
            let mut attack_power =
                (attacker.get_move_power(&move_use) as u16) as i32 + gift.base_power_boost as i32;
            if attack_power > i16::MAX as i32 {
                // 16-bit wraparound, as the in-game arithmetic would
                attack_power -= 1 << 16;
            }
            return simulate_damage_calc_shared(
                damage_data,
                dungeon,
                attacker,
                defender,
                gift.type_id,
                attack_power,
                Fx32::from(1),
                MoveId::NaturalGift,
            );
        }
    }

    simulate_damage_calc_with_mult(
        damage_data,
        dungeon,
        attacker,
        defender,
        &move_use,
        Fx32::from(1),
    )
}

/// Full per-move damage simulation: pre-checks, the move's dispatch rule,
/// the core formula, and the damage sequence.
pub fn simulate_damage_calc(
    damage_data: &mut DamageData,
    dungeon: &mut DungeonState,
    attacker: &mut MonsterEntity,
    defender: &mut MonsterEntity,
    move_use: &MoveUse,
) -> i32 {
    let damage_mult = match damage_rule(move_use.id) {
        MoveDamageRule::Neutral => Fx32::from(1),
        MoveDamageRule::Zero => Fx32::from(0),
        MoveDamageRule::Mult(mult) => mult,
        MoveDamageRule::DoubleIfDefenderStatus(statuses) => {
            if defender.monster.statuses.has(statuses) {
                Fx32::from(2)
            } else {
                Fx32::from(1)
            }
        }
        MoveDamageRule::MultIfAttackerBurnGroup(mult) => {
            if attacker.monster.statuses.has(StatusFlags::BURN_GROUP) {
                mult
            } else {
                Fx32::from(1)
            }
        }
        MoveDamageRule::AttackerHpTier(table) => table[hp_tier_index(attacker)],
        MoveDamageRule::DefenderHpTier(table) => table[hp_tier_index(defender)],
        MoveDamageRule::SuccessiveHitRamp => {
            // Can't hit more than 10 times
            mechanics::ROLLOUT_DAMAGE_MULT_TABLE
                [(move_use.prior_successive_hits as usize).min(9)]
        }
        MoveDamageRule::SuccessiveHitCount => {
            // Can't hit more than 3 times
            Fx32::from((move_use.prior_successive_hits as i32 + 1).min(3))
        }
        MoveDamageRule::DefenderWeight => {
            crate::species::get_species_weight(defender.monster.apparent_id)
        }
        MoveDamageRule::StockpileCounter => {
            Fx32::from(attacker.monster.statuses.stockpile_stage as i32)
        }
        MoveDamageRule::TrumpCardTiers => {
            let mut max_pp = moves::get_move_max_pp(move_use.id) as i32;
            if max_pp == 0 {
                max_pp = 1;
            }
            let pp_frac = (move_use.pp as i32 * 100) / max_pp;
            if pp_frac < 26 {
                Fx32::CONST_1_25
            } else if pp_frac < 51 {
                Fx32::from(1)
            } else if pp_frac < 76 {
                Fx32::CONST_0_75
            } else {
                Fx32::CONST_0_5
            }
        }
        MoveDamageRule::LastResortTiers => {
            let mut n_moves_out_of_pp = attacker.monster.n_moves_out_of_pp as i32;
            if n_moves_out_of_pp > 0 && move_use.pp == 0 {
                n_moves_out_of_pp -= 1;
            }
            if n_moves_out_of_pp < 1 {
                dungeon.damage_calc.last_resort_failed = true;
                return 0;
            }
            mechanics::LAST_RESORT_DAMAGE_MULT_TABLE[(n_moves_out_of_pp - 1).min(3) as usize]
        }
        MoveDamageRule::DoubleIfDefenderHalfHp => {
            let max_hp = (defender.monster.max_hp_stat as i32
                + defender.monster.max_hp_boost as i32)
                .min(mechanics::MAX_HP_CAP);
            if (defender.monster.hp as u32).wrapping_mul(2) <= max_hp as u32 {
                Fx32::from(2)
            } else {
                Fx32::from(1)
            }
        }
        MoveDamageRule::DoubleIfAttackerSpeedDown => {
            if attacker.monster.statuses.speed_stage == 0 {
                Fx32::from(2)
            } else {
                Fx32::from(1)
            }
        }
        MoveDamageRule::SolarBeamWeather => {
            let weather = attacker.perceived_weather(dungeon);
            let mut mult = mechanics::SOLARBEAM_DAMAGE_MULTIPLIER;
            if weather == Weather::Sandstorm || weather == Weather::Rain || weather == Weather::Hail
            {
                mult = mult / 2;
            }
            mult
        }
        MoveDamageRule::RequiresSleepingDefender => {
            if !defender.monster.statuses.has(StatusFlags::SLEEP_GROUP) {
                dungeon.damage_calc.dream_eater_failed = true;
                return 0;
            }
            Fx32::from(1)
        }
        MoveDamageRule::WeatherBallOverride => {
            return simulate_damage_calc_weather_ball(
                damage_data,
                dungeon,
                attacker,
                defender,
                move_use.ginseng,
            );
        }
        MoveDamageRule::NaturalGiftOverride => {
            return simulate_damage_calc_natural_gift(
                damage_data,
                dungeon,
                attacker,
                defender,
                move_use.ginseng,
            );
        }
    };

    simulate_damage_calc_with_mult(damage_data, dungeon, attacker, defender, move_use, damage_mult)
}

/// Generic damage simulation for a caller-supplied type/power/crit triple,
/// permitting custom move definitions.
#[allow(clippy::too_many_arguments)]
pub fn simulate_damage_calc_generic(
    damage_data: &mut DamageData,
    dungeon: &mut DungeonState,
    attacker: &mut MonsterEntity,
    defender: &mut MonsterEntity,
    attack_type: TypeId,
    attack_power: i32,
    move_id: MoveId,
    crit_chance: i32,
    damage_mult: Fx32,
) -> i32 {
    if !execute_move_effect_prechecks(dungeon, attacker, defender, move_id) {
        return 0;
    }

    calc_damage(
        dungeon,
        attacker,
        defender,
        attack_type,
        attack_power,
        crit_chance,
        damage_data,
        damage_mult,
        move_id,
        true,
    );
    run_damage_sequence(dungeon, attacker, defender, move_id, damage_data)
}

/// Damage simulation for a thrown projectile with the given power.
pub fn simulate_damage_calc_projectile(
    damage_data: &mut DamageData,
    dungeon: &mut DungeonState,
    attacker: &mut MonsterEntity,
    defender: &mut MonsterEntity,
    attack_power: i32,
) -> i32 {
    let attack_type = attacker.get_move_type(MoveId::Projectile, dungeon);
    simulate_damage_calc_shared(
        damage_data,
        dungeon,
        attacker,
        defender,
        attack_type,
        attack_power,
        Fx32::from(1),
        MoveId::Projectile,
    )
}
