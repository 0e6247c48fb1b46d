//! The diagnostic trace populated during every damage calculation.

use crate::fixed::Fx32;
use crate::moves::MoveCategory;
use crate::types::{TypeId, TypeMatchup};

/// Every intermediate quantity and named modifier activation of the last
/// damage calculation.
///
/// The trace exists for verification and display; the engine resets it at
/// the start of each top-level calculation and repopulates it fully. Nothing
/// in the pipeline reads it back.
#[derive(Clone, Debug)]
pub struct DamageCalcDiag {
    /// The type of the last move used.
    pub move_type: TypeId,
    /// The category of the last move used.
    pub move_category: MoveCategory,
    /// The matchup of the last move against each of the defender's types.
    pub move_indiv_type_matchups: [TypeMatchup; 2],
    /// The modified offensive stat stage of the attacker.
    pub offensive_stat_stage: u8,
    /// The modified defensive stat stage of the defender.
    pub defensive_stat_stage: u8,
    /// The base offensive stat of the attacker.
    pub offensive_stat: u16,
    /// The base defensive stat of the defender.
    pub defensive_stat: u16,
    /// The attacker's Flash Fire boost when a Fire move was last used.
    pub flash_fire_boost: u16,
    /// The modified offense value, prior to the [0, 999] clamp.
    pub offense_calc: i32,
    /// The modified defense value.
    pub defense_calc: i32,
    /// The attacker's level.
    pub attacker_level: u16,
    /// The "AT" intermediate term: the clamped offense plus the modified
    /// move power.
    pub damage_calc_at: i32,
    /// An identical copy of `defense_calc`, mirroring a vestigial slot the
    /// game keeps alongside the AT term.
    pub damage_calc_def: i32,
    /// The "FLV" (effective level) intermediate term:
    /// `(offense - defense)/8 + level`.
    pub damage_calc_flv: i32,
    /// The damage value after all multipliers but before random variance.
    pub damage_calc: i32,
    /// The base damage value: power, attack, defense, and level terms
    /// combined, adjusted for non-team attackers, clamped to [1, 999].
    pub damage_calc_base: i32,
    /// The random multiplier applied to the damage, as a rounded percentage.
    pub damage_calc_random_mult_pct: i32,
    /// The static damage multiplier: the caller-supplied factor combined
    /// with boosted-attack, Reckless, and Iron Fist adjustments.
    pub static_damage_mult: Fx32,
    /// Net attack boosts from a Power Band or Munch Belt. Aura bows do not
    /// contribute (an in-game quirk).
    pub item_atk_modifier: i8,
    /// Net special attack boosts from a Special Band, Munch Belt, or aura
    /// bow; physical aura bow boosts also land here (an in-game quirk).
    pub item_sp_atk_modifier: i8,
    /// Net offense stage boosts from Download, Rivalry, Flower Gift, and
    /// Solar Power.
    pub ability_offense_modifier: i8,
    /// Net defense stage boosts from Flower Gift.
    pub ability_defense_modifier: i8,
    /// Net offense stage boosts from Aggressor, Defender, and Practice
    /// Swinger.
    pub iq_skill_offense_modifier: i8,
    /// Net defense stage boosts from Counter Basher, Aggressor, and
    /// Defender.
    pub iq_skill_defense_modifier: i8,
    /// Net defense boosts from a Def Scarf or aura bow; special aura bow
    /// boosts also land here (an in-game quirk).
    pub item_def_modifier: i8,
    /// Net special defense boosts from a Zinc Band. Aura bows do not
    /// contribute (an in-game quirk).
    pub item_sp_def_modifier: i8,

    // Named modifier activations
    pub scope_lens_or_sharpshooter_activated: bool,
    pub patsy_band_activated: bool,
    pub half_physical_damage_activated: bool,
    pub half_special_damage_activated: bool,
    pub focus_energy_activated: bool,
    pub type_advantage_master_activated: bool,
    pub cloudy_drop_activated: bool,
    pub rain_multiplier_activated: bool,
    pub sunny_multiplier_activated: bool,
    pub fire_move_ability_drop_activated: bool,
    pub flash_fire_activated: bool,
    pub levitate_activated: bool,
    pub torrent_boost_activated: bool,
    pub overgrow_boost_activated: bool,
    pub swarm_boost_activated: bool,
    pub fire_move_ability_boost_activated: bool,
    pub scrappy_activated: bool,
    pub super_luck_activated: bool,
    pub sniper_activated: bool,
    pub stab_boost_activated: bool,
    pub electric_move_dampened: bool,
    pub water_sport_drop_activated: bool,
    pub charge_boost_activated: bool,
    pub ghost_immunity_activated: bool,
    pub skull_bash_defense_boost_activated: bool,

    // Pre-check outcomes, tracked so callers can tell why a calculation
    // aborted before the core formula ran.
    pub two_turn_move_forced_miss: bool,
    pub soundproof_activated: bool,
    pub first_hit_check_failed: bool,
    pub lightningrod_activated: bool,
    pub storm_drain_activated: bool,
    pub dream_eater_failed: bool,
    pub last_resort_failed: bool,
}

impl Default for DamageCalcDiag {
    fn default() -> DamageCalcDiag {
        DamageCalcDiag {
            move_type: TypeId::None,
            move_category: MoveCategory::Physical,
            move_indiv_type_matchups: [TypeMatchup::Immune, TypeMatchup::Immune],
            offensive_stat_stage: 10,
            defensive_stat_stage: 10,
            offensive_stat: 1,
            defensive_stat: 1,
            flash_fire_boost: 0,
            offense_calc: 0,
            defense_calc: 0,
            attacker_level: 0,
            damage_calc_at: 0,
            damage_calc_def: 0,
            damage_calc_flv: 0,
            damage_calc: 0,
            damage_calc_base: 0,
            damage_calc_random_mult_pct: 0,
            static_damage_mult: Fx32::from(0),
            item_atk_modifier: 0,
            item_sp_atk_modifier: 0,
            ability_offense_modifier: 0,
            ability_defense_modifier: 0,
            iq_skill_offense_modifier: 0,
            iq_skill_defense_modifier: 0,
            item_def_modifier: 0,
            item_sp_def_modifier: 0,
            scope_lens_or_sharpshooter_activated: false,
            patsy_band_activated: false,
            half_physical_damage_activated: false,
            half_special_damage_activated: false,
            focus_energy_activated: false,
            type_advantage_master_activated: false,
            cloudy_drop_activated: false,
            rain_multiplier_activated: false,
            sunny_multiplier_activated: false,
            fire_move_ability_drop_activated: false,
            flash_fire_activated: false,
            levitate_activated: false,
            torrent_boost_activated: false,
            overgrow_boost_activated: false,
            swarm_boost_activated: false,
            fire_move_ability_boost_activated: false,
            scrappy_activated: false,
            super_luck_activated: false,
            sniper_activated: false,
            stab_boost_activated: false,
            electric_move_dampened: false,
            water_sport_drop_activated: false,
            charge_boost_activated: false,
            ghost_immunity_activated: false,
            skull_bash_defense_boost_activated: false,
            two_turn_move_forced_miss: false,
            soundproof_activated: false,
            first_hit_check_failed: false,
            lightningrod_activated: false,
            storm_drain_activated: false,
            dream_eater_failed: false,
            last_resort_failed: false,
        }
    }
}
