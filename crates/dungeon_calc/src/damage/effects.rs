//! Type-matchup resolution and the type/ability/weather multiplier pass.

use crate::abilities::AbilityId;
use crate::dungeon::{DungeonState, Weather};
use crate::entity::{MonsterEntity, StatusFlags};
use crate::exclusive::ExclusiveItemEffectId;
use crate::fixed::{div4_trunc, Fx64};
use crate::iq::IqSkillId;
use crate::mechanics;
use crate::species::{get_species_gender, Gender, SpeciesId};
use crate::types::{
    type_ineffective_against_ghost, TypeId, TypeMatchup, MATCHUP_IMMUNE_MULTIPLIER,
    MATCHUP_IMMUNE_MULTIPLIER_ERRATIC_PLAYER, MATCHUP_NEUTRAL_MULTIPLIER,
    MATCHUP_NEUTRAL_MULTIPLIER_ERRATIC_PLAYER, MATCHUP_NOT_VERY_EFFECTIVE_MULTIPLIER,
    MATCHUP_NOT_VERY_EFFECTIVE_MULTIPLIER_ERRATIC_PLAYER, MATCHUP_SUPER_EFFECTIVE_MULTIPLIER,
    MATCHUP_SUPER_EFFECTIVE_MULTIPLIER_ERRATIC_PLAYER, TYPE_MATCHUP_COMBINATOR_TABLE,
    TYPE_MATCHUP_TABLE,
};

use super::DamageData;

/// Matchup of an attack type against one of the defender's type slots.
///
/// Special cases run before the table: a revealed Dark-type takes neutral
/// Psychic damage, gravity suppresses Flying's Ground immunity, and
/// Magnet-Rise-style hovering grants it outright.
pub fn get_type_matchup(
    dungeon: &DungeonState,
    attacker: &MonsterEntity,
    defender: &MonsterEntity,
    target_type_idx: usize,
    attack_type: TypeId,
) -> TypeMatchup {
    if (defender.monster.statuses.has(StatusFlags::MIRACLE_EYE)
        || attacker.exclusive_item_effect_active(ExclusiveItemEffectId::MiracleEye))
        && attack_type == TypeId::Psychic
        && defender.monster.types[target_type_idx] == TypeId::Dark
    {
        return TypeMatchup::Neutral;
    }
    if attack_type == TypeId::Ground {
        if dungeon.gravity {
            if defender.monster.types[target_type_idx] == TypeId::Flying {
                return TypeMatchup::Neutral;
            }
        } else if defender.has_conditional_ground_immunity(dungeon) {
            return TypeMatchup::Immune;
        }
    }
    TYPE_MATCHUP_TABLE[attack_type as usize][defender.monster.types[target_type_idx] as usize]
}

/// Flash Fire boost increment if it should trigger for this hit: 2 while
/// the counter is below 2, then 1, and 0 when it doesn't apply.
pub fn flash_fire_should_activate(attacker: &MonsterEntity, defender: &MonsterEntity) -> i16 {
    if attacker.ability_active(AbilityId::Normalize)
        || !defender.defender_ability_active(AbilityId::FlashFire, attacker, true)
    {
        return 0;
    }
    if defender.monster.stat_modifiers.flash_fire_boost < 2 {
        2
    } else {
        1
    }
}

/// Whether two species share a gender, with genderless never matching.
pub fn genders_equal_not_genderless(species1: SpeciesId, species2: SpeciesId) -> bool {
    let gender1 = get_species_gender(species1);
    let gender2 = get_species_gender(species2);
    if gender1 == Gender::Genderless || gender2 == Gender::Genderless {
        return false;
    }
    gender1 == gender2
}

fn max_hp_capped(entity: &MonsterEntity) -> i32 {
    let max_hp = entity.monster.max_hp_stat as i32 + entity.monster.max_hp_boost as i32;
    max_hp.min(mechanics::MAX_HP_CAP)
}

fn in_pinch(entity: &MonsterEntity) -> bool {
    (entity.monster.hp as i32) <= div4_trunc(max_hp_capped(entity))
}

/// The dynamic damage multiplier: matchups, type-keyed abilities, STAB,
/// weather, sports, and Charge, applied in the engine's exact order.
///
/// Returns the accumulated multiplier and whether the combined matchup came
/// out super-effective (consumed later by crit-boosting skills). The
/// super-effective answer comes from the combined matchup, never from the
/// multiplier value.
pub fn calc_type_based_damage_effects(
    dungeon: &mut DungeonState,
    attacker: &MonsterEntity,
    defender: &MonsterEntity,
    attack_power: i32,
    attack_type: TypeId,
    damage_out: &mut DamageData,
    partial: bool,
) -> (Fx64, bool) {
    let mut damage_mult = Fx64::from(1);
    damage_out.critical_hit = false;
    damage_out.full_type_immunity = false;

    damage_out.type_matchup = TypeMatchup::Neutral;
    let mut type_matchups = [TypeMatchup::default(); 2];
    for i in 0..2 {
        let erratic_tables = !partial
            && (attacker.iq_skill_enabled(IqSkillId::ErraticPlayer, dungeon)
                || defender.iq_skill_enabled(IqSkillId::ErraticPlayer, dungeon));
        let matchup_multipliers: [Fx64; 4] = if erratic_tables {
            [
                Fx64::from(MATCHUP_IMMUNE_MULTIPLIER_ERRATIC_PLAYER),
                Fx64::from(MATCHUP_NOT_VERY_EFFECTIVE_MULTIPLIER_ERRATIC_PLAYER),
                Fx64::from(MATCHUP_NEUTRAL_MULTIPLIER_ERRATIC_PLAYER),
                Fx64::from(MATCHUP_SUPER_EFFECTIVE_MULTIPLIER_ERRATIC_PLAYER),
            ]
        } else {
            [
                Fx64::from(MATCHUP_IMMUNE_MULTIPLIER),
                Fx64::from(MATCHUP_NOT_VERY_EFFECTIVE_MULTIPLIER),
                Fx64::from(MATCHUP_NEUTRAL_MULTIPLIER),
                Fx64::from(MATCHUP_SUPER_EFFECTIVE_MULTIPLIER),
            ]
        };

        if damage_mult == Fx64::from(0) {
            break;
        }

        let matchup;
        if !attacker.scrappy_should_activate(defender, attack_type, dungeon)
            && type_ineffective_against_ghost(attack_type)
            && defender.ghost_immunity_active(attacker, i)
        {
            matchup = TypeMatchup::Immune;
            dungeon.damage_calc.ghost_immunity_activated = true;
        } else {
            matchup = get_type_matchup(dungeon, attacker, defender, i, attack_type);
        }
        // Neutral matchups skip the multiplication unless the attacker is
        // an Erratic Player (whose neutral multiplier still applies).
        if attacker.iq_skill_enabled(IqSkillId::ErraticPlayer, dungeon)
            || matchup != TypeMatchup::Neutral
        {
            damage_mult *= matchup_multipliers[matchup as usize];
        }
        type_matchups[i] = matchup;
    }

    dungeon.damage_calc.move_indiv_type_matchups = type_matchups;
    damage_out.type_matchup =
        TYPE_MATCHUP_COMBINATOR_TABLE[type_matchups[0] as usize][type_matchups[1] as usize];

    let mut super_effective = damage_out.type_matchup == TypeMatchup::SuperEffective;
    if !super_effective
        && defender.defender_ability_active(AbilityId::WonderGuard, attacker, true)
        && attack_type != TypeId::None
    {
        damage_mult = Fx64::from(0);
    }

    if attacker.ability_active(AbilityId::TintedLens)
        && damage_out.type_matchup == TypeMatchup::NotVeryEffective
    {
        damage_mult *= Fx64::from(mechanics::TINTED_LENS_MULTIPLIER);
    }

    if (defender.defender_ability_active(AbilityId::SolidRock, attacker, true)
        || defender.defender_ability_active(AbilityId::Filter, attacker, true))
        && damage_out.type_matchup == TypeMatchup::SuperEffective
    {
        damage_mult *= mechanics::SOLID_ROCK_MULTIPLIER;
    }

    if defender.exclusive_item_effect_active(ExclusiveItemEffectId::HalvedDamage) {
        damage_mult *= Fx64::CONST_0_5;
    }

    if !partial
        && attacker.ability_active(AbilityId::Technician)
        && attack_power <= mechanics::TECHNICIAN_MOVE_POWER_THRESHOLD
    {
        damage_mult *= Fx64::CONST_1_5;
    }

    if (attack_type == TypeId::Fire || attack_type == TypeId::Ice)
        && defender.defender_ability_active(AbilityId::ThickFat, attacker, true)
    {
        dungeon.damage_calc.fire_move_ability_drop_activated = true;
        damage_mult *= Fx64::CONST_0_5;
    }

    if attack_type == TypeId::Fire && flash_fire_should_activate(attacker, defender) != 0 {
        dungeon.damage_calc.flash_fire_activated = true;
        damage_mult = Fx64::from(0);
        super_effective = false;
        damage_out.type_matchup = TypeMatchup::Immune;
        damage_out.critical_hit = false;
        damage_out.full_type_immunity = true;
    }

    if attack_type == TypeId::Fire
        && defender.defender_ability_active(AbilityId::Heatproof, attacker, true)
    {
        dungeon.damage_calc.fire_move_ability_drop_activated = true;
        damage_mult *= Fx64::CONST_0_5;
    }

    if attack_type == TypeId::Ground
        && ((!attacker.ability_active(AbilityId::MoldBreaker) && defender.levitate_active(dungeon))
            || defender.has_conditional_ground_immunity(dungeon))
    {
        damage_mult = Fx64::from(0);
        super_effective = false;
        damage_out.type_matchup = TypeMatchup::Immune;
        damage_out.critical_hit = false;
        damage_out.full_type_immunity = true;
    }

    if attack_type == TypeId::Water && attacker.ability_active(AbilityId::Torrent) && in_pinch(attacker)
    {
        dungeon.damage_calc.torrent_boost_activated = true;
        damage_mult *= Fx64::from(2);
    }
    if attack_type == TypeId::Grass && attacker.ability_active(AbilityId::Overgrow) && in_pinch(attacker)
    {
        dungeon.damage_calc.overgrow_boost_activated = true;
        damage_mult *= Fx64::from(2);
    }
    if attack_type == TypeId::Bug && attacker.ability_active(AbilityId::Swarm) && in_pinch(attacker) {
        dungeon.damage_calc.swarm_boost_activated = true;
        damage_mult *= Fx64::from(2);
    }
    if attack_type == TypeId::Fire {
        if attacker.ability_active(AbilityId::Blaze) && in_pinch(attacker) {
            dungeon.damage_calc.fire_move_ability_boost_activated = true;
            damage_mult *= Fx64::from(2);
        }

        if defender.defender_ability_active(AbilityId::DrySkin, attacker, true) {
            dungeon.damage_calc.fire_move_ability_boost_activated = true;
            damage_mult *= Fx64::CONST_1_5;
        }
    }

    if attacker.monster.statuses.has(StatusFlags::BURN) {
        damage_mult *= Fx64::from(mechanics::BURN_DAMAGE_MULTIPLIER);
    }

    if damage_mult != Fx64::from(0) && attacker.is_type(attack_type) {
        dungeon.damage_calc.stab_boost_activated = true;
        if attacker.ability_active(AbilityId::Adaptability) {
            damage_mult *= 2;
        } else {
            damage_mult *= Fx64::CONST_1_5;
        }
    }

    let weather = attacker.perceived_weather(dungeon);
    if weather == Weather::Sunny {
        if attack_type == TypeId::Fire {
            dungeon.damage_calc.sunny_multiplier_activated = true;
            damage_mult *= Fx64::CONST_1_5;
        } else if attack_type == TypeId::Water {
            dungeon.damage_calc.sunny_multiplier_activated = true;
            damage_mult *= Fx64::CONST_0_5;
        }
    }
    if weather == Weather::Rain {
        if attack_type == TypeId::Fire {
            dungeon.damage_calc.rain_multiplier_activated = true;
            damage_mult *= Fx64::CONST_0_5;
        } else if attack_type == TypeId::Water {
            dungeon.damage_calc.rain_multiplier_activated = true;
            damage_mult *= Fx64::CONST_1_5;
        }
    }
    if weather == Weather::Cloudy && attack_type != TypeId::Normal {
        damage_mult *= mechanics::CLOUDY_DAMAGE_MULTIPLIER;
        dungeon.damage_calc.cloudy_drop_activated = true;
    }
    if (dungeon.mud_sport_turns != 0 || weather == Weather::Fog) && attack_type == TypeId::Electric
    {
        dungeon.damage_calc.electric_move_dampened = true;
        damage_mult *= Fx64::CONST_0_5;
    }
    if dungeon.water_sport_turns != 0 && attack_type == TypeId::Fire {
        dungeon.damage_calc.water_sport_drop_activated = true;
        damage_mult *= Fx64::CONST_0_5;
    }

    if attack_type == TypeId::Electric && attacker.monster.statuses.has(StatusFlags::CHARGE) {
        dungeon.damage_calc.charge_boost_activated = true;
        damage_mult *= Fx64::from(2);
    }

    (damage_mult, super_effective)
}
