//! The core damage formula: stat and modifier resolution, the fixed-point
//! damage expression, and critical-hit resolution.

use crate::abilities::AbilityId;
use crate::dungeon::{DamageMessage, DungeonState, FixedRoomId, Weather};
use crate::entity::{MonsterEntity, StatusFlags};
use crate::exclusive::ExclusiveItemEffectId;
use crate::fixed::{clamped_ln, Fx32, Fx64};
use crate::iq::IqSkillId;
use crate::items::ItemId;
use crate::mechanics;
use crate::moves::{self, MoveCategory, MoveId};
use crate::species::{Gender, SpeciesId};
use crate::types::{TypeId, TypeMatchup};

use super::effects::{calc_type_based_damage_effects, genders_equal_not_genderless};
use super::DamageData;

/// Compute damage for an attack with resolved type, power, and crit chance.
///
/// Mirrors the in-game calculation routine step for step: every stage
/// adjustment, truncation, and multiplier lands in the same order. Populates
/// the battlefield's diagnostic trace from scratch and writes the result
/// into `damage_out`. The defender's `anger_point_flag` is updated to the
/// critical-hit outcome.
#[allow(clippy::too_many_arguments)]
pub fn calc_damage(
    dungeon: &mut DungeonState,
    attacker: &MonsterEntity,
    defender: &mut MonsterEntity,
    mut attack_type: TypeId,
    attack_power: i32,
    mut crit_chance: i32,
    damage_out: &mut DamageData,
    mut damage_mult: Fx32,
    move_id: MoveId,
    full_calc: bool,
) {
    *damage_out = DamageData::default();
    if attacker.monster.boosted_attacks {
        damage_mult *= mechanics::ME_FIRST_MULTIPLIER;
    }

    if attacker.ability_active(AbilityId::Reckless) && moves::is_recoil_move(move_id) {
        damage_mult = (damage_mult * 3) / 2;
    }

    if attacker.ability_active(AbilityId::IronFist) && moves::is_punch_move(move_id) {
        damage_mult *= Fx32::CONST_1_5;
    }

    if attacker.ability_active(AbilityId::Normalize) {
        attack_type = TypeId::Normal;
    }
    if move_id == MoveId::Judgment {
        attack_type = attacker.monster.types[0];
    }

    let not_physical = moves::move_not_physical(move_id);
    dungeon.damage_calc = Default::default();

    if (!attacker.monster.is_team_leader && attacker.monster.belly.ceil() == 0)
        || (move_id == MoveId::RegularAttack
            && defender.defender_ability_active(AbilityId::WonderGuard, attacker, true))
    {
        damage_out.damage = 1;
        damage_out.damage_message = DamageMessage::Move;
        damage_out.type_matchup = TypeMatchup::Neutral;
        damage_out.type_id = attack_type;
        damage_out.category = moves::get_move_category(move_id);
        damage_out.critical_hit = false;
        damage_out.full_type_immunity = false;
        damage_out.no_damage = false;
        return;
    }

    damage_out.type_id = attack_type;
    damage_out.category = moves::get_move_category(move_id);

    let mut atk_stage_boost: i32 = 0;

    dungeon.damage_calc.move_type = attack_type;
    let move_category = if not_physical {
        MoveCategory::Special
    } else {
        MoveCategory::Physical
    };
    dungeon.damage_calc.move_category = move_category;
    let cat = move_category as usize;

    let mut atk_stage_mult = attacker.monster.stat_modifiers.offensive_multipliers[cat];
    let mut def_stage: i32 = 0;
    let mut def_stage_mult = defender.monster.stat_modifiers.defensive_multipliers[cat];

    if attacker.ability_active(AbilityId::Download) {
        if defender.monster.defensive_stats[0] < defender.monster.defensive_stats[1] {
            let is_physical = move_category == MoveCategory::Physical;
            atk_stage_boost = is_physical as i32;
            if is_physical {
                dungeon.damage_calc.ability_offense_modifier += 1;
            }
        } else {
            let is_special = move_category == MoveCategory::Special;
            atk_stage_boost = is_special as i32;
            if is_special {
                dungeon.damage_calc.ability_offense_modifier += 1;
            }
        }
    }

    if full_calc && attack_type == TypeId::Fire {
        let flash_fire_boost = attacker.monster.stat_modifiers.flash_fire_boost;
        dungeon.damage_calc.flash_fire_boost = flash_fire_boost as u16;
        atk_stage_boost += flash_fire_boost as i32;
    }

    if attacker.iq_skill_enabled(IqSkillId::Aggressor, dungeon) {
        atk_stage_boost += 1;
        dungeon.damage_calc.iq_skill_offense_modifier += 1;
    }

    if attacker.iq_skill_enabled(IqSkillId::Defender, dungeon) {
        atk_stage_boost -= 1;
        dungeon.damage_calc.iq_skill_offense_modifier -= 1;
    }

    if attacker.iq_skill_enabled(IqSkillId::PracticeSwinger, dungeon)
        && attacker.monster.practice_swinger_flag
    {
        atk_stage_boost += 1;
        dungeon.damage_calc.iq_skill_offense_modifier += 1;
    }

    if attacker.nearby_ally_iq_skill_enabled(IqSkillId::Cheerleader, dungeon) {
        atk_stage_boost += 1;
    }

    if move_category == MoveCategory::Physical {
        if attacker.ability_active(AbilityId::Rivalry) {
            if genders_equal_not_genderless(attacker.monster.apparent_id, defender.monster.apparent_id)
            {
                atk_stage_boost += 1;
                dungeon.damage_calc.ability_offense_modifier += 1;
            } else if attacker.gender() != Gender::Genderless
                && defender.gender() != Gender::Genderless
            {
                atk_stage_boost -= 1;
                dungeon.damage_calc.ability_offense_modifier -= 1;
            }
        }

        if attacker.perceived_weather(dungeon) == Weather::Sunny
            && (attacker.ability_active(AbilityId::FlowerGift)
                || attacker.other_monster_ability_active(AbilityId::FlowerGift, dungeon))
        {
            atk_stage_boost += 1;
            dungeon.damage_calc.ability_offense_modifier += 1;
        }
    } else {
        if attacker.ability_active(AbilityId::SolarPower)
            && attacker.perceived_weather(dungeon) == Weather::Sunny
        {
            atk_stage_boost += 2;
            dungeon.damage_calc.ability_offense_modifier += 2;
        }

        if defender.perceived_weather(dungeon) == Weather::Sunny
            && (defender.ability_active(AbilityId::FlowerGift)
                || defender.other_monster_ability_active(AbilityId::FlowerGift, dungeon))
        {
            def_stage = 1;
            dungeon.damage_calc.ability_defense_modifier += 1;
        }

        if defender.perceived_weather(dungeon) == Weather::Sandstorm
            && (defender.monster.types[0] == TypeId::Rock
                || defender.monster.types[1] == TypeId::Rock)
        {
            def_stage += 2;
        }
    }

    // Hardcoded per-form stage adjustments
    if attacker.monster.apparent_id == SpeciesId::DeoxysAttack {
        atk_stage_boost += 2;
    }
    if attacker.monster.apparent_id == SpeciesId::DeoxysDefense {
        atk_stage_boost -= 2;
    }
    if attacker.monster.apparent_id == SpeciesId::DeoxysSpeed {
        atk_stage_boost -= 2;
    }
    if attacker.monster.apparent_id == SpeciesId::GiratinaAltered {
        atk_stage_boost -= 2;
    } else if attacker.monster.apparent_id == SpeciesId::GiratinaOrigin {
        atk_stage_boost += 2;
    }

    let mut atk_stage =
        attacker.monster.stat_modifiers.offensive_stages[cat] as i32 + atk_stage_boost;
    if attacker.monster.anger_point_flag && attacker.ability_active(AbilityId::AngerPoint) {
        atk_stage = 20;
    }

    if move_category == MoveCategory::Physical {
        if defender.monster.statuses.has(StatusFlags::SKULL_BASH) {
            dungeon.damage_calc.skull_bash_defense_boost_activated = true;
            def_stage += 1;
        }

        if defender.iq_skill_enabled(IqSkillId::CounterBasher, dungeon) {
            def_stage -= 1;
            dungeon.damage_calc.iq_skill_defense_modifier -= 1;
        }
    }

    if defender.iq_skill_enabled(IqSkillId::Aggressor, dungeon) {
        def_stage -= 1;
        dungeon.damage_calc.iq_skill_defense_modifier -= 1;
    }
    if defender.iq_skill_enabled(IqSkillId::Defender, dungeon) {
        def_stage += 1;
        dungeon.damage_calc.iq_skill_defense_modifier += 1;
    }

    if defender.monster.apparent_id == SpeciesId::DeoxysAttack {
        def_stage -= 2;
    }
    if defender.monster.apparent_id == SpeciesId::DeoxysDefense {
        def_stage += 2;
    }
    if defender.monster.apparent_id == SpeciesId::DeoxysSpeed {
        def_stage -= 2;
    }
    if defender.monster.apparent_id == SpeciesId::GiratinaAltered {
        def_stage += 2;
    } else if defender.monster.apparent_id == SpeciesId::GiratinaOrigin {
        def_stage -= 2;
    }
    def_stage += defender.monster.stat_modifiers.defensive_stages[cat] as i32;

    if move_id == MoveId::Punishment {
        // Sums the defender's above-neutral stages, truncating to 16 bits
        // after each addition like the in-game arithmetic.
        let stat_modifiers = &defender.monster.stat_modifiers;
        let mut boost: i32 = 0;
        let stage = stat_modifiers.offensive_stages[0] as i32;
        if stage > 10 {
            boost = ((stage - 10) as i16) as i32;
        }
        let stage = stat_modifiers.defensive_stages[0] as i32;
        if stage > 10 {
            boost = ((boost + stage - 10) as i16) as i32;
        }
        let stage = stat_modifiers.offensive_stages[1] as i32;
        if stage > 10 {
            boost = ((boost + stage - 10) as i16) as i32;
        }
        let stage = stat_modifiers.defensive_stages[1] as i32;
        if stage > 10 {
            boost = ((boost + stage - 10) as i16) as i32;
        }

        atk_stage += boost;
    }

    if attacker.ability_active(AbilityId::Unaware) {
        def_stage = 10;
        def_stage_mult = Fx32::from(1);
    } else if defender.ability_active(AbilityId::Unaware) {
        atk_stage = 10;
        atk_stage_mult = Fx32::from(1);
    }

    // Stages clamp only after every adjustment has been applied
    atk_stage = atk_stage.clamp(0, 20);
    dungeon.damage_calc.offensive_stat_stage = atk_stage as u8;
    dungeon.damage_calc.offensive_stat = attacker.monster.offensive_stats[cat] as u16;
    let atk_stat_stage_mult = mechanics::OFFENSIVE_STAT_STAGE_MULTIPLIERS[atk_stage as usize];
    let atk_mult = Fx32::from(attacker.monster.offensive_stats[cat] as i32) * atk_stat_stage_mult;
    let mut atk = (atk_mult * atk_stage_mult).trunc();

    def_stage = def_stage.clamp(0, 20);
    dungeon.damage_calc.defensive_stat_stage = def_stage as u8;
    dungeon.damage_calc.defensive_stat = defender.monster.defensive_stats[cat] as u16;
    let def_mult = Fx32::from(defender.monster.defensive_stats[cat] as i32)
        * mechanics::DEFENSIVE_STAT_STAGE_MULTIPLIERS[def_stage as usize];
    let mut def = (def_mult * def_stage_mult).trunc();

    if !attacker.monster.is_not_team_member {
        atk += attacker.exclusive_item_offense_boost(move_category);
    }
    if !defender.monster.is_not_team_member {
        def += defender.exclusive_item_defense_boost(move_category);
    }

    if move_category == MoveCategory::Physical {
        if attacker.item_active(ItemId::PowerBand) {
            atk += mechanics::POWER_BAND_STAT_BOOST;
            dungeon.damage_calc.item_atk_modifier += mechanics::POWER_BAND_STAT_BOOST as i8;
        }
        if attacker.item_active(ItemId::MunchBelt) {
            atk += mechanics::MUNCH_BELT_STAT_BOOST;
            dungeon.damage_calc.item_atk_modifier += mechanics::MUNCH_BELT_STAT_BOOST as i8;
        }
        if attacker.aura_bow_active() {
            atk += mechanics::AURA_BOW_STAT_BOOST;
            // Lands in the special-attack slot, not the attack slot
            dungeon.damage_calc.item_sp_atk_modifier += mechanics::AURA_BOW_STAT_BOOST as i8;
        }

        if full_calc {
            if defender.item_active(ItemId::DefScarf) {
                def += mechanics::DEF_SCARF_STAT_BOOST;
                dungeon.damage_calc.item_def_modifier += mechanics::DEF_SCARF_STAT_BOOST as i8;
            }
            if defender.aura_bow_active() {
                def += mechanics::AURA_BOW_STAT_BOOST;
                dungeon.damage_calc.item_def_modifier += mechanics::AURA_BOW_STAT_BOOST as i8;
            }
        }
    } else {
        if full_calc {
            if defender.item_active(ItemId::ZincBand) {
                def += mechanics::ZINC_BAND_STAT_BOOST;
                dungeon.damage_calc.item_sp_def_modifier += mechanics::ZINC_BAND_STAT_BOOST as i8;
            }
            if defender.aura_bow_active() {
                def += mechanics::AURA_BOW_STAT_BOOST;
                // Lands in the defense slot, not the special-defense slot
                dungeon.damage_calc.item_def_modifier += mechanics::AURA_BOW_STAT_BOOST as i8;
            }
        }

        if attacker.item_active(ItemId::SpecialBand) {
            atk += mechanics::SPECIAL_BAND_STAT_BOOST;
            dungeon.damage_calc.item_sp_atk_modifier += mechanics::SPECIAL_BAND_STAT_BOOST as i8;
        }
        if attacker.item_active(ItemId::MunchBelt) {
            atk += mechanics::MUNCH_BELT_STAT_BOOST;
            dungeon.damage_calc.item_sp_atk_modifier += mechanics::MUNCH_BELT_STAT_BOOST as i8;
        }
        // The defender's bow, not the attacker's
        if defender.aura_bow_active() {
            atk += mechanics::AURA_BOW_STAT_BOOST;
            dungeon.damage_calc.item_sp_atk_modifier += mechanics::AURA_BOW_STAT_BOOST as i8;
        }
    }

    let power = Fx64::from((Fx32::from(attack_power) * atk_stat_stage_mult) * atk_stage_mult);

    // Integer-ratio ability multipliers: all numerators apply before any
    // denominator
    let mut atk_mult_int: i32 = 1;
    let mut atk_div: i32 = 1;
    let mut def_mult_int: i32 = 1;
    let mut def_div: i32 = 1;
    let not_physical = moves::move_not_physical(move_id);
    if !not_physical
        && attacker.ability_active(AbilityId::Guts)
        && attacker.has_negative_status(true)
    {
        atk_mult_int = 2;
    }

    if attacker.ability_active(AbilityId::HugePower) || attacker.ability_active(AbilityId::PurePower)
    {
        if dungeon.rng.roll_huge_pure_power() && !not_physical {
            atk_mult_int *= 3;
            atk_div = 2;
        }
    }

    if attacker.ability_active(AbilityId::Hustle) && !not_physical {
        atk_mult_int *= 3;
        atk_div <<= 1;
    }

    let team_idx = if attacker.monster.is_not_team_member { 0 } else { 1 };
    if attacker.ability_active(AbilityId::Plus) && not_physical && dungeon.minus_is_active[team_idx]
    {
        atk_div *= 10;
        atk_mult_int *= 15;
    }
    if attacker.ability_active(AbilityId::Minus) && not_physical && dungeon.plus_is_active[team_idx]
    {
        atk_div *= 10;
        atk_mult_int *= 15;
    }

    if defender.defender_ability_active(AbilityId::Intimidate, attacker, true) && !not_physical {
        atk_mult_int <<= 2;
        atk_div *= 5;
    }

    if defender.defender_ability_active(AbilityId::MarvelScale, attacker, true)
        && !not_physical
        && defender.has_negative_status(true)
    {
        def_mult_int = 3;
        def_div = 2;
    }

    atk *= atk_mult_int;
    def *= def_mult_int;

    if atk_div != 1 {
        atk /= atk_div;
    }
    if def_div != 1 {
        def /= def_div;
    }

    dungeon.damage_calc.offense_calc = atk;
    dungeon.damage_calc.defense_calc = def;

    if atk < 0 {
        atk = 0;
    }
    if atk >= mechanics::OFFENSE_STAT_MAX {
        atk = mechanics::OFFENSE_STAT_MAX;
    }

    dungeon.damage_calc.damage_calc_def = def;

    let def_fx = Fx64::from(def);
    let flv = Fx64::from(attacker.monster.level as i32) + (Fx64::from(atk - def) / Fx64::from(8));
    let at = power + Fx64::from(atk);
    dungeon.damage_calc.damage_calc_at = at.round();
    dungeon.damage_calc.attacker_level = attacker.monster.level as u16;
    dungeon.damage_calc.damage_calc_flv = flv.round();

    let at_scaled = at * Fx64::from(Fx32::CONST_153_DIV_256);
    let def_scaled = def_fx * Fx64::from(Fx32::CONST_NEG0_5);
    let ln_arg = ((flv + Fx64::from(Fx32::from(50))) * Fx64::from(Fx32::from(10))).round();
    let ln = clamped_ln(ln_arg);
    let ln_scaled = ln * Fx64::from(Fx32::from(50));

    let mut base = ((def_scaled + at_scaled) + ln_scaled) + Fx64::from(Fx32::from(-311));

    if dungeon.gen_info.fixed_room_id != FixedRoomId::SubstituteRoom
        && attacker.monster.is_not_team_member
    {
        base /= Fx64::from(Fx32::CONST_85_DIV_64);
    }
    if Fx64::from(999) < base {
        base = Fx64::from(999);
    }
    if base < Fx64::from(1) {
        base = Fx64::from(1);
    }

    let (mut damage_mult_dynamic, super_effective) = calc_type_based_damage_effects(
        dungeon,
        attacker,
        defender,
        attack_power,
        attack_type,
        damage_out,
        moves::is_regular_attack_or_projectile(move_id),
    );

    if full_calc
        && !attacker
            .exclusive_item_effect_active(ExclusiveItemEffectId::BypassReflectLightScreen)
    {
        if move_category == MoveCategory::Physical
            && ((move_id != MoveId::BrickBreak
                && defender.monster.statuses.has(StatusFlags::REFLECT))
                || defender
                    .exclusive_item_effect_active(ExclusiveItemEffectId::HalvedPhysicalDamage))
        {
            damage_mult_dynamic *= Fx64::CONST_0_5;
            dungeon.damage_calc.half_physical_damage_activated = true;
        }
        if move_category == MoveCategory::Special
            && (defender.monster.statuses.has(StatusFlags::LIGHT_SCREEN)
                || defender
                    .exclusive_item_effect_active(ExclusiveItemEffectId::HalvedSpecialDamage))
        {
            damage_mult_dynamic *= Fx64::CONST_0_5;
            dungeon.damage_calc.half_special_damage_activated = true;
        }
    }

    if !defender.monster.statuses.has(StatusFlags::LUCKY_CHANT)
        && !defender.defender_ability_active(AbilityId::BattleArmor, attacker, true)
        && !defender.defender_ability_active(AbilityId::ShellArmor, attacker, true)
        && !defender.iq_skill_enabled(IqSkillId::CriticalDodger, dungeon)
    {
        // The non-female "reduction" is a same-direction boost in the
        // game; kept as-is.
        if attacker.gender() != Gender::Female {
            crit_chance += crit_chance / 2;
        }

        if attacker.monster.statuses.has(StatusFlags::FOCUS_ENERGY) {
            dungeon.damage_calc.focus_energy_activated = true;
            crit_chance = mechanics::OFFENSE_STAT_MAX;
        } else {
            if attacker.item_active(ItemId::ScopeLens)
                || attacker.iq_skill_enabled(IqSkillId::Sharpshooter, dungeon)
            {
                dungeon.damage_calc.scope_lens_or_sharpshooter_activated = true;
                crit_chance += mechanics::SCOPE_LENS_CRIT_RATE_BOOST;
            }
            if attacker.ability_active(AbilityId::SuperLuck) {
                dungeon.damage_calc.super_luck_activated = true;
                crit_chance += mechanics::SUPER_LUCK_CRIT_RATE_BOOST;
            }
            if defender.item_active(ItemId::PatsyBand) {
                dungeon.damage_calc.patsy_band_activated = true;
                // same boost
                crit_chance += mechanics::SCOPE_LENS_CRIT_RATE_BOOST;
            }
            if super_effective && attacker.iq_skill_enabled(IqSkillId::TypeAdvantageMaster, dungeon)
            {
                // override, not add
                crit_chance = mechanics::TYPE_ADVANTAGE_MASTER_CRIT_RATE;
                dungeon.damage_calc.type_advantage_master_activated = true;
            }
        }

        if dungeon.rng.roll_critical_hit(crit_chance)
            && !defender.exclusive_item_effect_active(ExclusiveItemEffectId::NoCriticalHits)
        {
            damage_out.critical_hit = true;
            if attacker.ability_active(AbilityId::Sniper) {
                damage_mult_dynamic *= Fx64::from(2);
                dungeon.damage_calc.sniper_activated = true;
            } else {
                damage_mult_dynamic *= Fx64::CONST_1_5;
            }
        }
    }

    dungeon.damage_calc.damage_calc_base = base.round();
    base *= damage_mult_dynamic;
    dungeon.damage_calc.static_damage_mult = damage_mult;
    base *= Fx64::from(damage_mult);
    dungeon.damage_calc.damage_calc = base.round();

    let variance = dungeon.rng.roll_damage_variance();
    base *= variance;
    dungeon.damage_calc.damage_calc_random_mult_pct = (Fx64::from(100) * variance).round();
    damage_out.damage = base.round();

    if move_id == MoveId::Projectile {
        damage_out.damage = (Fx32::from(damage_out.damage) * Fx32::CONST_0_5).ceil();
    }
    if move_id == MoveId::Projectile && attacker.iq_skill_enabled(IqSkillId::PowerPitcher, dungeon)
    {
        damage_out.damage = (Fx32::from(damage_out.damage)
            * mechanics::POWER_PITCHER_DAMAGE_MULTIPLIER)
            .ceil();
    }

    if damage_out.damage > 0
        && attacker.exclusive_item_effect_active(ExclusiveItemEffectId::DamageBoost50Pct)
    {
        damage_out.damage = (Fx32::from(damage_out.damage)
            * mechanics::AIR_BLADE_DAMAGE_MULTIPLIER)
            .ceil();
    }

    damage_out.damage_message = DamageMessage::Move;
    if damage_out.damage == 0 {
        damage_out.critical_hit = false;
    }
    defender.monster.anger_point_flag = damage_out.critical_hit;
}
