//! Hit-chance resolution, ability/item immunities, and the pre-move check
//! pipeline that can abort a calculation before the core formula runs.

use crate::abilities::AbilityId;
use crate::dungeon::{DungeonState, Weather};
use crate::entity::{MonsterEntity, StatusFlags};
use crate::exclusive::{
    evasion_boost_effect_for_weather, ExclusiveItemEffectId, TypeDamageDisposition,
    TYPE_DAMAGE_NEGATING_EXCLUSIVE_ITEM_EFFECTS,
};
use crate::fixed::{div4_trunc, Fx32};
use crate::iq::IqSkillId;
use crate::items::ItemId;
use crate::mechanics;
use crate::moves::{self, MoveId};
use crate::species::Gender;
use crate::types::TypeId;

use super::DamageData;

/// Resolve whether a move connects.
///
/// A single move use can check accuracy twice; `use_second_accuracy`
/// selects the move's second accuracy tier and tags the roll for the RNG
/// source.
pub fn move_hit_check(
    dungeon: &mut DungeonState,
    attacker: &MonsterEntity,
    defender: &MonsterEntity,
    move_id: MoveId,
    use_second_accuracy: bool,
    never_miss_self: bool,
) -> bool {
    if never_miss_self && std::ptr::eq(attacker, defender) {
        return true;
    }
    if move_id == MoveId::RegularAttack
        && attacker.iq_skill_enabled(IqSkillId::SureHitAttacker, dungeon)
    {
        return true;
    }
    if attacker.monster.statuses.has(StatusFlags::SURE_SHOT) {
        return true;
    }
    if attacker.monster.statuses.has(StatusFlags::WHIFFER) {
        return false;
    }

    let mut move_accuracy = moves::get_move_accuracy(move_id, use_second_accuracy) as i32;
    if move_accuracy > 100 {
        return true;
    }
    if defender.item_active(ItemId::DetectBand) {
        move_accuracy -= mechanics::DETECT_BAND_MOVE_ACCURACY_DROP;
    }
    if defender.iq_skill_enabled(IqSkillId::QuickDodger, dungeon) {
        move_accuracy -= mechanics::QUICK_DODGER_MOVE_ACCURACY_DROP;
    }

    let mut accuracy_boost: i32 = 0;

    if attacker.ability_active(AbilityId::Compoundeyes) {
        accuracy_boost = 2;
    }

    if move_id == MoveId::Thunder {
        let weather = attacker.perceived_weather(dungeon);
        if weather == Weather::Rain {
            return true;
        }
        if weather == Weather::Sunny {
            accuracy_boost -= 2;
        }
    }

    if move_id == MoveId::Blizzard && attacker.perceived_weather(dungeon) == Weather::Hail {
        return true;
    }

    if attacker.iq_skill_enabled(IqSkillId::Concentrator, dungeon) {
        accuracy_boost += 1;
    }

    let mut evasion_stage = defender.monster.stat_modifiers.hit_chance_stages[1] as i32;
    if defender.monster.statuses.has(StatusFlags::EXPOSED) {
        evasion_stage = 10;
    }

    let mut evasion_boost: i32 = 0;
    if defender.perceived_weather(dungeon) == Weather::Sandstorm
        && defender.defender_ability_active(AbilityId::SandVeil, attacker, true)
    {
        evasion_boost = 2;
    }

    if attacker.ability_active(AbilityId::Hustle) && !moves::move_not_physical(move_id) {
        evasion_boost += 2;
    }

    if defender.iq_skill_enabled(IqSkillId::ClutchPerformer, dungeon) {
        let max_hp = (defender.monster.max_hp_stat as i32 + defender.monster.max_hp_boost as i32)
            .min(mechanics::MAX_HP_CAP);
        if (defender.monster.hp as i32) <= div4_trunc(max_hp) {
            evasion_boost += 2;
        }
    }

    if defender.iq_skill_enabled(IqSkillId::Concentrator, dungeon) {
        evasion_boost -= 1;
    }

    if defender.defender_ability_active(AbilityId::TangledFeet, attacker, true)
        && defender
            .monster
            .statuses
            .has(StatusFlags::CONFUSION | StatusFlags::CROSS_EYED)
    {
        evasion_boost += 3;
    }

    if defender.defender_ability_active(AbilityId::SnowCloak, attacker, true)
        && (defender.perceived_weather(dungeon) == Weather::Hail
            || defender.perceived_weather(dungeon) == Weather::Snow)
    {
        evasion_boost += 2;
    }

    let weather = defender.perceived_weather(dungeon);
    if let Some(effect) = evasion_boost_effect_for_weather(weather) {
        if defender.exclusive_item_effect_active(effect) {
            evasion_boost += 1;
        }
    }

    evasion_stage += evasion_boost;
    let mut accuracy_stage =
        attacker.monster.stat_modifiers.hit_chance_stages[0] as i32 + accuracy_boost;

    if attacker.ability_active(AbilityId::NoGuard)
        || defender.defender_ability_active(AbilityId::NoGuard, attacker, true)
    {
        evasion_stage = 10;
        accuracy_stage = 10;
    }

    accuracy_stage = accuracy_stage.clamp(0, 20);

    let accuracy_multipliers = if attacker.gender() == Gender::Female {
        &mechanics::FEMALE_ACCURACY_STAGE_MULTIPLIERS
    } else {
        &mechanics::MALE_ACCURACY_STAGE_MULTIPLIERS
    };
    let mut accuracy = accuracy_multipliers[accuracy_stage as usize];

    evasion_stage = evasion_stage.clamp(0, 20);

    if accuracy < Fx32::from(0) {
        accuracy = Fx32::from(0);
    }
    if accuracy > Fx32::from(100) {
        accuracy = Fx32::from(100);
    }

    let evasion_multipliers = if defender.gender() == Gender::Female {
        &mechanics::FEMALE_EVASION_STAGE_MULTIPLIERS
    } else {
        &mechanics::MALE_EVASION_STAGE_MULTIPLIERS
    };
    let mut evasion = evasion_multipliers[evasion_stage as usize];
    if evasion < Fx32::from(0) {
        evasion = Fx32::from(0);
    }
    if evasion > Fx32::from(100) {
        evasion = Fx32::from(100);
    }

    let hit_chance = ((Fx32::from(move_accuracy) * accuracy) * evasion).trunc();
    dungeon.rng.roll_hit_chance(hit_chance, use_second_accuracy)
}

/// Negate or absorb the computed damage based on the defender's abilities
/// and exclusive item effects.
pub fn apply_ability_and_effect_immunities(
    attacker: &MonsterEntity,
    defender: &MonsterEntity,
    damage_data: &mut DamageData,
) {
    if defender.defender_ability_active(AbilityId::VoltAbsorb, attacker, true)
        && damage_data.type_id == TypeId::Electric
    {
        damage_data.no_damage = true;
        damage_data.healed = true;
        return;
    }
    if (defender.defender_ability_active(AbilityId::WaterAbsorb, attacker, true)
        || defender.defender_ability_active(AbilityId::DrySkin, attacker, true))
        && damage_data.type_id == TypeId::Water
    {
        damage_data.no_damage = true;
        damage_data.healed = true;
        return;
    }
    if defender.defender_ability_active(AbilityId::MotorDrive, attacker, true)
        && damage_data.type_id == TypeId::Electric
    {
        damage_data.no_damage = true;
        return;
    }

    for entry in &TYPE_DAMAGE_NEGATING_EXCLUSIVE_ITEM_EFFECTS {
        if entry.type_id == damage_data.type_id && defender.exclusive_item_effect_active(entry.effect)
        {
            match entry.disposition {
                TypeDamageDisposition::Negates => damage_data.no_damage = true,
                // Absorbed damage still counts as dealt for everything
                // downstream, so only the heal flag is set
                TypeDamageDisposition::Absorbs => damage_data.healed = true,
            }
            return;
        }
    }
}

/// The tail of the damage sequence: the second hit check, immunities, and
/// the transient flag updates on the attacker.
pub fn run_damage_sequence(
    dungeon: &mut DungeonState,
    attacker: &mut MonsterEntity,
    defender: &MonsterEntity,
    move_id: MoveId,
    damage_data: &mut DamageData,
) -> i32 {
    if move_hit_check(dungeon, attacker, defender, move_id, true, true) {
        apply_ability_and_effect_immunities(attacker, defender, damage_data);
        attacker.monster.practice_swinger_flag = false;
        attacker.monster.anger_point_flag = false;
    } else {
        damage_data.no_damage = true;
        if move_id != MoveId::RegularAttack {
            attacker.monster.practice_swinger_flag = true;
        }
    }

    if damage_data.no_damage {
        return 0;
    }
    damage_data.damage
}

/// Checks that run before the damage calculation proper: semi-invulnerable
/// forced misses, Soundproof, Forewarn, the first hit check, and the
/// redirect abilities. Returns whether the move survives them all; any
/// failure arms the attacker's Practice Swinger flag.
pub fn execute_move_effect_prechecks(
    dungeon: &mut DungeonState,
    attacker: &mut MonsterEntity,
    defender: &MonsterEntity,
    move_id: MoveId,
) -> bool {
    // Status moves bounced by Magic-Coat-style effects would target the
    // attacker; damaging moves never are, so the self-target exemption
    // below always applies to the moves this engine computes.
    let reflected_by_magic_coat = false;

    // The redirect interaction with accuracy-bypassing statuses is a
    // reference-behavior approximation.
    let lightningrod = (defender.ability_active(AbilityId::Lightningrod)
        || dungeon.other_monsters.ability_active(AbilityId::Lightningrod))
        && attacker.get_move_type(move_id, dungeon) == TypeId::Electric;
    let storm_drain = (defender.ability_active(AbilityId::StormDrain)
        || dungeon.other_monsters.ability_active(AbilityId::StormDrain))
        && attacker.get_move_type(move_id, dungeon) == TypeId::Water;

    let mut hit = true;
    if defender.two_turn_move_forced_miss(move_id) {
        hit = false;
        dungeon.damage_calc.two_turn_move_forced_miss = true;
    }
    if hit
        && defender.defender_ability_active(AbilityId::Soundproof, attacker, true)
        && moves::is_sound_move(move_id)
    {
        hit = false;
        dungeon.damage_calc.soundproof_activated = true;
    }
    if hit && defender.defender_ability_active(AbilityId::Forewarn, attacker, true) {
        let blocked = dungeon.rng.roll_forewarn();
        if blocked {
            hit = false;
        }
    }
    let never_miss_self = move_id != MoveId::Endure
        && move_id != MoveId::Detect
        && move_id != MoveId::Protect
        && !reflected_by_magic_coat;
    if hit && !move_hit_check(dungeon, attacker, defender, move_id, false, never_miss_self) {
        hit = false;
        dungeon.damage_calc.first_hit_check_failed = true;
    }
    if hit {
        if lightningrod {
            dungeon.damage_calc.lightningrod_activated = true;
            hit = false;
        }
        if storm_drain {
            dungeon.damage_calc.storm_drain_activated = true;
            hit = false;
        }
    }

    if !hit && move_id != MoveId::RegularAttack {
        attacker.monster.practice_swinger_flag = true;
    }
    hit
}
