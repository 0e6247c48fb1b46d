//! Scenario configuration loader.
//!
//! Converts a human-authored JSON battle scenario into the internal entity
//! and battlefield model, resolving names through the name directories and
//! range-checking every fixed-width numeric field. Any unrecognized name or
//! out-of-range value aborts the whole request with a typed error; there
//! are no partial results.

use serde::Deserialize;

use crate::dungeon::{DungeonGenerationInfo, DungeonState, FixedRoomId};
use crate::entity::{MonsterEntity, StatusFlags, StatusId};
use crate::fixed::{DecFx16_16, Fx32};
use crate::items::ItemId;
use crate::mechanics;
use crate::moves::{self, MoveId, MoveUse};
use crate::names;
use crate::rng::MockDungeonRng;
use crate::species::SpeciesSpec;

/// Errors raised while loading a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field}: {value} out of range (min {min})")]
    Underflow {
        field: String,
        value: String,
        min: String,
    },
    #[error("{field}: {value} out of range (max {max})")]
    Overflow {
        field: String,
        value: String,
        max: String,
    },
    #[error("unrecognized {category} name '{name}'")]
    UnknownName {
        category: &'static str,
        name: String,
    },
    #[error("unsupported status '{0}'")]
    UnsupportedStatus(String),
    #[error("custom species not implemented")]
    CustomSpecies,
    #[error("custom moves not implemented")]
    CustomMoves,
    #[error("invalid scenario document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A fully-resolved battle scenario.
pub struct Scenario {
    pub dungeon: DungeonState,
    pub attacker: MonsterEntity,
    pub defender: MonsterEntity,
    pub move_use: MoveUse,
    /// The move's resolved base power (a thrown item's power for
    /// projectiles).
    pub attack_power: i32,
}

// ============================================================================
// Raw document shape
// ============================================================================

#[derive(Deserialize, Default)]
struct ScenarioCfg {
    #[serde(default)]
    dungeon: DungeonCfg,
    #[serde(default)]
    rng: RngCfg,
    attacker: MonsterCfg,
    defender: MonsterCfg,
    #[serde(rename = "move")]
    move_cfg: MoveCfg,
}

#[derive(Deserialize, Default)]
struct DungeonCfg {
    weather: Option<String>,
    #[serde(default)]
    mud_sport: bool,
    #[serde(default)]
    water_sport: bool,
    #[serde(default)]
    gravity: bool,
    #[serde(default)]
    iq_disabled: bool,
    fixed_room_id: Option<i64>,
    #[serde(default)]
    plus: SideFlagsCfg,
    #[serde(default)]
    minus: SideFlagsCfg,
    #[serde(default)]
    other_monsters: OtherMonstersCfg,
}

#[derive(Deserialize, Default)]
struct SideFlagsCfg {
    #[serde(default)]
    enemy: bool,
    #[serde(default)]
    team: bool,
}

#[derive(Deserialize, Default)]
struct OtherMonstersCfg {
    #[serde(default)]
    iq: Vec<String>,
    #[serde(default)]
    abilities: Vec<String>,
}

#[derive(Deserialize, Default)]
struct RngCfg {
    #[serde(default)]
    huge_pure_power: bool,
    #[serde(default)]
    critical_hit: bool,
    variance_dial: Option<f64>,
}

#[derive(Deserialize, Default)]
struct MonsterCfg {
    species: Option<serde_json::Value>,
    #[serde(default)]
    is_team_member: bool,
    #[serde(default)]
    is_team_leader: bool,
    level: Option<i64>,
    max_hp: Option<i64>,
    hp: Option<i64>,
    atk: Option<i64>,
    sp_atk: Option<i64>,
    def: Option<i64>,
    sp_def: Option<i64>,
    iq: Option<i64>,
    belly: Option<i64>,
    #[serde(default)]
    stat_modifiers: StatModifiersCfg,
    #[serde(default)]
    boosted_attacks: bool,
    #[serde(default)]
    practice_swinger: bool,
    #[serde(default)]
    anger_point: bool,
    n_moves_out_of_pp: Option<i64>,
    hidden_power_base_power: Option<i64>,
    hidden_power_type: Option<String>,
    #[serde(default)]
    held_item: HeldItemCfg,
    #[serde(default)]
    iq_skills: Vec<String>,
    #[serde(default)]
    exclusive_items: ExclusiveItemsCfg,
    #[serde(default)]
    statuses: Vec<String>,
}

#[derive(Deserialize, Default)]
struct StatModifiersCfg {
    #[serde(default)]
    stages: StagesCfg,
    #[serde(default)]
    multipliers: MultipliersCfg,
    flash_fire_boost: Option<i64>,
}

#[derive(Deserialize, Default)]
struct StagesCfg {
    atk: Option<i64>,
    sp_atk: Option<i64>,
    def: Option<i64>,
    sp_def: Option<i64>,
    accuracy: Option<i64>,
    evasion: Option<i64>,
    speed: Option<i64>,
    stockpile: Option<i64>,
}

#[derive(Deserialize, Default)]
struct MultipliersCfg {
    atk: Option<f64>,
    sp_atk: Option<f64>,
    def: Option<f64>,
    sp_def: Option<f64>,
}

#[derive(Deserialize, Default)]
struct HeldItemCfg {
    id: Option<String>,
    #[serde(default)]
    sticky: bool,
}

#[derive(Deserialize, Default)]
struct ExclusiveItemsCfg {
    #[serde(default)]
    effects: Vec<String>,
    #[serde(default)]
    stat_boosts: StatBoostsCfg,
}

#[derive(Deserialize, Default)]
struct StatBoostsCfg {
    atk: Option<i64>,
    sp_atk: Option<i64>,
    def: Option<i64>,
    sp_def: Option<i64>,
}

#[derive(Deserialize, Default)]
struct MoveCfg {
    id: Option<serde_json::Value>,
    ginseng: Option<i64>,
    pp: Option<i64>,
    prior_successive_hits: Option<i64>,
    #[serde(default)]
    alternate_power: bool,
}

// ============================================================================
// Checked conversions
// ============================================================================

fn checked_int(field: &str, value: Option<i64>, default: i64, min: i64, max: i64) -> Result<i64, ConfigError> {
    let value = value.unwrap_or(default);
    if value < min {
        return Err(ConfigError::Underflow {
            field: field.to_string(),
            value: value.to_string(),
            min: min.to_string(),
        });
    }
    if value > max {
        return Err(ConfigError::Overflow {
            field: field.to_string(),
            value: value.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}

fn get_u8(field: &str, value: Option<i64>, default: i64) -> Result<u8, ConfigError> {
    Ok(checked_int(field, value, default, 0, u8::MAX as i64)? as u8)
}

fn get_i16(field: &str, value: Option<i64>, default: i64) -> Result<i16, ConfigError> {
    Ok(checked_int(field, value, default, i16::MIN as i64, i16::MAX as i64)? as i16)
}

fn get_i32(field: &str, value: Option<i64>, default: i64) -> Result<i32, ConfigError> {
    Ok(checked_int(field, value, default, i32::MIN as i64, i32::MAX as i64)? as i32)
}

/// Range-checked conversion of a decimal field to the 8-fraction-bit fixed
/// point, truncating excess fractional precision.
fn get_fx32(field: &str, value: Option<f64>, default: f64) -> Result<Fx32, ConfigError> {
    let value = value.unwrap_or(default);
    let min = -((1i64 << 23) as f64);
    if value < min {
        return Err(ConfigError::Underflow {
            field: field.to_string(),
            value: value.to_string(),
            min: min.to_string(),
        });
    }
    let max = ((1i64 << 23) - 1) as f64 + 255.0 / 256.0;
    if value > max {
        return Err(ConfigError::Overflow {
            field: field.to_string(),
            value: value.to_string(),
            max: max.to_string(),
        });
    }

    Ok(Fx32::from_raw((value * 256.0) as i64 as u32))
}

fn lookup<T: Copy + PartialEq>(
    directory: &names::NameDirectory<T>,
    category: &'static str,
    name: &str,
) -> Result<T, ConfigError> {
    directory.id_of(name).ok_or_else(|| ConfigError::UnknownName {
        category,
        name: name.to_string(),
    })
}

// ============================================================================
// Section parsers
// ============================================================================

fn parse_dungeon_cfg(dungeon_cfg: &DungeonCfg, rng_cfg: &RngCfg) -> Result<DungeonState, ConfigError> {
    let mut dungeon = DungeonState::default();

    if let Some(weather) = &dungeon_cfg.weather {
        dungeon.weather = lookup(&names::WEATHER, "weather", weather)?;
    }
    dungeon.mud_sport_turns = dungeon_cfg.mud_sport as u8;
    dungeon.water_sport_turns = dungeon_cfg.water_sport as u8;
    dungeon.gravity = dungeon_cfg.gravity;
    dungeon.iq_disabled = dungeon_cfg.iq_disabled;
    dungeon.gen_info = DungeonGenerationInfo {
        fixed_room_id: match checked_int("fixed_room_id", dungeon_cfg.fixed_room_id, 0, 0, 1)? {
            0 => FixedRoomId::None,
            _ => FixedRoomId::SubstituteRoom,
        },
    };

    dungeon.plus_is_active = [dungeon_cfg.plus.enemy, dungeon_cfg.plus.team];
    dungeon.minus_is_active = [dungeon_cfg.minus.enemy, dungeon_cfg.minus.team];

    for iq in &dungeon_cfg.other_monsters.iq {
        let skill = lookup(&names::IQ, "IQ skill", iq)?;
        dungeon.other_monsters.iq_skill_flags[skill as usize] = true;
    }
    for ability in &dungeon_cfg.other_monsters.abilities {
        let ability = lookup(&names::ABILITY, "ability", ability)?;
        dungeon.other_monsters.abilities[ability as usize] = true;
    }

    dungeon.rng = Box::new(MockDungeonRng::new(
        rng_cfg.huge_pure_power,
        rng_cfg.critical_hit,
        rng_cfg.variance_dial.unwrap_or(0.0),
    ));

    Ok(dungeon)
}

fn parse_monster_cfg(monster_cfg: &MonsterCfg) -> Result<MonsterEntity, ConfigError> {
    let mut entity = MonsterEntity::default();
    let monster = &mut entity.monster;

    let species = match &monster_cfg.species {
        Some(serde_json::Value::String(name)) => lookup(&names::SPECIES, "species", name)?,
        _ => return Err(ConfigError::CustomSpecies),
    };
    monster.apparent_id = species;
    let spec = SpeciesSpec::from_id(species);
    monster.types = spec.types;
    monster.abilities = spec.abilities;

    monster.is_not_team_member = !monster_cfg.is_team_member;
    monster.is_team_leader = monster_cfg.is_team_leader;
    monster.level = get_u8("level", monster_cfg.level, 1)?;
    monster.max_hp_stat = get_i16("max_hp", monster_cfg.max_hp, 1)?;
    monster.hp = get_i16("hp", monster_cfg.hp, monster.max_hp_stat as i64)?;
    monster.offensive_stats[0] = get_u8("atk", monster_cfg.atk, 1)?;
    monster.offensive_stats[1] = get_u8("sp_atk", monster_cfg.sp_atk, 1)?;
    monster.defensive_stats[0] = get_u8("def", monster_cfg.def, 1)?;
    monster.defensive_stats[1] = get_u8("sp_def", monster_cfg.sp_def, 1)?;
    monster.iq = get_i16("iq", monster_cfg.iq, 0)?;
    monster.belly = DecFx16_16::from(get_i16("belly", monster_cfg.belly, 100)?);

    let stages = &monster_cfg.stat_modifiers.stages;
    let stat_modifiers = &mut monster.stat_modifiers;
    stat_modifiers.offensive_stages[0] = get_i16("atk", stages.atk, 10)?;
    stat_modifiers.offensive_stages[1] = get_i16("sp_atk", stages.sp_atk, 10)?;
    stat_modifiers.defensive_stages[0] = get_i16("def", stages.def, 10)?;
    stat_modifiers.defensive_stages[1] = get_i16("sp_def", stages.sp_def, 10)?;
    stat_modifiers.hit_chance_stages[0] = get_i16("accuracy", stages.accuracy, 10)?;
    stat_modifiers.hit_chance_stages[1] = get_i16("evasion", stages.evasion, 10)?;
    monster.statuses.speed_stage = get_i32("speed", stages.speed, 1)?;
    monster.statuses.stockpile_stage = get_u8("stockpile", stages.stockpile, 0)?;

    let multipliers = &monster_cfg.stat_modifiers.multipliers;
    stat_modifiers.offensive_multipliers[0] = get_fx32("atk", multipliers.atk, 1.0)?;
    stat_modifiers.offensive_multipliers[1] = get_fx32("sp_atk", multipliers.sp_atk, 1.0)?;
    stat_modifiers.defensive_multipliers[0] = get_fx32("def", multipliers.def, 1.0)?;
    stat_modifiers.defensive_multipliers[1] = get_fx32("sp_def", multipliers.sp_def, 1.0)?;
    stat_modifiers.flash_fire_boost = get_i16(
        "flash_fire_boost",
        monster_cfg.stat_modifiers.flash_fire_boost,
        0,
    )?;
    monster.boosted_attacks = monster_cfg.boosted_attacks;
    monster.practice_swinger_flag = monster_cfg.practice_swinger;
    monster.anger_point_flag = monster_cfg.anger_point;
    monster.n_moves_out_of_pp = get_u8("n_moves_out_of_pp", monster_cfg.n_moves_out_of_pp, 0)?;

    monster.hidden_power_base_power = get_i16(
        "hidden_power_base_power",
        monster_cfg.hidden_power_base_power,
        1,
    )?;
    if let Some(hidden_power_type) = &monster_cfg.hidden_power_type {
        monster.hidden_power_type = lookup(&names::TYPE, "type", hidden_power_type)?;
    }

    if let Some(item_name) = &monster_cfg.held_item.id {
        monster.held_item.id = lookup(&names::ITEM, "item", item_name)?;
        if monster.held_item.id != ItemId::Nothing {
            monster.held_item.exists = true;
        }
    }
    monster.held_item.sticky = monster_cfg.held_item.sticky;

    for iq in &monster_cfg.iq_skills {
        let skill = lookup(&names::IQ, "IQ skill", iq)?;
        monster.iq_skill_flags[skill as usize] = true;
    }

    for effect in &monster_cfg.exclusive_items.effects {
        let effect = lookup(&names::EXCLUSIVE_ITEM_EFFECT, "exclusive item effect", effect)?;
        monster.exclusive_item_effect_flags[effect as usize] = true;
    }
    let stat_boosts = &monster_cfg.exclusive_items.stat_boosts;
    monster.exclusive_item_offense_boosts[0] = get_u8("atk", stat_boosts.atk, 0)?;
    monster.exclusive_item_offense_boosts[1] = get_u8("sp_atk", stat_boosts.sp_atk, 0)?;
    monster.exclusive_item_defense_boosts[0] = get_u8("def", stat_boosts.def, 0)?;
    monster.exclusive_item_defense_boosts[1] = get_u8("sp_def", stat_boosts.sp_def, 0)?;

    for status_name in &monster_cfg.statuses {
        // special case
        if status_name.eq_ignore_ascii_case("guts/marvel scale") {
            monster.statuses.other_negative_status = true;
            continue;
        }
        let status = lookup(&names::STATUS, "status", status_name)?;
        let flag = status_flag(status)
            .ok_or_else(|| ConfigError::UnsupportedStatus(status_name.clone()))?;
        monster.statuses.flags |= flag;
    }

    Ok(entity)
}

fn status_flag(status: StatusId) -> Option<StatusFlags> {
    match status {
        StatusId::Sleep => Some(StatusFlags::SLEEP),
        StatusId::Nightmare => Some(StatusFlags::NIGHTMARE),
        StatusId::Napping => Some(StatusFlags::NAPPING),
        StatusId::Burn => Some(StatusFlags::BURN),
        StatusId::Poisoned => Some(StatusFlags::POISON),
        StatusId::BadlyPoisoned => Some(StatusFlags::BAD_POISON),
        StatusId::Paralysis => Some(StatusFlags::PARALYSIS),
        StatusId::Identifying => Some(StatusFlags::IDENTIFYING),
        StatusId::Confused => Some(StatusFlags::CONFUSION),
        StatusId::SkullBash => Some(StatusFlags::SKULL_BASH),
        StatusId::Flying => Some(StatusFlags::FLYING),
        StatusId::Bouncing => Some(StatusFlags::BOUNCING),
        StatusId::Diving => Some(StatusFlags::DIVING),
        StatusId::Digging => Some(StatusFlags::DIGGING),
        StatusId::ShadowForce => Some(StatusFlags::SHADOW_FORCE),
        StatusId::Charging => Some(StatusFlags::CHARGE),
        StatusId::Reflect => Some(StatusFlags::REFLECT),
        StatusId::LightScreen => Some(StatusFlags::LIGHT_SCREEN),
        StatusId::LuckyChant => Some(StatusFlags::LUCKY_CHANT),
        StatusId::GastroAcid => Some(StatusFlags::GASTRO_ACID),
        StatusId::SureShot => Some(StatusFlags::SURE_SHOT),
        StatusId::Whiffer => Some(StatusFlags::WHIFFER),
        StatusId::FocusEnergy => Some(StatusFlags::FOCUS_ENERGY),
        StatusId::CrossEyed => Some(StatusFlags::CROSS_EYED),
        StatusId::MiracleEye => Some(StatusFlags::MIRACLE_EYE),
        StatusId::MagnetRise => Some(StatusFlags::MAGNET_RISE),
        StatusId::Exposed => Some(StatusFlags::EXPOSED),
        StatusId::None => None,
    }
}

/// The thrown items the move section accepts in place of a move name.
static PROJECTILE_ITEMS: &[(ItemId, i16)] = &[
    (ItemId::Stick, mechanics::STICK_POWER),
    (ItemId::IronThorn, mechanics::IRON_THORN_POWER),
    (ItemId::SilverSpike, mechanics::SILVER_SPIKE_POWER),
    (ItemId::GoldFang, mechanics::GOLD_FANG_POWER),
    (ItemId::CacneaSpike, mechanics::CACNEA_SPIKE_POWER),
    (ItemId::CorsolaTwig, mechanics::CORSOLA_TWIG_POWER),
    (ItemId::GoldThorn, mechanics::GOLD_THORN_POWER),
];

fn parse_move_cfg(move_cfg: &MoveCfg) -> Result<(MoveUse, i32), ConfigError> {
    let name = match &move_cfg.id {
        Some(serde_json::Value::String(name)) => name,
        _ => return Err(ConfigError::CustomMoves),
    };

    let (move_id, base_power) = match names::ITEM
        .id_of(name)
        .and_then(|item| PROJECTILE_ITEMS.iter().find(|(id, _)| *id == item))
    {
        Some((_, power)) => (MoveId::Projectile, *power as i32),
        None => {
            let move_id = lookup(&names::MOVE, "move", name)?;
            (move_id, moves::get_move_base_power(move_id, false) as i32)
        }
    };

    Ok((
        MoveUse {
            id: move_id,
            ginseng: get_u8("ginseng", move_cfg.ginseng, 0)?,
            pp: get_u8("pp", move_cfg.pp, 0)?,
            prior_successive_hits: get_u8(
                "prior_successive_hits",
                move_cfg.prior_successive_hits,
                0,
            )?,
            alternate_power: move_cfg.alternate_power,
        },
        base_power,
    ))
}

/// Load a scenario from a JSON document.
pub fn parse_scenario(json: &str) -> Result<Scenario, ConfigError> {
    let cfg: ScenarioCfg = serde_json::from_str(json)?;
    parse_scenario_cfg(&cfg)
}

fn parse_scenario_cfg(cfg: &ScenarioCfg) -> Result<Scenario, ConfigError> {
    let dungeon = parse_dungeon_cfg(&cfg.dungeon, &cfg.rng)?;
    let attacker = parse_monster_cfg(&cfg.attacker)?;
    let defender = parse_monster_cfg(&cfg.defender)?;
    let (move_use, attack_power) = parse_move_cfg(&cfg.move_cfg)?;

    Ok(Scenario {
        dungeon,
        attacker,
        defender,
        move_use,
        attack_power,
    })
}
