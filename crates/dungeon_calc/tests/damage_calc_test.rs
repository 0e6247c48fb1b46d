//! End-to-end damage calculation tests.
//!
//! The simple scenarios pin every intermediate of the diagnostic trace; the
//! Charizard/Flygon matrix reproduces values captured from the live engine,
//! byte for byte.

use dungeon_calc::entity::StatusFlags;
use dungeon_calc::moves::MoveUse;
use dungeon_calc::rng::MockDungeonRng;
use dungeon_calc::{
    simulate_damage_calc, simulate_damage_calc_generic, simulate_damage_calc_projectile,
    AbilityId, DamageData, DamageMessage, DecFx16_16, DungeonState, IqSkillId, ItemId, Monster,
    MonsterEntity, MoveCategory, MoveId, SpeciesId, TypeId, TypeMatchup,
};

fn dungeon_with_dial(variance_dial: f64) -> DungeonState {
    let mut dungeon = DungeonState::default();
    dungeon.rng = Box::new(MockDungeonRng::new(false, false, variance_dial));
    dungeon
}

// ============================================================================
// Simple scenarios (level 50, neutral stages)
// ============================================================================

fn simple_charizard() -> MonsterEntity {
    let mut charizard = Monster::default();
    charizard.apparent_id = SpeciesId::Charizard;
    charizard.is_not_team_member = false;
    charizard.is_team_leader = true;
    charizard.level = 50;
    charizard.max_hp_stat = 128;
    charizard.hp = 128;
    charizard.offensive_stats = [73, 80];
    charizard.defensive_stats = [69, 68];
    charizard.types = [TypeId::Fire, TypeId::Flying];
    charizard.abilities[0] = AbilityId::Blaze;
    charizard.belly = DecFx16_16::from(100);
    MonsterEntity::new(charizard)
}

fn simple_bulbasaur() -> MonsterEntity {
    let mut bulbasaur = Monster::default();
    bulbasaur.apparent_id = SpeciesId::Bulbasaur;
    bulbasaur.is_not_team_member = true;
    bulbasaur.is_team_leader = false;
    bulbasaur.level = 50;
    bulbasaur.max_hp_stat = 130;
    bulbasaur.hp = 130;
    bulbasaur.offensive_stats = [63, 69];
    bulbasaur.defensive_stats = [64, 64];
    bulbasaur.types = [TypeId::Grass, TypeId::Poison];
    bulbasaur.abilities[0] = AbilityId::Overgrow;
    bulbasaur.belly = DecFx16_16::from(100);
    MonsterEntity::new(bulbasaur)
}

#[test]
fn generic_calc_water_gun() {
    let mut dungeon = dungeon_with_dial(0.5);
    let mut attacker = simple_charizard();
    let mut defender = simple_bulbasaur();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc_generic(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        TypeId::Water,
        20,
        MoveId::WaterGun,
        10,
        1.into(),
    );

    assert_eq!(details.damage, damage);
    assert_eq!(details.damage_message, DamageMessage::Move);
    assert_eq!(details.type_matchup, TypeMatchup::NotVeryEffective);
    assert_eq!(details.type_id, TypeId::Water);
    assert_eq!(details.category, MoveCategory::Special);
    assert!(!details.critical_hit);
    assert!(!details.full_type_immunity);
    assert!(!details.no_damage);
    assert!(!details.healed);

    let diag = &dungeon.damage_calc;
    assert_eq!(diag.move_type, TypeId::Water);
    assert_eq!(diag.move_category, MoveCategory::Special);
    assert_eq!(
        diag.move_indiv_type_matchups,
        [TypeMatchup::NotVeryEffective, TypeMatchup::Neutral]
    );
    assert_eq!(diag.offensive_stat_stage, 10);
    assert_eq!(diag.defensive_stat_stage, 10);
    assert_eq!(diag.offensive_stat, 80);
    assert_eq!(diag.defensive_stat, 64);
    assert_eq!(diag.flash_fire_boost, 0);
    assert_eq!(diag.offense_calc, 80);
    assert_eq!(diag.defense_calc, 64);
    assert_eq!(diag.attacker_level, 50);
    assert_eq!(diag.damage_calc_at, 100); // (80 + 20)
    assert_eq!(diag.damage_calc_def, 64);
    assert_eq!(diag.damage_calc_flv, 52); // 50 + (80 - 64)/8
    assert_eq!(diag.damage_calc_base, 63); // 153/256*100 - 64/2 + 50*ln(10*(52+50)) - 311
    assert_eq!(diag.static_damage_mult.val(), 1.0);
    assert_eq!(diag.damage_calc, 45); // 0.70703125 * ~63.14
    assert_eq!(diag.damage_calc_random_mult_pct, 100);

    assert_eq!(damage, 45);
    let rng = dungeon.mock_rng().unwrap();
    assert_eq!(rng.hit_chance1(), Some(102)); // trunc(trunc(100 * 1) * 1.02734375)
    assert_eq!(rng.hit_chance2(), Some(90)); // trunc(trunc(88 * 1) * 1.02734375)
    assert_eq!(rng.combined_hit_probability(), 0.9); // 1*0.9
}

#[test]
fn full_calc_flamethrower() {
    let mut dungeon = dungeon_with_dial(0.5);
    let mut attacker = simple_charizard();
    let mut defender = simple_bulbasaur();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse::new(MoveId::Flamethrower),
    );

    assert_eq!(details.damage, damage);
    assert_eq!(details.damage_message, DamageMessage::Move);
    assert_eq!(details.type_matchup, TypeMatchup::SuperEffective);
    assert_eq!(details.type_id, TypeId::Fire);
    assert_eq!(details.category, MoveCategory::Special);
    assert!(!details.critical_hit);
    assert!(!details.full_type_immunity);
    assert!(!details.no_damage);
    assert!(!details.healed);

    let diag = &dungeon.damage_calc;
    assert_eq!(diag.move_type, TypeId::Fire);
    assert_eq!(diag.move_category, MoveCategory::Special);
    assert_eq!(
        diag.move_indiv_type_matchups,
        [TypeMatchup::SuperEffective, TypeMatchup::Neutral]
    );
    assert_eq!(diag.offensive_stat_stage, 10);
    assert_eq!(diag.defensive_stat_stage, 10);
    assert_eq!(diag.offensive_stat, 80);
    assert_eq!(diag.defensive_stat, 64);
    assert_eq!(diag.flash_fire_boost, 0);
    assert_eq!(diag.offense_calc, 80);
    assert_eq!(diag.defense_calc, 64);
    assert_eq!(diag.attacker_level, 50);
    assert_eq!(diag.damage_calc_at, 98); // (80 + 18)
    assert_eq!(diag.damage_calc_def, 64);
    assert_eq!(diag.damage_calc_flv, 52); // 50 + (80 - 64)/8
    assert_eq!(diag.damage_calc_base, 62); // 153/256*98 - 64/2 + 50*ln(10*(52+50)) - 311
    assert_eq!(diag.static_damage_mult.val(), 1.0);
    assert_eq!(diag.damage_calc, 130); // 1.3984375 * 1.5 * ~61.95
    assert_eq!(diag.damage_calc_random_mult_pct, 100);
    assert!(diag.stab_boost_activated);

    assert_eq!(damage, 130);
    let rng = dungeon.mock_rng().unwrap();
    assert_eq!(rng.hit_chance1(), Some(97)); // trunc(trunc(95 * 1) * 1.02734375)
    assert_eq!(rng.hit_chance2(), Some(90)); // trunc(trunc(88 * 1) * 1.02734375)
    assert_eq!(rng.combined_hit_probability(), 0.873); // 0.97*0.9
}

#[test]
fn projectile_calc() {
    let mut dungeon = dungeon_with_dial(0.5);
    let mut attacker = simple_charizard();
    let mut defender = simple_bulbasaur();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc_projectile(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        10,
    );

    assert_eq!(details.damage, damage);
    assert_eq!(details.damage_message, DamageMessage::Move);
    assert_eq!(details.type_matchup, TypeMatchup::Neutral);
    assert_eq!(details.type_id, TypeId::None);
    assert_eq!(details.category, MoveCategory::Physical);
    assert!(!details.critical_hit);
    assert!(!details.no_damage);
    assert!(!details.healed);

    let diag = &dungeon.damage_calc;
    assert_eq!(diag.move_type, TypeId::None);
    assert_eq!(diag.move_category, MoveCategory::Physical);
    assert_eq!(
        diag.move_indiv_type_matchups,
        [TypeMatchup::Neutral, TypeMatchup::Neutral]
    );
    assert_eq!(diag.offensive_stat_stage, 10);
    assert_eq!(diag.defensive_stat_stage, 10);
    assert_eq!(diag.offensive_stat, 73);
    assert_eq!(diag.defensive_stat, 64);
    assert_eq!(diag.offense_calc, 73);
    assert_eq!(diag.defense_calc, 64);
    assert_eq!(diag.attacker_level, 50);
    assert_eq!(diag.damage_calc_at, 83); // (73 + 10)
    assert_eq!(diag.damage_calc_def, 64);
    assert_eq!(diag.damage_calc_flv, 51); // 50 + (73 - 64)/8, rounded
    assert_eq!(diag.damage_calc_base, 53);
    assert_eq!(diag.static_damage_mult.val(), 1.0);
    assert_eq!(diag.damage_calc, 53);
    assert_eq!(diag.damage_calc_random_mult_pct, 100);

    assert_eq!(damage, 27); // ceil(0.5 * 53)
    let rng = dungeon.mock_rng().unwrap();
    assert_eq!(rng.hit_chance1(), None); // accuracy 125, guaranteed roll
    assert_eq!(rng.hit_chance2(), Some(102)); // trunc(trunc(100 * 1) * 1.02734375)
    assert_eq!(rng.combined_hit_probability(), 1.0);
}

// ============================================================================
// Boundary behavior
// ============================================================================

#[test]
fn empty_belly_enemies_always_deal_one_damage() {
    let mut dungeon = dungeon_with_dial(1.0);
    // Make the attack otherwise enormous
    let mut attacker = simple_bulbasaur();
    attacker.monster.offensive_stats = [255, 255];
    attacker.monster.level = 100;
    attacker.monster.belly = DecFx16_16::from(0);
    let mut defender = simple_charizard();
    defender.monster.is_team_leader = false;
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse::new(MoveId::RazorLeaf),
    );

    assert_eq!(damage, 1);
    assert_eq!(details.type_matchup, TypeMatchup::Neutral);
    assert!(!details.no_damage);
}

#[test]
fn wonder_guard_pins_the_regular_attack_to_one_damage() {
    let mut dungeon = dungeon_with_dial(1.0);
    let mut attacker = simple_charizard();
    attacker.monster.offensive_stats = [255, 255];
    let mut defender = simple_bulbasaur();
    defender.monster.abilities[0] = AbilityId::WonderGuard;
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse::new(MoveId::RegularAttack),
    );

    assert_eq!(damage, 1);
}

#[test]
fn generic_calc_is_idempotent_on_copied_inputs() {
    let run = || {
        let mut dungeon = dungeon_with_dial(0.73);
        let mut attacker = simple_charizard();
        let mut defender = simple_bulbasaur();
        let mut details = DamageData::default();
        let damage = simulate_damage_calc_generic(
            &mut details,
            &mut dungeon,
            &mut attacker,
            &mut defender,
            TypeId::Fire,
            18,
            MoveId::Flamethrower,
            10,
            1.into(),
        );
        (damage, details.type_matchup, dungeon.damage_calc.clone())
    };

    let (damage_a, matchup_a, diag_a) = run();
    let (damage_b, matchup_b, diag_b) = run();
    assert_eq!(damage_a, damage_b);
    assert_eq!(matchup_a, matchup_b);
    assert_eq!(diag_a.damage_calc, diag_b.damage_calc);
    assert_eq!(diag_a.damage_calc_base, diag_b.damage_calc_base);
    assert_eq!(diag_a.damage_calc_at, diag_b.damage_calc_at);
    assert_eq!(diag_a.damage_calc_flv, diag_b.damage_calc_flv);
    assert_eq!(
        diag_a.damage_calc_random_mult_pct,
        diag_b.damage_calc_random_mult_pct
    );
}

#[test]
fn volt_absorb_heals_and_negates() {
    let mut dungeon = dungeon_with_dial(0.5);
    let mut attacker = simple_charizard();
    let mut defender = simple_bulbasaur();
    defender.monster.abilities[0] = AbilityId::VoltAbsorb;
    let mut details = DamageData::default();

    let damage = simulate_damage_calc_generic(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        TypeId::Electric,
        12,
        MoveId::Thundershock,
        2,
        1.into(),
    );

    assert_eq!(damage, 0);
    assert!(details.no_damage);
    assert!(details.healed);
}

#[test]
fn failed_precheck_arms_practice_swinger() {
    let mut dungeon = dungeon_with_dial(0.5);
    let mut attacker = simple_charizard();
    let mut defender = simple_bulbasaur();
    defender.monster.statuses.flags |= StatusFlags::DIGGING;
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse::new(MoveId::Flamethrower),
    );

    assert_eq!(damage, 0);
    assert!(dungeon.damage_calc.two_turn_move_forced_miss);
    assert!(attacker.monster.practice_swinger_flag);
}

#[test]
fn soundproof_blocks_sound_moves() {
    let mut dungeon = dungeon_with_dial(0.5);
    let mut attacker = simple_charizard();
    let mut defender = simple_bulbasaur();
    defender.monster.abilities[0] = AbilityId::Soundproof;
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse::new(MoveId::HyperVoice),
    );

    assert_eq!(damage, 0);
    assert!(dungeon.damage_calc.soundproof_activated);
}

#[test]
fn dream_eater_needs_a_sleeping_defender() {
    let mut dungeon = dungeon_with_dial(0.5);
    let mut attacker = simple_charizard();
    let mut defender = simple_bulbasaur();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse::new(MoveId::DreamEater),
    );
    assert_eq!(damage, 0);
    assert!(dungeon.damage_calc.dream_eater_failed);

    let mut dungeon = dungeon_with_dial(0.5);
    defender.monster.statuses.flags |= StatusFlags::SLEEP;
    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse::new(MoveId::DreamEater),
    );
    assert!(damage > 0);
    assert!(!dungeon.damage_calc.dream_eater_failed);
}

#[test]
fn last_resort_needs_an_exhausted_move_slot() {
    let mut dungeon = dungeon_with_dial(0.5);
    let mut attacker = simple_charizard();
    let mut defender = simple_bulbasaur();
    let mut details = DamageData::default();

    let move_use = MoveUse {
        id: MoveId::LastResort,
        pp: 2,
        ..MoveUse::default()
    };
    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &move_use,
    );
    assert_eq!(damage, 0);
    assert!(dungeon.damage_calc.last_resort_failed);

    let mut dungeon = dungeon_with_dial(0.5);
    attacker.monster.n_moves_out_of_pp = 3;
    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &move_use,
    );
    assert!(damage > 0);
    assert!(!dungeon.damage_calc.last_resort_failed);
}

// ============================================================================
// Empirically captured scenarios (Charizard vs. Flygon)
// ============================================================================

fn empirical_charizard() -> MonsterEntity {
    let mut charizard = Monster::default();
    charizard.apparent_id = SpeciesId::Charizard;
    charizard.is_not_team_member = false;
    charizard.is_team_leader = true;
    charizard.level = 66;
    charizard.max_hp_stat = 199;
    charizard.max_hp_boost = 20;
    charizard.hp = 219;
    charizard.offensive_stats = [160, 167];
    charizard.defensive_stats = [158, 154];
    charizard.iq = 970;
    charizard.types = [TypeId::Fire, TypeId::Flying];
    charizard.abilities[0] = AbilityId::Blaze;
    charizard.held_item.exists = true;
    charizard.held_item.id = ItemId::XRaySpecs;
    charizard.belly = DecFx16_16::new(78, 600);
    for skill in [
        IqSkillId::Escapist,
        IqSkillId::Aggressor,
        IqSkillId::Intimidator,
        IqSkillId::Survivalist,
        IqSkillId::ExtraStriker,
        IqSkillId::NoCharger,
        IqSkillId::PowerPitcher,
        IqSkillId::Concentrator,
        IqSkillId::BrickTough,
        IqSkillId::PracticeSwinger,
        IqSkillId::ClutchPerformer,
        IqSkillId::PierceHurler,
        IqSkillId::ItemMaster,
        IqSkillId::CourseChecker,
        IqSkillId::Nontraitor,
        IqSkillId::StatusChecker,
        IqSkillId::TypeAdvantageMaster,
        IqSkillId::ExclusiveMoveUser,
        IqSkillId::ExpGoGetter,
        IqSkillId::ItemCatcher,
        IqSkillId::Nonsleeper,
        IqSkillId::LavaEvader,
    ] {
        charizard.iq_skill_flags[skill as usize] = true;
    }
    MonsterEntity::new(charizard)
}

fn empirical_flygon() -> MonsterEntity {
    let mut flygon = Monster::default();
    flygon.apparent_id = SpeciesId::FlygonSecondary;
    flygon.is_not_team_member = true;
    flygon.is_team_leader = false;
    flygon.level = 40;
    flygon.iq = 150;
    flygon.max_hp_stat = 96;
    flygon.hp = 96;
    flygon.offensive_stats = [56, 53];
    flygon.defensive_stats = [43, 43];
    flygon.hidden_power_base_power = 6;
    flygon.hidden_power_type = TypeId::Flying;
    flygon.types = [TypeId::Ground, TypeId::Dragon];
    flygon.abilities[0] = AbilityId::Levitate;
    for skill in [
        IqSkillId::ItemCatcher,
        IqSkillId::CourseChecker,
        IqSkillId::Nontraitor,
        IqSkillId::StatusChecker,
        IqSkillId::SelfCurer,
        IqSkillId::ItemMaster,
        IqSkillId::Escapist,
        IqSkillId::PpSaver,
    ] {
        flygon.iq_skill_flags[skill as usize] = true;
    }
    flygon.belly = DecFx16_16::from(100);
    MonsterEntity::new(flygon)
}

struct EmpiricalOutcome {
    damage: i32,
    move_type: TypeId,
    move_category: MoveCategory,
    indiv_matchups: [TypeMatchup; 2],
    offensive_stat_stage: u8,
    defensive_stat_stage: u8,
    offensive_stat: u16,
    defensive_stat: u16,
    offense_calc: i32,
    defense_calc: i32,
    attacker_level: u16,
    damage_calc_at: i32,
    damage_calc_flv: i32,
    damage_calc: i32,
    damage_calc_base: i32,
    random_mult_pct: i32,
    static_mult: f64,
    stab: bool,
}

fn check_empirical(dungeon: &DungeonState, damage: i32, expected: &EmpiricalOutcome) {
    let diag = &dungeon.damage_calc;
    assert_eq!(damage, expected.damage);
    assert_eq!(diag.move_type, expected.move_type);
    assert_eq!(diag.move_category, expected.move_category);
    assert_eq!(diag.move_indiv_type_matchups, expected.indiv_matchups);
    assert_eq!(diag.offensive_stat_stage, expected.offensive_stat_stage);
    assert_eq!(diag.defensive_stat_stage, expected.defensive_stat_stage);
    assert_eq!(diag.offensive_stat, expected.offensive_stat);
    assert_eq!(diag.defensive_stat, expected.defensive_stat);
    assert_eq!(diag.flash_fire_boost, 0);
    assert_eq!(diag.offense_calc, expected.offense_calc);
    assert_eq!(diag.defense_calc, expected.defense_calc);
    assert_eq!(diag.attacker_level, expected.attacker_level);
    assert_eq!(diag.damage_calc_at, expected.damage_calc_at);
    assert_eq!(diag.damage_calc_def, expected.defense_calc);
    assert_eq!(diag.damage_calc_flv, expected.damage_calc_flv);
    assert_eq!(diag.damage_calc, expected.damage_calc);
    assert_eq!(diag.damage_calc_base, expected.damage_calc_base);
    assert_eq!(diag.damage_calc_random_mult_pct, expected.random_mult_pct);
    assert_eq!(diag.static_damage_mult.val(), expected.static_mult);
    assert_eq!(diag.stab_boost_activated, expected.stab);
}

#[test]
fn charizard_flamethrower_plus_5_vs_flygon() {
    let mut dungeon = dungeon_with_dial(12552.0 / 16384.0);
    let mut attacker = empirical_charizard();
    let mut defender = empirical_flygon();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse {
            id: MoveId::Flamethrower,
            ginseng: 5,
            pp: 10,
            ..MoveUse::default()
        },
    );

    check_empirical(
        &dungeon,
        damage,
        &EmpiricalOutcome {
            damage: 186,
            move_type: TypeId::Fire,
            move_category: MoveCategory::Special,
            indiv_matchups: [TypeMatchup::Neutral, TypeMatchup::NotVeryEffective],
            offensive_stat_stage: 11,
            defensive_stat_stage: 10,
            offensive_stat: 167,
            defensive_stat: 43,
            offense_calc: 200,
            defense_calc: 43,
            attacker_level: 66,
            damage_calc_at: 228,
            damage_calc_flv: 86,
            damage_calc: 174,
            damage_calc_base: 164,
            random_mult_pct: 107,
            static_mult: 1.0,
            stab: true,
        },
    );
    assert_eq!(dungeon.damage_calc.iq_skill_offense_modifier, 1);
    assert_eq!(dungeon.damage_calc.iq_skill_defense_modifier, 0);
    assert_eq!(dungeon.damage_calc.item_atk_modifier, 0);
    assert_eq!(dungeon.damage_calc.item_sp_atk_modifier, 0);
    assert_eq!(dungeon.damage_calc.ability_offense_modifier, 0);
}

#[test]
fn charizard_air_slash_vs_flygon() {
    let mut dungeon = dungeon_with_dial(12552.0 / 16384.0);
    let mut attacker = empirical_charizard();
    let mut defender = empirical_flygon();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse {
            id: MoveId::AirSlash,
            pp: 11,
            ..MoveUse::default()
        },
    );

    check_empirical(
        &dungeon,
        damage,
        &EmpiricalOutcome {
            damage: 253,
            move_type: TypeId::Flying,
            move_category: MoveCategory::Special,
            indiv_matchups: [TypeMatchup::Neutral, TypeMatchup::Neutral],
            offensive_stat_stage: 11,
            defensive_stat_stage: 10,
            offensive_stat: 167,
            defensive_stat: 43,
            offense_calc: 200,
            defense_calc: 43,
            attacker_level: 66,
            damage_calc_at: 218,
            damage_calc_flv: 86,
            damage_calc: 238,
            damage_calc_base: 158,
            random_mult_pct: 107,
            static_mult: 1.0,
            stab: true,
        },
    );
}

#[test]
fn charizard_wide_slash_vs_flygon() {
    let mut dungeon = dungeon_with_dial(12552.0 / 16384.0);
    let mut attacker = empirical_charizard();
    let mut defender = empirical_flygon();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse {
            id: MoveId::WideSlash,
            pp: 10,
            ..MoveUse::default()
        },
    );

    check_empirical(
        &dungeon,
        damage,
        &EmpiricalOutcome {
            damage: 167,
            move_type: TypeId::None,
            move_category: MoveCategory::Physical,
            indiv_matchups: [TypeMatchup::Neutral, TypeMatchup::Neutral],
            offensive_stat_stage: 11,
            defensive_stat_stage: 10,
            offensive_stat: 160,
            defensive_stat: 43,
            offense_calc: 191,
            defense_calc: 43,
            attacker_level: 66,
            damage_calc_at: 215,
            damage_calc_flv: 85,
            damage_calc: 156,
            damage_calc_base: 156,
            random_mult_pct: 107,
            static_mult: 1.0,
            stab: false,
        },
    );
}

#[test]
fn charizard_heat_wave_vs_flygon() {
    let mut dungeon = dungeon_with_dial(12552.0 / 16384.0);
    let mut attacker = empirical_charizard();
    let mut defender = empirical_flygon();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse {
            id: MoveId::HeatWave,
            pp: 8,
            ..MoveUse::default()
        },
    );

    check_empirical(
        &dungeon,
        damage,
        &EmpiricalOutcome {
            damage: 175,
            move_type: TypeId::Fire,
            move_category: MoveCategory::Special,
            indiv_matchups: [TypeMatchup::Neutral, TypeMatchup::NotVeryEffective],
            offensive_stat_stage: 11,
            defensive_stat_stage: 10,
            offensive_stat: 167,
            defensive_stat: 43,
            offense_calc: 200,
            defense_calc: 43,
            attacker_level: 66,
            damage_calc_at: 212,
            damage_calc_flv: 86,
            damage_calc: 164,
            damage_calc_base: 155,
            random_mult_pct: 107,
            static_mult: 1.0,
            stab: true,
        },
    );
}

#[test]
fn charizard_regular_attack_vs_flygon() {
    let mut dungeon = dungeon_with_dial(7691.0 / 16384.0);
    let mut attacker = empirical_charizard();
    let mut defender = empirical_flygon();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse::new(MoveId::RegularAttack),
    );

    check_empirical(
        &dungeon,
        damage,
        &EmpiricalOutcome {
            damage: 71,
            move_type: TypeId::None,
            move_category: MoveCategory::Physical,
            indiv_matchups: [TypeMatchup::Neutral, TypeMatchup::Neutral],
            offensive_stat_stage: 11,
            defensive_stat_stage: 10,
            offensive_stat: 160,
            defensive_stat: 43,
            offense_calc: 191,
            defense_calc: 43,
            attacker_level: 66,
            damage_calc_at: 192,
            damage_calc_flv: 85,
            damage_calc: 71,
            damage_calc_base: 143,
            random_mult_pct: 99,
            static_mult: 0.5,
            stab: false,
        },
    );
}

#[test]
fn charizard_silver_spike_vs_flygon() {
    let mut dungeon = dungeon_with_dial(12552.0 / 16384.0);
    let mut attacker = empirical_charizard();
    let mut defender = empirical_flygon();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc_projectile(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        6,
    );

    // Power Pitcher stretches the halved projectile damage back out
    check_empirical(
        &dungeon,
        damage,
        &EmpiricalOutcome {
            damage: 117,
            move_type: TypeId::None,
            move_category: MoveCategory::Physical,
            indiv_matchups: [TypeMatchup::Neutral, TypeMatchup::Neutral],
            offensive_stat_stage: 11,
            defensive_stat_stage: 10,
            offensive_stat: 160,
            defensive_stat: 43,
            offense_calc: 191,
            defense_calc: 43,
            attacker_level: 66,
            damage_calc_at: 198,
            damage_calc_flv: 85,
            damage_calc: 146,
            damage_calc_base: 146,
            random_mult_pct: 107,
            static_mult: 1.0,
            stab: false,
        },
    );
}

#[test]
fn flygon_sand_tomb_vs_charizard() {
    let mut dungeon = dungeon_with_dial(0.86);
    let mut attacker = empirical_flygon();
    let mut defender = empirical_charizard();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse {
            id: MoveId::SandTomb,
            pp: 17,
            ..MoveUse::default()
        },
    );

    check_empirical(
        &dungeon,
        damage,
        &EmpiricalOutcome {
            damage: 5,
            move_type: TypeId::Ground,
            move_category: MoveCategory::Physical,
            indiv_matchups: [TypeMatchup::SuperEffective, TypeMatchup::Immune],
            offensive_stat_stage: 10,
            defensive_stat_stage: 9,
            offensive_stat: 56,
            defensive_stat: 158,
            offense_calc: 56,
            defense_calc: 110,
            attacker_level: 40,
            damage_calc_at: 60,
            damage_calc_flv: 33,
            damage_calc: 5,
            damage_calc_base: 5,
            random_mult_pct: 109,
            static_mult: 1.0,
            stab: true,
        },
    );
    assert_eq!(dungeon.damage_calc.iq_skill_offense_modifier, 0);
    assert_eq!(dungeon.damage_calc.iq_skill_defense_modifier, -1);
}

#[test]
fn flygon_regular_attack_vs_charizard() {
    let mut dungeon = dungeon_with_dial(0.42);
    let mut attacker = empirical_flygon();
    let mut defender = empirical_charizard();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        &MoveUse::new(MoveId::RegularAttack),
    );

    check_empirical(
        &dungeon,
        damage,
        &EmpiricalOutcome {
            damage: 2,
            move_type: TypeId::None,
            move_category: MoveCategory::Physical,
            indiv_matchups: [TypeMatchup::Neutral, TypeMatchup::Neutral],
            offensive_stat_stage: 10,
            defensive_stat_stage: 9,
            offensive_stat: 56,
            defensive_stat: 158,
            offense_calc: 56,
            defense_calc: 110,
            attacker_level: 40,
            damage_calc_at: 57,
            damage_calc_flv: 33,
            damage_calc: 2,
            damage_calc_base: 3,
            random_mult_pct: 98,
            static_mult: 0.5,
            stab: false,
        },
    );
}

#[test]
fn flygon_silver_spike_vs_charizard() {
    let mut dungeon = dungeon_with_dial(13640.0 / 16384.0);
    let mut attacker = empirical_flygon();
    let mut defender = empirical_charizard();
    let mut details = DamageData::default();

    let damage = simulate_damage_calc_projectile(
        &mut details,
        &mut dungeon,
        &mut attacker,
        &mut defender,
        6,
    );

    check_empirical(
        &dungeon,
        damage,
        &EmpiricalOutcome {
            damage: 3,
            move_type: TypeId::None,
            move_category: MoveCategory::Physical,
            indiv_matchups: [TypeMatchup::Neutral, TypeMatchup::Neutral],
            offensive_stat_stage: 10,
            defensive_stat_stage: 9,
            offensive_stat: 56,
            defensive_stat: 158,
            offense_calc: 56,
            defense_calc: 110,
            attacker_level: 40,
            damage_calc_at: 62,
            damage_calc_flv: 33,
            damage_calc: 5,
            damage_calc_base: 5,
            random_mult_pct: 108,
            static_mult: 1.0,
            stab: false,
        },
    );
    // None of the situational boosts fired in this matchup
    let diag = &dungeon.damage_calc;
    assert!(!diag.scope_lens_or_sharpshooter_activated);
    assert!(!diag.patsy_band_activated);
    assert!(!diag.half_physical_damage_activated);
    assert!(!diag.half_special_damage_activated);
    assert!(!diag.focus_energy_activated);
    assert!(!diag.type_advantage_master_activated);
    assert!(!diag.cloudy_drop_activated);
    assert!(!diag.rain_multiplier_activated);
    assert!(!diag.sunny_multiplier_activated);
    assert!(!diag.fire_move_ability_drop_activated);
    assert!(!diag.flash_fire_activated);
    assert!(!diag.levitate_activated);
    assert!(!diag.torrent_boost_activated);
    assert!(!diag.overgrow_boost_activated);
    assert!(!diag.swarm_boost_activated);
    assert!(!diag.fire_move_ability_boost_activated);
    assert!(!diag.scrappy_activated);
    assert!(!diag.super_luck_activated);
    assert!(!diag.sniper_activated);
    assert!(!diag.electric_move_dampened);
    assert!(!diag.water_sport_drop_activated);
    assert!(!diag.charge_boost_activated);
    assert!(!diag.ghost_immunity_activated);
    assert!(!diag.skull_bash_defense_boost_activated);
}
