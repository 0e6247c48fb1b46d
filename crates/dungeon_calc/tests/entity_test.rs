//! Entity predicate tests, driven by the same Bulbasaur/Charmander pair the
//! reference fixtures use.

use dungeon_calc::damage::{flash_fire_should_activate, get_type_matchup};
use dungeon_calc::entity::StatusFlags;
use dungeon_calc::moves::MoveUse;
use dungeon_calc::{
    AbilityId, DungeonState, ExclusiveItemEffectId, Gender, IqSkillId, ItemId, MonsterEntity,
    MoveId, SpeciesId, TypeId, TypeMatchup, Weather,
};

fn bulbasaur() -> MonsterEntity {
    let mut entity = MonsterEntity::default();
    entity.monster.apparent_id = SpeciesId::Bulbasaur;
    entity.monster.is_not_team_member = false;
    entity.monster.is_team_leader = true;
    entity.monster.types = [TypeId::Grass, TypeId::Poison];
    entity.monster.abilities[0] = AbilityId::Overgrow;
    entity
}

fn charmander() -> MonsterEntity {
    let mut entity = MonsterEntity::default();
    entity.monster.apparent_id = SpeciesId::Charmander;
    entity.monster.is_not_team_member = true;
    entity.monster.is_team_leader = false;
    entity.monster.types = [TypeId::Fire, TypeId::None];
    entity.monster.abilities[1] = AbilityId::Blaze;
    entity
}

#[test]
fn iq_skill_enabled_respects_iq_disabled_dungeons() {
    let mut bulbasaur = bulbasaur();
    let mut charmander = charmander();
    let mut dungeon = DungeonState::default();

    assert!(!bulbasaur.iq_skill_enabled(IqSkillId::AbsoluteMover, &dungeon));
    assert!(!charmander.iq_skill_enabled(IqSkillId::AbsoluteMover, &dungeon));

    bulbasaur.monster.iq_skill_flags[IqSkillId::AbsoluteMover as usize] = true;
    charmander.monster.iq_skill_flags[IqSkillId::AbsoluteMover as usize] = true;

    assert!(bulbasaur.iq_skill_enabled(IqSkillId::AbsoluteMover, &dungeon));
    assert!(charmander.iq_skill_enabled(IqSkillId::AbsoluteMover, &dungeon));

    // Only team members lose their skills
    dungeon.iq_disabled = true;
    assert!(!bulbasaur.iq_skill_enabled(IqSkillId::AbsoluteMover, &dungeon));
    assert!(charmander.iq_skill_enabled(IqSkillId::AbsoluteMover, &dungeon));
}

#[test]
fn scrappy_activation() {
    let mut bulbasaur = bulbasaur();
    let mut charmander = charmander();
    let mut dungeon = DungeonState::default();

    assert!(!bulbasaur.scrappy_should_activate(&charmander, TypeId::Normal, &mut dungeon));
    assert!(!dungeon.damage_calc.scrappy_activated);

    bulbasaur.monster.abilities[0] = AbilityId::Scrappy;
    charmander.monster.types[0] = TypeId::Ghost;
    assert!(bulbasaur.scrappy_should_activate(&charmander, TypeId::Normal, &mut dungeon));
    assert!(dungeon.damage_calc.scrappy_activated);

    // Gastro acid shuts the ability off
    bulbasaur.monster.statuses.flags |= StatusFlags::GASTRO_ACID;
    assert!(!bulbasaur.scrappy_should_activate(&charmander, TypeId::Normal, &mut dungeon));
}

#[test]
fn ghost_immunity() {
    let mut bulbasaur = bulbasaur();
    let mut charmander = charmander();

    assert!(!charmander.ghost_immunity_active(&bulbasaur, 0));
    charmander.monster.types[0] = TypeId::Ghost;
    assert!(charmander.ghost_immunity_active(&bulbasaur, 0));
    charmander.monster.statuses.flags |= StatusFlags::EXPOSED;
    assert!(!charmander.ghost_immunity_active(&bulbasaur, 0));
    charmander.monster.statuses.flags -= StatusFlags::EXPOSED;
    bulbasaur.monster.exclusive_item_effect_flags[ExclusiveItemEffectId::Scrappy as usize] = true;
    assert!(!charmander.ghost_immunity_active(&bulbasaur, 0));
}

#[test]
fn ability_checks_and_mold_breaker() {
    let mut bulbasaur = bulbasaur();
    let mut charmander = charmander();

    assert!(!bulbasaur.ability_active(AbilityId::Unknown));
    assert!(!bulbasaur.defender_ability_active(AbilityId::Unknown, &charmander, true));

    bulbasaur.monster.abilities = [AbilityId::Overgrow, AbilityId::Chlorophyll];
    assert!(bulbasaur.ability_active(AbilityId::Overgrow));
    assert!(bulbasaur.ability_active(AbilityId::Chlorophyll));
    assert!(bulbasaur.defender_ability_active(AbilityId::Overgrow, &charmander, true));

    bulbasaur.monster.statuses.flags |= StatusFlags::GASTRO_ACID;
    assert!(!bulbasaur.ability_active(AbilityId::Overgrow));
    assert!(!bulbasaur.defender_ability_active(AbilityId::Chlorophyll, &charmander, true));
    bulbasaur.monster.statuses.flags -= StatusFlags::GASTRO_ACID;

    // Mold Breaker suppresses the defender's ability, but only when the
    // attacker's abilities are in play
    charmander.monster.abilities[0] = AbilityId::MoldBreaker;
    assert!(!bulbasaur.defender_ability_active(AbilityId::Overgrow, &charmander, true));
    assert!(bulbasaur.defender_ability_active(AbilityId::Overgrow, &charmander, false));
    // A monster never suppresses its own ability
    assert!(charmander.defender_ability_active(AbilityId::MoldBreaker, &charmander, true));
}

#[test]
fn exclusive_item_effects_are_team_only() {
    let mut bulbasaur = bulbasaur();
    let mut charmander = charmander();

    bulbasaur.monster.exclusive_item_effect_flags
        [ExclusiveItemEffectId::AbsorbFireDamage as usize] = true;
    charmander.monster.exclusive_item_effect_flags
        [ExclusiveItemEffectId::AbsorbFireDamage as usize] = true;
    assert!(bulbasaur.exclusive_item_effect_active(ExclusiveItemEffectId::AbsorbFireDamage));
    assert!(!charmander.exclusive_item_effect_active(ExclusiveItemEffectId::AbsorbFireDamage));
}

#[test]
fn gravity_suppresses_hovering() {
    let mut bulbasaur = bulbasaur();
    let mut dungeon = DungeonState::default();

    assert!(!bulbasaur.levitate_active(&dungeon));
    bulbasaur.monster.abilities[0] = AbilityId::Levitate;
    assert!(bulbasaur.levitate_active(&dungeon));
    dungeon.gravity = true;
    assert!(!bulbasaur.levitate_active(&dungeon));

    dungeon.gravity = false;
    assert!(!bulbasaur.has_conditional_ground_immunity(&dungeon));
    bulbasaur.monster.statuses.flags |= StatusFlags::MAGNET_RISE;
    assert!(bulbasaur.has_conditional_ground_immunity(&dungeon));
    dungeon.gravity = true;
    assert!(!bulbasaur.has_conditional_ground_immunity(&dungeon));
}

#[test]
fn is_type_ignores_none() {
    let bulbasaur = bulbasaur();
    let charmander = charmander();
    assert!(bulbasaur.is_type(TypeId::Grass));
    assert!(bulbasaur.is_type(TypeId::Poison));
    assert!(!charmander.is_type(TypeId::None));
}

#[test]
fn weather_band_hides_weather_unless_sticky() {
    let mut bulbasaur = bulbasaur();
    let mut dungeon = DungeonState::default();

    assert_eq!(bulbasaur.perceived_weather(&dungeon), Weather::Clear);
    dungeon.weather = Weather::Sunny;
    assert_eq!(bulbasaur.perceived_weather(&dungeon), Weather::Sunny);

    bulbasaur.monster.held_item.exists = true;
    bulbasaur.monster.held_item.id = ItemId::WeatherBand;
    assert_eq!(bulbasaur.perceived_weather(&dungeon), Weather::Clear);

    bulbasaur.monster.held_item.sticky = true;
    assert_eq!(bulbasaur.perceived_weather(&dungeon), Weather::Sunny);
}

#[test]
fn battlefield_wide_flags() {
    let bulbasaur = bulbasaur();
    let mut dungeon = DungeonState::default();

    assert!(!bulbasaur.nearby_ally_iq_skill_enabled(IqSkillId::Cheerleader, &dungeon));
    dungeon.other_monsters.iq_skill_flags[IqSkillId::Cheerleader as usize] = true;
    assert!(bulbasaur.nearby_ally_iq_skill_enabled(IqSkillId::Cheerleader, &dungeon));

    assert!(!bulbasaur.other_monster_ability_active(AbilityId::FlowerGift, &dungeon));
    dungeon.other_monsters.abilities[AbilityId::FlowerGift as usize] = true;
    assert!(bulbasaur.other_monster_ability_active(AbilityId::FlowerGift, &dungeon));
}

#[test]
fn exclusive_item_stat_boosts_index_by_category() {
    use dungeon_calc::MoveCategory;

    let mut bulbasaur = bulbasaur();
    assert_eq!(bulbasaur.exclusive_item_offense_boost(MoveCategory::Physical), 0);
    bulbasaur.monster.exclusive_item_offense_boosts = [1, 2];
    bulbasaur.monster.exclusive_item_defense_boosts = [3, 4];
    assert_eq!(bulbasaur.exclusive_item_offense_boost(MoveCategory::Physical), 1);
    assert_eq!(bulbasaur.exclusive_item_offense_boost(MoveCategory::Special), 2);
    assert_eq!(bulbasaur.exclusive_item_defense_boost(MoveCategory::Physical), 3);
    assert_eq!(bulbasaur.exclusive_item_defense_boost(MoveCategory::Special), 4);
}

#[test]
fn item_detection() {
    let mut bulbasaur = bulbasaur();

    assert!(!bulbasaur.has_held_item(ItemId::SilverBow));
    assert!(!bulbasaur.item_active(ItemId::SilverBow));
    assert!(!bulbasaur.aura_bow_active());

    // An id alone isn't enough without the validity flag
    bulbasaur.monster.held_item.id = ItemId::SilverBow;
    assert!(!bulbasaur.has_held_item(ItemId::SilverBow));
    assert!(!bulbasaur.aura_bow_active());

    bulbasaur.monster.held_item.exists = true;
    assert!(bulbasaur.has_held_item(ItemId::SilverBow));
    assert!(bulbasaur.item_active(ItemId::SilverBow));
    assert!(bulbasaur.aura_bow_active());

    bulbasaur.monster.held_item.sticky = true;
    assert!(!bulbasaur.has_held_item(ItemId::SilverBow));
    assert!(!bulbasaur.item_active(ItemId::SilverBow));
    assert!(!bulbasaur.aura_bow_active());

    bulbasaur.monster.held_item.sticky = false;
    bulbasaur.monster.abilities[0] = AbilityId::Klutz;
    assert!(bulbasaur.has_held_item(ItemId::SilverBow));
    assert!(!bulbasaur.item_active(ItemId::SilverBow));
    assert!(!bulbasaur.aura_bow_active());
}

#[test]
fn negative_status_detection() {
    let mut bulbasaur = bulbasaur();
    let mut charmander = charmander();

    assert!(!bulbasaur.has_negative_status(true));

    bulbasaur.monster.statuses.flags |= StatusFlags::SLEEP;
    assert!(bulbasaur.has_negative_status(true));
    bulbasaur.monster.statuses.flags -= StatusFlags::SLEEP;

    // Napping is self-inflicted, not negative
    bulbasaur.monster.statuses.flags |= StatusFlags::NAPPING;
    assert!(!bulbasaur.has_negative_status(true));
    bulbasaur.monster.statuses.flags -= StatusFlags::NAPPING;

    bulbasaur.monster.statuses.other_negative_status = true;
    assert!(bulbasaur.has_negative_status(true));
    bulbasaur.monster.statuses.other_negative_status = false;

    // Y-Ray Specs count as a negative status, except for the team leader
    bulbasaur.monster.held_item.exists = true;
    bulbasaur.monster.held_item.id = ItemId::YRaySpecs;
    charmander.monster.held_item.exists = true;
    charmander.monster.held_item.id = ItemId::YRaySpecs;
    assert!(!bulbasaur.has_negative_status(true));
    assert!(!bulbasaur.has_negative_status(false));
    assert!(charmander.has_negative_status(true));
    assert!(!charmander.has_negative_status(false));
}

#[test]
fn gender_comes_from_the_species_catalog() {
    let mut bulbasaur = bulbasaur();
    assert_eq!(bulbasaur.gender(), Gender::Male);
    bulbasaur.monster.apparent_id = SpeciesId::BulbasaurSecondary;
    assert_eq!(bulbasaur.gender(), Gender::Female);
    bulbasaur.monster.apparent_id = SpeciesId::Kangaskhan;
    assert_eq!(bulbasaur.gender(), Gender::Female);
    bulbasaur.monster.apparent_id = SpeciesId::Dialga;
    assert_eq!(bulbasaur.gender(), Gender::Genderless);
}

#[test]
fn move_type_resolution() {
    let mut bulbasaur = bulbasaur();
    let mut dungeon = DungeonState::default();

    bulbasaur.monster.hidden_power_type = TypeId::Ice;
    assert_eq!(
        bulbasaur.get_move_type(MoveId::RazorLeaf, &dungeon),
        TypeId::Grass
    );
    assert_eq!(
        bulbasaur.get_move_type(MoveId::HiddenPower, &dungeon),
        TypeId::Ice
    );

    bulbasaur.monster.held_item.exists = true;
    bulbasaur.monster.held_item.id = ItemId::BlastSeed;
    assert_eq!(
        bulbasaur.get_move_type(MoveId::NaturalGift, &dungeon),
        TypeId::Dragon
    );

    dungeon.weather = Weather::Sandstorm;
    assert_eq!(
        bulbasaur.get_move_type(MoveId::WeatherBall, &dungeon),
        TypeId::Rock
    );

    bulbasaur.monster.abilities[0] = AbilityId::Normalize;
    assert_eq!(
        bulbasaur.get_move_type(MoveId::RazorLeaf, &dungeon),
        TypeId::Normal
    );
}

#[test]
fn move_power_resolution() {
    let mut bulbasaur = bulbasaur();

    assert_eq!(bulbasaur.get_move_power(&MoveUse::new(MoveId::RazorLeaf)), 2);
    assert_eq!(
        bulbasaur.get_move_power(&MoveUse {
            id: MoveId::RazorLeaf,
            ginseng: 2,
            ..MoveUse::default()
        }),
        4
    );

    bulbasaur.monster.held_item.exists = true;
    bulbasaur.monster.held_item.id = ItemId::SpaceGlobe;
    assert_eq!(
        bulbasaur.get_move_power(&MoveUse {
            id: MoveId::RazorLeaf,
            ginseng: 2,
            ..MoveUse::default()
        }),
        8
    );

    // Hidden Power reads the monster's own base power, unaffected by the
    // Space Globe
    bulbasaur.monster.hidden_power_base_power = 10;
    assert_eq!(
        bulbasaur.get_move_power(&MoveUse {
            id: MoveId::HiddenPower,
            ginseng: 1,
            ..MoveUse::default()
        }),
        11
    );
}

#[test]
fn natural_gift_item_lookup() {
    let mut bulbasaur = bulbasaur();

    assert!(bulbasaur.natural_gift_info().is_none());

    bulbasaur.monster.held_item.exists = true;
    bulbasaur.monster.held_item.id = ItemId::XRaySpecs;
    assert!(bulbasaur.natural_gift_info().is_none());

    bulbasaur.monster.held_item.id = ItemId::SitrusBerry;
    let gift = bulbasaur.natural_gift_info().unwrap();
    assert_eq!(gift.item_id, ItemId::SitrusBerry);
    assert_eq!(gift.type_id, TypeId::Psychic);
    assert_eq!(gift.base_power_boost, 3);
}

#[test]
fn weather_ball_type_follows_weather() {
    let bulbasaur = bulbasaur();
    let mut dungeon = DungeonState::default();

    assert_eq!(bulbasaur.weather_ball_type(&dungeon), TypeId::Normal);
    dungeon.weather = Weather::Snow;
    assert_eq!(bulbasaur.weather_ball_type(&dungeon), TypeId::Ice);
}

#[test]
fn two_turn_forced_misses() {
    let mut bulbasaur = bulbasaur();

    assert!(!bulbasaur.two_turn_move_forced_miss(MoveId::Tackle));
    assert!(!bulbasaur.two_turn_move_forced_miss(MoveId::Gust));
    assert!(!bulbasaur.two_turn_move_forced_miss(MoveId::Surf));
    assert!(!bulbasaur.two_turn_move_forced_miss(MoveId::Earthquake));

    bulbasaur.monster.statuses.flags |= StatusFlags::FLYING;
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Tackle));
    assert!(!bulbasaur.two_turn_move_forced_miss(MoveId::Gust));
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Surf));
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Earthquake));
    bulbasaur.monster.statuses.flags -= StatusFlags::FLYING;

    bulbasaur.monster.statuses.flags |= StatusFlags::DIVING;
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Tackle));
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Gust));
    assert!(!bulbasaur.two_turn_move_forced_miss(MoveId::Surf));
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Earthquake));
    bulbasaur.monster.statuses.flags -= StatusFlags::DIVING;

    bulbasaur.monster.statuses.flags |= StatusFlags::DIGGING;
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Tackle));
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Gust));
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Surf));
    assert!(!bulbasaur.two_turn_move_forced_miss(MoveId::Earthquake));
    bulbasaur.monster.statuses.flags -= StatusFlags::DIGGING;

    bulbasaur.monster.statuses.flags |= StatusFlags::SHADOW_FORCE;
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Tackle));
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Gust));
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Surf));
    assert!(bulbasaur.two_turn_move_forced_miss(MoveId::Earthquake));
}

#[test]
fn status_group_exclusivity_is_reported() {
    let mut bulbasaur = bulbasaur();
    assert!(bulbasaur.monster.statuses.is_valid());
    bulbasaur.monster.statuses.flags |= StatusFlags::BURN;
    assert!(bulbasaur.monster.statuses.is_valid());
    bulbasaur.monster.statuses.flags |= StatusFlags::POISON;
    assert!(!bulbasaur.monster.statuses.is_valid());
}

#[test]
fn type_matchup_special_cases() {
    let attacker = MonsterEntity::default();
    let mut defender = MonsterEntity::default();
    defender.monster.types[0] = TypeId::Steel;

    let mut dungeon = DungeonState::default();

    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 0, TypeId::Fire),
        TypeMatchup::SuperEffective
    );
    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 0, TypeId::Water),
        TypeMatchup::Neutral
    );
    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 0, TypeId::Grass),
        TypeMatchup::NotVeryEffective
    );
    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 0, TypeId::Poison),
        TypeMatchup::Immune
    );

    // Psychic vs Dark with the reveal effect
    let mut attacker = attacker;
    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 1, TypeId::Psychic),
        TypeMatchup::Neutral
    );
    defender.monster.types[1] = TypeId::Dark;
    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 1, TypeId::Psychic),
        TypeMatchup::Immune
    );
    defender.monster.statuses.flags |= StatusFlags::MIRACLE_EYE;
    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 1, TypeId::Psychic),
        TypeMatchup::Neutral
    );
    defender.monster.statuses.flags -= StatusFlags::MIRACLE_EYE;
    attacker.monster.exclusive_item_effect_flags[ExclusiveItemEffectId::MiracleEye as usize] =
        true;
    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 1, TypeId::Psychic),
        TypeMatchup::Neutral
    );

    // Ground moves: gravity suppresses Flying immunity; hovering grants it
    defender.monster.types[1] = TypeId::Flying;
    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 1, TypeId::Ground),
        TypeMatchup::Immune
    );
    dungeon.gravity = true;
    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 1, TypeId::Ground),
        TypeMatchup::Neutral
    );
    dungeon.gravity = false;
    defender.monster.types[1] = TypeId::Normal;
    defender.monster.statuses.flags |= StatusFlags::MAGNET_RISE;
    assert_eq!(
        get_type_matchup(&dungeon, &attacker, &defender, 1, TypeId::Ground),
        TypeMatchup::Immune
    );
}

#[test]
fn flash_fire_boost_increments() {
    let mut attacker = MonsterEntity::default();
    let mut defender = MonsterEntity::default();

    assert_eq!(flash_fire_should_activate(&attacker, &defender), 0);

    defender.monster.abilities[0] = AbilityId::FlashFire;
    assert_eq!(flash_fire_should_activate(&attacker, &defender), 2);
    defender.monster.stat_modifiers.flash_fire_boost = 2;
    assert_eq!(flash_fire_should_activate(&attacker, &defender), 1);

    attacker.monster.abilities[0] = AbilityId::Normalize;
    assert_eq!(flash_fire_should_activate(&attacker, &defender), 0);
}

#[test]
fn gender_equality_for_rivalry() {
    use dungeon_calc::damage::genders_equal_not_genderless;

    assert!(genders_equal_not_genderless(
        SpeciesId::Bulbasaur,
        SpeciesId::Charmander
    ));
    assert!(!genders_equal_not_genderless(
        SpeciesId::BulbasaurSecondary,
        SpeciesId::Charmander
    ));
    assert!(!genders_equal_not_genderless(
        SpeciesId::Dialga,
        SpeciesId::Charmander
    ));
    assert!(!genders_equal_not_genderless(
        SpeciesId::Dialga,
        SpeciesId::Dialga
    ));
}
