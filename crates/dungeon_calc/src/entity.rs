//! Combatant data model: statuses, stat modifiers, held items, and the
//! entity predicates the damage pipeline is built on.

use crate::abilities::AbilityId;
use crate::dungeon::{DungeonState, Weather};
use crate::exclusive::{ExclusiveItemEffectId, EXCLUSIVE_EFFECT_COUNT};
use crate::fixed::DecFx16_16;
use crate::fixed::Fx32;
use crate::iq::{IqSkillId, IQ_SKILL_COUNT};
use crate::items::{is_aura_bow, ItemId};
use crate::mechanics;
use crate::moves::{self, MoveCategory, MoveId, MoveUse};
use crate::species::{get_species_gender, Gender, SpeciesId};
use crate::types::TypeId;

// ============================================================================
// Statuses
// ============================================================================

bitflags::bitflags! {
    /// Status condition flags.
    ///
    /// In-game these are stored in groups, and only one status per group can
    /// be active; the group masks below encode that exclusivity for
    /// validation.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct StatusFlags: u32 {
        const SLEEP        = 1 << 0;
        const NIGHTMARE    = 1 << 1;
        const NAPPING      = 1 << 2;

        const BURN         = 1 << 3;
        const POISON       = 1 << 4;
        const BAD_POISON   = 1 << 5;
        const PARALYSIS    = 1 << 6;
        const IDENTIFYING  = 1 << 7;

        const CONFUSION    = 1 << 8;

        const SKULL_BASH   = 1 << 9;
        const FLYING       = 1 << 10;
        const BOUNCING     = 1 << 11;
        const DIVING       = 1 << 12;
        const DIGGING      = 1 << 13;
        const CHARGE       = 1 << 14;
        const SHADOW_FORCE = 1 << 15;

        const REFLECT      = 1 << 16;
        const LIGHT_SCREEN = 1 << 17;
        const LUCKY_CHANT  = 1 << 18;

        const GASTRO_ACID  = 1 << 19;

        const SURE_SHOT    = 1 << 20;
        const WHIFFER      = 1 << 21;
        const FOCUS_ENERGY = 1 << 22;

        const CROSS_EYED   = 1 << 23;
        const MIRACLE_EYE  = 1 << 24;
        const MAGNET_RISE  = 1 << 25;
        const EXPOSED      = 1 << 26;

        // Exclusivity groups
        const SLEEP_GROUP = Self::SLEEP.bits() | Self::NIGHTMARE.bits() | Self::NAPPING.bits();
        const BURN_GROUP = Self::BURN.bits()
            | Self::POISON.bits()
            | Self::BAD_POISON.bits()
            | Self::PARALYSIS.bits()
            | Self::IDENTIFYING.bits();
        const BIDE_GROUP = Self::SKULL_BASH.bits()
            | Self::FLYING.bits()
            | Self::BOUNCING.bits()
            | Self::DIVING.bits()
            | Self::DIGGING.bits()
            | Self::CHARGE.bits()
            | Self::SHADOW_FORCE.bits();
        const REFLECT_GROUP =
            Self::REFLECT.bits() | Self::LIGHT_SCREEN.bits() | Self::LUCKY_CHANT.bits();
        const SURE_SHOT_GROUP =
            Self::SURE_SHOT.bits() | Self::WHIFFER.bits() | Self::FOCUS_ENERGY.bits();
    }
}

/// Status identifiers, for name mapping and configuration input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StatusId {
    None = 0,
    Sleep,
    Nightmare,
    Napping,
    Burn,
    Poisoned,
    BadlyPoisoned,
    Paralysis,
    Identifying,
    Confused,
    SkullBash,
    Flying,
    Bouncing,
    Diving,
    Digging,
    ShadowForce,
    Charging,
    Reflect,
    LightScreen,
    LuckyChant,
    GastroAcid,
    SureShot,
    Whiffer,
    FocusEnergy,
    CrossEyed,
    MiracleEye,
    MagnetRise,
    Exposed,
}

/// A combatant's status conditions.
#[derive(Clone, Debug)]
pub struct Statuses {
    pub flags: StatusFlags,
    /// 1 means normal. 0 means half speed. 2, 3, and 4 mean 2x, 3x, and 4x
    /// speed.
    pub speed_stage: i32,
    pub stockpile_stage: u8,
    /// Catch-all for the many statuses that trigger Guts and Marvel Scale
    /// but don't otherwise matter for the damage calculation.
    pub other_negative_status: bool,
}

impl Default for Statuses {
    fn default() -> Statuses {
        Statuses {
            flags: StatusFlags::empty(),
            speed_stage: 1,
            stockpile_stage: 0,
            other_negative_status: false,
        }
    }
}

impl Statuses {
    #[inline]
    pub fn has(&self, flags: StatusFlags) -> bool {
        self.flags.intersects(flags)
    }

    /// Checks the per-group exclusivity and stage bounds. Violations are
    /// reported, never auto-corrected; the engine proceeds best-effort.
    pub fn is_valid(&self) -> bool {
        for group in [
            StatusFlags::SLEEP_GROUP,
            StatusFlags::BURN_GROUP,
            StatusFlags::BIDE_GROUP,
            StatusFlags::REFLECT_GROUP,
            StatusFlags::SURE_SHOT_GROUP,
        ] {
            if (self.flags & group).bits().count_ones() > 1 {
                return false;
            }
        }
        if self.speed_stage < 0 || self.speed_stage > 4 {
            return false;
        }
        if self.stockpile_stage > 3 {
            return false;
        }
        true
    }
}

impl Default for StatusId {
    fn default() -> StatusId {
        StatusId::None
    }
}

// ============================================================================
// Stat modifiers & items
// ============================================================================

/// Stage- and multiplier-based stat modifiers.
#[derive(Clone, Debug)]
pub struct StatModifiers {
    /// Stages go from 0-20 inclusive, with normal being 10. {atk, sp_atk}
    pub offensive_stages: [i16; 2],
    /// {def, sp_def}
    pub defensive_stages: [i16; 2],
    /// {accuracy, evasion}
    pub hit_chance_stages: [i16; 2],
    /// Can be 0, 1, or 2.
    pub flash_fire_boost: i16,
    /// Flat multiplier overrides. Some moves work through these instead of
    /// the stages ({atk, sp_atk}; from Charm and company).
    pub offensive_multipliers: [Fx32; 2],
    /// {def, sp_def}; from Screech and company.
    pub defensive_multipliers: [Fx32; 2],
}

impl Default for StatModifiers {
    fn default() -> StatModifiers {
        StatModifiers {
            offensive_stages: [10, 10],
            defensive_stages: [10, 10],
            hit_chance_stages: [10, 10],
            flash_fire_boost: 0,
            offensive_multipliers: [Fx32::from(1), Fx32::from(1)],
            defensive_multipliers: [Fx32::from(1), Fx32::from(1)],
        }
    }
}

/// A held item slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct Item {
    /// Validity flag.
    pub exists: bool,
    pub sticky: bool,
    pub id: ItemId,
}

// ============================================================================
// Monster
// ============================================================================

/// A combatant.
#[derive(Clone)]
pub struct Monster {
    pub apparent_id: SpeciesId,
    /// True for enemies and allied NPCs that aren't on the team.
    pub is_not_team_member: bool,
    pub is_team_leader: bool,
    pub level: u8,
    /// Current HP.
    pub hp: i16,
    /// Add to `max_hp_boost` for the actual max HP.
    pub max_hp_stat: i16,
    /// From HP-boosting consumables.
    pub max_hp_boost: i16,
    /// {atk, sp_atk}
    pub offensive_stats: [u8; 2],
    /// {def, sp_def}
    pub defensive_stats: [u8; 2],
    pub iq: i16,
    pub stat_modifiers: StatModifiers,
    pub types: [TypeId; 2],
    pub abilities: [AbilityId; 2],
    pub hidden_power_type: TypeId,
    pub hidden_power_base_power: i16,
    pub held_item: Item,
    pub belly: DecFx16_16,
    pub statuses: Statuses,
    pub iq_skill_flags: [bool; IQ_SKILL_COUNT],
    pub exclusive_item_effect_flags: [bool; EXCLUSIVE_EFFECT_COUNT],
    /// Stat boosts from exclusive items: {atk, sp_atk}.
    pub exclusive_item_offense_boosts: [u8; 2],
    /// {def, sp_def}
    pub exclusive_item_defense_boosts: [u8; 2],
    /// Attack-boosting effects like Me First.
    pub boosted_attacks: bool,
    /// Set after the monster attacks (true if the attack missed). If true
    /// when the monster attacks, Practice Swinger will activate.
    pub practice_swinger_flag: bool,
    /// Set when the monster receives a critical hit; cleared after it
    /// attacks. If true when the monster attacks, Anger Point will activate.
    pub anger_point_flag: bool,
    /// Stand-in for Last Resort's scan of the monster's move list.
    pub n_moves_out_of_pp: u8,
}

impl Default for Monster {
    fn default() -> Monster {
        Monster {
            apparent_id: SpeciesId::None,
            is_not_team_member: false,
            is_team_leader: false,
            level: 0,
            hp: 0,
            max_hp_stat: 0,
            max_hp_boost: 0,
            offensive_stats: [0, 0],
            defensive_stats: [0, 0],
            iq: 0,
            stat_modifiers: StatModifiers::default(),
            types: [TypeId::None, TypeId::None],
            abilities: [AbilityId::Unknown, AbilityId::Unknown],
            hidden_power_type: TypeId::None,
            hidden_power_base_power: 0,
            held_item: Item::default(),
            belly: DecFx16_16::default(),
            statuses: Statuses::default(),
            iq_skill_flags: [false; IQ_SKILL_COUNT],
            exclusive_item_effect_flags: [false; EXCLUSIVE_EFFECT_COUNT],
            exclusive_item_offense_boosts: [0, 0],
            exclusive_item_defense_boosts: [0, 0],
            boosted_attacks: false,
            practice_swinger_flag: false,
            anger_point_flag: false,
            n_moves_out_of_pp: 0,
        }
    }
}

/// A combatant entity, carrying the predicates the pipeline consults.
#[derive(Clone, Default)]
pub struct MonsterEntity {
    pub monster: Monster,
}

impl MonsterEntity {
    pub fn new(monster: Monster) -> MonsterEntity {
        MonsterEntity { monster }
    }

    /// Whether an IQ skill is usable. Team members lose their skills in
    /// IQ-disabled dungeons; wild monsters keep theirs.
    pub fn iq_skill_enabled(&self, iq: IqSkillId, dungeon: &DungeonState) -> bool {
        if !self.monster.is_not_team_member && dungeon.iq_disabled {
            return false;
        }
        self.monster.iq_skill_flags[iq as usize]
    }

    /// Whether Scrappy lets this attacker hit through a Ghost's immunity.
    /// Only the defender's first type slot is consulted.
    pub fn scrappy_should_activate(
        &self,
        defender: &MonsterEntity,
        attack_type: TypeId,
        dungeon: &mut DungeonState,
    ) -> bool {
        if self.ability_active(AbilityId::Scrappy)
            && defender.monster.types[0] == TypeId::Ghost
            && crate::types::type_ineffective_against_ghost(attack_type)
        {
            dungeon.damage_calc.scrappy_activated = true;
            return true;
        }
        false
    }

    /// Whether this defender's Ghost immunity applies for a type slot.
    pub fn ghost_immunity_active(&self, attacker: &MonsterEntity, type_idx: usize) -> bool {
        self.monster.types[type_idx] == TypeId::Ghost
            && !self.monster.statuses.has(StatusFlags::EXPOSED)
            && !attacker.exclusive_item_effect_active(ExclusiveItemEffectId::Scrappy)
    }

    pub fn no_gastro_acid_status(&self) -> bool {
        !self.monster.statuses.has(StatusFlags::GASTRO_ACID)
    }

    /// Whether one of the monster's own abilities is active.
    pub fn ability_active(&self, ability: AbilityId) -> bool {
        if ability == AbilityId::Unknown {
            return false;
        }
        (self.monster.abilities[0] == ability || self.monster.abilities[1] == ability)
            && self.no_gastro_acid_status()
    }

    /// Ability check for a defender: the attacker's Mold Breaker suppresses
    /// it when the attacker's own abilities are in play.
    pub fn defender_ability_active(
        &self,
        ability: AbilityId,
        attacker: &MonsterEntity,
        attacker_ability_active: bool,
    ) -> bool {
        if !std::ptr::eq(self, attacker)
            && attacker_ability_active
            && attacker.ability_active(AbilityId::MoldBreaker)
        {
            return false;
        }
        self.ability_active(ability)
    }

    /// Exclusive item effects only work for team members.
    pub fn exclusive_item_effect_active(&self, effect: ExclusiveItemEffectId) -> bool {
        !self.monster.is_not_team_member && self.monster.exclusive_item_effect_flags[effect as usize]
    }

    pub fn levitate_active(&self, dungeon: &DungeonState) -> bool {
        !dungeon.gravity && self.ability_active(AbilityId::Levitate)
    }

    /// Magnet-Rise-style hovering, suppressed by gravity.
    pub fn has_conditional_ground_immunity(&self, dungeon: &DungeonState) -> bool {
        !dungeon.gravity && self.monster.statuses.has(StatusFlags::MAGNET_RISE)
    }

    pub fn is_type(&self, t: TypeId) -> bool {
        t != TypeId::None && (self.monster.types[0] == t || self.monster.types[1] == t)
    }

    /// The weather this monster experiences (a Weather Band hides it).
    pub fn perceived_weather(&self, dungeon: &DungeonState) -> Weather {
        if self.item_active(ItemId::WeatherBand) {
            return Weather::Clear;
        }
        dungeon.weather
    }

    /// Whether an adjacent ally has an IQ skill enabled. Approximated by a
    /// battlefield-wide flag instead of scanning the surrounding tiles.
    pub fn nearby_ally_iq_skill_enabled(&self, iq: IqSkillId, dungeon: &DungeonState) -> bool {
        dungeon.other_monsters.iq_skill_enabled(iq)
    }

    /// Whether some other monster's ability affects this one. Approximated
    /// by a battlefield-wide flag.
    pub fn other_monster_ability_active(
        &self,
        ability: AbilityId,
        dungeon: &DungeonState,
    ) -> bool {
        ability != AbilityId::Unknown
            && !self.ability_active(AbilityId::MoldBreaker)
            && dungeon.other_monsters.ability_active(ability)
    }

    pub fn exclusive_item_offense_boost(&self, category: MoveCategory) -> i32 {
        self.monster.exclusive_item_offense_boosts[category as usize] as i32
    }

    pub fn exclusive_item_defense_boost(&self, category: MoveCategory) -> i32 {
        self.monster.exclusive_item_defense_boosts[category as usize] as i32
    }

    pub fn has_held_item(&self, item: ItemId) -> bool {
        self.monster.held_item.exists
            && !self.monster.held_item.sticky
            && self.monster.held_item.id == item
    }

    /// Held item check with Klutz suppression.
    pub fn item_active(&self, item: ItemId) -> bool {
        !self.ability_active(AbilityId::Klutz) && self.has_held_item(item)
    }

    pub fn aura_bow_active(&self) -> bool {
        !self.ability_active(AbilityId::Klutz)
            && self.monster.held_item.exists
            && is_aura_bow(self.monster.held_item.id)
            && self.has_held_item(self.monster.held_item.id)
    }

    /// Whether the monster has a "negative" status for Guts and Marvel
    /// Scale. Condensed from the game's long status walk; ambiguous
    /// statuses are covered by the catch-all flag.
    pub fn has_negative_status(&self, check_held_item: bool) -> bool {
        let statuses = &self.monster.statuses;
        let speed_down = statuses.speed_stage == 0;
        statuses.has(
            StatusFlags::SLEEP
                | StatusFlags::NIGHTMARE
                | StatusFlags::BURN
                | StatusFlags::POISON
                | StatusFlags::BAD_POISON
                | StatusFlags::PARALYSIS
                | StatusFlags::IDENTIFYING
                | StatusFlags::CONFUSION
                | StatusFlags::GASTRO_ACID
                | StatusFlags::WHIFFER
                | StatusFlags::CROSS_EYED
                | StatusFlags::MIRACLE_EYE
                | StatusFlags::EXPOSED,
        ) || (check_held_item
            && !self.monster.is_team_leader
            && self.item_active(ItemId::YRaySpecs))
            || speed_down
            || statuses.other_negative_status
    }

    pub fn gender(&self) -> Gender {
        get_species_gender(self.monster.apparent_id)
    }

    /// The type a move resolves to for this monster.
    pub fn get_move_type(&self, move_id: MoveId, dungeon: &DungeonState) -> TypeId {
        if !moves::is_regular_attack_or_projectile(move_id)
            && self.ability_active(AbilityId::Normalize)
        {
            return TypeId::Normal;
        }
        if move_id == MoveId::HiddenPower {
            return self.monster.hidden_power_type;
        }
        if move_id == MoveId::NaturalGift {
            if let Some(info) = self.natural_gift_info() {
                return info.type_id;
            }
        }
        if move_id == MoveId::WeatherBall {
            return self.weather_ball_type(dungeon);
        }
        moves::get_move_type(move_id)
    }

    /// The power of a move use for this monster: base power plus ginseng,
    /// doubled by a Space Globe. Hidden Power reads the monster's own power.
    pub fn get_move_power(&self, move_use: &MoveUse) -> i32 {
        if move_use.id == MoveId::HiddenPower {
            return move_use.ginseng as i32 + self.monster.hidden_power_base_power as i32;
        }
        let mut power = move_use.ginseng as i32
            + moves::get_move_base_power(move_use.id, move_use.alternate_power) as i32;
        if self.item_active(ItemId::SpaceGlobe) {
            power *= 2;
        }
        power
    }

    /// Natural Gift data for the held item, if it has any.
    pub fn natural_gift_info(&self) -> Option<&'static mechanics::NaturalGiftInfo> {
        if self.monster.held_item.id == ItemId::Nothing {
            return None;
        }
        mechanics::NATURAL_GIFT_ITEM_TABLE
            .iter()
            .find(|info| info.item_id == self.monster.held_item.id)
    }

    pub fn weather_ball_type(&self, dungeon: &DungeonState) -> TypeId {
        mechanics::WEATHER_BALL_TYPE_TABLE[self.perceived_weather(dungeon) as usize]
    }

    /// Whether a two-turn semi-invulnerable status forces an incoming move
    /// to miss, accounting for the per-move exceptions.
    pub fn two_turn_move_forced_miss(&self, move_id: MoveId) -> bool {
        let statuses = &self.monster.statuses;
        if statuses.has(StatusFlags::FLYING | StatusFlags::BOUNCING) {
            return move_id != MoveId::SkyUppercut
                && move_id != MoveId::Twister
                && move_id != MoveId::Gust
                && move_id != MoveId::Thunder;
        }
        if !statuses.has(StatusFlags::DIVING | StatusFlags::DIGGING | StatusFlags::SHADOW_FORCE) {
            return false;
        }
        if statuses.has(StatusFlags::DIVING)
            && (move_id == MoveId::Whirlpool || move_id == MoveId::Surf)
        {
            return false;
        }
        if statuses.has(StatusFlags::DIGGING)
            && (move_id == MoveId::Earthquake || move_id == MoveId::Magnitude)
        {
            return false;
        }
        true
    }
}
