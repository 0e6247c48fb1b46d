//! Dungeon-wide battlefield state.

use crate::abilities::{AbilityId, ABILITY_COUNT};
use crate::diag::DamageCalcDiag;
use crate::iq::{IqSkillId, IQ_SKILL_COUNT};
use crate::rng::{DungeonRng, MockDungeonRng};

/// Dungeon weather.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Weather {
    Clear = 0,
    Sunny,
    Sandstorm,
    Cloudy,
    Rain,
    Hail,
    Fog,
    Snow,
}

pub const WEATHER_COUNT: usize = 8;

impl Default for Weather {
    fn default() -> Weather {
        Weather::Clear
    }
}

/// Fixed room identifiers. Only the substitute-dummy room changes the
/// damage calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FixedRoomId {
    None = 0,
    SubstituteRoom,
}

impl Default for FixedRoomId {
    fn default() -> FixedRoomId {
        FixedRoomId::None
    }
}

/// Classification of the message shown for a damage result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DamageMessage {
    Move = 0,
    Item,
    Burn,
    Recoil,
}

impl Default for DamageMessage {
    fn default() -> DamageMessage {
        DamageMessage::Move
    }
}

/// Stand-in for effects other monsters on the floor have on the
/// calculation.
///
/// The real engine scans entity tables and nearby tiles; modeling that is
/// out of scope, so the relevant facts are flattened into battlefield-wide
/// flags. This is explicitly approximate.
#[derive(Clone)]
pub struct OtherMonsters {
    /// One flag per IQ skill: some nearby ally has it enabled.
    pub iq_skill_flags: [bool; IQ_SKILL_COUNT],
    /// One flag per ability: some other monster has it active.
    pub abilities: [bool; ABILITY_COUNT],
}

impl Default for OtherMonsters {
    fn default() -> OtherMonsters {
        OtherMonsters {
            iq_skill_flags: [false; IQ_SKILL_COUNT],
            abilities: [false; ABILITY_COUNT],
        }
    }
}

impl OtherMonsters {
    pub fn iq_skill_enabled(&self, iq: IqSkillId) -> bool {
        self.iq_skill_flags[iq as usize]
    }

    pub fn ability_active(&self, ability: AbilityId) -> bool {
        self.abilities[ability as usize]
    }
}

/// Dungeon generation info relevant to the calculation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DungeonGenerationInfo {
    pub fixed_room_id: FixedRoomId,
}

/// The battlefield: dungeon-wide conditions, the diagnostic trace, and the
/// RNG source.
///
/// A calculation mutates the diagnostic trace (and consumes RNG rolls);
/// callers that want to run several what-if calculations from one starting
/// point must clone the state per run.
#[derive(Clone)]
pub struct DungeonState {
    /// Current weather.
    pub weather: Weather,
    /// Number of turns left for the Mud Sport condition.
    pub mud_sport_turns: u8,
    /// Number of turns left for the Water Sport condition.
    pub water_sport_turns: u8,
    /// Gravity is in effect.
    pub gravity: bool,
    /// A monster on the {enemy, team} side has the ability Plus.
    pub plus_is_active: [bool; 2],
    /// A monster on the {enemy, team} side has the ability Minus.
    pub minus_is_active: [bool; 2],
    /// IQ skills won't work in this dungeon.
    pub iq_disabled: bool,
    pub gen_info: DungeonGenerationInfo,
    /// Diagnostic trace of the last calculation.
    pub damage_calc: DamageCalcDiag,
    /// The RNG source. The real dungeon RNG is global state; keeping the
    /// handle here keeps each calculation request self-contained.
    pub rng: Box<dyn DungeonRng>,
    /// Summary of other monsters' relevant abilities and IQ skills.
    pub other_monsters: OtherMonsters,
}

impl Default for DungeonState {
    fn default() -> DungeonState {
        DungeonState {
            weather: Weather::Clear,
            mud_sport_turns: 0,
            water_sport_turns: 0,
            gravity: false,
            plus_is_active: [false; 2],
            minus_is_active: [false; 2],
            iq_disabled: false,
            gen_info: DungeonGenerationInfo::default(),
            damage_calc: DamageCalcDiag::default(),
            rng: Box::new(MockDungeonRng::default()),
            other_monsters: OtherMonsters::default(),
        }
    }
}

impl DungeonState {
    /// Convenience accessor for the scripted RNG in tests and tools.
    pub fn mock_rng(&self) -> Option<&MockDungeonRng> {
        self.rng.as_any().downcast_ref::<MockDungeonRng>()
    }
}
