//! Move identifiers, the move reference catalog, and move-class predicates.
//!
//! Base powers here are the dungeon-scale values (single digits to low tens),
//! not the mainline-series powers. Each entry carries two accuracy tiers and
//! two base powers: the second power column covers the earlier game version's
//! differing balance table, selected by a per-use flag.

use crate::types::TypeId;

/// Move category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveCategory {
    Physical = 0,
    Special,
    Status,
}

impl Default for MoveCategory {
    fn default() -> MoveCategory {
        MoveCategory::Physical
    }
}

/// Move identifiers.
///
/// `RegularAttack` is the universal basic attack; `Projectile` is the
/// pseudo-move used for thrown items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum MoveId {
    Nothing = 0,
    RegularAttack,
    Projectile,

    Tackle,
    QuickAttack,
    Slash,
    Leer,
    Growl,
    Screech,
    RazorLeaf,
    RazorWind,
    WideSlash,
    AerialAce,
    AirSlash,
    Gust,
    Twister,
    Fly,
    Bounce,
    SkyAttack,
    SkyUppercut,
    Thundershock,
    Thunderbolt,
    Thunder,
    Thunderpunch,
    ChargeBeam,
    WaterGun,
    Surf,
    Whirlpool,
    Dive,
    Brine,
    Crabhammer,
    WaterSpout,
    HydroCannon,
    Flamethrower,
    HeatWave,
    BlastBurn,
    Eruption,
    FirePunch,
    Ember,
    Blizzard,
    IceBall,
    IcePunch,
    Psybeam,
    Psychic,
    DreamEater,
    Hypnosis,
    StunSpore,
    FrenzyPlant,
    GigaDrain,
    SolarBeam,
    GrassKnot,
    Earthquake,
    Magnitude,
    Dig,
    SandTomb,
    Rollout,
    RockSlide,
    LowKick,
    TripleKick,
    Reversal,
    Flail,
    Facade,
    FocusPunch,
    SmellingSalt,
    DoubleEdge,
    SkullBash,
    HiJumpKick,
    WakeUpSlap,
    LastResort,
    TrumpCard,
    SpitUp,
    GyroBall,
    Punishment,
    WringOut,
    CrushGrip,
    ShadowForce,
    ShadowBall,
    SilverWind,
    HyperVoice,
    HiddenPower,
    WeatherBall,
    NaturalGift,
    Judgment,
    BrickBreak,
    RoarOfTime,
    SpacialRend,
    Endure,
    Detect,
    Protect,
    Bide,
    Counter,
    MirrorCoat,
}

impl Default for MoveId {
    fn default() -> MoveId {
        MoveId::Nothing
    }
}

/// Whether the move is the regular attack or a thrown projectile, the two
/// "partial calculation" paths that skip several full-calculation modifiers.
#[inline]
pub fn is_regular_attack_or_projectile(move_id: MoveId) -> bool {
    move_id == MoveId::RegularAttack || move_id == MoveId::Projectile
}

/// A move as used in battle: the identifier plus per-use state.
#[derive(Clone, Debug, Default)]
pub struct MoveUse {
    pub id: MoveId,
    /// Per-use power increment from Ginseng boosts.
    pub ginseng: u8,
    /// Remaining uses; consulted by Trump Card and Last Resort.
    pub pp: u8,
    /// Prior consecutive hits, for ramping multi-hit moves.
    pub prior_successive_hits: u8,
    /// Read powers from the earlier game version's balance table.
    pub alternate_power: bool,
}

impl MoveUse {
    pub fn new(id: MoveId) -> MoveUse {
        MoveUse {
            id,
            ..MoveUse::default()
        }
    }
}

// ============================================================================
// Reference catalog
// ============================================================================

/// Intrinsic per-move reference data.
#[derive(Clone, Copy, Debug)]
pub struct MoveData {
    pub id: MoveId,
    /// Base power in the current game version.
    pub base_power: i16,
    /// Base power in the earlier game version's balance table.
    pub base_power_alternate: i16,
    pub type_id: TypeId,
    pub category: MoveCategory,
    pub pp: u8,
    pub accuracy1: u8,
    pub accuracy2: u8,
    pub strikes: u8,
    pub crit_chance: u8,
    pub unsupported: bool,
    pub special_notes: &'static str,
}

#[allow(clippy::too_many_arguments)]
const fn mv(
    id: MoveId,
    base_power: i16,
    base_power_alternate: i16,
    type_id: TypeId,
    category: MoveCategory,
    pp: u8,
    accuracy1: u8,
    accuracy2: u8,
    strikes: u8,
    crit_chance: u8,
) -> MoveData {
    MoveData {
        id,
        base_power,
        base_power_alternate,
        type_id,
        category,
        pp,
        accuracy1,
        accuracy2,
        strikes,
        crit_chance,
        unsupported: false,
        special_notes: "",
    }
}

const fn unsupported(
    id: MoveId,
    type_id: TypeId,
    category: MoveCategory,
    pp: u8,
    notes: &'static str,
) -> MoveData {
    MoveData {
        id,
        base_power: 0,
        base_power_alternate: 0,
        type_id,
        category,
        pp,
        accuracy1: 100,
        accuracy2: 100,
        strikes: 1,
        crit_chance: 0,
        unsupported: true,
        special_notes: notes,
    }
}

use MoveCategory::Physical as Phys;
use MoveCategory::Special as Spec;
use MoveCategory::Status as Stat;

#[rustfmt::skip]
static MOVES: &[MoveData] = &[
    mv(MoveId::Nothing,       0,  0, TypeId::None,     Phys, 0,  100, 100, 1, 0),
    mv(MoveId::RegularAttack, 1,  1, TypeId::None,     Phys, 0,  100, 125, 1, 0),
    mv(MoveId::Projectile,    1,  1, TypeId::None,     Phys, 0,  125, 100, 1, 0),

    mv(MoveId::Tackle,        7,  5, TypeId::Normal,   Phys, 21, 95,  88,  1, 2),
    mv(MoveId::QuickAttack,   4,  4, TypeId::Normal,   Phys, 23, 100, 88,  1, 2),
    mv(MoveId::Slash,         12, 10, TypeId::Normal,  Phys, 14, 100, 88,  1, 30),
    mv(MoveId::Leer,          0,  0, TypeId::Normal,   Stat, 27, 100, 100, 1, 0),
    mv(MoveId::Growl,         0,  0, TypeId::Normal,   Stat, 22, 100, 100, 1, 0),
    mv(MoveId::Screech,       0,  0, TypeId::Normal,   Stat, 18, 85,  100, 1, 0),
    mv(MoveId::RazorLeaf,     2,  2, TypeId::Grass,    Phys, 14, 95,  88,  1, 30),
    mv(MoveId::RazorWind,     10, 8, TypeId::Normal,   Spec, 7,  100, 88,  1, 15),
    mv(MoveId::WideSlash,     20, 16, TypeId::None,    Phys, 10, 100, 88,  1, 2),
    mv(MoveId::AerialAce,     10, 8, TypeId::Flying,   Phys, 8,  125, 88,  1, 2),
    mv(MoveId::AirSlash,      15, 12, TypeId::Flying,  Spec, 8,  95,  88,  1, 8),
    mv(MoveId::Gust,          8,  6, TypeId::Flying,   Spec, 16, 100, 88,  1, 2),
    mv(MoveId::Twister,       8,  6, TypeId::Dragon,   Spec, 14, 100, 88,  1, 2),
    mv(MoveId::Fly,           12, 10, TypeId::Flying,  Phys, 10, 100, 88,  1, 2),
    mv(MoveId::Bounce,        10, 8, TypeId::Flying,   Phys, 12, 85,  88,  1, 2),
    mv(MoveId::SkyAttack,     16, 14, TypeId::Flying,  Phys, 6,  100, 88,  1, 12),
    mv(MoveId::SkyUppercut,   12, 10, TypeId::Fighting, Phys, 10, 90, 88,  1, 2),
    mv(MoveId::Thundershock,  6,  4, TypeId::Electric, Spec, 19, 100, 88,  1, 2),
    mv(MoveId::Thunderbolt,   14, 12, TypeId::Electric, Spec, 14, 100, 88, 1, 8),
    mv(MoveId::Thunder,       18, 16, TypeId::Electric, Spec, 10, 70,  88, 1, 8),
    mv(MoveId::Thunderpunch,  10, 8, TypeId::Electric, Phys, 12, 100, 88,  1, 8),
    mv(MoveId::ChargeBeam,    6,  6, TypeId::Electric, Spec, 12, 90,  88,  1, 2),
    mv(MoveId::WaterGun,      5,  4, TypeId::Water,    Spec, 18, 100, 88,  1, 2),
    mv(MoveId::Surf,          14, 12, TypeId::Water,   Spec, 12, 100, 88,  1, 8),
    mv(MoveId::Whirlpool,     5,  4, TypeId::Water,    Spec, 16, 85,  88,  1, 2),
    mv(MoveId::Dive,          12, 10, TypeId::Water,   Phys, 10, 100, 88,  1, 2),
    mv(MoveId::Brine,         10, 8, TypeId::Water,    Spec, 12, 100, 88,  1, 2),
    mv(MoveId::Crabhammer,    14, 12, TypeId::Water,   Phys, 12, 90,  88,  1, 25),
    mv(MoveId::WaterSpout,    20, 18, TypeId::Water,   Spec, 6,  100, 88,  1, 2),
    mv(MoveId::HydroCannon,   45, 40, TypeId::Water,   Spec, 5,  125, 84,  1, 2),
    mv(MoveId::Flamethrower,  18, 16, TypeId::Fire,    Spec, 16, 95,  88,  1, 8),
    mv(MoveId::HeatWave,      10, 8, TypeId::Fire,     Spec, 8,  90,  88,  1, 8),
    mv(MoveId::BlastBurn,     32, 28, TypeId::Fire,    Spec, 5,  90,  88,  1, 2),
    mv(MoveId::Eruption,      20, 18, TypeId::Fire,    Spec, 6,  100, 88,  1, 2),
    mv(MoveId::FirePunch,     10, 8, TypeId::Fire,     Phys, 12, 100, 88,  1, 8),
    mv(MoveId::Ember,         6,  4, TypeId::Fire,     Spec, 19, 100, 88,  1, 2),
    mv(MoveId::Blizzard,      16, 14, TypeId::Ice,     Spec, 8,  70,  88,  1, 8),
    mv(MoveId::IceBall,       4,  4, TypeId::Ice,      Phys, 14, 90,  88,  1, 2),
    mv(MoveId::IcePunch,      10, 8, TypeId::Ice,      Phys, 12, 100, 88,  1, 8),
    mv(MoveId::Psybeam,       9,  8, TypeId::Psychic,  Spec, 16, 100, 88,  1, 8),
    mv(MoveId::Psychic,       16, 14, TypeId::Psychic, Spec, 10, 100, 88,  1, 8),
    mv(MoveId::DreamEater,    20, 18, TypeId::Psychic, Spec, 8,  100, 88,  1, 2),
    mv(MoveId::Hypnosis,      0,  0, TypeId::Psychic,  Stat, 16, 60,  100, 1, 0),
    mv(MoveId::StunSpore,     0,  0, TypeId::Grass,    Stat, 17, 75,  100, 1, 0),
    mv(MoveId::FrenzyPlant,   45, 40, TypeId::Grass,   Spec, 5,  90,  88,  1, 2),
    mv(MoveId::GigaDrain,     12, 10, TypeId::Grass,   Spec, 12, 100, 88,  1, 2),
    mv(MoveId::SolarBeam,     20, 18, TypeId::Grass,   Spec, 8,  100, 88,  1, 8),
    mv(MoveId::GrassKnot,     2,  2, TypeId::Grass,    Spec, 14, 100, 88,  1, 2),
    mv(MoveId::Earthquake,    18, 16, TypeId::Ground,  Phys, 10, 100, 88,  1, 8),
    mv(MoveId::Magnitude,     10, 8, TypeId::Ground,   Phys, 12, 100, 88,  1, 2),
    mv(MoveId::Dig,           12, 10, TypeId::Ground,  Phys, 10, 100, 88,  1, 2),
    mv(MoveId::SandTomb,      4,  4, TypeId::Ground,   Phys, 14, 85,  88,  1, 2),
    mv(MoveId::Rollout,       4,  4, TypeId::Rock,     Phys, 14, 90,  88,  1, 2),
    mv(MoveId::RockSlide,     12, 10, TypeId::Rock,    Phys, 12, 90,  88,  1, 8),
    mv(MoveId::LowKick,       2,  2, TypeId::Fighting, Phys, 16, 100, 88,  1, 2),
    mv(MoveId::TripleKick,    5,  4, TypeId::Fighting, Phys, 12, 90,  88,  3, 2),
    mv(MoveId::Reversal,      8,  6, TypeId::Fighting, Phys, 10, 100, 88,  1, 2),
    mv(MoveId::Flail,         8,  6, TypeId::Normal,   Phys, 12, 100, 88,  1, 2),
    mv(MoveId::Facade,        10, 8, TypeId::Normal,   Phys, 14, 100, 88,  1, 2),
    mv(MoveId::FocusPunch,    22, 20, TypeId::Fighting, Phys, 6, 100, 88,  1, 2),
    mv(MoveId::SmellingSalt,  8,  6, TypeId::Normal,   Phys, 12, 100, 88,  1, 2),
    mv(MoveId::DoubleEdge,    16, 14, TypeId::Normal,  Phys, 12, 100, 88,  1, 8),
    mv(MoveId::SkullBash,     14, 12, TypeId::Normal,  Phys, 10, 100, 88,  1, 2),
    mv(MoveId::HiJumpKick,    14, 12, TypeId::Fighting, Phys, 10, 90, 88,  1, 2),
    mv(MoveId::WakeUpSlap,    8,  6, TypeId::Fighting, Phys, 12, 100, 88,  1, 2),
    mv(MoveId::LastResort,    24, 20, TypeId::Normal,  Phys, 8,  100, 88,  1, 2),
    mv(MoveId::TrumpCard,     8,  6, TypeId::Normal,   Spec, 12, 125, 88,  1, 2),
    mv(MoveId::SpitUp,        12, 10, TypeId::Normal,  Spec, 10, 100, 88,  1, 2),
    mv(MoveId::GyroBall,      6,  6, TypeId::Steel,    Phys, 14, 100, 88,  1, 2),
    mv(MoveId::Punishment,    8,  6, TypeId::Dark,     Phys, 12, 100, 88,  1, 2),
    mv(MoveId::WringOut,      10, 8, TypeId::Normal,   Spec, 10, 100, 88,  1, 2),
    mv(MoveId::CrushGrip,     10, 8, TypeId::Normal,   Phys, 10, 100, 88,  1, 2),
    mv(MoveId::ShadowForce,   18, 16, TypeId::Ghost,   Phys, 6,  100, 88,  1, 2),
    mv(MoveId::ShadowBall,    14, 12, TypeId::Ghost,   Spec, 12, 100, 88,  1, 8),
    mv(MoveId::SilverWind,    10, 8, TypeId::Bug,      Spec, 12, 100, 88,  1, 8),
    mv(MoveId::HyperVoice,    14, 12, TypeId::Normal,  Spec, 10, 100, 88,  1, 2),
    mv(MoveId::HiddenPower,   1,  1, TypeId::Normal,   Spec, 16, 100, 88,  1, 2),
    mv(MoveId::WeatherBall,   6,  6, TypeId::Normal,   Spec, 14, 100, 88,  1, 2),
    mv(MoveId::NaturalGift,   1,  1, TypeId::Normal,   Phys, 12, 100, 88,  1, 2),
    mv(MoveId::Judgment,      20, 18, TypeId::Normal,  Spec, 8,  100, 88,  1, 8),
    mv(MoveId::BrickBreak,    10, 8, TypeId::Fighting, Phys, 12, 100, 88,  1, 8),
    mv(MoveId::RoarOfTime,    24, 22, TypeId::Dragon,  Spec, 4,  90,  88,  1, 8),
    mv(MoveId::SpacialRend,   20, 18, TypeId::Dragon,  Spec, 6,  95,  88,  1, 25),
    mv(MoveId::Endure,        0,  0, TypeId::Normal,   Stat, 12, 100, 100, 1, 0),
    mv(MoveId::Detect,        0,  0, TypeId::Fighting, Stat, 12, 100, 100, 1, 0),
    mv(MoveId::Protect,       0,  0, TypeId::Normal,   Stat, 12, 100, 100, 1, 0),

    unsupported(MoveId::Bide, TypeId::Normal, Phys, 8,
        "damage depends on battle history, which is out of scope"),
    unsupported(MoveId::Counter, TypeId::Fighting, Phys, 12,
        "damage depends on battle history, which is out of scope"),
    unsupported(MoveId::MirrorCoat, TypeId::Psychic, Spec, 12,
        "damage depends on battle history, which is out of scope"),
];

/// Look up catalog data for a move.
pub fn move_data(id: MoveId) -> Option<&'static MoveData> {
    MOVES.iter().find(|data| data.id == id)
}

/// Base power of a move, optionally from the earlier game version's table.
pub fn get_move_base_power(id: MoveId, alternate_table: bool) -> i16 {
    move_data(id).map_or(0, |data| {
        if alternate_table {
            data.base_power_alternate
        } else {
            data.base_power
        }
    })
}

/// One of the two accuracy tiers of a move.
pub fn get_move_accuracy(id: MoveId, second_tier: bool) -> u8 {
    move_data(id).map_or(100, |data| {
        if second_tier {
            data.accuracy2
        } else {
            data.accuracy1
        }
    })
}

/// Base critical-hit chance of a move.
pub fn get_move_crit_chance(id: MoveId) -> u8 {
    move_data(id).map_or(0, |data| data.crit_chance)
}

/// Maximum uses of a move.
pub fn get_move_max_pp(id: MoveId) -> u8 {
    move_data(id).map_or(0, |data| data.pp)
}

/// Category of a move.
pub fn get_move_category(id: MoveId) -> MoveCategory {
    move_data(id).map_or(MoveCategory::Physical, |data| data.category)
}

/// Intrinsic type of a move (before per-monster retyping).
pub fn get_move_type(id: MoveId) -> TypeId {
    move_data(id).map_or(TypeId::None, |data| data.type_id)
}

/// Whether the move's category is anything but physical.
#[inline]
pub fn move_not_physical(id: MoveId) -> bool {
    get_move_category(id) != MoveCategory::Physical
}

/// Recoil moves, for the Reckless boost.
pub fn is_recoil_move(id: MoveId) -> bool {
    matches!(
        id,
        MoveId::DoubleEdge | MoveId::HiJumpKick | MoveId::SkyUppercut
    )
}

/// Punch moves, for the Iron Fist boost.
pub fn is_punch_move(id: MoveId) -> bool {
    matches!(
        id,
        MoveId::Thunderpunch
            | MoveId::FirePunch
            | MoveId::IcePunch
            | MoveId::FocusPunch
            | MoveId::SkyUppercut
    )
}

/// Sound-based moves, blocked by Soundproof.
pub fn is_sound_move(id: MoveId) -> bool {
    matches!(
        id,
        MoveId::HyperVoice | MoveId::Growl | MoveId::Screech | MoveId::RoarOfTime
    )
}

// ============================================================================
// Custom move specs
// ============================================================================

/// Intrinsic info about a move as resolved for the generic entry point,
/// supporting user-defined (type, power, crit) triples.
#[derive(Clone, Debug)]
pub struct MoveSpec {
    pub id: MoveId,
    pub type_id: TypeId,
    pub power: i32,
    pub crit_chance: i32,
    pub pp: u8,
    pub unsupported: bool,
    pub special_notes: String,
}

impl MoveSpec {
    /// Describe a user-defined move.
    pub fn custom(type_id: TypeId, power: i32, crit_chance: i32) -> MoveSpec {
        MoveSpec {
            id: MoveId::Nothing,
            type_id,
            power,
            crit_chance,
            pp: 0,
            unsupported: false,
            special_notes: "User-defined move".to_string(),
        }
    }

    /// Resolve a catalog move.
    pub fn from_id(id: MoveId) -> MoveSpec {
        match move_data(id) {
            Some(data) => MoveSpec {
                id,
                type_id: data.type_id,
                power: data.base_power as i32,
                crit_chance: data.crit_chance as i32,
                pp: data.pp,
                unsupported: data.unsupported,
                special_notes: data.special_notes.to_string(),
            },
            None => MoveSpec {
                id,
                type_id: TypeId::None,
                power: 0,
                crit_chance: 0,
                pp: 0,
                unsupported: true,
                special_notes: "Unknown move".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_lookup() {
        assert_eq!(get_move_type(MoveId::HeatWave), TypeId::Fire);
        assert_eq!(get_move_type(MoveId::SpacialRend), TypeId::Dragon);
    }

    #[test]
    fn category_lookup() {
        assert_eq!(get_move_category(MoveId::Tackle), MoveCategory::Physical);
        assert_eq!(get_move_category(MoveId::HeatWave), MoveCategory::Special);
        assert_eq!(get_move_category(MoveId::StunSpore), MoveCategory::Status);
    }

    #[test]
    fn base_power_lookup() {
        assert_eq!(get_move_base_power(MoveId::QuickAttack, false), 4);
        assert_eq!(get_move_base_power(MoveId::FrenzyPlant, false), 45);
        assert_eq!(get_move_base_power(MoveId::FrenzyPlant, true), 40);
    }

    #[test]
    fn accuracy_lookup() {
        assert_eq!(get_move_accuracy(MoveId::HydroCannon, false), 125);
        assert_eq!(get_move_accuracy(MoveId::HydroCannon, true), 84);
    }

    #[test]
    fn crit_chance_lookup() {
        assert_eq!(get_move_crit_chance(MoveId::Thundershock), 2);
        assert_eq!(get_move_crit_chance(MoveId::Slash), 30);
    }

    #[test]
    fn max_pp_lookup() {
        assert_eq!(get_move_max_pp(MoveId::AerialAce), 8);
        assert_eq!(get_move_max_pp(MoveId::Leer), 27);
    }

    #[test]
    fn move_class_predicates() {
        assert!(!is_recoil_move(MoveId::GigaDrain));
        assert!(is_recoil_move(MoveId::DoubleEdge));
        assert!(!is_punch_move(MoveId::SilverWind));
        assert!(is_punch_move(MoveId::Thunderpunch));
        assert!(!is_sound_move(MoveId::Crabhammer));
        assert!(is_sound_move(MoveId::HyperVoice));
        assert!(!move_not_physical(MoveId::Rollout));
        assert!(move_not_physical(MoveId::Psybeam));
        assert!(move_not_physical(MoveId::Hypnosis));
        assert!(!is_regular_attack_or_projectile(MoveId::Psychic));
        assert!(is_regular_attack_or_projectile(MoveId::RegularAttack));
        assert!(is_regular_attack_or_projectile(MoveId::Projectile));
    }

    #[test]
    fn move_spec_from_id() {
        let spec = MoveSpec::from_id(MoveId::RoarOfTime);
        assert_eq!(spec.id, MoveId::RoarOfTime);
        assert_eq!(spec.type_id, TypeId::Dragon);
        assert_eq!(spec.power, 24);
        assert_eq!(spec.pp, 4);
        assert!(!spec.unsupported);

        assert!(MoveSpec::from_id(MoveId::Counter).unsupported);
    }
}
