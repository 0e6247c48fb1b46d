//! IQ skill identifiers.
//!
//! IQ skills are passive, flaggable behavior modifiers earned by raising a
//! monster's IQ, distinct from innate abilities. The damage pipeline cares
//! about the battle-facing ones; the rest exist so flag arrays and the name
//! directory cover the whole catalog.

/// IQ skill identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum IqSkillId {
    None = 0,
    TypeAdvantageMaster,
    ExclusiveMoveUser,
    FastFriend,
    Nonsleeper,
    ItemMaster,
    CourseChecker,
    StatusChecker,
    Nontraitor,
    TrapAvoider,
    TrapBuster,
    EnergySaver,
    WiseHealer,
    PpSaver,
    SelfCurer,
    TrapSeer,
    ExpGoGetter,
    ItemCatcher,
    Escapist,
    DeepBreather,
    QuickDodger,
    Aggressor,
    Defender,
    CounterBasher,
    PracticeSwinger,
    Sharpshooter,
    SureHitAttacker,
    Concentrator,
    BrickTough,
    CriticalDodger,
    ErraticPlayer,
    ClutchPerformer,
    Cheerleader,
    Intimidator,
    Survivalist,
    ExtraStriker,
    NoCharger,
    PowerPitcher,
    PierceHurler,
    LavaEvader,
    AbsoluteMover,
    SuperMobile,
    StairSensor,
    MapSurveyor,
    AcuteSniffer,
    Collector,
    GapProber,
    AllTerrainHiker,
    DedicatedTraveler,
    QuickHealer,
    Multitalent,
    SlipDodger,
    HouseAvoider,
    TightBelly,
    MealPlanner,
    StoutHeart,
    Bodyguard,
}

/// Size of per-monster and per-battlefield IQ skill flag arrays.
pub const IQ_SKILL_COUNT: usize = 57;

impl Default for IqSkillId {
    fn default() -> IqSkillId {
        IqSkillId::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_covers_last_variant() {
        assert_eq!(IqSkillId::Bodyguard as usize, IQ_SKILL_COUNT - 1);
    }
}
