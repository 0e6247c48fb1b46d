//! Case-insensitive, bidirectional mapping between human-readable names and
//! internal identifiers for every enumerable category.
//!
//! Each category gets a `NameDirectory`: a static table of
//! (identifier, display name, alternate names). Lookups normalize by ASCII
//! case only; anything fancier belongs in the caller. The two big
//! categories (moves and species) carry a perfect-hash fast path for the
//! forward lookup.

use crate::abilities::AbilityId;
use crate::dungeon::{DamageMessage, Weather};
use crate::entity::StatusId;
use crate::exclusive::ExclusiveItemEffectId;
use crate::iq::IqSkillId;
use crate::items::ItemId;
use crate::moves::{MoveCategory, MoveId};
use crate::species::{Gender, SpeciesId};
use crate::types::{TypeId, TypeMatchup};

/// One named identifier.
#[derive(Clone, Copy, Debug)]
pub struct NameEntry<T: 'static> {
    pub id: T,
    pub name: &'static str,
    pub alts: &'static [&'static str],
}

/// A bidirectional name/identifier directory for one category.
pub struct NameDirectory<T: 'static> {
    entries: &'static [NameEntry<T>],
    /// Perfect-hash fast path for primary names (already lowercase).
    fast_lookup: Option<&'static phf::Map<&'static str, T>>,
}

impl<T: Copy + PartialEq> NameDirectory<T> {
    pub const fn new(entries: &'static [NameEntry<T>]) -> NameDirectory<T> {
        NameDirectory {
            entries,
            fast_lookup: None,
        }
    }

    pub const fn with_fast_lookup(
        entries: &'static [NameEntry<T>],
        fast_lookup: &'static phf::Map<&'static str, T>,
    ) -> NameDirectory<T> {
        NameDirectory {
            entries,
            fast_lookup: Some(fast_lookup),
        }
    }

    /// The display name of an identifier.
    pub fn name_of(&self, id: T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.name)
    }

    /// Case-insensitive lookup over primary and alternate names.
    pub fn id_of(&self, name: &str) -> Option<T> {
        if let Some(map) = self.fast_lookup {
            let normalized = name.to_ascii_lowercase();
            if let Some(&id) = map.get(normalized.as_str()) {
                return Some(id);
            }
        }
        self.entries
            .iter()
            .find(|entry| {
                entry.name.eq_ignore_ascii_case(name)
                    || entry.alts.iter().any(|alt| alt.eq_ignore_ascii_case(name))
            })
            .map(|entry| entry.id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.id_of(name).is_some()
    }

    /// Alternate names registered for an identifier.
    pub fn alternate_names(&self, id: T) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.alts)
            .unwrap_or(&[])
    }

    /// All display names except the excluded identifiers, sorted by name.
    pub fn all_except(&self, exclude: &[T]) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .entries
            .iter()
            .filter(|entry| !exclude.contains(&entry.id))
            .map(|entry| entry.name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Like `all_except`, with each name's alternates attached.
    pub fn all_with_alts_except(
        &self,
        exclude: &[T],
    ) -> Vec<(&'static str, &'static [&'static str])> {
        let mut names: Vec<(&'static str, &'static [&'static str])> = self
            .entries
            .iter()
            .filter(|entry| !exclude.contains(&entry.id))
            .map(|entry| (entry.name, entry.alts))
            .collect();
        names.sort_unstable_by_key(|(name, _)| *name);
        names
    }

    /// Directory definitions are static data; repeated names or ids are
    /// programmer errors surfaced by the test suite.
    pub fn validate(&self) -> Result<(), String> {
        for (i, a) in self.entries.iter().enumerate() {
            let mut a_names = vec![a.name.to_ascii_lowercase()];
            a_names.extend(a.alts.iter().map(|alt| alt.to_ascii_lowercase()));
            if a_names.len()
                != a_names
                    .iter()
                    .collect::<std::collections::HashSet<_>>()
                    .len()
            {
                return Err(format!("repeated name within entry '{}'", a.name));
            }
            for b in &self.entries[i + 1..] {
                if a.id == b.id {
                    return Err(format!("repeated id for names '{}', '{}'", a.name, b.name));
                }
                let mut b_names = vec![b.name.to_ascii_lowercase()];
                b_names.extend(b.alts.iter().map(|alt| alt.to_ascii_lowercase()));
                for name in &b_names {
                    if a_names.contains(name) {
                        return Err(format!("repeated name '{}'", name));
                    }
                }
            }
        }
        Ok(())
    }
}

const fn entry<T>(id: T, name: &'static str) -> NameEntry<T> {
    NameEntry {
        id,
        name,
        alts: &[],
    }
}

const fn entry_alts<T>(
    id: T,
    name: &'static str,
    alts: &'static [&'static str],
) -> NameEntry<T> {
    NameEntry { id, name, alts }
}

// ============================================================================
// Small categories
// ============================================================================

pub static TYPE: NameDirectory<TypeId> = NameDirectory::new(&[
    entry(TypeId::None, "None"),
    entry(TypeId::Normal, "Normal"),
    entry(TypeId::Fire, "Fire"),
    entry(TypeId::Water, "Water"),
    entry(TypeId::Grass, "Grass"),
    entry(TypeId::Electric, "Electric"),
    entry(TypeId::Ice, "Ice"),
    entry(TypeId::Fighting, "Fighting"),
    entry(TypeId::Poison, "Poison"),
    entry(TypeId::Ground, "Ground"),
    entry(TypeId::Flying, "Flying"),
    entry(TypeId::Psychic, "Psychic"),
    entry(TypeId::Bug, "Bug"),
    entry(TypeId::Rock, "Rock"),
    entry(TypeId::Ghost, "Ghost"),
    entry(TypeId::Dragon, "Dragon"),
    entry(TypeId::Dark, "Dark"),
    entry(TypeId::Steel, "Steel"),
    entry(TypeId::Neutral, "Neutral"),
]);

pub static TYPE_MATCHUP: NameDirectory<TypeMatchup> = NameDirectory::new(&[
    entry(TypeMatchup::Immune, "Immune"),
    entry_alts(
        TypeMatchup::NotVeryEffective,
        "Not Very Effective",
        &["NVE"],
    ),
    entry(TypeMatchup::Neutral, "Neutral"),
    entry_alts(TypeMatchup::SuperEffective, "Super Effective", &["SE"]),
]);

pub static MOVE_CATEGORY: NameDirectory<MoveCategory> = NameDirectory::new(&[
    entry(MoveCategory::Physical, "Physical"),
    entry(MoveCategory::Special, "Special"),
    entry(MoveCategory::Status, "Status"),
]);

pub static GENDER: NameDirectory<Gender> = NameDirectory::new(&[
    entry(Gender::Invalid, "Invalid"),
    entry(Gender::Male, "Male"),
    entry(Gender::Female, "Female"),
    entry(Gender::Genderless, "Genderless"),
]);

pub static WEATHER: NameDirectory<Weather> = NameDirectory::new(&[
    entry(Weather::Clear, "Clear"),
    entry(Weather::Sunny, "Sunny"),
    entry(Weather::Sandstorm, "Sandstorm"),
    entry(Weather::Cloudy, "Cloudy"),
    entry(Weather::Rain, "Rain"),
    entry(Weather::Hail, "Hail"),
    entry(Weather::Fog, "Fog"),
    entry(Weather::Snow, "Snow"),
]);

pub static DAMAGE_MESSAGE: NameDirectory<DamageMessage> = NameDirectory::new(&[
    entry(DamageMessage::Move, "Move"),
    entry(DamageMessage::Item, "Item"),
    entry(DamageMessage::Burn, "Burn"),
    entry(DamageMessage::Recoil, "Recoil"),
]);

pub static STATUS: NameDirectory<StatusId> = NameDirectory::new(&[
    entry(StatusId::None, "None"),
    entry(StatusId::Sleep, "Sleep"),
    entry(StatusId::Nightmare, "Nightmare"),
    entry(StatusId::Napping, "Napping"),
    entry(StatusId::Burn, "Burn"),
    entry_alts(StatusId::Poisoned, "Poisoned", &["Poison"]),
    entry_alts(StatusId::BadlyPoisoned, "Badly Poisoned", &["Bad Poison"]),
    entry_alts(StatusId::Paralysis, "Paralysis", &["Paralyzed"]),
    entry(StatusId::Identifying, "Identifying"),
    entry_alts(StatusId::Confused, "Confused", &["Confusion"]),
    entry(StatusId::SkullBash, "Skull Bash"),
    entry(StatusId::Flying, "Flying"),
    entry(StatusId::Bouncing, "Bouncing"),
    entry(StatusId::Diving, "Diving"),
    entry(StatusId::Digging, "Digging"),
    entry(StatusId::ShadowForce, "Shadow Force"),
    entry_alts(StatusId::Charging, "Charging", &["Charge"]),
    entry(StatusId::Reflect, "Reflect"),
    entry(StatusId::LightScreen, "Light Screen"),
    entry(StatusId::LuckyChant, "Lucky Chant"),
    entry(StatusId::GastroAcid, "Gastro Acid"),
    entry(StatusId::SureShot, "Sure Shot"),
    entry(StatusId::Whiffer, "Whiffer"),
    entry(StatusId::FocusEnergy, "Focus Energy"),
    entry(StatusId::CrossEyed, "Cross-Eyed"),
    entry(StatusId::MiracleEye, "Miracle Eye"),
    entry(StatusId::MagnetRise, "Magnet Rise"),
    entry(StatusId::Exposed, "Exposed"),
]);

// ============================================================================
// Abilities
// ============================================================================

pub static ABILITY: NameDirectory<AbilityId> = NameDirectory::new(&[
    entry(AbilityId::Unknown, "Unknown"),
    entry(AbilityId::Stench, "Stench"),
    entry(AbilityId::Drizzle, "Drizzle"),
    entry(AbilityId::SpeedBoost, "Speed Boost"),
    entry(AbilityId::BattleArmor, "Battle Armor"),
    entry(AbilityId::Sturdy, "Sturdy"),
    entry(AbilityId::Damp, "Damp"),
    entry(AbilityId::Limber, "Limber"),
    entry(AbilityId::SandVeil, "Sand Veil"),
    entry(AbilityId::Static, "Static"),
    entry(AbilityId::VoltAbsorb, "Volt Absorb"),
    entry(AbilityId::WaterAbsorb, "Water Absorb"),
    entry(AbilityId::Oblivious, "Oblivious"),
    entry(AbilityId::CloudNine, "Cloud Nine"),
    entry_alts(AbilityId::Compoundeyes, "Compoundeyes", &["Compound Eyes"]),
    entry(AbilityId::Insomnia, "Insomnia"),
    entry(AbilityId::ColorChange, "Color Change"),
    entry(AbilityId::Immunity, "Immunity"),
    entry(AbilityId::FlashFire, "Flash Fire"),
    entry(AbilityId::ShieldDust, "Shield Dust"),
    entry(AbilityId::OwnTempo, "Own Tempo"),
    entry(AbilityId::SuctionCups, "Suction Cups"),
    entry(AbilityId::Intimidate, "Intimidate"),
    entry(AbilityId::ShadowTag, "Shadow Tag"),
    entry(AbilityId::RoughSkin, "Rough Skin"),
    entry(AbilityId::WonderGuard, "Wonder Guard"),
    entry(AbilityId::Levitate, "Levitate"),
    entry(AbilityId::EffectSpore, "Effect Spore"),
    entry(AbilityId::Synchronize, "Synchronize"),
    entry(AbilityId::ClearBody, "Clear Body"),
    entry(AbilityId::NaturalCure, "Natural Cure"),
    entry_alts(AbilityId::Lightningrod, "Lightningrod", &["Lightning Rod"]),
    entry(AbilityId::SereneGrace, "Serene Grace"),
    entry(AbilityId::SwiftSwim, "Swift Swim"),
    entry(AbilityId::Chlorophyll, "Chlorophyll"),
    entry(AbilityId::Illuminate, "Illuminate"),
    entry(AbilityId::Trace, "Trace"),
    entry(AbilityId::HugePower, "Huge Power"),
    entry(AbilityId::PoisonPoint, "Poison Point"),
    entry(AbilityId::InnerFocus, "Inner Focus"),
    entry(AbilityId::MagmaArmor, "Magma Armor"),
    entry(AbilityId::WaterVeil, "Water Veil"),
    entry(AbilityId::MagnetPull, "Magnet Pull"),
    entry(AbilityId::Soundproof, "Soundproof"),
    entry(AbilityId::RainDish, "Rain Dish"),
    entry(AbilityId::SandStream, "Sand Stream"),
    entry(AbilityId::Pressure, "Pressure"),
    entry(AbilityId::ThickFat, "Thick Fat"),
    entry(AbilityId::EarlyBird, "Early Bird"),
    entry(AbilityId::FlameBody, "Flame Body"),
    entry(AbilityId::RunAway, "Run Away"),
    entry(AbilityId::KeenEye, "Keen Eye"),
    entry(AbilityId::HyperCutter, "Hyper Cutter"),
    entry(AbilityId::Pickup, "Pickup"),
    entry(AbilityId::Truant, "Truant"),
    entry(AbilityId::Hustle, "Hustle"),
    entry(AbilityId::CuteCharm, "Cute Charm"),
    entry(AbilityId::Plus, "Plus"),
    entry(AbilityId::Minus, "Minus"),
    entry(AbilityId::Forecast, "Forecast"),
    entry(AbilityId::StickyHold, "Sticky Hold"),
    entry(AbilityId::ShedSkin, "Shed Skin"),
    entry(AbilityId::Guts, "Guts"),
    entry(AbilityId::MarvelScale, "Marvel Scale"),
    entry(AbilityId::LiquidOoze, "Liquid Ooze"),
    entry(AbilityId::Overgrow, "Overgrow"),
    entry(AbilityId::Blaze, "Blaze"),
    entry(AbilityId::Torrent, "Torrent"),
    entry(AbilityId::Swarm, "Swarm"),
    entry(AbilityId::RockHead, "Rock Head"),
    entry(AbilityId::Drought, "Drought"),
    entry(AbilityId::ArenaTrap, "Arena Trap"),
    entry(AbilityId::VitalSpirit, "Vital Spirit"),
    entry(AbilityId::WhiteSmoke, "White Smoke"),
    entry(AbilityId::PurePower, "Pure Power"),
    entry(AbilityId::ShellArmor, "Shell Armor"),
    entry(AbilityId::AirLock, "Air Lock"),
    entry(AbilityId::TangledFeet, "Tangled Feet"),
    entry(AbilityId::MotorDrive, "Motor Drive"),
    entry(AbilityId::Rivalry, "Rivalry"),
    entry(AbilityId::Steadfast, "Steadfast"),
    entry(AbilityId::SnowCloak, "Snow Cloak"),
    entry(AbilityId::Gluttony, "Gluttony"),
    entry(AbilityId::AngerPoint, "Anger Point"),
    entry(AbilityId::Unburden, "Unburden"),
    entry(AbilityId::Heatproof, "Heatproof"),
    entry(AbilityId::Simple, "Simple"),
    entry(AbilityId::DrySkin, "Dry Skin"),
    entry(AbilityId::Download, "Download"),
    entry(AbilityId::IronFist, "Iron Fist"),
    entry(AbilityId::PoisonHeal, "Poison Heal"),
    entry(AbilityId::Adaptability, "Adaptability"),
    entry(AbilityId::SkillLink, "Skill Link"),
    entry(AbilityId::Hydration, "Hydration"),
    entry(AbilityId::SolarPower, "Solar Power"),
    entry(AbilityId::QuickFeet, "Quick Feet"),
    entry(AbilityId::Normalize, "Normalize"),
    entry(AbilityId::Sniper, "Sniper"),
    entry(AbilityId::MagicGuard, "Magic Guard"),
    entry(AbilityId::NoGuard, "No Guard"),
    entry(AbilityId::Stall, "Stall"),
    entry(AbilityId::Technician, "Technician"),
    entry(AbilityId::LeafGuard, "Leaf Guard"),
    entry(AbilityId::Klutz, "Klutz"),
    entry(AbilityId::MoldBreaker, "Mold Breaker"),
    entry(AbilityId::SuperLuck, "Super Luck"),
    entry(AbilityId::Aftermath, "Aftermath"),
    entry(AbilityId::Anticipation, "Anticipation"),
    entry(AbilityId::Forewarn, "Forewarn"),
    entry(AbilityId::Unaware, "Unaware"),
    entry(AbilityId::TintedLens, "Tinted Lens"),
    entry(AbilityId::Filter, "Filter"),
    entry(AbilityId::SlowStart, "Slow Start"),
    entry(AbilityId::Scrappy, "Scrappy"),
    entry(AbilityId::StormDrain, "Storm Drain"),
    entry(AbilityId::IceBody, "Ice Body"),
    entry(AbilityId::SolidRock, "Solid Rock"),
    entry(AbilityId::SnowWarning, "Snow Warning"),
    entry(AbilityId::HoneyGather, "Honey Gather"),
    entry(AbilityId::Frisk, "Frisk"),
    entry(AbilityId::Reckless, "Reckless"),
    entry(AbilityId::Multitype, "Multitype"),
    entry(AbilityId::FlowerGift, "Flower Gift"),
    entry(AbilityId::BadDreams, "Bad Dreams"),
]);

// ============================================================================
// IQ skills
// ============================================================================

pub static IQ: NameDirectory<IqSkillId> = NameDirectory::new(&[
    entry(IqSkillId::None, "None"),
    entry(IqSkillId::TypeAdvantageMaster, "Type-Advantage Master"),
    entry(IqSkillId::ExclusiveMoveUser, "Exclusive Move-User"),
    entry(IqSkillId::FastFriend, "Fast Friend"),
    entry(IqSkillId::Nonsleeper, "Nonsleeper"),
    entry(IqSkillId::ItemMaster, "Item Master"),
    entry(IqSkillId::CourseChecker, "Course Checker"),
    entry(IqSkillId::StatusChecker, "Status Checker"),
    entry(IqSkillId::Nontraitor, "Nontraitor"),
    entry(IqSkillId::TrapAvoider, "Trap Avoider"),
    entry(IqSkillId::TrapBuster, "Trap Buster"),
    entry(IqSkillId::EnergySaver, "Energy Saver"),
    entry(IqSkillId::WiseHealer, "Wise Healer"),
    entry(IqSkillId::PpSaver, "PP Saver"),
    entry(IqSkillId::SelfCurer, "Self-Curer"),
    entry(IqSkillId::TrapSeer, "Trap Seer"),
    entry(IqSkillId::ExpGoGetter, "Exp. Go-Getter"),
    entry(IqSkillId::ItemCatcher, "Item Catcher"),
    entry(IqSkillId::Escapist, "Escapist"),
    entry(IqSkillId::DeepBreather, "Deep Breather"),
    entry(IqSkillId::QuickDodger, "Quick Dodger"),
    entry(IqSkillId::Aggressor, "Aggressor"),
    entry(IqSkillId::Defender, "Defender"),
    entry(IqSkillId::CounterBasher, "Counter Basher"),
    entry(IqSkillId::PracticeSwinger, "Practice Swinger"),
    entry(IqSkillId::Sharpshooter, "Sharpshooter"),
    entry(IqSkillId::SureHitAttacker, "Sure-Hit Attacker"),
    entry(IqSkillId::Concentrator, "Concentrator"),
    entry(IqSkillId::BrickTough, "Brick Tough"),
    entry(IqSkillId::CriticalDodger, "Critical Dodger"),
    entry(IqSkillId::ErraticPlayer, "Erratic Player"),
    entry(IqSkillId::ClutchPerformer, "Clutch Performer"),
    entry(IqSkillId::Cheerleader, "Cheerleader"),
    entry(IqSkillId::Intimidator, "Intimidator"),
    entry(IqSkillId::Survivalist, "Survivalist"),
    entry(IqSkillId::ExtraStriker, "Extra Striker"),
    entry(IqSkillId::NoCharger, "No Charger"),
    entry(IqSkillId::PowerPitcher, "Power Pitcher"),
    entry(IqSkillId::PierceHurler, "Pierce Hurler"),
    entry(IqSkillId::LavaEvader, "Lava Evader"),
    entry(IqSkillId::AbsoluteMover, "Absolute Mover"),
    entry(IqSkillId::SuperMobile, "Super Mobile"),
    entry(IqSkillId::StairSensor, "Stair Sensor"),
    entry(IqSkillId::MapSurveyor, "Map Surveyor"),
    entry(IqSkillId::AcuteSniffer, "Acute Sniffer"),
    entry(IqSkillId::Collector, "Collector"),
    entry(IqSkillId::GapProber, "Gap Prober"),
    entry(IqSkillId::AllTerrainHiker, "All-Terrain Hiker"),
    entry(IqSkillId::DedicatedTraveler, "Dedicated Traveler"),
    entry(IqSkillId::QuickHealer, "Quick Healer"),
    entry(IqSkillId::Multitalent, "Multitalent"),
    entry(IqSkillId::SlipDodger, "Slip Dodger"),
    entry(IqSkillId::HouseAvoider, "House Avoider"),
    entry(IqSkillId::TightBelly, "Tight Belly"),
    entry(IqSkillId::MealPlanner, "Meal Planner"),
    entry(IqSkillId::StoutHeart, "Stout Heart"),
    entry(IqSkillId::Bodyguard, "Bodyguard"),
]);

// ============================================================================
// Exclusive item effects
// ============================================================================

pub static EXCLUSIVE_ITEM_EFFECT: NameDirectory<ExclusiveItemEffectId> = NameDirectory::new(&[
    entry(ExclusiveItemEffectId::StatBoost, "Stat Boost"),
    entry(ExclusiveItemEffectId::MiracleEye, "Miracle Eye"),
    entry(ExclusiveItemEffectId::Scrappy, "Scrappy"),
    entry(ExclusiveItemEffectId::HalvedDamage, "Halved Damage"),
    entry(
        ExclusiveItemEffectId::HalvedPhysicalDamage,
        "Halved Physical Damage",
    ),
    entry(
        ExclusiveItemEffectId::HalvedSpecialDamage,
        "Halved Special Damage",
    ),
    entry(
        ExclusiveItemEffectId::BypassReflectLightScreen,
        "Bypass Reflect and Light Screen",
    ),
    entry(ExclusiveItemEffectId::NoCriticalHits, "No Critical Hits"),
    entry_alts(
        ExclusiveItemEffectId::DamageBoost50Pct,
        "50% Damage Boost",
        &["Air Blade"],
    ),
    entry(ExclusiveItemEffectId::NoNormalDamage, "No Normal Damage"),
    entry(ExclusiveItemEffectId::NoFireDamage, "No Fire Damage"),
    entry(ExclusiveItemEffectId::NoWaterDamage, "No Water Damage"),
    entry(ExclusiveItemEffectId::NoGrassDamage, "No Grass Damage"),
    entry(
        ExclusiveItemEffectId::NoElectricDamage,
        "No Electric Damage",
    ),
    entry(ExclusiveItemEffectId::NoIceDamage, "No Ice Damage"),
    entry(
        ExclusiveItemEffectId::NoFightingDamage,
        "No Fighting Damage",
    ),
    entry(ExclusiveItemEffectId::NoPoisonDamage, "No Poison Damage"),
    entry(ExclusiveItemEffectId::NoGroundDamage, "No Ground Damage"),
    entry(ExclusiveItemEffectId::NoFlyingDamage, "No Flying Damage"),
    entry(ExclusiveItemEffectId::NoPsychicDamage, "No Psychic Damage"),
    entry(ExclusiveItemEffectId::NoBugDamage, "No Bug Damage"),
    entry(ExclusiveItemEffectId::NoRockDamage, "No Rock Damage"),
    entry(ExclusiveItemEffectId::NoGhostDamage, "No Ghost Damage"),
    entry(ExclusiveItemEffectId::NoDragonDamage, "No Dragon Damage"),
    entry(ExclusiveItemEffectId::NoDarkDamage, "No Dark Damage"),
    entry(ExclusiveItemEffectId::NoSteelDamage, "No Steel Damage"),
    entry(
        ExclusiveItemEffectId::AbsorbFireDamage,
        "Absorb Fire Damage",
    ),
    entry(
        ExclusiveItemEffectId::AbsorbWaterDamage,
        "Absorb Water Damage",
    ),
    entry(
        ExclusiveItemEffectId::AbsorbGrassDamage,
        "Absorb Grass Damage",
    ),
    entry(
        ExclusiveItemEffectId::AbsorbElectricDamage,
        "Absorb Electric Damage",
    ),
    entry(ExclusiveItemEffectId::AbsorbIceDamage, "Absorb Ice Damage"),
    entry(
        ExclusiveItemEffectId::EvasionBoostSunny,
        "Evasion Boost (Sunny)",
    ),
    entry(
        ExclusiveItemEffectId::EvasionBoostSandstorm,
        "Evasion Boost (Sandstorm)",
    ),
    entry(
        ExclusiveItemEffectId::EvasionBoostCloudy,
        "Evasion Boost (Cloudy)",
    ),
    entry(
        ExclusiveItemEffectId::EvasionBoostRain,
        "Evasion Boost (Rain)",
    ),
    entry(
        ExclusiveItemEffectId::EvasionBoostHail,
        "Evasion Boost (Hail)",
    ),
    entry(
        ExclusiveItemEffectId::EvasionBoostFog,
        "Evasion Boost (Fog)",
    ),
    entry(
        ExclusiveItemEffectId::EvasionBoostSnow,
        "Evasion Boost (Snow)",
    ),
]);

// ============================================================================
// Items
// ============================================================================

pub static ITEM: NameDirectory<ItemId> = NameDirectory::new(&[
    entry(ItemId::Nothing, "Nothing"),
    entry(ItemId::Stick, "Stick"),
    entry(ItemId::IronThorn, "Iron Thorn"),
    entry(ItemId::SilverSpike, "Silver Spike"),
    entry(ItemId::GoldFang, "Gold Fang"),
    entry(ItemId::CacneaSpike, "Cacnea Spike"),
    entry(ItemId::CorsolaTwig, "Corsola Twig"),
    entry(ItemId::GoldThorn, "Gold Thorn"),
    entry(ItemId::PowerBand, "Power Band"),
    entry(ItemId::SpecialBand, "Special Band"),
    entry(ItemId::DefScarf, "Def. Scarf"),
    entry(ItemId::ZincBand, "Zinc Band"),
    entry(ItemId::MunchBelt, "Munch Belt"),
    entry(ItemId::DetectBand, "Detect Band"),
    entry(ItemId::ScopeLens, "Scope Lens"),
    entry(ItemId::PatsyBand, "Patsy Band"),
    entry(ItemId::WeatherBand, "Weather Band"),
    entry(ItemId::XRaySpecs, "X-Ray Specs"),
    entry(ItemId::YRaySpecs, "Y-Ray Specs"),
    entry(ItemId::SpaceGlobe, "Space Globe"),
    entry(ItemId::SilverBow, "Silver Bow"),
    entry(ItemId::BrownBow, "Brown Bow"),
    entry(ItemId::RedBow, "Red Bow"),
    entry(ItemId::PinkBow, "Pink Bow"),
    entry(ItemId::OrangeBow, "Orange Bow"),
    entry(ItemId::YellowBow, "Yellow Bow"),
    entry(ItemId::LimeBow, "Lime Bow"),
    entry(ItemId::GreenBow, "Green Bow"),
    entry(ItemId::ViridianBow, "Viridian Bow"),
    entry(ItemId::MintyBow, "Minty Bow"),
    entry(ItemId::SkyBlueBow, "Sky Blue Bow"),
    entry(ItemId::BlueBow, "Blue Bow"),
    entry(ItemId::CobaltBow, "Cobalt Bow"),
    entry(ItemId::PurpleBow, "Purple Bow"),
    entry(ItemId::VioletBow, "Violet Bow"),
    entry(ItemId::FuchsiaBow, "Fuchsia Bow"),
    entry(ItemId::CheriBerry, "Cheri Berry"),
    entry(ItemId::ChestoBerry, "Chesto Berry"),
    entry(ItemId::PechaBerry, "Pecha Berry"),
    entry(ItemId::RawstBerry, "Rawst Berry"),
    entry(ItemId::AspearBerry, "Aspear Berry"),
    entry(ItemId::LeppaBerry, "Leppa Berry"),
    entry(ItemId::OranBerry, "Oran Berry"),
    entry(ItemId::PersimBerry, "Persim Berry"),
    entry(ItemId::LumBerry, "Lum Berry"),
    entry(ItemId::SitrusBerry, "Sitrus Berry"),
    entry(ItemId::BlastSeed, "Blast Seed"),
]);

// ============================================================================
// Moves & species (perfect-hash fast paths)
// ============================================================================

static MOVE_NAME_LOOKUP: phf::Map<&'static str, MoveId> = phf::phf_map! {
    "nothing" => MoveId::Nothing,
    "regular attack" => MoveId::RegularAttack,
    "projectile" => MoveId::Projectile,
    "tackle" => MoveId::Tackle,
    "quick attack" => MoveId::QuickAttack,
    "slash" => MoveId::Slash,
    "leer" => MoveId::Leer,
    "growl" => MoveId::Growl,
    "screech" => MoveId::Screech,
    "razor leaf" => MoveId::RazorLeaf,
    "razor wind" => MoveId::RazorWind,
    "wide slash" => MoveId::WideSlash,
    "aerial ace" => MoveId::AerialAce,
    "air slash" => MoveId::AirSlash,
    "gust" => MoveId::Gust,
    "twister" => MoveId::Twister,
    "fly" => MoveId::Fly,
    "bounce" => MoveId::Bounce,
    "sky attack" => MoveId::SkyAttack,
    "sky uppercut" => MoveId::SkyUppercut,
    "thundershock" => MoveId::Thundershock,
    "thunderbolt" => MoveId::Thunderbolt,
    "thunder" => MoveId::Thunder,
    "thunderpunch" => MoveId::Thunderpunch,
    "charge beam" => MoveId::ChargeBeam,
    "water gun" => MoveId::WaterGun,
    "surf" => MoveId::Surf,
    "whirlpool" => MoveId::Whirlpool,
    "dive" => MoveId::Dive,
    "brine" => MoveId::Brine,
    "crabhammer" => MoveId::Crabhammer,
    "water spout" => MoveId::WaterSpout,
    "hydro cannon" => MoveId::HydroCannon,
    "flamethrower" => MoveId::Flamethrower,
    "heat wave" => MoveId::HeatWave,
    "blast burn" => MoveId::BlastBurn,
    "eruption" => MoveId::Eruption,
    "fire punch" => MoveId::FirePunch,
    "ember" => MoveId::Ember,
    "blizzard" => MoveId::Blizzard,
    "ice ball" => MoveId::IceBall,
    "ice punch" => MoveId::IcePunch,
    "psybeam" => MoveId::Psybeam,
    "psychic" => MoveId::Psychic,
    "dream eater" => MoveId::DreamEater,
    "hypnosis" => MoveId::Hypnosis,
    "stun spore" => MoveId::StunSpore,
    "frenzy plant" => MoveId::FrenzyPlant,
    "giga drain" => MoveId::GigaDrain,
    "solarbeam" => MoveId::SolarBeam,
    "grass knot" => MoveId::GrassKnot,
    "earthquake" => MoveId::Earthquake,
    "magnitude" => MoveId::Magnitude,
    "dig" => MoveId::Dig,
    "sand tomb" => MoveId::SandTomb,
    "rollout" => MoveId::Rollout,
    "rock slide" => MoveId::RockSlide,
    "low kick" => MoveId::LowKick,
    "triple kick" => MoveId::TripleKick,
    "reversal" => MoveId::Reversal,
    "flail" => MoveId::Flail,
    "facade" => MoveId::Facade,
    "focus punch" => MoveId::FocusPunch,
    "smellingsalt" => MoveId::SmellingSalt,
    "double-edge" => MoveId::DoubleEdge,
    "skull bash" => MoveId::SkullBash,
    "hi jump kick" => MoveId::HiJumpKick,
    "wake-up slap" => MoveId::WakeUpSlap,
    "last resort" => MoveId::LastResort,
    "trump card" => MoveId::TrumpCard,
    "spit up" => MoveId::SpitUp,
    "gyro ball" => MoveId::GyroBall,
    "punishment" => MoveId::Punishment,
    "wring out" => MoveId::WringOut,
    "crush grip" => MoveId::CrushGrip,
    "shadow force" => MoveId::ShadowForce,
    "shadow ball" => MoveId::ShadowBall,
    "silver wind" => MoveId::SilverWind,
    "hyper voice" => MoveId::HyperVoice,
    "hidden power" => MoveId::HiddenPower,
    "weather ball" => MoveId::WeatherBall,
    "natural gift" => MoveId::NaturalGift,
    "judgment" => MoveId::Judgment,
    "brick break" => MoveId::BrickBreak,
    "roar of time" => MoveId::RoarOfTime,
    "spacial rend" => MoveId::SpacialRend,
    "endure" => MoveId::Endure,
    "detect" => MoveId::Detect,
    "protect" => MoveId::Protect,
    "bide" => MoveId::Bide,
    "counter" => MoveId::Counter,
    "mirror coat" => MoveId::MirrorCoat,
};

pub static MOVE: NameDirectory<MoveId> = NameDirectory::with_fast_lookup(
    &[
        entry(MoveId::Nothing, "Nothing"),
        entry_alts(MoveId::RegularAttack, "Regular Attack", &["Basic Attack"]),
        entry_alts(MoveId::Projectile, "Projectile", &["Thrown Item"]),
        entry(MoveId::Tackle, "Tackle"),
        entry(MoveId::QuickAttack, "Quick Attack"),
        entry(MoveId::Slash, "Slash"),
        entry(MoveId::Leer, "Leer"),
        entry(MoveId::Growl, "Growl"),
        entry(MoveId::Screech, "Screech"),
        entry(MoveId::RazorLeaf, "Razor Leaf"),
        entry(MoveId::RazorWind, "Razor Wind"),
        entry(MoveId::WideSlash, "Wide Slash"),
        entry(MoveId::AerialAce, "Aerial Ace"),
        entry(MoveId::AirSlash, "Air Slash"),
        entry(MoveId::Gust, "Gust"),
        entry(MoveId::Twister, "Twister"),
        entry(MoveId::Fly, "Fly"),
        entry(MoveId::Bounce, "Bounce"),
        entry(MoveId::SkyAttack, "Sky Attack"),
        entry(MoveId::SkyUppercut, "Sky Uppercut"),
        entry(MoveId::Thundershock, "Thundershock"),
        entry(MoveId::Thunderbolt, "Thunderbolt"),
        entry(MoveId::Thunder, "Thunder"),
        entry_alts(MoveId::Thunderpunch, "Thunderpunch", &["Thunder Punch"]),
        entry(MoveId::ChargeBeam, "Charge Beam"),
        entry(MoveId::WaterGun, "Water Gun"),
        entry(MoveId::Surf, "Surf"),
        entry(MoveId::Whirlpool, "Whirlpool"),
        entry(MoveId::Dive, "Dive"),
        entry(MoveId::Brine, "Brine"),
        entry(MoveId::Crabhammer, "Crabhammer"),
        entry(MoveId::WaterSpout, "Water Spout"),
        entry(MoveId::HydroCannon, "Hydro Cannon"),
        entry(MoveId::Flamethrower, "Flamethrower"),
        entry(MoveId::HeatWave, "Heat Wave"),
        entry(MoveId::BlastBurn, "Blast Burn"),
        entry(MoveId::Eruption, "Eruption"),
        entry(MoveId::FirePunch, "Fire Punch"),
        entry(MoveId::Ember, "Ember"),
        entry(MoveId::Blizzard, "Blizzard"),
        entry(MoveId::IceBall, "Ice Ball"),
        entry(MoveId::IcePunch, "Ice Punch"),
        entry(MoveId::Psybeam, "Psybeam"),
        entry(MoveId::Psychic, "Psychic"),
        entry(MoveId::DreamEater, "Dream Eater"),
        entry(MoveId::Hypnosis, "Hypnosis"),
        entry(MoveId::StunSpore, "Stun Spore"),
        entry(MoveId::FrenzyPlant, "Frenzy Plant"),
        entry(MoveId::GigaDrain, "Giga Drain"),
        entry_alts(MoveId::SolarBeam, "SolarBeam", &["Solar Beam"]),
        entry(MoveId::GrassKnot, "Grass Knot"),
        entry(MoveId::Earthquake, "Earthquake"),
        entry(MoveId::Magnitude, "Magnitude"),
        entry(MoveId::Dig, "Dig"),
        entry(MoveId::SandTomb, "Sand Tomb"),
        entry(MoveId::Rollout, "Rollout"),
        entry(MoveId::RockSlide, "Rock Slide"),
        entry(MoveId::LowKick, "Low Kick"),
        entry(MoveId::TripleKick, "Triple Kick"),
        entry(MoveId::Reversal, "Reversal"),
        entry(MoveId::Flail, "Flail"),
        entry(MoveId::Facade, "Facade"),
        entry(MoveId::FocusPunch, "Focus Punch"),
        entry_alts(MoveId::SmellingSalt, "SmellingSalt", &["Smelling Salts"]),
        entry(MoveId::DoubleEdge, "Double-Edge"),
        entry(MoveId::SkullBash, "Skull Bash"),
        entry_alts(MoveId::HiJumpKick, "Hi Jump Kick", &["High Jump Kick"]),
        entry(MoveId::WakeUpSlap, "Wake-Up Slap"),
        entry(MoveId::LastResort, "Last Resort"),
        entry(MoveId::TrumpCard, "Trump Card"),
        entry(MoveId::SpitUp, "Spit Up"),
        entry(MoveId::GyroBall, "Gyro Ball"),
        entry(MoveId::Punishment, "Punishment"),
        entry(MoveId::WringOut, "Wring Out"),
        entry(MoveId::CrushGrip, "Crush Grip"),
        entry(MoveId::ShadowForce, "Shadow Force"),
        entry(MoveId::ShadowBall, "Shadow Ball"),
        entry(MoveId::SilverWind, "Silver Wind"),
        entry(MoveId::HyperVoice, "Hyper Voice"),
        entry(MoveId::HiddenPower, "Hidden Power"),
        entry(MoveId::WeatherBall, "Weather Ball"),
        entry(MoveId::NaturalGift, "Natural Gift"),
        entry_alts(MoveId::Judgment, "Judgment", &["Judgement"]),
        entry(MoveId::BrickBreak, "Brick Break"),
        entry(MoveId::RoarOfTime, "Roar of Time"),
        entry(MoveId::SpacialRend, "Spacial Rend"),
        entry(MoveId::Endure, "Endure"),
        entry(MoveId::Detect, "Detect"),
        entry(MoveId::Protect, "Protect"),
        entry(MoveId::Bide, "Bide"),
        entry(MoveId::Counter, "Counter"),
        entry(MoveId::MirrorCoat, "Mirror Coat"),
    ],
    &MOVE_NAME_LOOKUP,
);

static SPECIES_NAME_LOOKUP: phf::Map<&'static str, SpeciesId> = phf::phf_map! {
    "none" => SpeciesId::None,
    "bulbasaur" => SpeciesId::Bulbasaur,
    "venusaur" => SpeciesId::Venusaur,
    "charmander" => SpeciesId::Charmander,
    "charizard" => SpeciesId::Charizard,
    "pikachu" => SpeciesId::Pikachu,
    "kangaskhan" => SpeciesId::Kangaskhan,
    "gastly" => SpeciesId::Gastly,
    "scizor" => SpeciesId::Scizor,
    "bronzong" => SpeciesId::Bronzong,
    "flygon" => SpeciesId::Flygon,
    "latios" => SpeciesId::Latios,
    "dialga" => SpeciesId::Dialga,
    "deoxys" => SpeciesId::DeoxysNormal,
    "deoxys (attack)" => SpeciesId::DeoxysAttack,
    "deoxys (defense)" => SpeciesId::DeoxysDefense,
    "deoxys (speed)" => SpeciesId::DeoxysSpeed,
    "giratina (altered)" => SpeciesId::GiratinaAltered,
    "giratina (origin)" => SpeciesId::GiratinaOrigin,
};

pub static SPECIES: NameDirectory<SpeciesId> = NameDirectory::with_fast_lookup(
    &[
        entry(SpeciesId::None, "None"),
        entry(SpeciesId::Bulbasaur, "Bulbasaur"),
        entry(SpeciesId::Venusaur, "Venusaur"),
        entry(SpeciesId::Charmander, "Charmander"),
        entry(SpeciesId::Charizard, "Charizard"),
        entry(SpeciesId::Pikachu, "Pikachu"),
        entry(SpeciesId::Kangaskhan, "Kangaskhan"),
        entry(SpeciesId::Gastly, "Gastly"),
        entry(SpeciesId::Scizor, "Scizor"),
        entry(SpeciesId::Bronzong, "Bronzong"),
        entry(SpeciesId::Flygon, "Flygon"),
        entry(SpeciesId::Latios, "Latios"),
        entry(SpeciesId::Dialga, "Dialga"),
        entry_alts(SpeciesId::DeoxysNormal, "Deoxys", &["Deoxys (Normal)"]),
        entry(SpeciesId::DeoxysAttack, "Deoxys (Attack)"),
        entry(SpeciesId::DeoxysDefense, "Deoxys (Defense)"),
        entry(SpeciesId::DeoxysSpeed, "Deoxys (Speed)"),
        entry_alts(SpeciesId::GiratinaAltered, "Giratina (Altered)", &["Giratina"]),
        entry(SpeciesId::GiratinaOrigin, "Giratina (Origin)"),
        entry(SpeciesId::BulbasaurSecondary, "Bulbasaur (secondary)"),
        entry(SpeciesId::VenusaurSecondary, "Venusaur (secondary)"),
        entry(SpeciesId::CharmanderSecondary, "Charmander (secondary)"),
        entry(SpeciesId::CharizardSecondary, "Charizard (secondary)"),
        entry(SpeciesId::PikachuSecondary, "Pikachu (secondary)"),
        entry(SpeciesId::KangaskhanSecondary, "Kangaskhan (secondary)"),
        entry(SpeciesId::GastlySecondary, "Gastly (secondary)"),
        entry(SpeciesId::ScizorSecondary, "Scizor (secondary)"),
        entry(SpeciesId::BronzongSecondary, "Bronzong (secondary)"),
        entry(SpeciesId::FlygonSecondary, "Flygon (secondary)"),
        entry(SpeciesId::LatiosSecondary, "Latios (secondary)"),
        entry(SpeciesId::DialgaSecondary, "Dialga (secondary)"),
    ],
    &SPECIES_NAME_LOOKUP,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_are_well_formed() {
        TYPE.validate().unwrap();
        TYPE_MATCHUP.validate().unwrap();
        MOVE_CATEGORY.validate().unwrap();
        GENDER.validate().unwrap();
        WEATHER.validate().unwrap();
        DAMAGE_MESSAGE.validate().unwrap();
        STATUS.validate().unwrap();
        ABILITY.validate().unwrap();
        IQ.validate().unwrap();
        EXCLUSIVE_ITEM_EFFECT.validate().unwrap();
        ITEM.validate().unwrap();
        MOVE.validate().unwrap();
        SPECIES.validate().unwrap();
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(MOVE.id_of("flamethrower"), Some(MoveId::Flamethrower));
        assert_eq!(MOVE.id_of("FLAMETHROWER"), Some(MoveId::Flamethrower));
        assert_eq!(MOVE.id_of("Heat Wave"), Some(MoveId::HeatWave));
        assert_eq!(MOVE.id_of("heat wave"), Some(MoveId::HeatWave));
        assert_eq!(MOVE.id_of("no such move"), None);
        assert_eq!(SPECIES.id_of("CHARIZARD"), Some(SpeciesId::Charizard));
    }

    #[test]
    fn alternate_names_resolve() {
        assert_eq!(MOVE.id_of("High Jump Kick"), Some(MoveId::HiJumpKick));
        assert_eq!(MOVE.id_of("Smelling Salts"), Some(MoveId::SmellingSalt));
        assert_eq!(ABILITY.id_of("Lightning Rod"), Some(AbilityId::Lightningrod));
        assert_eq!(
            MOVE.alternate_names(MoveId::HiJumpKick),
            &["High Jump Kick"]
        );
    }

    #[test]
    fn round_trips() {
        assert_eq!(MOVE.name_of(MoveId::WideSlash), Some("Wide Slash"));
        assert_eq!(
            MOVE.id_of(MOVE.name_of(MoveId::RoarOfTime).unwrap()),
            Some(MoveId::RoarOfTime)
        );
        assert_eq!(TYPE.name_of(TypeId::Fire), Some("Fire"));
        assert_eq!(TYPE.id_of("fire"), Some(TypeId::Fire));
    }

    #[test]
    fn all_except_is_name_sorted() {
        let names = WEATHER.all_except(&[Weather::Snow]);
        assert_eq!(
            names,
            vec!["Clear", "Cloudy", "Fog", "Hail", "Rain", "Sandstorm", "Sunny"]
        );

        let mut sorted = MOVE.all_except(&[]);
        let unsorted = sorted.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, unsorted);
    }

    #[test]
    fn all_with_alts_attaches_alternates() {
        let names = MOVE.all_with_alts_except(&[]);
        let hi_jump_kick = names
            .iter()
            .find(|(name, _)| *name == "Hi Jump Kick")
            .unwrap();
        assert_eq!(hi_jump_kick.1, &["High Jump Kick"]);
    }
}
