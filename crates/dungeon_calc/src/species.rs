//! Species identifiers and the species reference catalog.
//!
//! The engine consumes species data (gender, types, abilities, weight)
//! through the lookup functions here. The catalog covers the species the
//! engine special-cases plus the roster used by the reference fixtures;
//! the full game roster is external reference data and out of scope.
//!
//! Each species has a secondary identifier mirroring the in-game table
//! layout: for gendered species the secondary entry is the female form,
//! for single-gender and genderless species it is invalid.

use crate::abilities::AbilityId;
use crate::fixed::Fx32;
use crate::types::TypeId;

/// Monster gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Gender {
    Invalid = 0,
    Male,
    Female,
    Genderless,
}

impl Default for Gender {
    fn default() -> Gender {
        Gender::Invalid
    }
}

/// Species identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SpeciesId {
    None = 0,
    Bulbasaur,
    Venusaur,
    Charmander,
    Charizard,
    Pikachu,
    Kangaskhan,
    Gastly,
    Scizor,
    Bronzong,
    Flygon,
    Latios,
    Dialga,
    DeoxysNormal,
    DeoxysAttack,
    DeoxysDefense,
    DeoxysSpeed,
    GiratinaAltered,
    GiratinaOrigin,

    // Secondary table (female forms; invalid for single-gender species)
    BulbasaurSecondary,
    VenusaurSecondary,
    CharmanderSecondary,
    CharizardSecondary,
    PikachuSecondary,
    KangaskhanSecondary,
    GastlySecondary,
    ScizorSecondary,
    BronzongSecondary,
    FlygonSecondary,
    LatiosSecondary,
    DialgaSecondary,

    // Reserve identifiers repurposed to encode custom species per gender
    Reserve43,
    Reserve44,
    Reserve45,
}

impl Default for SpeciesId {
    fn default() -> SpeciesId {
        SpeciesId::None
    }
}

/// Intrinsic per-species reference data.
#[derive(Clone, Copy, Debug)]
pub struct SpeciesData {
    pub id: SpeciesId,
    pub gender: Gender,
    pub type1: TypeId,
    pub type2: TypeId,
    pub ability1: AbilityId,
    pub ability2: AbilityId,
    /// Weight scalar as a raw 256-scaled fixed-point value.
    pub weight: u16,
    pub size: u16,
}

const fn species(
    id: SpeciesId,
    gender: Gender,
    type1: TypeId,
    type2: TypeId,
    ability1: AbilityId,
    ability2: AbilityId,
    weight: u16,
    size: u16,
) -> SpeciesData {
    SpeciesData {
        id,
        gender,
        type1,
        type2,
        ability1,
        ability2,
        weight,
        size,
    }
}

static SPECIES: &[SpeciesData] = &[
    species(
        SpeciesId::Bulbasaur,
        Gender::Male,
        TypeId::Grass,
        TypeId::Poison,
        AbilityId::Overgrow,
        AbilityId::Unknown,
        153,
        1,
    ),
    species(
        SpeciesId::Venusaur,
        Gender::Male,
        TypeId::Grass,
        TypeId::Poison,
        AbilityId::Overgrow,
        AbilityId::Unknown,
        332,
        2,
    ),
    species(
        SpeciesId::Charmander,
        Gender::Male,
        TypeId::Fire,
        TypeId::None,
        AbilityId::Blaze,
        AbilityId::Unknown,
        148,
        1,
    ),
    species(
        SpeciesId::Charizard,
        Gender::Male,
        TypeId::Fire,
        TypeId::Flying,
        AbilityId::Blaze,
        AbilityId::Unknown,
        327,
        2,
    ),
    species(
        SpeciesId::Pikachu,
        Gender::Male,
        TypeId::Electric,
        TypeId::None,
        AbilityId::Static,
        AbilityId::Unknown,
        160,
        1,
    ),
    species(
        SpeciesId::Kangaskhan,
        Gender::Female,
        TypeId::Normal,
        TypeId::None,
        AbilityId::EarlyBird,
        AbilityId::Scrappy,
        310,
        2,
    ),
    species(
        SpeciesId::Gastly,
        Gender::Male,
        TypeId::Ghost,
        TypeId::Poison,
        AbilityId::Levitate,
        AbilityId::Unknown,
        129,
        1,
    ),
    species(
        SpeciesId::Scizor,
        Gender::Male,
        TypeId::Bug,
        TypeId::Steel,
        AbilityId::Swarm,
        AbilityId::Technician,
        317,
        2,
    ),
    species(
        SpeciesId::Bronzong,
        Gender::Genderless,
        TypeId::Steel,
        TypeId::Psychic,
        AbilityId::Levitate,
        AbilityId::Heatproof,
        478,
        2,
    ),
    species(
        SpeciesId::Flygon,
        Gender::Male,
        TypeId::Ground,
        TypeId::Dragon,
        AbilityId::Levitate,
        AbilityId::Unknown,
        298,
        2,
    ),
    species(
        SpeciesId::Latios,
        Gender::Male,
        TypeId::Dragon,
        TypeId::Psychic,
        AbilityId::Levitate,
        AbilityId::Unknown,
        305,
        2,
    ),
    species(
        SpeciesId::Dialga,
        Gender::Genderless,
        TypeId::Steel,
        TypeId::Dragon,
        AbilityId::Pressure,
        AbilityId::Unknown,
        420,
        3,
    ),
    species(
        SpeciesId::DeoxysNormal,
        Gender::Genderless,
        TypeId::Psychic,
        TypeId::None,
        AbilityId::Pressure,
        AbilityId::Unknown,
        280,
        2,
    ),
    species(
        SpeciesId::DeoxysAttack,
        Gender::Genderless,
        TypeId::Psychic,
        TypeId::None,
        AbilityId::Pressure,
        AbilityId::Unknown,
        280,
        2,
    ),
    species(
        SpeciesId::DeoxysDefense,
        Gender::Genderless,
        TypeId::Psychic,
        TypeId::None,
        AbilityId::Pressure,
        AbilityId::Unknown,
        280,
        2,
    ),
    species(
        SpeciesId::DeoxysSpeed,
        Gender::Genderless,
        TypeId::Psychic,
        TypeId::None,
        AbilityId::Pressure,
        AbilityId::Unknown,
        280,
        2,
    ),
    species(
        SpeciesId::GiratinaAltered,
        Gender::Genderless,
        TypeId::Ghost,
        TypeId::Dragon,
        AbilityId::Pressure,
        AbilityId::Unknown,
        480,
        3,
    ),
    species(
        SpeciesId::GiratinaOrigin,
        Gender::Genderless,
        TypeId::Ghost,
        TypeId::Dragon,
        AbilityId::Levitate,
        AbilityId::Unknown,
        450,
        3,
    ),
    // Secondary table entries
    species(
        SpeciesId::BulbasaurSecondary,
        Gender::Female,
        TypeId::Grass,
        TypeId::Poison,
        AbilityId::Overgrow,
        AbilityId::Unknown,
        153,
        1,
    ),
    species(
        SpeciesId::VenusaurSecondary,
        Gender::Female,
        TypeId::Grass,
        TypeId::Poison,
        AbilityId::Overgrow,
        AbilityId::Unknown,
        332,
        2,
    ),
    species(
        SpeciesId::CharmanderSecondary,
        Gender::Female,
        TypeId::Fire,
        TypeId::None,
        AbilityId::Blaze,
        AbilityId::Unknown,
        148,
        1,
    ),
    species(
        SpeciesId::CharizardSecondary,
        Gender::Female,
        TypeId::Fire,
        TypeId::Flying,
        AbilityId::Blaze,
        AbilityId::Unknown,
        327,
        2,
    ),
    species(
        SpeciesId::PikachuSecondary,
        Gender::Female,
        TypeId::Electric,
        TypeId::None,
        AbilityId::Static,
        AbilityId::Unknown,
        160,
        1,
    ),
    // Kangaskhan is female-only, so the secondary slot is invalid
    species(
        SpeciesId::KangaskhanSecondary,
        Gender::Invalid,
        TypeId::Normal,
        TypeId::None,
        AbilityId::EarlyBird,
        AbilityId::Scrappy,
        310,
        2,
    ),
    species(
        SpeciesId::GastlySecondary,
        Gender::Female,
        TypeId::Ghost,
        TypeId::Poison,
        AbilityId::Levitate,
        AbilityId::Unknown,
        129,
        1,
    ),
    species(
        SpeciesId::ScizorSecondary,
        Gender::Female,
        TypeId::Bug,
        TypeId::Steel,
        AbilityId::Swarm,
        AbilityId::Technician,
        317,
        2,
    ),
    species(
        SpeciesId::BronzongSecondary,
        Gender::Invalid,
        TypeId::Steel,
        TypeId::Psychic,
        AbilityId::Levitate,
        AbilityId::Heatproof,
        478,
        2,
    ),
    species(
        SpeciesId::FlygonSecondary,
        Gender::Female,
        TypeId::Ground,
        TypeId::Dragon,
        AbilityId::Levitate,
        AbilityId::Unknown,
        298,
        2,
    ),
    // Latios is male-only, Dialga genderless; secondary slots are invalid
    species(
        SpeciesId::LatiosSecondary,
        Gender::Invalid,
        TypeId::Dragon,
        TypeId::Psychic,
        AbilityId::Levitate,
        AbilityId::Unknown,
        305,
        2,
    ),
    species(
        SpeciesId::DialgaSecondary,
        Gender::Invalid,
        TypeId::Steel,
        TypeId::Dragon,
        AbilityId::Pressure,
        AbilityId::Unknown,
        420,
        3,
    ),
];

/// Look up catalog data for a species. Reserve (custom) identifiers and
/// `None` have no catalog entry.
pub fn species_data(id: SpeciesId) -> Option<&'static SpeciesData> {
    SPECIES.iter().find(|data| data.id == id)
}

/// Gender of a species, `Invalid` for anything outside the catalog.
pub fn get_species_gender(id: SpeciesId) -> Gender {
    match SpeciesSpec::custom_species_gender(id) {
        Gender::Invalid => species_data(id).map_or(Gender::Invalid, |data| data.gender),
        custom => custom,
    }
}

/// Weight scalar of a species, used by Low Kick and Grass Knot.
pub fn get_species_weight(id: SpeciesId) -> Fx32 {
    Fx32::from_raw(species_data(id).map_or(0, |data| data.weight) as u32)
}

// ============================================================================
// Custom species
// ============================================================================

/// Intrinsic species info resolved for the engine, supporting custom
/// (non-catalog) species keyed on the reserve identifiers.
#[derive(Clone, Debug)]
pub struct SpeciesSpec {
    pub id: SpeciesId,
    pub types: [TypeId; 2],
    pub abilities: [AbilityId; 2],
}

impl SpeciesSpec {
    const CUSTOM_MALE: SpeciesId = SpeciesId::Reserve43;
    const CUSTOM_FEMALE: SpeciesId = SpeciesId::Reserve44;
    const CUSTOM_GENDERLESS: SpeciesId = SpeciesId::Reserve45;

    /// Describe a custom species; the gender is encoded into the reserve
    /// identifier space.
    pub fn custom(types: [TypeId; 2], abilities: [AbilityId; 2], gender: Gender) -> SpeciesSpec {
        let id = match gender {
            Gender::Male => Self::CUSTOM_MALE,
            Gender::Female => Self::CUSTOM_FEMALE,
            // Treat invalid like genderless
            Gender::Invalid | Gender::Genderless => Self::CUSTOM_GENDERLESS,
        };
        SpeciesSpec {
            id,
            types,
            abilities,
        }
    }

    /// Resolve a catalog species.
    pub fn from_id(id: SpeciesId) -> SpeciesSpec {
        match species_data(id) {
            Some(data) => SpeciesSpec {
                id,
                types: [data.type1, data.type2],
                abilities: [data.ability1, data.ability2],
            },
            None => SpeciesSpec {
                id,
                types: [TypeId::None, TypeId::None],
                abilities: [AbilityId::Unknown, AbilityId::Unknown],
            },
        }
    }

    /// Decode the custom species identifiers back to a gender.
    pub fn custom_species_gender(id: SpeciesId) -> Gender {
        match id {
            Self::CUSTOM_MALE => Gender::Male,
            Self::CUSTOM_FEMALE => Gender::Female,
            Self::CUSTOM_GENDERLESS => Gender::Genderless,
            _ => Gender::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_lookup() {
        assert_eq!(get_species_gender(SpeciesId::Bulbasaur), Gender::Male);
        assert_eq!(
            get_species_gender(SpeciesId::BulbasaurSecondary),
            Gender::Female
        );
        assert_eq!(get_species_gender(SpeciesId::Kangaskhan), Gender::Female);
        assert_eq!(
            get_species_gender(SpeciesId::KangaskhanSecondary),
            Gender::Invalid
        );
        assert_eq!(get_species_gender(SpeciesId::Dialga), Gender::Genderless);
        assert_eq!(
            get_species_gender(SpeciesId::DialgaSecondary),
            Gender::Invalid
        );
    }

    #[test]
    fn weight_lookup() {
        assert_eq!(get_species_weight(SpeciesId::Bulbasaur).val(), 0.59765625);
        assert_eq!(
            get_species_weight(SpeciesId::BulbasaurSecondary).val(),
            0.59765625
        );
        assert_eq!(get_species_weight(SpeciesId::Venusaur).val(), 1.296875);
    }

    #[test]
    fn species_spec_from_id() {
        let spec = SpeciesSpec::from_id(SpeciesId::Latios);
        assert_eq!(spec.id, SpeciesId::Latios);
        assert_eq!(spec.types[0], TypeId::Dragon);
        assert_eq!(spec.types[1], TypeId::Psychic);
        assert_eq!(spec.abilities[0], AbilityId::Levitate);
        assert_eq!(spec.abilities[1], AbilityId::Unknown);
    }

    #[test]
    fn custom_species_genders() {
        let spec = SpeciesSpec::custom(
            [TypeId::Fire, TypeId::None],
            [AbilityId::Blaze, AbilityId::Unknown],
            Gender::Female,
        );
        assert_eq!(SpeciesSpec::custom_species_gender(spec.id), Gender::Female);
        assert_eq!(
            SpeciesSpec::custom_species_gender(SpeciesId::Bulbasaur),
            Gender::Invalid
        );
    }
}
