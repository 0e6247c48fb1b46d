//! Item identifiers and item-class predicates.

/// Item identifiers for the items the damage pipeline can observe: thrown
/// projectiles, held battle items, the aura bow family, and the berries and
/// seeds consulted by Natural Gift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum ItemId {
    Nothing = 0,

    // Thrown projectiles
    Stick,
    IronThorn,
    SilverSpike,
    GoldFang,
    CacneaSpike,
    CorsolaTwig,
    GoldThorn,

    // Held battle items
    PowerBand,
    SpecialBand,
    DefScarf,
    ZincBand,
    MunchBelt,
    DetectBand,
    ScopeLens,
    PatsyBand,
    WeatherBand,
    XRaySpecs,
    YRaySpecs,
    SpaceGlobe,

    // Aura bows. The range check in `is_aura_bow` relies on these staying
    // contiguous from SilverBow through FuchsiaBow.
    SilverBow,
    BrownBow,
    RedBow,
    PinkBow,
    OrangeBow,
    YellowBow,
    LimeBow,
    GreenBow,
    ViridianBow,
    MintyBow,
    SkyBlueBow,
    BlueBow,
    CobaltBow,
    PurpleBow,
    VioletBow,
    FuchsiaBow,

    // Natural Gift fodder
    CheriBerry,
    ChestoBerry,
    PechaBerry,
    RawstBerry,
    AspearBerry,
    LeppaBerry,
    OranBerry,
    PersimBerry,
    LumBerry,
    SitrusBerry,
    BlastSeed,
}

impl Default for ItemId {
    fn default() -> ItemId {
        ItemId::Nothing
    }
}

/// Whether the item is one of the aura bows.
#[inline]
pub fn is_aura_bow(item: ItemId) -> bool {
    item >= ItemId::SilverBow && item <= ItemId::FuchsiaBow
}
