//! The dungeon RNG abstraction.
//!
//! The engine delegates every random decision to a replaceable source so
//! that calculations can be replayed deterministically and driven from
//! tests. `MockDungeonRng` is the scripted implementation used by tools and
//! the test suite; it also records what the engine asked for, which is how
//! hit probabilities are reported back to callers.

use std::any::Any;

use crate::fixed::Fx64;

/// Source of the random decisions made during a damage calculation.
pub trait DungeonRng {
    /// Whether Huge Power / Pure Power fires this attack (in-game: a 33%
    /// roll).
    fn roll_huge_pure_power(&mut self) -> bool;

    /// Whether the attack is a critical hit, given the computed chance out
    /// of 100.
    fn roll_critical_hit(&mut self, crit_chance: i32) -> bool;

    /// The damage variance multiplier (in-game: uniform over
    /// `[0xE000, 0x11FFF]` sixteenths, i.e. 87.5%..112.5%).
    fn roll_damage_variance(&mut self) -> Fx64;

    /// Whether Forewarn blocks the attack (in-game: a 20% roll).
    fn roll_forewarn(&mut self) -> bool;

    /// Whether the attack passes a hit check, given the computed chance out
    /// of 100. A move may check twice; `second_check` distinguishes them.
    fn roll_hit_chance(&mut self, hit_chance: i32, second_check: bool) -> bool;

    /// Clone into a boxed trait object, so battlefield state can be copied
    /// for independent what-if runs.
    fn clone_box(&self) -> Box<dyn DungeonRng>;

    /// Downcast support for inspecting a scripted source in tests.
    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn DungeonRng> {
    fn clone(&self) -> Box<dyn DungeonRng> {
        self.clone_box()
    }
}

/// Scripted RNG with fixed outcomes and a variance dial, recording each
/// decision the engine requested.
#[derive(Clone, Debug)]
pub struct MockDungeonRng {
    /// Scripted outcome for the Huge Power / Pure Power roll.
    pub huge_pure_power: bool,
    /// Scripted outcome for the critical-hit roll.
    pub critical_hit: bool,
    /// Damage variance position in [0, 1]; 0.5 is the exact middle of the
    /// variance band.
    pub variance_dial: f64,

    crit_chance: i32,
    forewarn_rolled: bool,
    hit_chance1: Option<i32>,
    hit_chance2: Option<i32>,
}

impl MockDungeonRng {
    pub fn new(huge_pure_power: bool, critical_hit: bool, variance_dial: f64) -> MockDungeonRng {
        MockDungeonRng {
            huge_pure_power,
            critical_hit,
            variance_dial,
            crit_chance: 0,
            forewarn_rolled: false,
            hit_chance1: None,
            hit_chance2: None,
        }
    }

    /// The crit chance the engine computed for the last calculation.
    pub fn computed_crit_chance(&self) -> i32 {
        self.crit_chance
    }

    /// Whether the engine consulted the Forewarn roll.
    pub fn forewarn_was_rolled(&self) -> bool {
        self.forewarn_rolled
    }

    /// The chance handed to the first (pre-effect) hit check, if it ran.
    pub fn hit_chance1(&self) -> Option<i32> {
        self.hit_chance1
    }

    /// The chance handed to the second hit check, if it ran.
    pub fn hit_chance2(&self) -> Option<i32> {
        self.hit_chance2
    }

    /// Combined hit chance of both checks plus Forewarn, scaled by 1e6.
    pub fn combined_hit_chance_raw(&self) -> i32 {
        self.hit_chance1.unwrap_or(100).min(100)
            * self.hit_chance2.unwrap_or(100).min(100)
            * if self.forewarn_rolled { 80 } else { 100 }
    }

    pub fn combined_hit_probability(&self) -> f64 {
        self.combined_hit_chance_raw() as f64 / 1e6
    }

    pub fn combined_hit_percentage(&self) -> f64 {
        self.combined_hit_chance_raw() as f64 / 1e4
    }
}

impl Default for MockDungeonRng {
    fn default() -> MockDungeonRng {
        MockDungeonRng::new(false, false, 0.0)
    }
}

impl DungeonRng for MockDungeonRng {
    fn roll_huge_pure_power(&mut self) -> bool {
        self.huge_pure_power
    }

    fn roll_critical_hit(&mut self, crit_chance: i32) -> bool {
        self.crit_chance = crit_chance;
        self.critical_hit
    }

    fn roll_damage_variance(&mut self) -> Fx64 {
        // The dial picks a point in the in-game roll's range. This is the
        // one spot where host floating point touches the engine, and it
        // only shapes the scripted input, never the calculation itself.
        let outcome = (self.variance_dial * 0x3FFF as f64).round() as i64;
        let outcome = outcome.clamp(0, 0x3FFF) as u32;
        Fx64::from_parts(0, outcome + 0xE000)
    }

    fn roll_forewarn(&mut self) -> bool {
        self.forewarn_rolled = true;
        false
    }

    fn roll_hit_chance(&mut self, hit_chance: i32, second_check: bool) -> bool {
        if second_check {
            self.hit_chance2 = Some(hit_chance);
        } else {
            self.hit_chance1 = Some(hit_chance);
        }
        true
    }

    fn clone_box(&self) -> Box<dyn DungeonRng> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
