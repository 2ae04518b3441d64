//! The caught collection and the catch roll.

use crate::catalog::Pokemon;
use parking_lot::Mutex;
use rand::Rng;
use std::collections::BTreeMap;

/// A roll below this catches.
pub const CATCH_THRESHOLD: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    Caught,
    Escaped,
    AlreadyCaught,
}

/// Roll uniformly in `0..=base_experience`. Higher base experience means a
/// smaller share of rolls lands under [`CATCH_THRESHOLD`].
pub fn roll_catch<R: Rng + ?Sized>(rng: &mut R, base_experience: u32) -> u32 {
    rng.gen_range(0..=base_experience)
}

/// Caught records keyed by name. Has its own lock, unrelated to the request cache.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: Mutex<BTreeMap<String, Pokemon>>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pokemon` if `roll` is under the threshold and it is not already caught.
    pub fn try_catch(&self, pokemon: Pokemon, roll: u32) -> CatchOutcome {
        let mut caught = self.caught.lock();
        if caught.contains_key(&pokemon.name) {
            return CatchOutcome::AlreadyCaught;
        }
        if roll >= CATCH_THRESHOLD {
            return CatchOutcome::Escaped;
        }

        log::debug!("Caught {}", pokemon.name);
        caught.insert(pokemon.name.clone(), pokemon);
        CatchOutcome::Caught
    }

    pub fn get(&self, name: &str) -> Option<Pokemon> {
        self.caught.lock().get(name).cloned()
    }

    /// Caught names in alphabetical order.
    pub fn names(&self) -> Vec<String> {
        self.caught.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.caught.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.lock().is_empty()
    }
}
