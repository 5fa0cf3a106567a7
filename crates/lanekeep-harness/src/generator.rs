//! Seeded generation of legal games.

use lanekeep_score::{FRAME_COUNT, PIN_COUNT, Scorecard};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default chance that a delivery at a full rack is a strike.
const DEFAULT_STRIKE_CHANCE: f64 = 0.25;

/// Default chance that a second delivery clears the remaining pins.
const DEFAULT_SPARE_CHANCE: f64 = 0.3;

/// Generates legal throw sequences from a seed.
///
/// Pin counts are drawn uniformly from what is still standing, with extra
/// weight on strikes and spares so that bonus lookahead paths are exercised
/// far more often than uniform draws would manage.
pub struct GameGenerator {
    rng: ChaCha8Rng,
    strike_chance: f64,
    spare_chance: f64,
}

impl GameGenerator {
    /// Create a generator with the given seed and default weights.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            strike_chance: DEFAULT_STRIKE_CHANCE,
            spare_chance: DEFAULT_SPARE_CHANCE,
        }
    }

    /// Override the strike weight. Clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_strike_chance(mut self, chance: f64) -> Self {
        self.strike_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Override the spare weight. Clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_spare_chance(mut self, chance: f64) -> Self {
        self.spare_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Flat list of deliveries for one complete, legal game.
    pub fn throws(&mut self) -> Vec<u8> {
        let mut throws = Vec::with_capacity(21);

        for _ in 0..FRAME_COUNT - 1 {
            let first = self.delivery(PIN_COUNT);
            throws.push(first);
            if first != PIN_COUNT {
                throws.push(self.follow_up(PIN_COUNT - first));
            }
        }

        let first = self.delivery(PIN_COUNT);
        throws.push(first);
        let second = if first == PIN_COUNT {
            self.delivery(PIN_COUNT)
        } else {
            self.follow_up(PIN_COUNT - first)
        };
        throws.push(second);

        if first == PIN_COUNT {
            let standing = if second == PIN_COUNT { PIN_COUNT } else { PIN_COUNT - second };
            let third = if standing == PIN_COUNT {
                self.delivery(PIN_COUNT)
            } else {
                self.follow_up(standing)
            };
            throws.push(third);
        } else if first + second == PIN_COUNT {
            throws.push(self.delivery(PIN_COUNT));
        }

        throws
    }

    /// One complete, legal, scored game.
    pub fn legal_game(&mut self) -> Scorecard {
        let throws = self.throws();
        tracing::trace!(deliveries = throws.len(), "generated game");
        match Scorecard::from_throws(&throws) {
            Ok(card) => card,
            Err(error) => unreachable!("generated {} throws do not fit a game: {error}", throws.len()),
        }
    }

    /// A legal game cut off after a random number of deliveries.
    pub fn partial_game(&mut self) -> Scorecard {
        let throws = self.throws();
        let entered = self.rng.gen_range(0..=throws.len());
        match Scorecard::from_throws(&throws[..entered]) {
            Ok(card) => card,
            Err(error) => unreachable!("prefix of a legal game does not fit: {error}"),
        }
    }

    /// First delivery at a rack of `standing` pins.
    fn delivery(&mut self, standing: u8) -> u8 {
        if self.rng.gen_bool(self.strike_chance) {
            standing
        } else {
            self.rng.gen_range(0..=standing)
        }
    }

    /// Second delivery at the pins left by the first.
    fn follow_up(&mut self, standing: u8) -> u8 {
        if self.rng.gen_bool(self.spare_chance) {
            standing
        } else {
            self.rng.gen_range(0..=standing)
        }
    }
}
