use chrono::Datelike;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use demosynth_core::{
    CITIES, DeclarationGroup, FEMALE_FIRST_NAMES, MALE_FIRST_NAMES, Person, REFERENCE_YEAR,
    SURNAMES, classify_id,
};

use crate::ids::IdSequence;
use crate::scalars::{random_amount, random_birth_date};

/// Annual income range in pesos.
pub const INCOME_MIN: f64 = 10_000_000.0;
pub const INCOME_MAX: f64 = 500_000_000.0;
/// Upper bound on net worth in pesos.
pub const NET_WORTH_MAX: f64 = 2_000_000_000.0;
/// Debt never exceeds this share of net worth.
pub const MAX_DEBT_RATIO: f64 = 0.7;
/// Income above which a person may be obligated to file a declaration.
pub const FILING_INCOME_THRESHOLD: f64 = 50_000_000.0;

/// Synthesizes fictitious persons from the fixed reference lists.
///
/// Owns both the random stream and the id sequence, so one synthesizer is
/// one generation run: ids are unique and increasing within it, and a
/// seeded synthesizer reproduces the same collection every time.
#[derive(Debug)]
pub struct Synthesizer {
    rng: ChaCha8Rng,
    ids: IdSequence,
}

impl Synthesizer {
    /// Synthesizer with an OS-entropy seed.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }

    /// Deterministic synthesizer for reproducible collections.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            ids: IdSequence::new(),
        }
    }

    /// Replace the id sequence, e.g. to continue numbering across runs.
    pub fn with_ids(mut self, ids: IdSequence) -> Self {
        self.ids = ids;
        self
    }

    /// Assemble one fully-populated person.
    pub fn generate_person(&mut self) -> Person {
        let first_name = if self.rng.random_bool(0.5) {
            pick(&mut self.rng, MALE_FIRST_NAMES)
        } else {
            pick(&mut self.rng, FEMALE_FIRST_NAMES)
        };
        // Two independent surname draws; repeats are allowed.
        let last_name = format!(
            "{} {}",
            pick(&mut self.rng, SURNAMES),
            pick(&mut self.rng, SURNAMES)
        );

        let id = self.ids.next_id();
        let birth_city = pick(&mut self.rng, CITIES);
        let birth_date = random_birth_date(&mut self.rng);
        let age = (REFERENCE_YEAR - birth_date.year()) as u32;

        // Freshly issued ids always have a numeric two-digit suffix.
        let declaration_group = classify_id(&id).unwrap_or(DeclarationGroup::A);

        let annual_income = random_amount(&mut self.rng, INCOME_MIN, INCOME_MAX);
        let net_worth = random_amount(&mut self.rng, 0.0, NET_WORTH_MAX);
        // Debt is correlated with net worth, so it is sampled after it.
        let debt = random_amount(&mut self.rng, 0.0, net_worth * MAX_DEBT_RATIO);
        let is_filing_taxpayer =
            annual_income > FILING_INCOME_THRESHOLD && self.rng.random_range(0..100) > 30;

        Person {
            id,
            first_name,
            last_name,
            birth_city,
            birth_date,
            age,
            declaration_group,
            annual_income,
            net_worth,
            debt,
            is_filing_taxpayer,
        }
    }

    /// Generate `n` persons in issuance order. The interactive boundary
    /// rejects non-positive counts before calling this.
    pub fn generate_collection(&mut self, n: usize) -> Vec<Person> {
        let mut people = Vec::with_capacity(n);
        for _ in 0..n {
            people.push(self.generate_person());
        }
        info!(count = people.len(), "collection generated");
        people
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

fn pick(rng: &mut ChaCha8Rng, list: &[&str]) -> String {
    list.choose(rng).copied().unwrap_or_default().to_string()
}
