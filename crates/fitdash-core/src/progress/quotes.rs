use rand::prelude::*;

pub const QUOTES: [&str; 5] = [
    "The only bad workout is the one that didn't happen.",
    "Believe you can and you're halfway there.",
    "Strive for progress, not perfection.",
    "Your body can stand almost anything. It's your mind that you have to convince.",
    "The miracle isn't that I finished. The miracle is that I had the courage to start.",
];

/// Pick a motivational quote.
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES[rng.gen_range(0..QUOTES.len())]
}

/// Pick a motivational quote with the thread-local RNG.
pub fn motivational_quote() -> &'static str {
    random_quote(&mut thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_picks_from_the_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(QUOTES.contains(&random_quote(&mut rng)));
        }
    }
}
