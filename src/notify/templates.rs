// src/notify/templates.rs
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one reply template uniformly at random. `None` when no templates are configured.
pub fn pick_template<'a, R: Rng + ?Sized>(templates: &'a [String], rng: &mut R) -> Option<&'a str> {
    templates.choose(rng).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn drafts() -> Vec<String> {
        vec!["[Reply Draft 1]".to_string(), "[Reply Draft 2]".to_string()]
    }

    #[test]
    fn same_seed_same_choice() {
        let t = drafts();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(pick_template(&t, &mut a), pick_template(&t, &mut b));
        }
    }

    #[test]
    fn every_template_is_reachable() {
        let t = drafts();
        let mut rng = StdRng::seed_from_u64(7);
        let mut hits = [0usize; 2];
        for _ in 0..200 {
            match pick_template(&t, &mut rng) {
                Some("[Reply Draft 1]") => hits[0] += 1,
                Some("[Reply Draft 2]") => hits[1] += 1,
                other => panic!("unexpected pick: {other:?}"),
            }
        }
        assert!(hits.iter().all(|&h| h > 0), "hits = {hits:?}");
    }

    #[test]
    fn empty_set_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_template(&[], &mut rng), None);
    }
}
