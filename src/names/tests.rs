use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn small_pool() -> NamePool {
    NamePool::from_table(vec![
        ("Atlantis".to_string(), vec!["Ana".to_string(), "Bo".to_string()]),
        ("Lemuria".to_string(), vec!["Cy".to_string()]),
    ])
}

#[test]
fn builtin_table_is_populated() {
    let pool = NamePool::builtin();
    assert_eq!(pool.default_country(), "Australia");
    assert!(pool.countries().count() >= 2);
    let per_country: usize = pool
        .countries()
        .map(|c| pool.get(c).map_or(0, |names| names.len()))
        .sum();
    assert_eq!(pool.combined().len(), per_country);
}

#[test]
fn known_country_draws_from_its_own_pool() {
    let pool = NamePool::builtin();
    let mut rng = StdRng::seed_from_u64(7);
    for country in pool.countries() {
        let names = pool.get(country).unwrap();
        for _ in 0..50 {
            let drawn = pool.draw(country, &mut rng).unwrap();
            assert!(names.iter().any(|n| n == drawn), "{drawn} not in {country}");
        }
    }
}

#[test]
fn unknown_country_draws_from_combined_pool() {
    let pool = small_pool();
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen_lemurian = false;
    for _ in 0..200 {
        let drawn = pool.draw("Mu", &mut rng).unwrap();
        assert!(pool.combined().iter().any(|n| n == drawn));
        seen_lemurian |= drawn == "Cy";
    }
    assert!(seen_lemurian);
}

#[test]
fn repeated_country_entries_are_merged() {
    let pool = NamePool::from_table(vec![
        ("A".to_string(), vec!["x".to_string()]),
        ("A".to_string(), vec!["y".to_string()]),
    ]);
    assert_eq!(pool.countries().collect::<Vec<_>>(), vec!["A"]);
    assert_eq!(pool.get("A").unwrap(), ["x".to_string(), "y".to_string()]);
}

#[test]
fn empty_table_falls_back() {
    let pool = NamePool::default();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(pool.default_country(), FALLBACK_COUNTRY);
    assert!(pool.draw("Anywhere", &mut rng).is_none());
}
