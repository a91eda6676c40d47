use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;

fn spec() -> MailboxSpec {
    MailboxSpec {
        prefix: "https://mnx-family.com/mailbox/".to_string(),
        domain: "mnx-family.com".to_string(),
        batch_size: 5,
        token_length: 8,
    }
}

fn lab(seed: u64) -> (IdentityLab, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let lab = IdentityLab::new(
        Arc::new(NamePool::builtin()),
        spec(),
        "6tyrqjqk".to_string(),
        &mut rng,
    );
    (lab, rng)
}

#[test]
fn tokens_use_the_lowercase_alphanumeric_alphabet() {
    let mut rng = StdRng::seed_from_u64(3);
    let pattern = Regex::new("^[a-z0-9]{8}$").unwrap();
    for _ in 0..500 {
        assert!(pattern.is_match(&random_token(&mut rng, 8)));
    }
}

#[test]
fn batch_has_exact_size_and_shape() {
    let mut rng = StdRng::seed_from_u64(5);
    let pattern =
        Regex::new(r"^https://mnx-family\.com/mailbox/[a-z0-9]{8}@mnx-family\.com$").unwrap();
    for _ in 0..50 {
        let batch = EmailBatch::generate(&spec(), &mut rng);
        assert_eq!(batch.len(), 5);
        assert!(batch.addresses().iter().all(|a| pattern.is_match(a)));
    }
}

#[test]
fn rotation_replaces_the_whole_batch() {
    let (mut lab, mut rng) = lab(9);
    let before = lab.emails().clone();
    lab.rotate_emails(&mut rng);
    assert_eq!(lab.emails().len(), 5);
    assert_ne!(&before, lab.emails());
}

#[test]
fn starts_on_first_country_with_a_name() {
    let (lab, _) = lab(1);
    assert_eq!(lab.country(), "Australia");
    let name = lab.current_name().unwrap();
    assert!(NamePool::builtin().get("Australia").unwrap().iter().any(|n| n == name));
    assert_eq!(lab.cipher(), "6tyrqjqk");
}

#[test]
fn selecting_country_rerolls_from_that_pool() {
    let (mut lab, mut rng) = lab(2);
    let pool = NamePool::builtin();
    lab.select_country("Japan", &mut rng);
    assert_eq!(lab.country(), "Japan");
    let name = lab.current_name().unwrap();
    assert!(pool.get("Japan").unwrap().iter().any(|n| n == name));
}

#[test]
fn unknown_country_uses_combined_pool() {
    let (mut lab, mut rng) = lab(4);
    lab.select_country("Atlantis", &mut rng);
    let name = lab.current_name().unwrap().to_owned();
    assert!(NamePool::builtin().combined().contains(&name));
}

#[test]
fn view_lists_countries_in_table_order() {
    let (lab, _) = lab(6);
    let view = lab.view();
    assert_eq!(view.countries.first().map(String::as_str), Some("Australia"));
    assert_eq!(view.emails.len(), 5);
}
