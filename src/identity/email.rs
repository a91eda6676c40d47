//! Throwaway mailbox addresses: `<prefix><token>@<domain>`.

use rand::Rng;
use serde::Serialize;

/// Lowercase ASCII letters followed by digits, 36 symbols.
pub const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Shape of every generated address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxSpec {
    pub prefix: String,
    pub domain: String,
    pub batch_size: usize,
    pub token_length: usize,
}

impl MailboxSpec {
    pub fn address(&self, token: &str) -> String {
        format!("{}{}@{}", self.prefix, token, self.domain)
    }
}

/// `length` symbols drawn uniformly, with replacement, from [`TOKEN_ALPHABET`].
pub fn random_token<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// A batch of addresses regenerated wholesale. Duplicates are not filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailBatch(Vec<String>);

impl EmailBatch {
    pub fn generate<R: Rng + ?Sized>(spec: &MailboxSpec, rng: &mut R) -> Self {
        Self(
            (0..spec.batch_size)
                .map(|_| spec.address(&random_token(rng, spec.token_length)))
                .collect(),
        )
    }

    pub fn addresses(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
