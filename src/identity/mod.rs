//! Identity lab: random names per country, rotating mailbox batch and the
//! locally kept cipher string.

pub mod email;

#[cfg(test)]
mod tests;

pub use email::{random_token, EmailBatch, MailboxSpec, TOKEN_ALPHABET};

use crate::names::NamePool;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct IdentityLab {
    pool: Arc<NamePool>,
    spec: MailboxSpec,
    country: String,
    current_name: Option<String>,
    emails: EmailBatch,
    /// Plaintext convenience text shown beside the mailboxes. Not a credential.
    cipher: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdentityView {
    pub country: String,
    pub countries: Vec<String>,
    pub name: Option<String>,
    pub emails: EmailBatch,
    pub cipher: String,
}

impl IdentityLab {
    /// Starts on the pool's default country with a fresh name and batch.
    pub fn new<R: Rng + ?Sized>(
        pool: Arc<NamePool>,
        spec: MailboxSpec,
        cipher: String,
        rng: &mut R,
    ) -> Self {
        let country = pool.default_country().to_owned();
        let mut lab = Self {
            pool,
            spec,
            country,
            current_name: None,
            emails: EmailBatch::default(),
            cipher,
        };
        lab.draw(rng);
        lab.rotate_emails(rng);
        lab
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    pub fn emails(&self) -> &EmailBatch {
        &self.emails
    }

    pub fn cipher(&self) -> &str {
        &self.cipher
    }

    pub fn spec(&self) -> &MailboxSpec {
        &self.spec
    }

    /// Switches country, then rerolls both the name and the mailbox batch.
    /// Unknown countries are accepted and draw from the combined pool.
    pub fn select_country<R: Rng + ?Sized>(&mut self, country: impl Into<String>, rng: &mut R) {
        self.country = country.into();
        self.draw(rng);
        self.rotate_emails(rng);
    }

    /// Draws a new current name for the selected country.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&str> {
        self.current_name = self.pool.draw(&self.country, rng).map(str::to_owned);
        debug!(country = %self.country, name = ?self.current_name, "name drawn");
        self.current_name.as_deref()
    }

    pub fn rotate_emails<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.emails = EmailBatch::generate(&self.spec, rng);
    }

    pub fn set_cipher(&mut self, cipher: impl Into<String>) {
        self.cipher = cipher.into();
    }

    pub fn view(&self) -> IdentityView {
        IdentityView {
            country: self.country.clone(),
            countries: self.pool.countries().map(str::to_owned).collect(),
            name: self.current_name.clone(),
            emails: self.emails.clone(),
            cipher: self.cipher.clone(),
        }
    }
}
