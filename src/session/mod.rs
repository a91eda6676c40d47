//! Session controller: owns every utility's state, the UI selection and the
//! side-effect sinks. Hosts call one method per user action and render the
//! returned [`SessionSnapshot`].

pub mod flash;
pub mod timer;


pub use flash::{Flash, FlashKind, FlashView, Flashes};
pub use timer::{settle_pending, SharedSession};

use crate::config::Config;
use crate::error::ToolkitResult;
use crate::fusion::{FusionMerger, FusionView};
use crate::identity::{IdentityLab, IdentityView};
use crate::names::NamePool;
use crate::platform::{self, Clipboard, KeyValueStore};
use crate::randomizer::{GroupRandomizer, RandomizerView};
use crate::reservoir::{Reservoir, ReservoirView};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Copier,
    Identity,
    Randomizer,
    SmartLink,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub tab: Tab,
    pub reservoir_visible: bool,
    pub reservoir: ReservoirView,
    pub identity: IdentityView,
    pub randomizer: RandomizerView,
    pub fusion: FusionView,
    pub flashes: FlashView,
}

/// All state of one UI session.
///
/// Randomness comes from a seeded [`StdRng`]: good enough for picking names
/// and blocks, not for anything secret. The cipher is never generated, only
/// stored as the user typed it.
pub struct Session {
    id: Uuid,
    config: Config,
    rng: StdRng,
    clipboard: Box<dyn Clipboard>,
    store: Box<dyn KeyValueStore>,
    tab: Tab,
    reservoir_visible: bool,
    reservoir: Reservoir,
    identity: IdentityLab,
    randomizer: GroupRandomizer,
    fusion: FusionMerger,
    flashes: Flashes,
}

impl Session {
    pub fn new(
        config: Config,
        pool: Arc<NamePool>,
        clipboard: Box<dyn Clipboard>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        Self::with_rng(config, pool, clipboard, store, StdRng::from_entropy())
    }

    /// Opens the configured store and starts a session on the built-in pool.
    pub fn open(config: Config, clipboard: Box<dyn Clipboard>) -> ToolkitResult<Self> {
        let store = platform::open_store(&config.storage)?;
        Ok(Self::new(config, Arc::new(NamePool::builtin()), clipboard, store))
    }

    pub fn with_rng(
        config: Config,
        pool: Arc<NamePool>,
        clipboard: Box<dyn Clipboard>,
        store: Box<dyn KeyValueStore>,
        mut rng: StdRng,
    ) -> Self {
        let identity_config = &config.identity;
        let cipher = match store.get(&identity_config.cipher_key) {
            Ok(Some(saved)) => saved,
            Ok(None) => identity_config.default_cipher.clone(),
            Err(e) => {
                warn!(error = %e, "could not read stored cipher, using default");
                identity_config.default_cipher.clone()
            }
        };

        let reservoir = Reservoir::new(pool.combined().to_vec());
        let identity = IdentityLab::new(pool, identity_config.mailbox_spec(), cipher, &mut rng);
        let id = Uuid::new_v4();
        info!(session = %id, country = %identity.country(), "session started");

        Self {
            id,
            config,
            rng,
            clipboard,
            store,
            tab: Tab::default(),
            reservoir_visible: true,
            reservoir,
            identity,
            randomizer: GroupRandomizer::default(),
            fusion: FusionMerger::default(),
            flashes: Flashes::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn reservoir(&self) -> &Reservoir {
        &self.reservoir
    }

    pub fn identity(&self) -> &IdentityLab {
        &self.identity
    }

    pub fn randomizer(&self) -> &GroupRandomizer {
        &self.randomizer
    }

    pub fn fusion(&self) -> &FusionMerger {
        &self.fusion
    }

    pub fn flashes(&self) -> &Flashes {
        &self.flashes
    }

    fn copy(&mut self, text: &str) {
        if let Err(e) = self.clipboard.write_text(text) {
            warn!(session = %self.id, error = %e, "clipboard write failed");
        }
    }

    fn flash(&mut self, kind: FlashKind, now: Instant) {
        let flash = &self.config.flash;
        let duration = match kind {
            FlashKind::Item => flash.item(),
            FlashKind::Name => flash.name(),
            FlashKind::Cipher => flash.cipher(),
            FlashKind::Selected => flash.selected(),
            FlashKind::Merged => flash.merged(),
        };
        self.flashes.get_mut(kind).start(now, duration);
    }

    /* ---------- navigation ---------- */

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn toggle_reservoir(&mut self) -> bool {
        self.reservoir_visible = !self.reservoir_visible;
        self.reservoir_visible
    }

    /* ---------- sequence stream ---------- */

    pub fn set_reservoir_source(&mut self, text: impl Into<String>) {
        self.reservoir.set_source(text);
    }

    pub fn clear_reservoir(&mut self) {
        self.reservoir.clear();
    }

    /// Copies the current item and steps forward (saturating).
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn reservoir_advance(&mut self) -> Option<String> {
        let item = self.reservoir.advance()?;
        self.copy(&item);
        self.flash(FlashKind::Item, Instant::now());
        Some(item)
    }

    pub fn reservoir_prev(&mut self) {
        self.reservoir.prev();
    }

    pub fn reservoir_next(&mut self) {
        self.reservoir.next();
    }

    /* ---------- identity lab ---------- */

    pub fn select_country(&mut self, country: impl Into<String>) {
        self.identity.select_country(country, &mut self.rng);
    }

    /// Copies the current name. The replacement is drawn once the flash
    /// settles; clicks during the flash are ignored.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn click_name(&mut self) -> Option<String> {
        let now = Instant::now();
        if self.flashes.name.is_active(now) {
            return None;
        }
        let name = self.identity.current_name()?.to_owned();
        self.copy(&name);
        self.flash(FlashKind::Name, now);
        Some(name)
    }

    pub fn rotate_emails(&mut self) {
        self.identity.rotate_emails(&mut self.rng);
    }

    pub fn copy_email(&mut self, index: usize) -> Option<String> {
        let address = self.identity.emails().get(index)?.to_owned();
        self.copy(&address);
        Some(address)
    }

    /// Updates the cipher and writes it through to the store.
    pub fn set_cipher(&mut self, cipher: impl Into<String>) {
        self.identity.set_cipher(cipher);
        let key = self.config.identity.cipher_key.clone();
        if let Err(e) = self.store.set(&key, self.identity.cipher()) {
            warn!(session = %self.id, error = %e, "could not persist cipher");
        }
    }

    pub fn copy_cipher(&mut self) -> String {
        let cipher = self.identity.cipher().to_owned();
        self.copy(&cipher);
        self.flash(FlashKind::Cipher, Instant::now());
        cipher
    }

    /* ---------- logic shuffler ---------- */

    pub fn set_group_input(&mut self, text: impl Into<String>) {
        self.randomizer.set_input(text);
    }

    #[instrument(skip_all, fields(session = %self.id))]
    pub fn pick_group(&mut self) -> Option<String> {
        let picked = self.randomizer.pick(&mut self.rng)?.to_owned();
        self.copy(&picked);
        self.flash(FlashKind::Selected, Instant::now());
        Some(picked)
    }

    pub fn copy_selected(&mut self) -> Option<String> {
        let selected = self.randomizer.selected()?.to_owned();
        self.copy(&selected);
        self.flash(FlashKind::Selected, Instant::now());
        Some(selected)
    }

    /* ---------- matrix fusion ---------- */

    pub fn set_sentences(&mut self, text: impl Into<String>) {
        self.fusion.set_sentences(text, &mut self.rng);
    }

    pub fn set_links(&mut self, text: impl Into<String>) {
        self.fusion.set_links(text, &mut self.rng);
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.fusion.set_shuffle(shuffle, &mut self.rng);
    }

    pub fn auto_fill(&mut self) -> bool {
        self.fusion.auto_fill(&mut self.rng)
    }

    pub fn wipe_links(&mut self) {
        self.fusion.wipe_links(&mut self.rng);
    }

    pub fn copy_merged(&mut self) -> Option<String> {
        let merged = self.fusion.result().to_owned();
        if merged.is_empty() {
            return None;
        }
        self.copy(&merged);
        self.flash(FlashKind::Merged, Instant::now());
        Some(merged)
    }

    /* ---------- timers ---------- */

    /// Settles every flash expired at `now`. A settled name flash draws the
    /// next name.
    pub fn tick(&mut self, now: Instant) {
        self.flashes.item.settle(now);
        self.flashes.cipher.settle(now);
        self.flashes.selected.settle(now);
        self.flashes.merged.settle(now);
        if self.flashes.name.settle(now) {
            self.identity.draw(&mut self.rng);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.flashes.next_deadline()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            tab: self.tab,
            reservoir_visible: self.reservoir_visible,
            reservoir: self.reservoir.view(),
            identity: self.identity.view(),
            randomizer: self.randomizer.view(),
            fusion: self.fusion.view(),
            flashes: self.flashes.view(Instant::now()),
        }
    }
}
