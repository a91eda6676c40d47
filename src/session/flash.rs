//! Copy-confirmation flashes: cosmetic deadlines with no effect on actions.

use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default)]
pub struct Flash {
    until: Option<Instant>,
}

impl Flash {
    /// Starts the flash, or restarts it when one is already running.
    pub fn start(&mut self, now: Instant, duration: Duration) {
        self.until = Some(now + duration);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.until
    }

    /// Clears an expired flash. Returns true exactly once per expiry.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.until {
            Some(until) if now >= until => {
                self.until = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlashKind {
    Item,
    Name,
    Cipher,
    Selected,
    Merged,
}

#[derive(Debug, Clone, Default)]
pub struct Flashes {
    pub item: Flash,
    pub name: Flash,
    pub cipher: Flash,
    pub selected: Flash,
    pub merged: Flash,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlashView {
    pub item: bool,
    pub name: bool,
    pub cipher: bool,
    pub selected: bool,
    pub merged: bool,
}

impl Flashes {
    pub fn get_mut(&mut self, kind: FlashKind) -> &mut Flash {
        match kind {
            FlashKind::Item => &mut self.item,
            FlashKind::Name => &mut self.name,
            FlashKind::Cipher => &mut self.cipher,
            FlashKind::Selected => &mut self.selected,
            FlashKind::Merged => &mut self.merged,
        }
    }

    fn all(&self) -> [&Flash; 5] {
        [&self.item, &self.name, &self.cipher, &self.selected, &self.merged]
    }

    /// Earliest pending deadline across every flash.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.all().iter().filter_map(|f| f.deadline()).min()
    }

    pub fn view(&self, now: Instant) -> FlashView {
        FlashView {
            item: self.item.is_active(now),
            name: self.name.is_active(now),
            cipher: self.cipher.is_active(now),
            selected: self.selected.is_active(now),
            merged: self.merged.is_active(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_lifecycle() {
        let now = Instant::now();
        let mut flash = Flash::default();
        assert!(!flash.is_active(now));

        flash.start(now, Duration::from_millis(300));
        assert!(flash.is_active(now + Duration::from_millis(299)));
        assert!(!flash.settle(now + Duration::from_millis(100)));
        assert!(flash.settle(now + Duration::from_millis(300)));
        assert!(!flash.settle(now + Duration::from_millis(400)));
        assert!(flash.deadline().is_none());
    }

    #[test]
    fn restart_extends_deadline() {
        let now = Instant::now();
        let mut flash = Flash::default();
        flash.start(now, Duration::from_millis(100));
        flash.start(now + Duration::from_millis(80), Duration::from_millis(100));
        assert!(flash.is_active(now + Duration::from_millis(150)));
    }

    #[test]
    fn next_deadline_is_the_earliest() {
        let now = Instant::now();
        let mut flashes = Flashes::default();
        assert!(flashes.next_deadline().is_none());
        flashes.merged.start(now, Duration::from_millis(1000));
        flashes.get_mut(FlashKind::Item).start(now, Duration::from_millis(300));
        assert_eq!(flashes.next_deadline(), Some(now + Duration::from_millis(300)));
        assert!(flashes.view(now).item);
        assert!(!flashes.view(now).name);
    }
}
