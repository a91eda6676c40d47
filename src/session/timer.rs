//! Deferred flash settling for hosts that own a shared session.

use super::{Session, SessionSnapshot};
use std::sync::{Arc, Mutex};
use std::time::Instant;

pub type SharedSession = Arc<Mutex<Session>>;

/// Sleeps until each pending flash deadline in turn and settles the session,
/// handing a fresh snapshot to `on_settle` after every tick. Deadlines
/// started while sleeping are picked up on the next pass. Returns once no
/// flash is pending, or when the lock is poisoned.
pub async fn settle_pending<F>(session: SharedSession, mut on_settle: F)
where
    F: FnMut(SessionSnapshot),
{
    loop {
        let deadline = match session.lock() {
            Ok(guard) => guard.next_deadline(),
            Err(_) => return,
        };
        let Some(deadline) = deadline else {
            return;
        };

        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;

        let snapshot = match session.lock() {
            Ok(mut guard) => {
                guard.tick(Instant::now());
                guard.snapshot()
            }
            Err(_) => return,
        };
        on_settle(snapshot);
    }
}
