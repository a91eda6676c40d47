// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

use crate::session::{settle_pending, Session, SessionSnapshot, SharedSession, Tab};
use tauri::{command, AppHandle, Emitter, State};

/// Emitted with a fresh snapshot whenever a flash settles on its own.
pub const SESSION_EVENT: &str = "session-updated";

/// Runs `action` under the session lock, then keeps settling flashes until
/// none is pending so the webview hears about each one.
fn dispatch<F>(
    app: &AppHandle,
    state: &State<'_, SharedSession>,
    action: F,
) -> Result<SessionSnapshot, String>
where
    F: FnOnce(&mut Session),
{
    let shared: SharedSession = state.inner().clone();
    let (snapshot, pending) = {
        let mut session = shared.lock().map_err(|e| e.to_string())?;
        action(&mut session);
        (session.snapshot(), session.next_deadline().is_some())
    };

    if pending {
        let app = app.clone();
        tauri::async_runtime::spawn(settle_pending(shared, move |snapshot| {
            let _ = app.emit(SESSION_EVENT, snapshot);
        }));
    }

    Ok(snapshot)
}

/* ---------- 1.  NAVIGATION ---------- */

#[command]
pub fn session_snapshot(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |_| {})
}

#[command]
pub fn select_tab(app: AppHandle, state: State<'_, SharedSession>, tab: Tab) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.select_tab(tab))
}

#[command]
pub fn toggle_reservoir(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| {
        s.toggle_reservoir();
    })
}

/* ---------- 2.  SEQUENCE STREAM ---------- */

#[command]
pub fn set_reservoir_source(
    app: AppHandle,
    state: State<'_, SharedSession>,
    text: String,
) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.set_reservoir_source(text))
}

#[command]
pub fn clear_reservoir(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.clear_reservoir())
}

#[command]
pub fn reservoir_advance(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| {
        s.reservoir_advance();
    })
}

#[command]
pub fn reservoir_prev(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.reservoir_prev())
}

#[command]
pub fn reservoir_next(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.reservoir_next())
}

/* ---------- 3.  IDENTITY LAB ---------- */

#[command]
pub fn select_country(
    app: AppHandle,
    state: State<'_, SharedSession>,
    country: String,
) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.select_country(country))
}

#[command]
pub fn click_name(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| {
        s.click_name();
    })
}

#[command]
pub fn rotate_emails(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.rotate_emails())
}

#[command]
pub fn copy_email(
    app: AppHandle,
    state: State<'_, SharedSession>,
    index: usize,
) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| {
        s.copy_email(index);
    })
}

#[command]
pub fn set_cipher(
    app: AppHandle,
    state: State<'_, SharedSession>,
    cipher: String,
) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.set_cipher(cipher))
}

#[command]
pub fn copy_cipher(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| {
        s.copy_cipher();
    })
}

/* ---------- 4.  LOGIC SHUFFLER ---------- */

#[command]
pub fn set_group_input(
    app: AppHandle,
    state: State<'_, SharedSession>,
    text: String,
) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.set_group_input(text))
}

#[command]
pub fn pick_group(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| {
        s.pick_group();
    })
}

#[command]
pub fn copy_selected(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| {
        s.copy_selected();
    })
}

/* ---------- 5.  MATRIX FUSION ---------- */

#[command]
pub fn set_sentences(
    app: AppHandle,
    state: State<'_, SharedSession>,
    text: String,
) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.set_sentences(text))
}

#[command]
pub fn set_links(
    app: AppHandle,
    state: State<'_, SharedSession>,
    text: String,
) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.set_links(text))
}

#[command]
pub fn set_shuffle(
    app: AppHandle,
    state: State<'_, SharedSession>,
    shuffle: bool,
) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.set_shuffle(shuffle))
}

#[command]
pub fn auto_fill(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| {
        s.auto_fill();
    })
}

#[command]
pub fn wipe_links(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| s.wipe_links())
}

#[command]
pub fn copy_merged(app: AppHandle, state: State<'_, SharedSession>) -> Result<SessionSnapshot, String> {
    dispatch(&app, &state, |s| {
        s.copy_merged();
    })
}
