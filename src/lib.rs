//! Offline text toolkit: a sequence copier, an identity lab, a block
//! shuffler and a sentence/link fusion matrix, driven by one [`session::Session`].

pub mod config;
pub mod error;
pub mod fusion;
pub mod identity;
pub mod logging;
pub mod names;
pub mod platform;
pub mod randomizer;
pub mod reservoir;
pub mod session;
pub mod text;

#[cfg(feature = "desktop")]
mod commands;

pub use config::Config;
pub use error::{ToolkitError, ToolkitResult};
pub use session::{Session, SessionSnapshot, SharedSession, Tab};

#[cfg(feature = "desktop")]
fn build_session() -> anyhow::Result<Session> {
    use anyhow::Context;

    let config = Config::load().context("failed to load toolkit configuration")?;
    logging::init(&config.log_level);
    let clipboard = Box::new(platform::SystemClipboard::new());
    Session::open(config, clipboard).context("failed to open toolkit session")
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use crate::commands::*;
    use std::sync::{Arc, Mutex};

    let session = build_session().expect("error while initialising toolkit session");
    let shared: SharedSession = Arc::new(Mutex::new(session));

    tauri::Builder::default()
        .manage(shared)
        .invoke_handler(tauri::generate_handler![
            session_snapshot,
            select_tab,
            toggle_reservoir,
            set_reservoir_source,
            clear_reservoir,
            reservoir_advance,
            reservoir_prev,
            reservoir_next,
            select_country,
            click_name,
            rotate_emails,
            copy_email,
            set_cipher,
            copy_cipher,
            set_group_input,
            pick_group,
            copy_selected,
            set_sentences,
            set_links,
            set_shuffle,
            auto_fill,
            wipe_links,
            copy_merged
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
