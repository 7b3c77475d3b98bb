//! User preferences.
//!
//! Preferences are layered: the built-in defaults in `default.yaml` first,
//! then the user's preferences file on top.

#![allow(missing_docs)] // field docs carry the meaning

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate strum;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
pub mod persist;
mod scramble;

pub use animation::*;
pub use scramble::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub scramble: ScramblePreferences,
}
impl Preferences {
    /// Loads preferences from `path`, or from the default user preferences file
    /// if `path` is `None`. If loading fails, then the existing file is backed
    /// up (if possible) and the default preferences are returned.
    pub fn load(path: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder();

        // Load default preferences.
        let default_config_source = config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT);
        config = config.add_source(default_config_source);

        // Load user preferences.
        let user_path = match path {
            Some(p) => Some(p.to_owned()),
            None => match persist::prefs_file_path() {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("Error locating user preferences: {e}");
                    None
                }
            },
        };
        if let Some(p) = &user_path {
            config = config.add_source(persist::user_config_source(p));
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                if let Some(p) = &user_path {
                    persist::backup_prefs_file(p);
                }
                DEFAULT_PREFS.clone()
            })
    }

    /// Saves preferences to `path`, or to the default user preferences file if
    /// `path` is `None`.
    pub fn save(&self, path: Option<&Path>) -> eyre::Result<()> {
        match path {
            Some(p) => persist::save(p, self),
            None => persist::save(&persist::prefs_file_path()?, self),
        }
    }
}
