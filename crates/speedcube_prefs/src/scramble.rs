use serde::{Deserialize, Serialize};
use speedcube_core::DEFAULT_SCRAMBLE_LENGTH;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScramblePreferences {
    /// Number of twists in a scramble.
    pub length: u32,
    /// Whether to scramble the cube when a session starts.
    pub on_startup: bool,
}
impl Default for ScramblePreferences {
    fn default() -> Self {
        Self {
            length: DEFAULT_SCRAMBLE_LENGTH,
            on_startup: true,
        }
    }
}
