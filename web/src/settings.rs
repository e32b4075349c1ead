use memora_core::Difficulty;
use serde::{Deserialize, Serialize};

use crate::utils::StorageKey;

/// User preferences kept between visits. Scores are never stored.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub difficulty: Difficulty,
}

impl StorageKey for Settings {
    const KEY: &'static str = "memora:settings:v1";
}
