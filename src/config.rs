/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{MovementRules, Square};

/// A complete game description: settings, piece rules, and portals.
///
/// This is the boundary contract with the core: the engine consumes these
/// aggregates as-is and performs no further bounds validation on them.
#[derive(Clone, Debug, Deserialize)]
pub struct GameConfig {
    pub game_settings: GameSettings,
    pub pieces: Vec<PieceConfig>,
    #[serde(default)]
    pub portals: Vec<PortalConfig>,
}

impl GameConfig {
    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Global game settings.
#[derive(Clone, Debug, Deserialize)]
pub struct GameSettings {
    /// Display name of the variant.
    pub name: String,

    /// Side length of the board.
    pub board_size: i32,

    /// Maximum number of full turns before the game is tied, or zero for no
    /// limit.
    #[serde(default)]
    pub turn_limit: u32,
}

/// Configuration of one piece type.
#[derive(Clone, Debug, Deserialize)]
pub struct PieceConfig {
    /// The type identifier, e.g. `"pawn"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Whether pieces of this type are kings.
    #[serde(default)]
    pub king_type: bool,

    /// Starting positions. White and black lists are index-paired; both must
    /// hold at least `count` entries.
    #[serde(default)]
    pub positions: PiecePositions,

    /// Movement rules for this type. Omitted fields are disabled.
    #[serde(default)]
    pub movement: MovementRules,

    /// How many pieces of this type each side starts with.
    pub count: usize,
}

/// Starting positions of one piece type, per side.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PiecePositions {
    #[serde(default)]
    pub white: Vec<Square>,
    #[serde(default)]
    pub black: Vec<Square>,
}

/// Configuration of one portal.
#[derive(Clone, Debug, Deserialize)]
pub struct PortalConfig {
    pub id: String,
    pub positions: PortalPositions,
    pub properties: PortalProperties,
}

/// The two endpoints of a portal.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PortalPositions {
    pub entry: Square,
    pub exit: Square,
}

/// Behavioral properties of a portal.
#[derive(Clone, Debug, Deserialize)]
pub struct PortalProperties {
    /// One-way travel, entry to exit. `false` makes the portal
    /// bidirectional.
    #[serde(default = "default_preserve_direction")]
    pub preserve_direction: bool,

    /// Teams allowed through, as `"white"` / `"black"` entries.
    pub allowed_colors: Vec<String>,

    /// Cooldown in committed turns after each use.
    #[serde(default)]
    pub cooldown: u32,
}

fn default_preserve_direction() -> bool {
    true
}
