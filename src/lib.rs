/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Board state: squares, the piece arena, portals, and rendering.
mod board;

/// Command-line arguments for the console driver.
mod cli;

/// Game configurations: settings, piece rules, and portals, loaded from JSON.
mod config;

/// Turn state machine, self-check guard, and game-over detection.
mod game;

/// The per-piece movement-rule interpreter.
mod rules;

pub use board::*;
pub use cli::*;
pub use config::*;
pub use game::*;
pub use rules::*;
