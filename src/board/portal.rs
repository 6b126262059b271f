/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::PortalConfig;

use super::{Board, Color, Square};

/// A teleporter pair on the board.
///
/// A piece moving onto an endpoint is relocated to the far endpoint within
/// the same turn. Portals are created once from configuration and never
/// destroyed; only their cooldown mutates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Portal {
    /// Identifier of this portal, as declared by configuration.
    pub id: String,

    /// Entry endpoint.
    pub entry: Square,

    /// Exit endpoint.
    pub exit: Square,

    /// Whether the portal may also be entered through its exit endpoint.
    pub both_ways: bool,

    /// Whether White pieces may use this portal.
    pub white_allowed: bool,

    /// Whether Black pieces may use this portal.
    pub black_allowed: bool,

    /// Configured cooldown length, in committed turns.
    pub cooldown: u32,

    /// Remaining cooldown. Zero means the portal is ready.
    pub current_cooldown: u32,
}

impl Portal {
    /// Builds a ready [`Portal`] from its configuration.
    ///
    /// Bidirectionality is the inverse of `preserve_direction`, and per-team
    /// allow flags derive from the `allowed_colors` list.
    pub fn from_config(config: &PortalConfig) -> Self {
        let allows = |color: &str| config.properties.allowed_colors.iter().any(|c| c == color);

        Self {
            id: config.id.clone(),
            entry: config.positions.entry,
            exit: config.positions.exit,
            both_ways: !config.properties.preserve_direction,
            white_allowed: allows("white"),
            black_allowed: allows("black"),
            cooldown: config.properties.cooldown,
            current_cooldown: 0,
        }
    }

    /// Returns `true` if pieces of `team` may enter this portal.
    #[inline(always)]
    pub const fn allows(&self, team: Color) -> bool {
        match team {
            Color::White => self.white_allowed,
            Color::Black => self.black_allowed,
        }
    }

    /// The endpoint a piece lands on after entering at `from`.
    #[inline(always)]
    pub fn far_end(&self, from: Square) -> Square {
        if self.exit == from {
            self.entry
        } else {
            self.exit
        }
    }
}

/// Builds portals from configuration and drives their cooldown lifecycle.
///
/// Holds no state of its own; the board owns the portals.
#[derive(Debug)]
pub struct PortalSystem;

impl PortalSystem {
    /// Constructs the configured portals and registers them on `board`.
    ///
    /// # Panics
    ///
    /// If two configured portals claim the same endpoint square.
    pub fn new(board: &mut Board, portal_configs: &[PortalConfig]) -> Self {
        for config in portal_configs {
            board.add_portal(Portal::from_config(config));
        }

        Self
    }

    /// Records a portal use by resetting its cooldown to the configured
    /// length.
    ///
    /// # Panics
    ///
    /// If no portal occupies `position`. Callers guarantee existence.
    pub fn start_cooldown(&self, board: &mut Board, position: Square) {
        let portal = board
            .portal_at_mut(position)
            .unwrap_or_else(|| panic!("no portal at {position} to start a cooldown on"));

        portal.current_cooldown = portal.cooldown;
    }

    /// Decrements every portal's remaining cooldown by one, floored at zero.
    ///
    /// Invoked once per committed turn, before a just-used portal's cooldown
    /// is started, so a portal never decays on its activation turn.
    pub fn decrease_cooldowns(&self, board: &mut Board) {
        for portal in board.portals_mut() {
            portal.current_cooldown = portal.current_cooldown.saturating_sub(1);
        }
    }
}
