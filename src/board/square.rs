/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{cmp::Ordering, fmt, str::FromStr};

use anyhow::{bail, Context};
use serde::Deserialize;

/// A single square on the board, addressed by file (`x`) and rank (`y`).
///
/// `y = 0` is White's back rank. Squares print in algebraic style (`a1`),
/// with files mapped to letters and ranks printed 1-based.
///
/// The [`Ord`] implementation linearizes `(x, y)` so squares can live in
/// ordered sets. It implies nothing about geometric distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    /// Stride for the ordering linearization, large enough that no two
    /// distinct squares collide.
    const ORDER_STRIDE: i64 = i32::MAX as i64;

    /// Constructs a new [`Square`] at the provided coordinates.
    #[inline(always)]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if this square lies within a `size * size` board.
    #[inline(always)]
    pub const fn in_bounds(&self, size: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < size && self.y < size
    }

    const fn linearized(&self) -> i64 {
        self.x as i64 * Self::ORDER_STRIDE + self.y as i64
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> Ordering {
        self.linearized().cmp(&other.linearized())
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;

    /// Parses a square from algebraic notation like `e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next().context("empty square string")?;
        if !file.is_ascii_lowercase() {
            bail!("invalid file {file:?} in square {s:?}");
        }

        let rank = chars
            .as_str()
            .parse::<i32>()
            .with_context(|| format!("invalid rank in square {s:?}"))?;

        Ok(Self::new(file as i32 - 'a' as i32, rank - 1))
    }
}
