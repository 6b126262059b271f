/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod board;
mod piece;
mod portal;
mod square;

pub use board::*;
pub use piece::*;
pub use portal::*;
pub use square::*;
