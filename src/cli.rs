/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the interactive console driver.
#[derive(Debug, Parser)]
#[command(about, version)]
pub struct Cli {
    /// Path to the JSON game configuration to play.
    pub config: PathBuf,
}
