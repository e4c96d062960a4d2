// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keep a Seerr blocklist in sync with the Anime-Lists TMDB mapping.

use std::process::ExitCode;

use anibl_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
