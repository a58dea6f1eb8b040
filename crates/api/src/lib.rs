// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod client;
mod directory;
mod error;
pub mod token;
pub mod wire;

#[cfg(test)]
mod tests;

pub use client::{Endpoint, HrClient, HrRequest, HrResponse, HrTransport, MAX_PAGES};
pub use directory::Directory;
pub use error::{HrApiError, HrApiErrorKind};
pub use wire::WireFieldTemplate;
