// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter and order expressions for listing jobs.
//!
//! Filter expressions take the form:
//!
//! ```text
//! <field><op><value>
//! ```
//!
//! # Fields
//!
//! - `name`, `owner`
//! - `trigger` - one of push, manual, unknown
//! - `phase` - one of unknown, preparing, starting, running, done
//! - `repo.owner`, `repo.repo`, `repo.host`, `repo.ref`
//! - `success` - one of true, false
//! - `created` - RFC3339 timestamp, compared by the service
//!
//! Field names are passed to the service as-is; only `phase` and `success`
//! values are checked or rewritten here.
//!
//! # Operators
//!
//! - `==` equals, `~=` contains, `|=` starts with, `=|` ends with
//!
//! When an expression contains more than one marker, the leftmost one is the
//! operator and everything after it is the value.
//!
//! # Order expressions
//!
//! ```text
//! name:asc       # ascending by name
//! created:desc   # newest first
//! ```

mod filter;
mod order;

pub use filter::{parse_filter, parse_filters, FIELDS};
pub use order::{parse_order, parse_orders, DEFAULT_ORDER};
