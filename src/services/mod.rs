// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod commitment;
pub mod proxy;

pub use proxy::{DataKind, ProxyData, ProxyService};
