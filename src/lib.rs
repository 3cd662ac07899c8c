// Library root
// -----------
// This crate exposes a small library surface for the `secgrp` binary.
//
// Module responsibilities:
// - `api`: the group-directory client (describe/modify over HTTP) and
//   the `GroupDirectory` trait tests substitute a fake for.
// - `plan`: pure group-set planning (the read-modify-write arithmetic).
// - `groups`: per-instance add/remove/list operations.
// - `config`: environment-driven connection settings.
// - `cli`: flag parsing, operation selection and rendering.
// - `error`: the error taxonomy shared by all of the above.
//
// Keeping the planning and service layers free of HTTP makes them
// testable without a network.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod groups;
pub mod plan;
