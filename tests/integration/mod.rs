//! Integration tests for split-confirm
//!
//! These tests drive the gate through real hosts and render the dialog.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod embedded_flow;
