//! Colony Mind - decision layer for an autonomous colony agent
//!
//! Every tick the host runtime hands this crate a snapshot of the observed
//! world plus the persistent memory store; the crate hands back one decision
//! per controlled unit and defensive structure. The host executes them.

pub mod actions;
pub mod allocator;
pub mod core;
pub mod engine;
pub mod invasion;
pub mod memory;
pub mod repair;
pub mod roles;
pub mod tower;
pub mod world;
