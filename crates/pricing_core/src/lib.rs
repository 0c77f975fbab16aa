//! Core decision model for shared-fleet pricing and allocation.

pub mod allocation;
pub mod decision;
pub mod demand;
pub mod error;
pub mod objective;
pub mod panel;
pub mod segments;
