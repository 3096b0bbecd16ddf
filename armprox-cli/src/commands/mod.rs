//! Command implementations for ArmProx CLI

pub mod count;
