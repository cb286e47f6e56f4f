//! Request handlers

pub mod returns;
pub mod investments;
pub mod wallet;
pub mod health;
