// src/lib.rs
//! Simulation core for a cross-chain bridge demo.
//!
//! No node is contacted and nothing is signed: wallets, balances, fee quotes
//! and transfer completion are all mocked inside [`core::BridgeManager`],
//! with every delay routed through an injectable [`tools::Scheduler`].

pub mod blockchain;
pub mod cli;
pub mod core;
pub mod service;
pub mod tools;
