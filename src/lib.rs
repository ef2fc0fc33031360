//! SkillBridge - Online Course Sales Platform Backend
//!
//! This crate implements the enrollment and payment reconciliation flow:
//! package checkout through a payment gateway (or a mock path in
//! development), signed-callback verification, and idempotent crediting of
//! the user's enrollment ledger.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
