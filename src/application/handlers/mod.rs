//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod admin;
pub mod orders;

#[cfg(test)]
pub(crate) mod test_support;
