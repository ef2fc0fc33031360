//! Static package catalog.
//!
//! The catalog of purchasable course packages is immutable for the lifetime
//! of the process: it is built once at startup and passed by `Arc` into the
//! services that need it. Nothing creates or mutates packages at runtime.

mod package;

pub use package::{Package, PackageCatalog};
