//! Domain models for amdpack
//!
//! This module contains pure domain objects: pages discovered in the project root,
//! module references declared by those pages, and the per-page bundling unit.
//! These types carry no file system access beyond path arithmetic.

pub mod descriptor;
pub mod module;
pub mod page;

pub use descriptor::BundleDescriptor;
pub use module::ModuleRef;
pub use page::Page;
