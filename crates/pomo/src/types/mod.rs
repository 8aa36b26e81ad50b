mod catalog;
mod entry;

pub use catalog::{Catalog, CatalogStats};
pub use entry::{CONTEXT_SEPARATOR, Entry};
