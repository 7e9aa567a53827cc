pub mod assets;
pub mod lookups;
pub mod movements;
pub mod summary;
