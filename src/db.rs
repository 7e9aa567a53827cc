pub mod db;
pub use db::{MIGRATOR, connect};
pub mod asset_repo;
pub use asset_repo::AssetRepository;
pub mod movement_repo;
pub use movement_repo::MovementRepository;
pub mod lookup_repo;
pub use lookup_repo::LookupRepository;
