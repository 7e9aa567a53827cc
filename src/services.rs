pub mod asset_service;
pub use asset_service::AssetService;
pub mod movement_service;
pub use movement_service::MovementService;
pub mod summary_service;
pub use summary_service::SummaryService;
