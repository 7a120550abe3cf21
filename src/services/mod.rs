pub mod client;
pub mod linking;
pub mod mojang;
pub mod player_cache;
pub mod reports;
pub mod request;
pub mod stash;

pub use client::PlayerClientService;
pub use linking::PlayerLinkingService;
pub use mojang::MojangService;
pub use player_cache::PlayerCacheService;
pub use reports::{PlayerReportService, ReportType, ReportTypeInfo};
pub use stash::PlayerStashService;
