pub mod refresher;
pub mod service;
pub mod token_type;

pub use refresher::{RefreshOutcome, RefreshSecret};
pub use service::AuthService;
pub use token_type::TokenType;
