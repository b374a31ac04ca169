pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, connect};
pub use error::{DbError, Result};
pub use repositories::external_link_repository::ExternalLinkRepository;
pub use repositories::project_repository::ProjectRepository;
