mod environment;
mod error;
mod extractors;

pub use environment::{Environment, StorageBackend};
pub use error::{ApiErrorResponse, AppError};
pub use extractors::ValidatedJson;
