pub mod repository;

pub use repository::{FinanceRepository, RepositoryError};
