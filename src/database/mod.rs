pub mod manager;
pub mod models;
pub mod query_builder;
pub mod repository;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use models::{Company, CompanyChanges};
pub use repository::MySqlRepository;
pub use store::CompanyStore;
