pub mod repository_error;
pub mod task_repository;
pub mod unit_of_work;
pub mod user_repository;
pub mod user_task_repository;

pub use repository_error::RepositoryError;
pub use task_repository::TaskRepository;
pub use unit_of_work::{Repositories, TransactionFuture, UnitOfWork};
pub use user_repository::UserRepository;
pub use user_task_repository::UserTaskRepository;
