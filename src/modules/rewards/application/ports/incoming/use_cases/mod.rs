mod list_tasks_use_case;
mod user_use_cases;

pub use list_tasks_use_case::{ListTasksError, ListTasksUseCase};
pub use user_use_cases::{UserServiceError, UserUseCases};
