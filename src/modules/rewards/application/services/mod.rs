mod list_tasks_service;
mod user_service;

pub use list_tasks_service::ListTasksService;
pub use user_service::UserService;
