pub mod tasks;
pub mod user_tasks;
pub mod users;
