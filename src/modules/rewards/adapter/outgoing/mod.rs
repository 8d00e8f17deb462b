pub mod sea_orm_entity;
pub mod task_repository_postgres;
pub mod unit_of_work_postgres;
pub mod user_repository_postgres;
pub mod user_task_repository_postgres;

pub use unit_of_work_postgres::UnitOfWorkPostgres;
