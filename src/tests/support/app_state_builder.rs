use crate::auth::application::ports::incoming::use_cases::AuthUseCases;
use crate::rewards::application::ports::incoming::use_cases::{ListTasksUseCase, UserUseCases};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` where every use case is a successful stub unless
/// overridden.
pub struct TestAppStateBuilder {
    auth: Arc<dyn AuthUseCases>,
    users: Arc<dyn UserUseCases>,
    list_tasks: Arc<dyn ListTasksUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: Arc::new(StubAuthUseCases::default()),
            users: Arc::new(StubUserUseCases::default()),
            list_tasks: Arc::new(StubListTasksUseCase::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_auth(mut self, uc: impl AuthUseCases + 'static) -> Self {
        self.auth = Arc::new(uc);
        self
    }

    pub fn with_users(mut self, uc: impl UserUseCases + 'static) -> Self {
        self.users = Arc::new(uc);
        self
    }

    pub fn with_list_tasks(mut self, uc: impl ListTasksUseCase + 'static) -> Self {
        self.list_tasks = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth_use_cases: self.auth,
            user_use_cases: self.users,
            list_tasks_use_case: self.list_tasks,
        })
    }
}
