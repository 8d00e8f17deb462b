use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Barrier;
use uuid::Uuid;

use crate::modules::rewards::application::domain::entities::{
    LeaderboardUser, NewUser, Task, User, UserTask,
};
use crate::modules::rewards::application::ports::outgoing::{
    Repositories, RepositoryError, TaskRepository, TransactionFuture, UnitOfWork, UserRepository,
    UserTaskRepository,
};

#[derive(Debug, Clone, Default)]
struct Store {
    users: Vec<User>,
    tasks: Vec<Task>,
    user_tasks: Vec<UserTask>,
}

#[derive(Debug, Default)]
struct State {
    store: Store,
    add_balance_failure: Option<String>,
    read_failure: Option<String>,
    completion_check_gate: Option<Arc<Barrier>>,
}

/// Unit of work over a shared in-memory store.
///
/// Transactions snapshot the store and restore it when the work fails, so
/// rollback behaviour can be asserted without a database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUnitOfWork {
    state: Arc<Mutex<State>>,
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl InMemoryUnitOfWork {
    /// Store pre-filled with the same catalog the migration seeds.
    pub fn seeded() -> Self {
        let uow = Self::default();
        let base = Utc::now();
        {
            let mut state = lock(&uow.state);
            let catalog = [
                ("1", "referral", "Refer a friend to join", 100),
                ("2", "telegram", "Join our Telegram channel", 50),
                ("3", "twitter", "Follow us on Twitter", 50),
                ("4", "discord", "Join our Discord server", 75),
                ("5", "profile", "Complete your profile", 25),
            ];
            for (i, (id, name, description, points)) in catalog.into_iter().enumerate() {
                state.store.tasks.push(Task {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: description.to_string(),
                    points,
                    created_at: base + Duration::milliseconds(i as i64),
                });
            }
        }
        uow
    }

    pub fn insert_user(&self, username: &str, balance: i32) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        lock(&self.state).store.users.push(User {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: format!("hashed:{username}"),
            balance,
            referrer_id: None,
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn balance_of(&self, id: Uuid) -> Option<i32> {
        lock(&self.state)
            .store
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.balance)
    }

    pub fn referrer_of(&self, id: Uuid) -> Option<Uuid> {
        lock(&self.state)
            .store
            .users
            .iter()
            .find(|u| u.id == id)
            .and_then(|u| u.referrer_id)
    }

    pub fn completed_count(&self, user_id: Uuid) -> usize {
        lock(&self.state)
            .store
            .user_tasks
            .iter()
            .filter(|ut| ut.user_id == user_id && ut.completed)
            .count()
    }

    /// Makes every `add_balance` call fail with a database error.
    pub fn fail_add_balance(&self, message: &str) {
        lock(&self.state).add_balance_failure = Some(message.to_string());
    }

    /// Holds every `is_task_completed` caller after its read until `callers`
    /// of them have arrived, so concurrent completions all see the same
    /// pre-insert state.
    pub fn gate_completion_checks(&self, callers: usize) {
        lock(&self.state).completion_check_gate = Some(Arc::new(Barrier::new(callers)));
    }

    /// Makes task catalog reads fail with a database error.
    pub fn fail_reads(&self, message: &str) {
        lock(&self.state).read_failure = Some(message.to_string());
    }
}

struct InMemoryUserRepository {
    state: Arc<Mutex<State>>,
}

struct InMemoryTaskRepository {
    state: Arc<Mutex<State>>,
}

struct InMemoryUserTaskRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryUserRepository {
    fn find(&self, pred: impl Fn(&User) -> bool) -> Result<User, RepositoryError> {
        lock(&self.state)
            .store
            .users
            .iter()
            .find(|u| pred(u))
            .cloned()
            .ok_or(RepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_with_password(
        &self,
        user: NewUser,
        password: &str,
    ) -> Result<User, RepositoryError> {
        let mut state = lock(&self.state);
        if state
            .store
            .users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(RepositoryError::UserAlreadyExists);
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: format!("hashed:{password}"),
            balance: 0,
            referrer_id: None,
            created_at: now,
            updated_at: now,
        };
        state.store.users.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User, RepositoryError> {
        self.find(|u| u.id == id)
    }

    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError> {
        self.find(|u| u.username == username)
    }

    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.find(|u| u.email == email)
    }

    async fn add_balance(&self, id: Uuid, points: i32) -> Result<(), RepositoryError> {
        let mut state = lock(&self.state);
        if let Some(message) = state.add_balance_failure.clone() {
            return Err(RepositoryError::DatabaseError(message));
        }
        let user = state
            .store
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::UserNotFound)?;
        user.balance += points;
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn set_referrer(&self, user_id: Uuid, referrer_id: Uuid) -> Result<(), RepositoryError> {
        let mut state = lock(&self.state);
        if !state.store.users.iter().any(|u| u.id == referrer_id) {
            return Err(RepositoryError::UserNotFound);
        }
        let user = state
            .store
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(RepositoryError::UserNotFound)?;
        if user.referrer_id.is_some() {
            return Err(RepositoryError::ReferrerAlreadySet);
        }
        user.referrer_id = Some(referrer_id);
        Ok(())
    }

    async fn get_leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardUser>, RepositoryError> {
        let mut users = lock(&self.state).store.users.clone();
        users.sort_by(|a, b| {
            b.balance
                .cmp(&a.balance)
                .then_with(|| a.username.cmp(&b.username))
        });

        let balances: Vec<i32> = users.iter().map(|u| u.balance).collect();
        Ok(users
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(|u| LeaderboardUser {
                rank: 1 + balances.iter().filter(|b| **b > u.balance).count() as i64,
                id: u.id,
                username: u.username,
                balance: u.balance,
            })
            .collect())
    }

    async fn verify_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, RepositoryError> {
        let user = self.find(|u| u.username == username)?;
        if user.password_hash != format!("hashed:{password}") {
            return Err(RepositoryError::InvalidPassword);
        }
        Ok(user)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn get_by_id(&self, id: &str) -> Result<Task, RepositoryError> {
        lock(&self.state)
            .store
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(RepositoryError::TaskNotFound)
    }

    async fn get_all(&self) -> Result<Vec<Task>, RepositoryError> {
        let state = lock(&self.state);
        if let Some(message) = &state.read_failure {
            return Err(RepositoryError::DatabaseError(message.clone()));
        }
        Ok(state.store.tasks.clone())
    }
}

#[async_trait]
impl UserTaskRepository for InMemoryUserTaskRepository {
    async fn complete_task(
        &self,
        user_id: Uuid,
        task_id: &str,
    ) -> Result<UserTask, RepositoryError> {
        let record = UserTask {
            id: Uuid::new_v4(),
            user_id,
            task_id: task_id.to_string(),
            completed: true,
            created_at: Utc::now(),
        };
        lock(&self.state).store.user_tasks.push(record.clone());
        Ok(record)
    }

    async fn get_completed_tasks(&self, user_id: Uuid) -> Result<Vec<UserTask>, RepositoryError> {
        Ok(lock(&self.state)
            .store
            .user_tasks
            .iter()
            .filter(|ut| ut.user_id == user_id && ut.completed)
            .cloned()
            .collect())
    }

    async fn is_task_completed(
        &self,
        user_id: Uuid,
        task_id: &str,
    ) -> Result<bool, RepositoryError> {
        let (completed, gate) = {
            let state = lock(&self.state);
            let completed = state
                .store
                .user_tasks
                .iter()
                .any(|ut| ut.user_id == user_id && ut.task_id == task_id && ut.completed);
            (completed, state.completion_check_gate.clone())
        };

        if let Some(gate) = gate {
            gate.wait().await;
        }
        Ok(completed)
    }
}

impl Repositories for InMemoryUnitOfWork {
    fn users(&self) -> Box<dyn UserRepository + '_> {
        Box::new(InMemoryUserRepository {
            state: Arc::clone(&self.state),
        })
    }

    fn tasks(&self) -> Box<dyn TaskRepository + '_> {
        Box::new(InMemoryTaskRepository {
            state: Arc::clone(&self.state),
        })
    }

    fn user_tasks(&self) -> Box<dyn UserTaskRepository + '_> {
        Box::new(InMemoryUserTaskRepository {
            state: Arc::clone(&self.state),
        })
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn with_transaction<F, T, E>(&self, work: F) -> Result<T, E>
    where
        F: for<'c> FnOnce(&'c dyn Repositories) -> TransactionFuture<'c, T, E> + Send,
        T: Send,
        E: From<RepositoryError> + Send,
    {
        let snapshot = lock(&self.state).store.clone();

        let outcome = work(self).await;
        if outcome.is_err() {
            lock(&self.state).store = snapshot;
        }
        outcome
    }
}
