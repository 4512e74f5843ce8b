//! # Composition Root
//!
//! Wires the database into repositories and the repositories into use cases.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Database ──► RepoManager ──────────────► UseCaseManager ──► AppState  │
//! │               Arc<dyn UomRepository>       UomUseCase                  │
//! │               Arc<dyn ProductRepository>   ProductUseCase(uom)         │
//! │               Arc<dyn CustomerRepository>  CustomerUseCase             │
//! │               Arc<dyn EmployeeRepository>  EmployeeUseCase             │
//! │               Arc<dyn BillRepository>      BillUseCase(cust,emp,prod)  │
//! │               Arc<dyn UserRepository>      UserUseCase, AuthUseCase    │
//! │               Arc<dyn HealthCheck>                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use laundry_db::{
    BillRepository, CustomerRepository, Database, EmployeeRepository, ProductRepository,
    UomRepository, UserRepository,
};

use crate::auth::JwtManager;
use crate::config::AppConfig;
use crate::usecase::{
    AuthUseCase, BillUseCase, CustomerUseCase, EmployeeUseCase, ProductUseCase, UomUseCase,
    UserUseCase,
};

/// Answers whether the backing store is reachable.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> bool;
}

#[async_trait]
impl HealthCheck for Database {
    async fn ping(&self) -> bool {
        self.health_check().await
    }
}

// =============================================================================
// Repositories
// =============================================================================

#[derive(Clone)]
pub struct RepoManager {
    pub uoms: Arc<dyn UomRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub bills: Arc<dyn BillRepository>,
    pub users: Arc<dyn UserRepository>,
    pub health: Arc<dyn HealthCheck>,
}

impl RepoManager {
    /// PostgreSQL repositories sharing the database pool.
    pub fn from_database(db: &Database) -> Self {
        RepoManager {
            uoms: Arc::new(db.uoms()),
            products: Arc::new(db.products()),
            customers: Arc::new(db.customers()),
            employees: Arc::new(db.employees()),
            bills: Arc::new(db.bills()),
            users: Arc::new(db.users()),
            health: Arc::new(db.clone()),
        }
    }

    /// Every repository backed by one in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> (Self, Arc<crate::usecase::memory::MemoryStore>) {
        let store = Arc::new(crate::usecase::memory::MemoryStore::new());
        let repos = RepoManager {
            uoms: store.clone(),
            products: store.clone(),
            customers: store.clone(),
            employees: store.clone(),
            bills: store.clone(),
            users: store.clone(),
            health: store.clone(),
        };
        (repos, store)
    }
}

// =============================================================================
// Use Cases
// =============================================================================

#[derive(Clone)]
pub struct UseCaseManager {
    pub uom: UomUseCase,
    pub product: ProductUseCase,
    pub customer: CustomerUseCase,
    pub employee: EmployeeUseCase,
    pub bill: BillUseCase,
    pub user: UserUseCase,
    pub auth: AuthUseCase,
    pub health: Arc<dyn HealthCheck>,
}

impl UseCaseManager {
    pub fn new(repos: RepoManager, config: &AppConfig) -> Self {
        let rows = config.default_rows_per_page;
        let jwt = Arc::new(JwtManager::new(
            config.jwt_secret.clone(),
            config.jwt_issuer.clone(),
            config.jwt_access_lifetime_secs,
        ));

        let uom = UomUseCase::new(repos.uoms, rows);
        let product = ProductUseCase::new(repos.products, uom.clone(), rows);
        let customer = CustomerUseCase::new(repos.customers, rows);
        let employee = EmployeeUseCase::new(repos.employees, rows);
        let bill = BillUseCase::new(
            repos.bills,
            customer.clone(),
            employee.clone(),
            product.clone(),
            rows,
        );
        let user = UserUseCase::new(repos.users, rows);
        let auth = AuthUseCase::new(user.clone(), jwt);

        UseCaseManager {
            uom,
            product,
            customer,
            employee,
            bill,
            user,
            auth,
            health: repos.health,
        }
    }
}
