//! In-memory repositories for unit and router tests.
//!
//! One [`MemoryStore`] implements every repository trait and enforces the
//! same unique and foreign-key rules as the PostgreSQL schema, returning the
//! same [`DbError`] variants.

use std::sync::Mutex;

use async_trait::async_trait;

use laundry_core::{
    Bill, BillDetailResponse, BillResponse, Customer, Employee, PageQuery, Paging, Product, Uom,
    User,
};
use laundry_db::{
    BillRepository, CustomerRepository, DbError, DbResult, EmployeeRepository, ProductRepository,
    UomRepository, UserCredentials, UserRepository,
};

use crate::manager::HealthCheck;

#[derive(Default)]
struct State {
    uoms: Vec<Uom>,
    /// Stored with `uom.id` only; reads join the current unit.
    products: Vec<Product>,
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    bills: Vec<Bill>,
    users: Vec<UserCredentials>,
    fail_next_bill_detail: bool,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

fn window<T: Clone>(rows: Vec<T>, query: PageQuery) -> (Vec<T>, Paging) {
    let total = rows.len() as i64;
    let page = rows
        .into_iter()
        .skip(query.skip as usize)
        .take(query.take as usize)
        .collect();
    (page, Paging::for_query(query, total))
}

fn unique(constraint: &str) -> DbError {
    DbError::UniqueViolation {
        constraint: constraint.to_string(),
    }
}

fn foreign_key(message: &str) -> DbError {
    DbError::ForeignKeyViolation {
        message: message.to_string(),
    }
}

impl State {
    fn product(&self, id: &str) -> Option<Product> {
        let mut product = self.products.iter().find(|p| p.id == id)?.clone();
        product.uom = self.uoms.iter().find(|u| u.id == product.uom.id)?.clone();
        Some(product)
    }

    fn bill_response(&self, bill: &Bill, with_details: bool) -> Option<BillResponse> {
        let customer = self.customers.iter().find(|c| c.id == bill.customer_id)?;
        let employee = self.employees.iter().find(|e| e.id == bill.employee_id)?;

        let mut bill_details = Vec::new();
        if with_details {
            for detail in &bill.bill_details {
                bill_details.push(BillDetailResponse {
                    id: detail.id.clone(),
                    bill_id: detail.bill_id.clone(),
                    product: self.product(&detail.product_id)?,
                    product_price: detail.product_price,
                    qty: detail.qty,
                });
            }
        }

        Some(BillResponse {
            id: bill.id.clone(),
            bill_date: bill.bill_date,
            entry_date: bill.entry_date,
            finish_date: bill.finish_date,
            customer: customer.clone(),
            employee: employee.clone(),
            bill_details,
        })
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn product_count(&self) -> usize {
        self.lock().products.len()
    }

    pub fn customer_count(&self) -> usize {
        self.lock().customers.len()
    }

    pub fn employee_count(&self) -> usize {
        self.lock().employees.len()
    }

    pub fn bill_count(&self) -> usize {
        self.lock().bills.len()
    }

    pub fn bill_detail_count(&self) -> usize {
        self.lock().bills.iter().map(|b| b.bill_details.len()).sum()
    }

    /// Makes the next bill insert fail while writing its detail lines.
    pub fn fail_next_bill_detail(&self) {
        self.lock().fail_next_bill_detail = true;
    }
}

// =============================================================================
// Master Data
// =============================================================================

#[async_trait]
impl UomRepository for MemoryStore {
    async fn create(&self, uom: &Uom) -> DbResult<()> {
        let mut state = self.lock();
        if state
            .uoms
            .iter()
            .any(|u| u.name.to_lowercase() == uom.name.to_lowercase())
        {
            return Err(unique("uom_name_key"));
        }
        state.uoms.push(uom.clone());
        Ok(())
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Uom>, Paging)> {
        let mut rows = self.lock().uoms.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(window(rows, query))
    }

    async fn get(&self, id: &str) -> DbResult<Option<Uom>> {
        Ok(self.lock().uoms.iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> DbResult<Option<Uom>> {
        let name = name.to_lowercase();
        Ok(self
            .lock()
            .uoms
            .iter()
            .find(|u| u.name.to_lowercase() == name)
            .cloned())
    }

    async fn update(&self, uom: &Uom) -> DbResult<()> {
        let mut state = self.lock();
        if state
            .uoms
            .iter()
            .any(|u| u.id != uom.id && u.name.to_lowercase() == uom.name.to_lowercase())
        {
            return Err(unique("uom_name_key"));
        }
        let row = state
            .uoms
            .iter_mut()
            .find(|u| u.id == uom.id)
            .ok_or_else(|| DbError::not_found("uom", &uom.id))?;
        row.name = uom.name.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let mut state = self.lock();
        if state.products.iter().any(|p| p.uom.id == id) {
            return Err(foreign_key("uom is still referenced by product"));
        }
        let before = state.uoms.len();
        state.uoms.retain(|u| u.id != id);
        if state.uoms.len() == before {
            return Err(DbError::not_found("uom", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn create(&self, product: &Product) -> DbResult<()> {
        let mut state = self.lock();
        if !state.uoms.iter().any(|u| u.id == product.uom.id) {
            return Err(foreign_key("product.uom_id has no matching uom"));
        }
        state.products.push(product.clone());
        Ok(())
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Product>, Paging)> {
        let state = self.lock();
        let mut rows: Vec<Product> = state
            .products
            .iter()
            .filter_map(|p| state.product(&p.id))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(window(rows, query))
    }

    async fn get(&self, id: &str) -> DbResult<Option<Product>> {
        Ok(self.lock().product(id))
    }

    async fn update(&self, product: &Product) -> DbResult<()> {
        let mut state = self.lock();
        if !state.uoms.iter().any(|u| u.id == product.uom.id) {
            return Err(foreign_key("product.uom_id has no matching uom"));
        }
        let row = state
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| DbError::not_found("product", &product.id))?;
        *row = product.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let mut state = self.lock();
        if state
            .bills
            .iter()
            .flat_map(|b| &b.bill_details)
            .any(|d| d.product_id == id)
        {
            return Err(foreign_key("product is still referenced by bill_detail"));
        }
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(DbError::not_found("product", id));
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for MemoryStore {
    async fn create(&self, customer: &Customer) -> DbResult<()> {
        let mut state = self.lock();
        if state
            .customers
            .iter()
            .any(|c| c.phone_number == customer.phone_number)
        {
            return Err(unique("customer_phone_number_key"));
        }
        state.customers.push(customer.clone());
        Ok(())
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Customer>, Paging)> {
        let mut rows = self.lock().customers.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(window(rows, query))
    }

    async fn get(&self, id: &str) -> DbResult<Option<Customer>> {
        Ok(self.lock().customers.iter().find(|c| c.id == id).cloned())
    }

    async fn get_by_phone_number(&self, phone_number: &str) -> DbResult<Option<Customer>> {
        Ok(self
            .lock()
            .customers
            .iter()
            .find(|c| c.phone_number == phone_number)
            .cloned())
    }

    async fn update(&self, customer: &Customer) -> DbResult<()> {
        let mut state = self.lock();
        if state
            .customers
            .iter()
            .any(|c| c.id != customer.id && c.phone_number == customer.phone_number)
        {
            return Err(unique("customer_phone_number_key"));
        }
        let row = state
            .customers
            .iter_mut()
            .find(|c| c.id == customer.id)
            .ok_or_else(|| DbError::not_found("customer", &customer.id))?;
        *row = customer.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let mut state = self.lock();
        if state.bills.iter().any(|b| b.customer_id == id) {
            return Err(foreign_key("customer is still referenced by bill"));
        }
        let before = state.customers.len();
        state.customers.retain(|c| c.id != id);
        if state.customers.len() == before {
            return Err(DbError::not_found("customer", id));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn create(&self, employee: &Employee) -> DbResult<()> {
        let mut state = self.lock();
        if state
            .employees
            .iter()
            .any(|e| e.phone_number == employee.phone_number)
        {
            return Err(unique("employee_phone_number_key"));
        }
        state.employees.push(employee.clone());
        Ok(())
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Employee>, Paging)> {
        let mut rows = self.lock().employees.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(window(rows, query))
    }

    async fn get(&self, id: &str) -> DbResult<Option<Employee>> {
        Ok(self.lock().employees.iter().find(|e| e.id == id).cloned())
    }

    async fn get_by_phone_number(&self, phone_number: &str) -> DbResult<Option<Employee>> {
        Ok(self
            .lock()
            .employees
            .iter()
            .find(|e| e.phone_number == phone_number)
            .cloned())
    }

    async fn update(&self, employee: &Employee) -> DbResult<()> {
        let mut state = self.lock();
        if state
            .employees
            .iter()
            .any(|e| e.id != employee.id && e.phone_number == employee.phone_number)
        {
            return Err(unique("employee_phone_number_key"));
        }
        let row = state
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| DbError::not_found("employee", &employee.id))?;
        *row = employee.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let mut state = self.lock();
        if state.bills.iter().any(|b| b.employee_id == id) {
            return Err(foreign_key("employee is still referenced by bill"));
        }
        let before = state.employees.len();
        state.employees.retain(|e| e.id != id);
        if state.employees.len() == before {
            return Err(DbError::not_found("employee", id));
        }
        Ok(())
    }
}

// =============================================================================
// Bills
// =============================================================================

#[async_trait]
impl BillRepository for MemoryStore {
    async fn create(&self, bill: &Bill) -> DbResult<()> {
        let mut state = self.lock();

        if !state.customers.iter().any(|c| c.id == bill.customer_id)
            || !state.employees.iter().any(|e| e.id == bill.employee_id)
        {
            return Err(DbError::transaction("bill references a missing row"));
        }
        if std::mem::take(&mut state.fail_next_bill_detail) {
            return Err(DbError::transaction("bill_detail insert failed"));
        }
        for detail in &bill.bill_details {
            if !state.products.iter().any(|p| p.id == detail.product_id) {
                return Err(DbError::transaction(format!(
                    "bill_detail.product_id {} has no matching product",
                    detail.product_id
                )));
            }
        }

        state.bills.push(bill.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> DbResult<Option<BillResponse>> {
        let state = self.lock();
        Ok(state
            .bills
            .iter()
            .find(|b| b.id == id)
            .and_then(|b| state.bill_response(b, true)))
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<BillResponse>, Paging)> {
        let state = self.lock();
        let mut rows: Vec<BillResponse> = state
            .bills
            .iter()
            .filter_map(|b| state.bill_response(b, false))
            .collect();
        rows.sort_by(|a, b| b.bill_date.cmp(&a.bill_date).then_with(|| a.id.cmp(&b.id)));
        Ok(window(rows, query))
    }
}

// =============================================================================
// Users
// =============================================================================

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: &User, password_hash: &str) -> DbResult<()> {
        let mut state = self.lock();
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(unique("app_user_username_key"));
        }
        state.users.push(UserCredentials {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role.clone(),
            password_hash: password_hash.to_string(),
        });
        Ok(())
    }

    async fn get_by_username(&self, username: &str) -> DbResult<Option<UserCredentials>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get(&self, id: &str) -> DbResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .map(UserCredentials::into_user))
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<User>, Paging)> {
        let mut rows: Vec<User> = self
            .lock()
            .users
            .iter()
            .cloned()
            .map(UserCredentials::into_user)
            .collect();
        rows.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(window(rows, query))
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> bool {
        true
    }
}
