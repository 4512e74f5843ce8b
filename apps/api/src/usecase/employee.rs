//! Employees. Phone numbers identify an employee and must be unique.

use std::sync::Arc;

use tracing::info;

use laundry_core::validation::{validate_id, validate_name, validate_phone_number};
use laundry_core::{CoreError, Employee, PageRequest, Paging};
use laundry_db::EmployeeRepository;

use super::new_id;
use crate::error::AppResult;

#[derive(Clone)]
pub struct EmployeeUseCase {
    repo: Arc<dyn EmployeeRepository>,
    default_rows: i64,
}

impl EmployeeUseCase {
    pub fn new(repo: Arc<dyn EmployeeRepository>, default_rows: i64) -> Self {
        EmployeeUseCase { repo, default_rows }
    }

    fn normalize(payload: &mut Employee) -> AppResult<()> {
        payload.name = payload.name.trim().to_string();
        payload.phone_number = payload.phone_number.trim().to_string();
        payload.address = payload.address.trim().to_string();

        validate_name("name", &payload.name)?;
        validate_phone_number(&payload.phone_number)?;
        Ok(())
    }

    /// Fails with a conflict when another employee owns `phone_number`.
    async fn ensure_phone_available(&self, payload: &Employee) -> AppResult<()> {
        if let Some(existing) = self.repo.get_by_phone_number(&payload.phone_number).await? {
            if existing.id != payload.id {
                return Err(
                    CoreError::conflict("employee", "phone number", &payload.phone_number).into(),
                );
            }
        }
        Ok(())
    }

    pub async fn register_new_employee(&self, mut payload: Employee) -> AppResult<Employee> {
        Self::normalize(&mut payload)?;
        payload.id = String::new();
        self.ensure_phone_available(&payload).await?;

        payload.id = new_id();
        self.repo.create(&payload).await?;

        info!(id = %payload.id, "Employee registered");
        Ok(payload)
    }

    pub async fn find_all_employee(
        &self,
        request: PageRequest,
    ) -> AppResult<(Vec<Employee>, Paging)> {
        let query = request.resolve(self.default_rows);
        Ok(self.repo.paging(query).await?)
    }

    pub async fn find_by_id_employee(&self, id: &str) -> AppResult<Employee> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| CoreError::not_found("employee", id).into())
    }

    pub async fn update_employee(&self, mut payload: Employee) -> AppResult<Employee> {
        validate_id("id", &payload.id)?;
        Self::normalize(&mut payload)?;
        self.ensure_phone_available(&payload).await?;

        self.repo.update(&payload).await?;
        Ok(payload)
    }

    pub async fn delete_employee(&self, id: &str) -> AppResult<()> {
        let employee = self.find_by_id_employee(id).await?;
        self.repo.delete(&employee.id).await?;

        info!(id = %id, "Employee deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::usecase::memory::MemoryStore;

    fn usecase() -> (EmployeeUseCase, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (EmployeeUseCase::new(store.clone(), 10), store)
    }

    fn employee(name: &str, phone: &str) -> Employee {
        Employee {
            id: String::new(),
            name: name.to_string(),
            phone_number: phone.to_string(),
            address: "Jakarta".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_phone_conflicts() {
        let (uc, _) = usecase();
        uc.register_new_employee(employee("Sari", "081234567"))
            .await
            .unwrap();

        let err = uc
            .register_new_employee(employee("Dewi", "081234567"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(
            err.to_string(),
            "employee with phone number 081234567 already exists"
        );
    }

    #[tokio::test]
    async fn test_delete_unknown_leaves_table_unchanged() {
        let (uc, store) = usecase();
        uc.register_new_employee(employee("Sari", "081234567"))
            .await
            .unwrap();

        let err = uc.delete_employee("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.employee_count(), 1);
    }
}
