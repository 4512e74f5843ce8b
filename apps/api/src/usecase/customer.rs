//! Customers. Phone numbers identify a customer and must be unique.

use std::sync::Arc;

use tracing::info;

use laundry_core::validation::{validate_id, validate_name, validate_phone_number};
use laundry_core::{CoreError, Customer, PageRequest, Paging};
use laundry_db::CustomerRepository;

use super::new_id;
use crate::error::AppResult;

#[derive(Clone)]
pub struct CustomerUseCase {
    repo: Arc<dyn CustomerRepository>,
    default_rows: i64,
}

impl CustomerUseCase {
    pub fn new(repo: Arc<dyn CustomerRepository>, default_rows: i64) -> Self {
        CustomerUseCase { repo, default_rows }
    }

    fn normalize(payload: &mut Customer) -> AppResult<()> {
        payload.name = payload.name.trim().to_string();
        payload.phone_number = payload.phone_number.trim().to_string();
        payload.address = payload.address.trim().to_string();

        validate_name("name", &payload.name)?;
        validate_phone_number(&payload.phone_number)?;
        Ok(())
    }

    /// Fails with a conflict when another customer owns `phone_number`.
    async fn ensure_phone_available(&self, payload: &Customer) -> AppResult<()> {
        if let Some(existing) = self.repo.get_by_phone_number(&payload.phone_number).await? {
            if existing.id != payload.id {
                return Err(
                    CoreError::conflict("customer", "phone number", &payload.phone_number).into(),
                );
            }
        }
        Ok(())
    }

    pub async fn register_new_customer(&self, mut payload: Customer) -> AppResult<Customer> {
        Self::normalize(&mut payload)?;
        payload.id = String::new();
        self.ensure_phone_available(&payload).await?;

        payload.id = new_id();
        self.repo.create(&payload).await?;

        info!(id = %payload.id, "Customer registered");
        Ok(payload)
    }

    pub async fn find_all_customer(
        &self,
        request: PageRequest,
    ) -> AppResult<(Vec<Customer>, Paging)> {
        let query = request.resolve(self.default_rows);
        Ok(self.repo.paging(query).await?)
    }

    pub async fn find_by_id_customer(&self, id: &str) -> AppResult<Customer> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| CoreError::not_found("customer", id).into())
    }

    pub async fn update_customer(&self, mut payload: Customer) -> AppResult<Customer> {
        validate_id("id", &payload.id)?;
        Self::normalize(&mut payload)?;
        self.ensure_phone_available(&payload).await?;

        self.repo.update(&payload).await?;
        Ok(payload)
    }

    pub async fn delete_customer(&self, id: &str) -> AppResult<()> {
        let customer = self.find_by_id_customer(id).await?;
        self.repo.delete(&customer.id).await?;

        info!(id = %id, "Customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::usecase::memory::MemoryStore;

    fn usecase() -> (CustomerUseCase, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (CustomerUseCase::new(store.clone(), 10), store)
    }

    fn customer(name: &str, phone: &str) -> Customer {
        Customer {
            id: String::new(),
            name: name.to_string(),
            phone_number: phone.to_string(),
            address: "Jakarta".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_phone_conflicts() {
        let (uc, _) = usecase();
        uc.register_new_customer(customer("Budi", "081234567"))
            .await
            .unwrap();

        let err = uc
            .register_new_customer(customer("Andi", "081234567"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(
            err.to_string(),
            "customer with phone number 081234567 already exists"
        );
    }

    #[tokio::test]
    async fn test_client_id_is_ignored() {
        let (uc, _) = usecase();
        let mut payload = customer("Budi", "081234567");
        payload.id = "client-chosen".to_string();

        let created = uc.register_new_customer(payload).await.unwrap();
        assert_ne!(created.id, "client-chosen");
    }

    #[tokio::test]
    async fn test_update_to_taken_phone_conflicts() {
        let (uc, _) = usecase();
        let budi = uc
            .register_new_customer(customer("Budi", "081111111"))
            .await
            .unwrap();
        uc.register_new_customer(customer("Andi", "082222222"))
            .await
            .unwrap();

        let mut moved = budi.clone();
        moved.phone_number = "082222222".to_string();
        assert!(matches!(
            uc.update_customer(moved).await,
            Err(AppError::Conflict(_))
        ));

        let mut renamed = budi;
        renamed.name = "Budi S.".to_string();
        assert_eq!(uc.update_customer(renamed).await.unwrap().name, "Budi S.");
    }

    #[tokio::test]
    async fn test_delete_unknown_leaves_table_unchanged() {
        let (uc, store) = usecase();
        uc.register_new_customer(customer("Budi", "081234567"))
            .await
            .unwrap();

        let err = uc.delete_customer("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.customer_count(), 1);
    }

    #[tokio::test]
    async fn test_paging() {
        let (uc, _) = usecase();
        for i in 0..25 {
            uc.register_new_customer(customer(&format!("C{i:02}"), &format!("0812000{i:03}")))
                .await
                .unwrap();
        }

        let (page, paging) = uc.find_all_customer(PageRequest::new(3, 0)).await.unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(paging.total_rows, 25);
        assert_eq!(paging.total_pages, 3);
        assert_eq!(paging.rows_per_page, 10);
    }
}
