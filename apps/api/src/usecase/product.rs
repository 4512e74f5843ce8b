//! Products.
//!
//! A product always points at a stored unit. Register and update resolve
//! `uom.id` through [`UomUseCase`] and store the resolved unit back into the
//! payload, so the response carries the unit's real name.

use std::sync::Arc;

use tracing::info;

use laundry_core::validation::{validate_id, validate_name, validate_price};
use laundry_core::{CoreError, PageRequest, Paging, Product};
use laundry_db::ProductRepository;

use super::{new_id, UomUseCase};
use crate::error::AppResult;

#[derive(Clone)]
pub struct ProductUseCase {
    repo: Arc<dyn ProductRepository>,
    uom_uc: UomUseCase,
    default_rows: i64,
}

impl ProductUseCase {
    pub fn new(repo: Arc<dyn ProductRepository>, uom_uc: UomUseCase, default_rows: i64) -> Self {
        ProductUseCase {
            repo,
            uom_uc,
            default_rows,
        }
    }

    fn validate(payload: &Product) -> AppResult<()> {
        validate_name("name", &payload.name)?;
        validate_price(payload.price)?;
        validate_id("uom.id", &payload.uom.id)?;
        Ok(())
    }

    /// Swaps the client's unit reference for the stored unit.
    async fn resolve_uom(&self, payload: &mut Product) -> AppResult<()> {
        payload.uom = self.uom_uc.find_by_id_uom(&payload.uom.id).await?;
        Ok(())
    }

    pub async fn register_new_product(&self, mut payload: Product) -> AppResult<Product> {
        payload.name = payload.name.trim().to_string();
        Self::validate(&payload)?;
        self.resolve_uom(&mut payload).await?;

        payload.id = new_id();
        self.repo.create(&payload).await?;

        info!(id = %payload.id, uom = %payload.uom.name, "Product registered");
        Ok(payload)
    }

    pub async fn find_all_product(
        &self,
        request: PageRequest,
    ) -> AppResult<(Vec<Product>, Paging)> {
        let query = request.resolve(self.default_rows);
        Ok(self.repo.paging(query).await?)
    }

    pub async fn find_by_id_product(&self, id: &str) -> AppResult<Product> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| CoreError::not_found("product", id).into())
    }

    /// Full replacement. Price changes never touch existing bills, which
    /// keep their own price snapshot.
    pub async fn update_product(&self, mut payload: Product) -> AppResult<Product> {
        payload.name = payload.name.trim().to_string();
        validate_id("id", &payload.id)?;
        Self::validate(&payload)?;
        self.resolve_uom(&mut payload).await?;
        self.find_by_id_product(&payload.id).await?;

        self.repo.update(&payload).await?;
        Ok(payload)
    }

    pub async fn delete_product(&self, id: &str) -> AppResult<()> {
        let product = self.find_by_id_product(id).await?;
        self.repo.delete(&product.id).await?;

        info!(id = %id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::usecase::memory::MemoryStore;
    use laundry_core::Uom;

    fn usecases() -> (UomUseCase, ProductUseCase, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let uom_uc = UomUseCase::new(store.clone(), 10);
        let product_uc = ProductUseCase::new(store.clone(), uom_uc.clone(), 10);
        (uom_uc, product_uc, store)
    }

    fn product(name: &str, price: i64, uom_id: &str) -> Product {
        Product {
            id: String::new(),
            name: name.to_string(),
            price,
            uom: Uom {
                id: uom_id.to_string(),
                name: String::new(),
            },
        }
    }

    #[tokio::test]
    async fn test_register_resolves_uom() {
        let (uom_uc, product_uc, _) = usecases();
        let kg = uom_uc
            .register_new_uom(Uom { id: String::new(), name: "kg".to_string() })
            .await
            .unwrap();

        let created = product_uc
            .register_new_product(product("Wash & Fold", 7000, &kg.id))
            .await
            .unwrap();

        assert_eq!(created.uom, kg);
        let stored = product_uc.find_by_id_product(&created.id).await.unwrap();
        assert_eq!(stored.uom.name, "kg");
    }

    #[tokio::test]
    async fn test_unknown_uom_is_not_found_and_nothing_is_inserted() {
        let (_, product_uc, store) = usecases();

        let err = product_uc
            .register_new_product(product("Wash", 7000, "missing"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "uom with ID missing not found");
        assert_eq!(store.product_count(), 0);
    }

    #[tokio::test]
    async fn test_required_fields() {
        let (_, product_uc, _) = usecases();

        for payload in [
            product("", 7000, "u"),
            product("Wash", 0, "u"),
            product("Wash", 7000, ""),
        ] {
            let err = product_uc.register_new_product(payload).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_update_unknown_product_is_not_found() {
        let (uom_uc, product_uc, _) = usecases();
        let kg = uom_uc
            .register_new_uom(Uom { id: String::new(), name: "kg".to_string() })
            .await
            .unwrap();

        let mut payload = product("Wash", 7000, &kg.id);
        payload.id = "missing".to_string();

        let err = product_uc.update_product(payload).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
