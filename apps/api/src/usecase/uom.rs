//! Units of measure.

use std::sync::Arc;

use tracing::{debug, info};

use laundry_core::validation::{validate_id, validate_name};
use laundry_core::{CoreError, PageRequest, Paging, Uom};
use laundry_db::UomRepository;

use super::new_id;
use crate::error::AppResult;

#[derive(Clone)]
pub struct UomUseCase {
    repo: Arc<dyn UomRepository>,
    default_rows: i64,
}

impl UomUseCase {
    pub fn new(repo: Arc<dyn UomRepository>, default_rows: i64) -> Self {
        UomUseCase { repo, default_rows }
    }

    /// Registers a unit. Names are unique regardless of case.
    pub async fn register_new_uom(&self, mut payload: Uom) -> AppResult<Uom> {
        payload.name = payload.name.trim().to_string();
        validate_name("name", &payload.name)?;

        if self.repo.get_by_name(&payload.name).await?.is_some() {
            return Err(CoreError::conflict("uom", "name", &payload.name).into());
        }

        payload.id = new_id();
        self.repo.create(&payload).await?;

        info!(id = %payload.id, name = %payload.name, "Uom registered");
        Ok(payload)
    }

    pub async fn find_all_uom(&self, request: PageRequest) -> AppResult<(Vec<Uom>, Paging)> {
        let query = request.resolve(self.default_rows);
        Ok(self.repo.paging(query).await?)
    }

    pub async fn find_by_id_uom(&self, id: &str) -> AppResult<Uom> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| CoreError::not_found("uom", id).into())
    }

    /// Renames a unit. Keeping its own name is not a conflict.
    pub async fn update_uom(&self, mut payload: Uom) -> AppResult<Uom> {
        payload.name = payload.name.trim().to_string();
        validate_id("id", &payload.id)?;
        validate_name("name", &payload.name)?;

        if let Some(existing) = self.repo.get_by_name(&payload.name).await? {
            if existing.id != payload.id {
                return Err(CoreError::conflict("uom", "name", &payload.name).into());
            }
        }

        self.repo.update(&payload).await?;

        debug!(id = %payload.id, "Uom updated");
        Ok(payload)
    }

    pub async fn delete_uom(&self, id: &str) -> AppResult<()> {
        let uom = self.find_by_id_uom(id).await?;
        self.repo.delete(&uom.id).await?;

        info!(id = %id, "Uom deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::usecase::memory::MemoryStore;

    fn usecase() -> UomUseCase {
        UomUseCase::new(Arc::new(MemoryStore::new()), 10)
    }

    fn uom(name: &str) -> Uom {
        Uom {
            id: String::new(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_assigns_id() {
        let uc = usecase();
        let created = uc.register_new_uom(uom("kg")).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(uc.find_by_id_uom(&created.id).await.unwrap().name, "kg");
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts_case_insensitively() {
        let uc = usecase();
        uc.register_new_uom(uom("Kg")).await.unwrap();

        let err = uc.register_new_uom(uom("KG")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        assert!(uc.register_new_uom(uom("pcs")).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let err = usecase().register_new_uom(uom("  ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_own_name_but_not_others() {
        let uc = usecase();
        let kg = uc.register_new_uom(uom("kg")).await.unwrap();
        uc.register_new_uom(uom("pcs")).await.unwrap();

        let same = Uom { id: kg.id.clone(), name: "KG".to_string() };
        assert_eq!(uc.update_uom(same).await.unwrap().name, "KG");

        let clash = Uom { id: kg.id.clone(), name: "pcs".to_string() };
        assert!(matches!(uc.update_uom(clash).await, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let err = usecase().delete_uom("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "uom with ID missing not found");
    }
}
