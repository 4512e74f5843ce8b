//! # Bill Use Case
//!
//! Turns a [`BillRequest`] into a persisted bill and returns it in its
//! nested read form.
//!
//! ## Registration
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register_new_bill(BillRequest)                                         │
//! │       │                                                                 │
//! │       ├── validate: ids present, 1..=MAX_BILL_DETAILS lines, qty > 0,  │
//! │       │             finishDate present and not before entryDate        │
//! │       ├── resolve customer, employee            (404 if unknown)       │
//! │       ├── resolve every product once            (404 if unknown)       │
//! │       ├── build Bill: new ids, productPrice = product.price snapshot   │
//! │       ├── BillRepository::create                (one transaction)      │
//! │       └── BillRepository::get → BillResponse                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use laundry_core::validation::{
    validate_bill_dates, validate_bill_detail_count, validate_id, validate_qty,
};
use laundry_core::{
    Bill, BillDetail, BillRequest, BillResponse, CoreError, PageRequest, Paging, Product,
    ValidationError,
};
use laundry_db::BillRepository;

use super::{new_id, CustomerUseCase, EmployeeUseCase, ProductUseCase};
use crate::error::AppResult;

#[derive(Clone)]
pub struct BillUseCase {
    repo: Arc<dyn BillRepository>,
    customer_uc: CustomerUseCase,
    employee_uc: EmployeeUseCase,
    product_uc: ProductUseCase,
    default_rows: i64,
}

impl BillUseCase {
    pub fn new(
        repo: Arc<dyn BillRepository>,
        customer_uc: CustomerUseCase,
        employee_uc: EmployeeUseCase,
        product_uc: ProductUseCase,
        default_rows: i64,
    ) -> Self {
        BillUseCase {
            repo,
            customer_uc,
            employee_uc,
            product_uc,
            default_rows,
        }
    }

    fn validate(request: &BillRequest) -> AppResult<()> {
        validate_id("customerId", &request.customer_id)?;
        validate_id("employeeId", &request.employee_id)?;
        validate_bill_detail_count(request.bill_details.len())?;

        for detail in &request.bill_details {
            validate_id("productId", &detail.product_id)?;
            validate_qty(detail.qty)?;
        }

        Ok(())
    }

    pub async fn register_new_bill(&self, request: BillRequest) -> AppResult<BillResponse> {
        Self::validate(&request)?;

        let now = Utc::now();
        let bill_date = request.bill_date.unwrap_or(now);
        let entry_date = request.entry_date.unwrap_or(now);
        let finish_date = request.finish_date.ok_or_else(|| ValidationError::Required {
            field: "finishDate".to_string(),
        })?;
        validate_bill_dates(entry_date, finish_date)?;

        let customer = self.customer_uc.find_by_id_customer(&request.customer_id).await?;
        let employee = self.employee_uc.find_by_id_employee(&request.employee_id).await?;

        // A product may appear on several lines; look each one up once.
        let mut products: HashMap<String, Product> = HashMap::new();
        for detail in &request.bill_details {
            if !products.contains_key(&detail.product_id) {
                let product = self.product_uc.find_by_id_product(&detail.product_id).await?;
                products.insert(detail.product_id.clone(), product);
            }
        }

        let bill_id = new_id();
        let mut bill_details = Vec::with_capacity(request.bill_details.len());
        for detail in &request.bill_details {
            let product = products
                .get(&detail.product_id)
                .ok_or_else(|| CoreError::not_found("product", &detail.product_id))?;

            bill_details.push(BillDetail {
                id: new_id(),
                bill_id: bill_id.clone(),
                product_id: product.id.clone(),
                product_price: product.price,
                qty: detail.qty,
            });
        }

        let bill = Bill {
            id: bill_id,
            bill_date,
            entry_date,
            finish_date,
            customer_id: customer.id,
            employee_id: employee.id,
            bill_details,
        };

        self.repo.create(&bill).await?;

        let created = self.find_by_id_bill(&bill.id).await?;
        info!(
            id = %created.id,
            customer_id = %created.customer.id,
            lines = created.bill_details.len(),
            total = created.total(),
            "Bill registered"
        );
        Ok(created)
    }

    pub async fn find_by_id_bill(&self, id: &str) -> AppResult<BillResponse> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| CoreError::not_found("bill", id).into())
    }

    pub async fn find_all_bill(
        &self,
        request: PageRequest,
    ) -> AppResult<(Vec<BillResponse>, Paging)> {
        let query = request.resolve(self.default_rows);
        Ok(self.repo.paging(query).await?)
    }
}
