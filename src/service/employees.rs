//! ORM-backed implementation of the employee service.

use async_trait::async_trait;
use log::{debug, warn};
use sea_orm::ActiveValue;

use crate::constants::DEFAULT_LIST_LIMIT;
use crate::entities::employee;
use crate::error::StoreError;
use crate::repositories::EmployeeRepository;
use crate::service::{EmployeeData, EmployeeService, Page, PageRequest};
use crate::storage::Storage;

/// Employee service backed by the SeaORM repository layer.
///
/// Stateless between calls; clones share the storage handle's connection
/// pool, so one instance can serve concurrent tasks.
#[derive(Clone)]
pub struct OrmEmployeeService {
    storage: Storage,
}

impl OrmEmployeeService {
    /// Create a service over an already-connected storage handle.
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Fetch the row with the given id or translate its absence into the
    /// domain not-found error.
    async fn find_existing(&self, id: i64) -> Result<employee::Model, StoreError> {
        EmployeeRepository::get_by_id(self.storage.conn(), id)
            .await?
            .ok_or_else(|| {
                warn!("Employee {id} not found");
                StoreError::employee_not_found(id)
            })
    }
}

#[async_trait]
impl EmployeeService for OrmEmployeeService {
    async fn save_employee(&self, employee: EmployeeData) -> Result<employee::Model, StoreError> {
        debug!("Saving employee {}", employee.first_name);

        let model = EmployeeRepository::save(
            self.storage.conn(),
            employee::ActiveModel {
                id: ActiveValue::NotSet,
                first_name: ActiveValue::Set(employee.first_name),
                last_name: ActiveValue::Set(employee.last_name),
                birth_date: ActiveValue::Set(employee.birth_date),
            },
        )
        .await?;

        Ok(model)
    }

    async fn get_all_employees(&self) -> Result<Vec<employee::Model>, StoreError> {
        debug!("Listing first {DEFAULT_LIST_LIMIT} employees");
        Ok(EmployeeRepository::get_all(self.storage.conn(), DEFAULT_LIST_LIMIT).await?)
    }

    async fn get_employees_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<employee::Model>, StoreError> {
        debug!("Listing employees page {} (size {})", request.page, request.size);

        let (items, totals) =
            EmployeeRepository::get_page(self.storage.conn(), request.page, request.size).await?;

        Ok(Page {
            items,
            page: request.page,
            page_size: request.size,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    async fn get_employee_by_id(&self, id: i64) -> Result<employee::Model, StoreError> {
        debug!("Getting employee {id}");
        self.find_existing(id).await
    }

    async fn update_employee(
        &self,
        employee: EmployeeData,
        id: i64,
    ) -> Result<employee::Model, StoreError> {
        debug!("Updating employee {id}");

        let existing = self.find_existing(id).await?;

        let mut active_model: employee::ActiveModel = existing.into();
        active_model.first_name = ActiveValue::Set(employee.first_name);
        active_model.last_name = ActiveValue::Set(employee.last_name);
        active_model.birth_date = ActiveValue::Set(employee.birth_date);

        let updated = EmployeeRepository::update(self.storage.conn(), active_model).await?;
        Ok(updated)
    }

    async fn delete_employee(&self, id: i64) -> Result<(), StoreError> {
        debug!("Deleting employee {id}");

        // Existence read first: a bare delete-by-id would silently no-op.
        self.find_existing(id).await?;

        EmployeeRepository::delete_by_id(self.storage.conn(), id).await?;
        Ok(())
    }
}
