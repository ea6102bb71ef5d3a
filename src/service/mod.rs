//! Employee service layer.
//!
//! This module defines the service seam callers program against, along with
//! the data types that cross it. The trait mediates between callers and
//! storage, enforcing existence before mutation or deletion and translating
//! missing rows into [`StoreError::NotFound`]. Everything else the storage
//! layer reports passes through unchanged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::employee;
use crate::error::StoreError;

pub mod employees;

pub use employees::OrmEmployeeService;

/// Input payload for creating or updating an employee.
///
/// Carries no id on purpose: on create the storage assigns one, and on
/// update the target row is addressed by the id parameter alone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmployeeData {
    pub first_name: String,
    pub last_name: Option<String>,
    /// Date portion only, `YYYY-MM-DD`.
    pub birth_date: Option<String>,
}

/// A caller-supplied page request with a zero-based page number.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    /// Page request with the size clamped to at least one row, so the
    /// paginator's page arithmetic stays defined.
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }
}

/// One page of rows plus the pagination metadata reported by storage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based page number this page was fetched for.
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Service trait for employee CRUD operations.
///
/// One implementation exists ([`OrmEmployeeService`]); the trait is the seam
/// outer surfaces (HTTP handlers, CLIs, tests) depend on.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Persist the given employee data as a new row and return it with the
    /// id assigned by storage.
    async fn save_employee(&self, employee: EmployeeData) -> Result<employee::Model, StoreError>;

    /// Fetch at most the first 100 rows in storage-default order.
    ///
    /// This is a hard-coded first-page fetch, not a true list-all; use
    /// [`EmployeeService::get_employees_page`] to reach rows beyond it. The
    /// two listing contracts intentionally disagree and are kept separate.
    async fn get_all_employees(&self) -> Result<Vec<employee::Model>, StoreError>;

    /// Fetch one page of rows per the caller-supplied request, with total
    /// counts as reported by storage.
    async fn get_employees_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<employee::Model>, StoreError>;

    /// Fetch the row with the given id, or [`StoreError::NotFound`].
    async fn get_employee_by_id(&self, id: i64) -> Result<employee::Model, StoreError>;

    /// Overwrite `first_name`, `last_name`, and `birth_date` of the row with
    /// the given id and return the merged row, or [`StoreError::NotFound`]
    /// when no such row exists. The row's own id never changes.
    async fn update_employee(
        &self,
        employee: EmployeeData,
        id: i64,
    ) -> Result<employee::Model, StoreError>;

    /// Delete the row with the given id, or [`StoreError::NotFound`] when no
    /// such row exists. A bare delete-by-id would silently no-op on a missing
    /// row, so this reads the row first.
    async fn delete_employee(&self, id: i64) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_clamps_zero_size() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.size, 1);

        let request = PageRequest::new(3, 25);
        assert_eq!(request.page, 3);
        assert_eq!(request.size, 25);
    }
}
