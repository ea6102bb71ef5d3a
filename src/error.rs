//! Error types surfaced at the service boundary.

/// Errors returned by the employee service.
///
/// The only domain-level failure is a lookup by id that finds no row. Every
/// other failure (constraint violations, connectivity) passes through from
/// the storage layer untouched.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} not found with {field}: {value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: i64,
    },

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl StoreError {
    /// Not-found error for an employee row addressed by id.
    pub fn employee_not_found(id: i64) -> Self {
        StoreError::NotFound {
            entity: "Employee",
            field: "Id",
            value: id,
        }
    }

    /// Whether this error is the domain-level not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_carries_entity_field_and_value() {
        let err = StoreError::employee_not_found(42);
        assert_eq!(err.to_string(), "Employee not found with Id: 42");
        assert!(err.is_not_found());
    }
}
