use anyhow::Result;
use sea_orm::EntityTrait;

use super::db::Storage;
use crate::entities::employee;
use crate::repositories::EmployeeRepository;

impl Storage {
    /// Check if the database has any employees
    pub async fn has_employees(&self) -> Result<bool> {
        Ok(EmployeeRepository::count(&self.conn).await? > 0)
    }

    /// Count employee rows
    pub async fn count_employees(&self) -> Result<u64> {
        Ok(EmployeeRepository::count(&self.conn).await?)
    }

    /// Remove every employee row
    pub async fn clear_employees(&self) -> Result<()> {
        employee::Entity::delete_many().exec(&self.conn).await?;
        Ok(())
    }
}
