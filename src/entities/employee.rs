//! Employee entity for the `employee` table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    /// Assigned by the database on insert, immutable afterwards.
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Date portion only, `YYYY-MM-DD`, no time component.
    pub birth_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
