//! Employee repository for database operations.

use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, ItemsAndPagesNumber, PaginatorTrait, QueryOrder,
    QuerySelect, TryIntoModel,
};

use crate::entities::employee;

/// Repository for employee-related database operations.
pub struct EmployeeRepository;

impl EmployeeRepository {
    /// Get a single employee by id.
    pub async fn get_by_id<C>(conn: &C, id: i64) -> Result<Option<employee::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        employee::Entity::find_by_id(id).one(conn).await
    }

    /// Get the first `limit` employees in storage-default order.
    pub async fn get_all<C>(conn: &C, limit: u64) -> Result<Vec<employee::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        employee::Entity::find().limit(limit).all(conn).await
    }

    /// Fetch one zero-based page of employees ordered by id, along with the
    /// total item and page counts for that page size.
    pub async fn get_page<C>(
        conn: &C,
        page: u64,
        size: u64,
    ) -> Result<(Vec<employee::Model>, ItemsAndPagesNumber), DbErr>
    where
        C: ConnectionTrait,
    {
        let paginator = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .paginate(conn, size);

        let totals = paginator.num_items_and_pages().await?;
        let items = paginator.fetch_page(page).await?;
        Ok((items, totals))
    }

    /// Insert or update an employee depending on whether the primary key is set.
    pub async fn save<C>(
        conn: &C,
        employee: employee::ActiveModel,
    ) -> Result<employee::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveModelTrait;
        employee.save(conn).await?.try_into_model()
    }

    /// Update an employee in the database.
    pub async fn update<C>(
        conn: &C,
        employee: employee::ActiveModel,
    ) -> Result<employee::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveModelTrait;
        employee.update(conn).await
    }

    /// Delete an employee by id, returning the number of rows removed.
    pub async fn delete_by_id<C>(conn: &C, id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = employee::Entity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected)
    }

    /// Count all employee rows.
    pub async fn count<C>(conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        employee::Entity::find().count(conn).await
    }
}
