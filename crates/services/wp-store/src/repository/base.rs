//! Generic CRUD over a single SeaORM entity.
//!
//! Every WordPress table names its key differently (`ID`, `comment_ID`,
//! `meta_id`, a composite pair, ...). [`Table`] leans on the primary key the
//! entity declares, so the same code serves all of them.

use std::marker::PhantomData;
use std::sync::Arc;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};
use serde::{Deserialize, Serialize};

use common::AppResult;

/// Default page size for paginated lists
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Upper bound on page size
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination parameters, 1-based page numbers
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PageParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Zero-based page index
    pub fn index(&self) -> u64 {
        self.page.saturating_sub(1)
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

/// One page of rows plus totals
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, params: &PageParams, total: u64) -> Self {
        let per_page = params.limit();
        Self {
            items,
            page: params.page.max(1),
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }

    /// Convert the rows, keeping the totals
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Primary key value type of entity `E`
pub type KeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// CRUD access to the table behind entity `E`.
pub struct Table<E> {
    db: Arc<DatabaseConnection>,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Table<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            entity: PhantomData,
        }
    }
}

impl<E> Table<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Get database connection reference
    pub fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    /// Find a row by its declared primary key
    pub async fn find_by_id<K>(&self, id: K) -> AppResult<Option<E::Model>>
    where
        K: Into<KeyOf<E>>,
    {
        Ok(E::find_by_id(id).one(self.db()).await?)
    }

    /// One page of rows in primary-key order
    pub async fn page(&self, params: &PageParams) -> AppResult<Page<E::Model>> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        let paginator = query.paginate(self.db(), params.limit());
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(params.index()).await?;
        Ok(Page::new(items, params, total))
    }

    pub async fn insert(&self, model: E::ActiveModel) -> AppResult<E::Model> {
        Ok(model.insert(self.db()).await?)
    }

    pub async fn update(&self, model: E::ActiveModel) -> AppResult<E::Model> {
        Ok(model.update(self.db()).await?)
    }

    /// Delete by primary key, returning the number of rows removed
    pub async fn delete_by_id<K>(&self, id: K) -> AppResult<u64>
    where
        K: Into<KeyOf<E>>,
    {
        let result = E::delete_by_id(id).exec(self.db()).await?;
        Ok(result.rows_affected)
    }
}
