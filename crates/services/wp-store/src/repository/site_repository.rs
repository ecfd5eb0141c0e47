//! Site repository: `wp_options` and `wp_links`.

use async_trait::async_trait;
use std::sync::Arc;
use chrono::Local;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::base::Table;
use super::entities::link::{self, Entity as LinkEntity};
use super::entities::option::{self, Entity as OptionEntity};
use common::{AppError, AppResult};
use domain::{Link, NewLink, SiteOption, UpdateLink, LINK_VISIBLE, OPTION_AUTOLOAD_YES};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// Find option by `option_name`
    async fn option(&self, name: &str) -> AppResult<Option<SiteOption>>;

    /// Options WordPress loads on every request
    async fn autoloaded_options(&self) -> AppResult<Vec<SiteOption>>;

    /// Insert or overwrite an option by name
    async fn set_option(&self, name: String, value: String) -> AppResult<SiteOption>;

    /// Delete option by `option_name`
    async fn delete_option(&self, name: &str) -> AppResult<()>;

    /// Find link by `link_id`
    async fn find_link(&self, id: u64) -> AppResult<Option<Link>>;

    /// Blogroll links by name, optionally only the visible ones
    async fn links(&self, visible_only: bool) -> AppResult<Vec<Link>>;

    async fn create_link(&self, link: NewLink) -> AppResult<Link>;

    async fn update_link(&self, id: u64, changes: UpdateLink) -> AppResult<Link>;

    /// Delete link by `link_id`
    async fn delete_link(&self, id: u64) -> AppResult<()>;
}

pub struct SiteStore {
    options: Table<OptionEntity>,
    links: Table<LinkEntity>,
}

impl SiteStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            options: Table::new(db.clone()),
            links: Table::new(db),
        }
    }

    async fn find_option(&self, name: &str) -> AppResult<Option<option::Model>> {
        OptionEntity::find()
            .filter(option::Column::OptionName.eq(name))
            .one(self.options.db())
            .await
            .map_err(AppError::from)
    }
}

#[async_trait]
impl SiteRepository for SiteStore {
    async fn option(&self, name: &str) -> AppResult<Option<SiteOption>> {
        Ok(self.find_option(name).await?.map(SiteOption::from))
    }

    async fn autoloaded_options(&self) -> AppResult<Vec<SiteOption>> {
        let models = OptionEntity::find()
            .filter(option::Column::Autoload.eq(OPTION_AUTOLOAD_YES))
            .order_by_asc(option::Column::OptionName)
            .all(self.options.db())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(SiteOption::from).collect())
    }

    async fn set_option(&self, name: String, value: String) -> AppResult<SiteOption> {
        let model = match self.find_option(&name).await? {
            Some(existing) => {
                let mut active: option::ActiveModel = existing.into();
                active.option_value = Set(value);
                self.options.update(active).await?
            }
            None => {
                self.options
                    .insert(option::ActiveModel {
                        option_name: Set(name),
                        option_value: Set(value),
                        autoload: Set(OPTION_AUTOLOAD_YES.to_string()),
                        ..Default::default()
                    })
                    .await?
            }
        };

        Ok(SiteOption::from(model))
    }

    async fn delete_option(&self, name: &str) -> AppResult<()> {
        let result = OptionEntity::delete_many()
            .filter(option::Column::OptionName.eq(name))
            .exec(self.options.db())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn find_link(&self, id: u64) -> AppResult<Option<Link>> {
        Ok(self.links.find_by_id(id).await?.map(Link::from))
    }

    async fn links(&self, visible_only: bool) -> AppResult<Vec<Link>> {
        let mut query = LinkEntity::find();
        if visible_only {
            query = query.filter(link::Column::LinkVisible.eq(LINK_VISIBLE));
        }

        let models = query
            .order_by_asc(link::Column::LinkName)
            .all(self.links.db())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Link::from).collect())
    }

    async fn create_link(&self, new_link: NewLink) -> AppResult<Link> {
        let active_model = link::ActiveModel {
            link_url: Set(new_link.url),
            link_name: Set(new_link.name),
            link_image: Set(String::new()),
            link_target: Set(new_link.target),
            link_description: Set(new_link.description),
            link_visible: Set(new_link
                .visible
                .unwrap_or_else(|| LINK_VISIBLE.to_string())),
            link_owner: Set(new_link.owner_id),
            link_rating: Set(0),
            link_updated: Set(Local::now().naive_local()),
            link_rel: Set(String::new()),
            link_notes: Set(String::new()),
            link_rss: Set(String::new()),
            ..Default::default()
        };

        let model = self.links.insert(active_model).await?;
        Ok(Link::from(model))
    }

    async fn update_link(&self, id: u64, changes: UpdateLink) -> AppResult<Link> {
        let existing = self
            .links
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: link::ActiveModel = existing.into();
        if let Some(url) = changes.url {
            active.link_url = Set(url);
        }
        if let Some(name) = changes.name {
            active.link_name = Set(name);
        }
        if let Some(description) = changes.description {
            active.link_description = Set(description);
        }
        if let Some(visible) = changes.visible {
            active.link_visible = Set(visible);
        }
        active.link_updated = Set(Local::now().naive_local());

        let model = self.links.update(active).await?;
        Ok(Link::from(model))
    }

    async fn delete_link(&self, id: u64) -> AppResult<()> {
        if self.links.delete_by_id(id).await? == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
