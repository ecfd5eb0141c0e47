//! Term repository: `wp_terms`, `wp_term_taxonomy` and `wp_term_relationships`.

use async_trait::async_trait;
use std::sync::Arc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};

use super::base::Table;
use super::entities::post::{self, Entity as PostEntity};
use super::entities::term::{self, Entity as TermEntity};
use super::entities::term_relationship::{self, Entity as TermRelationshipEntity};
use super::entities::term_taxonomy::{self, Entity as TermTaxonomyEntity};
use common::{AppError, AppResult};
use domain::{NewTerm, Post, Term, TermRelationship, TermTaxonomy, UpdateTerm};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Term repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TermRepository: Send + Sync {
    /// Find term by `term_id`
    async fn find_by_id(&self, id: u64) -> AppResult<Option<Term>>;

    /// Term registered under `taxonomy` with the given slug
    async fn find_by_slug(
        &self,
        slug: &str,
        taxonomy: &str,
    ) -> AppResult<Option<(Term, TermTaxonomy)>>;

    /// Taxonomy entries of a term (terms.term_id = term_taxonomy.term_id)
    async fn taxonomies(&self, term_id: u64) -> AppResult<Vec<TermTaxonomy>>;

    /// Term behind a taxonomy entry (term_taxonomy.term_id = terms.term_id)
    async fn term_for_taxonomy(&self, term_taxonomy_id: u64) -> AppResult<Option<Term>>;

    /// Distinct terms attached to a post under one taxonomy, by name.
    ///
    /// Join path: term_relationships.object_id = post
    /// -> term_taxonomy (taxonomy filter) -> terms.
    async fn terms_for_post(&self, post_id: u64, taxonomy: &str) -> AppResult<Vec<Term>>;

    /// Posts carrying a term under any taxonomy, newest first.
    ///
    /// Join path: terms -> term_taxonomy.term_id -> term_relationships
    /// -> posts.ID = object_id.
    async fn posts_for_term(&self, term_id: u64) -> AppResult<Vec<Post>>;

    /// Insert a term together with its taxonomy entry
    async fn create(&self, term: NewTerm) -> AppResult<(Term, TermTaxonomy)>;

    /// Rename a term or change its slug
    async fn update(&self, id: u64, changes: UpdateTerm) -> AppResult<Term>;

    /// Delete the `wp_terms` row only.
    ///
    /// Its `wp_term_taxonomy` entries and their `wp_term_relationships` rows
    /// stay behind; detach posts first when they should go too.
    async fn delete(&self, id: u64) -> AppResult<()>;

    /// Attach a post to a taxonomy entry and bump its count
    async fn attach(&self, post_id: u64, term_taxonomy_id: u64) -> AppResult<TermRelationship>;

    /// Remove the join row and lower the count
    async fn detach(&self, post_id: u64, term_taxonomy_id: u64) -> AppResult<()>;
}

/// Concrete implementation of TermRepository
pub struct TermStore {
    terms: Table<TermEntity>,
    taxonomies: Table<TermTaxonomyEntity>,
    relationships: Table<TermRelationshipEntity>,
}

impl TermStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            terms: Table::new(db.clone()),
            taxonomies: Table::new(db.clone()),
            relationships: Table::new(db),
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.terms.db()
    }

    async fn adjust_count(&self, term_taxonomy_id: u64, delta: i64) -> AppResult<()> {
        let count = Expr::col(term_taxonomy::Column::Count);
        let value = if delta >= 0 {
            count.add(delta)
        } else {
            count.sub(-delta)
        };

        TermTaxonomyEntity::update_many()
            .col_expr(term_taxonomy::Column::Count, value)
            .filter(term_taxonomy::Column::TermTaxonomyId.eq(term_taxonomy_id))
            .exec(self.db())
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}

#[async_trait]
impl TermRepository for TermStore {
    async fn find_by_id(&self, id: u64) -> AppResult<Option<Term>> {
        let result = self.terms.find_by_id(id).await?;
        Ok(result.map(Term::from))
    }

    async fn find_by_slug(
        &self,
        slug: &str,
        taxonomy: &str,
    ) -> AppResult<Option<(Term, TermTaxonomy)>> {
        let result = TermTaxonomyEntity::find()
            .find_also_related(TermEntity)
            .filter(term::Column::Slug.eq(slug))
            .filter(term_taxonomy::Column::Taxonomy.eq(taxonomy))
            .one(self.db())
            .await
            .map_err(AppError::from)?;

        Ok(match result {
            Some((taxonomy, Some(term))) => Some((Term::from(term), TermTaxonomy::from(taxonomy))),
            _ => None,
        })
    }

    async fn taxonomies(&self, term_id: u64) -> AppResult<Vec<TermTaxonomy>> {
        let models = TermTaxonomyEntity::find()
            .filter(term_taxonomy::Column::TermId.eq(term_id))
            .order_by_asc(term_taxonomy::Column::TermTaxonomyId)
            .all(self.db())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(TermTaxonomy::from).collect())
    }

    async fn term_for_taxonomy(&self, term_taxonomy_id: u64) -> AppResult<Option<Term>> {
        let result = TermTaxonomyEntity::find_by_id(term_taxonomy_id)
            .find_also_related(TermEntity)
            .one(self.db())
            .await
            .map_err(AppError::from)?;

        Ok(result.and_then(|(_, term)| term).map(Term::from))
    }

    async fn terms_for_post(&self, post_id: u64, taxonomy: &str) -> AppResult<Vec<Term>> {
        let models = TermEntity::find()
            .join(JoinType::InnerJoin, term::Relation::TermTaxonomy.def())
            .join(
                JoinType::InnerJoin,
                term_taxonomy::Relation::TermRelationship.def(),
            )
            .filter(term_relationship::Column::ObjectId.eq(post_id))
            .filter(term_taxonomy::Column::Taxonomy.eq(taxonomy))
            .distinct()
            .order_by_asc(term::Column::Name)
            .all(self.db())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Term::from).collect())
    }

    async fn posts_for_term(&self, term_id: u64) -> AppResult<Vec<Post>> {
        let models = PostEntity::find_latest()
            .join(JoinType::InnerJoin, post::Relation::TermRelationship.def())
            .join(
                JoinType::InnerJoin,
                term_relationship::Relation::TermTaxonomy.def(),
            )
            .filter(term_taxonomy::Column::TermId.eq(term_id))
            .distinct()
            .all(self.db())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Post::from).collect())
    }

    async fn create(&self, new_term: NewTerm) -> AppResult<(Term, TermTaxonomy)> {
        let term = self
            .terms
            .insert(term::ActiveModel {
                name: Set(new_term.name),
                slug: Set(new_term.slug),
                term_group: Set(0),
                ..Default::default()
            })
            .await?;

        let taxonomy = self
            .taxonomies
            .insert(term_taxonomy::ActiveModel {
                term_id: Set(term.term_id),
                taxonomy: Set(new_term.taxonomy),
                description: Set(new_term.description),
                parent: Set(0),
                count: Set(0),
                ..Default::default()
            })
            .await?;

        tracing::debug!(
            term_id = term.term_id,
            term_taxonomy_id = taxonomy.term_taxonomy_id,
            taxonomy = %taxonomy.taxonomy,
            "Term created"
        );
        Ok((Term::from(term), TermTaxonomy::from(taxonomy)))
    }

    async fn update(&self, id: u64, changes: UpdateTerm) -> AppResult<Term> {
        let existing = self
            .terms
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: term::ActiveModel = existing.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(slug) = changes.slug {
            active.slug = Set(slug);
        }

        let model = self.terms.update(active).await?;
        Ok(Term::from(model))
    }

    async fn delete(&self, id: u64) -> AppResult<()> {
        if self.terms.delete_by_id(id).await? == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn attach(&self, post_id: u64, term_taxonomy_id: u64) -> AppResult<TermRelationship> {
        let model = self
            .relationships
            .insert(term_relationship::ActiveModel {
                object_id: Set(post_id),
                term_taxonomy_id: Set(term_taxonomy_id),
                term_order: Set(0),
            })
            .await?;

        self.adjust_count(term_taxonomy_id, 1).await?;
        Ok(TermRelationship::from(model))
    }

    async fn detach(&self, post_id: u64, term_taxonomy_id: u64) -> AppResult<()> {
        if self
            .relationships
            .delete_by_id((post_id, term_taxonomy_id))
            .await?
            == 0
        {
            return Err(AppError::NotFound);
        }

        self.adjust_count(term_taxonomy_id, -1).await
    }
}
