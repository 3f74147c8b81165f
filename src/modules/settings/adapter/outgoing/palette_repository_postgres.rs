use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::settings::adapter::outgoing::sea_orm_entity::color_palettes::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::settings::application::domain::entities::{ColorPalette, PaletteColors};
use crate::modules::settings::application::ports::outgoing::{
    CreatePaletteData, PaletteRepository, PaletteRepositoryError, UpdatePaletteData,
};

#[derive(Clone)]
pub struct PaletteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PaletteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> PaletteRepositoryError {
    // Unique violations on name/slug surface as conflicts.
    let msg = e.to_string();
    if msg.contains("duplicate key") || msg.contains("unique constraint") {
        PaletteRepositoryError::NameTaken
    } else {
        PaletteRepositoryError::DatabaseError(msg)
    }
}

fn model_to_palette(model: Model) -> ColorPalette {
    ColorPalette {
        id: model.id,
        name: model.name,
        slug: model.slug,
        light: PaletteColors {
            primary: model.light_primary,
            secondary: model.light_secondary,
            accent: model.light_accent,
            background: model.light_background,
            text: model.light_text,
        },
        dark: PaletteColors {
            primary: model.dark_primary,
            secondary: model.dark_secondary,
            accent: model.dark_accent,
            background: model.dark_background,
            text: model.dark_text,
        },
        is_active: model.is_active,
        is_default: model.is_default,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl PaletteRepository for PaletteRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ColorPalette>, PaletteRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(model_to_palette).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ColorPalette>, PaletteRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(model_to_palette))
    }

    async fn create(
        &self,
        data: CreatePaletteData,
    ) -> Result<ColorPalette, PaletteRepositoryError> {
        let now = Utc::now().fixed_offset();

        let txn = self.db.begin().await.map_err(map_db_err)?;

        if data.is_default {
            clear_default(&txn).await?;
        }

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            light_primary: Set(data.light.primary),
            light_secondary: Set(data.light.secondary),
            light_accent: Set(data.light.accent),
            light_background: Set(data.light.background),
            light_text: Set(data.light.text),
            dark_primary: Set(data.dark.primary),
            dark_secondary: Set(data.dark.secondary),
            dark_accent: Set(data.dark.accent),
            dark_background: Set(data.dark.background),
            dark_text: Set(data.dark.text),
            is_active: Set(data.is_active),
            is_default: Set(data.is_default),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(model_to_palette(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdatePaletteData,
    ) -> Result<ColorPalette, PaletteRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PaletteRepositoryError::NotFound)?;

        let mut model: ActiveModel = existing.into();
        if let Some(name) = data.name {
            model.slug = Set(crate::shared::text::slugify(&name));
            model.name = Set(name);
        }
        if let Some(light) = data.light {
            model.light_primary = Set(light.primary);
            model.light_secondary = Set(light.secondary);
            model.light_accent = Set(light.accent);
            model.light_background = Set(light.background);
            model.light_text = Set(light.text);
        }
        if let Some(dark) = data.dark {
            model.dark_primary = Set(dark.primary);
            model.dark_secondary = Set(dark.secondary);
            model.dark_accent = Set(dark.accent);
            model.dark_background = Set(dark.background);
            model.dark_text = Set(dark.text);
        }
        if let Some(active) = data.is_active {
            model.is_active = Set(active);
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_palette(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), PaletteRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PaletteRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_default(&self, id: Uuid) -> Result<ColorPalette, PaletteRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(PaletteRepositoryError::NotFound)?;

        clear_default(&txn).await?;

        let mut model: ActiveModel = existing.into();
        model.is_default = Set(true);
        model.updated_at = Set(Utc::now().fixed_offset());
        let updated = model.update(&txn).await.map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(model_to_palette(updated))
    }
}

async fn clear_default<C: sea_orm::ConnectionTrait>(
    conn: &C,
) -> Result<(), PaletteRepositoryError> {
    Entity::update_many()
        .col_expr(Column::IsDefault, sea_orm::sea_query::Expr::value(false))
        .filter(Column::IsDefault.eq(true))
        .exec(conn)
        .await
        .map_err(map_db_err)?;
    Ok(())
}
