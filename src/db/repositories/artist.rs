use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use super::{InsertOutcome, NameFilter};
use crate::domain::{ArtistId, Genres};
use crate::entities::{artists, prelude::*};
use crate::models::{Artist, ArtistPatch, NewArtist};

pub struct ArtistRepository {
    conn: DatabaseConnection,
}

impl ArtistRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model_to_artist(model: artists::Model) -> Artist {
        Artist {
            id: ArtistId::new(model.id),
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone,
            genres: Genres::from_stored(&model.genres),
            facebook_link: model.facebook_link,
            image_link: model.image_link,
            website: model.website,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
        }
    }

    pub async fn get(&self, id: i32) -> Result<Option<Artist>> {
        let artist = Artists::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query artist by ID")?;

        Ok(artist.map(Self::map_model_to_artist))
    }

    pub async fn list_all(&self) -> Result<Vec<Artist>> {
        let rows = Artists::find()
            .order_by_asc(artists::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_artist).collect())
    }

    pub async fn list_names(&self) -> Result<Vec<(i32, String)>> {
        let rows: Vec<(i32, String)> = Artists::find()
            .select_only()
            .column(artists::Column::Id)
            .column(artists::Column::Name)
            .order_by_asc(artists::Column::Id)
            .into_tuple()
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn find_by_identity(
        &self,
        name: &str,
        city: &str,
        state: &str,
    ) -> Result<Option<Artist>> {
        let artist = Artists::find()
            .filter(identity_filter(name, city, state))
            .one(&self.conn)
            .await?;

        Ok(artist.map(Self::map_model_to_artist))
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<(i32, String)>> {
        let rows: Vec<(i32, String)> = Artists::find()
            .select_only()
            .column(artists::Column::Id)
            .column(artists::Column::Name)
            .order_by_asc(artists::Column::Id)
            .into_tuple()
            .all(&self.conn)
            .await?;

        Ok(NameFilter::new(term).retain(rows))
    }

    /// Inserts `artist` unless one with the same name, city and state exists.
    pub async fn add_if_absent(&self, artist: &NewArtist) -> Result<InsertOutcome<Artist>> {
        let txn = self.conn.begin().await?;

        let existing = Artists::find()
            .filter(identity_filter(&artist.name, &artist.city, &artist.state))
            .one(&txn)
            .await?;

        if existing.is_some() {
            return Ok(InsertOutcome::Duplicate);
        }

        let model = artists::ActiveModel {
            name: Set(artist.name.clone()),
            city: Set(artist.city.clone()),
            state: Set(artist.state.clone()),
            phone: Set(artist.phone.clone()),
            genres: Set(artist.genres.to_stored()),
            facebook_link: Set(artist.facebook_link.clone()),
            image_link: Set(artist.image_link.clone()),
            website: Set(artist.website.clone()),
            seeking_venue: Set(artist.seeking_venue),
            seeking_description: Set(artist.seeking_description.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!("Added artist: {} (ID: {})", model.name, model.id);
        Ok(InsertOutcome::Inserted(Self::map_model_to_artist(model)))
    }

    pub async fn update(&self, id: i32, patch: ArtistPatch) -> Result<Option<Artist>> {
        let txn = self.conn.begin().await?;

        let Some(model) = Artists::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(Self::map_model_to_artist(model)));
        }

        let mut active: artists::ActiveModel = model.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(city) = patch.city {
            active.city = Set(city);
        }
        if let Some(state) = patch.state {
            active.state = Set(state);
        }
        if let Some(phone) = patch.phone {
            active.phone = Set(phone);
        }
        if let Some(genres) = patch.genres {
            active.genres = Set(genres.to_stored());
        }
        if let Some(facebook_link) = patch.facebook_link {
            active.facebook_link = Set(facebook_link);
        }
        if let Some(image_link) = patch.image_link {
            active.image_link = Set(image_link);
        }
        if let Some(website) = patch.website {
            active.website = Set(website);
        }
        if let Some(seeking_venue) = patch.seeking_venue {
            active.seeking_venue = Set(seeking_venue);
        }
        if let Some(seeking_description) = patch.seeking_description {
            active.seeking_description = Set(seeking_description);
        }

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        info!("Updated artist {}", id);
        Ok(Some(Self::map_model_to_artist(updated)))
    }
}

fn identity_filter(name: &str, city: &str, state: &str) -> sea_orm::Condition {
    sea_orm::Condition::all()
        .add(artists::Column::Name.eq(name))
        .add(artists::Column::City.eq(city))
        .add(artists::Column::State.eq(state))
}
