use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use super::{InsertOutcome, NameFilter};
use crate::domain::{Genres, VenueId};
use crate::entities::{prelude::*, shows, venues};
use crate::models::{NewVenue, Venue, VenuePatch};

/// Row of the location listing: id, name, city, state.
pub type VenueLocationRow = (i32, String, String, String);

pub struct VenueRepository {
    conn: DatabaseConnection,
}

impl VenueRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model_to_venue(model: venues::Model) -> Venue {
        Venue {
            id: VenueId::new(model.id),
            name: model.name,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            genres: Genres::from_stored(&model.genres),
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website: model.website,
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description,
        }
    }

    pub async fn get(&self, id: i32) -> Result<Option<Venue>> {
        let venue = Venues::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query venue by ID")?;

        Ok(venue.map(Self::map_model_to_venue))
    }

    pub async fn list_all(&self) -> Result<Vec<Venue>> {
        let rows = Venues::find()
            .order_by_asc(venues::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model_to_venue).collect())
    }

    pub async fn list_locations(&self) -> Result<Vec<VenueLocationRow>> {
        let rows: Vec<VenueLocationRow> = Venues::find()
            .select_only()
            .column(venues::Column::Id)
            .column(venues::Column::Name)
            .column(venues::Column::City)
            .column(venues::Column::State)
            .order_by_asc(venues::Column::Id)
            .into_tuple()
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    /// Exact match on the identity used by the soft uniqueness check.
    pub async fn find_by_identity(
        &self,
        name: &str,
        state: &str,
        address: Option<&str>,
    ) -> Result<Option<Venue>> {
        let venue = Venues::find()
            .filter(identity_filter(name, state, address))
            .one(&self.conn)
            .await?;

        Ok(venue.map(Self::map_model_to_venue))
    }

    /// Case-insensitive substring search on the venue name, returning id and name.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<(i32, String)>> {
        let rows: Vec<(i32, String)> = Venues::find()
            .select_only()
            .column(venues::Column::Id)
            .column(venues::Column::Name)
            .order_by_asc(venues::Column::Id)
            .into_tuple()
            .all(&self.conn)
            .await?;

        Ok(NameFilter::new(term).retain(rows))
    }

    /// Inserts `venue` unless one with the same name, state and address exists.
    ///
    /// The check and the insert share a transaction, but the store has no
    /// unique constraint, so two concurrent creates can both succeed.
    pub async fn add_if_absent(&self, venue: &NewVenue) -> Result<InsertOutcome<Venue>> {
        let txn = self.conn.begin().await?;

        let existing = Venues::find()
            .filter(identity_filter(
                &venue.name,
                &venue.state,
                venue.address.as_deref(),
            ))
            .one(&txn)
            .await?;

        if existing.is_some() {
            return Ok(InsertOutcome::Duplicate);
        }

        let model = venues::ActiveModel {
            name: Set(venue.name.clone()),
            city: Set(venue.city.clone()),
            state: Set(venue.state.clone()),
            address: Set(venue.address.clone()),
            phone: Set(venue.phone.clone()),
            genres: Set(venue.genres.to_stored()),
            image_link: Set(venue.image_link.clone()),
            facebook_link: Set(venue.facebook_link.clone()),
            website: Set(venue.website.clone()),
            seeking_talent: Set(venue.seeking_talent),
            seeking_description: Set(venue.seeking_description.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!("Added venue: {} (ID: {})", model.name, model.id);
        Ok(InsertOutcome::Inserted(Self::map_model_to_venue(model)))
    }

    /// Applies `patch` atomically. Returns `None` if the venue does not exist.
    pub async fn update(&self, id: i32, patch: VenuePatch) -> Result<Option<Venue>> {
        let txn = self.conn.begin().await?;

        let Some(model) = Venues::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(Self::map_model_to_venue(model)));
        }

        let mut active: venues::ActiveModel = model.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(city) = patch.city {
            active.city = Set(city);
        }
        if let Some(state) = patch.state {
            active.state = Set(state);
        }
        if let Some(address) = patch.address {
            active.address = Set(address);
        }
        if let Some(phone) = patch.phone {
            active.phone = Set(phone);
        }
        if let Some(genres) = patch.genres {
            active.genres = Set(genres.to_stored());
        }
        if let Some(image_link) = patch.image_link {
            active.image_link = Set(image_link);
        }
        if let Some(facebook_link) = patch.facebook_link {
            active.facebook_link = Set(facebook_link);
        }
        if let Some(website) = patch.website {
            active.website = Set(website);
        }
        if let Some(seeking_talent) = patch.seeking_talent {
            active.seeking_talent = Set(seeking_talent);
        }
        if let Some(seeking_description) = patch.seeking_description {
            active.seeking_description = Set(seeking_description);
        }

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        info!("Updated venue {}", id);
        Ok(Some(Self::map_model_to_venue(updated)))
    }

    /// Deletes the venue and its shows. Returns `false` if nothing was removed.
    pub async fn remove(&self, id: i32) -> Result<bool> {
        let txn = self.conn.begin().await?;

        shows::Entity::delete_many()
            .filter(shows::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;

        let result = Venues::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Removed venue with ID: {}", id);
        }
        Ok(removed)
    }
}

fn identity_filter(name: &str, state: &str, address: Option<&str>) -> sea_orm::Condition {
    let address = address.map_or_else(
        || venues::Column::Address.is_null(),
        |address| venues::Column::Address.eq(address),
    );

    sea_orm::Condition::all()
        .add(venues::Column::Name.eq(name))
        .add(venues::Column::State.eq(state))
        .add(address)
}
