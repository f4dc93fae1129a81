use anyhow::Result;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use tracing::info;

use crate::entities::{artists, prelude::*, shows, venues};
use crate::models::NewShow;

/// A show joined with both parties; either side is `None` if its row is gone.
pub type ShowListingRow = (shows::Model, Option<artists::Model>, Option<venues::Model>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowInsert {
    Inserted(shows::Model),
    MissingVenue,
    MissingArtist,
}

pub struct ShowRepository {
    conn: DatabaseConnection,
}

impl ShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn for_venue(
        &self,
        venue_id: i32,
    ) -> Result<Vec<(shows::Model, Option<artists::Model>)>> {
        let rows = Shows::find()
            .filter(shows::Column::VenueId.eq(venue_id))
            .order_by_asc(shows::Column::StartTime)
            .order_by_asc(shows::Column::Id)
            .find_also_related(Artists)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn for_artist(
        &self,
        artist_id: i32,
    ) -> Result<Vec<(shows::Model, Option<venues::Model>)>> {
        let rows = Shows::find()
            .filter(shows::Column::ArtistId.eq(artist_id))
            .order_by_asc(shows::Column::StartTime)
            .order_by_asc(shows::Column::Id)
            .find_also_related(Venues)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    /// Start times of every show at the given venues, keyed by venue id.
    pub async fn start_times_for_venues(
        &self,
        venue_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<DateTime<Utc>>>> {
        self.start_times_by(shows::Column::VenueId, venue_ids).await
    }

    /// Start times of every show by the given artists, keyed by artist id.
    pub async fn start_times_for_artists(
        &self,
        artist_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<DateTime<Utc>>>> {
        self.start_times_by(shows::Column::ArtistId, artist_ids).await
    }

    async fn start_times_by(
        &self,
        owner: shows::Column,
        ids: &[i32],
    ) -> Result<HashMap<i32, Vec<DateTime<Utc>>>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, DateTime<Utc>)> = Shows::find()
            .select_only()
            .column(owner)
            .column(shows::Column::StartTime)
            .filter(owner.is_in(ids.to_vec()))
            .into_tuple()
            .all(&self.conn)
            .await?;

        let mut map: HashMap<i32, Vec<DateTime<Utc>>> = HashMap::new();
        for (id, start_time) in rows {
            map.entry(id).or_default().push(start_time);
        }

        Ok(map)
    }

    pub async fn list_all(&self) -> Result<Vec<ShowListingRow>> {
        let rows = Shows::find()
            .order_by_asc(shows::Column::StartTime)
            .order_by_asc(shows::Column::Id)
            .all(&self.conn)
            .await?;

        let artists = rows.load_one(Artists, &self.conn).await?;
        let venues = rows.load_one(Venues, &self.conn).await?;

        Ok(rows
            .into_iter()
            .zip(artists)
            .zip(venues)
            .map(|((show, artist), venue)| (show, artist, venue))
            .collect())
    }

    /// Inserts a show after checking, in the same transaction, that both
    /// referenced rows exist.
    pub async fn add(&self, show: &NewShow) -> Result<ShowInsert> {
        let txn = self.conn.begin().await?;

        if Venues::find_by_id(show.venue_id.value())
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(ShowInsert::MissingVenue);
        }

        if Artists::find_by_id(show.artist_id.value())
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(ShowInsert::MissingArtist);
        }

        let model = shows::ActiveModel {
            start_time: Set(show.start_time),
            venue_id: Set(show.venue_id.value()),
            artist_id: Set(show.artist_id.value()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            "Added show {}: artist {} at venue {} on {}",
            model.id, model.artist_id, model.venue_id, model.start_time
        );
        Ok(ShowInsert::Inserted(model))
    }
}
