//! Store and service scenarios against a temporary `SQLite` file.

use chrono::{Duration, Utc};
use fyyur::config::Config;
use fyyur::db::Store;
use fyyur::domain::{ArtistId, Genres, VenueId};
use fyyur::entities::{artists, shows, venues};
use fyyur::models::{NewArtist, NewShow, NewVenue, VenuePatch};
use fyyur::services::BookingError;
use fyyur::state::SharedState;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, Set};

async fn spawn_state() -> SharedState {
    let db_path =
        std::env::temp_dir().join(format!("fyyur-booking-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    SharedState::new(config)
        .await
        .expect("failed to create shared state")
}

fn new_venue(name: &str, city: &str, state: &str, address: Option<&str>) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: address.map(str::to_string),
        genres: Genres::new(vec!["Jazz".to_string(), "Folk".to_string()]),
        ..NewVenue::default()
    }
}

fn new_artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        image_link: Some(format!("https://img.example/{name}.png")),
        ..NewArtist::default()
    }
}

async fn insert_artist_with_id(store: &Store, id: i32, name: &str) {
    artists::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        city: Set("San Francisco".to_string()),
        state: Set("CA".to_string()),
        genres: Set("Rock n Roll".to_string()),
        seeking_venue: Set(false),
        ..Default::default()
    }
    .insert(&store.conn)
    .await
    .expect("insert artist");
}

#[tokio::test]
async fn venue_detail_splits_past_and_upcoming_shows() {
    let state = spawn_state().await;

    let venue = state
        .venue_service
        .create_venue(new_venue("The Fillmore", "SF", "CA", Some("1805 Geary Blvd")))
        .await
        .expect("create venue");
    assert_eq!(venue.id.value(), 1);

    insert_artist_with_id(&state.store, 9, "Guns N Petals").await;

    state
        .show_service
        .create_show(NewShow {
            venue_id: venue.id,
            artist_id: ArtistId::new(9),
            start_time: Utc::now() - Duration::days(30),
        })
        .await
        .expect("create show");

    let detail = state
        .venue_service
        .get_venue_detail(VenueId::new(1))
        .await
        .expect("venue detail");

    assert_eq!(detail.shows.past_count(), 1);
    assert_eq!(detail.shows.upcoming_count(), 0);
    assert_eq!(detail.shows.past()[0].artist_id.value(), 9);
    assert_eq!(detail.shows.past()[0].artist_name, "Guns N Petals");
    assert_eq!(
        detail.venue.genres.as_slice(),
        ["Jazz".to_string(), "Folk".to_string()]
    );
}

#[tokio::test]
async fn artist_detail_joins_venue_fields() {
    let state = spawn_state().await;

    let venue = state
        .venue_service
        .create_venue(new_venue("The Dueling Pianos Bar", "New York", "NY", None))
        .await
        .unwrap();
    let artist = state
        .artist_service
        .create_artist(new_artist("Matt Quevedo"))
        .await
        .unwrap();

    for days in [-3, 5, 10] {
        state
            .show_service
            .create_show(NewShow {
                venue_id: venue.id,
                artist_id: artist.id,
                start_time: Utc::now() + Duration::days(days),
            })
            .await
            .unwrap();
    }

    let detail = state
        .artist_service
        .get_artist_detail(artist.id)
        .await
        .unwrap();

    assert_eq!(detail.shows.past_count(), 1);
    assert_eq!(detail.shows.upcoming_count(), 2);
    assert!(
        detail
            .shows
            .upcoming()
            .windows(2)
            .all(|w| w[0].start_time <= w[1].start_time)
    );
    assert_eq!(detail.shows.upcoming()[0].venue_name, "The Dueling Pianos Bar");
}

#[tokio::test]
async fn search_venues_is_case_insensitive_and_counts_upcoming() {
    let state = spawn_state().await;

    let fillmore = state
        .venue_service
        .create_venue(new_venue("The Fillmore", "SF", "CA", None))
        .await
        .unwrap();
    state
        .venue_service
        .create_venue(new_venue("Park Square Live Music", "SF", "CA", None))
        .await
        .unwrap();
    let artist = state
        .artist_service
        .create_artist(new_artist("The Wild Sax Band"))
        .await
        .unwrap();
    state
        .show_service
        .create_show(NewShow {
            venue_id: fillmore.id,
            artist_id: artist.id,
            start_time: Utc::now() - Duration::days(1),
        })
        .await
        .unwrap();

    let results = state.listing.search_venues("fill").await.unwrap();
    assert_eq!(results.count(), 1);
    assert_eq!(results.data()[0].name, "The Fillmore");
    assert_eq!(results.data()[0].upcoming_show_count, 0);

    let all = state.listing.search_venues("").await.unwrap();
    assert_eq!(all.count(), 2);

    let none = state.listing.search_venues("100%").await.unwrap();
    assert_eq!(none.count(), 0);
}

#[tokio::test]
async fn search_artists_counts_upcoming_shows() {
    let state = spawn_state().await;

    let venue = state
        .venue_service
        .create_venue(new_venue("The Musical Hop", "San Francisco", "CA", None))
        .await
        .unwrap();
    let artist = state
        .artist_service
        .create_artist(new_artist("Guns N Petals"))
        .await
        .unwrap();
    state
        .show_service
        .create_show(NewShow {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: Utc::now() + Duration::days(7),
        })
        .await
        .unwrap();

    let results = state.listing.search_artists("PETAL").await.unwrap();
    assert_eq!(results.count(), 1);
    assert_eq!(results.data()[0].upcoming_show_count, 1);
}

#[tokio::test]
async fn venues_are_grouped_by_city_and_state() {
    let state = spawn_state().await;

    for (name, city) in [("A", "SF"), ("B", "LA"), ("C", "SF")] {
        state
            .venue_service
            .create_venue(new_venue(name, city, "CA", None))
            .await
            .unwrap();
    }

    let areas = state.listing.list_venues_grouped_by_location().await.unwrap();

    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].city.as_str(), areas[0].venues.len()), ("SF", 2));
    assert_eq!((areas[1].city.as_str(), areas[1].venues.len()), ("LA", 1));
}

#[tokio::test]
async fn duplicate_venue_is_rejected_without_a_second_row() {
    let state = spawn_state().await;
    let venue = new_venue("The Fillmore", "SF", "CA", Some("1805 Geary Blvd"));

    state.venue_service.create_venue(venue.clone()).await.unwrap();
    let err = state.venue_service.create_venue(venue).await.unwrap_err();

    assert!(matches!(err, BookingError::AlreadyExists { entity: "Venue", .. }));
    let rows = venues::Entity::find().count(&state.store.conn).await.unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn duplicate_artist_is_rejected() {
    let state = spawn_state().await;

    state
        .artist_service
        .create_artist(new_artist("Guns N Petals"))
        .await
        .unwrap();
    let err = state
        .artist_service
        .create_artist(new_artist("Guns N Petals"))
        .await
        .unwrap_err();

    assert!(matches!(err, BookingError::AlreadyExists { entity: "Artist", .. }));
}

#[tokio::test]
async fn deleting_a_missing_venue_is_not_found() {
    let state = spawn_state().await;

    let err = state
        .venue_service
        .delete_venue(VenueId::new(42))
        .await
        .unwrap_err();

    assert!(matches!(err, BookingError::NotFound { entity: "Venue", id: 42 }));
}

#[tokio::test]
async fn deleting_a_venue_removes_its_shows() {
    let state = spawn_state().await;

    let venue = state
        .venue_service
        .create_venue(new_venue("The Fillmore", "SF", "CA", None))
        .await
        .unwrap();
    let artist = state
        .artist_service
        .create_artist(new_artist("Guns N Petals"))
        .await
        .unwrap();
    state
        .show_service
        .create_show(NewShow {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: Utc::now(),
        })
        .await
        .unwrap();

    state.venue_service.delete_venue(venue.id).await.unwrap();

    let remaining = shows::Entity::find().count(&state.store.conn).await.unwrap();
    assert_eq!(remaining, 0);
    assert!(state.show_service.list_shows().await.unwrap().is_empty());
}

#[tokio::test]
async fn show_for_missing_artist_is_not_found() {
    let state = spawn_state().await;

    let venue = state
        .venue_service
        .create_venue(new_venue("The Fillmore", "SF", "CA", None))
        .await
        .unwrap();

    let err = state
        .show_service
        .create_show(NewShow {
            venue_id: venue.id,
            artist_id: ArtistId::new(77),
            start_time: Utc::now(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, BookingError::NotFound { entity: "Artist", id: 77 }));
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let state = spawn_state().await;

    let venue = state
        .venue_service
        .create_venue(new_venue("The Fillmore", "SF", "CA", Some("1805 Geary Blvd")))
        .await
        .unwrap();

    let patch = VenuePatch {
        phone: Some(Some("415-555-0101".to_string())),
        address: Some(None),
        ..VenuePatch::default()
    };
    let updated = state
        .venue_service
        .update_venue(venue.id, patch)
        .await
        .unwrap();

    assert_eq!(updated.name, "The Fillmore");
    assert_eq!(updated.phone.as_deref(), Some("415-555-0101"));
    assert_eq!(updated.address, None);

    let err = state
        .venue_service
        .update_venue(VenueId::new(999), VenuePatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::NotFound { .. }));
}

#[tokio::test]
async fn blank_names_and_comma_genres_are_rejected() {
    let state = spawn_state().await;

    let err = state
        .venue_service
        .create_venue(new_venue("   ", "SF", "CA", None))
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));

    let mut artist = new_artist("Matt Quevedo");
    artist.genres = Genres::new(vec!["Rock, Roll".to_string()]);
    let err = state.artist_service.create_artist(artist).await.unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[tokio::test]
async fn show_listing_carries_both_parties() {
    let state = spawn_state().await;

    let venue = state
        .venue_service
        .create_venue(new_venue("The Musical Hop", "San Francisco", "CA", None))
        .await
        .unwrap();
    let artist = state
        .artist_service
        .create_artist(new_artist("The Wild Sax Band"))
        .await
        .unwrap();
    let created = state
        .show_service
        .create_show(NewShow {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: Utc::now() + Duration::days(2),
        })
        .await
        .unwrap();

    let listing = state.show_service.list_shows().await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].id, created.id);
    assert_eq!(listing[0].artist_id, artist.id);
    assert_eq!(listing[0].venue_id, venue.id);
    assert_eq!(created.venue_name, "The Musical Hop");
    assert_eq!(created.artist_name, "The Wild Sax Band");
    assert!(created.artist_image_link.is_some());
}

#[tokio::test]
async fn store_fetch_all_and_identity_lookups() {
    let state = spawn_state().await;
    let store = &state.store;

    state
        .venue_service
        .create_venue(new_venue("The Musical Hop", "San Francisco", "CA", Some("1015 Folsom Street")))
        .await
        .unwrap();
    state
        .venue_service
        .create_venue(new_venue("The Dueling Pianos Bar", "New York", "NY", None))
        .await
        .unwrap();
    state
        .artist_service
        .create_artist(new_artist("Matt Quevedo"))
        .await
        .unwrap();

    let all_venues = store.list_venues().await.unwrap();
    assert_eq!(
        all_venues.iter().map(|v| v.id.value()).collect::<Vec<_>>(),
        [1, 2]
    );
    assert_eq!(store.list_artists().await.unwrap().len(), 1);

    let hop = store
        .find_venue_by_identity("The Musical Hop", "CA", Some("1015 Folsom Street"))
        .await
        .unwrap();
    assert!(hop.is_some());

    let no_address = store
        .find_venue_by_identity("The Dueling Pianos Bar", "NY", None)
        .await
        .unwrap();
    assert!(no_address.is_some());

    let wrong_state = store
        .find_venue_by_identity("The Musical Hop", "NY", Some("1015 Folsom Street"))
        .await
        .unwrap();
    assert!(wrong_state.is_none());

    let artist = store
        .find_artist_by_identity("Matt Quevedo", "San Francisco", "CA")
        .await
        .unwrap();
    assert_eq!(artist.map(|a| a.name).as_deref(), Some("Matt Quevedo"));
}

#[tokio::test]
async fn search_folds_non_ascii_letters() {
    let state = spawn_state().await;

    for name in ["CAFÉ DU NORD", "Ölhalle", "The Fillmore"] {
        state
            .venue_service
            .create_venue(new_venue(name, "SF", "CA", None))
            .await
            .unwrap();
    }
    state
        .artist_service
        .create_artist(new_artist("Björk Ensemble"))
        .await
        .unwrap();

    for term in ["café", "CAFÉ", "Café du"] {
        let results = state.listing.search_venues(term).await.unwrap();
        assert_eq!(results.count(), 1, "{term}");
        assert_eq!(results.data()[0].name, "CAFÉ DU NORD");
    }
    for term in ["ölhalle", "ÖLHALLE"] {
        let results = state.listing.search_venues(term).await.unwrap();
        assert_eq!(results.count(), 1, "{term}");
        assert_eq!(results.data()[0].name, "Ölhalle");
    }

    let artists = state.listing.search_artists("BJÖRK").await.unwrap();
    assert_eq!(artists.count(), 1);
}

#[tokio::test]
async fn search_terms_are_matched_as_given() {
    let state = spawn_state().await;

    for name in ["Theatre Royal", "The Fillmore", "Club 100% Live"] {
        state
            .venue_service
            .create_venue(new_venue(name, "SF", "CA", None))
            .await
            .unwrap();
    }

    let spaced = state.listing.search_venues("The ").await.unwrap();
    assert_eq!(spaced.count(), 1);
    assert_eq!(spaced.data()[0].name, "The Fillmore");

    let percent = state.listing.search_venues("100%").await.unwrap();
    assert_eq!(percent.count(), 1);
    assert_eq!(percent.data()[0].name, "Club 100% Live");

    let underscore = state.listing.search_venues("Th_").await.unwrap();
    assert_eq!(underscore.count(), 0);
}

#[tokio::test]
async fn artists_in_another_city_are_not_duplicates() {
    let state = spawn_state().await;

    state
        .artist_service
        .create_artist(new_artist("Guns N Petals"))
        .await
        .unwrap();
    let elsewhere = NewArtist {
        city: "Oakland".to_string(),
        ..new_artist("Guns N Petals")
    };
    state.artist_service.create_artist(elsewhere).await.unwrap();

    assert_eq!(state.store.list_artists().await.unwrap().len(), 2);
    let found = state
        .store
        .find_artist_by_identity("Guns N Petals", "Oakland", "CA")
        .await
        .unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn failed_venue_delete_keeps_venue_and_shows() {
    let state = spawn_state().await;

    let venue = state
        .venue_service
        .create_venue(new_venue("The Fillmore", "SF", "CA", None))
        .await
        .unwrap();
    let artist = state
        .artist_service
        .create_artist(new_artist("Guns N Petals"))
        .await
        .unwrap();
    state
        .show_service
        .create_show(NewShow {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time: Utc::now() + Duration::days(3),
        })
        .await
        .unwrap();

    state
        .store
        .conn
        .execute_unprepared(
            "CREATE TRIGGER block_venue_delete BEFORE DELETE ON venues \
             BEGIN SELECT RAISE(ABORT, 'venue deletes disabled'); END;",
        )
        .await
        .unwrap();

    let err = state.venue_service.delete_venue(venue.id).await.unwrap_err();
    match &err {
        BookingError::Persistence { entity, message } => {
            assert_eq!(*entity, "Venue");
            assert!(message.contains("venue deletes disabled"), "{message}");
        }
        other => panic!("expected a persistence error, got {other:?}"),
    }

    let rows = shows::Entity::find().count(&state.store.conn).await.unwrap();
    assert_eq!(rows, 1);
    let detail = state.venue_service.get_venue_detail(venue.id).await.unwrap();
    assert_eq!(detail.shows.upcoming().len(), 1);

    state
        .store
        .conn
        .execute_unprepared("DROP TRIGGER block_venue_delete;")
        .await
        .unwrap();
    state.venue_service.delete_venue(venue.id).await.unwrap();
    assert!(state.show_service.list_shows().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_venue_insert_writes_nothing() {
    let state = spawn_state().await;

    state
        .store
        .conn
        .execute_unprepared(
            "CREATE TRIGGER block_venue_insert BEFORE INSERT ON venues \
             BEGIN SELECT RAISE(ABORT, 'venue inserts disabled'); END;",
        )
        .await
        .unwrap();

    let err = state
        .venue_service
        .create_venue(new_venue("The Fillmore", "SF", "CA", None))
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::Persistence { entity: "Venue", .. }));

    let rows = venues::Entity::find().count(&state.store.conn).await.unwrap();
    assert_eq!(rows, 0);

    state
        .store
        .conn
        .execute_unprepared("DROP TRIGGER block_venue_insert;")
        .await
        .unwrap();
    let venue = state
        .venue_service
        .create_venue(new_venue("The Fillmore", "SF", "CA", None))
        .await
        .unwrap();
    assert_eq!(state.store.list_venues().await.unwrap()[0].id, venue.id);
}
