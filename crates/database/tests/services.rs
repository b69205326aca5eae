//! Integration tests for the service layer against an in-memory SQLite store

use chrono::{Duration, NaiveDate, NaiveDateTime};
use database::{
    db::create_connection,
    entities::{artist, show, venue},
    error::ServiceError,
    services::{artist::ArtistService, show::ShowService, venue::VenueService},
};
use migration::{Migrator, MigratorTrait};
use models::{
    datetime::{FormatStyle, format_datetime},
    forms::{NewArtist, NewShow, NewVenue, VenueForm},
    genres::Genres,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

async fn setup_db() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:")
        .await
        .expect("Should connect to in-memory database");
    Migrator::up(&db, None).await.expect("Should run migrations");
    db
}

fn new_venue(name: &str, city: &str, state: &str) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: Genres::new(["Jazz", "Reggae", "Swing"]),
        website: "https://www.themusicalhop.com".to_string(),
        facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
        image_link: "https://images.unsplash.com/photo-1543900694".to_string(),
        seeking_talent: true,
        seeking_description: "We are on the lookout for a local artist.".to_string(),
    }
}

fn new_artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        genres: Genres::new(["Rock n Roll"]),
        website: None,
        facebook_link: None,
        image_link: Some(format!("https://images.example.com/{}", name.len())),
        seeking_venue: false,
        seeking_description: None,
    }
}

struct Fixture {
    hop: venue::Model,
    pianos: venue::Model,
    park: venue::Model,
    petals: artist::Model,
    quevado: artist::Model,
    sax: artist::Model,
}

async fn seed(db: &DatabaseConnection) -> Fixture {
    let hop = VenueService::create(db, new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let pianos = VenueService::create(db, new_venue("The Dueling Pianos Bar", "New York", "NY"))
        .await
        .unwrap();
    let park = VenueService::create(
        db,
        new_venue("Park Square Live Music & Coffee", "San Francisco", "CA"),
    )
    .await
    .unwrap();

    let petals = ArtistService::create(db, new_artist("Guns N Petals")).await.unwrap();
    let quevado = ArtistService::create(db, new_artist("Matt Quevado")).await.unwrap();
    let sax = ArtistService::create(db, new_artist("The Wild Sax Band")).await.unwrap();

    Fixture {
        hop,
        pianos,
        park,
        petals,
        quevado,
        sax,
    }
}

async fn book(db: &DatabaseConnection, venue_id: i32, artist_id: i32, start: NaiveDateTime) {
    ShowService::create(
        db,
        NewShow {
            venue_id,
            artist_id,
            start_time: start,
        },
    )
    .await
    .unwrap();
}

async fn show_count(db: &DatabaseConnection) -> u64 {
    show::Entity::find().count(db).await.unwrap()
}

#[tokio::test]
async fn test_venue_round_trip() {
    let db = setup_db().await;
    let submitted = new_venue("The Musical Hop", "San Francisco", "CA");

    let created = VenueService::create(&db, submitted.clone()).await.unwrap();
    let fetched = VenueService::get(&db, created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(NewVenue::from(fetched), submitted);
}

#[tokio::test]
async fn test_artist_round_trip_keeps_genre_order() {
    let db = setup_db().await;
    let mut submitted = new_artist("Guns N Petals");
    submitted.genres = Genres::new(["Rock n Roll", "Blues", "Folk"]);

    let created = ArtistService::create(&db, submitted.clone()).await.unwrap();
    let fetched = ArtistService::get(&db, created.id).await.unwrap();

    assert_eq!(fetched.genres.as_slice(), ["Rock n Roll", "Blues", "Folk"]);
    assert_eq!(NewArtist::from(fetched), submitted);
}

#[tokio::test]
async fn test_invalid_form_writes_nothing() {
    let db = setup_db().await;
    let form = VenueForm {
        name: None,
        city: Some("San Francisco".to_string()),
        ..VenueForm::default()
    };

    assert!(form.validate().is_err());
    assert_eq!(venue::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_grouped_by_city_and_state() {
    let db = setup_db().await;
    let f = seed(&db).await;
    book(&db, f.hop.id, f.petals.id, now() + Duration::days(3)).await;
    book(&db, f.hop.id, f.sax.id, now() - Duration::days(3)).await;
    book(&db, f.park.id, f.quevado.id, now() + Duration::days(1)).await;

    let groups = VenueService::list_grouped(&db, now()).await.unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!((groups[0].city.as_str(), groups[0].state.as_str()), ("New York", "NY"));
    assert_eq!(groups[0].venues.len(), 1);
    assert_eq!(groups[0].venues[0].id, f.pianos.id);
    assert_eq!(groups[0].venues[0].num_upcoming_shows, 0);

    let sf = &groups[1];
    assert_eq!(sf.city, "San Francisco");
    let ids: Vec<i32> = sf.venues.iter().map(|v| v.id).collect();
    assert_eq!(ids, [f.hop.id, f.park.id]);
    assert_eq!(sf.venues[0].num_upcoming_shows, 1);
    assert_eq!(sf.venues[1].num_upcoming_shows, 1);
}

#[tokio::test]
async fn test_venue_search_is_case_insensitive() {
    let db = setup_db().await;
    let f = seed(&db).await;
    book(&db, f.hop.id, f.petals.id, now() + Duration::days(3)).await;

    let hop = VenueService::search(&db, "hop", now()).await.unwrap();
    assert_eq!(hop.count, 1);
    assert_eq!(hop.data[0].name, "The Musical Hop");
    assert_eq!(hop.data[0].num_upcoming_shows, 1);

    let music = VenueService::search(&db, "Music", now()).await.unwrap();
    let names: Vec<&str> = music.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["The Musical Hop", "Park Square Live Music & Coffee"]);

    let everything = VenueService::search(&db, "", now()).await.unwrap();
    assert_eq!(everything.count, 3);
}

#[tokio::test]
async fn test_artist_search_is_case_insensitive() {
    let db = setup_db().await;
    seed(&db).await;

    let a = ArtistService::search(&db, "A", now()).await.unwrap();
    let names: Vec<&str> = a.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["Guns N Petals", "Matt Quevado", "The Wild Sax Band"]);

    let band = ArtistService::search(&db, "band", now()).await.unwrap();
    assert_eq!(band.count, 1);
    assert_eq!(band.data[0].name, "The Wild Sax Band");

    let none = ArtistService::search(&db, "orchestra", now()).await.unwrap();
    assert_eq!(none.count, 0);
}

#[tokio::test]
async fn test_venue_detail_partitions_shows() {
    let db = setup_db().await;
    let f = seed(&db).await;
    book(&db, f.hop.id, f.petals.id, now() - Duration::days(30)).await;
    book(&db, f.hop.id, f.quevado.id, now() + Duration::days(2)).await;
    book(&db, f.hop.id, f.sax.id, now() + Duration::days(1)).await;
    book(&db, f.pianos.id, f.sax.id, now() + Duration::days(1)).await;

    let detail = VenueService::get_detail(&db, f.hop.id, now(), FormatStyle::Medium)
        .await
        .unwrap();

    assert_eq!(detail.venue.name, "The Musical Hop");
    assert_eq!(detail.shows.past_count(), 1);
    assert_eq!(detail.shows.upcoming_count(), 2);
    assert_eq!(detail.shows.total(), 3);
    assert_eq!(detail.shows.past[0].artist_name.as_deref(), Some("Guns N Petals"));
    // upcoming shows come out soonest first
    assert_eq!(detail.shows.upcoming[0].artist_id, f.sax.id);
    assert_eq!(
        detail.shows.upcoming[0].start_time,
        format_datetime(now() + Duration::days(1), FormatStyle::Medium)
    );
}

#[tokio::test]
async fn test_artist_detail_partitions_shows() {
    let db = setup_db().await;
    let f = seed(&db).await;
    book(&db, f.hop.id, f.sax.id, now()).await;
    book(&db, f.park.id, f.sax.id, now() + Duration::minutes(1)).await;

    let detail = ArtistService::get_detail(&db, f.sax.id, now(), FormatStyle::Full)
        .await
        .unwrap();

    // a show starting exactly now counts as past
    assert_eq!(detail.shows.past_count(), 1);
    assert_eq!(detail.shows.past[0].venue_id, f.hop.id);
    assert_eq!(detail.shows.upcoming_count(), 1);
    assert_eq!(
        detail.shows.upcoming[0].venue_name,
        "Park Square Live Music & Coffee"
    );
}

#[tokio::test]
async fn test_detail_of_missing_record_is_not_found() {
    let db = setup_db().await;

    let err = VenueService::get_detail(&db, 42, now(), FormatStyle::Medium)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "venue", id: 42 }));

    let err = ArtistService::get(&db, 7).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "artist", id: 7 }));
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let db = setup_db().await;
    let f = seed(&db).await;

    let mut replacement = new_venue("The Musical Hop Annex", "Oakland", "CA");
    replacement.seeking_talent = false;
    replacement.seeking_description = String::new();
    replacement.genres = Genres::new(["Folk"]);

    let updated = VenueService::update(&db, f.hop.id, replacement.clone())
        .await
        .unwrap();
    assert_eq!(updated.id, f.hop.id);

    let fetched = VenueService::get(&db, f.hop.id).await.unwrap();
    assert_eq!(NewVenue::from(fetched), replacement);
}

#[tokio::test]
async fn test_update_of_missing_record_fails() {
    let db = setup_db().await;

    let err = VenueService::update(&db, 99, new_venue("Ghost", "Nowhere", "NA"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { id: 99, .. }));

    let err = ArtistService::update(&db, 99, new_artist("Ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { id: 99, .. }));

    assert_eq!(venue::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(artist::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_venue_cascades_to_shows() {
    let db = setup_db().await;
    let f = seed(&db).await;
    book(&db, f.hop.id, f.petals.id, now() + Duration::days(1)).await;
    book(&db, f.hop.id, f.sax.id, now() - Duration::days(1)).await;
    book(&db, f.park.id, f.sax.id, now() + Duration::days(1)).await;

    let removed = VenueService::delete(&db, f.hop.id).await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(show_count(&db).await, 1);
    assert!(matches!(
        VenueService::get(&db, f.hop.id).await,
        Err(ServiceError::NotFound { .. })
    ));
    // the artists are untouched
    assert_eq!(artist::Entity::find().count(&db).await.unwrap(), 3);
}

#[tokio::test]
async fn test_delete_artist_cascades_to_shows() {
    let db = setup_db().await;
    let f = seed(&db).await;
    book(&db, f.hop.id, f.sax.id, now() + Duration::days(1)).await;
    book(&db, f.park.id, f.sax.id, now() + Duration::days(2)).await;
    book(&db, f.park.id, f.petals.id, now() + Duration::days(2)).await;

    let removed = ArtistService::delete(&db, f.sax.id).await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(show_count(&db).await, 1);
    let listing = ShowService::list(&db, FormatStyle::Medium).await.unwrap();
    assert_eq!(listing[0].artist_id, f.petals.id);
}

#[tokio::test]
async fn test_delete_of_missing_record_fails() {
    let db = setup_db().await;

    assert!(matches!(
        VenueService::delete(&db, 5).await,
        Err(ServiceError::NotFound { entity: "venue", id: 5 })
    ));
    assert!(matches!(
        ArtistService::delete(&db, 5).await,
        Err(ServiceError::NotFound { entity: "artist", id: 5 })
    ));
    assert!(matches!(
        ShowService::delete(&db, 5).await,
        Err(ServiceError::NotFound { entity: "show", id: 5 })
    ));
}

#[tokio::test]
async fn test_show_requires_existing_venue_and_artist() {
    let db = setup_db().await;
    let f = seed(&db).await;

    let err = ShowService::create(
        &db,
        NewShow {
            venue_id: 404,
            artist_id: f.petals.id,
            start_time: now(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::MissingReference { entity: "venue", id: 404 }
    ));

    let err = ShowService::create(
        &db,
        NewShow {
            venue_id: f.hop.id,
            artist_id: 404,
            start_time: now(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::MissingReference { entity: "artist", id: 404 }
    ));

    assert_eq!(show_count(&db).await, 0);
}

#[tokio::test]
async fn test_show_listing_is_decorated() {
    let db = setup_db().await;
    let f = seed(&db).await;
    book(&db, f.park.id, f.quevado.id, now() + Duration::days(5)).await;
    book(&db, f.hop.id, f.petals.id, now() - Duration::days(5)).await;

    let listing = ShowService::list(&db, FormatStyle::Full).await.unwrap();

    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].venue_name, "The Musical Hop");
    assert_eq!(listing[0].artist_name.as_deref(), Some("Guns N Petals"));
    assert_eq!(
        listing[0].start_time,
        format_datetime(now() - Duration::days(5), FormatStyle::Full)
    );
    assert_eq!(listing[1].venue_id, f.park.id);
    assert_eq!(listing[1].artist_image_link, f.quevado.image_link);
}

#[tokio::test]
async fn test_show_update_and_delete() {
    let db = setup_db().await;
    let f = seed(&db).await;
    let created = ShowService::create(
        &db,
        NewShow {
            venue_id: f.hop.id,
            artist_id: f.petals.id,
            start_time: now(),
        },
    )
    .await
    .unwrap();

    let moved = NewShow {
        venue_id: f.pianos.id,
        artist_id: f.quevado.id,
        start_time: now() + Duration::days(7),
    };
    ShowService::update(&db, created.id, moved).await.unwrap();

    let fetched = ShowService::get(&db, created.id).await.unwrap();
    assert_eq!(fetched.venue_id, f.pianos.id);
    assert_eq!(fetched.artist_id, f.quevado.id);
    assert_eq!(fetched.start_time, now() + Duration::days(7));

    ShowService::delete(&db, created.id).await.unwrap();
    assert_eq!(show_count(&db).await, 0);
}

#[tokio::test]
async fn test_simultaneous_shows_keep_booking_order() {
    let db = setup_db().await;
    let f = seed(&db).await;
    let start = now() + Duration::days(4);
    book(&db, f.park.id, f.sax.id, start).await;
    book(&db, f.park.id, f.petals.id, start).await;
    book(&db, f.park.id, f.quevado.id, start).await;

    let detail = VenueService::get_detail(&db, f.park.id, now(), FormatStyle::Medium)
        .await
        .unwrap();
    let artists: Vec<i32> = detail.shows.upcoming.iter().map(|s| s.artist_id).collect();
    assert_eq!(artists, [f.sax.id, f.petals.id, f.quevado.id]);

    book(&db, f.hop.id, f.sax.id, start).await;
    let detail = ArtistService::get_detail(&db, f.sax.id, now(), FormatStyle::Medium)
        .await
        .unwrap();
    let venues: Vec<i32> = detail.shows.upcoming.iter().map(|s| s.venue_id).collect();
    assert_eq!(venues, [f.park.id, f.hop.id]);
}
