use crate::domain::ArtistId;
use crate::state::SharedState;

pub async fn cmd_artists(
    state: &SharedState,
    id: Option<i32>,
    search: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(id) = id {
        return show_artist(state, id).await;
    }

    if let Some(term) = search {
        let results = state.listing.search_artists(term).await?;
        println!("{} artist(s) matching '{term}'", results.count());
        println!("{:-<60}", "");
        for hit in results.data() {
            println!(
                "• {} (ID: {}) | {} upcoming show(s)",
                hit.name, hit.id, hit.upcoming_show_count
            );
        }
        return Ok(());
    }

    let artists = state.listing.list_artists().await?;
    if artists.is_empty() {
        println!("No artists listed yet.");
        return Ok(());
    }

    println!("Artists ({} total)", artists.len());
    println!("{:-<60}", "");
    for artist in artists {
        println!("• {} (ID: {})", artist.name, artist.id);
    }

    Ok(())
}

async fn show_artist(state: &SharedState, id: i32) -> anyhow::Result<()> {
    let detail = state
        .artist_service
        .get_artist_detail(ArtistId::new(id))
        .await?;
    let artist = &detail.artist;

    println!("{} (ID: {})", artist.name, artist.id);
    println!("{:-<60}", "");
    println!("From: {}, {}", artist.city, artist.state);
    if !artist.genres.is_empty() {
        println!("Genres: {}", artist.genres.as_slice().join(", "));
    }
    if artist.seeking_venue {
        println!(
            "Seeking venues: {}",
            artist.seeking_description.as_deref().unwrap_or("yes")
        );
    }

    println!();
    println!("Upcoming shows ({})", detail.shows.upcoming_count());
    for show in detail.shows.upcoming() {
        println!("  {} | {}", show.start_time, show.venue_name);
    }

    println!("Past shows ({})", detail.shows.past_count());
    for show in detail.shows.past() {
        println!("  {} | {}", show.start_time, show.venue_name);
    }

    Ok(())
}
