//! Venue command handler

use crate::domain::VenueId;
use crate::state::SharedState;

pub async fn cmd_venues(
    state: &SharedState,
    id: Option<i32>,
    search: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(id) = id {
        return show_venue(state, id).await;
    }

    if let Some(term) = search {
        let results = state.listing.search_venues(term).await?;
        println!("{} venue(s) matching '{term}'", results.count());
        println!("{:-<60}", "");
        for hit in results.data() {
            println!(
                "• {} (ID: {}) | {} upcoming show(s)",
                hit.name, hit.id, hit.upcoming_show_count
            );
        }
        return Ok(());
    }

    let areas = state.listing.list_venues_grouped_by_location().await?;
    if areas.is_empty() {
        println!("No venues listed yet.");
        return Ok(());
    }

    for area in areas {
        println!("{}, {}", area.city, area.state);
        for venue in area.venues {
            println!("  • {} (ID: {})", venue.name, venue.id);
        }
    }

    Ok(())
}

async fn show_venue(state: &SharedState, id: i32) -> anyhow::Result<()> {
    let detail = state.venue_service.get_venue_detail(VenueId::new(id)).await?;
    let venue = &detail.venue;

    println!("{} (ID: {})", venue.name, venue.id);
    println!("{:-<60}", "");
    println!("Location: {}, {}", venue.city, venue.state);
    if let Some(address) = &venue.address {
        println!("Address:  {address}");
    }
    if !venue.genres.is_empty() {
        println!("Genres:   {}", venue.genres.as_slice().join(", "));
    }
    if venue.seeking_talent {
        println!(
            "Seeking talent: {}",
            venue.seeking_description.as_deref().unwrap_or("yes")
        );
    }

    println!();
    println!("Upcoming shows ({})", detail.shows.upcoming_count());
    for show in detail.shows.upcoming() {
        println!("  {} | {}", show.start_time, show.artist_name);
    }

    println!("Past shows ({})", detail.shows.past_count());
    for show in detail.shows.past() {
        println!("  {} | {}", show.start_time, show.artist_name);
    }

    Ok(())
}
