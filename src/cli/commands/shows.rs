use crate::state::SharedState;

pub async fn cmd_shows(state: &SharedState) -> anyhow::Result<()> {
    let shows = state.show_service.list_shows().await?;

    if shows.is_empty() {
        println!("No shows booked.");
        return Ok(());
    }

    println!("Shows ({} total)", shows.len());
    println!("{:-<70}", "");

    for show in shows {
        println!(
            "{} | {} (ID: {}) at {} (ID: {})",
            show.start_time, show.artist_name, show.artist_id, show.venue_name, show.venue_id
        );
    }

    Ok(())
}
