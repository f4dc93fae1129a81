mod artists;
mod init;
mod shows;
mod venues;

pub use artists::cmd_artists;
pub use init::cmd_init;
pub use shows::cmd_shows;
pub use venues::cmd_venues;
