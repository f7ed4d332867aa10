//! `--reset` and `--stats`.

use std::io::Write;
use std::sync::Arc;

use crate::error::PawResult;
use crate::services::DogService;
use crate::traits::KeyValueStore;

/// Remove every PawMatch key from the store.
pub fn handle_reset_command<W: Write>(store: &dyn KeyValueStore, out: &mut W) -> PawResult<()> {
    store.clear()?;
    let _ = writeln!(out, "PawMatch data cleared.");
    Ok(())
}

/// Print the counters shown on the profile screen.
pub fn handle_stats_command<W: Write>(store: Arc<dyn KeyValueStore>, out: &mut W) -> PawResult<()> {
    let service = DogService::new(store)?;
    let stats = service.stats();
    let _ = writeln!(out, "Swipes:    {}", stats.total_swipes);
    let _ = writeln!(out, "Matches:   {}", stats.matches);
    let _ = writeln!(out, "Favorites: {}", stats.favorites);
    Ok(())
}
