use super::prelude::*;

pub fn purge_expired_spots(store: &mut SpotStore, now: Timestamp) -> usize {
    let purged = store.purge_expired(now);
    if purged > 0 {
        log::info!("Purged {purged} expired spot(s)");
    }
    purged
}
