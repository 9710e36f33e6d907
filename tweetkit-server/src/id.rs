use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

const SEQUENCE_BITS: u32 = 22;

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Time-ordered tweet id: milliseconds since the epoch in the high bits, bumped
/// by one whenever two ids land in the same millisecond.
pub fn next_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default();
    let floor = millis << SEQUENCE_BITS;

    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let id = floor.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, id, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return id.to_string(),
            Err(actual) => last = actual,
        }
    }
}
