use std::sync::atomic::{AtomicU64, Ordering};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Count of requests served through the static asset route. In-process
/// only; restarts start over at zero.
#[derive(Debug, Default)]
pub struct FileserverHits(AtomicU64);

impl FileserverHits {
    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn load(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// Middleware wrapped around the `/app` fileserver. Every traversal bumps
/// the counter exactly once before the request continues.
pub async fn track_fileserver_hit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.fileserver_hits.record();
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn concurrent_increments_are_not_lost() {
        let hits = Arc::new(FileserverHits::default());
        let threads: u64 = 8;
        let per_thread: u64 = 1000;

        std::thread::scope(|s| {
            for _ in 0..threads {
                let hits = Arc::clone(&hits);
                s.spawn(move || {
                    for _ in 0..per_thread {
                        hits.record();
                    }
                });
            }
        });

        assert_eq!(hits.load(), threads * per_thread);
    }

    #[test]
    fn reset_returns_counter_to_zero() {
        let hits = FileserverHits::default();
        hits.record();
        hits.record();
        assert_eq!(hits.load(), 2);
        hits.reset();
        assert_eq!(hits.load(), 0);
    }
}
