// crates/popviz-data/src/worker.rs
//
// DataWorker: owns the result channel and the background fetch threads.
// All public API that popviz-ui calls lives here.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Condvar, Mutex,
};
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};

use popviz_core::data_types::DataResult;

use crate::fetch::{fetch_flag, fetch_series};

/// At most this many flag lookups run concurrently. The lookup endpoint is a
/// public service; a 60-name burst of parallel requests is both impolite and
/// a good way to get rate-limited.
const FLAG_CONCURRENCY: u32 = 4;

// ── DataWorker ────────────────────────────────────────────────────────────────

pub struct DataWorker {
    /// Result channel drained once per frame by AppContext::ingest_data_results.
    pub rx:   Receiver<DataResult>,
    tx:       Sender<DataResult>,
    shutdown: Arc<AtomicBool>,
    /// Limits concurrent flag threads: (active_count, Condvar). Max = FLAG_CONCURRENCY.
    flag_sem: Arc<(Mutex<u32>, Condvar)>,
}

impl Default for DataWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl DataWorker {
    pub fn new() -> Self {
        let (tx, rx) = bounded(512);
        Self {
            rx,
            tx,
            shutdown: Arc::new(AtomicBool::new(false)),
            flag_sem: Arc::new((Mutex::new(0), Condvar::new())),
        }
    }

    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Fetch the full series once, then resolve flags for every top-ranked
    /// country name. The series is sent as soon as it parses — flag results
    /// trickle in afterwards and overwrite the placeholder as they land.
    pub fn fetch_series(&self) {
        let tx  = self.tx.clone();
        let sd  = self.shutdown.clone();
        let sem = self.flag_sem.clone();

        thread::spawn(move || {
            if sd.load(Ordering::Relaxed) {
                return;
            }
            let series = match fetch_series() {
                Ok(s) => s,
                Err(e) => {
                    // No retry: the UI logs this and stays on the loading screen.
                    let _ = tx.send(DataResult::Error { msg: format!("{e:#}") });
                    return;
                }
            };

            // Collect names before the series moves into the channel.
            let names = series.top_names();
            eprintln!(
                "[data] series loaded: {} snapshots, {} flag lookups",
                series.snapshot_count(),
                names.len()
            );
            if tx.send(DataResult::Series(series)).is_err() {
                return;
            }

            for name in names {
                spawn_flag_fetch(name, tx.clone(), sd.clone(), sem.clone());
            }
        });
    }
}

/// One flag lookup on its own thread, gated by the semaphore.
///
/// The gatekeeper acquires the slot *before* doing any network work, so at
/// most FLAG_CONCURRENCY requests are in flight while the rest of the threads
/// wait on the condvar.
fn spawn_flag_fetch(
    name: String,
    tx:   Sender<DataResult>,
    sd:   Arc<AtomicBool>,
    sem:  Arc<(Mutex<u32>, Condvar)>,
) {
    thread::spawn(move || {
        {
            let (lock, cvar) = &*sem;
            let mut count = lock.lock().unwrap();
            while *count >= FLAG_CONCURRENCY {
                count = cvar.wait(count).unwrap();
            }
            *count += 1;
        }
        // RAII release guard — decrements count and wakes the next waiter on drop
        struct SemGuard(Arc<(Mutex<u32>, Condvar)>);
        impl Drop for SemGuard {
            fn drop(&mut self) {
                let (lock, cvar) = &*self.0;
                *lock.lock().unwrap() -= 1;
                cvar.notify_one();
            }
        }
        let _guard = SemGuard(sem);

        if sd.load(Ordering::Relaxed) {
            return;
        }
        match fetch_flag(&name) {
            Ok((url, bytes)) => {
                let _ = tx.send(DataResult::Flag { name, url, bytes });
            }
            // Absorbed: the placeholder flag stays for this country.
            Err(e) => eprintln!("[data] flag {name}: {e:#}"),
        }
    });
}
