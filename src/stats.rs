use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Default)]
pub struct Stats {
    start_ms: AtomicU64,

    commands: AtomicU64,
    solves: AtomicU64,
    skips: AtomicU64,
    clears: AtomicU64,
    keystrokes: AtomicU64,
}

impl Stats {
    pub fn new(now_ms: u64) -> Arc<Self> {
        let s = Arc::new(Self::default());
        s.start_ms.store(now_ms, Ordering::Relaxed);
        s
    }

    pub fn inc_command(&self) {
        self.commands.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_solve(&self) {
        self.solves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_skip(&self) {
        self.skips.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_clear(&self) {
        self.clears.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_keystrokes(&self, n: u64) {
        self.keystrokes.fetch_add(n, Ordering::Relaxed);
    }

    pub fn snapshot(&self, now_ms: u64) -> StatsSnapshot {
        let start = self.start_ms.load(Ordering::Relaxed);
        StatsSnapshot {
            now_ms,
            up_sec: now_ms.saturating_sub(start) / 1000,
            commands: self.commands.load(Ordering::Relaxed),
            solves: self.solves.load(Ordering::Relaxed),
            skips: self.skips.load(Ordering::Relaxed),
            clears: self.clears.load(Ordering::Relaxed),
            keystrokes: self.keystrokes.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub now_ms: u64,
    pub up_sec: u64,
    pub commands: u64,
    pub solves: u64,
    pub skips: u64,
    pub clears: u64,
    pub keystrokes: u64,
}
