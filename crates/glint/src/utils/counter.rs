use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

/// A cheap shared event counter. Incrementing is relaxed since addition is
/// associative and commutative.
pub struct Counter {
    atomic: AtomicU64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }

    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed);
    }

    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

lazy_static::lazy_static! {
    pub static ref REGISTRY: Mutex<HashMap<&'static str, Arc<Counter>>> = Mutex::new(HashMap::new());
}

/// Logs every registered counter, typically once at the end of a render.
pub fn report_counters() {
    let counters = REGISTRY.lock().unwrap();
    for (name, counter) in counters.iter() {
        log::info!(target: "counter_report", "{}: {}", name, counter.value());
    }
}

/// Bumps the counter registered under the given name, registering it on
/// first use.
#[macro_export]
macro_rules! counter {
    ($descr:literal) => {{
        use $crate::utils::counter::{Counter, REGISTRY};
        use std::sync::Arc;
        lazy_static::lazy_static! {
            static ref COUNTER_REF: Arc<Counter> = REGISTRY
                .lock()
                .unwrap()
                .entry($descr)
                .or_insert_with(|| Arc::new(Counter::new()))
                .clone();
        }
        COUNTER_REF.inc();
    }};
}

pub use counter;
