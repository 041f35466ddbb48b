use std::{fmt::Display, sync::atomic};

/// A terminal progress bar shared between worker threads.
#[derive(Default)]
pub struct Progress {
    current: atomic::AtomicUsize,
    done: atomic::AtomicBool,
    max: usize,
}

enum DoneState {
    Done,
    FirstDone,
    NotDone,
}

impl Progress {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            ..Default::default()
        }
    }

    pub fn inc(&self) -> usize {
        self.current.fetch_add(1, atomic::Ordering::SeqCst)
    }

    pub fn get_raw(&self) -> usize {
        self.current.load(atomic::Ordering::SeqCst)
    }

    pub fn print(&self) {
        use std::io::Write;
        match self.done_state() {
            DoneState::Done => (),
            DoneState::FirstDone => {
                println!("\r{}", self);
                let _ = std::io::stdout().flush();
            }
            DoneState::NotDone => {
                print!("\r{}", self);
                let _ = std::io::stdout().flush();
            }
        }
    }

    fn get_done(&self) -> bool {
        self.done.load(atomic::Ordering::SeqCst)
    }

    fn set_done(&self) {
        self.done.store(true, atomic::Ordering::SeqCst);
    }

    fn done_state(&self) -> DoneState {
        if self.get_done() {
            return DoneState::Done;
        }
        if self.get_raw() >= self.max {
            self.set_done();
            DoneState::FirstDone
        } else {
            DoneState::NotDone
        }
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = 50;
        let val = self.get_raw() as f32 / self.max as f32;
        let width = ((n - 1) as f32 * val).round() as usize;
        write!(
            f,
            "[{empty:=>width_left$}>{empty:.<width_right$}] {val:.1}%",
            empty = "",
            width_left = width,
            width_right = n - width,
            val = 100. * val
        )
    }
}
