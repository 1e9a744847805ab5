// src/panel/tasks.rs
//
// Where backend calls run. The panel hands over a job; the job sends its
// completion into the panel's channel, and the panel applies it in `poll()`.
// Either way, state is only ever touched by the thread that owns the panel.

use std::sync::{Arc, Mutex};
use std::thread;

pub type Job = Box<dyn FnOnce() + Send + 'static>;

pub trait Spawn {
    /// Start `job`, or hand it back untouched if it cannot be started.
    fn spawn(&self, job: Job) -> Result<(), Job>;
}

/// Run the job right away on the caller's thread (CLI, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct Inline;

impl Spawn for Inline {
    fn spawn(&self, job: Job) -> Result<(), Job> {
        job();
        Ok(())
    }
}

/// One short-lived worker thread per request (GUI).
/// `wake` runs after the job finished, e.g. to request a repaint.
#[derive(Clone, Default)]
pub struct Threaded {
    wake: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Threaded {
    pub fn new() -> Self { Self { wake: None } }

    pub fn with_wake<F>(wake: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self { wake: Some(Arc::new(wake)) }
    }
}

impl Spawn for Threaded {
    fn spawn(&self, job: Job) -> Result<(), Job> {
        // The thread takes the job out of the slot; if it never starts, we take it back
        let slot = Arc::new(Mutex::new(Some(job)));
        let theirs = Arc::clone(&slot);
        let wake = self.wake.clone();

        let res = thread::Builder::new()
            .name(s!("fetch"))
            .spawn(move || {
                let job = theirs.lock().ok().and_then(|mut j| j.take());
                if let Some(job) = job { job(); }
                if let Some(w) = wake { w(); }
            });

        match res {
            Ok(_) => Ok(()),
            Err(e) => {
                loge!("Tasks: could not start fetch thread: {}", e);
                let job = slot.lock().ok().and_then(|mut j| j.take());
                match job {
                    Some(job) => Err(job),
                    None => Ok(()),
                }
            }
        }
    }
}
