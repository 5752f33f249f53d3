use std::future::Future;

use tokio::task::JoinHandle;

/// Keeps handles to fire-and-forget work so it can be torn down on exit.
///
/// Tasks are never cancelled individually: two requests for the same thing
/// both run to completion.
#[derive(Default)]
pub struct TaskManager {
    tasks: Vec<JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|handle| !handle.is_finished());
        self.tasks.push(tokio::spawn(task));
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|handle| !handle.is_finished()).count()
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.drain(..) {
            handle.abort();
        }
    }
}
