use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use super::common::{self, SharedSlice};

type Job = Box<dyn FnOnce() + Send + 'static>;

struct Worker {
    thread: Option<thread::JoinHandle<()>>,
}

impl Worker {
    fn new(jobs: Arc<Mutex<mpsc::Receiver<Job>>>) -> Worker {
        let thread = thread::spawn(move || {
            loop {
                let job = jobs.lock().expect("fork-join job queue poisoned").recv();
                match job {
                    Ok(job) => job(),
                    Err(_) => break,
                }
            }
        });
        Worker {
            thread: Some(thread),
        }
    }
}

/// Fixed-size worker pool for the fork-join driver. Workers pull boxed jobs
/// from a shared channel; dropping the pool closes the channel and joins
/// every worker.
pub struct ForkJoinPool {
    workers: Vec<Worker>,
    sender: Option<mpsc::Sender<Job>>,
}

impl ForkJoinPool {
    pub fn new(workers: usize) -> ForkJoinPool {
        let count = workers.max(1);
        let (sender, receiver) = mpsc::channel();
        let receiver = Arc::new(Mutex::new(receiver));
        let mut workers = Vec::with_capacity(count);
        for _ in 0..count {
            workers.push(Worker::new(Arc::clone(&receiver)));
        }

        ForkJoinPool {
            workers,
            sender: Some(sender),
        }
    }

    /// One worker per available hardware thread.
    pub fn with_default_size() -> ForkJoinPool {
        let count = thread::available_parallelism().map_or(1, |n| n.get());
        ForkJoinPool::new(count)
    }

    pub fn workers(&self) -> usize {
        self.workers.len()
    }

    fn execute(&self, job: Job) {
        self.sender
            .as_ref()
            .expect("fork-join pool already shut down")
            .send(job)
            .expect("fork-join workers hung up");
    }

    /// One pass at the given gap: split `[0, gap)` into one contiguous chunk
    /// of offsets per worker and block until every chunk reports done. The
    /// blocking receive is the inter-pass barrier; the next, smaller gap must
    /// not start while any offset of this pass is still running.
    fn run_pass<T: Ord + Send + 'static>(&self, data: SharedSlice<T>, gap: usize) {
        let chunk = gap.div_ceil(self.workers.len());
        let (done_tx, done_rx) = mpsc::channel();

        let mut chunks = 0;
        let mut start = 0;
        while start < gap {
            let end = (start + chunk).min(gap);
            let done_tx = done_tx.clone();
            self.execute(Box::new(move || {
                for i in start..end {
                    // SAFETY: every offset of one pass writes a distinct
                    // residue class mod `gap`, so chunks never overlap.
                    unsafe { common::gap_insertion_sort_raw(data.ptr(), data.len(), i, gap) };
                }
                let _ = done_tx.send(());
            }));
            chunks += 1;
            start = end;
        }

        // Only workers hold senders now, so a lost chunk surfaces as a
        // receive error instead of a hang.
        drop(done_tx);
        for _ in 0..chunks {
            done_rx.recv().expect("fork-join worker died mid-pass");
        }
    }
}

impl Drop for ForkJoinPool {
    fn drop(&mut self) {
        drop(self.sender.take());
        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                thread.join().expect("fork-join worker panicked");
            }
        }
    }
}

pub(crate) fn sort<T: Ord + Send + 'static>(data: &mut [T], pool: &ForkJoinPool) {
    let len = data.len();
    let shared = SharedSlice::new(data);
    let mut h = len / 2;
    while h > 0 {
        pool.run_pass(shared, h);
        h /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_is_clamped_to_one() {
        let pool = ForkJoinPool::new(0);
        assert_eq!(pool.workers(), 1);
    }

    #[test]
    fn more_workers_than_offsets() {
        let pool = ForkJoinPool::new(8);
        let mut data = vec![2_u64, 1];
        sort(&mut data, &pool);
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn pool_survives_repeated_passes() {
        let pool = ForkJoinPool::new(3);
        for _ in 0..4 {
            let mut data: Vec<u64> = (0..257).rev().collect();
            sort(&mut data, &pool);
            let expected: Vec<u64> = (0..257).collect();
            assert_eq!(data, expected);
        }
    }
}
