use std::any::Any;
use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use log::{debug, error};

use crate::error::{Result, SortError};
use crate::partition::partition_random;
use crate::progress::SortProgress;

/// Operational bound on a single concurrent sort.
const POOL_WAIT: Duration = Duration::from_secs(60 * 60 * 24);

/// A unit of pool work: an unsorted block, or an order to park.
enum Task<'scope, T> {
    Block(&'scope mut [T]),
    Shutdown,
}

/// Terminal pool state, reported to the coordinating thread.
enum PoolExit {
    Finished,
    Panicked(Box<dyn Any + Send>),
}

/// Quicksort `block` across one worker per available core.
///
/// The calling thread only coordinates. Workers pull blocks from a shared
/// queue, partition them, and push back every child still longer than one
/// element, so independent blocks sort in parallel without any coordination
/// beyond the queue itself. The worker that settles the final element shuts
/// the pool down.
///
/// A panic in the comparator tears the pool down and resumes on the calling
/// thread once every worker has parked, leaving the block in an unspecified
/// order.
///
/// # Errors
///
/// [`SortError::PoolTimeout`] if the pool has not finished within an
/// operational bound of one day.
pub fn sort<T, F>(block: &mut [T], compare: &F, progress: &SortProgress) -> Result<()>
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync + ?Sized,
{
    let len = block.len();
    if len < 2 {
        progress.add(len);
        return Ok(());
    }

    let workers = thread::available_parallelism().map_or(1, |count| count.get());
    let (task_tx, task_rx) = unbounded::<Task<'_, T>>();
    // Every worker reports at most once; the capacity keeps a late report
    // from blocking against a coordinator that has already given up.
    let (exit_tx, exit_rx) = bounded::<PoolExit>(workers);

    debug!("concurrent quicksort: {len} elements across {workers} workers");

    let mut panic_payload: Option<Box<dyn Any + Send>> = None;
    let mut timed_out = false;
    thread::scope(|scope| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let task_tx = task_tx.clone();
            let exit_tx = exit_tx.clone();
            scope.spawn(move || {
                worker_loop(&task_rx, &task_tx, &exit_tx, compare, progress, len, workers);
            });
        }

        task_tx
            .send(Task::Block(block))
            .expect("workers hold the queue open");

        match exit_rx.recv_timeout(POOL_WAIT) {
            Ok(PoolExit::Finished) => {}
            Ok(PoolExit::Panicked(payload)) => panic_payload = Some(payload),
            Err(_) => {
                error!("concurrent quicksort gave up after {POOL_WAIT:?}");
                for _ in 0..workers {
                    let _ = task_tx.send(Task::Shutdown);
                }
                timed_out = true;
            }
        }
    });

    if let Some(payload) = panic_payload {
        panic::resume_unwind(payload);
    }
    if timed_out {
        return Err(SortError::PoolTimeout { wait: POOL_WAIT });
    }
    Ok(())
}

fn worker_loop<'scope, T, F>(
    tasks: &Receiver<Task<'scope, T>>,
    submit: &Sender<Task<'scope, T>>,
    exit: &Sender<PoolExit>,
    compare: &F,
    progress: &SortProgress,
    total: usize,
    workers: usize,
) where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync + ?Sized,
{
    while let Ok(task) = tasks.recv() {
        let block = match task {
            Task::Block(block) => block,
            Task::Shutdown => break,
        };
        // Only the comparator can panic.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| partition_random(block, compare)));
        match outcome {
            Ok(split) => {
                let placed = requeue_children(block, split, submit);
                // Exactly one task observes the count reaching the total.
                if progress.add(placed) == total {
                    shut_down(submit, exit, PoolExit::Finished, workers);
                }
            }
            Err(payload) => {
                shut_down(submit, exit, PoolExit::Panicked(payload), workers);
                break;
            }
        }
    }
}

/// Park every worker, then report the terminal state.
///
/// One shutdown order per worker: each worker parks on the first order it
/// sees and leaves the rest queued for its peers.
fn shut_down<T>(
    submit: &Sender<Task<'_, T>>,
    exit: &Sender<PoolExit>,
    state: PoolExit,
    workers: usize,
) {
    for _ in 0..workers {
        let _ = submit.send(Task::Shutdown);
    }
    let _ = exit.send(state);
}

/// Hand a split block's children back to the queue and return the number
/// of elements the split settled for good.
///
/// Children no longer than one element are settled on the spot, so the
/// return value is always at least one (the pivot).
fn requeue_children<'scope, T>(
    block: &'scope mut [T],
    split: usize,
    submit: &Sender<Task<'scope, T>>,
) -> usize {
    let len = block.len();
    let (low, rest) = block.split_at_mut(split);
    let (_pivot, high) = rest.split_at_mut(1);
    let mut placed = len;
    if low.len() > 1 {
        placed -= low.len();
        submit.send(Task::Block(low)).expect("workers hold the queue open");
    }
    if high.len() > 1 {
        placed -= high.len();
        submit.send(Task::Block(high)).expect("workers hold the queue open");
    }
    placed
}
