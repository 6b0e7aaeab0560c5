mod strategies;

pub use strategies::fork_join::ForkJoinPool;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    Sequential,
    ForkJoin,
    WorkStealing,
}

pub const ALL_STRATEGIES: [Strategy; 3] = [
    Strategy::Sequential,
    Strategy::ForkJoin,
    Strategy::WorkStealing,
];

pub fn all_strategies() -> &'static [Strategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Sequential => "sequential",
        Strategy::ForkJoin => "fork_join",
        Strategy::WorkStealing => "work_stealing",
    }
}

pub fn sort<T: Ord + Send + 'static>(strategy: Strategy, data: &mut [T]) {
    match strategy {
        Strategy::Sequential => sort_sequential(data),
        Strategy::ForkJoin => sort_fork_join(data),
        Strategy::WorkStealing => sort_work_stealing(data),
    }
}

/// Shell sort with the halving gap sequence, one thread, in place.
///
/// Panics on an empty slice; passing one is a caller bug, not a runtime
/// condition.
pub fn sort_sequential<T: Ord>(data: &mut [T]) {
    assert!(!data.is_empty(), "cannot shell-sort an empty sequence");
    strategies::sequential::sort(data);
}

/// Like [`sort_sequential`], with each pass's offset loop chunked across a
/// fork-join pool sized to the machine.
pub fn sort_fork_join<T: Ord + Send + 'static>(data: &mut [T]) {
    assert!(!data.is_empty(), "cannot shell-sort an empty sequence");
    let pool = ForkJoinPool::with_default_size();
    strategies::fork_join::sort(data, &pool);
}

/// Fork-join variant on a caller-owned pool, so the parallelism degree is
/// under the caller's control.
pub fn sort_fork_join_with_pool<T: Ord + Send + 'static>(data: &mut [T], pool: &ForkJoinPool) {
    assert!(!data.is_empty(), "cannot shell-sort an empty sequence");
    strategies::fork_join::sort(data, pool);
}

/// Like [`sort_sequential`], with each pass's offset range submitted to
/// rayon's work-stealing scheduler.
pub fn sort_work_stealing<T: Ord + Send>(data: &mut [T]) {
    assert!(!data.is_empty(), "cannot shell-sort an empty sequence");
    strategies::work_stealing::sort(data);
}

/// Work-stealing variant pinned to a caller-owned rayon pool.
pub fn sort_work_stealing_with_pool<T: Ord + Send>(data: &mut [T], pool: &rayon::ThreadPool) {
    assert!(!data.is_empty(), "cannot shell-sort an empty sequence");
    strategies::work_stealing::sort_in(data, pool);
}
