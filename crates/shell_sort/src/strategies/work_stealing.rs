use rayon::prelude::*;

use super::common::{self, SharedSlice};

pub(crate) fn sort<T: Ord + Send>(data: &mut [T]) {
    let shared = SharedSlice::new(data);
    let mut h = shared.len() / 2;
    while h > 0 {
        // `for_each` returns only after the whole range has run, which is
        // the barrier between this pass and the next, smaller gap.
        (0..h).into_par_iter().for_each(|i| {
            // SAFETY: every offset of one pass writes a distinct residue
            // class mod `h`, so stolen sub-ranges never overlap.
            unsafe { common::gap_insertion_sort_raw(shared.ptr(), shared.len(), i, h) };
        });
        h /= 2;
    }
}

pub(crate) fn sort_in<T: Ord + Send>(data: &mut [T], pool: &rayon::ThreadPool) {
    pool.install(|| sort(data));
}
