use super::common;

pub(crate) fn sort<T: Ord>(data: &mut [T]) {
    let mut h = data.len() / 2;
    while h > 0 {
        for i in 0..h {
            common::gap_insertion_sort(data, i, h);
        }
        h /= 2;
    }
}
