//! Bounded point selection for plotting large series.

/// Conventional number of points a chart renders comfortably.
pub const DEFAULT_GRAPH_POINTS: usize = 300;

/// Selects a bounded, evenly-spread subset of `data` for plotting.
///
/// When both `min_index` and `max_index` are given, the data is first cut
/// to the half-open window `[min_index, max_index)` (clamped to bounds);
/// a window that already fits in `total_graph_points` is returned as-is.
/// Otherwise a proportional admission walk picks roughly
/// `total_graph_points` elements: the first element seeds the output, an
/// element at index `i` is admitted once the running target
/// `ceil(i * total_graph_points / len)` moves past the current output
/// size, and the last element is always appended. Output order is input
/// order; the walk may select an endpoint the seed/append steps already
/// covered, and such duplicates are kept.
///
/// Pure function of its arguments; never panics, empty input yields an
/// empty vec.
pub fn downsample<T: Clone>(
    data: &[T],
    min_index: Option<usize>,
    max_index: Option<usize>,
    total_graph_points: usize,
) -> Vec<T> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut subset = data;

    if let (Some(min), Some(max)) = (min_index, max_index) {
        let start = min.min(data.len());
        let end = max.clamp(start, data.len());
        subset = &data[start..end];

        if subset.len() <= total_graph_points {
            return subset.to_vec();
        }
    }

    let len = subset.len();
    let mut limited = vec![subset[0].clone()];

    for (index, point) in subset.iter().enumerate() {
        let nth = (index * total_graph_points).div_ceil(len);
        if limited.len() + 1 <= nth {
            limited.push(point.clone());
        }
    }

    limited.push(subset[len - 1].clone());
    limited
}
