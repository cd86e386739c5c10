use crate::line_detection::frame::FrameBufferView;

/// Collapses the frame into a column profile of length `width`.
///
/// Each sample is the mean of its column over every row, rounded half to even.
/// Rows are accumulated top to bottom into `u64` sums, so the result is exact
/// and independent of row padding.
pub fn reduce_rows(view: &FrameBufferView<'_>) -> Vec<u8> {
    if view.height() == 1 {
        return view.row(0).to_vec();
    }

    let mut sums = vec![0u64; view.width()];
    for row in view.rows() {
        for (sum, &px) in sums.iter_mut().zip(row) {
            *sum += u64::from(px);
        }
    }

    let rows = view.height() as u64;
    sums.into_iter().map(|sum| mean_half_even(sum, rows)).collect()
}

fn mean_half_even(sum: u64, count: u64) -> u8 {
    let quotient = sum / count;
    let twice_remainder = (sum % count) * 2;

    let rounded = if twice_remainder > count || (twice_remainder == count && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };

    // The mean of u8 samples never exceeds 255.
    rounded as u8
}
