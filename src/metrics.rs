pub fn clamp01(v: f32) -> f32 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

/// Arithmetic mean with the divisor floored at 1, so an empty input yields 0 instead of NaN.
pub fn safe_mean<I>(values: I) -> f32
where
    I: IntoIterator<Item = f32>,
{
    let mut sum = 0.0_f32;
    let mut count = 0_usize;
    for v in values {
        sum += v;
        count += 1;
    }
    sum / count.max(1) as f32
}
