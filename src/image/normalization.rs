//! Min-max intensity rescaling

/// Global minimum and maximum of a sample plane
#[inline]
#[must_use]
pub fn find_min_max(values: &[f32]) -> (f32, f32) {
    values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &val| {
            (min.min(val), max.max(val))
        })
}

/// Min-max rescale a sample plane to the full 8-bit range.
///
/// The minimum is shifted to zero first; if the shifted maximum is zero
/// (constant input) the scale step is skipped and the output is all
/// zeros. The final conversion truncates toward zero, it does not round.
/// Monotone: larger samples never map below smaller ones.
#[must_use]
pub fn rescale_to_u8(samples: &[f32]) -> Vec<u8> {
    if samples.is_empty() {
        return Vec::new();
    }

    let (min_val, _) = find_min_max(samples);

    let max_shifted = samples
        .iter()
        .fold(f32::NEG_INFINITY, |max, &val| max.max(val - min_val));

    samples
        .iter()
        .map(|&val| {
            let shifted = val - min_val;
            let scaled = if max_shifted > 0.0 {
                shifted / max_shifted
            } else {
                shifted
            };
            (scaled * 255.0_f32) as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_find_min_max() {
        let (min, max) = find_min_max(&[3.0, -1.5, 7.25, 0.0]);
        assert_relative_eq!(min, -1.5);
        assert_relative_eq!(max, 7.25);
    }

    #[test]
    fn test_rescale_spans_full_range() {
        let out = rescale_to_u8(&[12.0, 900.0, 455.0, 31.0]);
        assert_eq!(*out.iter().min().unwrap(), 0);
        assert_eq!(*out.iter().max().unwrap(), 255);
    }

    #[test]
    fn test_rescale_full_range_fixed_point() {
        // already spans [0,255]: the float round trip must not drift
        let out = rescale_to_u8(&[0.0, 128.0, 255.0, 64.0]);
        assert_eq!(out, vec![0, 128, 255, 64]);
    }

    #[test]
    fn test_rescale_constant_input_is_all_zeros() {
        for constant in [10.0, 0.0, -7.5, 4096.0] {
            let out = rescale_to_u8(&[constant; 4]);
            assert_eq!(out, vec![0, 0, 0, 0], "constant {constant}");
        }
    }

    #[test]
    fn test_rescale_negative_inputs() {
        let out = rescale_to_u8(&[-100.0, -50.0, 0.0]);
        assert_eq!(out[0], 0);
        assert_eq!(out[2], 255);
        // midpoint of [0,1] scaled by 255, truncated
        assert_eq!(out[1], 127);
    }

    #[test]
    fn test_rescale_is_monotone() {
        let samples = [5.0, -3.0, 7.0, 7.0, 0.5, 1_000.0, -3.0];
        let out = rescale_to_u8(&samples);
        for (i, &a) in samples.iter().enumerate() {
            for (j, &b) in samples.iter().enumerate() {
                if a > b {
                    assert!(out[i] >= out[j], "samples[{i}]={a} vs samples[{j}]={b}");
                }
                if (a - b).abs() < f32::EPSILON {
                    assert_eq!(out[i], out[j]);
                }
            }
        }
    }

    #[test]
    fn test_rescale_single_and_empty() {
        assert_eq!(rescale_to_u8(&[]), Vec::<u8>::new());
        assert_eq!(rescale_to_u8(&[42.0]), vec![0]);
    }
}
