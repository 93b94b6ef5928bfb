/// Precomputed interpolation data for one output coordinate along one axis:
/// the two source indices to sample and the blend fraction between them.
///
/// Invariants, by construction: `lower <= upper <= in_size - 1`,
/// `upper - lower <= 1`, `0 <= lerp <= 1`. When the right edge clamps
/// (`lower == upper`) both samples are identical and `lerp` is inert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpWeight {
    pub lower: usize,
    pub upper: usize,
    pub lerp: f32,
}

/// Input-to-output step per output index along one axis.
pub fn scale_rate(in_size: usize, out_size: usize) -> f32 {
    in_size as f32 / out_size as f32
}

/// Build the weight table for one axis: `out_size` entries plus a trailing
/// sentinel so consumers can size row/column arrays uniformly. The sentinel
/// is never read during interpolation.
///
/// Clamp-then-blend order is deliberate: at the right edge `upper` clamps to
/// `lower` while `lerp` keeps its fractional value. The blend then multiplies
/// a zero difference, so rounding at image edges matches the interior path.
pub fn interpolation_weights(in_size: usize, out_size: usize, rate: f32) -> Vec<InterpWeight> {
    assert!(in_size >= 1, "interpolation_weights: empty input axis");
    assert!(out_size >= 1, "interpolation_weights: empty output axis");

    let max = in_size - 1;
    let mut table = Vec::with_capacity(out_size + 1);
    for i in 0..out_size {
        let coord = i as f32 * rate;
        let floor = coord.floor();
        let lower = (floor.max(0.0) as usize).min(max);
        let upper = (lower + 1).min(max);
        table.push(InterpWeight {
            lower,
            upper,
            lerp: coord - floor,
        });
    }
    table.push(InterpWeight {
        lower: max,
        upper: max,
        lerp: 0.0,
    });
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_invariants(in_size: usize, out_size: usize) {
        let table = interpolation_weights(in_size, out_size, scale_rate(in_size, out_size));
        assert_eq!(table.len(), out_size + 1);
        for (i, w) in table[..out_size].iter().enumerate() {
            assert!(
                w.lower <= w.upper && w.upper <= in_size - 1,
                "[{}x{}] index {}: lower={} upper={}",
                in_size,
                out_size,
                i,
                w.lower,
                w.upper
            );
            assert!(w.upper - w.lower <= 1);
            assert!(
                (0.0..=1.0).contains(&w.lerp),
                "[{}x{}] index {}: lerp={}",
                in_size,
                out_size,
                i,
                w.lerp
            );
        }
    }

    #[test]
    fn invariants_hold_across_scales() {
        for &(i, o) in &[
            (1, 1),
            (1, 7),
            (7, 1),
            (2, 4),
            (4, 2),
            (3, 5),
            (5, 3),
            (112, 224),
            (224, 112),
            (640, 481),
        ] {
            check_invariants(i, o);
        }
    }

    #[test]
    fn identity_rate_pins_lerp_to_zero() {
        let n = 16;
        let table = interpolation_weights(n, n, 1.0);
        for (i, w) in table[..n].iter().enumerate() {
            assert_eq!(w.lower, i);
            assert_eq!(w.upper, (i + 1).min(n - 1));
            assert_eq!(w.lerp, 0.0);
        }
    }

    #[test]
    fn upscale_2x_matches_hand_values() {
        let table = interpolation_weights(2, 4, 0.5);
        let expect = [
            InterpWeight { lower: 0, upper: 1, lerp: 0.0 },
            InterpWeight { lower: 0, upper: 1, lerp: 0.5 },
            InterpWeight { lower: 1, upper: 1, lerp: 0.0 },
            InterpWeight { lower: 1, upper: 1, lerp: 0.5 },
        ];
        assert_eq!(&table[..4], &expect);
    }

    #[test]
    fn single_input_clamps_both_indices() {
        let table = interpolation_weights(1, 5, scale_rate(1, 5));
        for w in &table[..5] {
            assert_eq!(w.lower, 0);
            assert_eq!(w.upper, 0);
        }
    }

    #[test]
    fn single_output_samples_origin() {
        let table = interpolation_weights(9, 1, scale_rate(9, 1));
        assert_eq!(table[0].lower, 0);
        assert_eq!(table[0].upper, 1);
        assert_eq!(table[0].lerp, 0.0);
    }
}
