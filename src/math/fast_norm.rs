//! Standard normal density and inverse CDF.
//!
//! The inverse CDF is Acklam's rational approximation (relative error below
//! 1.15e-9 over the open unit interval), the workhorse behind uniform-to-
//! normal transformation of the simulation RNG streams.

#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

// Acklam coefficients, highest order first.
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

const P_LOW: f64 = 0.024_25;

#[inline]
fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Inverse standard normal CDF (Acklam's rational approximation).
///
/// Returns `-inf` at 0, `+inf` at 1, and NaN outside `[0, 1]`.
#[inline]
pub fn normal_inv_cdf(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        horner(&C, q) / (horner(&D, q) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        q * horner(&A, r) / (horner(&B, r) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -horner(&C, q) / (horner(&D, q) * q + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inv_cdf_known_quantiles() {
        // Phi^{-1}(0.5) = 0
        assert!(normal_inv_cdf(0.5).abs() < 1e-10);
        // Phi^{-1}(0.8413447...) ~= 1
        assert!((normal_inv_cdf(0.841_344_746_068_543) - 1.0).abs() < 1e-6);
        // Phi^{-1}(0.95) = 1.6448536...
        assert!((normal_inv_cdf(0.95) - 1.644_853_626_951_5).abs() < 1e-8);
        // Phi^{-1}(0.99) = 2.3263478...
        assert!((normal_inv_cdf(0.99) - 2.326_347_874_040_8).abs() < 1e-8);
    }

    #[test]
    fn inv_cdf_is_antisymmetric() {
        for i in 1..100 {
            let p = i as f64 / 100.0;
            let lhs = normal_inv_cdf(p);
            let rhs = -normal_inv_cdf(1.0 - p);
            assert!((lhs - rhs).abs() < 1e-9, "p={p} lhs={lhs} rhs={rhs}");
        }
    }

    #[test]
    fn inv_cdf_boundary_behavior() {
        assert_eq!(normal_inv_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(normal_inv_cdf(1.0), f64::INFINITY);
        assert!(normal_inv_cdf(-0.1).is_nan());
        assert!(normal_inv_cdf(1.1).is_nan());
    }

    #[test]
    fn pdf_peak_and_symmetry() {
        assert!((normal_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
        assert!((normal_pdf(1.3) - normal_pdf(-1.3)).abs() < 1e-15);
    }
}
