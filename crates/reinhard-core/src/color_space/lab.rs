//! Decorrelated logarithmic lαβ space.
//!
//! RGB is mixed into LMS cone responses, moved into log10 space, and then
//! rotated by a signed-sum matrix followed by a diagonal normalization. The
//! three resulting axes are an achromatic intensity (l) and two opponent
//! chromatic axes (α: yellow-blue, β: red-green) that are close to
//! statistically independent for natural imagery.
//!
//! # Reference
//! - Ruderman, Cronin & Chiao (1998) — Statistics of cone responses to natural images
//! - Reinhard, Ashikhmin, Gooch & Shirley (2001) — Color Transfer between Images
//!
//! ```text
//! forward:  lab = D · S · log10(M · rgb + ε)
//! inverse:  rgb = M⁻¹ · 10^(S' · D' · lab)
//! ```

use glam::{DMat3, DVec3};

/// Bias added before taking the logarithm so black pixels stay finite.
pub const LOG_EPSILON: f64 = f64::EPSILON;

/// Linear RGB to LMS cone response mixing.
pub const RGB_TO_LMS: DMat3 = rows(
    [0.3811, 0.5783, 0.0402],
    [0.1967, 0.7244, 0.0782],
    [0.0241, 0.1288, 0.8444],
);

/// LMS cone response back to RGB.
///
/// Full-precision inverse of [`RGB_TO_LMS`]. The four-digit inverse usually
/// quoted alongside it is off by up to ~2 code values at full scale.
pub const LMS_TO_RGB: DMat3 = rows(
    [4.468_669_863_496_255, -3.588_675_903_472_126, 0.119_604_366_578_601_2],
    [-1.219_716_627_617_763, 2.383_087_912_955_457, -0.162_630_111_751_400_6],
    [0.058_508_476_938_545_9, -0.261_078_439_027_693_7, 1.205_665_908_525_623],
);

/// Signed sums of log cone responses: (L+M+S, L+M−2S, L−M).
pub const LOG_LMS_TO_LAB_SUM: DMat3 = rows([1.0, 1.0, 1.0], [1.0, 1.0, -2.0], [1.0, -1.0, 0.0]);

/// Undoes [`LOG_LMS_TO_LAB_SUM`] once paired with [`LAB_DENORMALIZATION`].
pub const LAB_TO_LOG_LMS_SUM: DMat3 = rows([1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [1.0, -2.0, 0.0]);

/// diag(1/√3, 1/√6, 1/√2), making the signed sums orthonormal.
pub const LAB_NORMALIZATION: DMat3 = DMat3::from_diagonal(DVec3::new(
    0.577_350_269_189_625_8,
    0.408_248_290_463_863,
    0.707_106_781_186_547_5,
));

/// diag(√3/3, √6/6, √2/2). Numerically the same as [`LAB_NORMALIZATION`];
/// combined with the transposed sums it divides out the per-row counts 3, 6
/// and 2.
pub const LAB_DENORMALIZATION: DMat3 = DMat3::from_diagonal(DVec3::new(
    0.577_350_269_189_625_8,
    0.408_248_290_463_863,
    0.707_106_781_186_547_5,
));

/// Build a matrix from rows as written on paper. glam stores columns.
const fn rows(r0: [f64; 3], r1: [f64; 3], r2: [f64; 3]) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(r0[0], r1[0], r2[0]),
        DVec3::new(r0[1], r1[1], r2[1]),
        DVec3::new(r0[2], r1[2], r2[2]),
    )
}

fn log_to_lab() -> DMat3 {
    LAB_NORMALIZATION * LOG_LMS_TO_LAB_SUM
}

fn lab_to_log() -> DMat3 {
    LAB_TO_LOG_LMS_SUM * LAB_DENORMALIZATION
}

fn log_lms(rgb: DVec3) -> DVec3 {
    let lms = RGB_TO_LMS * rgb;
    DVec3::new(
        (lms.x + LOG_EPSILON).log10(),
        (lms.y + LOG_EPSILON).log10(),
        (lms.z + LOG_EPSILON).log10(),
    )
}

fn exp_lms(log_lms: DVec3) -> DVec3 {
    DVec3::new(
        10.0_f64.powf(log_lms.x),
        10.0_f64.powf(log_lms.y),
        10.0_f64.powf(log_lms.z),
    )
}

/// Convert a single RGB pixel (any linear scale, 0–255 in practice) to lαβ.
pub fn rgb_to_lab(rgb: DVec3) -> DVec3 {
    log_to_lab() * log_lms(rgb)
}

/// Convert a single lαβ pixel back to RGB. The result is not clamped.
pub fn lab_to_rgb(lab: DVec3) -> DVec3 {
    LMS_TO_RGB * exp_lms(lab_to_log() * lab)
}

/// Convert a pixel sequence from RGB to lαβ, preserving order.
pub fn forward(rgb: &[DVec3]) -> Vec<DVec3> {
    let to_lab = log_to_lab();
    rgb.iter().map(|&px| to_lab * log_lms(px)).collect()
}

/// Convert a pixel sequence from lαβ back to RGB, preserving order.
///
/// No range validation happens here; values the forward pass could never
/// produce still map to (meaningless) RGB and are left for the caller to clamp.
pub fn inverse(lab: &[DVec3]) -> Vec<DVec3> {
    let to_log = lab_to_log();
    lab.iter()
        .map(|&px| LMS_TO_RGB * exp_lms(to_log * px))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: DVec3, expected: DVec3, tol: f64) {
        let diff = (actual - expected).abs().max_element();
        assert!(diff <= tol, "got {actual}, expected {expected}, diff {diff} > {tol}");
    }

    #[test]
    fn test_lms_matrices_are_inverse() {
        let product = LMS_TO_RGB * RGB_TO_LMS;
        for i in 0..3 {
            assert_close(product.col(i), DMat3::IDENTITY.col(i), EPSILON);
        }
    }

    #[test]
    fn test_log_rotation_is_inverse() {
        let product = lab_to_log() * log_to_lab();
        for i in 0..3 {
            assert_close(product.col(i), DMat3::IDENTITY.col(i), EPSILON);
        }
    }

    #[test]
    fn test_rows_helper_is_row_major() {
        let m = rows([1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]);
        assert_eq!(m * DVec3::X, DVec3::new(1.0, 4.0, 7.0));
        assert_eq!(m.row(1), DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_gray_has_no_chroma() {
        // Rows of RGB_TO_LMS do not sum to exactly 1, so gray is only close to neutral.
        let lab = rgb_to_lab(DVec3::splat(128.0));
        assert!(lab.x > 0.0);
        assert!(lab.y.abs() < 0.01, "alpha should be near zero for gray: {}", lab.y);
        assert!(lab.z.abs() < 0.01, "beta should be near zero for gray: {}", lab.z);
    }

    #[test]
    fn test_brighter_pixel_has_higher_luminance_axis() {
        let dark = rgb_to_lab(DVec3::splat(20.0));
        let bright = rgb_to_lab(DVec3::splat(200.0));
        assert!(bright.x > dark.x);
    }

    #[test]
    fn test_black_stays_finite() {
        let lab = rgb_to_lab(DVec3::ZERO);
        assert!(lab.is_finite());
        let rgb = lab_to_rgb(lab);
        assert_close(rgb, DVec3::ZERO, 1e-9);
    }

    #[test]
    fn test_forward_inverse_roundtrip() {
        let pixels = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(255.0, 255.0, 255.0),
            DVec3::new(255.0, 0.0, 0.0),
            DVec3::new(0.0, 255.0, 0.0),
            DVec3::new(0.0, 0.0, 255.0),
            DVec3::new(12.0, 200.0, 97.0),
        ];
        let back = inverse(&forward(&pixels));
        assert_eq!(back.len(), pixels.len());
        for (a, b) in back.iter().zip(&pixels) {
            assert_close(*a, *b, 1e-3);
        }
    }

    #[test]
    fn test_sequence_matches_single_pixel_path() {
        let px = DVec3::new(30.0, 60.0, 90.0);
        assert_eq!(forward(&[px])[0], rgb_to_lab(px));
        assert_eq!(inverse(&[px])[0], lab_to_rgb(px));
    }
}
