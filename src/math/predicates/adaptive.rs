//! Adaptive-precision predicates over doubles.
//!
//! Each predicate first evaluates its determinant in plain floating point
//! and compares it against a forward error bound. Only when the bound cannot
//! certify the sign does it fall back to exact expansion arithmetic, so the
//! returned sign always matches the infinite-precision value.

use tracing::trace;

use crate::math::{Vector2, Vector3};
use crate::scalar::{Scalar, Sign};

use super::expansion::Expansion;

const EPSILON: f64 = f64::EPSILON / 2.0;

const ORIENT_2D_BOUND: f64 = (3.0 + 16.0 * EPSILON) * EPSILON;
const ORIENT_3D_BOUND: f64 = (7.0 + 56.0 * EPSILON) * EPSILON;
const IN_CIRCLE_BOUND: f64 = (10.0 + 96.0 * EPSILON) * EPSILON;
const IN_SPHERE_BOUND: f64 = (16.0 + 224.0 * EPSILON) * EPSILON;
const LINEAR_FORM_BOUND: f64 = (8.0 + 64.0 * EPSILON) * EPSILON;

fn certified(det: f64, errbound: f64) -> Option<Sign> {
    if det > errbound {
        Some(Sign::Positive)
    } else if -det > errbound {
        Some(Sign::Negative)
    } else {
        None
    }
}

pub(crate) fn orient2d(a: &Vector2<f64>, b: &Vector2<f64>, c: &Vector2<f64>) -> Sign {
    let det_left = (a.x - c.x) * (b.y - c.y);
    let det_right = (a.y - c.y) * (b.x - c.x);
    let det = det_left - det_right;

    // When the two diagonals differ in sign the rounded result cannot flip.
    let det_sum = if det_left > 0.0 {
        if det_right <= 0.0 {
            return det.sign();
        }
        det_left + det_right
    } else if det_left < 0.0 {
        if det_right >= 0.0 {
            return det.sign();
        }
        -det_left - det_right
    } else {
        return det.sign();
    };

    if let Some(sign) = certified(det, ORIENT_2D_BOUND * det_sum) {
        return sign;
    }

    trace!(det, det_sum, "orient2d escalating to exact arithmetic");
    orient2d_exact(a, b, c)
}

fn orient2d_exact(a: &Vector2<f64>, b: &Vector2<f64>, c: &Vector2<f64>) -> Sign {
    let acx = Expansion::difference(a.x, c.x);
    let acy = Expansion::difference(a.y, c.y);
    let bcx = Expansion::difference(b.x, c.x);
    let bcy = Expansion::difference(b.y, c.y);
    (&(&acx * &bcy) - &(&acy * &bcx)).sign()
}

pub(crate) fn orient3d(
    a: &Vector3<f64>,
    b: &Vector3<f64>,
    c: &Vector3<f64>,
    d: &Vector3<f64>,
) -> Sign {
    let adx = a.x - d.x;
    let bdx = b.x - d.x;
    let cdx = c.x - d.x;
    let ady = a.y - d.y;
    let bdy = b.y - d.y;
    let cdy = c.y - d.y;
    let adz = a.z - d.z;
    let bdz = b.z - d.z;
    let cdz = c.z - d.z;

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;

    let det = adz * (bdxcdy - cdxbdy) + bdz * (cdxady - adxcdy) + cdz * (adxbdy - bdxady);
    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * adz.abs()
        + (cdxady.abs() + adxcdy.abs()) * bdz.abs()
        + (adxbdy.abs() + bdxady.abs()) * cdz.abs();

    if let Some(sign) = certified(det, ORIENT_3D_BOUND * permanent) {
        return sign;
    }

    trace!(det, permanent, "orient3d escalating to exact arithmetic");
    orient3d_exact(a, b, c, d)
}

fn orient3d_exact(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>, d: &Vector3<f64>) -> Sign {
    let [adx, ady, adz] = differences(a, d);
    let [bdx, bdy, bdz] = differences(b, d);
    let [cdx, cdy, cdz] = differences(c, d);

    let bc = &(&bdx * &cdy) - &(&cdx * &bdy);
    let ca = &(&cdx * &ady) - &(&adx * &cdy);
    let ab = &(&adx * &bdy) - &(&bdx * &ady);

    let det = &(&(&adz * &bc) + &(&bdz * &ca)) + &(&cdz * &ab);
    det.sign()
}

pub(crate) fn incircle(
    a: &Vector2<f64>,
    b: &Vector2<f64>,
    c: &Vector2<f64>,
    d: &Vector2<f64>,
) -> Sign {
    let adx = a.x - d.x;
    let bdx = b.x - d.x;
    let cdx = c.x - d.x;
    let ady = a.y - d.y;
    let bdy = b.y - d.y;
    let cdy = c.y - d.y;

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let alift = adx * adx + ady * ady;

    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let blift = bdx * bdx + bdy * bdy;

    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);
    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
        + (cdxady.abs() + adxcdy.abs()) * blift
        + (adxbdy.abs() + bdxady.abs()) * clift;

    if let Some(sign) = certified(det, IN_CIRCLE_BOUND * permanent) {
        return sign;
    }

    trace!(det, permanent, "incircle escalating to exact arithmetic");
    incircle_exact(a, b, c, d)
}

fn incircle_exact(a: &Vector2<f64>, b: &Vector2<f64>, c: &Vector2<f64>, d: &Vector2<f64>) -> Sign {
    let adx = Expansion::difference(a.x, d.x);
    let ady = Expansion::difference(a.y, d.y);
    let bdx = Expansion::difference(b.x, d.x);
    let bdy = Expansion::difference(b.y, d.y);
    let cdx = Expansion::difference(c.x, d.x);
    let cdy = Expansion::difference(c.y, d.y);

    let alift = &(&adx * &adx) + &(&ady * &ady);
    let blift = &(&bdx * &bdx) + &(&bdy * &bdy);
    let clift = &(&cdx * &cdx) + &(&cdy * &cdy);

    let bc = &(&bdx * &cdy) - &(&cdx * &bdy);
    let ca = &(&cdx * &ady) - &(&adx * &cdy);
    let ab = &(&adx * &bdy) - &(&bdx * &ady);

    let det = &(&(&alift * &bc) + &(&blift * &ca)) + &(&clift * &ab);
    det.sign()
}

#[allow(clippy::similar_names, clippy::too_many_lines)]
pub(crate) fn insphere(
    a: &Vector3<f64>,
    b: &Vector3<f64>,
    c: &Vector3<f64>,
    d: &Vector3<f64>,
    e: &Vector3<f64>,
) -> Sign {
    let aex = a.x - e.x;
    let bex = b.x - e.x;
    let cex = c.x - e.x;
    let dex = d.x - e.x;
    let aey = a.y - e.y;
    let bey = b.y - e.y;
    let cey = c.y - e.y;
    let dey = d.y - e.y;
    let aez = a.z - e.z;
    let bez = b.z - e.z;
    let cez = c.z - e.z;
    let dez = d.z - e.z;

    let aexbey = aex * bey;
    let bexaey = bex * aey;
    let ab = aexbey - bexaey;
    let bexcey = bex * cey;
    let cexbey = cex * bey;
    let bc = bexcey - cexbey;
    let cexdey = cex * dey;
    let dexcey = dex * cey;
    let cd = cexdey - dexcey;
    let dexaey = dex * aey;
    let aexdey = aex * dey;
    let da = dexaey - aexdey;
    let aexcey = aex * cey;
    let cexaey = cex * aey;
    let ac = aexcey - cexaey;
    let bexdey = bex * dey;
    let dexbey = dex * bey;
    let bd = bexdey - dexbey;

    let abc = aez * bc - bez * ac + cez * ab;
    let bcd = bez * cd - cez * bd + dez * bc;
    let cda = cez * da + dez * ac + aez * cd;
    let dab = dez * ab + aez * bd + bez * da;

    let alift = aex * aex + aey * aey + aez * aez;
    let blift = bex * bex + bey * bey + bez * bez;
    let clift = cex * cex + cey * cey + cez * cez;
    let dlift = dex * dex + dey * dey + dez * dez;

    let det = (dlift * abc - clift * dab) + (blift * cda - alift * bcd);

    let (aez_p, bez_p, cez_p, dez_p) = (aez.abs(), bez.abs(), cez.abs(), dez.abs());
    let ab_p = aexbey.abs() + bexaey.abs();
    let bc_p = bexcey.abs() + cexbey.abs();
    let cd_p = cexdey.abs() + dexcey.abs();
    let da_p = dexaey.abs() + aexdey.abs();
    let ac_p = aexcey.abs() + cexaey.abs();
    let bd_p = bexdey.abs() + dexbey.abs();
    let permanent = (cd_p * bez_p + bd_p * cez_p + bc_p * dez_p) * alift
        + (da_p * cez_p + ac_p * dez_p + cd_p * aez_p) * blift
        + (ab_p * dez_p + bd_p * aez_p + da_p * bez_p) * clift
        + (bc_p * aez_p + ac_p * bez_p + ab_p * cez_p) * dlift;

    if let Some(sign) = certified(det, IN_SPHERE_BOUND * permanent) {
        return sign;
    }

    trace!(det, permanent, "insphere escalating to exact arithmetic");
    insphere_exact(a, b, c, d, e)
}

#[allow(clippy::similar_names)]
fn insphere_exact(
    a: &Vector3<f64>,
    b: &Vector3<f64>,
    c: &Vector3<f64>,
    d: &Vector3<f64>,
    e: &Vector3<f64>,
) -> Sign {
    let [aex, aey, aez] = differences(a, e);
    let [bex, bey, bez] = differences(b, e);
    let [cex, cey, cez] = differences(c, e);
    let [dex, dey, dez] = differences(d, e);

    let ab = &(&aex * &bey) - &(&bex * &aey);
    let bc = &(&bex * &cey) - &(&cex * &bey);
    let cd = &(&cex * &dey) - &(&dex * &cey);
    let da = &(&dex * &aey) - &(&aex * &dey);
    let ac = &(&aex * &cey) - &(&cex * &aey);
    let bd = &(&bex * &dey) - &(&dex * &bey);

    let abc = &(&(&aez * &bc) - &(&bez * &ac)) + &(&cez * &ab);
    let bcd = &(&(&bez * &cd) - &(&cez * &bd)) + &(&dez * &bc);
    let cda = &(&(&cez * &da) + &(&dez * &ac)) + &(&aez * &cd);
    let dab = &(&(&dez * &ab) + &(&aez * &bd)) + &(&bez * &da);

    let lift = |x: &Expansion, y: &Expansion, z: &Expansion| {
        &(&(x * x) + &(y * y)) + &(z * z)
    };
    let alift = lift(&aex, &aey, &aez);
    let blift = lift(&bex, &bey, &bez);
    let clift = lift(&cex, &cey, &cez);
    let dlift = lift(&dex, &dey, &dez);

    let left = &(&dlift * &abc) - &(&clift * &dab);
    let right = &(&blift * &cda) - &(&alift * &bcd);
    (&left + &right).sign()
}

/// Sign of `normal · point - d`.
pub(crate) fn plane_side(normal: &Vector3<f64>, d: f64, point: &Vector3<f64>) -> Sign {
    let px = normal.x * point.x;
    let py = normal.y * point.y;
    let pz = normal.z * point.z;
    let value = px + py + pz - d;
    let permanent = px.abs() + py.abs() + pz.abs() + d.abs();

    if let Some(sign) = certified(value, LINEAR_FORM_BOUND * permanent) {
        return sign;
    }

    trace!(value, permanent, "plane side escalating to exact arithmetic");
    let sum = &(&Expansion::product(normal.x, point.x) + &Expansion::product(normal.y, point.y))
        + &Expansion::product(normal.z, point.z);
    (&sum - &Expansion::from_value(d)).sign()
}

/// Sign of `normal · (r - q)`.
pub(crate) fn projection_sign(normal: &Vector3<f64>, q: &Vector3<f64>, r: &Vector3<f64>) -> Sign {
    let px = normal.x * (r.x - q.x);
    let py = normal.y * (r.y - q.y);
    let pz = normal.z * (r.z - q.z);
    let value = px + py + pz;
    let permanent = px.abs() + py.abs() + pz.abs();

    if let Some(sign) = certified(value, LINEAR_FORM_BOUND * permanent) {
        return sign;
    }

    trace!(value, permanent, "projection sign escalating to exact arithmetic");
    let [dx, dy, dz] = differences(r, q);
    let nx = Expansion::from_value(normal.x);
    let ny = Expansion::from_value(normal.y);
    let nz = Expansion::from_value(normal.z);
    (&(&(&nx * &dx) + &(&ny * &dy)) + &(&nz * &dz)).sign()
}

fn differences(p: &Vector3<f64>, origin: &Vector3<f64>) -> [Expansion; 3] {
    [
        Expansion::difference(p.x, origin.x),
        Expansion::difference(p.y, origin.y),
        Expansion::difference(p.z, origin.z),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p2(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    #[test]
    fn exact_paths_agree_with_filtered_paths_on_easy_input() {
        let (a, b, c) = (p2(0.0, 0.0), p2(1.0, 0.0), p2(0.0, 1.0));
        assert_eq!(orient2d(&a, &b, &c), orient2d_exact(&a, &b, &c));
        assert_eq!(orient2d_exact(&a, &c, &b), Sign::Negative);

        let d = p2(0.25, 0.25);
        assert_eq!(incircle(&a, &b, &c, &d), incircle_exact(&a, &b, &c, &d));
    }

    #[test]
    fn near_collinear_needs_the_exact_path() {
        // Classic failure case for naive evaluation: points within a few ulps
        // of the diagonal y = x.
        let b = p2(12.0, 12.0);
        let c = p2(24.0, 24.0);
        let ulp = f64::EPSILON / 2.0;
        for i in 0..16 {
            for j in 0..16 {
                let a = p2(0.5 + f64::from(i) * ulp, 0.5 + f64::from(j) * ulp);
                let expected = Sign::from_ordering(j.cmp(&i));
                assert_eq!(orient2d(&a, &b, &c), expected, "i={i} j={j}");
            }
        }
    }

    #[test]
    fn plane_side_detects_tiny_offsets() {
        let n = Vector3::new(0.1, 0.2, 0.3);
        let p = Vector3::new(1.0, 1.0, 1.0);
        let d = 0.1 + 0.2 + 0.3;
        // The rounded sum differs from the exact dot product; only the exact
        // path can tell which side the point is on.
        let exact = &(&(&Expansion::product(0.1, 1.0) + &Expansion::product(0.2, 1.0))
            + &Expansion::product(0.3, 1.0))
            - &Expansion::from_value(d);
        assert_eq!(plane_side(&n, d, &p), exact.sign());
        assert_eq!(plane_side(&n, 0.0, &p), Sign::Positive);
    }

    #[test]
    fn projection_sign_of_parallel_direction_is_zero() {
        let n = Vector3::new(0.0, 0.0, 1.0);
        let q = Vector3::new(0.1, 0.7, 3.3);
        let r = Vector3::new(9.5, -2.0, 3.3);
        assert_eq!(projection_sign(&n, &q, &r), Sign::Zero);
        assert_eq!(projection_sign(&n, &r, &(r + n)), Sign::Positive);
    }
}
