//! Direct determinant evaluation for scalars whose arithmetic never rounds.

use crate::math::{dot_product, Vector2, Vector3};
use crate::scalar::{Scalar, Sign};

fn diff<S: Scalar>(a: &S, b: &S) -> S {
    a.clone() - b.clone()
}

pub(crate) fn orient2d<S: Scalar>(a: &Vector2<S>, b: &Vector2<S>, c: &Vector2<S>) -> Sign {
    let acx = diff(&a.x, &c.x);
    let bcx = diff(&b.x, &c.x);
    let acy = diff(&a.y, &c.y);
    let bcy = diff(&b.y, &c.y);

    (acx * bcy - acy * bcx).sign()
}

pub(crate) fn orient3d<S: Scalar>(
    a: &Vector3<S>,
    b: &Vector3<S>,
    c: &Vector3<S>,
    d: &Vector3<S>,
) -> Sign {
    let ad = a - d;
    let bd = b - d;
    let cd = c - d;

    let det = ad.x.clone() * (bd.y.clone() * cd.z.clone() - bd.z.clone() * cd.y.clone())
        + bd.x.clone() * (cd.y.clone() * ad.z.clone() - cd.z.clone() * ad.y.clone())
        + cd.x.clone() * (ad.y.clone() * bd.z.clone() - ad.z.clone() * bd.y.clone());
    det.sign()
}

pub(crate) fn incircle<S: Scalar>(
    a: &Vector2<S>,
    b: &Vector2<S>,
    c: &Vector2<S>,
    d: &Vector2<S>,
) -> Sign {
    let ad = a - d;
    let bd = b - d;
    let cd = c - d;

    let alift = dot_product(&ad, &ad);
    let blift = dot_product(&bd, &bd);
    let clift = dot_product(&cd, &cd);

    let bc = bd.x.clone() * cd.y.clone() - cd.x.clone() * bd.y.clone();
    let ca = cd.x.clone() * ad.y.clone() - ad.x.clone() * cd.y.clone();
    let ab = ad.x * bd.y - bd.x * ad.y;

    (alift * bc + blift * ca + clift * ab).sign()
}

#[allow(clippy::similar_names)]
pub(crate) fn insphere<S: Scalar>(
    a: &Vector3<S>,
    b: &Vector3<S>,
    c: &Vector3<S>,
    d: &Vector3<S>,
    e: &Vector3<S>,
) -> Sign {
    let ae = a - e;
    let be = b - e;
    let ce = c - e;
    let de = d - e;

    let cross_xy = |p: &Vector3<S>, q: &Vector3<S>| {
        p.x.clone() * q.y.clone() - q.x.clone() * p.y.clone()
    };
    let ab = cross_xy(&ae, &be);
    let bc = cross_xy(&be, &ce);
    let cd = cross_xy(&ce, &de);
    let da = cross_xy(&de, &ae);
    let ac = cross_xy(&ae, &ce);
    let bd = cross_xy(&be, &de);

    let abc = ae.z.clone() * bc.clone() - be.z.clone() * ac.clone() + ce.z.clone() * ab.clone();
    let bcd = be.z.clone() * cd.clone() - ce.z.clone() * bd.clone() + de.z.clone() * bc;
    let cda = ce.z.clone() * da.clone() + de.z.clone() * ac + ae.z.clone() * cd;
    let dab = de.z.clone() * ab + ae.z.clone() * bd + be.z.clone() * da;

    let alift = dot_product(&ae, &ae);
    let blift = dot_product(&be, &be);
    let clift = dot_product(&ce, &ce);
    let dlift = dot_product(&de, &de);

    ((dlift * abc - clift * dab) + (blift * cda - alift * bcd)).sign()
}

pub(crate) fn plane_side<S: Scalar>(normal: &Vector3<S>, d: &S, point: &Vector3<S>) -> Sign {
    (dot_product(normal, point) - d.clone()).sign()
}

pub(crate) fn projection_sign<S: Scalar>(normal: &Vector3<S>, q: &Vector3<S>, r: &Vector3<S>) -> Sign {
    dot_product(normal, &(r - q)).sign()
}
