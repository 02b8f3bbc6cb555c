//! Weight curves applied to fractional lattice positions.

use tessel_recipe::Interpolation;

/// Shapes a blend weight in `[0, 1]`.
pub trait WeightCurve: Copy {
    fn weight(&self, t: f32) -> f32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl WeightCurve for Linear {
    #[inline]
    fn weight(&self, t: f32) -> f32 {
        t
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

impl WeightCurve for Cosine {
    #[inline]
    fn weight(&self, t: f32) -> f32 {
        (t * 3.1416).cos().mul_add(-0.5, 0.5)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Smoothstep;

impl WeightCurve for Smoothstep {
    #[inline]
    fn weight(&self, t: f32) -> f32 {
        t * t * t.mul_add(-2.0, 3.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Quintic;

impl WeightCurve for Quintic {
    #[inline]
    fn weight(&self, t: f32) -> f32 {
        t.mul_add(6.0, -15.0).mul_add(t, 10.0) * t * t * t
    }
}

/// Runs `$body` with `$curve` bound to the concrete curve for `$interp`,
/// so the sampler is monomorphized per curve.
macro_rules! with_curve {
    ($interp:expr, |$curve:ident| $body:expr) => {
        match $interp {
            tessel_recipe::Interpolation::Linear => {
                let $curve = $crate::curve::Linear;
                $body
            }
            tessel_recipe::Interpolation::Cosine => {
                let $curve = $crate::curve::Cosine;
                $body
            }
            tessel_recipe::Interpolation::Smoothstep => {
                let $curve = $crate::curve::Smoothstep;
                $body
            }
            tessel_recipe::Interpolation::Quintic => {
                let $curve = $crate::curve::Quintic;
                $body
            }
        }
    };
}

pub(crate) use with_curve;

/// Evaluates the curve for `interp` once, without monomorphizing.
pub fn apply(interp: Interpolation, t: f32) -> f32 {
    with_curve!(interp, |curve| curve.weight(t))
}
