use crate::{Float,float};
use float::consts::PI;

/// Value of the isotropic bivariate gaussian density with standard deviation `s`
/// and mean `(u1,u2)`, evaluated at `(x,y)`. Panics for `s = 0`.
pub fn gaussian(x: Float, y: Float, s: Float, u1: Float, u2: Float) -> Float {
    assert!(s != 0.0, "gaussian undefined for s = 0");
    let squared_distance = (x-u1).powi(2) + (y-u2).powi(2);
    let exponent = (-squared_distance/(2.0*s.powi(2))).exp();
    let normalizing_constant = ((2.0*PI).powi(2)*s.powi(4)).sqrt();
    exponent/normalizing_constant
}

/// Laplacian of the gaussian density at `(x,y)`, via the closed-form
/// second derivative correction factor. Panics for `s = 0`.
pub fn laplacian(x: Float, y: Float, s: Float, u1: Float, u2: Float) -> Float {
    let squared_distance = (x-u1).powi(2) + (y-u2).powi(2);
    gaussian(x,y,s,u1,u2)*(squared_distance/s.powi(2) - 2.0)/s.powi(2)
}
