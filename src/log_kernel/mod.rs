extern crate nalgebra as na;

use na::DMatrix;
use crate::Float;
use crate::gaussian::laplacian;

#[derive(Debug,Clone,Copy)]
pub struct LogKernelSettings {
    pub zero_center: bool,
    pub max_normalize: bool,
    pub absolute_l1_normalize: bool
}

impl Default for LogKernelSettings {
    fn default() -> LogKernelSettings {
        LogKernelSettings {
            zero_center: true,
            max_normalize: true,
            absolute_l1_normalize: false
        }
    }
}

#[derive(Debug,Clone)]
pub struct LogKernel {
    pub buffer: DMatrix<Float>
}

impl LogKernel {

    pub fn new(side_length: usize, domain: Float, s: Float, u1: Float, u2: Float, settings: &LogKernelSettings) -> LogKernel {
        LogKernel {
            buffer: laplacian_of_gaussian_kernel(side_length, domain, s, u1, u2, settings)
        }
    }

    pub fn side_length(&self) -> usize {
        self.buffer.nrows()
    }
}

/// Samples the laplacian of a gaussian with standard deviation `s` and mean
/// `(u1,u2)` over `side_length` x `side_length` points spanning
/// `[-domain,domain]` in both axes. Row 0 corresponds to `y = domain` so the
/// kernel displays with y pointing up.
///
/// Normalization passes run in a fixed order, each on the previous result:
/// `zero_center` subtracts the raw mean so the cells sum to zero,
/// `max_normalize` divides by the maximum absolute value so the largest
/// magnitude becomes 1, `absolute_l1_normalize` divides by the sum of
/// absolute values so they sum to 1. The last two both rescale magnitude, so
/// enabling them together is rarely what a caller wants. A rescaling pass is
/// skipped when its divisor is zero (all cells zero).
///
/// Panics for `s = 0` or `side_length < 2`.
pub fn laplacian_of_gaussian_kernel(side_length: usize, domain: Float, s: Float, u1: Float, u2: Float, settings: &LogKernelSettings) -> DMatrix<Float> {
    assert!(side_length > 1, "kernel side length has to be at least 2");

    let mut kernel = DMatrix::<Float>::zeros(side_length,side_length);
    let steps = (side_length - 1) as Float;
    let mut mean = 0.0;

    for i in 0..side_length {
        let y = -domain*(2.0*(i as Float/steps) - 1.0);
        for j in 0..side_length {
            let x = domain*(2.0*(j as Float/steps) - 1.0);
            let value = laplacian(x,y,s,u1,u2);
            kernel[(i,j)] = value;
            mean += value;
        }
    }
    mean /= (side_length*side_length) as Float;

    if settings.zero_center {
        for value in kernel.iter_mut() {
            *value -= mean;
        }
    }

    if settings.max_normalize {
        let max_value = kernel.amax();
        if max_value != 0.0 {
            for value in kernel.iter_mut() {
                *value /= max_value;
            }
        }
    }

    if settings.absolute_l1_normalize {
        let total = kernel.iter().fold(0.0, |acc: Float, value| acc + value.abs());
        if total != 0.0 {
            for value in kernel.iter_mut() {
                *value /= total;
            }
        }
    }

    kernel
}
