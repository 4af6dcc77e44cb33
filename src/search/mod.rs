extern crate nalgebra as na;

use na::DMatrix;
use serde::{Serialize, Deserialize};

use crate::{Float,float};
use crate::log_kernel::{LogKernelSettings,laplacian_of_gaussian_kernel};

/// Search region and reference cell values for [find_reference]. The targets
/// are the corner, edge and center cells of a zero-centered 3x3 kernel.
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct ReferenceSearchParameters {
    pub resolution: usize,
    pub offset: Float,
    pub span: Float,
    pub corner_target: Float,
    pub edge_target: Float,
    pub center_target: Float
}

impl Default for ReferenceSearchParameters {
    fn default() -> ReferenceSearchParameters {
        ReferenceSearchParameters {
            resolution: 2000,
            offset: 1.0e-4,
            span: 4.0,
            corner_target: 0.066,
            edge_target: 0.184,
            center_target: -1.0
        }
    }
}

#[derive(Debug,Clone)]
pub struct ReferenceSearchResult {
    pub domain: Float,
    pub sigma: Float,
    pub diff: Float,
    pub kernel: DMatrix<Float>
}

/// Exhaustive grid search over `(domain, sigma)` pairs for the 3x3
/// zero-centered kernel closest to the reference cell values, scored by
/// summed absolute difference. Rows map to sigma and columns to domain,
/// both ascending, so ties keep the earliest candidate.
pub fn find_reference(parameters: &ReferenceSearchParameters) -> ReferenceSearchResult {
    assert!(parameters.resolution > 1, "search resolution has to be at least 2");

    let settings = LogKernelSettings {
        zero_center: true,
        max_normalize: false,
        absolute_l1_normalize: false
    };
    let steps = (parameters.resolution - 1) as Float;

    let mut min_diff = float::MAX;
    let mut best_domain = parameters.offset;
    let mut best_sigma = parameters.offset;
    let mut best_kernel = None;

    for i in 0..parameters.resolution {
        let sigma = parameters.offset + parameters.span*(i as Float/steps);
        for j in 0..parameters.resolution {
            let domain = parameters.offset + parameters.span*(j as Float/steps);

            let kernel = laplacian_of_gaussian_kernel(3, domain, sigma, 0.0, 0.0, &settings);
            let current_diff = (parameters.corner_target - kernel[(0,0)]).abs()
                + (parameters.edge_target - kernel[(0,1)]).abs()
                + (parameters.center_target - kernel[(1,1)]).abs();

            if current_diff < min_diff {
                min_diff = current_diff;
                best_domain = domain;
                best_sigma = sigma;
                best_kernel = Some(kernel);
            }
        }
    }

    ReferenceSearchResult {
        domain: best_domain,
        sigma: best_sigma,
        diff: min_diff,
        kernel: best_kernel.expect("search grid produced no candidates")
    }
}
