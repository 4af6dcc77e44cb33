extern crate plotters;
extern crate nalgebra as na;

use plotters::prelude::*;
use na::DMatrix;

use crate::{float,Float};

fn get_min_max(kernel: &DMatrix<Float>) -> (Float,Float) {

    let mut min = float::MAX;
    let mut max = float::MIN;

    for v in kernel.iter() {
        let v = *v;

        if v < min {
            min = v;
        }

        if v > max {
            max = v;
        }
    }

    if (max-min) < 1e-5 {
        max = min + 1e-5;
    }

    (min,max)
}

pub fn draw_kernel_heatmap(kernel: &DMatrix<Float>, output_folder: &str, file_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (min,max) = get_min_max(kernel);
    let rows = kernel.nrows();
    let cols = kernel.ncols();

    let path = format!("{}/{}",output_folder,file_name);
    let root = BitMapBackend::new(&path, (768, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .caption("LoG Kernel", ("sans-serif", 40))
        .build_cartesian_2d(0..cols, 0..rows)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .draw()?;

    chart.draw_series(
        (0..rows).flat_map(|i| (0..cols).map(move |j| (i,j))).map(|(i,j)| {
            let scale = (kernel[(i,j)] - min)/(max - min);
            // row 0 draws at the top of the chart
            Rectangle::new(
                [(j, rows - 1 - i), (j + 1, rows - i)],
                HSLColor(0.66 - 0.66*scale, 0.8, 0.1 + 0.5*scale).filled(),
            )
        })
    )?;

    Ok(())
}
