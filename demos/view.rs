use color_eyre::eyre::{eyre,Result};

use log_filter::load_runtime_conf;
use log_filter::log_kernel::{LogKernel,LogKernelSettings};
use log_filter::visualize::plot;

fn main() -> Result<()> {
    color_eyre::install()?;
    let runtime_conf = load_runtime_conf();

    let kernel = LogKernel::new(201, 8.0, 2.0, 0.0, 0.0, &LogKernelSettings::default());

    plot::draw_kernel_heatmap(&kernel.buffer, &runtime_conf.output_path, "log_kernel.png")
        .map_err(|e| eyre!("{}",e))?;

    Ok(())
}
