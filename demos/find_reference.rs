use color_eyre::eyre::{eyre,Result};

use log_filter::load_runtime_conf;
use log_filter::search::{find_reference,ReferenceSearchParameters};
use log_filter::visualize::plot;

fn main() -> Result<()> {
    color_eyre::install()?;
    let runtime_conf = load_runtime_conf();

    let parameters = ReferenceSearchParameters::default();
    let result = find_reference(&parameters);

    println!("domain : {}, sigma : {}", result.domain, result.sigma);
    println!("diff : {}", result.diff);
    println!("{}", result.kernel);

    plot::draw_kernel_heatmap(&result.kernel, &runtime_conf.output_path, "reference_kernel.png")
        .map_err(|e| eyre!("{}",e))?;

    Ok(())
}
