use std::time::Instant;

use log::info;

use tsp_graph_core::{ConverterOptions, Error, Result, convert_batch, logging};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = ConverterOptions::from_args()?;
    logging::init_logger(&options)?;

    info!("options: {options}");

    let summary = convert_batch(&options)?;

    info!(
        "output: converted={} failed={} time={:.2}s",
        summary.converted,
        summary.failed,
        now.elapsed().as_secs_f32()
    );

    if summary.failed > 0 {
        return Err(Error::other(format!(
            "{} of {} instance files failed to convert",
            summary.failed,
            summary.converted + summary.failed
        )));
    }

    Ok(())
}
