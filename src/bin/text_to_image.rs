use heightmap_io::config::{load_config, ImportConfig};
use heightmap_io::convert::import_text_to_image;
use heightmap_io::GridError;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GridError> {
    // One optional argument: a JSON config path. Without it the run
    // uses the traditional fixed filenames and the 128x128 grid.
    let config = match env::args().nth(1) {
        Some(path) => load_config::<ImportConfig>(Path::new(&path))?,
        None => ImportConfig::default(),
    };

    import_text_to_image(&config.input_path, &config.output_path, config.dims)?;
    println!(
        "imported {} as a {}x{} image at {}",
        config.input_path.display(),
        config.dims.width,
        config.dims.height,
        config.output_path.display()
    );
    Ok(())
}
