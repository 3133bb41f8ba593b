use heightmap_io::config::{load_config, ExportConfig};
use heightmap_io::convert::export_image_to_text;
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
    // uses the traditional fixed filenames.
    let config = match env::args().nth(1) {
        Some(path) => load_config::<ExportConfig>(Path::new(&path))?,
        None => ExportConfig::default(),
    };

    let dims = export_image_to_text(&config.input_path, &config.output_path)?;
    println!(
        "exported {} as a {}x{} text grid to {}",
        config.input_path.display(),
        dims.width,
        dims.height,
        config.output_path.display()
    );
    Ok(())
}
