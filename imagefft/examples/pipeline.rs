use imagefft::{Engine, EngineConfig, ImageForward, ImagePad, PixelBuffer, SampleGrid, SpectrumInverse, SpectrumVisualize};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let config: EngineConfig = match std::env::args().nth(1) {
        Some(path) => match EngineConfig::load_from_file(&path) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };
    let engine: Engine = Engine::new(config);
    log::info!("config: {:?}", engine.config());

    // 12x9 image with a bright vertical bar
    let (w, h): (usize, usize) = (12, 9);
    let values: Vec<u8> = (0..w * h).map(|i| if (4..8).contains(&(i % w)) { 220 } else { 30 }).collect();
    let img: PixelBuffer = match PixelBuffer::from_luma(w, h, &values) {
        Ok(img) => img,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let padded: PixelBuffer = engine.pad_image(&img);
    let spectrum: SampleGrid = match engine.forward_image(&padded) {
        Ok(spectrum) => spectrum,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let view: PixelBuffer = engine.visualize_spectrum(&spectrum);
    println!("spectrum ({}x{}):", view.width(), view.height());
    for y in 0..view.height() {
        let row: String = (0..view.width())
            .map(|x| match view.pixel(x, y)[0] {
                0..=63 => ' ',
                64..=127 => '.',
                128..=191 => '+',
                _ => '#',
            })
            .collect();
        println!("  {}", row);
    }

    match engine.inverse_spectrum(&spectrum) {
        Ok(res) => {
            let gray: bool = res.is_grayscale();
            let bytes: Vec<u8> = res.into_raw();
            let max_err: u8 = bytes
                .iter()
                .zip(padded.as_bytes())
                .map(|(a, b)| a.abs_diff(*b))
                .max()
                .unwrap_or(0);
            println!("round trip max channel error: {} (gray: {})", max_err, gray);
        }
        Err(err) => log::error!("{}", err),
    }
}
