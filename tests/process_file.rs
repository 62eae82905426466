use std::fs;
use std::io::Cursor;

use cache_plotter::config::PlotConfig;
use cache_plotter::data::sample::{write_sample, CacheProfile};
use cache_plotter::plotter::{process_file, process_file_to};
use cache_plotter::Error;
use tempfile::tempdir;

const EXAMPLE: &str = "H1\nH2\nH3\n0 100\n10 150\n20 300\n";

#[test]
fn writes_400_dpi_png_to_requested_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("measurements.txt");
    let output = dir.path().join("plot.png");
    fs::write(&input, EXAMPLE).unwrap();

    process_file_to(&input, &PlotConfig::with_output(&output)).unwrap();

    let bytes = fs::read(&output).unwrap();
    let reader = png::Decoder::new(Cursor::new(&bytes)).read_info().unwrap();
    let info = reader.info();
    assert_eq!((info.width, info.height), (2560, 1920));

    let dims = info.pixel_dims.as_ref().unwrap();
    assert_eq!(dims.xppu, 15_748);
    assert_eq!(dims.yppu, 15_748);
}

#[test]
fn overwrites_existing_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("measurements.txt");
    let output = dir.path().join("plot.png");
    fs::write(&input, EXAMPLE).unwrap();
    fs::write(&output, b"stale").unwrap();

    let config = PlotConfig {
        output: output.clone(),
        dpi: 50,
        ..PlotConfig::default()
    };
    process_file_to(&input, &config).unwrap();

    let decoded = image::open(&output).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (320, 240));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("measurements.txt");
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    let mut text = Vec::new();
    write_sample(&mut text, &CacheProfile::default(), 3).unwrap();
    fs::write(&input, text).unwrap();

    let config = |output| PlotConfig {
        output,
        dpi: 100,
        ..PlotConfig::default()
    };
    process_file_to(&input, &config(first.clone())).unwrap();
    process_file_to(&input, &config(second.clone())).unwrap();

    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn missing_input_is_reported() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("nope.txt");

    assert!(matches!(process_file(&input), Err(Error::Open { .. })));
}

#[test]
fn header_only_input_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("short.txt");
    fs::write(&input, "Estimating...\nSize (KB) Cycles/access\n").unwrap();

    let config = PlotConfig::with_output(dir.path().join("plot.png"));
    assert!(matches!(process_file_to(&input, &config), Err(Error::NoData)));
}

#[test]
fn overflowing_size_span_fails_fast() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("huge.txt");
    let output = dir.path().join("plot.png");
    fs::write(&input, "H1\nH2\nH3\n-1e308 1\n1e308 2\n").unwrap();

    let config = PlotConfig::with_output(&output);
    assert!(matches!(
        process_file_to(&input, &config),
        Err(Error::AxisOverflow { axis: "size", .. })
    ));
    assert!(!output.exists());
}
