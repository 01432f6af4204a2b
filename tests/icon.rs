use image::{Rgba, RgbaImage};

use notify_icon::icon::{encode_png, hash_bytes, inspect, load_rgba, write_file};

#[test]
fn png_round_trip_keeps_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.png");

    let img = RgbaImage::from_fn(8, 2, |x, y| Rgba([255, 255, 255, (x * 32 + y) as u8]));
    write_file(&path, &encode_png(&img).unwrap()).unwrap();

    assert_eq!(load_rgba(&path).unwrap(), img);
}

#[test]
fn encoding_is_deterministic() {
    let img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 128]));
    let a = encode_png(&img).unwrap();
    let b = encode_png(&img).unwrap();

    assert_eq!(a, b);
    assert_eq!(hash_bytes(&a), hash_bytes(&b));
    assert_eq!(hash_bytes(&a).len(), 64);
}

#[test]
fn write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.png");
    std::fs::write(&path, b"old contents that are longer").unwrap();

    write_file(&path, b"new").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"new");
}

#[test]
fn inspect_detects_format_by_content() {
    let dir = tempfile::tempdir().unwrap();
    // Misleading extension; the reader sniffs the bytes.
    let path = dir.path().join("icon.bin");
    let img = RgbaImage::new(3, 5);
    write_file(&path, &encode_png(&img).unwrap()).unwrap();

    let info = inspect(&path).unwrap();
    assert_eq!(info.format, Some(image::ImageFormat::Png));
    assert_eq!((info.width, info.height), (3, 5));
}

#[test]
fn load_missing_file_mentions_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ghost.png");

    let err = load_rgba(&path).unwrap_err();
    assert!(format!("{err:#}").contains("ghost.png"));
}
