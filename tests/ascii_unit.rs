//! Unit tests for the text renderer module.
//!
//! These tests verify the core rendering algorithms:
//! - Aspect-corrected resizing
//! - Grayscale conversion
//! - ASCII ramp mapping
//! - Braille block packing and cropping

use ascii_generator::ascii::*;
use ascii_generator::RenderError;

/// 2x4 luminance grid with a single dark sample at `(row, col)`.
fn single_dot_block(row: usize, col: usize) -> PixelGrid {
    let mut data = vec![255u8; 8];
    data[row * 2 + col] = 0;
    PixelGrid::luma(2, 4, data).unwrap()
}

fn non_separator_chars(s: &str) -> Vec<char> {
    s.chars().filter(|&c| c != '\n').collect()
}

// ==================== Resizer Tests ====================

#[test]
fn test_resize_width_is_exact() {
    for (w, h, new_w) in [(640, 480, 80), (33, 97, 10), (1, 1, 7), (500, 20, 100)] {
        let grid = PixelGrid::filled(w, h, 0);
        let out = resize(&grid, new_w).unwrap();
        assert_eq!(out.width(), new_w);
        let expected_h = (new_w as f64 * (h as f64 / w as f64) * 0.55).round() as u32;
        assert_eq!(out.height(), expected_h, "{}x{} at {}", w, h, new_w);
    }
}

#[test]
fn test_resize_invalid_dimension() {
    let grid = PixelGrid::filled(10, 10, 0);
    assert!(matches!(
        resize(&grid, 0),
        Err(RenderError::InvalidDimension(_))
    ));

    let empty = PixelGrid::filled(0, 10, 0);
    assert!(matches!(
        resize(&empty, 10),
        Err(RenderError::InvalidDimension(_))
    ));
}

// ==================== Grayscale Conversion Tests ====================

#[test]
fn test_grayscale_luminance_order() {
    // Green should produce highest luminance, then red, then blue
    let grid = PixelGrid::new(
        3,
        1,
        PixelFormat::Rgb,
        vec![
            255, 0, 0, // Red
            0, 255, 0, // Green
            0, 0, 255, // Blue
        ],
    )
    .unwrap();
    let gray = to_grayscale(&grid);
    assert_eq!(gray.data(), &[76, 149, 29]);
}

#[test]
fn test_grayscale_keeps_dimensions() {
    let grid = PixelGrid::new(4, 3, PixelFormat::Rgba, vec![200; 48]).unwrap();
    let gray = to_grayscale(&grid);
    assert_eq!((gray.width(), gray.height()), (4, 3));
    assert_eq!(gray.format(), PixelFormat::Luma);
}

// ==================== ASCII Renderer Tests ====================

#[test]
fn test_ascii_boundaries() {
    let grid = PixelGrid::luma(3, 1, vec![0, 255, 128]).unwrap();
    assert_eq!(grid_to_ascii(&grid), "@ =");
}

#[test]
fn test_ascii_length_and_line_count() {
    let (w, h) = (13u32, 7u32);
    let data: Vec<u8> = (0..w * h).map(|i| (i * 37 % 256) as u8).collect();
    let grid = PixelGrid::luma(w, h, data).unwrap();
    let out = grid_to_ascii(&grid);

    assert_eq!(out.matches('\n').count(), (h - 1) as usize);
    assert_eq!(out.chars().count() - (h as usize - 1), (w * h) as usize);
    for line in out.split('\n') {
        assert_eq!(line.chars().count(), w as usize);
    }
    assert!(non_separator_chars(&out)
        .iter()
        .all(|c| ASCII_RAMP.contains(c)));
}

#[test]
fn test_ascii_row_major_order() {
    // Row 0 dark -> light, row 1 light -> dark
    let grid = PixelGrid::luma(3, 2, vec![0, 128, 255, 255, 128, 0]).unwrap();
    assert_eq!(grid_to_ascii(&grid), "@= \n =@");
}

// ==================== Braille Renderer Tests ====================

#[test]
fn test_braille_all_dark_block() {
    let grid = PixelGrid::filled(2, 4, 10);
    assert_eq!(grid_to_braille(&grid, 128), "\u{28FF}");
}

#[test]
fn test_braille_all_light_block() {
    let grid = PixelGrid::filled(2, 4, 128);
    assert_eq!(grid_to_braille(&grid, 128), "\u{2800}");
}

#[test]
fn test_braille_each_single_dot() {
    // (row, col) -> bit index, in bit order
    let table = [
        ((0, 0), 0),
        ((1, 0), 1),
        ((2, 0), 2),
        ((0, 1), 3),
        ((1, 1), 4),
        ((2, 1), 5),
        ((3, 0), 6),
        ((3, 1), 7),
    ];
    for ((row, col), bit) in table {
        let out = grid_to_braille(&single_dot_block(row, col), DEFAULT_THRESHOLD);
        let expected = char::from_u32(0x2800 + (1 << bit)).unwrap();
        assert_eq!(
            out,
            expected.to_string(),
            "dot at ({}, {}) should set bit {}",
            row,
            col,
            bit
        );
    }
}

#[test]
fn test_braille_crop_width() {
    // 5x4 crops to 4x4: two cells, the fifth column is ignored
    let mut data = vec![255u8; 20];
    for row in 0..4 {
        data[row * 5 + 4] = 0;
    }
    let grid = PixelGrid::luma(5, 4, data).unwrap();
    assert_eq!(grid_to_braille(&grid, 128), "\u{2800}\u{2800}");
}

#[test]
fn test_braille_crop_height() {
    // 2x5 crops to 2x4: the dark fifth row is dropped
    let mut data = vec![255u8; 10];
    data[8] = 0;
    data[9] = 0;
    let grid = PixelGrid::luma(2, 5, data).unwrap();
    assert_eq!(grid_to_braille(&grid, 128), "\u{2800}");
}

#[test]
fn test_braille_multi_line_layout() {
    // 4x8 -> 2 cells wide, 2 lines; top-left cell dark, rest light
    let mut data = vec![255u8; 32];
    for row in 0..4 {
        for col in 0..2 {
            data[row * 4 + col] = 0;
        }
    }
    let grid = PixelGrid::luma(4, 8, data).unwrap();
    assert_eq!(
        grid_to_braille(&grid, 128),
        "\u{28FF}\u{2800}\n\u{2800}\u{2800}"
    );
}

#[test]
fn test_braille_degenerate_is_empty() {
    assert_eq!(grid_to_braille(&PixelGrid::filled(1, 4, 0), 128), "");
    assert_eq!(grid_to_braille(&PixelGrid::filled(2, 3, 0), 128), "");
}

#[test]
fn test_braille_output_in_block_range() {
    let data: Vec<u8> = (0..64u32).map(|i| (i * 53 % 256) as u8).collect();
    let grid = PixelGrid::luma(8, 8, data).unwrap();
    let out = grid_to_braille(&grid, 100);
    assert!(non_separator_chars(&out)
        .iter()
        .all(|&c| ('\u{2800}'..='\u{28FF}').contains(&c)));
}

// ==================== Idempotence ====================

#[test]
fn test_renderers_are_deterministic() {
    let data: Vec<u8> = (0..(60u32 * 40)).map(|i| (i % 251) as u8).collect();
    let grid = PixelGrid::luma(60, 40, data).unwrap();

    let ascii_mode = RenderMode::Ascii { width: 30 };
    let braille_mode = RenderMode::Braille {
        width: 15,
        threshold: 128,
    };
    assert_eq!(
        render(&grid, &ascii_mode).unwrap(),
        render(&grid, &ascii_mode).unwrap()
    );
    assert_eq!(
        render(&grid, &braille_mode).unwrap(),
        render(&grid, &braille_mode).unwrap()
    );
}
