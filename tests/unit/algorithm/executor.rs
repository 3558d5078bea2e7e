//! Tests for the quilting engine, cell traversal and seam finding

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use quiltseam::QuiltError;
    use quiltseam::algorithm::executor::{QuiltEngine, construct_quilt, find_seam};
    use quiltseam::algorithm::mask::{CutType, build_mask};
    use quiltseam::io::configuration::QuiltConfig;
    use quiltseam::spatial::{Block, BlockOffset, Grid, Surface};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(block_size: u32, overlap: u32) -> QuiltConfig {
        QuiltConfig {
            block_size,
            overlap,
            candidates: 5,
            show_seam: false,
        }
    }

    fn noise(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let v = (x * 37 + y * 91 + x * y * 13) % 256;
            Rgba([v as u8, (v * 3 % 256) as u8, (255 - v) as u8, 255])
        })
    }

    // Tests cells are visited column by column, top to bottom
    // Verified by iterating row-major
    #[test]
    fn test_place_next_column_major_order() {
        let source = noise(12, 12);
        let mut canvas = RgbaImage::new(8, 4);
        let mut rng = StdRng::seed_from_u64(42);
        let Ok(mut engine) = QuiltEngine::new(&source, 8, 4, config(4, 2), None) else {
            unreachable!("valid engine");
        };

        assert_eq!(engine.total_cells(), 8);

        let mut visited = Vec::new();
        while let Ok(Some(report)) = engine.place_next(&mut canvas, &mut rng) {
            visited.push((report.col, report.row, report.cut_type));
        }

        assert_eq!(
            visited,
            vec![
                (0, 0, CutType::None),
                (0, 1, CutType::Vertical),
                (1, 0, CutType::Horizontal),
                (1, 1, CutType::Both),
                (2, 0, CutType::Horizontal),
                (2, 1, CutType::Both),
                (3, 0, CutType::Horizontal),
                (3, 1, CutType::Both),
            ]
        );
        assert_eq!(engine.placed_cells(), 8);
        assert_eq!(engine.grid().filled(), 8);
        assert!(matches!(engine.place_next(&mut canvas, &mut rng), Ok(None)));
    }

    // Tests the top-left block lands verbatim and without a seam
    // Verified by blending the first cell with the empty canvas
    #[test]
    fn test_first_cell_is_verbatim() {
        let source = noise(10, 10);
        let mut canvas = RgbaImage::new(8, 4);
        let mut rng = StdRng::seed_from_u64(3);
        let Ok(mut engine) = QuiltEngine::new(&source, 8, 4, config(4, 2), None) else {
            unreachable!("valid engine");
        };

        let Ok(Some(report)) = engine.place_next(&mut canvas, &mut rng) else {
            unreachable!("first cell places");
        };

        assert!(report.seam.is_none());
        assert!(!report.reused_preset);
        let block = Block::new(&source, report.offset, 4);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), block.pixel(x, y));
            }
        }
    }

    // Tests preset offsets are reused without sampling
    // Verified by sampling pinned cells anyway
    #[test]
    fn test_preset_cells_are_reused() {
        let source = noise(10, 10);
        let mut preset = Grid::new(4, 2);
        preset.set(1, 0, BlockOffset::new(6, 5));
        let mut canvas = RgbaImage::new(8, 4);
        let mut rng = StdRng::seed_from_u64(9);

        let grid = construct_quilt(&source, &mut canvas, config(4, 2), Some(preset), &mut rng);

        let Ok(grid) = grid else {
            unreachable!("quilt builds");
        };
        assert_eq!(grid.get(1, 0), Some(BlockOffset::new(6, 5)));
        assert_eq!(grid.filled(), 8);
    }

    // Tests preset offsets that would read past the source are rejected
    // Verified by clamping the offset into the source
    #[test]
    fn test_preset_out_of_source_rejected() {
        let source = noise(10, 10);
        let mut preset = Grid::new(4, 2);
        preset.set(0, 0, BlockOffset::new(7, 0));

        let result = QuiltEngine::new(&source, 8, 4, config(4, 2), Some(preset));

        assert!(matches!(
            result.err(),
            Some(QuiltError::InvalidParameter {
                parameter: "preset",
                ..
            })
        ));
    }

    // Tests an undersized source fails before any cell is placed
    // Verified by deferring the size check to sampling
    #[test]
    fn test_source_too_small_rejected_upfront() {
        let source = noise(3, 10);
        let mut preset = Grid::new(4, 2);
        for col in 0..4 {
            for row in 0..2 {
                preset.set(col, row, BlockOffset::new(0, 0));
            }
        }

        let result = QuiltEngine::new(&source, 8, 4, config(4, 2), Some(preset));

        assert!(matches!(result.err(), Some(QuiltError::SourceTooSmall { .. })));
    }

    // Tests invalid overlap is caught by configuration validation
    // Verified by skipping validation in the constructor
    #[test]
    fn test_invalid_config_rejected() {
        let source = noise(10, 10);

        assert!(QuiltEngine::new(&source, 8, 4, config(4, 4), None).is_err());
        assert!(QuiltEngine::new(&source, 8, 4, config(0, 0), None).is_err());
    }

    // Tests the horizontal seam stays inside the overlap band
    // Verified by computing the seam over the whole block
    #[test]
    fn test_find_seam_horizontal() {
        let canvas = noise(8, 4);
        let source = noise(12, 12);
        let block = Block::new(&source, BlockOffset::new(5, 3), 4);
        let mask = build_mask(CutType::Horizontal, 4, 2);
        let origin = BlockOffset::new(2, 0);

        let Ok(Some(seam)) = find_seam(&canvas, origin, &block, &mask, CutType::Horizontal, 2)
        else {
            unreachable!("horizontal cells have a seam");
        };

        assert_eq!(seam.path.start(), Some(1));
        assert_eq!(seam.path.end(), Some(13));
        assert!(seam.path.nodes().iter().all(|&node| node % 4 < 2));
        assert!(seam.path.nodes().iter().all(|&node| !seam.original_segment.contains(node)));
        assert!(seam.original_segment.iter().all(|node| mask.contains(node / 4, node % 4)));
    }

    // Tests the top-left cell has no seam to find
    // Verified by returning an empty seam instead of none
    #[test]
    fn test_find_seam_none() {
        let canvas = noise(8, 4);
        let block = Block::new(&canvas, BlockOffset::new(0, 0), 4);
        let mask = build_mask(CutType::None, 4, 2);

        let seam = find_seam(&canvas, BlockOffset::new(0, 0), &block, &mask, CutType::None, 2);

        assert!(matches!(seam, Ok(None)));
    }

    // Tests seams are shown with the marker colour when requested
    // Verified by ignoring the show_seam flag
    #[test]
    fn test_show_seam_paints_marker() {
        let source = noise(10, 10);
        let mut canvas = RgbaImage::new(6, 4);
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = QuiltConfig {
            show_seam: true,
            ..config(4, 2)
        };

        let result = construct_quilt(&source, &mut canvas, cfg, None, &mut rng);

        assert!(result.is_ok());
        assert!(canvas.pixels().any(|pixel| *pixel == Rgba([255, 0, 0, 255])));
        assert_eq!(engine_config_overlap(&source, cfg), 2);
    }

    fn engine_config_overlap(source: &RgbaImage, cfg: QuiltConfig) -> u32 {
        QuiltEngine::new(source, 6, 4, cfg, None)
            .map(|engine| engine.config().overlap)
            .unwrap_or_default()
    }
}
