//! Tests for run parameter defaults and validation

#[cfg(test)]
mod tests {
    use quiltseam::QuiltError;
    use quiltseam::io::configuration::{
        DEFAULT_BLOCK_SIZE, DEFAULT_CANDIDATES, QuiltConfig, default_overlap,
    };

    // Tests the default overlap is a sixth of the block size
    // Verified by rounding the division up
    #[test]
    fn test_default_overlap() {
        assert_eq!(default_overlap(100), 16);
        assert_eq!(default_overlap(6), 1);
        assert_eq!(default_overlap(5), 0);
    }

    // Tests the default configuration is valid
    // Verified by defaulting candidates to zero
    #[test]
    fn test_default_config() {
        let config = QuiltConfig::default();

        assert_eq!(config.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(config.overlap, default_overlap(DEFAULT_BLOCK_SIZE));
        assert_eq!(config.candidates, DEFAULT_CANDIDATES);
        assert!(!config.show_seam);
        assert!(config.validate().is_ok());
    }

    // Tests the pitch between neighbouring cells
    // Verified by adding the overlap instead of subtracting it
    #[test]
    fn test_pitch() {
        let config = QuiltConfig::with_block_size(60);

        assert_eq!(config.overlap, 10);
        assert_eq!(config.pitch(), 50);
    }

    // Tests each invalid parameter is named in the error
    // Verified by accepting an overlap equal to the block size
    #[test]
    fn test_validate_rejects_bad_parameters() {
        let cases = [
            (
                QuiltConfig {
                    block_size: 0,
                    overlap: 0,
                    ..QuiltConfig::default()
                },
                "block_size",
            ),
            (
                QuiltConfig {
                    block_size: 8,
                    overlap: 8,
                    ..QuiltConfig::default()
                },
                "overlap",
            ),
            (
                QuiltConfig {
                    candidates: 0,
                    ..QuiltConfig::default()
                },
                "candidates",
            ),
        ];

        for (config, expected) in cases {
            match config.validate() {
                Err(QuiltError::InvalidParameter { parameter, .. }) => {
                    assert_eq!(parameter, expected);
                }
                other => unreachable!("Expected InvalidParameter, got {other:?}"),
            }
        }
    }

    // Tests zero overlap is a valid pure tiling
    // Verified by requiring a positive overlap
    #[test]
    fn test_zero_overlap_is_valid() {
        let config = QuiltConfig {
            overlap: 0,
            ..QuiltConfig::default()
        };

        assert!(config.validate().is_ok());
        assert_eq!(config.pitch(), config.block_size);
    }
}
