//! Tests for error formatting, source chaining and context enrichment

#[cfg(test)]
mod tests {
    use quiltseam::QuiltError;
    use quiltseam::io::error::{ErrorContext, WithContext, invalid_parameter};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = QuiltError::FileSystem {
            path: "/tmp/source.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/source.png"));
    }

    // Tests SourceTooSmall names both the texture and the block
    // Verified by omitting block size from the message
    #[test]
    fn test_source_too_small_message() {
        let error = QuiltError::SourceTooSmall {
            width: 30,
            height: 20,
            block_size: 40,
        };

        let message = error.to_string();
        assert!(message.contains("30x20"));
        assert!(message.contains("40"));
        assert!(error.source().is_none());
    }

    // Tests cell context is attached to unreachable seam errors
    // Verified by discarding the context
    #[test]
    fn test_with_cell_sets_unreachable_cell() {
        let result: Result<(), QuiltError> = Err(QuiltError::UnreachableEnd {
            node: 13,
            cell: None,
        });

        match result.with_cell(2, 1) {
            Err(error @ QuiltError::UnreachableEnd { .. }) => {
                assert!(error.to_string().contains("(2, 1)"));
                assert!(error.to_string().contains("13"));
            }
            other => unreachable!("Expected UnreachableEnd, got {other:?}"),
        }
    }

    // Tests context leaves other variants untouched
    // Verified by wrapping every error in a new variant
    #[test]
    fn test_with_context_preserves_other_errors() {
        let result: Result<(), QuiltError> = Err(invalid_parameter("stride", &7, &"too large"));

        let enriched = result.with_context(ErrorContext {
            cell: Some((0, 0)),
            operation: Some("sample"),
        });

        match enriched {
            Err(QuiltError::InvalidParameter {
                parameter,
                value,
                reason,
            }) => {
                assert_eq!(parameter, "stride");
                assert_eq!(value, "7");
                assert_eq!(reason, "too large");
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests I/O errors convert into the file system variant
    // Verified by mapping I/O errors to InvalidSourceData
    #[test]
    fn test_from_io_error() {
        let error: QuiltError = std::io::Error::other("disk gone").into();

        assert!(matches!(error, QuiltError::FileSystem { .. }));
        assert!(error.to_string().contains("disk gone"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = QuiltError::ImageExport {
            path: "/restricted/quilt.png".into(),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/quilt.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }
}
