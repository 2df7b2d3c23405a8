//! Tests for command-line parsing and batch processing

#[cfg(test)]
mod tests {

    use camogen::CamoError;
    use camogen::color::PaletteName;
    use camogen::io::cli::{BatchProcessor, Cli};
    use camogen::io::configuration::{DEFAULT_HEIGHT, DEFAULT_IMAGE_COUNT, DEFAULT_WIDTH};
    use camogen::pattern::PatternKind;
    use clap::Parser;
    use image::Rgb;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn small_batch_args(output: &str) -> Vec<String> {
        [
            "camogen", "--type", "organic", "-n", "2", "-s", "5", "-W", "48", "-H", "40", "-j",
            "1", "-q", "-o", output,
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }

    // Tests defaults when only the pattern type is given
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::try_parse_from(["camogen", "--type", "jagged"]);
        assert!(cli.is_ok_and(|cli| cli.pattern == PatternKind::Jagged
            && cli.preset == PaletteName::Piedmont
            && cli.colors.is_none()
            && !cli.grid
            && !cli.rain
            && !cli.modulation
            && cli.grid_color.is_none()
            && cli.limit == DEFAULT_IMAGE_COUNT
            && cli.seed.is_none()
            && cli.width == DEFAULT_WIDTH
            && cli.height == DEFAULT_HEIGHT
            && cli.grid_size == 600
            && cli.output == PathBuf::from("output")
            && cli.threads.is_none()
            && cli.should_show_progress()));
    }

    // Tests every option in its short or long form
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::try_parse_from([
            "camogen",
            "--type",
            "M90",
            "-p",
            "clay",
            "-c",
            "#000000,#FFFFFF",
            "-g",
            "-r",
            "-m",
            "--grid-color",
            "#FF0000",
            "-n",
            "3",
            "-s",
            "9",
            "-W",
            "320",
            "-H",
            "240",
            "--grid-size",
            "40",
            "-o",
            "renders",
            "-j",
            "2",
            "-q",
        ]);
        assert!(cli.is_ok_and(|cli| cli.pattern == PatternKind::M90
            && cli.preset == PaletteName::Clay
            && cli.colors.as_deref() == Some("#000000,#FFFFFF")
            && cli.grid
            && cli.rain
            && cli.modulation
            && cli.grid_color == Some(Rgb([255, 0, 0]))
            && cli.limit == 3
            && cli.seed == Some(9)
            && (cli.width, cli.height, cli.grid_size) == (320, 240, 40)
            && cli.output == PathBuf::from("renders")
            && cli.threads == Some(2)
            && !cli.should_show_progress()));
    }

    // Tests rejection of unknown styles, bad colours and a missing type
    #[test]
    fn test_cli_rejects_invalid_values() {
        assert!(Cli::try_parse_from(["camogen", "--type", "woodland"]).is_err());
        assert!(Cli::try_parse_from(["camogen", "--type", "brush", "-p", "desert"]).is_err());
        assert!(
            Cli::try_parse_from(["camogen", "--type", "brush", "--grid-color", "grey"]).is_err()
        );
        assert!(Cli::try_parse_from(["camogen"]).is_err());
    }

    // Tests palette resolution and grid colour defaulting
    #[test]
    fn test_generation_config() {
        let with_colors =
            Cli::try_parse_from(["camogen", "--type", "brush", "-c", "#000000,#FFFFFF"]);
        assert!(with_colors.is_ok_and(|cli| cli.generation_config().is_ok_and(|config| {
            config.palette.colors() == [Rgb([0, 0, 0]), Rgb([255, 255, 255])]
                && config.grid_color == Rgb([20, 20, 20])
        })));

        let bad_colors = Cli::try_parse_from(["camogen", "--type", "brush", "-c", "#00000"]);
        assert!(bad_colors.is_ok_and(|cli| matches!(
            cli.generation_config(),
            Err(CamoError::InvalidColorFormat { .. })
        )));
    }

    // Tests that a batch writes one PNG per requested image
    #[test]
    fn test_batch_processor_writes_images() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let output = dir.path().join("camo");
        let cli = Cli::try_parse_from(small_batch_args(&output.to_string_lossy()))
            .expect("Failed to parse arguments");

        let written = BatchProcessor::new(cli).process().expect("Failed to process batch");
        assert_eq!(written.len(), 2);

        for path in written {
            assert!(path.exists());
            assert!(path.starts_with(&output));
            let name = path.file_name().map(|n| n.to_string_lossy().to_string());
            assert!(name.is_some_and(|n| n.starts_with("camo_") && n.ends_with(".png")));
        }
    }

    // Tests that the same seed reproduces the same file names
    #[test]
    fn test_batch_processor_is_reproducible() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let run = |sub: &str| {
            let output = dir.path().join(sub);
            let cli = Cli::try_parse_from(small_batch_args(&output.to_string_lossy()))
                .expect("Failed to parse arguments");
            BatchProcessor::new(cli)
                .process()
                .expect("Failed to process batch")
                .iter()
                .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
                .collect::<Vec<_>>()
        };

        let first = run("a");
        assert_eq!(first.len(), 2);
        assert_eq!(first, run("b"));
    }

    // Tests that an empty batch is refused before any work starts
    #[test]
    fn test_batch_processor_rejects_zero_images() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let output = dir.path().join("never");
        let output_arg = output.to_string_lossy().to_string();
        let cli = Cli::try_parse_from([
            "camogen",
            "--type",
            "organic",
            "-n",
            "0",
            "-q",
            "-o",
            output_arg.as_str(),
        ])
        .expect("Failed to parse arguments");

        assert!(matches!(
            BatchProcessor::new(cli).process(),
            Err(CamoError::InvalidParameter {
                parameter: "limit",
                ..
            })
        ));
        assert!(!output.exists());
    }

    // Tests that a zero-sized canvas is reported as degenerate
    #[test]
    fn test_batch_processor_rejects_empty_canvas() {
        let cli = Cli::try_parse_from(["camogen", "--type", "m90", "-W", "0", "-q"])
            .expect("Failed to parse arguments");
        assert!(matches!(
            BatchProcessor::new(cli).process(),
            Err(CamoError::DegenerateDimensions { width: 0, .. })
        ));
    }
}
