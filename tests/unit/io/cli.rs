//! Tests for command-line parsing and the simulated scrolling runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use jigsaw_wall::feed::catalog::CatalogFile;
    use jigsaw_wall::feed::wire::WireImage;
    use jigsaw_wall::io::cli::{Cli, PreviewTarget, WallRunner};
    use jigsaw_wall::io::configuration::{
        DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, DEFAULT_SEED, QueryKeys,
    };
    use jigsaw_wall::wall::fragment::{
        ImageDescriptor, RenderFragment, TileCell, TileShape, TileSizing,
    };
    use jigsaw_wall::wall::loader::LoadSignal;
    use jigsaw_wall::wall::render::RenderTarget;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_catalog(dir: &Path, count: usize) -> PathBuf {
        let images = (0..count)
            .map(|n| WireImage {
                thumbnail: format!("thumbs/{n}.jpg"),
                url: format!("full/{n}.jpg"),
                tag: Some(if n % 2 == 0 { "sea_a" } else { "forest_b" }.to_string()),
            })
            .collect();
        let catalog = CatalogFile {
            images,
            categories: None,
        };
        let path = dir.join("catalog.json");
        let json = serde_json::to_string(&catalog).unwrap_or_default();
        fs::write(&path, json).unwrap_or_else(|e| unreachable!("{e}"));
        path
    }

    fn path_arg(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    // Tests CLI parsing with only the required source argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "catalog.json"]);

        assert_eq!(cli.source, "catalog.json");
        assert!(cli.categories.is_empty());
        assert_eq!(cli.pages, DEFAULT_MAX_PAGES);
        assert_eq!(cli.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(!cli.quiet);
        assert!(!cli.is_remote());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping the timeout from the configuration
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "https://example.org/api",
            "-c",
            "sea",
            "--category",
            "forest",
            "-p",
            "3",
            "--page-size",
            "12",
            "-s",
            "7",
            "-r",
            "0.5",
            "--viewport-width",
            "1280",
            "--viewport-height",
            "720",
            "--categories-url",
            "https://example.org/cats",
            "--legacy-query",
            "--timeout-secs",
            "4",
            "--html",
            "wall.html",
            "--layout-png",
            "wall.png",
            "--quiet",
            "--log-dir",
            "logs",
        ]);

        assert!(cli.is_remote());
        assert_eq!(cli.categories, vec!["sea", "forest"]);
        assert_eq!(cli.pages, 3);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.viewport_height, 720);
        assert_eq!(
            cli.categories_url.as_deref(),
            Some("https://example.org/cats")
        );
        assert_eq!(cli.html, Some(PathBuf::from("wall.html")));
        assert_eq!(cli.layout_png, Some(PathBuf::from("wall.png")));
        assert_eq!(cli.log_dir, Some(PathBuf::from("logs")));
        assert!(!cli.should_show_progress());

        let config = cli.config();
        assert_eq!(config.page_size, 12);
        assert!((config.ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.viewport_width, 1280);
        assert_eq!(config.query_keys, QueryKeys::legacy());
        assert_eq!(config.fetch_timeout, Some(Duration::from_secs(4)));
    }

    // Tests output paths gain a category suffix only when several are loaded
    // Verified by always suffixing
    #[test]
    fn test_output_path() {
        let base = Path::new("out/wall.html");
        assert_eq!(
            WallRunner::output_path(base, "sea", 1),
            PathBuf::from("out/wall.html")
        );
        assert_eq!(
            WallRunner::output_path(base, "sea", 2),
            PathBuf::from("out/wall_sea.html")
        );
        assert_eq!(
            WallRunner::output_path(Path::new("wall.png"), "all", 3),
            PathBuf::from("wall_all.png")
        );
    }

    // Tests the preview target feeds both the page and the layout
    // Verified by only clearing the page
    #[test]
    fn test_preview_target() {
        let mut preview = PreviewTarget::new(1000.0, 0.5);
        preview.append(RenderFragment::Single(TileCell::new(
            TileShape::FullHalf,
            ImageDescriptor::new("t", "f", None),
            &TileSizing::new(1000, 0.5),
        )));
        preview.set_title("All images - Wallpapers");
        assert_eq!(preview.html.tiles().len(), 1);
        assert_eq!(preview.layout.cells().len(), 1);
        assert_eq!(preview.html.title(), "All images - Wallpapers");

        preview.clear_all();
        assert!(preview.html.tiles().is_empty());
        assert!(preview.layout.cells().is_empty());
    }

    // Tests scrolling a catalog to the end and writing both previews
    // Verified by stopping after the first page
    #[tokio::test]
    async fn test_runner_scrolls_catalog_to_end() {
        let dir = TempDir::new().unwrap_or_else(|e| unreachable!("{e}"));
        let catalog = path_arg(&write_catalog(dir.path(), 12));
        let html_path = dir.path().join("wall.html");
        let png_path = dir.path().join("wall.png");
        let html = path_arg(&html_path);
        let png = path_arg(&png_path);

        let cli = Cli::parse_from([
            "program",
            catalog.as_str(),
            "--page-size",
            "5",
            "--viewport-height",
            "100",
            "--html",
            html.as_str(),
            "--layout-png",
            png.as_str(),
            "--quiet",
        ]);
        let mut runner = WallRunner::new(cli);
        let Ok(reports) = runner.run().await else {
            unreachable!("catalog run should succeed");
        };

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.category, "all");
        assert_eq!(report.pages, 3);
        assert_eq!(report.images, 12);
        assert_eq!(report.last_signal, Some(LoadSignal::EndOfData));
        assert!(report.tiles > 0 && report.tiles <= 12);

        let document = fs::read_to_string(&html_path).unwrap_or_default();
        assert!(document.contains("All images - Wallpapers"));
        assert_eq!(document.matches("class=\"pimg\"").count(), 12);
        assert!(png_path.exists());
    }

    // Tests several categories each get their own suffixed preview
    // Verified by writing every category to the same file
    #[tokio::test]
    async fn test_runner_multiple_categories() {
        let dir = TempDir::new().unwrap_or_else(|e| unreachable!("{e}"));
        let catalog = path_arg(&write_catalog(dir.path(), 6));
        let html_path = dir.path().join("wall.html");
        let html = path_arg(&html_path);

        let cli = Cli::parse_from([
            "program",
            catalog.as_str(),
            "-c",
            "sea",
            "-c",
            "forest",
            "--html",
            html.as_str(),
            "-q",
        ]);
        let mut runner = WallRunner::new(cli);
        let Ok(reports) = runner.run().await else {
            unreachable!("catalog run should succeed");
        };

        let images: Vec<(&str, usize)> = reports
            .iter()
            .map(|r| (r.category.as_str(), r.images))
            .collect();
        assert_eq!(images, vec![("sea", 3), ("forest", 3)]);
        assert!(dir.path().join("wall_sea.html").exists());
        assert!(dir.path().join("wall_forest.html").exists());
        assert!(!html_path.exists());
    }

    // Tests a missing catalog fails before anything is loaded
    // Verified by falling back to an empty feed
    #[tokio::test]
    async fn test_runner_missing_catalog() {
        let cli = Cli::parse_from(["program", "/nonexistent/catalog.json", "-q"]);
        let mut runner = WallRunner::new(cli);
        assert!(runner.run().await.is_err());
    }

    // Tests invalid configuration is rejected before the feed is opened
    // Verified by skipping validation
    #[tokio::test]
    async fn test_runner_invalid_config() {
        let cli = Cli::parse_from(["program", "catalog.json", "--page-size", "0", "-q"]);
        let mut runner = WallRunner::new(cli);
        assert!(matches!(
            runner.run().await,
            Err(jigsaw_wall::WallError::InvalidParameter { .. })
        ));
    }

    // Tests a zero page limit is rejected instead of loading the first page
    // Verified by checking the limit only after a page settles
    #[tokio::test]
    async fn test_runner_zero_pages() {
        let dir = TempDir::new().unwrap_or_else(|e| unreachable!("{e}"));
        let catalog = path_arg(&write_catalog(dir.path(), 6));
        let cli = Cli::parse_from(["program", catalog.as_str(), "--pages", "0", "-q"]);
        let mut runner = WallRunner::new(cli);
        let Err(jigsaw_wall::WallError::InvalidParameter { parameter, .. }) = runner.run().await
        else {
            unreachable!("a zero page limit should be rejected");
        };
        assert_eq!(parameter, "pages");
    }
}
