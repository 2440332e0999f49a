//! Command-line interface scrolling through a feed and saving wall previews

use crate::feed::catalog::CatalogFeed;
use crate::feed::http::HttpFeed;
use crate::feed::source::{CategorySource, PageSource, load_categories};
use crate::io::configuration::{
    DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, DEFAULT_RATIO, DEFAULT_SEED, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH, MIN_SCROLL_TOP, QueryKeys, SCROLL_BOTTOM_THRESHOLD, WallConfig,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::html::HtmlTarget;
use crate::io::image::export_layout_as_png;
use crate::io::progress::ProgressManager;
use crate::wall::category::CategoryState;
use crate::wall::dice::SeededDice;
use crate::wall::fragment::RenderFragment;
use crate::wall::layout::WallLayout;
use crate::wall::loader::{LoadSignal, LoadStatus};
use crate::wall::render::RenderTarget;
use crate::wall::session::{WallEvent, WallSession};
use crate::wall::viewport::{ScrollMetrics, TileHeights};
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "jigsaw-wall")]
#[command(
    author,
    version,
    about = "Scroll through an image feed and lay it out as a jigsaw photo wall"
)]
/// Command-line arguments for the wall previewer
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image API URL (http:// or https://) or catalog JSON file
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Category to load; repeat for several (defaults to all images)
    #[arg(short, long = "category", value_name = "ID")]
    pub categories: Vec<String>,

    /// Maximum pages to scroll through per category
    #[arg(short, long, default_value_t = DEFAULT_MAX_PAGES)]
    pub pages: usize,

    /// Images requested per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Random seed for reproducible walls
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Tile height-to-width ratio
    #[arg(short, long, default_value_t = DEFAULT_RATIO)]
    pub ratio: f64,

    /// Viewport width tile sizes derive from
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub viewport_width: u32,

    /// Viewport height used for simulated scrolling
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub viewport_height: u32,

    /// Category list URL (defaults to <SOURCE>/categories)
    #[arg(long)]
    pub categories_url: Option<String>,

    /// Use cid/start/count query parameters
    #[arg(long)]
    pub legacy_query: bool,

    /// Abort a fetch after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Write the wall as an HTML page
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Write the wall layout as a PNG image
    #[arg(long, value_name = "PATH")]
    pub layout_png: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Also log to rotating files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Whether SOURCE names a remote API rather than a catalog file
    pub fn is_remote(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }

    /// Wall configuration from the arguments
    pub fn config(&self) -> WallConfig {
        WallConfig {
            page_size: self.page_size,
            ratio: self.ratio,
            viewport_width: self.viewport_width,
            scroll_threshold: SCROLL_BOTTOM_THRESHOLD,
            min_scroll_top: MIN_SCROLL_TOP,
            query_keys: if self.legacy_query {
                QueryKeys::legacy()
            } else {
                QueryKeys::standard()
            },
            fetch_timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Render target keeping both the HTML page and the geometric layout
#[derive(Clone, Debug)]
pub struct PreviewTarget {
    /// HTML page
    pub html: HtmlTarget,
    /// Tile geometry
    pub layout: WallLayout,
}

impl PreviewTarget {
    /// Empty preview for a container width
    pub fn new(container_width: f64, ratio: f64) -> Self {
        Self {
            html: HtmlTarget::new(),
            layout: WallLayout::new(container_width, ratio),
        }
    }
}

impl RenderTarget for PreviewTarget {
    fn append(&mut self, fragment: RenderFragment) {
        self.layout.push(&fragment);
        self.html.append(fragment);
    }

    fn clear_all(&mut self) {
        self.layout.clear();
        self.html.clear_all();
    }

    fn apply_tile_heights(&mut self, heights: TileHeights) {
        self.html.apply_tile_heights(heights);
    }

    fn set_status(&mut self, status: LoadStatus) {
        self.html.set_status(status);
    }

    fn set_title(&mut self, title: &str) {
        self.html.set_title(title);
    }

    fn show_categories(&mut self, categories: &CategoryState) {
        self.html.show_categories(categories);
    }
}

/// Outcome of scrolling through one category
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryReport {
    /// Category id
    pub category: String,
    /// Pages that added images
    pub pages: usize,
    /// Images received
    pub images: usize,
    /// Tiles on the wall
    pub tiles: usize,
    /// Last signal seen, `None` if nothing settled
    pub last_signal: Option<LoadSignal>,
}

/// Drives one session per requested category by simulated scrolling
pub struct WallRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl WallRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load every requested category and write the requested previews
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the feed cannot be
    /// opened, or a preview cannot be written
    pub async fn run(&mut self) -> Result<Vec<CategoryReport>> {
        let config = self.cli.config();
        config.validate()?;
        if self.cli.pages == 0 {
            return Err(invalid_parameter(
                "pages",
                &self.cli.pages,
                &"must be at least 1",
            ));
        }

        if self.cli.is_remote() {
            let feed = HttpFeed::new(
                self.cli.source.clone(),
                self.cli.categories_url.clone(),
                config.query_keys.clone(),
                config.fetch_timeout,
            )?;
            self.run_with(Arc::new(feed), &config).await
        } else {
            let feed = CatalogFeed::open(Path::new(&self.cli.source))?;
            self.run_with(Arc::new(feed), &config).await
        }
    }

    async fn run_with<S>(
        &mut self,
        feed: Arc<S>,
        config: &WallConfig,
    ) -> Result<Vec<CategoryReport>>
    where
        S: PageSource + CategorySource + 'static,
    {
        let categories = load_categories(feed.as_ref()).await;
        let ids = if self.cli.categories.is_empty() {
            vec![categories.selected().to_string()]
        } else {
            self.cli.categories.clone()
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(ids.len());
        }

        let mut reports = Vec::with_capacity(ids.len());
        for (index, id) in ids.iter().enumerate() {
            let report = self
                .scroll_category(
                    Arc::clone(&feed),
                    categories.clone(),
                    config,
                    index,
                    id,
                    ids.len(),
                )
                .await?;
            reports.push(report);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(reports)
    }

    async fn scroll_category<S>(
        &self,
        feed: Arc<S>,
        mut categories: CategoryState,
        config: &WallConfig,
        index: usize,
        id: &str,
        total: usize,
    ) -> Result<CategoryReport>
    where
        S: PageSource + 'static,
    {
        categories.select(id);
        let name = categories
            .find(id)
            .map_or_else(|| id.to_string(), |category| category.name.clone());
        if let Some(ref pm) = self.progress_manager {
            pm.start_category(index, &name, self.cli.pages);
        }

        let preview = PreviewTarget::new(f64::from(config.viewport_width), config.ratio);
        let dice = SeededDice::new(self.cli.seed);
        let mut session = WallSession::new(feed, preview, dice, categories, config);
        session.start();

        let viewport_height = f64::from(self.cli.viewport_height);
        let mut pages = 0;
        let mut last_signal = None;
        while let Some(signal) = session.next_settlement().await {
            last_signal = Some(signal);
            match signal {
                LoadSignal::MoreAvailable { .. } => {
                    pages += 1;
                    if let Some(ref pm) = self.progress_manager {
                        pm.page_loaded(index, session.loader().state().offset);
                    }
                    if pages >= self.cli.pages {
                        break;
                    }
                    let metrics = ScrollMetrics::at_bottom(
                        viewport_height,
                        session.target().layout.document_height(),
                    );
                    if session.handle(WallEvent::Scroll(metrics)).is_none() {
                        info!("'{id}' wall is shorter than the viewport, stopping");
                    }
                }
                LoadSignal::RecoverableError(kind) => {
                    warn!("'{id}' stopped after a {kind:?} failure");
                }
                LoadSignal::EndOfData | LoadSignal::Stale => {}
            }
        }

        let report = CategoryReport {
            category: id.to_string(),
            pages,
            images: session.loader().state().offset,
            tiles: session.target().html.tiles().len(),
            last_signal,
        };
        info!(
            "'{}': {} pages, {} images, {} tiles",
            report.category, report.pages, report.images, report.tiles
        );

        let target = session.into_target();
        if let Some(path) = &self.cli.html {
            target.html.write(&Self::output_path(path, id, total))?;
        }
        if let Some(path) = &self.cli.layout_png {
            export_layout_as_png(&target.layout, &Self::output_path(path, id, total))?;
        }

        if let Some(ref pm) = self.progress_manager {
            let note = match report.last_signal {
                Some(LoadSignal::EndOfData) => "✓ all loaded",
                Some(LoadSignal::RecoverableError(_)) => "✗ failed",
                _ => "✓",
            };
            pm.complete_category(index, note);
        }
        Ok(report)
    }

    /// Output path for a category, suffixed with its id when several are loaded
    pub fn output_path(base: &Path, category: &str, total: usize) -> PathBuf {
        if total <= 1 {
            return base.to_path_buf();
        }
        let stem = base.file_stem().unwrap_or_default();
        let extension = base.extension().unwrap_or_default();
        let name = format!(
            "{}_{}.{}",
            stem.to_string_lossy(),
            category,
            extension.to_string_lossy()
        );

        if let Some(parent) = base.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
