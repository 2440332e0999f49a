//! Tests for the wall session event loop

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use jigsaw_wall::feed::catalog::CatalogFeed;
    use jigsaw_wall::feed::source::{PageRequest, PageSource};
    use jigsaw_wall::io::configuration::WallConfig;
    use jigsaw_wall::io::error::{FailureKind, Result, format_error};
    use jigsaw_wall::wall::category::{Category, CategoryState};
    use jigsaw_wall::wall::dice::FixedDice;
    use jigsaw_wall::wall::fragment::ImageDescriptor;
    use jigsaw_wall::wall::loader::{LoadSignal, LoadStatus, RequestOutcome};
    use jigsaw_wall::wall::render::RecordingTarget;
    use jigsaw_wall::wall::session::{WallEvent, WallSession};
    use jigsaw_wall::wall::viewport::ScrollMetrics;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    struct BrokenFeed;

    #[async_trait]
    impl PageSource for BrokenFeed {
        async fn fetch_page(&self, _request: &PageRequest) -> Result<Vec<ImageDescriptor>> {
            Err(format_error(&"code 500"))
        }
    }

    fn feed() -> Arc<CatalogFeed> {
        let mut images = Vec::new();
        for n in 0..12 {
            let tag = if n % 3 == 0 { "sea_coast" } else { "forest_pine" };
            images.push(ImageDescriptor::new(
                format!("t{n}"),
                format!("f{n}"),
                Some(tag.to_string()),
            ));
        }
        Arc::new(CatalogFeed::from_images(images))
    }

    fn categories() -> CategoryState {
        CategoryState::from_remote(vec![
            Category::new("sea", "Sea"),
            Category::new("forest", "Forest"),
        ])
    }

    fn config(page_size: usize) -> WallConfig {
        WallConfig {
            page_size,
            ..WallConfig::default()
        }
    }

    fn session<S: PageSource + 'static>(
        source: Arc<S>,
        page_size: usize,
    ) -> WallSession<S, RecordingTarget, FixedDice> {
        WallSession::new(
            source,
            RecordingTarget::new(),
            FixedDice(false),
            categories(),
            &config(page_size),
        )
    }

    fn bottom() -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: 500.0,
            viewport_height: 500.0,
            document_height: 1000.0,
        }
    }

    // Tests start shows chrome and loads the first page of the selection
    // Verified by not requesting a page on start
    #[tokio::test]
    async fn test_start_loads_first_page() {
        let mut session = session(feed(), 5);
        assert!(matches!(session.start(), RequestOutcome::Started(_)));
        assert_eq!(session.outstanding_fetches(), 1);
        assert_eq!(session.target().title, "All images - Wallpapers");
        assert!(session.target().categories.is_some());
        assert!(session.target().heights.is_some());

        let signal = session.next_settlement().await;
        assert_eq!(signal, Some(LoadSignal::MoreAvailable { received: 5 }));
        assert_eq!(session.loader().state().offset, 5);
        assert_eq!(session.next_settlement().await, None);
    }

    // Tests scrolls only load near the bottom and never overlap
    // Verified by issuing a fetch per scroll event
    #[tokio::test]
    async fn test_scroll_guarded() {
        let mut session = session(feed(), 5);
        session.start();
        session.next_settlement().await;

        let far = ScrollMetrics {
            scroll_top: 100.0,
            viewport_height: 500.0,
            document_height: 5000.0,
        };
        assert_eq!(session.handle(WallEvent::Scroll(far)), None);

        assert!(matches!(
            session.handle(WallEvent::Scroll(bottom())),
            Some(RequestOutcome::Started(_))
        ));
        for _ in 0..5 {
            assert_eq!(
                session.handle(WallEvent::Scroll(bottom())),
                Some(RequestOutcome::Busy)
            );
        }
        assert_eq!(session.outstanding_fetches(), 1);

        session.next_settlement().await;
        assert_eq!(session.loader().state().offset, 10);
    }

    // Tests scrolling to the end reports end of data and then stays idle
    // Verified by requesting again after an empty page
    #[tokio::test]
    async fn test_scroll_to_end() {
        let mut session = session(feed(), 5);
        session.start();

        let mut signals = Vec::new();
        while let Some(signal) = session.next_settlement().await {
            signals.push(signal);
            session.handle(WallEvent::Scroll(bottom()));
        }

        assert_eq!(signals.last(), Some(&LoadSignal::EndOfData));
        assert_eq!(session.loader().state().offset, 12);
        assert_eq!(session.target().image_count(), 12);
        assert_eq!(
            session.handle(WallEvent::Scroll(bottom())),
            Some(RequestOutcome::Exhausted)
        );
    }

    // Tests a category switch mid-fetch discards the superseded page
    // Verified by appending late results from the previous category
    #[tokio::test]
    async fn test_select_category_mid_fetch() {
        let mut session = session(feed(), 30);
        session.start();
        let outcome = session.handle(WallEvent::SelectCategory("sea".into()));
        assert!(matches!(outcome, Some(RequestOutcome::Started(_))));
        assert_eq!(session.outstanding_fetches(), 2);
        assert_eq!(session.categories().selected(), "sea");
        assert_eq!(session.target().title, "Sea - Wallpapers");

        let mut signals = Vec::new();
        while let Some(signal) = session.next_settlement().await {
            signals.push(signal);
        }
        assert!(signals.contains(&LoadSignal::Stale));
        assert!(signals.contains(&LoadSignal::MoreAvailable { received: 4 }));
        assert_eq!(session.target().image_count(), 4);
        assert_eq!(session.loader().state().category, "sea");
    }

    // Tests clicking the current category or reloading restarts from the top
    // Verified by ignoring clicks on the selected category
    #[tokio::test]
    async fn test_reselect_and_reload_reset() {
        let mut session = session(feed(), 5);
        session.start();
        session.next_settlement().await;
        assert_eq!(session.target().clears, 1);

        session.handle(WallEvent::SelectCategory("all".into()));
        session.next_settlement().await;
        assert_eq!(session.target().clears, 2);
        assert_eq!(session.loader().state().offset, 5);

        session.handle(WallEvent::Reload);
        assert_eq!(session.target().clears, 3);
        assert_eq!(session.loader().state().offset, 0);
        assert_eq!(session.loader().sequencer().count(), 0);
    }

    // Tests resizing reapplies tile heights without loading
    // Verified by keeping the start-up heights
    #[tokio::test]
    async fn test_resize() {
        let mut session = session(feed(), 5);
        session.start();
        assert_eq!(
            session.handle(WallEvent::Resize {
                container_width: 1000.0
            }),
            None
        );
        let heights = session.target().heights.map(|h| h.item);
        assert_eq!(heights, Some(1000.0 * (0.618 / 2.0)));
    }

    // Tests failures surface as recoverable and leave the wall usable
    // Verified by leaving the guard claimed after a failure
    #[tokio::test]
    async fn test_failure_is_recoverable() {
        let mut session = session(Arc::new(BrokenFeed), 5);
        session.start();
        assert_eq!(
            session.next_settlement().await,
            Some(LoadSignal::RecoverableError(FailureKind::Format))
        );
        assert_eq!(session.target().status(), Some(LoadStatus::FormatError));
        assert!(matches!(
            session.handle(WallEvent::Scroll(bottom())),
            Some(RequestOutcome::Started(_))
        ));
    }

    // Tests the event loop drains events and fetches before returning
    // Verified by returning when the channel closes with fetches outstanding
    #[tokio::test]
    async fn test_run_until_closed() {
        let mut session = session(feed(), 30);
        session.start();

        let (tx, rx) = mpsc::unbounded_channel();
        assert!(tx.send(WallEvent::SelectCategory("forest".into())).is_ok());
        drop(tx);
        session.run(rx).await;

        assert_eq!(session.outstanding_fetches(), 0);
        assert_eq!(session.loader().state().category, "forest");
        assert_eq!(session.loader().state().offset, 8);
        assert_eq!(session.target().image_count(), 7);
        assert!(session.loader().sequencer().state().has_pending());
        assert!(!session.loader().state().in_flight);
    }
}
