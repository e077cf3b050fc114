use eframe::egui;

use crate::artifacts::AssetLayout;
use crate::data::model::Dataset;
use crate::download;
use crate::page::Page;
use crate::state::Session;
use crate::ui::page::{self as page_ui, PageAction};
use crate::ui::panels;
use crate::views::{self, View, ViewContext};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    dataset: Dataset,
    layout: AssetLayout,
    pub session: Session,
    /// Page for the current view; rebuilt whenever the selection changes.
    page: Page,
}

impl DashboardApp {
    pub fn new(dataset: Dataset, layout: AssetLayout) -> Self {
        let session = Session::default();
        let page = views::render(
            session.view(),
            &ViewContext {
                dataset: &dataset,
                layout: &layout,
            },
        );
        Self {
            dataset,
            layout,
            session,
            page,
        }
    }

    #[cfg(test)]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Switch views and re-render the page from scratch.
    pub fn select(&mut self, view: View) {
        if self.session.select(view) {
            self.page = views::render(
                view,
                &ViewContext {
                    dataset: &self.dataset,
                    layout: &self.layout,
                },
            );
        }
    }

    fn handle(&mut self, action: PageAction) {
        match action {
            PageAction::Download(dl) => match download::save_with_dialog(&dl, &self.dataset) {
                Ok(Some(_)) => self.session.status_message = None,
                Ok(None) => log::debug!("Download of {} cancelled", dl.file_name),
                Err(e) => {
                    log::error!("Download failed: {e}");
                    self.session.status_message = Some(format!("Error: {e}"));
                }
            },
            PageAction::SubmitFeedback => {
                self.session.submit_feedback();
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: navigation ----
        let selected = egui::TopBottomPanel::top("nav_bar")
            .frame(panels::nav_frame())
            .show(ctx, |ui| panels::top_bar(ui, &self.session))
            .inner;
        if let Some(view) = selected {
            self.select(view);
        }

        // ---- Central panel: selected view ----
        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| page_ui::show_page(ui, &self.page, &mut self.session.feedback))
                    .inner
            })
            .inner;

        if !actions.is_empty() {
            for action in actions {
                self.handle(action);
            }
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::VISUAL_DIR;
    use crate::page::Block;
    use csv::StringRecord;

    fn app(root: &std::path::Path) -> DashboardApp {
        let dataset = Dataset::new(
            StringRecord::from(vec!["year"]),
            vec![StringRecord::from(vec!["2019"])],
        );
        DashboardApp::new(dataset, AssetLayout::from_root(root))
    }

    #[test]
    fn opens_on_home_page() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        assert_eq!(app.page().title, View::Home.title());
    }

    #[test]
    fn selection_rebuilds_the_page_and_rechecks_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        app.select(View::GeoAnalysis);
        assert_eq!(app.page().title, View::GeoAnalysis.title());
        assert_eq!(app.page().notices().count(), 1);

        // The heatmap appears; it is picked up on the next render of the view.
        std::fs::create_dir(dir.path().join(VISUAL_DIR)).unwrap();
        std::fs::write(dir.path().join(VISUAL_DIR).join("missing_heatmap.html"), "<p>hi</p>").unwrap();
        app.select(View::Home);
        app.select(View::GeoAnalysis);

        assert_eq!(app.page().notices().count(), 0);
        assert!(app
            .page()
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Html(e) if e.content == "<p>hi</p>")));
    }

    #[test]
    fn feedback_submission_goes_through_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        app.select(View::Summary);

        app.handle(PageAction::SubmitFeedback);
        assert_eq!(
            app.session.feedback.outcome,
            Some(crate::feedback::FeedbackOutcome::Empty)
        );
    }
}
