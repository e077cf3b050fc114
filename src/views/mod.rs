//! The six views and the router that picks exactly one of them.

pub mod dashboard;
pub mod eda;
pub mod geo;
pub mod home;
pub mod hypothesis;
pub mod summary;

use std::fmt;

use crate::artifacts::AssetLayout;
use crate::content;
use crate::data::model::Dataset;
use crate::page::Page;

/// A navigation selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Home,
    Eda,
    GeoAnalysis,
    HypothesisTesting,
    Dashboard,
    Summary,
}

impl View {
    /// Menu order.
    pub const ALL: [View; 6] = [
        View::Home,
        View::Eda,
        View::GeoAnalysis,
        View::HypothesisTesting,
        View::Dashboard,
        View::Summary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Eda => "EDA",
            View::GeoAnalysis => "Geo Analysis",
            View::HypothesisTesting => "Hypothesis Testing",
            View::Dashboard => "Power BI Dashboard",
            View::Summary => "Summary & Feedback",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            View::Home => "🏠",
            View::Eda => "📈",
            View::GeoAnalysis => "🗺",
            View::HypothesisTesting => "🔍",
            View::Dashboard => "📊",
            View::Summary => "📋",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => content::HOME_TITLE,
            View::Eda => content::EDA_TITLE,
            View::GeoAnalysis => content::GEO_TITLE,
            View::HypothesisTesting => content::HYPOTHESIS_TITLE,
            View::Dashboard => content::DASHBOARD_TITLE,
            View::Summary => content::SUMMARY_TITLE,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

/// What a renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub dataset: &'a Dataset,
    pub layout: &'a AssetLayout,
}

/// Render the page for `view`, and only that view.
pub fn render(view: View, ctx: &ViewContext<'_>) -> Page {
    match view {
        View::Home => home::render(ctx.dataset),
        View::Eda => eda::render(ctx.layout),
        View::GeoAnalysis => geo::render(ctx.layout),
        View::HypothesisTesting => hypothesis::render(),
        View::Dashboard => dashboard::render(ctx.layout),
        View::Summary => summary::render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Block;
    use csv::StringRecord;

    fn dataset() -> Dataset {
        Dataset::new(
            StringRecord::from(vec!["year", "state"]),
            vec![StringRecord::from(vec!["2019", "Maharashtra"])],
        )
    }

    fn has(page: &Page, pred: fn(&Block) -> bool) -> bool {
        page.blocks.iter().any(pred)
    }

    #[test]
    fn each_view_renders_only_its_own_page() {
        let dir = tempfile::tempdir().unwrap();
        let layout = AssetLayout::from_root(dir.path());
        let ds = dataset();
        let ctx = ViewContext {
            dataset: &ds,
            layout: &layout,
        };

        for view in View::ALL {
            let page = render(view, &ctx);
            assert_eq!(page.title, view.title());

            let text = page.text();
            for other in View::ALL.into_iter().filter(|v| *v != view) {
                assert!(
                    !text.contains(other.title()),
                    "{view:?} page shows the {other:?} title"
                );
            }

            assert_eq!(has(&page, |b| matches!(b, Block::Table(_))), view == View::Home);
            assert_eq!(has(&page, |b| matches!(b, Block::FeedbackForm)), view == View::Summary);
            assert_eq!(
                text.contains(content::SUMMARY_POINTS[0]),
                view == View::Summary
            );
            assert_eq!(
                text.contains(content::FINDINGS[0].question),
                view == View::HypothesisTesting
            );
        }
    }

    #[test]
    fn menu_is_in_fixed_order_with_distinct_labels() {
        let labels: Vec<_> = View::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(
            labels,
            [
                "Home",
                "EDA",
                "Geo Analysis",
                "Hypothesis Testing",
                "Power BI Dashboard",
                "Summary & Feedback"
            ]
        );
        assert_eq!(View::default(), View::Home);
        assert_eq!(View::GeoAnalysis.to_string(), "🗺 Geo Analysis");
    }
}
