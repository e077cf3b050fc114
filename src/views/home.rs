use crate::content;
use crate::data::model::Dataset;
use crate::page::{Block, Download, DownloadSource, Link, Page, TablePreview};
use super::View;

/// Rows shown in the dataset preview.
pub const PREVIEW_ROWS: usize = 5;

pub const DATASET_FILE_NAME: &str = "cleaned_missing_data.csv";
pub const DATASET_MIME: &str = "text/csv";

pub fn render(dataset: &Dataset) -> Page {
    let mut page = Page::new(View::Home.title());
    page.push(Block::Text(content::HOME_INTRO));
    page.push(Block::Subheading(content::GOALS_HEADING));
    page.push(Block::Bullets(content::GOALS));

    page.push(Block::Subheading(content::PREVIEW_HEADING));
    page.push(Block::Table(preview(dataset, PREVIEW_ROWS)));

    page.push(Block::Download(Download {
        label: content::DATASET_DOWNLOAD_LABEL,
        file_name: DATASET_FILE_NAME,
        mime: DATASET_MIME,
        source: DownloadSource::DatasetCsv,
    }));

    page.push(Block::Link(Link {
        caption: Some(content::DATASET_SOURCE_LABEL),
        text: content::DATASET_SOURCE_LINK_TEXT,
        url: content::DATASET_SOURCE_URL,
    }));
    page
}

fn preview(dataset: &Dataset, n: usize) -> TablePreview {
    TablePreview {
        headers: dataset.headers.iter().map(str::to_string).collect(),
        rows: dataset
            .head(n)
            .iter()
            .map(|row| row.iter().map(str::to_string).collect())
            .collect(),
    }
}
