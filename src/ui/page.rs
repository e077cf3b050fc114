use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::content::{self, Span};
use crate::feedback::FeedbackForm;
use crate::page::{Block, Download, HtmlEmbed, ImageBlock, ImageWidth, Notice, Page, Severity, TablePreview};

/// Something the user asked for while the page was painted.
#[derive(Debug, Clone)]
pub enum PageAction {
    Download(Download),
    SubmitFeedback,
}

// ---------------------------------------------------------------------------
// Page painter (central panel)
// ---------------------------------------------------------------------------

/// Paint `page` top to bottom. The feedback form, if the page has one, edits
/// `feedback` in place.
pub fn show_page(ui: &mut Ui, page: &Page, feedback: &mut FeedbackForm) -> Vec<PageAction> {
    let mut actions = Vec::new();

    ui.label(RichText::new(page.title).size(28.0).strong());
    ui.add_space(8.0);

    for block in &page.blocks {
        match block {
            Block::Subheading(text) => {
                ui.add_space(6.0);
                ui.heading(*text);
            }
            Block::Text(spans) => paint_spans(ui, spans),
            Block::Bullets(lines) => {
                for line in lines.iter() {
                    ui.horizontal_wrapped(|ui: &mut Ui| {
                        ui.label("•");
                        ui.label(*line);
                    });
                }
            }
            Block::StrongLines(lines) => {
                for line in lines.iter() {
                    ui.label(RichText::new(*line).strong());
                }
            }
            Block::Table(table) => preview_table(ui, table),
            Block::Image(img) => image(ui, img),
            Block::Html(embed) => html_frame(ui, embed),
            Block::Download(download) => {
                if ui.button(download.label).clicked() {
                    actions.push(PageAction::Download(download.clone()));
                }
            }
            Block::Link(link) => {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    if let Some(caption) = link.caption {
                        ui.strong(caption);
                    }
                    ui.hyperlink_to(link.text, link.url);
                });
            }
            Block::Notice(notice) => notice_box(ui, notice),
            Block::FeedbackForm => {
                if feedback_form(ui, feedback) {
                    actions.push(PageAction::SubmitFeedback);
                }
            }
            Block::Separator => {
                ui.add_space(4.0);
                ui.separator();
            }
        }
        ui.add_space(4.0);
    }

    actions
}

fn paint_spans(ui: &mut Ui, spans: &[Span]) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            let rich = RichText::new(span.text);
            ui.label(if span.strong { rich.strong() } else { rich });
        }
    });
}

fn preview_table(ui: &mut Ui, table: &TablePreview) {
    ScrollArea::horizontal()
        .id_salt("dataset_preview")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(Column::auto().at_least(60.0).resizable(true), table.headers.len())
                .header(22.0, |mut header| {
                    for name in &table.headers {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for row in &table.rows {
                        body.row(20.0, |mut cells| {
                            for cell in row {
                                cells.col(|ui: &mut Ui| {
                                    ui.label(cell);
                                });
                            }
                        });
                    }
                });
        });
}

fn image(ui: &mut Ui, img: &ImageBlock) {
    let width = match img.width {
        ImageWidth::Fixed(w) => w,
        ImageWidth::Container => ui.available_width(),
    };
    ui.add(egui::Image::new(img.uri()).max_width(width));
}

fn html_frame(ui: &mut Ui, embed: &HtmlEmbed) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(embed.width);
        ui.set_height(embed.height);
        ui.vertical(|ui: &mut Ui| {
            if ui.button(content::HEATMAP_OPEN_LABEL).clicked() {
                let url = format!("file://{}", embed.path.display());
                ui.ctx().open_url(egui::OpenUrl::new_tab(url));
            }
            ui.separator();
            ScrollArea::both()
                .id_salt("html_embed")
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.add(egui::Label::new(RichText::new(&embed.content).monospace()).extend());
                });
        });
    });
}

fn notice_box(ui: &mut Ui, notice: &Notice) {
    let (fill, text) = match notice.severity {
        Severity::Error => (Color32::from_rgb(0x5c, 0x1f, 0x24), Color32::from_rgb(0xff, 0xa8, 0xa8)),
        Severity::Warning => (Color32::from_rgb(0x5c, 0x4d, 0x1a), Color32::from_rgb(0xff, 0xe0, 0x8a)),
        Severity::Success => (Color32::from_rgb(0x1d, 0x4d, 0x2b), Color32::from_rgb(0xa8, 0xf0, 0xb8)),
    };
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&notice.message).color(text));
        });
}

/// Returns `true` when Submit was pressed this frame.
fn feedback_form(ui: &mut Ui, form: &mut FeedbackForm) -> bool {
    ui.label(content::FEEDBACK_PROMPT);
    ui.add(egui::TextEdit::singleline(&mut form.draft).desired_width(f32::INFINITY));
    let submitted = ui.button(content::FEEDBACK_BUTTON).clicked();

    if let Some(outcome) = form.outcome {
        notice_box(ui, &outcome.notice());
    }
    submitted
}
