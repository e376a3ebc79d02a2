/// Results panel for a completed scan
///
/// Four labeled regions populated from the backend report, with the fixed
/// fallback strings substituted for anything the backend omitted.

use iced::widget::{column, container, text, Column};
use iced::{Element, Length};

use crate::scan::ScanOutcome;
use crate::Message;

pub fn results_panel(outcome: &ScanOutcome) -> Element<'_, Message> {
    let report = &outcome.report;

    let content: Column<Message> = column![
        text("Scan Results").size(24),
        field("Extracted Text", report.extracted_text()),
        field("Medicine Name", report.medicine_name()),
        field("Usage", report.usage()),
        field("Warnings", report.warnings()),
        text(format!(
            "Scanned at {}",
            outcome.scanned_at.format("%Y-%m-%d %H:%M UTC")
        ))
        .size(12),
    ]
    .spacing(12);

    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// One labeled display region
fn field<'a>(label: &'a str, value: &'a str) -> Column<'a, Message> {
    column![text(label).size(14), text(value).size(16)].spacing(4)
}
