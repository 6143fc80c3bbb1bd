/// Record detail screen
///
/// Two-column layout: badge, name, summary line, notes and the fixed
/// five-row care table on the left; the photo gallery on the right.
/// Load failure and record-not-found each render their own fixed
/// message; the back control is the only interaction left.

use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::catalogue::data::{CareSchedule, TreeRecord};
use crate::{format, DetailState, Message, PLACEHOLDER_PHOTO};

pub fn view(state: &DetailState) -> Element<'_, Message> {
    let body: Element<'_, Message> = match state {
        DetailState::Loading { .. } => status_page("Loading item…"),
        DetailState::Failed => status_page("Could not load item."),
        DetailState::NotFound => status_page("Item not found."),
        DetailState::Ready { record } => record_view(record),
    };

    column![
        button(text("← Back to collection"))
            .on_press(Message::BackToCollection)
            .padding(8),
        body,
    ]
    .spacing(16)
    .padding(24)
    .into()
}

fn record_view(record: &TreeRecord) -> Element<'_, Message> {
    let badge = format!("{} • {}", record.species, record.style);
    let summary = format!(
        "Age: {} | Height: {} | Pot: {}",
        format::years(record.age_years),
        format::cm(record.height_cm),
        record.pot.as_deref().unwrap_or(format::PLACEHOLDER)
    );

    let left = column![
        text(badge).size(14),
        text(&record.name).size(36),
        text(summary).size(14),
        text(record.notes.clone().unwrap_or_default()),
        care_table(record.care.as_ref()),
    ]
    .spacing(12)
    .width(Length::FillPortion(2));

    let right = column![text("Photo Gallery").size(18), gallery(record)]
        .spacing(12)
        .width(Length::FillPortion(1));

    scrollable(row![left, right].spacing(24))
        .height(Length::Fill)
        .into()
}

/// The photo gallery, falling back to the single placeholder image
fn gallery(record: &TreeRecord) -> Element<'_, Message> {
    let photos: Vec<&str> = if record.photos.is_empty() {
        vec![PLACEHOLDER_PHOTO]
    } else {
        record.photos.iter().map(String::as_str).collect()
    };

    let images: Vec<Element<'_, Message>> = photos
        .into_iter()
        .map(|src| {
            image(image::Handle::from_path(src))
                .width(Length::Fixed(180.0))
                .into()
        })
        .collect();

    Wrap::with_elements(images).spacing(8.0).line_spacing(8.0).into()
}

/// Fixed-row care table; absent values show the placeholder dash
fn care_table(care: Option<&CareSchedule>) -> Element<'static, Message> {
    let rows = [
        ("Watering", care.and_then(|c| c.watering.clone())),
        ("Pruning", care.and_then(|c| c.pruning.clone())),
        ("Wiring", care.and_then(|c| c.wiring.clone())),
        ("Repotting", care.and_then(|c| c.repotting.clone())),
        ("Substrate", care.and_then(|c| c.substrate.clone())),
    ];

    let mut table = column![].spacing(6);
    for (label, value) in rows {
        table = table.push(row![
            text(label).size(14).width(Length::Fixed(110.0)),
            text(value.unwrap_or_else(|| format::PLACEHOLDER.to_string())).size(14),
        ]
        .spacing(12));
    }

    table.into()
}

fn status_page(message: &str) -> Element<'static, Message> {
    container(text(message.to_string()).size(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
