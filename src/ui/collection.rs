/// Collection grid screen
///
/// Search field, species/style selectors and the flowing grid of
/// record cards. The filtered subsequence is recomputed here on every
/// view pass, so each keystroke or selector change re-renders
/// synchronously with no debouncing.

use iced::widget::{button, column, container, image, pick_list, row, scrollable, text, text_input};
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::catalogue::data::TreeRecord;
use crate::{format, CollectionState, Message, PLACEHOLDER_PHOTO, SITE_NAME};

/// Sentinel option that clears the species selector
pub const ALL_SPECIES: &str = "All species";

/// Sentinel option that clears the style selector
pub const ALL_STYLES: &str = "All styles";

pub fn view(state: &CollectionState) -> Element<'_, Message> {
    match state {
        CollectionState::Loading => status_page("Loading catalogue…"),
        CollectionState::Failed => status_page("Could not load catalogue."),
        CollectionState::Ready {
            catalogue,
            species_options,
            style_options,
            filter,
        } => {
            let controls = row![
                text_input("Search name, species, style, notes…", &filter.query)
                    .on_input(Message::QueryChanged)
                    .padding(8)
                    .width(Length::Fixed(320.0)),
                pick_list(
                    with_all(ALL_SPECIES, species_options),
                    Some(selected(ALL_SPECIES, &filter.species)),
                    Message::SpeciesPicked,
                )
                .padding(8),
                pick_list(
                    with_all(ALL_STYLES, style_options),
                    Some(selected(ALL_STYLES, &filter.style)),
                    Message::StylePicked,
                )
                .padding(8),
            ]
            .spacing(12);

            let cards: Vec<Element<'_, Message>> = filter
                .apply(catalogue)
                .into_iter()
                .map(grid_item)
                .collect();

            let grid = Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0);

            column![
                text(SITE_NAME).size(32),
                controls,
                scrollable(container(grid).width(Length::Fill).padding(4))
                    .height(Length::Fill),
            ]
            .spacing(16)
            .padding(24)
            .into()
        }
    }
}

/// One clickable card in the grid
fn grid_item(record: &TreeRecord) -> Element<'_, Message> {
    let photo = record
        .photos
        .first()
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER_PHOTO);

    let caption = format!("{} • {}", record.species, record.style);
    let summary = format!(
        "Age: {} | Height: {}",
        format::years(record.age_years),
        format::cm(record.height_cm)
    );

    let card = column![
        image(image::Handle::from_path(photo))
            .width(Length::Fixed(220.0))
            .height(Length::Fixed(160.0)),
        text(caption).size(13),
        text(&record.name).size(18),
        text(summary).size(13),
    ]
    .spacing(4)
    .width(Length::Fixed(220.0));

    button(card)
        .on_press(Message::OpenDetail(record.id.clone()))
        .padding(8)
        .into()
}

/// Selector options with the "all" sentinel prepended
fn with_all(all: &str, options: &[String]) -> Vec<String> {
    let mut full = Vec::with_capacity(options.len() + 1);
    full.push(all.to_string());
    full.extend(options.iter().cloned());
    full
}

/// The selector's displayed choice for the current filter state
fn selected(all: &str, choice: &Option<String>) -> String {
    choice.clone().unwrap_or_else(|| all.to_string())
}

fn status_page(message: &str) -> Element<'static, Message> {
    container(text(message.to_string()).size(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_prepended_to_sorted_options() {
        let options = vec!["Juniper".to_string(), "Pine".to_string()];

        assert_eq!(
            with_all(ALL_SPECIES, &options),
            ["All species", "Juniper", "Pine"]
        );
    }

    #[test]
    fn test_cleared_selector_displays_the_sentinel() {
        assert_eq!(selected(ALL_STYLES, &None), "All styles");
        assert_eq!(
            selected(ALL_STYLES, &Some("Cascade".to_string())),
            "Cascade"
        );
    }
}
