// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::slider::SegmentSlider;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, checkbox, container, Column, Row, Text};
use iced::{alignment::Vertical, Border, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub slider: &'a SegmentSlider<String>,
    pub colors: &'a ColorScheme,
    pub animated: bool,
    pub notice: Option<&'a str>,
}

/// Text describing the current selection.
#[must_use]
pub fn selection_summary(slider: &SegmentSlider<String>) -> String {
    match (slider.selected_item_index(), slider.current_value()) {
        (Some(index), Some(value)) => {
            let label = slider.label_at(index).unwrap_or_default();
            if label.is_empty() {
                format!("Value: {value}")
            } else {
                format!("Value: {value} ({label})")
            }
        }
        _ => "No values configured".to_string(),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let style = ctx.slider.style();
    let card_background = ctx.colors.card_background;

    let slider_card = container(ctx.slider.view(Message::SliderChanged))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(card_background.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let summary = Text::new(selection_summary(ctx.slider)).size(typography::BODY);

    let has_values = !ctx.slider.is_empty();
    let step_buttons = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            button(Text::new("Previous"))
                .on_press_maybe(has_values.then_some(Message::Step(-1)))
                .padding([6, 12]),
        )
        .push(
            button(Text::new("Next"))
                .on_press_maybe(has_values.then_some(Message::Step(1)))
                .padding([6, 12]),
        )
        .push(
            button(Text::new("Save settings"))
                .on_press(Message::SaveSettings)
                .padding([6, 12]),
        );

    let mut options = Column::new()
        .spacing(spacing::XS)
        .push(
            checkbox(ctx.animated)
                .label("Animate selection")
                .on_toggle(Message::SetAnimated),
        )
        .push(
            checkbox(style.use_circles)
                .label("Circular stops")
                .on_toggle(Message::SetUseCircles),
        );

    if let Some(labels) = style.labels {
        options = options
            .push(
                checkbox(labels.hide_inner_labels)
                    .label("Only show selected label")
                    .on_toggle(Message::SetHideInnerLabels),
            )
            .push(
                checkbox(labels.frame_labels_to_slider)
                    .label("Keep labels inside the track")
                    .on_toggle(Message::SetFrameLabelsToSlider),
            );
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(Text::new("Segmented slider").size(typography::TITLE_MD))
        .push(slider_card)
        .push(summary)
        .push(step_buttons)
        .push(options);

    if let Some(notice) = ctx.notice {
        content = content.push(Text::new(notice).size(typography::CAPTION));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
