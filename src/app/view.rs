use super::messages::Message;
use super::state::{App, MAX_VOLUME, MIN_VOLUME, TRANSCRIPT_SCROLL_ID};
use crate::config::ThemeMode;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{Column, button, column, container, row, scrollable, slider, text};
use iced::{Element, Length};
use std::path::Path;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let theme_label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };

        let header = row![
            text(self.config.title.as_str()).size(self.config.font_size as f32 + 6.0),
            iced::widget::horizontal_space(),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let play_label = if self.playing { "Pause" } else { "Play" };
        let marker = if self.playing {
            "now playing"
        } else {
            "paused"
        };

        let transport = row![
            button(play_label).on_press(Message::TogglePlayPause),
            text(self.elapsed_label()),
            slider(0.0..=100.0, self.progress_value(), Message::Scrubbed)
                .step(0.1)
                .width(Length::Fill),
            text(self.duration_label()),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let volume_controls = row![
            text(format!("Volume: {:.0}%", self.volume * 100.0)),
            slider(MIN_VOLUME..=MAX_VOLUME, self.volume, Message::SetVolume)
                .step(0.01)
                .width(Length::Fill),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let highlight = self.highlight_color();
        let spans: Vec<iced::widget::text::Span<'_, Message>> = self
            .transcript
            .segments()
            .iter()
            .map(|segment| {
                let mut span: iced::widget::text::Span<'_, Message> =
                    iced::widget::text::Span::new(format!("{} ", segment.text))
                        .size(self.config.font_size as f32)
                        .line_height(LineHeight::Relative(1.6))
                        .link(Message::SegmentClicked(segment.index));

                if Some(segment.index) == self.active_segment {
                    span = span
                        .background(iced::Background::Color(highlight))
                        .padding(iced::Padding::from(2u16));
                }

                span
            })
            .collect();

        let rich: iced::widget::text::Rich<'_, Message> =
            iced::widget::text::Rich::with_spans(spans);
        let transcript_view = scrollable(
            container(
                rich.width(Length::Fill)
                    .wrapping(Wrapping::WordOrGlyph)
                    .align_x(Horizontal::Left),
            )
            .width(Length::Fill)
            .padding([8, 12]),
        )
        .id(TRANSCRIPT_SCROLL_ID.clone())
        .height(Length::FillPortion(1));

        let mut content: Column<'_, Message> = column![header];

        if let Some(artwork) = self
            .config
            .artwork_path
            .as_deref()
            .filter(|p| Path::new(p).exists())
        {
            content = content.push(
                container(iced::widget::image(artwork).width(Length::Fill))
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            );
        }

        content = content
            .push(text(marker))
            .push(transport)
            .push(volume_controls)
            .push(transcript_view);

        content.padding(16).spacing(12).into()
    }
}
