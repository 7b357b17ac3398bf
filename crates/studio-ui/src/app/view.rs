//! View composition: activity bar, side panel, editor pane, status bar.

use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, text, text_editor, text_input,
    Column, Space,
};
use iced::{Background, Border, Element, Font, Length, Padding, Theme};

use studio_core::ActivityView;

use crate::app::{App, Message};
use crate::status_bar::StatusBar;
use crate::theme::{colors, VS_THEME};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let cursor = self.session.cursor();
        let status_bar = StatusBar::new(cursor.line, cursor.col, self.session.is_saving());

        let content = column![
            row![
                self.view_activity_bar(),
                self.view_side_panel(),
                self.view_editor(),
            ]
            .height(Length::Fill),
            status_bar.view(),
        ];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG)),
                ..Default::default()
            })
            .into()
    }

    fn view_activity_bar(&self) -> Element<'_, Message> {
        let active = self.session.activity_view();

        let item = |glyph: &'static str, view: ActivityView| -> Element<'static, Message> {
            let selected = view == active;
            let color = if selected {
                colors::TEXT_BRIGHT
            } else {
                colors::TEXT_MUTED
            };

            button(text(glyph).size(18).color(color))
                .width(Length::Fill)
                .padding(Padding::from([10, 0]))
                .style(move |_: &Theme, status: button::Status| {
                    let bg = match status {
                        button::Status::Hovered => colors::BG_HOVER,
                        _ if selected => colors::BG_HOVER,
                        _ => colors::ACTIVITY_BAR_BG,
                    };
                    button::Style {
                        background: Some(Background::Color(bg)),
                        text_color: color,
                        border: Border::default(),
                        ..Default::default()
                    }
                })
                .on_press(Message::ActivitySelected(view))
                .into()
        };

        let bar = column![
            item("\u{25A4}", ActivityView::Explorer),
            item("\u{2315}", ActivityView::Search),
            item("\u{2699}", ActivityView::Settings),
        ]
        .width(Length::Fixed(44.0));

        container(bar)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::ACTIVITY_BAR_BG)),
                ..Default::default()
            })
            .into()
    }

    fn view_side_panel(&self) -> Element<'_, Message> {
        let (title, body): (&str, Element<'_, Message>) = match self.session.activity_view() {
            ActivityView::Explorer => ("EXPLORER", self.view_explorer()),
            ActivityView::Search => ("SEARCH", self.view_search()),
            ActivityView::Settings => ("SETTINGS", self.view_settings()),
        };

        let header = container(text(title).size(11).color(colors::TEXT_MUTED))
            .padding(Padding::from([10, 12]))
            .width(Length::Fill);

        container(column![header, body])
            .width(Length::Fixed(self.config.ui.sidebar_width))
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::SIDEBAR_BG)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_explorer(&self) -> Element<'_, Message> {
        let items: Vec<Element<'_, Message>> = self
            .session
            .files()
            .iter()
            .map(|file| self.file_item(&file.id, &file.name, file.is_unsaved))
            .collect();

        scrollable(Column::with_children(items).spacing(1).width(Length::Fill))
            .height(Length::Fill)
            .into()
    }

    fn view_search(&self) -> Element<'_, Message> {
        let query = self.search_query.to_lowercase();
        let matches: Vec<Element<'_, Message>> = self
            .session
            .files()
            .iter()
            .filter(|file| query.is_empty() || file.name.to_lowercase().contains(&query))
            .map(|file| self.file_item(&file.id, &file.name, file.is_unsaved))
            .collect();

        let results: Element<'_, Message> = if matches.is_empty() {
            container(text("No matching files").size(12).color(colors::TEXT_MUTED))
                .padding(12)
                .into()
        } else {
            scrollable(Column::with_children(matches).spacing(1).width(Length::Fill))
                .height(Length::Fill)
                .into()
        };

        column![
            container(
                text_input("Search files by name", &self.search_query)
                    .size(13)
                    .on_input(Message::SearchQueryChanged),
            )
            .padding(Padding::from([0, 8])),
            results,
        ]
        .spacing(8)
        .into()
    }

    fn view_settings(&self) -> Element<'_, Message> {
        let setting_row = |name: String, value: String| -> Element<'static, Message> {
            row![
                text(name).size(12).color(colors::TEXT),
                horizontal_space(),
                text(value).size(12).color(colors::TEXT_MUTED).font(Font::MONOSPACE),
            ]
            .padding(Padding::from([3, 12]))
            .into()
        };

        let mut rows: Vec<Element<'_, Message>> = vec![
            setting_row("font_size".to_string(), format!("{}", self.config.ui.font_size)),
            setting_row("tab_size".to_string(), format!("{}", self.config.editor.tab_size)),
            setting_row("word_wrap".to_string(), format!("{}", self.config.editor.word_wrap)),
        ];

        rows.push(
            container(text("THEME").size(11).color(colors::TEXT_MUTED))
                .padding(Padding::from([10, 12]))
                .into(),
        );
        for (role, hex) in VS_THEME.roles() {
            rows.push(setting_row(role.to_string(), hex.to_string()));
        }

        scrollable(Column::with_children(rows).width(Length::Fill))
            .height(Length::Fill)
            .into()
    }

    fn file_item(
        &self,
        id: &studio_core::FileId,
        name: &str,
        is_unsaved: bool,
    ) -> Element<'_, Message> {
        let selected = self.session.active_id() == Some(id);
        let label = if is_unsaved {
            format!("\u{25CF} {name}")
        } else {
            name.to_string()
        };
        let color = if selected {
            colors::TEXT_BRIGHT
        } else {
            colors::TEXT
        };

        button(text(label).size(13).color(color))
            .width(Length::Fill)
            .padding(Padding::from([4, 12]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = match status {
                    button::Status::Hovered => colors::BG_HOVER,
                    _ if selected => colors::BG_HOVER,
                    _ => colors::SIDEBAR_BG,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: color,
                    border: Border::default(),
                    ..Default::default()
                }
            })
            .on_press(Message::FileSelected(id.clone()))
            .into()
    }

    fn view_editor(&self) -> Element<'_, Message> {
        let Some(file) = self.session.active() else {
            return container(
                column![
                    Space::with_height(40),
                    text("No file open").size(13).color(colors::TEXT_MUTED),
                ]
                .align_x(iced::Alignment::Center)
                .width(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
        };

        let header = container(
            row![
                text(&file.name).size(13).color(colors::TEXT_BRIGHT),
                horizontal_space(),
                text(file.language.label()).size(11).color(colors::TEXT_MUTED),
            ]
            .align_y(iced::Alignment::Center),
        )
        .padding(Padding::from([6, 12]))
        .width(Length::Fill)
        .style(|_| container::Style {
            background: Some(Background::Color(colors::SIDEBAR_BG)),
            ..Default::default()
        });

        let editor = text_editor(&self.editor_content)
            .font(Font::MONOSPACE)
            .size(self.config.ui.font_size)
            .height(Length::Fill)
            .padding(12)
            .on_action(Message::EditorAction)
            .style(|_, _status| text_editor::Style {
                background: Background::Color(colors::BG),
                border: Border::default(),
                icon: colors::TEXT,
                placeholder: colors::TEXT_MUTED,
                value: colors::TEXT,
                selection: colors::SELECTION,
            });

        column![header, editor]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
