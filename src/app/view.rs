// SPDX-License-Identifier: MPL-2.0
//! View rendering for the root component.

use super::{App, Message};
use fluent_bundle::FluentArgs;
use iced::widget::{button, column, row, text, Container};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let localizer = app.localizer();

    let navigation = row![
        text(localizer.tr("navigation.home")),
        text(localizer.tr("navigation.settings")),
        text(localizer.tr("navigation.about")),
    ]
    .spacing(16);

    let mut content = column![
        navigation,
        text(localizer.tr("app-title")).size(32),
        text(localizer.tr("app-greeting")),
        button(text(app.details_label())).on_press(Message::ToggleDetails),
    ]
    .spacing(16);

    if app.show_details() {
        content = content
            .push(text(app.status_line()))
            .push(text(registered_line(app)));
    }

    if let Some(notice) = app.notice() {
        content = content.push(
            row![
                text(localizer.tr(notice)),
                button(text("×")).on_press(Message::DismissNotice),
            ]
            .spacing(8),
        );
    }

    content = content.push(text(localizer.tr("app-footer")).size(12));

    Container::new(content)
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn registered_line(app: &App) -> String {
    let mut args = FluentArgs::new();
    args.set("count", app.localizer().registered_locales().len());
    app.localizer().tr_with_args("app-registered-locales", &args)
}
