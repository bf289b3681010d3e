/// One view function per screen
///
/// Every function here is a pure projection of the registry and the
/// current screen frame into widgets. State changes happen only in
/// `VetClinic::update` through the emitted messages.
use std::path::PathBuf;

use iced::widget::{
    button, canvas, center, column, container, horizontal_rule, image, mouse_area, opaque,
    pick_list, progress_bar, row, scrollable, stack, text, text_editor, text_input, Column,
};
use iced::{Alignment, Border, Color, Element, Length};

use super::chart::WeightChart;
use crate::about;
use crate::state::data::{AnimalId, ClinicRecord};
use crate::state::forms::{Credentials, DraftField, SubmissionDraft};
use crate::state::navigation::{ClinicDirectory, Screen, Selection, Service};
use crate::state::registry::Registry;
use crate::state::statistics::{weight_bars, Statistics};
use crate::Message;

/// Directory holding photo assets, looked up by image reference
const ASSET_DIR: &str = "assets";

/// Build the body for the current screen
pub fn view<'a>(
    registry: &'a Registry,
    screen: &'a Screen,
    story: &'a text_editor::Content,
) -> Element<'a, Message> {
    match screen {
        Screen::Login(credentials) => login(credentials),
        Screen::ServiceMenu => service_menu(),
        Screen::AnimalRegistry => animal_registry(registry),
        Screen::AnimalDetail(id) => animal_detail(registry, *id),
        Screen::AddAnimal(draft) => add_animal(draft, story),
        Screen::Completed => completed(),
        Screen::Clinics(directory) => clinics(registry, directory),
        Screen::About => about_page(),
        Screen::Statistics => statistics(&Statistics::SHELTER),
    }
}

/// Navigation bar: back button (when there is somewhere to go) and title
pub fn header<'a>(title: &'a str, can_go_back: bool) -> Element<'a, Message> {
    let mut bar = row![].spacing(10).padding(10).align_y(Alignment::Center);

    if can_go_back {
        bar = bar.push(
            button("‹ Назад")
                .on_press(Message::Back)
                .style(button::text),
        );
    }

    bar.push(text(title).size(22)).into()
}

fn login(credentials: &Credentials) -> Element<'_, Message> {
    let form = column![
        text("Вход в Личный Кабинет").size(32),
        text_input("Логин", &credentials.username)
            .on_input(Message::UsernameChanged)
            .padding(10),
        text_input("Пароль", &credentials.password)
            .on_input(Message::PasswordChanged)
            .on_submit(Message::Login)
            .secure(true)
            .padding(10),
        button("Войти")
            .on_press(Message::Login)
            .style(button::primary)
            .padding(12)
            .width(Length::Fill),
    ]
    .spacing(30)
    .max_width(350)
    .align_x(Alignment::Center);

    container(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn service_menu<'a>() -> Element<'a, Message> {
    let menu = Service::ALL.iter().fold(
        column![text("Выберите услугу").size(28)]
            .spacing(20)
            .align_x(Alignment::Center),
        |menu, &service| {
            menu.push(
                button(text(service.title()))
                    .on_press(Message::OpenService(service))
                    .style(button::success)
                    .padding(14)
                    .width(Length::Fill),
            )
        },
    );

    container(menu).padding(20).width(Length::Fill).into()
}

fn animal_registry(registry: &Registry) -> Element<'_, Message> {
    let rows = registry.animals().iter().map(|animal| {
        button(
            row![
                photo(&animal.image_ref, &animal.name, 50.0),
                column![
                    text(&animal.name).size(18),
                    text(animal.summary()).size(14).style(text::secondary),
                ]
                .spacing(4),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
        .on_press(Message::OpenAnimal(animal.id))
        .style(button::text)
        .width(Length::Fill)
        .into()
    });

    scrollable(Column::with_children(rows).spacing(8).padding(16)).into()
}

fn animal_detail(registry: &Registry, id: AnimalId) -> Element<'_, Message> {
    let animal = match registry.animal(id) {
        Ok(animal) => animal,
        Err(err) => return missing(err.to_string()),
    };

    let content = column![
        photo(&animal.image_ref, &animal.name, 200.0),
        text("Информация о питомце").size(28),
        text(format!("Имя: {}", animal.name)).size(18),
        text(format!("Вес: {}", animal.weight)),
        text(format!("Размер: {}", animal.size)),
        horizontal_rule(1),
        text("История:").size(18),
        text(&animal.story),
        horizontal_rule(1),
        text("Происхождение:").size(18),
        text(&animal.origin),
    ]
    .spacing(20)
    .padding(20)
    .align_x(Alignment::Center);

    scrollable(content).into()
}

fn add_animal<'a>(
    draft: &'a SubmissionDraft,
    story: &'a text_editor::Content,
) -> Element<'a, Message> {
    let field = move |kind: DraftField| {
        text_input(kind.label(), draft.get(kind))
            .on_input(move |value| Message::DraftChanged(kind, value))
            .padding(10)
    };

    let content = column![
        text("Добавить нового питомца").size(28),
        photo("placeholder_dog", "?", 200.0),
        field(DraftField::Name),
        field(DraftField::Weight),
        field(DraftField::Size),
        column![
            text(DraftField::Story.label()).size(18),
            text_editor(story)
                .on_action(Message::StoryEdited)
                .height(100),
        ]
        .spacing(5),
        button("Отправить")
            .on_press(Message::SubmitDraft)
            .style(button::success)
            .padding(12)
            .width(Length::Fill),
    ]
    .spacing(20)
    .padding(20)
    .align_x(Alignment::Center);

    scrollable(content).into()
}

fn completed<'a>() -> Element<'a, Message> {
    let content = column![
        text("✔").size(100).style(text::success),
        text("Выполнено!").size(28),
        button("Вернуться к услугам")
            .on_press(Message::ReturnToServices)
            .style(button::primary)
            .padding(12)
            .width(Length::Fill),
    ]
    .spacing(20)
    .padding(20)
    .align_x(Alignment::Center);

    container(content).width(Length::Fill).into()
}

fn clinics<'a>(registry: &'a Registry, directory: &ClinicDirectory) -> Element<'a, Message> {
    let listing = directory.listing(registry);

    let list: Element<'a, Message> = if listing.is_empty() {
        text("В этом городе клиник пока нет")
            .style(text::secondary)
            .into()
    } else {
        let rows = listing.into_iter().map(|clinic| {
            button(
                row![
                    column![
                        text(&clinic.name).size(18),
                        text(&clinic.address).size(14).style(text::secondary),
                    ]
                    .spacing(4)
                    .width(Length::Fill),
                    text("→"),
                ]
                .align_y(Alignment::Center),
            )
            .on_press(Message::OpenClinic(clinic.id))
            .style(button::secondary)
            .padding(12)
            .width(Length::Fill)
            .into()
        });
        Column::with_children(rows).spacing(8).into()
    };

    let base = column![
        text("Ближайшие клиники").size(28),
        column![
            text("Выберите город:").size(18),
            pick_list(
                registry.cities(),
                Some(directory.city),
                Message::CitySelected
            )
            .width(Length::Fill),
        ]
        .spacing(8),
        scrollable(list),
    ]
    .spacing(20)
    .padding(20);

    match directory.detail {
        Selection::Nothing => base.into(),
        Selection::Selected(id) => match registry.clinic(id) {
            Ok(clinic) => modal(base, clinic_detail(clinic), Message::DismissClinic),
            Err(err) => modal(base, missing(err.to_string()), Message::DismissClinic),
        },
    }
}

fn clinic_detail(clinic: &ClinicRecord) -> Element<'_, Message> {
    let services = clinic.services.iter().fold(column![].spacing(8), |list, service| {
        list.push(row![text("✔").style(text::success), text(service)].spacing(10))
    });

    let content = column![
        text(&clinic.name).size(26),
        text(format!("Адрес: {}", clinic.address)).size(14),
        horizontal_rule(1),
        text("Доступные услуги:").size(18),
        services,
        button("Закрыть")
            .on_press(Message::DismissClinic)
            .style(button::secondary),
    ]
    .spacing(20);

    container(content)
        .width(360)
        .padding(20)
        .style(container::rounded_box)
        .into()
}

fn about_page<'a>() -> Element<'a, Message> {
    let developers = about::DEVELOPERS.iter().fold(
        column![text("Разработчики").size(18)].spacing(20),
        |list, developer| {
            list.push(
                container(
                    row![
                        photo(developer.image_ref, developer.name, 80.0),
                        column![
                            text(developer.name).size(18),
                            text(developer.role).size(14).style(text::secondary),
                        ]
                        .spacing(5),
                    ]
                    .spacing(20)
                    .align_y(Alignment::Center),
                )
                .padding(12)
                .width(Length::Fill)
                .style(container::rounded_box),
            )
        },
    );

    let links = about::LINKS.iter().fold(
        column![text("Полезные ссылки").size(18)].spacing(10),
        |list, (label, url)| {
            list.push(column![text(*label).style(text::primary), text(*url).size(12)].spacing(2))
        },
    );

    let content = column![
        text("О приложении").size(28).style(text::primary),
        text(about::DESCRIPTION),
        text(format!("Версия: {}", about::VERSION))
            .size(14)
            .style(text::secondary),
        horizontal_rule(1),
        developers,
        horizontal_rule(1),
        links,
    ]
    .spacing(20)
    .padding(20);

    scrollable(content).into()
}

fn statistics<'a>(stats: &Statistics) -> Element<'a, Message> {
    let overview = column![
        text("Общая информация").size(18),
        row![
            stat_card("Всего животных", stats.total.to_string(), Color::from_rgb(0.2, 0.7, 0.3)),
            stat_card(
                "Средний вес",
                format!("{} кг", stats.average_weight_kg),
                Color::from_rgb(0.2, 0.45, 0.9)
            ),
        ]
        .spacing(10),
        row![
            stat_card("Крупные", stats.large.to_string(), Color::from_rgb(0.95, 0.6, 0.1)),
            stat_card("Мелкие", stats.small.to_string(), Color::from_rgb(0.6, 0.3, 0.8)),
        ]
        .spacing(10),
    ]
    .spacing(10);

    let vaccination = column![
        text("Вакцинация").size(18),
        text(format!("Вакцинировано: {}/{}", stats.vaccinated, stats.total)),
        progress_bar(0.0..=1.0, stats.vaccinated_share())
            .height(8)
            .style(progress_bar::success),
        text(format!("Не вакцинировано: {}/{}", stats.unvaccinated, stats.total)),
        progress_bar(0.0..=1.0, stats.unvaccinated_share())
            .height(8)
            .style(progress_bar::danger),
    ]
    .spacing(10);

    let chart = column![
        text("Распределение по весу").size(18),
        canvas(WeightChart::new(weight_bars()))
            .width(Length::Fill)
            .height(200),
    ]
    .spacing(10);

    let content = column![
        text("Статистика").size(28).style(text::primary),
        overview,
        horizontal_rule(1),
        vaccination,
        horizontal_rule(1),
        chart,
    ]
    .spacing(20)
    .padding(20);

    scrollable(content).into()
}

fn stat_card<'a>(title: &'a str, value: String, color: Color) -> Element<'a, Message> {
    container(
        column![
            text(value).size(28).color(Color::WHITE),
            text(title).size(14).color(Color::WHITE),
        ]
        .align_x(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(move |_theme| container::Style {
        background: Some(color.into()),
        border: Border {
            radius: 10.0_f32.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

/// Photo for an image reference, drawn over a lettered placeholder.
/// A missing asset leaves only the placeholder visible.
fn photo<'a>(image_ref: &str, name: &str, size: f32) -> Element<'a, Message> {
    let initial: String = name.chars().take(1).collect();

    let placeholder = container(text(initial).size(size * 0.4))
        .center_x(size)
        .center_y(size)
        .style(container::rounded_box);

    stack![
        placeholder,
        image(asset_path(image_ref)).width(size).height(size),
    ]
    .into()
}

fn asset_path(image_ref: &str) -> PathBuf {
    PathBuf::from(ASSET_DIR).join(format!("{image_ref}.png"))
}

fn missing<'a>(reason: String) -> Element<'a, Message> {
    container(text(reason).style(text::danger))
        .padding(20)
        .into()
}

/// Overlay `content` on top of `base`; clicking the backdrop emits `on_blur`
fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.8,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_path() {
        assert_eq!(asset_path("bobik"), PathBuf::from("assets").join("bobik.png"));
    }
}
