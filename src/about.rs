/// Static content of the "about" page

pub const DESCRIPTION: &str = "Приложение помогает учитывать домашних животных и их потребности, \
предоставляя функционал для работы с данными животных, ближайшими клиниками и аналитикой.";

pub const VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy)]
pub struct Developer {
    pub name: &'static str,
    pub role: &'static str,
    /// Opaque key of the portrait asset
    pub image_ref: &'static str,
}

pub const DEVELOPERS: [Developer; 2] = [
    Developer {
        name: "Илья Рычков",
        role: "iOS-разработчик",
        image_ref: "senior-developer",
    },
    Developer {
        name: "Дарья Ефремова",
        role: "UI/UX-дизайнер",
        image_ref: "junior-developer",
    },
];

/// (label, url) pairs shown as plain text
pub const LINKS: [(&str, &str); 2] = [
    ("Официальный сайт разработчика", "https://vk.com/what6ver"),
    ("Руководство пользователя", "https://example.com/manual"),
];
