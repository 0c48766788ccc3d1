//! Russian messages (ru-RU)

use std::borrow::Cow;

use super::keys::MessageTable;

pub static MESSAGES: MessageTable = MessageTable {
    login_required: Cow::Borrowed("Логин обязателен для заполнения"),
    login_too_long: Cow::Borrowed("Логин не должен превышать {max} символов"),
    password_required: Cow::Borrowed("Пароль обязателен для локальной учетной записи"),
    password_too_long: Cow::Borrowed("Пароль не должен превышать {max} символов"),
    label_too_long: Cow::Borrowed("Метка не должна превышать {max} символов"),
};
