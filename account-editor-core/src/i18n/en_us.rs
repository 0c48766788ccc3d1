//! English messages (en-US)

use std::borrow::Cow;

use super::keys::MessageTable;

pub static MESSAGES: MessageTable = MessageTable {
    login_required: Cow::Borrowed("login required"),
    login_too_long: Cow::Borrowed("login too long"),
    password_required: Cow::Borrowed("password required for local account"),
    password_too_long: Cow::Borrowed("password too long"),
    label_too_long: Cow::Borrowed("label too long"),
};
