#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder` and the edit/submit flow.

use std::sync::Arc;

use account_editor_app::config::AppConfig;
use account_editor_app::AppStateBuilder;
use account_editor_core::traits::{AccountRepository, InMemoryAccountRepository};
use account_editor_core::types::{AccountFormData, AccountType, LabelTag, ValidationLimits};

fn config_in(tmp: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        storage_path: Some(tmp.path().join("accounts.json")),
        ..AppConfig::default()
    }
}

#[test]
fn build_with_defaults_starts_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppStateBuilder::new().config(config_in(&tmp)).build().unwrap();
    assert!(state.store().is_empty());
    assert!(state.validator().errors().is_empty());
}

#[test]
fn valid_form_is_committed() {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let mut state = AppStateBuilder::new()
        .account_repository(repo.clone())
        .build()
        .unwrap();

    let id = state.store_mut().add_account();
    let mut form = state.edit_form(&id).unwrap();
    form.label_text = "a; b".to_string();
    form.login = "x".to_string();
    form.password = "ignored".to_string();

    assert!(state.submit_form(&form));

    let account = state.store().get_account(&id).unwrap();
    assert_eq!(account.label, vec![LabelTag::new("a"), LabelTag::new("b")]);
    assert_eq!(account.account_type, AccountType::Ldap);
    assert_eq!(account.login, "x");
    assert_eq!(account.password, None);
    assert_eq!(repo.load_all().unwrap().len(), 1);
}

#[test]
fn invalid_form_is_not_committed() {
    let mut state = AppStateBuilder::new()
        .account_repository(Arc::new(InMemoryAccountRepository::new()))
        .build()
        .unwrap();

    let id = state.store_mut().add_account();
    let form = AccountFormData {
        id: id.clone(),
        label_text: String::new(),
        account_type: AccountType::Local,
        login: String::new(),
        password: String::new(),
    };

    assert!(!state.submit_form(&form));
    assert!(state.validator().errors().login.is_some());
    assert!(state.validator().errors().password.is_some());
    assert_eq!(
        state.store().get_account(&id).unwrap().account_type,
        AccountType::Ldap
    );

    // New edit session starts clean
    assert!(state.edit_form(&id).is_some());
    assert!(state.validator().errors().is_empty());
}

#[test]
fn configured_language_and_limits_reach_validator() {
    let config = AppConfig {
        language: "ru-RU".to_string(),
        limits: ValidationLimits {
            login_max_length: 5,
            ..ValidationLimits::default()
        },
        ..AppConfig::default()
    };
    let mut state = AppStateBuilder::new()
        .config(config)
        .account_repository(Arc::new(InMemoryAccountRepository::new()))
        .build()
        .unwrap();
    assert_eq!(state.validator().limits().login_max_length, 5);

    let id = state.store_mut().add_account();
    let mut form = state.edit_form(&id).unwrap();
    form.login = "too-long".to_string();

    assert!(!state.submit_form(&form));
    assert_eq!(
        state.validator().errors().login.as_deref(),
        Some("Логин не должен превышать 5 символов")
    );
}

#[test]
fn accounts_survive_restart() {
    let tmp = tempfile::tempdir().unwrap();

    let mut state = AppStateBuilder::new().config(config_in(&tmp)).build().unwrap();
    let id = state.store_mut().add_account();
    let form = AccountFormData {
        id: id.clone(),
        label_text: "ops;  db ".to_string(),
        account_type: AccountType::Local,
        login: "root".to_string(),
        password: "pw".to_string(),
    };
    assert!(state.submit_form(&form));
    state.shutdown().unwrap();

    let restored = AppStateBuilder::new().config(config_in(&tmp)).build().unwrap();
    let form = restored.store().get_account_form_data(&id).unwrap();
    assert_eq!(form.label_text, "ops; db");
    assert_eq!(form.account_type, AccountType::Local);
    assert_eq!(form.password, "pw");
}

#[test]
fn corrupt_storage_fails_build() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(&tmp);
    std::fs::write(config.storage_path(), "garbage").unwrap();

    assert!(AppStateBuilder::new().config(config).build().is_err());
}
