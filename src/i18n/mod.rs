//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Japanese
    #[default]
    #[serde(rename = "ja-JP")]
    JaJP,
    /// English (US)
    #[serde(rename = "en-US")]
    EnUS,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::JaJP => "日本語",
            Locale::EnUS => "English",
        }
    }

    /// The other supported locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::JaJP => Locale::EnUS,
            Locale::EnUS => Locale::JaJP,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (ja, en))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("フォームサンプル", "Form Showcase"));

    // Form fields
    map.insert("form-username", ("ユーザーネーム", "Username"));
    map.insert(
        "form-username-description",
        (
            "ユーザーネームは2文字以上で入力してください。",
            "Enter a username of at least 2 characters.",
        ),
    );
    map.insert("form-email", ("メールアドレス", "Email"));
    map.insert(
        "form-email-description",
        (
            "メールアドレスの形式で入力してください。",
            "Enter a valid email address.",
        ),
    );
    map.insert("form-password", ("パスワード", "Password"));
    map.insert(
        "form-password-description",
        (
            "パスワードは8文字以上で入力してください。",
            "Enter a password of at least 8 characters.",
        ),
    );
    map.insert("form-hobbies", ("趣味", "Hobbies"));
    map.insert(
        "form-hobbies-description",
        (
            "あなたの趣味を入力してください（複数可）",
            "Enter your hobbies (you can add more than one)",
        ),
    );
    map.insert("form-hobby-placeholder", ("趣味を入力", "Enter a hobby"));

    // Placeholders
    map.insert("form-username-placeholder", ("ユーザーネーム", "Username"));
    map.insert("form-email-placeholder", ("メールアドレス", "Email address"));
    map.insert("form-password-placeholder", ("パスワード", "Password"));

    // Actions
    map.insert("action-add-hobby", ("趣味を追加", "Add hobby"));
    map.insert("action-remove", ("削除", "Remove"));
    map.insert("action-submit", ("送信", "Submit"));
    map.insert("action-submitting", ("送信中...", "Submitting..."));

    // Validation messages
    map.insert(
        "error-username-min",
        (
            "ユーザーネームは少なくとも2文字にしてください。",
            "Username must be at least 2 characters.",
        ),
    );
    map.insert(
        "error-email-format",
        (
            "メールアドレスの形式が正しくありません。",
            "The email address format is invalid.",
        ),
    );
    map.insert(
        "error-password-min",
        (
            "パスワードは少なくとも8文字にしてください。",
            "Password must be at least 8 characters.",
        ),
    );
    map.insert("error-hobby-required", ("趣味を入力してください。", "Please enter a hobby."));

    // Submission results
    map.insert("submit-succeeded", ("送信しました。", "Submitted."));
    map.insert("submit-failed", ("送信に失敗しました。", "Submission failed."));

    // Log panel
    map.insert("log-title", ("ログ", "Logs"));
    map.insert("log-clear", ("クリア", "Clear"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(ja, en)) = translations().get(key) {
        match locale {
            Locale::JaJP => SharedString::from(ja),
            Locale::EnUS => SharedString::from(en),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
