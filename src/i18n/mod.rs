//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Short language tag stored in the config file
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh",
        }
    }

    /// Parse a language tag such as `en`, `zh-CN` or `zh_Hans`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::EnUS),
            "zh" => Some(Locale::ZhCN),
            _ => None,
        }
    }

    /// Locale of the current user session, English when unsupported
    pub fn system() -> Self {
        let current = locale_config::Locale::user_default().to_string();
        current
            .split(',')
            .find_map(|tag| Self::from_tag(tag.rsplit('=').next().unwrap_or_default()))
            .unwrap_or_default()
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Component Registry", "组件注册表"));
    map.insert("app-components", ("components", "个组件"));
    map.insert("app-source", ("Source", "来源"));

    // Registry page
    map.insert(
        "registry-subtitle",
        (
            "Discover and use beautiful, reusable components",
            "发现并使用美观、可复用的组件",
        ),
    );
    map.insert("registry-loading", ("Loading components...", "正在加载组件..."));
    map.insert("registry-error", ("Error", "错误"));
    map.insert("registry-empty", ("No components could be loaded", "没有可加载的组件"));

    // Log panel
    map.insert("log-title", ("Diagnostics", "诊断日志"));
    map.insert("log-clear", ("Clear", "清除"));
    map.insert("log-empty", ("No diagnostics yet", "暂无日志"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
