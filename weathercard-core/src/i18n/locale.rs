//! System locale detection.

use std::env;

/// Environment variables consulted, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LANG", "LC_MESSAGES"];

/// Two-letter language code of the current user, `"en"` if unknown.
pub fn detect_locale() -> String {
    detect_from_env(|key| env::var(key).ok()).unwrap_or_else(platform_locale)
}

/// First usable language code among the locale variables.
pub fn detect_from_env<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find_map(|value| extract_lang_code(&value))
}

/// `"de_DE.UTF-8"` → `"de"`. `C`, `POSIX` and blanks yield nothing.
pub fn extract_lang_code(locale: &str) -> Option<String> {
    let locale = locale.trim();
    if locale.is_empty() || locale == "C" || locale == "POSIX" {
        return None;
    }

    let lang = locale.split(['.', '_', '-', '@']).next().unwrap_or(locale);
    let code: String = lang.chars().take(2).collect();
    if code.chars().count() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_ascii_lowercase())
    } else {
        None
    }
}

#[cfg(target_os = "macos")]
fn platform_locale() -> String {
    use std::process::Command;

    let output = Command::new("defaults")
        .args(["read", "NSGlobalDomain", "AppleLanguages"])
        .output();

    match output {
        Ok(out) if out.status.success() => {
            parse_apple_languages(&String::from_utf8_lossy(&out.stdout)).unwrap_or_else(|| "en".to_string())
        }
        _ => "en".to_string(),
    }
}

#[cfg(not(target_os = "macos"))]
fn platform_locale() -> String {
    "en".to_string()
}

/// First entry of the `defaults read ... AppleLanguages` plist output:
///
/// ```text
/// (
///     "de-DE",
///     "en-US"
/// )
/// ```
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn parse_apple_languages(output: &str) -> Option<String> {
    output
        .lines()
        .map(|line| line.trim().trim_matches(|c: char| matches!(c, '"' | ',' | '(' | ')')).trim())
        .find(|line| line.len() >= 2)
        .and_then(extract_lang_code)
}
