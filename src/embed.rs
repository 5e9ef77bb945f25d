use url::Url;

use crate::calendar::Calendar;
use crate::i18n::Registry;

/// Path of the sandboxed calendar view served alongside the host page.
pub const EMBED_SRC: &str = "/assets/_calendar/index.html";

/// Configuration handed to the sandboxed view, serialized as one JSON
/// attribute. A pure projection of the fetched calendar list and the
/// user's locale, rebuilt on every render.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedConfig {
    pub global_account_settings: GlobalAccountSettings,
    pub user_lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalAccountSettings {
    pub calendar_list: Vec<CalendarEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub href: Url,
    pub href_label: String,
    pub settings_account: bool,
    pub with_credentials: bool,
}

impl EmbedConfig {
    pub fn project(calendars: &[Calendar], i18n: &Registry) -> Self {
        // The label for shared calendars pluralizes on the length of the
        // whole fetched list, not on the shared count alone.
        let shared_label = if calendars.len() > 1 {
            i18n.t("Shared spaces")
        } else {
            i18n.t("Shared space")
        };

        let calendar_list = calendars
            .iter()
            .map(|calendar| CalendarEntry {
                href: calendar.calendar_url.clone(),
                href_label: if calendar.is_private() {
                    i18n.t("User")
                } else {
                    shared_label.clone()
                },
                settings_account: calendar.is_private(),
                with_credentials: calendar.with_credentials,
            })
            .collect();

        Self {
            global_account_settings: GlobalAccountSettings { calendar_list },
            user_lang: i18n.language().to_string(),
        }
    }
}

/// The sandboxed view element: a fixed source and the serialized embed
/// configuration as an opaque payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedView {
    pub src: &'static str,
    pub data_config: String,
}
