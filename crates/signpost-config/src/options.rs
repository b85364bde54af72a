//! Configuration object handed to the site builder.

use serde::Serialize;
use signpost_nav::ValidatedNavigationTree;

use crate::Config;

/// Validated site options in the site builder's shape.
///
/// Keys are camelCase. Optional options are omitted when unset or empty, so
/// the site builder falls back to its own defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteOptions {
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social: Vec<SocialOption>,
    pub sidebar: ValidatedNavigationTree,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_css: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub integrations: Vec<String>,
}

/// Social link entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialOption {
    pub icon: String,
    pub label: String,
    pub href: String,
}

/// Logo entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogoOption {
    pub src: String,
}

impl SiteOptions {
    pub(crate) fn new(config: &Config, sidebar: ValidatedNavigationTree) -> Self {
        Self {
            title: config.title.clone(),
            social: config
                .social
                .iter()
                .map(|link| SocialOption {
                    icon: link.icon.clone(),
                    label: link.label.clone(),
                    href: link.href.clone(),
                })
                .collect(),
            sidebar,
            custom_css: config.custom_css.clone(),
            favicon: config.favicon.clone(),
            logo: config.logo.as_ref().map(|logo| LogoOption {
                src: logo.src.clone(),
            }),
            site: config.site.clone(),
            plugins: config.plugins.clone(),
            integrations: config.integrations.clone(),
        }
    }
}
