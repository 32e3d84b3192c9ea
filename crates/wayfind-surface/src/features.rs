//! Landing-page feature listing.
//!
//! Feature cards are declared once and rendered in declaration order; the
//! stable `index` assigned here is the only rendering key. Cards are never
//! reordered by any other criterion.

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::link::{LinkTarget, validate_link};

/// One declared feature card.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeatureItem {
    /// Card title.
    pub title: String,
    /// Short icon string, usually an emoji.
    pub icon: String,
    /// Card body text.
    pub description: String,
    /// Internal path or external url the card links to.
    pub link: String,
    /// Optional decorative badge. Absence is valid and never replaced
    /// with a placeholder.
    #[serde(default)]
    pub badge: Option<String>,
}

/// A validated feature card with its stable rendering index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedFeature {
    /// Declaration position, the only rendering key.
    pub index: usize,
    /// Card title.
    pub title: String,
    /// Short icon string.
    pub icon: String,
    /// Card body text.
    pub description: String,
    /// Validated link target.
    #[serde(flatten)]
    pub link: LinkTarget,
    /// Optional decorative badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Validate feature cards and assign declaration-order indices.
///
/// Links resolve exactly like navbar `DirectPath`/`ExternalLink` entries.
///
/// # Errors
///
/// Returns the first [`SurfaceError`] in declaration order.
pub fn build_features(
    items: &[FeatureItem],
    base_url: &str,
) -> Result<Vec<ValidatedFeature>, SurfaceError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let link = validate_link(&item.link, base_url)?;
            Ok(ValidatedFeature {
                index,
                title: item.title.clone(),
                icon: item.icon.clone(),
                description: item.description.clone(),
                link,
                badge: item.badge.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(title: &str, link: &str, badge: Option<&str>) -> FeatureItem {
        FeatureItem {
            title: title.to_owned(),
            icon: "🚀".to_owned(),
            description: format!("{title} description"),
            link: link.to_owned(),
            badge: badge.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn test_build_features_empty() {
        assert!(build_features(&[], "/").unwrap().is_empty());
    }

    #[test]
    fn test_build_features_preserves_declaration_order() {
        let items = vec![
            feature("Architecture", "/docs/architecture", Some("Core")),
            feature("Development Guide", "/docs/intro", None),
            feature("Flutter", "https://flutter.dev", Some("Learning")),
        ];

        let built = build_features(&items, "/").unwrap();

        let indices: Vec<_> = built.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(built[0].title, "Architecture");
        assert_eq!(built[1].title, "Development Guide");
        assert_eq!(built[2].title, "Flutter");
    }

    #[test]
    fn test_build_features_absent_badge_stays_absent() {
        let items = vec![feature("Guide", "/docs/intro", None)];

        let built = build_features(&items, "/").unwrap();

        assert_eq!(built[0].badge, None);
    }

    #[test]
    fn test_build_features_keeps_declared_badge() {
        let items = vec![feature("Guide", "/docs/intro", Some("Core"))];

        let built = build_features(&items, "/").unwrap();

        assert_eq!(built[0].badge.as_deref(), Some("Core"));
    }

    #[test]
    fn test_build_features_internal_link_validated_against_base() {
        let items = vec![feature("Guide", "/docs/intro", None)];

        assert!(build_features(&items, "/").is_ok());
        assert!(matches!(
            build_features(&items, "/handbook/"),
            Err(SurfaceError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_build_features_rejects_unsupported_scheme() {
        let items = vec![feature("FTP", "ftp://example.com", None)];

        assert!(matches!(
            build_features(&items, "/"),
            Err(SurfaceError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_validated_feature_serialization_skips_absent_badge() {
        let built = build_features(&[feature("Guide", "/docs/intro", None)], "/").unwrap();

        let json = serde_json::to_value(&built[0]).unwrap();

        assert_eq!(json["index"], 0);
        assert_eq!(json["kind"], "path");
        assert_eq!(json["to"], "/docs/intro");
        assert!(json.get("badge").is_none());
    }

    #[test]
    fn test_feature_item_deserialization() {
        #[derive(Debug, serde::Deserialize)]
        struct Wrapper {
            features: Vec<FeatureItem>,
        }

        let parsed: Wrapper = toml::from_str(
            r#"
[[features]]
title = "Comprehensive Architecture"
icon = "🏗️"
description = "Deep dive into the architecture."
link = "/docs/architecture"
badge = "Core"

[[features]]
title = "Development Guide"
icon = "🚀"
description = "Step-by-step tutorials."
link = "/docs/intro"
"#,
        )
        .unwrap();

        assert_eq!(parsed.features.len(), 2);
        assert_eq!(parsed.features[0].badge.as_deref(), Some("Core"));
        assert_eq!(parsed.features[1].badge, None);
    }
}
