//! Partner identity payloads
//!
//! The `visual_identity` JSON shape is the only external data contract of the
//! engine. Decoding is lenient: a colour field holding a number, bool or
//! object is treated as absent, and a `visual_identity` that is not an object
//! is treated as missing. Unknown fields are ignored.

use crate::error::Result;
use crate::tokens::SemanticRole;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stride_platform::ColorScheme;

macro_rules! visual_identity {
    ($($role:ident => $light:ident, $dark:ident;)*) => {
        /// Partner-supplied colours, assets and font; every field optional
        ///
        /// Colours may be hex (`#a44200`, `a44200`, `#fff`) or an RGB triple
        /// (`"255,107,53"`).
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct VisualIdentity {
            $(
                #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
                pub $light: Option<String>,
                #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
                pub $dark: Option<String>,
            )*
            #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
            pub background_pattern: Option<String>,
            #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
            pub logo: Option<String>,
            #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
            pub font_family: Option<String>,
        }

        impl VisualIdentity {
            /// Raw colour supplied for `role` in `scheme`, exactly as received
            pub fn color(&self, role: SemanticRole, scheme: ColorScheme) -> Option<&str> {
                match (role, scheme) {
                    $(
                        (SemanticRole::$role, ColorScheme::Light) => self.$light.as_deref(),
                        (SemanticRole::$role, ColorScheme::Dark) => self.$dark.as_deref(),
                    )*
                }
            }

            pub fn color_mut(&mut self, role: SemanticRole, scheme: ColorScheme) -> &mut Option<String> {
                match (role, scheme) {
                    $(
                        (SemanticRole::$role, ColorScheme::Light) => &mut self.$light,
                        (SemanticRole::$role, ColorScheme::Dark) => &mut self.$dark,
                    )*
                }
            }
        }
    };
}

visual_identity! {
    Primary => primary_color, primary_color_dark;
    Secondary => secondary_color, secondary_color_dark;
    Background => background_color, background_color_dark;
    CardBackground => card_background_color, card_background_color_dark;
    InputBackground => input_background_color, input_background_color_dark;
    TextPrimary => text_primary_color, text_primary_color_dark;
    TextSecondary => text_secondary_color, text_secondary_color_dark;
    TextOnPrimary => text_on_primary_color, text_on_primary_color_dark;
    Success => success_color, success_color_dark;
    Warning => warning_color, warning_color_dark;
    Danger => danger_color, danger_color_dark;
    Accent => accent_color, accent_color_dark;
    Border => border_color, border_color_dark;
}

impl VisualIdentity {
    /// Builder-style colour setter
    pub fn with_color(
        mut self,
        role: SemanticRole,
        scheme: ColorScheme,
        value: impl Into<String>,
    ) -> Self {
        *self.color_mut(role, scheme) = Some(value.into());
        self
    }
}

/// A partner organisation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(default, deserialize_with = "lenient::id", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::identity", skip_serializing_if = "Option::is_none")]
    pub visual_identity: Option<VisualIdentity>,
}

/// The authenticated user as seen by the branding engine
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, deserialize_with = "lenient::id", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<Partner>,
}

impl UserInfo {
    pub fn with_partner(partner: Partner) -> Self {
        Self {
            partner: Some(partner),
            ..Self::default()
        }
    }
}

/// Any of the payload shapes that carry an identity
///
/// Recognised by their keys: a login response (`user`), a user (`partner`),
/// a partner (`visual_identity`), or a bare identity object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityPayload {
    User(UserInfo),
    Partner(Partner),
    Identity(VisualIdentity),
}

impl IdentityPayload {
    pub fn parse(json: &str) -> Result<Self> {
        let mut value: Value = serde_json::from_str(json)?;

        if let Some(user) = value.get_mut("user").map(Value::take) {
            if user.is_null() {
                return Ok(Self::User(UserInfo::default()));
            }
            return Ok(Self::User(serde_json::from_value(user)?));
        }
        if value.get("partner").is_some() {
            return Ok(Self::User(serde_json::from_value(value)?));
        }
        if value.get("visual_identity").is_some() {
            return Ok(Self::Partner(serde_json::from_value(value)?));
        }
        Ok(Self::Identity(serde_json::from_value(value)?))
    }

    /// Wrap the payload as the user the orchestrator would observe
    pub fn into_user(self) -> UserInfo {
        match self {
            Self::User(user) => user,
            Self::Partner(partner) => UserInfo::with_partner(partner),
            Self::Identity(identity) => UserInfo::with_partner(Partner {
                visual_identity: Some(identity),
                ..Partner::default()
            }),
        }
    }
}

mod lenient {
    use super::VisualIdentity;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// String field; other JSON types and blank strings read as absent
    pub(super) fn string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            Some(Value::String(_)) | Some(Value::Null) | None => None,
            Some(other) => {
                tracing::debug!("ignoring non-string identity field: {}", other);
                None
            }
        })
    }

    /// Numeric id, also accepted as a numeric string
    pub(super) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub(super) fn identity<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<VisualIdentity>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            Some(value @ Value::Object(_)) => match serde_json::from_value(value) {
                Ok(identity) => Ok(Some(identity)),
                Err(err) => {
                    tracing::warn!("unreadable visual_identity treated as missing: {}", err);
                    Ok(None)
                }
            },
            Some(Value::Null) | None => Ok(None),
            Some(other) => {
                tracing::warn!("visual_identity is not an object, treated as missing: {}", other);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_colour_fields() {
        let identity: VisualIdentity = serde_json::from_str(
            r##"{"primary_color": 42, "secondary_color": "  ", "accent_color": "#fff", "unknown": true}"##,
        )
        .unwrap();
        assert_eq!(identity.primary_color, None);
        assert_eq!(identity.secondary_color, None);
        assert_eq!(identity.accent_color.as_deref(), Some("#fff"));
    }

    #[test]
    fn test_color_accessor_covers_both_schemes() {
        let identity = VisualIdentity::default()
            .with_color(SemanticRole::Border, ColorScheme::Light, "#111111")
            .with_color(SemanticRole::Border, ColorScheme::Dark, "#222222");
        assert_eq!(identity.border_color.as_deref(), Some("#111111"));
        assert_eq!(
            identity.color(SemanticRole::Border, ColorScheme::Dark),
            Some("#222222")
        );
        assert_eq!(identity.color(SemanticRole::Primary, ColorScheme::Light), None);
    }

    #[test]
    fn test_non_object_identity_is_missing() {
        let partner: Partner =
            serde_json::from_str(r#"{"id": "7", "name": "Gym", "visual_identity": "oops"}"#).unwrap();
        assert_eq!(partner.id, Some(7));
        assert_eq!(partner.visual_identity, None);
    }

    #[test]
    fn test_payload_shapes() {
        let login = r#"{"token": "t", "user": {"id": 1, "partner": {"name": "A"}}}"#;
        let user = IdentityPayload::parse(login).unwrap().into_user();
        assert_eq!(user.partner.unwrap().name.as_deref(), Some("A"));

        let partner = r#"{"name": "B", "visual_identity": {"logo": "/b.png"}}"#;
        assert!(matches!(
            IdentityPayload::parse(partner).unwrap(),
            IdentityPayload::Partner(_)
        ));

        let bare = r#"{"primary_color": "255,107,53"}"#;
        let user = IdentityPayload::parse(bare).unwrap().into_user();
        let identity = user.partner.unwrap().visual_identity.unwrap();
        assert_eq!(identity.primary_color.as_deref(), Some("255,107,53"));

        assert!(IdentityPayload::parse("not json").is_err());
    }
}
