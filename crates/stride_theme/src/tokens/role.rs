//! Semantic colour roles

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::ops::{Index, IndexMut};

/// A named purpose for a colour, independent of its concrete value
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    // Brand
    Primary,
    Secondary,

    // Surfaces
    Background,
    CardBackground,
    InputBackground,

    // Text
    TextPrimary,
    TextSecondary,
    TextOnPrimary,

    // Status
    Success,
    Warning,
    Danger,

    Accent,
    Border,
}

impl SemanticRole {
    pub const COUNT: usize = 13;

    /// Every role, in table order
    pub const ALL: [SemanticRole; Self::COUNT] = [
        SemanticRole::Primary,
        SemanticRole::Secondary,
        SemanticRole::Background,
        SemanticRole::CardBackground,
        SemanticRole::InputBackground,
        SemanticRole::TextPrimary,
        SemanticRole::TextSecondary,
        SemanticRole::TextOnPrimary,
        SemanticRole::Success,
        SemanticRole::Warning,
        SemanticRole::Danger,
        SemanticRole::Accent,
        SemanticRole::Border,
    ];

    /// Stable identifier used in config tables and JSON output
    pub const fn id(self) -> &'static str {
        match self {
            SemanticRole::Primary => "primary",
            SemanticRole::Secondary => "secondary",
            SemanticRole::Background => "background",
            SemanticRole::CardBackground => "card_background",
            SemanticRole::InputBackground => "input_background",
            SemanticRole::TextPrimary => "text_primary",
            SemanticRole::TextSecondary => "text_secondary",
            SemanticRole::TextOnPrimary => "text_on_primary",
            SemanticRole::Success => "success",
            SemanticRole::Warning => "warning",
            SemanticRole::Danger => "danger",
            SemanticRole::Accent => "accent",
            SemanticRole::Border => "border",
        }
    }

    /// Parse a role id; `-` and `_` are interchangeable
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().replace('-', "_");
        Self::ALL.into_iter().find(|role| role.id() == id)
    }

    /// Position in [`ALL`](Self::ALL)
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One value per [`SemanticRole`]
///
/// A fixed array rather than a map, so a table is complete by construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoleMap<T>([T; SemanticRole::COUNT]);

impl<T> RoleMap<T> {
    /// Build a table by evaluating `f` for every role
    pub fn from_fn(mut f: impl FnMut(SemanticRole) -> T) -> Self {
        Self(std::array::from_fn(|i| f(SemanticRole::ALL[i])))
    }

    pub fn get(&self, role: SemanticRole) -> &T {
        &self.0[role.index()]
    }

    pub fn set(&mut self, role: SemanticRole, value: T) {
        self.0[role.index()] = value;
    }

    /// `(role, value)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (SemanticRole, &T)> {
        SemanticRole::ALL.into_iter().zip(self.0.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(SemanticRole, &T) -> U) -> RoleMap<U> {
        RoleMap::from_fn(|role| f(role, self.get(role)))
    }
}

impl<T> Index<SemanticRole> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: SemanticRole) -> &T {
        self.get(role)
    }
}

impl<T> IndexMut<SemanticRole> for RoleMap<T> {
    fn index_mut(&mut self, role: SemanticRole) -> &mut T {
        &mut self.0[role.index()]
    }
}

impl<T: Default> Default for RoleMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: Serialize> Serialize for RoleMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SemanticRole::COUNT))?;
        for (role, value) in self.iter() {
            map.serialize_entry(role.id(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_index() {
        for (i, role) in SemanticRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(SemanticRole::from_id("primary"), Some(SemanticRole::Primary));
        assert_eq!(
            SemanticRole::from_id("text-on-primary"),
            Some(SemanticRole::TextOnPrimary)
        );
        assert_eq!(SemanticRole::from_id("tertiary"), None);
    }

    #[test]
    fn test_role_map_serializes_by_id() {
        let map = RoleMap::from_fn(|role| role.index());
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["primary"], 0);
        assert_eq!(json["border"], 12);
        assert_eq!(json.as_object().unwrap().len(), SemanticRole::COUNT);
    }
}
