//! Items and the two sides they live on.

use serde::{Deserialize, Serialize};

/// A labeled entry in one of the two panels.
///
/// `value` is the identity key. Items are always matched by value, never by
/// position, since positions shift under every move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub value: String,
    #[serde(default)]
    pub display_value: String,
    #[serde(default)]
    pub is_selected: bool,
}

impl Item {
    pub fn new(value: impl Into<String>, display_value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display_value: display_value.into(),
            is_selected: false,
        }
    }

    /// Builder-style selected flag
    #[cfg(test)]
    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }

    /// Label to render; falls back to the value when no label was given.
    pub fn label(&self) -> &str {
        if self.display_value.is_empty() {
            &self.value
        } else {
            &self.display_value
        }
    }
}

/// Which panel a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The `unselected` collection
    Left,
    /// The `selected` collection
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Name of the collection on this side
    pub fn collection_name(self) -> &'static str {
        match self {
            Side::Left => "unselected",
            Side::Right => "selected",
        }
    }
}

/// Where programmatic moves insert into the destination panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropLocation {
    #[default]
    Top,
    Bottom,
}

impl std::str::FromStr for DropLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(DropLocation::Top),
            "bottom" => Ok(DropLocation::Bottom),
            other => Err(format!("unknown drop location '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserialize_defaults() {
        let item: Item = serde_json::from_str(r#"{"value": "a"}"#).unwrap();
        assert_eq!(item.value, "a");
        assert_eq!(item.label(), "a");
        assert!(!item.is_selected);
    }

    #[test]
    fn test_item_camel_case_fields() {
        let item: Item =
            serde_json::from_str(r#"{"value": "a", "displayValue": "Apple", "isSelected": true}"#)
                .unwrap();
        assert_eq!(item.label(), "Apple");
        assert!(item.is_selected);

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"displayValue\":\"Apple\""));
        assert!(json.contains("\"isSelected\":true"));
    }

    #[test]
    fn test_side_opposite_and_serde() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(serde_json::to_string(&Side::Right).unwrap(), "\"right\"");
    }

    #[test]
    fn test_drop_location_from_str() {
        assert_eq!("Bottom".parse::<DropLocation>(), Ok(DropLocation::Bottom));
        assert_eq!("top".parse::<DropLocation>(), Ok(DropLocation::Top));
        assert!("middle".parse::<DropLocation>().is_err());
    }
}
