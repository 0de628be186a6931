//! Per-initialization configuration for the badge editor.
//!
//! Built once from host element attributes when the component initializes,
//! then treated as immutable - rendering never goes back to the attributes.

/// Visual variant for the delete icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconVariant {
    /// Default icon styling.
    #[default]
    Dark,
    /// Light-on-dark styling (`light-icon` attribute present).
    Light,
}

impl IconVariant {
    pub fn from_flag(present: bool) -> Self {
        if present { Self::Light } else { Self::Dark }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

/// Immutable configuration snapshot for one initialization.
///
/// All fields are optional except that a missing `field_id` means there is no
/// initial data source and no serialization destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeEditorConfig {
    /// `field` attribute: id of the external hidden field element.
    pub field_id: Option<String>,
    /// `light-icon` attribute presence.
    pub icon_variant: IconVariant,
    /// `list-class` attribute: extra class on the list container.
    pub list_class: Option<String>,
    /// `item-class` attribute: extra class on each row.
    pub item_class: Option<String>,
    /// `label-class` attribute: extra class on each label span.
    pub label_class: Option<String>,
}

impl BadgeEditorConfig {
    /// Compose a base class with an optional configured extra class.
    pub fn class_for(base: &str, extra: Option<&str>) -> String {
        match extra {
            Some(extra) if !extra.trim().is_empty() => format!("{base} {}", extra.trim()),
            _ => base.to_owned(),
        }
    }

    pub fn list_class(&self) -> String {
        Self::class_for("badge-list", self.list_class.as_deref())
    }

    pub fn item_class(&self) -> String {
        Self::class_for("badge-item", self.item_class.as_deref())
    }

    pub fn label_class(&self) -> String {
        Self::class_for("badge-label", self.label_class.as_deref())
    }

    pub fn remove_class(&self) -> String {
        if self.icon_variant.is_light() {
            String::from("badge-remove badge-remove--light")
        } else {
            String::from("badge-remove")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_variant_from_flag() {
        assert_eq!(IconVariant::from_flag(false), IconVariant::Dark);
        assert_eq!(IconVariant::from_flag(true), IconVariant::Light);
        assert!(IconVariant::Light.is_light());
    }

    #[test]
    fn test_class_composition() {
        let config = BadgeEditorConfig {
            item_class: Some("pill".into()),
            ..Default::default()
        };
        assert_eq!(config.item_class(), "badge-item pill");
        assert_eq!(config.list_class(), "badge-list");
        assert_eq!(config.label_class(), "badge-label");
    }

    #[test]
    fn test_blank_extra_class_ignored() {
        let config = BadgeEditorConfig {
            list_class: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(config.list_class(), "badge-list");
    }

    #[test]
    fn test_remove_class_variant() {
        let light = BadgeEditorConfig {
            icon_variant: IconVariant::Light,
            ..Default::default()
        };
        assert_eq!(light.remove_class(), "badge-remove badge-remove--light");
        assert_eq!(BadgeEditorConfig::default().remove_class(), "badge-remove");
    }
}
