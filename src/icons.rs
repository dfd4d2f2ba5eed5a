//! Icon Registry
//!
//! Closed set of icons the menu service may reference by key.

/// Menu icons known to the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Icon {
    DollarSign,
    SquarePen,
    #[default]
    Home,
    Package,
    Handshake,
    Percent,
    Landmark,
    FileText,
    BarChart3,
    Settings,
    HardHat,
}

impl Icon {
    /// Look up an icon by its service key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Icon> {
        let icon = match key {
            "DollarSign" => Icon::DollarSign,
            "SquarePen" => Icon::SquarePen,
            "Home" => Icon::Home,
            "Package" => Icon::Package,
            "Handshake" => Icon::Handshake,
            "Percent" => Icon::Percent,
            "Landmark" => Icon::Landmark,
            "FileText" => Icon::FileText,
            "BarChart3" => Icon::BarChart3,
            "Settings" => Icon::Settings,
            "HardHat" => Icon::HardHat,
            _ => return None,
        };
        Some(icon)
    }

    /// Resolve an optional key, falling back to the default icon
    pub fn resolve(key: Option<&str>) -> Icon {
        key.and_then(Icon::from_key).unwrap_or_default()
    }

    pub fn key(self) -> &'static str {
        match self {
            Icon::DollarSign => "DollarSign",
            Icon::SquarePen => "SquarePen",
            Icon::Home => "Home",
            Icon::Package => "Package",
            Icon::Handshake => "Handshake",
            Icon::Percent => "Percent",
            Icon::Landmark => "Landmark",
            Icon::FileText => "FileText",
            Icon::BarChart3 => "BarChart3",
            Icon::Settings => "Settings",
            Icon::HardHat => "HardHat",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::DollarSign => "💲",
            Icon::SquarePen => "📝",
            Icon::Home => "🏠",
            Icon::Package => "📦",
            Icon::Handshake => "🤝",
            Icon::Percent => "％",
            Icon::Landmark => "🏛",
            Icon::FileText => "📄",
            Icon::BarChart3 => "📊",
            Icon::Settings => "⚙",
            Icon::HardHat => "👷",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 11] = [
        Icon::DollarSign,
        Icon::SquarePen,
        Icon::Home,
        Icon::Package,
        Icon::Handshake,
        Icon::Percent,
        Icon::Landmark,
        Icon::FileText,
        Icon::BarChart3,
        Icon::Settings,
        Icon::HardHat,
    ];

    #[test]
    fn test_every_icon_key_round_trips() {
        for icon in ALL {
            assert_eq!(Icon::from_key(icon.key()), Some(icon));
        }
    }

    #[test]
    fn test_unknown_or_missing_key_defaults_to_home() {
        assert_eq!(Icon::resolve(None), Icon::Home);
        assert_eq!(Icon::resolve(Some("Rocket")), Icon::Home);
        assert_eq!(Icon::resolve(Some("package")), Icon::Home);
        assert_eq!(Icon::resolve(Some("Package")), Icon::Package);
    }
}
