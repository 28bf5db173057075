//! Lookup from the Tabler icon names used in the content file to icon-font classes.

static KNOWN_ICONS: &[&str] = &[
    "IconBrandDocker",
    "IconBrandGit",
    "IconBrandGithub",
    "IconBrandGolang",
    "IconBrandLinkedin",
    "IconBrandMongodb",
    "IconBrandNestjs",
    "IconBrandNextjs",
    "IconBrandNodejs",
    "IconBrandPython",
    "IconBrandReact",
    "IconBrandTypescript",
    "IconBrandUbuntu",
    "IconBrandX",
    "IconBriefcase",
    "IconCloud",
    "IconCloudComputing",
    "IconCoffee",
    "IconDatabase",
    "IconLeaf",
    "IconMail",
    "IconMapPin",
    "IconRefresh",
    "IconSchool",
    "IconSearch",
    "IconServer",
    "IconSettingsCode",
];

/// Icon-font class for a known icon, `None` when the caller should fall back to text.
pub fn icon_class(name: &str) -> Option<String> {
    if !KNOWN_ICONS.contains(&name) {
        return None;
    }
    let stem = name.strip_prefix("Icon")?;
    let mut class = String::from("ti ti-");
    for (i, c) in stem.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            class.push('-');
        }
        class.push(c.to_ascii_lowercase());
    }
    Some(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons_map_to_classes() {
        assert_eq!(icon_class("IconBrandGithub").as_deref(), Some("ti ti-brand-github"));
        assert_eq!(icon_class("IconBrandX").as_deref(), Some("ti ti-brand-x"));
        assert_eq!(
            icon_class("IconCloudComputing").as_deref(),
            Some("ti ti-cloud-computing")
        );
        assert_eq!(icon_class("IconDatabase").as_deref(), Some("ti ti-database"));
    }

    #[test]
    fn test_unknown_icons_fall_back() {
        assert_eq!(icon_class("IconBrandMastodon"), None);
        assert_eq!(icon_class("github"), None);
        assert_eq!(icon_class(""), None);
    }

    #[test]
    fn test_every_content_icon_resolves() {
        let config = crate::portfolio::portfolio().unwrap();
        let social = config.personal.social_links.iter().map(|l| l.icon.as_str());
        let skills = config.skills.iter().filter_map(|s| s.icon.as_deref());
        for name in social.chain(skills) {
            assert!(icon_class(name).is_some(), "{name} should resolve");
        }
    }
}
