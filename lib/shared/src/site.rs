//! Site-wide configuration: branding and fonts.

use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Text of the header logo link
    pub brand: String,
    /// Name in the copyright line
    pub owner: String,
    /// Target of the logo link
    pub home_href: String,
}

impl SiteConfig {
    /// Build-time configuration (`SITE_BRAND`, `SITE_OWNER`), the browser has no process env.
    pub fn from_env() -> Self {
        Self {
            brand: option_env!("SITE_BRAND")
                .unwrap_or("thetechcodehub")
                .to_string(),
            owner: option_env!("SITE_OWNER")
                .unwrap_or("thetechcodehub")
                .to_string(),
            home_href: "/".to_string(),
        }
    }
}

pub static SITE: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::from_env);

pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("©{year} All rights reserved to {owner}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontFace {
    pub family: &'static str,
    pub src: &'static str,
    pub format: &'static str,
    pub weight: u16,
    pub style: &'static str,
    /// `font-display` value
    pub display: &'static str,
}

impl FontFace {
    fn rule(&self) -> String {
        format!(
            "@font-face {{ font-family: '{}'; src: url('{}') format('{}'); font-weight: {}; font-style: {}; font-display: {}; }}\n",
            self.family, self.src, self.format, self.weight, self.style, self.display,
        )
    }
}

/// Local fonts used by the layout.
///
/// `heading` is exposed as a CSS variable for utility classes, `body` is
/// applied through a class on the root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub heading: FontFace,
    pub heading_variable: &'static str,
    pub body: FontFace,
    pub body_class: &'static str,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            heading: FontFace {
                family: "Cal Sans",
                src: "/fonts/CalSans.woff2",
                format: "woff2",
                weight: 400,
                style: "normal",
                display: "swap",
            },
            heading_variable: "--cal-sans",
            body: FontFace {
                family: "Matter",
                src: "/fonts/Matter-Regular.woff",
                format: "woff",
                weight: 400,
                style: "normal",
                display: "swap",
            },
            body_class: "font-matter",
        }
    }
}

impl Typography {
    pub fn css(&self) -> String {
        format!(
            "{heading}{body}:root {{ {var}: '{heading_family}', sans-serif; }}\n.{class} {{ font-family: '{body_family}', sans-serif; }}\n.font-cal-sans {{ font-family: var({var}); }}\n",
            heading = self.heading.rule(),
            body = self.body.rule(),
            var = self.heading_variable,
            heading_family = self.heading.family,
            class = self.body_class,
            body_family = self.body.family,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line_format() {
        assert_eq!(
            copyright_line(2024, "thetechcodehub"),
            "©2024 All rights reserved to thetechcodehub"
        );
    }

    #[test]
    fn default_site_links_home() {
        assert_eq!(SITE.home_href, "/");
        assert!(!SITE.brand.is_empty());
    }

    #[test]
    fn typography_css_declares_both_fonts() {
        let css = Typography::default().css();

        assert!(css.contains("font-family: 'Cal Sans'; src: url('/fonts/CalSans.woff2') format('woff2')"));
        assert!(css.contains("src: url('/fonts/Matter-Regular.woff') format('woff'); font-weight: 400; font-style: normal; font-display: swap;"));
        assert!(css.contains(":root { --cal-sans: 'Cal Sans', sans-serif; }"));
        assert!(css.contains(".font-matter { font-family: 'Matter', sans-serif; }"));
        assert_eq!(css.matches("font-display: swap").count(), 2);
        assert_eq!(css.lines().count(), 5);
    }
}
