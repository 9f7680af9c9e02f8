//! The fixed set of pages a build renders.

use crate::data::DataSource;

/// One page: a template, the file it renders to, and the data it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// Template name under the template root
    pub template: &'static str,

    /// File name under the output root
    pub output: &'static str,

    /// Context variable names and the data source bound to each
    pub bindings: &'static [(&'static str, DataSource)],
}

/// Every page of the site, in render order.
pub const PAGES: [PageSpec; 6] = [
    PageSpec {
        template: "index.html",
        output: "index.html",
        bindings: &[
            ("profile", DataSource::Profile),
            ("research", DataSource::Research),
        ],
    },
    PageSpec {
        template: "academics.html",
        output: "academics.html",
        bindings: &[
            ("profile", DataSource::Profile),
            ("academics", DataSource::Academics),
        ],
    },
    PageSpec {
        template: "experience.html",
        output: "experience.html",
        bindings: &[
            ("profile", DataSource::Profile),
            ("experience", DataSource::Experience),
        ],
    },
    PageSpec {
        template: "research.html",
        output: "research.html",
        bindings: &[
            ("profile", DataSource::Profile),
            ("research", DataSource::Research),
        ],
    },
    PageSpec {
        template: "professional.html",
        output: "professional.html",
        bindings: &[
            ("profile", DataSource::Profile),
            ("activities", DataSource::Professional),
        ],
    },
    PageSpec {
        template: "personal.html",
        output: "personal.html",
        bindings: &[
            ("profile", DataSource::Profile),
            ("activities", DataSource::Personal),
        ],
    },
];

/// Logical page name: the output file name without its `.html` extension.
pub fn page_name(output: &str) -> &str {
    output.strip_suffix(".html").unwrap_or(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_html_extension() {
        assert_eq!(page_name("academics.html"), "academics");
        assert_eq!(page_name("index.html"), "index");
        assert_eq!(page_name("feed.xml"), "feed.xml");
    }

    #[test]
    fn every_page_receives_profile() {
        for page in PAGES {
            assert!(page
                .bindings
                .iter()
                .any(|(name, source)| *name == "profile" && *source == DataSource::Profile));
        }
    }

    #[test]
    fn activities_pages_bind_distinct_sources() {
        let professional = PAGES.iter().find(|p| p.output == "professional.html").unwrap();
        let personal = PAGES.iter().find(|p| p.output == "personal.html").unwrap();

        assert!(professional.bindings.contains(&("activities", DataSource::Professional)));
        assert!(personal.bindings.contains(&("activities", DataSource::Personal)));
    }
}
