// src/content/links.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    ComplianceGuide,
    CommunityForum,
    Documentation,
}

impl ExternalLink {
    pub fn url(self) -> &'static str {
        match self {
            ExternalLink::ComplianceGuide => "https://indiaai.gov.in/responsible-ai/homepage",
            ExternalLink::CommunityForum => "https://indiaai.gov.in/articles",
            ExternalLink::Documentation => "https://indiaai.gov.in/learning",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExternalLink::ComplianceGuide => "View Compliance Guide",
            ExternalLink::CommunityForum => "Community Forum",
            ExternalLink::Documentation => "View Full Documentation on India AI",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_plain_https_urls() {
        for link in [ExternalLink::ComplianceGuide, ExternalLink::CommunityForum, ExternalLink::Documentation] {
            assert!(link.url().starts_with("https://indiaai.gov.in/"));
            assert!(!link.url().contains('?'));
        }
    }
}
