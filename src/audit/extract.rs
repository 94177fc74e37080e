//! Pattern-based value extraction over case-folded content.

use regex::Regex;

use super::Category;
use crate::lib::errors::AuditError;

/// Pre-compiled extractor holding one pattern per category.
#[derive(Debug, Clone)]
pub struct Extractor {
    compiled: Vec<(Category, Regex)>,
}

impl Extractor {
    /// Compile every category pattern once.
    pub fn new() -> Result<Self, AuditError> {
        let compiled = Category::ALL
            .iter()
            .map(|category| {
                Regex::new(category.pattern())
                    .map(|re| (*category, re))
                    .map_err(|source| AuditError::InvalidPattern {
                        category: category.label(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { compiled })
    }

    /// Extract every category from raw content, in category order.
    pub fn extract_all(&self, content: &str) -> Vec<(Category, Option<String>)> {
        let lowered = content.to_lowercase();
        self.compiled
            .iter()
            .map(|(category, re)| (*category, capture_first(re, &lowered)))
            .collect()
    }

    #[cfg(test)]
    fn extract(&self, category: Category, content: &str) -> Option<String> {
        let lowered = content.to_lowercase();
        self.compiled
            .iter()
            .find(|(candidate, _)| *candidate == category)
            .and_then(|(_, re)| capture_first(re, &lowered))
    }
}

fn capture_first(re: &Regex, lowered: &str) -> Option<String> {
    re.captures(lowered)
        .and_then(|caps| caps.get(1))
        .map(|group| group.as_str().trim().to_string())
}
