//! Symbol resolver: free-text query to a canonical security
//!
//! Resolution strategy:
//! 1. Weighted fuzzy match against the local catalog (handles typos,
//!    partial words, and Arabic names)
//! 2. Remote market search, preferring hits on the target exchange
//! 3. `SymbolNotFound` when both come up empty
//!
//! A remote-search transport failure propagates as a data-fetch error
//! rather than being folded into "not found".

use crate::catalog::{Security, SecurityCatalog};
use crate::config::EngineConfig;
use crate::error::{AnalysisError, Result};
use crate::market::{MarketSearch, SearchHit};
use std::sync::Arc;
use strsim::jaro_winkler;
use tracing::debug;

/// Relative field weights for fuzzy matching; the symbol is trusted
/// most, keywords least. Weights only break near-ties between fields;
/// acceptance is decided by the distance itself.
const SYMBOL_WEIGHT: f64 = 0.4;
const NAME_WEIGHT: f64 = 0.3;
const LOCAL_NAME_WEIGHT: f64 = 0.2;
const KEYWORD_WEIGHT: f64 = 0.1;

/// Scale turning a field weight into a small ranking penalty
const TIE_BREAK: f64 = 0.05;

/// Resolves user queries to catalog securities
pub struct SymbolResolver {
    catalog: SecurityCatalog,
    search: Arc<dyn MarketSearch>,
    config: Arc<EngineConfig>,
}

impl SymbolResolver {
    /// Create a resolver over an immutable catalog and a remote search
    /// collaborator
    pub fn new(
        catalog: SecurityCatalog,
        search: Arc<dyn MarketSearch>,
        config: Arc<EngineConfig>,
    ) -> Self {
        Self {
            catalog,
            search,
            config,
        }
    }

    /// Resolve a free-text query to a security
    ///
    /// Fails with `SymbolNotFound` when neither the catalog nor the
    /// remote search produces an acceptable candidate.
    pub async fn resolve(&self, query: &str) -> Result<Security> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::SymbolNotFound(query.to_string()));
        }

        debug!(query = trimmed, "resolving symbol");

        if let Some(security) = self.search_local(trimmed) {
            debug!(symbol = %security.symbol, "local match found");
            return Ok(security.clone());
        }

        let hits = self
            .search
            .search(trimmed, self.config.search_limit)
            .await?;

        if let Some(security) = self.pick_remote(&hits) {
            debug!(symbol = %security.symbol, "remote match found");
            return Ok(security);
        }

        Err(AnalysisError::SymbolNotFound(trimmed.to_string()))
    }

    /// Best fuzzy match in the catalog, if any scores under the
    /// acceptance threshold
    fn search_local(&self, query: &str) -> Option<&Security> {
        let query = query.to_lowercase();
        let mut best: Option<(&Security, f64)> = None;

        for security in self.catalog.iter() {
            let score = match_score(&query, security);
            // Strictly-less keeps the first-listed security on ties, so
            // resolution is deterministic for a fixed catalog.
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((security, score));
            }
        }

        let (security, score) = best?;
        if score < self.config.match_threshold {
            debug!(symbol = %security.symbol, score, "local candidate accepted");
            Some(security)
        } else {
            debug!(score, "no local candidate under threshold");
            None
        }
    }

    /// Choose among remote hits: an exchange-suffix match wins; without
    /// one, fall back to the provider's top-ranked hit unless strict
    /// exchange matching is configured.
    fn pick_remote(&self, hits: &[SearchHit]) -> Option<Security> {
        let preferred = hits
            .iter()
            .find(|h| h.symbol.ends_with(&self.config.exchange_suffix));

        let chosen = match preferred {
            Some(hit) => Some(hit),
            None if !self.config.strict_exchange => {
                if let Some(first) = hits.first() {
                    debug!(symbol = %first.symbol, "no exchange match, falling back to top hit");
                }
                hits.first()
            }
            None => None,
        }?;

        Some(Security {
            symbol: chosen.symbol.clone(),
            name: chosen.name.clone(),
            // The remote search carries no Arabic name
            local_name: chosen.name.clone(),
            keywords: Vec::new(),
        })
    }
}

/// Combined match score for one security: the best (lowest) weighted
/// field distance across symbol, names, and keywords
fn match_score(query: &str, security: &Security) -> f64 {
    let mut best = weighted_distance(query, &security.symbol.to_lowercase(), SYMBOL_WEIGHT);
    best = best.min(weighted_distance(
        query,
        &security.name.to_lowercase(),
        NAME_WEIGHT,
    ));
    best = best.min(weighted_distance(
        query,
        &security.local_name.to_lowercase(),
        LOCAL_NAME_WEIGHT,
    ));

    for keyword in &security.keywords {
        best = best.min(weighted_distance(
            query,
            &keyword.to_lowercase(),
            KEYWORD_WEIGHT,
        ));
    }

    best
}

/// Distance of a query against one field, over the whole field and each
/// of its word tokens, with the field's tie-break penalty applied
fn weighted_distance(query: &str, field: &str, weight: f64) -> f64 {
    let mut distance = text_distance(query, field);
    for token in field.split_whitespace() {
        distance = distance.min(text_distance(query, token));
    }
    distance + (SYMBOL_WEIGHT - weight) * TIE_BREAK
}

/// Normalized distance between a query and a candidate string:
/// 0 for an exact match, a small value for substring containment,
/// otherwise the Jaro-Winkler complement
fn text_distance(query: &str, candidate: &str) -> f64 {
    if query == candidate {
        return 0.0;
    }

    let query_len = query.chars().count();
    let candidate_len = candidate.chars().count();

    // Substring containment is a strong signal ("commercial" inside
    // "commercial international bank"), scaled by how much of the longer
    // string is covered. Very short fragments must match exactly.
    if query_len >= 3 && candidate.contains(query) {
        let coverage = query_len as f64 / candidate_len as f64;
        return 0.2 * (1.0 - coverage);
    }
    if candidate_len >= 3 && query.contains(candidate) {
        let coverage = candidate_len as f64 / query_len as f64;
        return 0.2 * (1.0 - coverage);
    }

    // Jaro-Winkler overstates similarity when the candidate is much
    // shorter than the query ("tesla" vs the keyword "te"); scale the
    // similarity down by the length ratio in that case.
    let mut similarity = jaro_winkler(query, candidate);
    if candidate_len < query_len {
        similarity *= candidate_len as f64 / query_len as f64;
    }

    1.0 - similarity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::MockMarketSearch;

    fn resolver_with(search: MockMarketSearch) -> SymbolResolver {
        SymbolResolver::new(
            SecurityCatalog::egx(),
            Arc::new(search),
            Arc::new(EngineConfig::default()),
        )
    }

    fn resolver_with_config(search: MockMarketSearch, config: EngineConfig) -> SymbolResolver {
        SymbolResolver::new(SecurityCatalog::egx(), Arc::new(search), Arc::new(config))
    }

    fn no_remote() -> MockMarketSearch {
        let mut search = MockMarketSearch::new();
        search.expect_search().times(0);
        search
    }

    #[tokio::test]
    async fn test_empty_query_fails_fast() {
        let resolver = resolver_with(no_remote());

        let err = resolver.resolve("   ").await.expect_err("must fail");
        assert!(matches!(err, AnalysisError::SymbolNotFound(_)));
    }

    #[tokio::test]
    async fn test_exact_symbol_resolves_locally() {
        let resolver = resolver_with(no_remote());

        let security = resolver.resolve("FWRY.CA").await.expect("resolves");
        assert_eq!(security.symbol, "FWRY.CA");
    }

    #[tokio::test]
    async fn test_name_and_keyword_matches() {
        let resolver = resolver_with(no_remote());

        let security = resolver.resolve("fawry").await.expect("resolves");
        assert_eq!(security.symbol, "FWRY.CA");

        let security = resolver.resolve("cib").await.expect("resolves");
        assert_eq!(security.symbol, "COMI.CA");

        let security = resolver.resolve("palm hills").await.expect("resolves");
        assert_eq!(security.symbol, "PHDC.CA");
    }

    #[tokio::test]
    async fn test_arabic_query() {
        let resolver = resolver_with(no_remote());

        let security = resolver.resolve("فوري").await.expect("resolves");
        assert_eq!(security.symbol, "FWRY.CA");
    }

    #[tokio::test]
    async fn test_typo_is_tolerated() {
        let resolver = resolver_with(no_remote());

        let security = resolver.resolve("fary").await.expect("resolves");
        assert_eq!(security.symbol, "FWRY.CA");
    }

    #[tokio::test]
    async fn test_resolution_is_deterministic() {
        let resolver = resolver_with(no_remote());

        let first = resolver.resolve("orascom").await.expect("resolves");
        let second = resolver.resolve("orascom").await.expect("resolves");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_remote_prefers_exchange_suffix() {
        let mut search = MockMarketSearch::new();
        search.expect_search().returning(|_, _| {
            Ok(vec![
                SearchHit {
                    symbol: "ZYXW".to_string(),
                    name: "Zyxw Global".to_string(),
                    exchange: Some("NMS".to_string()),
                },
                SearchHit {
                    symbol: "ZYXW.CA".to_string(),
                    name: "Zyxw Egypt".to_string(),
                    exchange: Some("CAI".to_string()),
                },
            ])
        });

        let resolver = resolver_with(search);
        let security = resolver.resolve("zyxw global").await.expect("resolves");
        assert_eq!(security.symbol, "ZYXW.CA");
        assert_eq!(security.name, "Zyxw Egypt");
    }

    #[tokio::test]
    async fn test_remote_falls_back_to_top_hit() {
        let mut search = MockMarketSearch::new();
        search.expect_search().returning(|_, _| {
            Ok(vec![SearchHit {
                symbol: "ZYXW".to_string(),
                name: "Zyxw Global".to_string(),
                exchange: Some("NMS".to_string()),
            }])
        });

        let resolver = resolver_with(search);
        let security = resolver.resolve("zyxw global").await.expect("resolves");
        assert_eq!(security.symbol, "ZYXW");
    }

    #[tokio::test]
    async fn test_strict_exchange_rejects_foreign_hits() {
        let mut search = MockMarketSearch::new();
        search.expect_search().returning(|_, _| {
            Ok(vec![SearchHit {
                symbol: "ZYXW".to_string(),
                name: "Zyxw Global".to_string(),
                exchange: Some("NMS".to_string()),
            }])
        });

        let config = EngineConfig::builder()
            .strict_exchange(true)
            .build()
            .expect("valid config");

        let resolver = resolver_with_config(search, config);
        let err = resolver
            .resolve("zyxw global")
            .await
            .expect_err("must fail");
        assert!(matches!(err, AnalysisError::SymbolNotFound(_)));
    }

    #[tokio::test]
    async fn test_remote_empty_is_not_found() {
        let mut search = MockMarketSearch::new();
        search.expect_search().returning(|_, _| Ok(Vec::new()));

        let resolver = resolver_with(search);
        let err = resolver
            .resolve("zzzz unknown zzzz")
            .await
            .expect_err("must fail");
        assert!(matches!(err, AnalysisError::SymbolNotFound(ref q) if q.contains("zzzz")));
    }

    #[tokio::test]
    async fn test_remote_error_propagates_as_data_fetch() {
        let mut search = MockMarketSearch::new();
        search.expect_search().returning(|_, _| {
            Err(AnalysisError::DataFetch(
                "Market search is currently unavailable.".to_string(),
            ))
        });

        let resolver = resolver_with(search);
        let err = resolver
            .resolve("zzzz unknown zzzz")
            .await
            .expect_err("must fail");
        assert!(matches!(err, AnalysisError::DataFetch(_)));
    }

    #[test]
    fn test_unrelated_query_scores_above_threshold() {
        let catalog = SecurityCatalog::egx();
        let threshold = EngineConfig::default().match_threshold;

        let best = catalog
            .iter()
            .map(|s| match_score("tesla", s))
            .fold(f64::INFINITY, f64::min);

        assert!(
            best >= threshold,
            "unrelated query must not match locally (best score {best})"
        );
    }
}
