use std::collections::HashMap;
use std::hash::BuildHasher;

use super::SniffResult;

/// Caller-owned store of sniff results keyed by extracted domain.
///
/// Several queries can map to one domain (`a@example.com`,
/// `https://www.example.com/`), so hits are returned with the current query
/// substituted. Implementations are not expected to be shared between
/// threads.
pub trait SniffCache {
    fn lookup(&self, domain: &str) -> Option<SniffResult>;
    fn store(&mut self, domain: String, result: SniffResult);
}

impl<S: BuildHasher> SniffCache for HashMap<String, SniffResult, S> {
    fn lookup(&self, domain: &str) -> Option<SniffResult> {
        self.get(domain).cloned()
    }

    fn store(&mut self, domain: String, result: SniffResult) {
        self.insert(domain, result);
    }
}
