//! In-memory triple store
//!
//! Statements are kept with set semantics and indexed by subject and by
//! predicate. Pattern evaluation is a nested-loop join over those indexes;
//! enhancement responses are small enough that nothing smarter is needed.

use crate::error::Result;
use crate::pattern::{PatternTerm, TriplePattern};
use crate::query::{AskQuery, SelectQuery};
use crate::solution::Solution;
use crate::{StoreReader, TripleStore};
use parking_lot::{RwLock, RwLockReadGuard};
use rustc_hash::{FxHashMap, FxHashSet};
use stanbol_graph_ir::{Term, Triple};

#[derive(Debug, Default)]
struct StoreData {
    triples: Vec<Triple>,
    seen: FxHashSet<Triple>,
    by_subject: FxHashMap<Term, Vec<usize>>,
    by_predicate: FxHashMap<Term, Vec<usize>>,
}

impl StoreData {
    fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        let idx = self.triples.len();
        self.by_subject.entry(triple.s.clone()).or_default().push(idx);
        self.by_predicate.entry(triple.p.clone()).or_default().push(idx);
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }
}

/// Indexed in-memory triple store
///
/// Writers take the lock briefly per insert; a [`MemoryReader`] holds the
/// read lock until it is dropped, so every query it runs sees the same
/// statements.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<StoreData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement. Returns false if it was already present or is not
    /// well-formed RDF (literal subject, non-IRI predicate).
    pub fn insert(&self, triple: Triple) -> bool {
        if !triple.is_well_formed() {
            tracing::warn!(%triple, "ignoring malformed statement");
            return false;
        }
        self.data.write().insert(triple)
    }

    /// Number of distinct statements
    pub fn len(&self) -> usize {
        self.data.read().triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Triple> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut store = MemoryStore::new();
        store.extend(iter);
        store
    }
}

impl Extend<Triple> for MemoryStore {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl TripleStore for MemoryStore {
    type Reader<'a> = MemoryReader<'a>;

    fn reader(&self) -> Result<MemoryReader<'_>> {
        Ok(MemoryReader {
            data: self.data.read(),
        })
    }
}

/// Read snapshot of a [`MemoryStore`]
pub struct MemoryReader<'a> {
    data: RwLockReadGuard<'a, StoreData>,
}

impl MemoryReader<'_> {
    /// All solutions of `pattern` that extend `row`
    fn match_pattern(&self, pattern: &TriplePattern, row: &Solution) -> Vec<Solution> {
        // Substitute variables already bound by the row
        let resolve = |t: &PatternTerm| -> Option<Term> {
            match t {
                PatternTerm::Const(c) => Some(c.clone()),
                PatternTerm::Var(v) => row.get_var(v).cloned(),
            }
        };
        let s = resolve(&pattern.s);
        let p = resolve(&pattern.p);
        let o = resolve(&pattern.o);

        let candidates: Box<dyn Iterator<Item = &Triple> + '_> = match (&s, &p) {
            (Some(s), _) => self.indexed(&self.data.by_subject, s),
            (None, Some(p)) => self.indexed(&self.data.by_predicate, p),
            (None, None) => Box::new(self.data.triples.iter()),
        };

        let mut out = Vec::new();
        for triple in candidates {
            if s.as_ref().is_some_and(|s| *s != triple.s)
                || p.as_ref().is_some_and(|p| *p != triple.p)
                || o.as_ref().is_some_and(|o| *o != triple.o)
            {
                continue;
            }
            let mut next = row.clone();
            let consistent = [
                (&pattern.s, &triple.s),
                (&pattern.p, &triple.p),
                (&pattern.o, &triple.o),
            ]
            .into_iter()
            .all(|(pt, term)| match pt {
                PatternTerm::Var(v) => next.bind(v, term),
                PatternTerm::Const(_) => true,
            });
            if consistent {
                out.push(next);
            }
        }
        out
    }

    fn indexed<'s>(
        &'s self,
        index: &'s FxHashMap<Term, Vec<usize>>,
        key: &Term,
    ) -> Box<dyn Iterator<Item = &'s Triple> + 's> {
        match index.get(key) {
            Some(idxs) => Box::new(idxs.iter().map(|&i| &self.data.triples[i])),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Join a basic graph pattern onto a seed row
    fn evaluate_bgp(&self, patterns: &[TriplePattern], seed: Solution) -> Vec<Solution> {
        let mut rows = vec![seed];
        for pattern in patterns {
            rows = rows
                .iter()
                .flat_map(|row| self.match_pattern(pattern, row))
                .collect();
            if rows.is_empty() {
                break;
            }
        }
        rows
    }
}

impl StoreReader for MemoryReader<'_> {
    fn select(&self, query: &SelectQuery) -> Result<Vec<Solution>> {
        query.validate()?;

        let mut rows = self.evaluate_bgp(&query.patterns, Solution::new());
        for group in &query.optionals {
            rows = rows
                .into_iter()
                .flat_map(|row| {
                    let extended = self.evaluate_bgp(group, row.clone());
                    if extended.is_empty() {
                        vec![row]
                    } else {
                        extended
                    }
                })
                .collect();
        }

        tracing::trace!(
            patterns = query.patterns.len(),
            optionals = query.optionals.len(),
            rows = rows.len(),
            "select evaluated"
        );
        Ok(rows)
    }

    fn ask(&self, query: &AskQuery) -> Result<bool> {
        query.validate()?;
        Ok(!self.evaluate_bgp(&query.patterns, Solution::new()).is_empty())
    }
}

impl std::fmt::Debug for MemoryReader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryReader")
            .field("triples", &self.data.triples.len())
            .finish()
    }
}
