use std::cell::OnceCell;

use super::*;

/// Observable state of a derived view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CacheState<'a, T> {
    /// The view will be rebuilt on next access
    Stale,
    /// The view is built and reflects the current graph
    Valid(&'a T),
}

impl<T> CacheState<'_, T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Lazily built value that is dropped on mutation.
///
/// Building only needs `&self`, invalidating needs `&mut self`;
/// `OnceCell` keeps graphs `!Sync`, so a graph has a single writer at all times.
#[derive(Debug, Clone)]
pub struct Cached<T>(OnceCell<T>);

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Self(OnceCell::new())
    }
}

impl<T> Cached<T> {
    pub fn get_or_build(&self, build: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(build)
    }

    pub fn invalidate(&mut self) {
        self.0.take();
    }

    pub fn state(&self) -> CacheState<'_, T> {
        match self.0.get() {
            Some(value) => CacheState::Valid(value),
            None => CacheState::Stale,
        }
    }
}

/// All derived views of a graph; invalidated together
#[derive(Debug, Clone, Default)]
pub struct DerivedViews {
    pub(crate) edges: Cached<Vec<Edge>>,
    pub(crate) matrix: Cached<AdjacencyMatrix>,
}

impl DerivedViews {
    pub fn invalidate(&mut self) {
        self.edges.invalidate();
        self.matrix.invalidate();
    }
}

/// Inspect whether the derived views of a graph are currently built
pub trait CachedViews {
    fn edge_cache(&self) -> CacheState<'_, Vec<Edge>>;

    fn matrix_cache(&self) -> CacheState<'_, AdjacencyMatrix>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_once_and_invalidate() {
        let mut cache = Cached::<Vec<u32>>::default();
        assert!(!cache.state().is_valid());

        let mut builds = 0;
        cache.get_or_build(|| {
            builds += 1;
            vec![1, 2]
        });
        cache.get_or_build(|| {
            builds += 1;
            vec![3]
        });
        assert_eq!(builds, 1);
        assert_eq!(cache.state(), CacheState::Valid(&vec![1, 2]));

        cache.invalidate();
        assert_eq!(cache.state(), CacheState::Stale);
    }

    #[test]
    fn views_start_stale() {
        // `AdjacencyMatrix` has no `Default`, the cache must not require one
        let mut views = DerivedViews::default();
        assert!(!views.matrix.state().is_valid());

        let matrix = views
            .matrix
            .get_or_build(|| AdjacencyMatrix::build(vec![3, 8], &[Edge::new(3, 8)], false));
        assert_eq!(matrix.len(), 2);
        assert!(views.matrix.state().is_valid());

        views.invalidate();
        assert!(!views.edges.state().is_valid());
        assert!(!views.matrix.state().is_valid());
    }
}
