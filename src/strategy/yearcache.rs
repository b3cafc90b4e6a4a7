use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Lazily populated, never evicted, per-year cache.
///
/// Two threads missing the same year may both compute it; the first insert
/// wins and both callers get the published value. Values are built outside
/// the lock and published whole, so readers never see a partial entry.
pub struct YearCache<V> {
    cache: RwLock<HashMap<i32, Arc<V>>>
}

impl<V> YearCache<V> {
    pub fn new() -> YearCache<V> {
        YearCache { cache: RwLock::new(HashMap::new()) }
    }

    pub fn get(&self, year: i32) -> Option<Arc<V>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
            .cloned()
    }

    pub fn get_or_compute(&self, year: i32, compute: impl FnOnce() -> V) -> Arc<V> {
        if let Some(value) = self.get(year) {
            return value;
        }

        let value = Arc::new(compute());
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(year).or_insert(value))
    }

    pub fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> Default for YearCache<V> {
    fn default() -> Self {
        YearCache::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;

    #[test]
    fn computes_once_per_year() {
        let cache = YearCache::new();
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            vec![1, 2, 3]
        };
        let first = cache.get_or_compute(2011, compute);
        let second = cache.get_or_compute(2011, compute);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        cache.get_or_compute(2012, compute);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn racing_threads_agree_on_the_published_value() {
        let cache: Arc<YearCache<Vec<i32>>> = Arc::new(YearCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_compute(2011, || vec![2011]))
            })
            .collect();
        let values: Vec<Arc<Vec<i32>>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for value in &values {
            assert!(Arc::ptr_eq(value, &values[0]));
        }
        assert_eq!(cache.len(), 1);
    }
}
