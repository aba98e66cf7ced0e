//! Priority-ordered fallback registry.
//!
//! Strategies are registered with an integer priority and consulted highest priority first.
//! Registering is the only way to extend the fallback chain; the services never hard-code strategies.

/// Ordered collection of `(item, priority)` pairs.
///
/// Items are kept sorted by descending priority. The sort is stable, so items with equal
/// priority keep their registration order.
#[derive(Debug)]
pub struct PriorityRegistry<T> {
  entries: Vec<(T, i32)>,
}

impl<T> PriorityRegistry<T> {
  /// Creates an empty registry
  pub fn new() -> Self {
    Self { entries: Vec::new() }
  }

  /// Registers `item` with `priority`.
  pub fn register(&mut self, item: T, priority: i32) {
    self.entries.push((item, priority));
    // sort_by_key is stable
    self.entries.sort_by_key(|(_, p)| std::cmp::Reverse(*p));
  }

  /// Builder form of [`register`](Self::register).
  #[must_use]
  pub fn with(mut self, item: T, priority: i32) -> Self {
    self.register(item, priority);
    self
  }

  /// Iterates items from highest to lowest priority.
  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      inner: self.entries.iter(),
    }
  }

  /// Number of registered items
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether nothing is registered
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<T> Default for PriorityRegistry<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a, T> IntoIterator for &'a PriorityRegistry<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// Iterator over registered items, highest priority first.
#[derive(Debug)]
pub struct Iter<'a, T> {
  inner: std::slice::Iter<'a, (T, i32)>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().map(|(item, _)| item)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}
