//! Single-threaded reactive cells and lazily recomputed derived values.
//!
//! A [`Signal`] is a mutable cell whose writes bump a version counter. A
//! [`Memo`] caches the result of a pure function over declared dependencies
//! and recomputes on the next read after any dependency version moved.
//! Memo versions are pulled through the chain, so memos may depend on memos.
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use launch_logging::launch_trace;

trait Readable<T> {
    fn version(&self) -> u64;
    fn read(&self) -> Ref<'_, T>;
}

/// Version probe for one dependency of a [`Memo`].
pub struct Dependency(Box<dyn Fn() -> u64>);

impl Dependency {
    fn version(&self) -> u64 {
        (self.0)()
    }
}

struct SignalInner<T> {
    value: RefCell<T>,
    version: Cell<u64>,
}

impl<T> Readable<T> for SignalInner<T> {
    fn version(&self) -> u64 {
        self.version.get()
    }

    fn read(&self) -> Ref<'_, T> {
        self.value.borrow()
    }
}

/// Mutable reactive cell. Clones are handles to the same cell.
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(SignalInner {
                value: RefCell::new(value),
                version: Cell::new(0),
            }),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.value.borrow().clone()
    }

    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.bump();
    }

    /// Mutates the value in place. Always counts as a write.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.value.borrow_mut());
        self.bump();
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    pub fn dependency(&self) -> Dependency {
        let inner = Rc::clone(&self.inner);
        Dependency(Box::new(move || inner.version.get()))
    }

    pub fn read_only(&self) -> ReadSignal<T> {
        let inner: Rc<dyn Readable<T>> = self.inner.clone();
        ReadSignal { inner }
    }

    fn bump(&self) {
        self.inner.version.set(self.inner.version.get().wrapping_add(1));
    }
}

struct MemoCache<T> {
    seen: Vec<u64>,
    value: T,
    version: u64,
}

struct MemoInner<T> {
    label: &'static str,
    deps: Vec<Dependency>,
    compute: Box<dyn Fn() -> T>,
    cache: RefCell<MemoCache<T>>,
}

impl<T> MemoInner<T> {
    fn current_versions(&self) -> Vec<u64> {
        self.deps.iter().map(Dependency::version).collect()
    }

    fn refresh(&self) {
        let current = self.current_versions();
        if self.cache.borrow().seen == current {
            return;
        }
        launch_trace!("recomputing {}", self.label);
        // Compute before borrowing the cache mutably: `compute` may read other memos.
        let value = (self.compute)();
        let mut cache = self.cache.borrow_mut();
        cache.seen = current;
        cache.value = value;
        cache.version = cache.version.wrapping_add(1);
    }
}

impl<T> Readable<T> for MemoInner<T> {
    fn version(&self) -> u64 {
        self.refresh();
        self.cache.borrow().version
    }

    fn read(&self) -> Ref<'_, T> {
        self.refresh();
        Ref::map(self.cache.borrow(), |cache| &cache.value)
    }
}

/// Derived read-only value over explicit dependencies.
pub struct Memo<T> {
    inner: Rc<MemoInner<T>>,
}

impl<T> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Memo<T> {
    /// Creates the memo and evaluates `compute` once.
    ///
    /// `compute` must only read the cells listed in `deps`; reads of
    /// undeclared cells are not tracked.
    pub fn new(
        label: &'static str,
        deps: impl IntoIterator<Item = Dependency>,
        compute: impl Fn() -> T + 'static,
    ) -> Self {
        let deps: Vec<Dependency> = deps.into_iter().collect();
        let seen = deps.iter().map(Dependency::version).collect();
        let value = compute();
        Self {
            inner: Rc::new(MemoInner {
                label,
                deps,
                compute: Box::new(compute),
                cache: RefCell::new(MemoCache {
                    seen,
                    value,
                    version: 0,
                }),
            }),
        }
    }

    /// Runs `f` on the current value.
    ///
    /// `f` must not write a dependency of this memo and then read the memo
    /// again: the recomputation would need the cache borrowed by `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.read().clone()
    }

    /// Number of recomputations so far. Reading it brings the memo up to date.
    pub fn version(&self) -> u64 {
        Readable::version(&*self.inner)
    }

    pub fn dependency(&self) -> Dependency {
        let inner = Rc::clone(&self.inner);
        Dependency(Box::new(move || Readable::version(&*inner)))
    }

    pub fn read_only(&self) -> ReadSignal<T> {
        let inner: Rc<dyn Readable<T>> = self.inner.clone();
        ReadSignal { inner }
    }
}

/// Read handle over either a [`Signal`] or a [`Memo`].
pub struct ReadSignal<T> {
    inner: Rc<dyn Readable<T>>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> ReadSignal<T> {
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.read().clone()
    }

    pub fn version(&self) -> u64 {
        self.inner.version()
    }

    pub fn dependency(&self) -> Dependency {
        let inner = Rc::clone(&self.inner);
        Dependency(Box::new(move || inner.version()))
    }
}

impl<T: 'static> From<Signal<T>> for ReadSignal<T> {
    fn from(signal: Signal<T>) -> Self {
        signal.read_only()
    }
}

impl<T: 'static> From<&Signal<T>> for ReadSignal<T> {
    fn from(signal: &Signal<T>) -> Self {
        signal.read_only()
    }
}

impl<T: 'static> From<Memo<T>> for ReadSignal<T> {
    fn from(memo: Memo<T>) -> Self {
        memo.read_only()
    }
}

impl<T: 'static> From<&Memo<T>> for ReadSignal<T> {
    fn from(memo: &Memo<T>) -> Self {
        memo.read_only()
    }
}
