use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized element type, for checking that a collection never allocates for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// Increments a shared counter whenever an instance is dropped. Cloning shares the counter.
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a counter at zero, along with the first instance sharing it.
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// The number of instances sharing this counter that have been dropped so far.
    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
