//! Named timed bodies.

use std::fmt;

/// A named unit of work measured for execution time.
///
/// The body takes no arguments and its return value is never observed by
/// the harness; anything that must survive optimization goes through
/// [`crate::barrier`].
pub struct BenchCase {
    name: String,
    body: Box<dyn FnMut()>,
}

impl BenchCase {
    /// Create a case from a name and a timed body.
    pub fn new(name: impl Into<String>, body: impl FnMut() + 'static) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// The identifier this case is registered and reported under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute the body exactly once.
    #[inline]
    pub fn run_once(&mut self) {
        (self.body)()
    }
}

impl fmt::Debug for BenchCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
