use log::debug;

/// The facade interface: three independent algorithms behind one surface.
pub trait Algorithms {
    fn join(&self, elements: &[String], separator: &str) -> String;
    fn search(&self, elements: &[String], target: &str) -> Option<usize>;
    fn sort(&self, elements: &[String]) -> Vec<String>;
}

/// A facade can be handed around by reference, so decorating one does not
/// give it up.
impl<A: Algorithms> Algorithms for &A {
    fn join(&self, elements: &[String], separator: &str) -> String {
        (**self).join(elements, separator)
    }

    fn search(&self, elements: &[String], target: &str) -> Option<usize> {
        (**self).search(elements, target)
    }

    fn sort(&self, elements: &[String]) -> Vec<String> {
        (**self).sort(elements)
    }
}

pub type JoinFn = Box<dyn Fn(&[String], &str) -> String>;
pub type SearchFn = Box<dyn Fn(&[String], &str) -> Option<usize>>;
pub type SortFn = Box<dyn Fn(&[String]) -> Vec<String>>;

/// The class-shaped construction: the three algorithms are stored as fields
/// once at construction time.
///
/// The fields are private and no method takes `&mut self`, so a facade
/// value's behavior is fixed for its whole lifetime.
pub struct AlgorithmFacade {
    join: JoinFn,
    search: SearchFn,
    sort: SortFn,
}

impl AlgorithmFacade {
    pub fn new(
        join: impl Fn(&[String], &str) -> String + 'static,
        search: impl Fn(&[String], &str) -> Option<usize> + 'static,
        sort: impl Fn(&[String]) -> Vec<String> + 'static,
    ) -> Self {
        AlgorithmFacade {
            join: Box::new(join),
            search: Box::new(search),
            sort: Box::new(sort),
        }
    }
}

impl Algorithms for AlgorithmFacade {
    fn join(&self, elements: &[String], separator: &str) -> String {
        (self.join)(elements, separator)
    }

    fn search(&self, elements: &[String], target: &str) -> Option<usize> {
        (self.search)(elements, target)
    }

    fn sort(&self, elements: &[String]) -> Vec<String> {
        (self.sort)(elements)
    }
}

/// Functions returning functions: every call of the returned constructor
/// mints a fresh facade value over the same three algorithms.
pub fn facade_factory(
    join: impl Fn(&[String], &str) -> String + Clone + 'static,
    search: impl Fn(&[String], &str) -> Option<usize> + Clone + 'static,
    sort: impl Fn(&[String]) -> Vec<String> + Clone + 'static,
) -> impl Fn() -> AlgorithmFacade {
    move || {
        debug!("creating a fresh facade value");
        AlgorithmFacade::new(join.clone(), search.clone(), sort.clone())
    }
}

struct SortOverride<A, F> {
    base: A,
    sort: F,
}

impl<A, F> Algorithms for SortOverride<A, F>
where
    A: Algorithms,
    F: Fn(&[String]) -> Vec<String>,
{
    fn join(&self, elements: &[String], separator: &str) -> String {
        self.base.join(elements, separator)
    }

    fn search(&self, elements: &[String], target: &str) -> Option<usize> {
        self.base.search(elements, target)
    }

    fn sort(&self, elements: &[String]) -> Vec<String> {
        (self.sort)(elements)
    }
}

/// The decorator: wraps `base`, overrides `sort` and delegates the rest.
///
/// Pass `&base` to keep the base usable afterwards; only the wrapper
/// carries the overridden behavior.
pub fn with_sort<A, F>(base: A, sort: F) -> impl Algorithms
where
    A: Algorithms,
    F: Fn(&[String]) -> Vec<String>,
{
    SortOverride { base, sort }
}

#[cfg(test)]
mod tests {
    use crate::algorithms;

    use super::{facade_factory, with_sort, AlgorithmFacade, Algorithms};

    fn elements() -> Vec<String> {
        ["c", "b", "a"].map(String::from).to_vec()
    }

    fn facade() -> AlgorithmFacade {
        AlgorithmFacade::new(algorithms::join, algorithms::search, algorithms::sort)
    }

    #[test]
    fn test_facade_round_trip() {
        let facade = facade();
        let elements = elements();

        assert_eq!(facade.join(&elements, ","), "c,b,a");
        assert_eq!(facade.search(&elements, "b"), Some(1));
        assert_eq!(facade.sort(&elements), ["a", "b", "c"].map(String::from).to_vec());
    }

    #[test]
    fn test_facade_methods_match_the_supplied_algorithms() {
        let facade = facade();
        let elements = elements();

        assert_eq!(facade.join(&elements, ","), algorithms::join(&elements, ","));
        assert_eq!(facade.search(&elements, "b"), algorithms::search(&elements, "b"));
        assert_eq!(facade.sort(&elements), algorithms::sort(&elements));
    }

    #[test]
    fn test_factory_mints_independent_values() {
        let create_facade = facade_factory(algorithms::join, algorithms::search, algorithms::sort);
        let elements = elements();

        assert_eq!(create_facade().join(&elements, ","), "c,b,a");
        assert_eq!(create_facade().search(&elements, "b"), Some(1));
    }

    #[test]
    fn test_decorated_facade_leaves_the_base_untouched() {
        let base = facade();
        let decorated = with_sort(&base, |elements: &[String]| elements.to_vec());
        let elements = elements();

        // the copy skips sorting, the base still sorts
        assert_eq!(decorated.sort(&elements), elements);
        assert_eq!(base.sort(&elements), ["a", "b", "c"].map(String::from).to_vec());

        // the untouched operations delegate to the base
        assert_eq!(decorated.join(&elements, ","), "c,b,a");
        assert_eq!(decorated.search(&elements, "b"), Some(1));
    }
}
