use std::sync::Arc;

/// Make it possible to pass a style sheet as an owned `Vec` or
/// array, or as `Arc`/`&Arc` when it is shared between several
/// component instances; in the latter case the rules are never
/// copied.
pub trait IntoArc<T> {
    fn into_arc(self) -> Arc<T>;
}

impl<T> IntoArc<T> for T {
    fn into_arc(self) -> Arc<T> {
        Arc::new(self)
    }
}
impl<T> IntoArc<T> for Arc<T> {
    fn into_arc(self) -> Arc<T> {
        self
    }
}
impl<T> IntoArc<T> for &Arc<T> {
    fn into_arc(self) -> Arc<T> {
        Arc::clone(self)
    }
}
impl<T, const N: usize> IntoArc<Vec<T>> for [T; N] {
    fn into_arc(self) -> Arc<Vec<T>> {
        Arc::new(Vec::from(self))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_sharing() {
        let shared: Arc<Vec<u8>> = Arc::new(vec![1, 2]);
        let a: Arc<Vec<u8>> = (&shared).into_arc();
        let b: Arc<Vec<u8>> = shared.clone().into_arc();
        assert!(Arc::ptr_eq(&a, &shared));
        assert!(Arc::ptr_eq(&b, &shared));
        let c: Arc<Vec<u8>> = [3, 4].into_arc();
        assert_eq!(*c, vec![3, 4]);
    }
}
