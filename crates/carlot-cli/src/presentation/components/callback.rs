use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Event sink handed to a component at construction.
pub struct Callback<T>(Rc<dyn Fn(T)>);

impl<T> Callback<T> {
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// A callback that drops every event.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn emit(&self, value: T) {
        (self.0)(value)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Per-kind sequence for element ids (`select-1`, `input-1`, `select-2`, ...).
///
/// Owned by whoever builds the components, so two screens never share a counter.
#[derive(Debug, Default)]
pub struct ElementIds {
    counters: HashMap<&'static str, u32>,
}

impl ElementIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, kind: &'static str) -> String {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        format!("{}-{}", kind, counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_element_ids_count_per_kind() {
        let mut ids = ElementIds::new();

        assert_eq!(ids.next("select"), "select-1");
        assert_eq!(ids.next("input"), "input-1");
        assert_eq!(ids.next("select"), "select-2");
    }

    #[test]
    fn test_separate_sequences_do_not_interfere() {
        let mut first = ElementIds::new();
        let mut second = ElementIds::new();

        first.next("select");
        assert_eq!(second.next("select"), "select-1");
    }

    #[test]
    fn test_cloned_callback_shares_sink() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let callback = Callback::new(move |value: u8| sink.borrow_mut().push(value));

        callback.emit(1);
        callback.clone().emit(2);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }
}
