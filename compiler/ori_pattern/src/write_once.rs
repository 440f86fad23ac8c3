//! Single-assignment slots for checker-derived facts.

/// A slot that starts empty and may be written exactly once.
///
/// Reading an empty slot or writing a full one is a contract violation by
/// the caller and panics at the call site.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct WriteOnce<T>(Option<T>);

impl<T> Default for WriteOnce<T> {
    fn default() -> Self {
        WriteOnce(None)
    }
}

impl<T> From<Option<T>> for WriteOnce<T> {
    fn from(value: Option<T>) -> Self {
        WriteOnce(value)
    }
}

impl<T: Copy> WriteOnce<T> {
    #[inline]
    pub(crate) const fn is_set(&self) -> bool {
        self.0.is_some()
    }

    #[inline]
    pub(crate) fn get(&self) -> Option<T> {
        self.0
    }

    /// Read the value; `field` names it in the panic message.
    #[inline]
    #[track_caller]
    pub(crate) fn read(&self, field: &str) -> T {
        match self.0 {
            Some(value) => value,
            None => panic!("{field} read before it was set"),
        }
    }

    /// Write the value; `field` names it in the panic message.
    #[inline]
    #[track_caller]
    pub(crate) fn set(&mut self, value: T, field: &str) {
        if self.0.is_some() {
            panic!("{field} set more than once");
        }
        self.0 = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let slot: WriteOnce<u32> = WriteOnce::default();
        assert!(!slot.is_set());
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn test_set_then_read() {
        let mut slot = WriteOnce::default();
        slot.set(5_u32, "index");
        assert!(slot.is_set());
        assert_eq!(slot.read("index"), 5);
    }

    #[test]
    #[should_panic(expected = "index read before it was set")]
    fn test_read_empty_panics() {
        let slot: WriteOnce<u32> = WriteOnce::default();
        let _ = slot.read("index");
    }

    #[test]
    #[should_panic(expected = "index set more than once")]
    fn test_second_write_panics() {
        let mut slot = WriteOnce::from(Some(1_u32));
        slot.set(2, "index");
    }
}
