use crate::deque::Deque;
use crate::error::Error;
use std::usize;

/// An iterator over the deque from front to back. It is constructed
/// from the [`iter`] method on `Deque`.
///
/// Alongside the standard `Iterator` implementation, the iterator can
/// be advanced fallibly with [`try_next`], which reports running past
/// the last item as [`Error::Exhausted`].
///
/// [`iter`]: struct.Deque.html#method.iter
/// [`try_next`]: struct.Iter.html#method.try_next
/// [`Error::Exhausted`]: enum.Error.html#variant.Exhausted
pub struct Iter<'l, T> {
    target: &'l Deque<T>,
    next_index: usize,
}

impl<'l, T> Iter<'l, T> {
    pub(crate) fn new(target: &'l Deque<T>, next_index: usize) -> Self {
        Self { target, next_index }
    }

    /// Advance the iterator, reporting exhaustion as an error instead
    /// of `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d: Deque<u8> = Deque::new();
    /// d.push_back(1);
    ///
    /// let mut it = d.iter();
    /// assert_eq!(Ok(&1), it.try_next());
    /// assert_eq!(Err(Error::Exhausted), it.try_next());
    /// ```
    pub fn try_next(&mut self) -> Result<&'l T, Error> {
        self.next().ok_or(Error::Exhausted)
    }

    /// Removal through the iterator is a deliberately unimplemented
    /// capability. Calling this always fails with
    /// [`Error::Unsupported`] and never touches the deque; remove
    /// items with [`pop_front`] or [`pop_back`] instead.
    ///
    /// [`pop_front`]: struct.Deque.html#method.pop_front
    /// [`pop_back`]: struct.Deque.html#method.pop_back
    /// [`Error::Unsupported`]: enum.Error.html#variant.Unsupported
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d: Deque<u8> = Deque::new();
    /// d.push_back(1);
    ///
    /// let mut it = d.iter();
    /// assert_eq!(Err(Error::Unsupported), it.remove());
    /// ```
    pub fn remove(&mut self) -> Result<T, Error> {
        Err(Error::Unsupported)
    }
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        if usize::MAX != self.next_index {
            let r = self.target.slots[self.next_index]
                .get_used()
                .expect("self.target.slots[self.next_index] is expected to be used");
            self.next_index = r.back();
            Some(r.item())
        } else {
            None
        }
    }
}

/// A draining iterator over the deque from front to back. It is
/// constructed from the [`drain`] method on `Deque`. Every drained
/// slot is moved onto the free list.
///
/// [`drain`]: struct.Deque.html#method.drain
pub struct Drain<'l, T> {
    target: &'l mut Deque<T>,
    next_index: usize,
}

impl<'l, T> Drain<'l, T> {
    pub(crate) fn new(target: &'l mut Deque<T>, next_index: usize) -> Self {
        Self { target, next_index }
    }
}

impl<'l, T> Iterator for Drain<'l, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if usize::MAX != self.next_index {
            let r = self.target.free(self.next_index);
            let (_, item, back) = r
                .into_used()
                .expect("self.target.slots[self.next_index] is expected to be used")
                .take();
            self.next_index = back;
            Some(item)
        } else {
            None
        }
    }
}

impl<'l, T> Drop for Drain<'l, T> {
    fn drop(&mut self) {
        // Detach the remaining items so a partial drain does not
        // leave the deque pointing at freed slots.
        while self.next().is_some() {}
        self.target.front = usize::MAX;
        self.target.back = usize::MAX;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn iterator_finds_everything_in_order() {
        let mut d = Deque::new();
        d.push_front(10u8);
        d.push_front(11u8);
        d.push_front(12u8);

        assert_eq!(vec![&12, &11, &10], d.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn iterator_is_restartable() {
        let mut d = Deque::new();
        d.push_back(1u8);
        d.push_back(2u8);

        assert_eq!(vec![&1, &2], d.iter().collect::<Vec<&u8>>());
        assert_eq!(vec![&1, &2], d.iter().collect::<Vec<&u8>>());
    }

    #[test]
    fn iterator_on_empty_deque_yields_nothing() {
        let d: Deque<u8> = Deque::new();

        assert_eq!(None, d.iter().next());
        assert_eq!(Err(Error::Exhausted), d.iter().try_next());
    }

    #[test]
    fn try_next_fails_past_the_last_item() {
        let mut d = Deque::new();
        d.push_back(1u8);
        d.push_back(2u8);

        let mut it = d.iter();
        assert_eq!(Ok(&1), it.try_next());
        assert_eq!(Ok(&2), it.try_next());
        assert_eq!(Err(Error::Exhausted), it.try_next());
        assert_eq!(Err(Error::Exhausted), it.try_next());
    }

    #[test]
    fn remove_through_iterator_is_unsupported() {
        let mut d = Deque::new();
        d.push_back(1u8);
        d.push_back(2u8);

        let mut it = d.iter();
        assert_eq!(Some(&1), it.next());
        assert_eq!(Err(Error::Unsupported), it.remove());

        // The failed removal must not disturb the traversal or the
        // deque.
        assert_eq!(Some(&2), it.next());
        assert_eq!(2, d.len());
    }

    #[test]
    fn filter_can_find_items() {
        let mut d = Deque::new();
        d.push_front(10u8);
        d.push_front(11u8);
        d.push_front(12u8);

        assert_eq!(Some(&10), d.iter().filter(|i| **i == 10).next());
        assert_eq!(Some(&11), d.iter().filter(|i| **i == 11).next());
        assert_eq!(Some(&12), d.iter().filter(|i| **i == 12).next());
        assert_eq!(None, d.iter().filter(|i| **i == 13).next());
    }

    #[test]
    fn drain_finds_everything_and_leaves_slots_free() {
        let mut d = Deque::new();
        d.push_front(10u8);
        d.push_front(11u8);
        d.push_front(12u8);

        assert_eq!(0, d.len_freelist());
        assert_eq!(vec![12, 11, 10], d.drain().collect::<Vec<u8>>());
        assert_eq!(3, d.len_freelist());
        assert!(d.is_empty());
    }

    #[test]
    fn partial_drain_empties_the_deque() {
        let mut d = Deque::new();
        d.push_back(1u8);
        d.push_back(2u8);
        d.push_back(3u8);

        {
            let mut drain = d.drain();
            assert_eq!(Some(1), drain.next());
        }

        assert!(d.is_empty());
        assert_eq!(3, d.len_freelist());
        assert_eq!(None, d.front());
        assert_eq!(None, d.back());
    }
}
