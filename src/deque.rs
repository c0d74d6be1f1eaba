use crate::error::Error;
use crate::iter::{Drain, Iter};
use crate::slot::Slot;
use std::fmt;
use std::iter::FromIterator;
use std::usize;

/// A deque that supports adding and removing items at the front and
/// the back in constant time, and iterating over the items from front
/// to back.
pub struct Deque<T> {
    // Index of the first slot on the free list. MAX when the
    // free list is empty.
    free_list: usize,
    // The index of the front of the deque. MAX when the deque is empty.
    pub(crate) front: usize,
    // The index of the back of the deque. MAX when the deque is empty.
    pub(crate) back: usize,
    // The number of slots currently holding items.
    len_used: usize,
    // The number of slots currently on the free list.
    len_free: usize,
    // The memory used to back the linked structure.
    pub(crate) slots: Vec<Slot<T>>,
}

impl<T> fmt::Debug for Deque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Deque<T> {
        Deque::new()
    }
}

impl<T> Deque<T> {
    /// Creates an empty `Deque`. No allocations are performed until
    /// items are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::new();
    /// ```
    pub fn new() -> Deque<T> {
        Deque {
            free_list: usize::MAX,
            front: usize::MAX,
            back: usize::MAX,
            len_used: 0,
            len_free: 0,
            slots: Vec::new(),
        }
    }

    /// Create a new `Deque` instance with a free list at least
    /// `capacity` slots deep.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::with_capacity(16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Deque<T> {
        let mut vec = Vec::with_capacity(capacity);

        let mut next = usize::MAX;
        for i in 0..capacity {
            vec.push(Slot::new_free(next));
            next = i;
        }

        Deque {
            free_list: next,
            front: usize::MAX,
            back: usize::MAX,
            len_used: 0,
            len_free: capacity,
            slots: vec,
        }
    }

    /// Reserves capacity for at least `additional` more items to be
    /// inserted into the given `Deque`. Note: this only expands the
    /// size of the underlying `Vec`. It does not add the reserved
    /// slots to the free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u32> = Deque::new();
    /// d.reserve(16);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional)
    }

    /// Returns how many items could be held without resizing the
    /// internal vector. Note: this is not necessarily `len() + len_freelist()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let d: Deque<u8> = Deque::with_capacity(16);
    /// assert_eq!(16, d.capacity());
    /// ```
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The number of items in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_front(1);
    /// d.push_back(2);
    /// assert_eq!(2, d.len());
    ///
    /// d.pop_front().unwrap();
    /// assert_eq!(1, d.len());
    /// ```
    pub fn len(&self) -> usize {
        self.len_used
    }

    /// True when the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// assert!(d.is_empty());
    ///
    /// d.push_front(1);
    /// assert!(!d.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        0 == self.len_used
    }

    /// The number of slots on the deque's free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// assert_eq!(0, d.len_freelist());
    ///
    /// d.push_front(1);
    /// assert_eq!(0, d.len_freelist());
    ///
    /// d.pop_front().unwrap();
    /// assert_eq!(1, d.len_freelist());
    ///
    /// d.push_front(2);
    /// assert_eq!(0, d.len_freelist());
    /// ```
    pub fn len_freelist(&self) -> usize {
        self.len_free
    }

    /// Insert `item` into the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_front(10);
    /// d.push_front(20);
    ///
    /// assert_eq!(Some(&20), d.front());
    /// assert_eq!(Some(&10), d.back());
    /// ```
    pub fn push_front(&mut self, item: T) {
        let new_ix = self.allocate(usize::MAX, self.front, item);

        // Update the old front of the deque so that it points to the
        // new front we just inserted.
        if usize::MAX != self.front {
            self.slots[self.front]
                .get_used_mut()
                .unwrap()
                .set_front(new_ix);
        }
        // Repoint the front of the deque at the new front we just
        // inserted.
        self.front = new_ix;

        // If the back was not yet set, set it to the front.
        if usize::MAX == self.back {
            self.back = new_ix;
        }
    }

    /// Insert `item` into the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(10);
    /// d.push_back(20);
    ///
    /// assert_eq!(Some(&10), d.front());
    /// assert_eq!(Some(&20), d.back());
    /// ```
    pub fn push_back(&mut self, item: T) {
        let new_ix = self.allocate(self.back, usize::MAX, item);

        // Update the old back of the deque so that it points to the
        // new back we just inserted.
        if usize::MAX != self.back {
            self.slots[self.back]
                .get_used_mut()
                .unwrap()
                .set_back(new_ix);
        }
        // Repoint the back of the deque at the new back we just
        // inserted.
        self.back = new_ix;

        // If the front was not yet set, set it to the back.
        if usize::MAX == self.front {
            self.front = new_ix;
        }
    }

    /// Insert a possibly absent item into the front of the deque.
    /// Absent items are rejected with [`Error::AbsentItem`] and the
    /// deque is left unchanged.
    ///
    /// This is the entry point for callers whose items come from a
    /// source that can fail to produce a value; callers holding a
    /// plain `T` should use [`push_front`] instead.
    ///
    /// [`push_front`]: struct.Deque.html#method.push_front
    /// [`Error::AbsentItem`]: enum.Error.html#variant.AbsentItem
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    ///
    /// assert_eq!(Ok(()), d.try_push_front(Some(10)));
    /// assert_eq!(Err(Error::AbsentItem), d.try_push_front(None));
    /// assert_eq!(1, d.len());
    /// ```
    pub fn try_push_front(&mut self, item: Option<T>) -> Result<(), Error> {
        match item {
            Some(item) => {
                self.push_front(item);
                Ok(())
            }
            None => Err(Error::AbsentItem),
        }
    }

    /// Insert a possibly absent item into the back of the deque.
    /// Absent items are rejected with [`Error::AbsentItem`] and the
    /// deque is left unchanged.
    ///
    /// [`Error::AbsentItem`]: enum.Error.html#variant.AbsentItem
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    ///
    /// assert_eq!(Ok(()), d.try_push_back(Some(10)));
    /// assert_eq!(Err(Error::AbsentItem), d.try_push_back(None));
    /// assert_eq!(1, d.len());
    /// ```
    pub fn try_push_back(&mut self, item: Option<T>) -> Result<(), Error> {
        match item {
            Some(item) => {
                self.push_back(item);
                Ok(())
            }
            None => Err(Error::AbsentItem),
        }
    }

    /// Remove the front of the deque and return it. If the deque is
    /// empty, [`Error::Empty`] is returned and nothing changes.
    ///
    /// [`Error::Empty`]: enum.Error.html#variant.Empty
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// d.push_back(10);
    /// d.push_back(20);
    ///
    /// assert_eq!(Ok(10), d.pop_front());
    /// assert_eq!(Ok(20), d.pop_front());
    /// assert_eq!(Err(Error::Empty), d.pop_front());
    /// ```
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if usize::MAX != self.front {
            Ok(self.remove_unchecked(self.front))
        } else {
            Err(Error::Empty)
        }
    }

    /// Remove the back of the deque and return it. If the deque is
    /// empty, [`Error::Empty`] is returned and nothing changes.
    ///
    /// [`Error::Empty`]: enum.Error.html#variant.Empty
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::{Deque, Error};
    ///
    /// let mut d = Deque::new();
    /// d.push_front(10);
    /// d.push_front(20);
    ///
    /// assert_eq!(Ok(10), d.pop_back());
    /// assert_eq!(Ok(20), d.pop_back());
    /// assert_eq!(Err(Error::Empty), d.pop_back());
    /// ```
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if usize::MAX != self.back {
            Ok(self.remove_unchecked(self.back))
        } else {
            Err(Error::Empty)
        }
    }

    /// Get the front item of the deque. If the deque is empty, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(10);
    ///
    /// assert_eq!(Some(&10), d.front());
    /// ```
    pub fn front(&self) -> Option<&T> {
        if usize::MAX != self.front {
            Some(self.slots[self.front].get_used().unwrap().item())
        } else {
            None
        }
    }

    /// Get the front item of the deque as a mutable reference. If the
    /// deque is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_back(10);
    ///
    /// d.front_mut().map(|i| *i += 10);
    ///
    /// assert_eq!(Some(&20), d.front());
    /// ```
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if usize::MAX != self.front {
            Some(self.slots[self.front].get_used_mut().unwrap().item_mut())
        } else {
            None
        }
    }

    /// Get the back item of the deque. If the deque is empty, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_front(10);
    ///
    /// assert_eq!(Some(&10), d.back());
    /// ```
    pub fn back(&self) -> Option<&T> {
        if usize::MAX != self.back {
            Some(self.slots[self.back].get_used().unwrap().item())
        } else {
            None
        }
    }

    /// Get the back item of the deque as a mutable reference. If the
    /// deque is empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.push_front(10);
    ///
    /// d.back_mut().map(|i| *i += 10);
    ///
    /// assert_eq!(Some(&20), d.back());
    /// ```
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if usize::MAX != self.back {
            Some(self.slots[self.back].get_used_mut().unwrap().item_mut())
        } else {
            None
        }
    }

    /// Drop every item in the deque and move all used slots onto the
    /// free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    ///
    /// d.clear();
    /// assert!(d.is_empty());
    /// assert_eq!(2, d.len_freelist());
    /// ```
    pub fn clear(&mut self) {
        self.drain().for_each(drop);
    }

    /// Create an iterator over the deque starting from the front.
    /// Each call starts a fresh traversal of the links as they are at
    /// that moment; the deque cannot be mutated while the iterator is
    /// alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// d.push_back(3);
    ///
    /// let v: Vec<&u8> = d.iter().collect();
    /// assert_eq!(vec![&1, &2, &3], v);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self, self.front)
    }

    /// A draining iterator starting from the front position. All
    /// drained slots are moved onto the free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// d.push_back(3);
    ///
    /// let v: Vec<u8> = d.drain().collect();
    /// assert_eq!(vec![1, 2, 3], v);
    /// assert_eq!(3, d.len_freelist());
    /// ```
    pub fn drain(&mut self) -> Drain<T> {
        Drain::new(self, self.front)
    }

    fn remove_unchecked(&mut self, ix: usize) -> T {
        let used = self.slots[ix].get_used().unwrap();
        let (front, back) = (used.front(), used.back());

        if self.front == ix {
            debug_assert_eq!(usize::MAX, front);
            self.front = back;
        } else {
            debug_assert_ne!(usize::MAX, front);
            self.slots[front].get_used_mut().unwrap().set_back(back);
        }

        if self.back == ix {
            debug_assert_eq!(usize::MAX, back);
            self.back = front;
        } else {
            debug_assert_ne!(usize::MAX, back);
            self.slots[back].get_used_mut().unwrap().set_front(front);
        }

        let (_, item, _) = self.free(ix).into_used().unwrap().take();
        item
    }

    pub(crate) fn allocate(&mut self, front: usize, back: usize, item: T) -> usize {
        self.len_used += 1;

        let s = Slot::new_used(front, back, item);

        if usize::MAX == self.free_list {
            self.slots.push(s);
            self.slots.len() - 1
        } else {
            let ix = self.free_list;
            self.free_list = self.slots[ix].get_free().unwrap().next();
            self.slots[ix] = s;
            self.len_free -= 1;
            ix
        }
    }

    pub(crate) fn free(&mut self, ix: usize) -> Slot<T> {
        debug_assert!(self.slots[ix].get_used().is_some());

        self.len_used -= 1;

        let mut v = Slot::new_free(self.free_list);
        std::mem::swap(&mut v, &mut self.slots[ix]);
        self.free_list = ix;
        self.len_free += 1;
        v
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut d = Self::new();
        for i in iter {
            d.push_back(i);
        }
        d
    }
}

impl<'l, T> IntoIterator for &'l Deque<T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T>;

    fn into_iter(self) -> Iter<'l, T> {
        self.iter()
    }
}
