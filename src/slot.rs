pub(crate) struct Free {
    // The next free slot.
    next: usize,
}

impl Free {
    fn new(next: usize) -> Free {
        Free { next }
    }

    pub(crate) fn next(&self) -> usize {
        self.next
    }
}

pub(crate) struct Used<T> {
    // The index of the slot before this slot.
    front: usize,
    // The index of the slot after this slot.
    back: usize,
    // The contained item.
    item: T,
}

impl<T> Used<T> {
    fn new(front: usize, back: usize, item: T) -> Used<T> {
        Used { front, back, item }
    }

    pub(crate) fn front(&self) -> usize {
        self.front
    }

    pub(crate) fn set_front(&mut self, new_front: usize) {
        self.front = new_front;
    }

    pub(crate) fn back(&self) -> usize {
        self.back
    }

    pub(crate) fn set_back(&mut self, new_back: usize) {
        self.back = new_back;
    }

    pub(crate) fn take(self) -> (usize, T, usize) {
        let Used { front, back, item } = self;
        (front, item, back)
    }

    pub(crate) fn item(&self) -> &T {
        &self.item
    }

    pub(crate) fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }
}

pub(crate) enum Slot<T> {
    Free(Free),
    Used(Used<T>),
}

impl<T> Slot<T> {
    pub(crate) fn new_free(next: usize) -> Slot<T> {
        Slot::Free(Free::new(next))
    }

    pub(crate) fn new_used(front: usize, back: usize, item: T) -> Slot<T> {
        Slot::Used(Used::new(front, back, item))
    }

    pub(crate) fn get_used(&self) -> Option<&Used<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    pub(crate) fn get_used_mut(&mut self) -> Option<&mut Used<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    pub(crate) fn get_free(&self) -> Option<&Free> {
        if let Slot::Free(free) = self {
            Some(free)
        } else {
            None
        }
    }

    pub(crate) fn into_used(self) -> Option<Used<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }
}
