use std::collections::VecDeque;

/// Queue kept sorted ascending by a numeric key, stable on ties
///
/// Insertion is optimized for keys that arrive nearly in order: a new
/// maximum appends after a single comparison, anything else scans back
/// from the tail for its slot. Frames from a capture source are rarely
/// more than a few positions out of order, so tail-ward scans stay short,
/// but no bound on the displacement is assumed.
pub struct SortedQueue<T> {
    items: VecDeque<(f64, T)>,
}

impl<T> SortedQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert `item` so that ascending key order is preserved. Equal keys
    /// keep their insertion order.
    pub fn enqueue(&mut self, item: T, key: f64) {
        match self.items.back() {
            Some(&(last_key, _)) if last_key > key => {}
            _ => {
                self.items.push_back((key, item));
                return;
            }
        }

        let mut index = self.items.len() - 1;
        loop {
            if self.items[index].0 <= key {
                self.items.insert(index + 1, (key, item));
                return;
            }
            if index == 0 {
                break;
            }
            index -= 1;
        }

        self.items.push_front((key, item));
    }

    /// Remove and return the item with the smallest key
    pub fn remove_minimum(&mut self) -> Option<T> {
        self.items.pop_front().map(|(_, item)| item)
    }

    /// Drain every item ascending by key, emptying the queue
    pub fn drain_ordered(&mut self) -> Vec<T> {
        self.items.drain(..).map(|(_, item)| item).collect()
    }
}

impl<T> Default for SortedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
