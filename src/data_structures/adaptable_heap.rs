use std::fmt::Debug;

/// Stable token returned by [`AdaptableHeap::insert`].
///
/// A handle stays valid until its entry is removed by `remove_min`. Handles
/// are slot indices paired with a generation counter, so a handle to a
/// removed entry can never alias a later entry that reuses the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapHandle {
    slot: usize,
    generation: u64,
}

#[derive(Debug)]
struct Entry<P, V> {
    priority: P,
    value: V,
    /// Position of this entry's slot id inside `heap`
    heap_pos: usize,
}

#[derive(Debug)]
struct Slot<P, V> {
    generation: u64,
    entry: Option<Entry<P, V>>,
}

/// A binary min-heap with handle-based decrease-key.
///
/// Entries live in a slot arena; the heap itself is a vector of slot ids
/// ordered by priority. Each entry tracks its own heap position so that
/// `decrease_key` can sift it up from wherever it currently sits.
#[derive(Debug)]
pub struct AdaptableHeap<P, V>
where
    P: Ord + Copy + Debug,
    V: Copy + Debug,
{
    slots: Vec<Slot<P, V>>,
    free_slots: Vec<usize>,
    heap: Vec<usize>,
}

impl<P, V> AdaptableHeap<P, V>
where
    P: Ord + Copy + Debug,
    V: Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        AdaptableHeap {
            slots: Vec::new(),
            free_slots: Vec::new(),
            heap: Vec::new(),
        }
    }

    /// Creates a priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        AdaptableHeap {
            slots: Vec::with_capacity(capacity),
            free_slots: Vec::new(),
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts a (priority, value) pair and returns a handle to the entry
    pub fn insert(&mut self, priority: P, value: V) -> HeapHandle {
        let heap_pos = self.heap.len();
        let entry = Entry {
            priority,
            value,
            heap_pos,
        };

        let slot = match self.free_slots.pop() {
            Some(slot) => {
                self.slots[slot].entry = Some(entry);
                slot
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                self.slots.len() - 1
            }
        };

        self.heap.push(slot);
        let handle = HeapHandle {
            slot,
            generation: self.slots[slot].generation,
        };
        self.sift_up(heap_pos);
        handle
    }

    /// Returns the minimum (priority, value) pair without removing it
    pub fn peek(&self) -> Option<(P, V)> {
        let slot = *self.heap.first()?;
        let entry = self.slots[slot].entry.as_ref()?;
        Some((entry.priority, entry.value))
    }

    /// Removes and returns the minimum (priority, value) pair.
    ///
    /// The handle of the removed entry becomes stale.
    pub fn remove_min(&mut self) -> Option<(P, V)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        if last > 0 {
            let moved = self.heap[0];
            self.slot_entry_mut(moved).heap_pos = 0;
        }

        let slot = self.heap.pop().unwrap();
        let entry = self.slots[slot].entry.take().unwrap();
        self.slots[slot].generation += 1;
        self.free_slots.push(slot);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((entry.priority, entry.value))
    }

    /// Lowers the priority of the entry behind `handle`.
    ///
    /// Returns false without changing anything if the handle is stale (its
    /// entry was already removed) or `new_priority` is not strictly lower.
    pub fn decrease_key(&mut self, handle: HeapHandle, new_priority: P) -> bool {
        let slot = match self.slots.get_mut(handle.slot) {
            Some(slot) if slot.generation == handle.generation => slot,
            _ => return false,
        };
        let entry = match slot.entry.as_mut() {
            Some(entry) => entry,
            None => return false,
        };
        if new_priority >= entry.priority {
            return false;
        }

        entry.priority = new_priority;
        let pos = entry.heap_pos;
        self.sift_up(pos);
        true
    }

    fn slot_entry_mut(&mut self, slot: usize) -> &mut Entry<P, V> {
        self.slots[slot].entry.as_mut().unwrap()
    }

    fn priority_at(&self, pos: usize) -> P {
        let slot = self.heap[pos];
        self.slots[slot].entry.as_ref().unwrap().priority
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.priority_at(pos) >= self.priority_at(parent) {
                break;
            }
            self.swap_positions(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            let right = 2 * pos + 2;
            let mut smallest = pos;

            if left < self.heap.len() && self.priority_at(left) < self.priority_at(smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.priority_at(right) < self.priority_at(smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }

            self.swap_positions(pos, smallest);
            pos = smallest;
        }
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        let slot_a = self.heap[a];
        let slot_b = self.heap[b];
        self.slot_entry_mut(slot_a).heap_pos = a;
        self.slot_entry_mut(slot_b).heap_pos = b;
    }
}

impl<P, V> Default for AdaptableHeap<P, V>
where
    P: Ord + Copy + Debug,
    V: Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
