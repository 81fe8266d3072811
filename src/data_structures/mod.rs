pub mod adaptable_heap;

pub use adaptable_heap::{AdaptableHeap, HeapHandle};
