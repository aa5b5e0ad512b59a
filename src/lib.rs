//! A growable FIFO queue that dequeues by advancing a front offset and only
//! compacts its backing storage once half of it has been consumed.
//!
//! ```
//! use offset_queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1).enqueue(8).push(45);
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.front(), Some(&8));
//! assert_eq!(queue.try_back(), Ok(&45));
//! ```

mod queue;

pub use queue::{EmptyQueueError, IntoIter, Iter, Queue};
