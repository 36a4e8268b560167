//! # Algolab: Classic Data-Structure and Algorithm Kernels
//!
//! This crate collects the classic lab kernels as small, independently usable
//! library operations with checked inputs and descriptive errors.
//!
//! ## Key Features
//!
//! - **Chained hash table**: fixed bucket count, forward-chaining collision
//!   resolution, pluggable bucket-index strategy
//! - **Linked queue**: owned singly linked FIFO without unsafe code
//! - **Expression evaluation**: shunting-yard infix-to-postfix conversion and
//!   operand-stack evaluation with three bracket kinds
//! - **Grid transforms**: concentric ring rotation, row rotation, 2x2 block
//!   compression, zigzag traversal, column deltas, arena scoring
//! - **Demonstration sorts**: bubble, selection, and merge of sorted arrays
//!
//! ## Quick Start
//!
//! ```rust
//! use algolab::{
//!     containers::{ChainedHashMap, OffsetModIndex},
//!     expr::evaluate,
//!     grid::{rotate_secret, Grid},
//!     sorting::merge_sorted,
//! };
//!
//! // Forward-chaining hash table with the lab's h(key) = (key + 3) % 6
//! let mut table = ChainedHashMap::with_index(6, OffsetModIndex { offset: 3 })?;
//! table.insert(4, "Rafi");
//! assert_eq!(table.remove(&4), Some("Rafi"));
//!
//! // Two-stack expression pipeline
//! let eval = evaluate("3 + 5 * (2 - 8)")?;
//! assert_eq!((eval.postfix.as_str(), eval.value), ("3 5 2 8 - * +", -27));
//!
//! // Ring rotation of a character grid
//! let mut board = Grid::from_rows(vec![
//!     vec!['T', 'A', 'U', 'S'],
//!     vec!['A', 'R', 'I', '.'],
//!     vec!['D', 'T', 'T', 'N'],
//!     vec!['S', 'C', 'F', 'U'],
//! ])?;
//! assert_eq!(rotate_secret(&mut board)?, "DATASTRUCTISFUN.");
//!
//! // Linear merge of pre-sorted arrays
//! assert_eq!(merge_sorted(&[1, 3], &[2, 4]), vec![1, 2, 3, 4]);
//! # Ok::<(), algolab::AlgolabError>(())
//! ```

#![warn(missing_docs)]

pub mod containers;
pub mod error;
pub mod expr;
pub mod grid;
pub mod sorting;
pub mod string;

// Re-export core types
pub use containers::{ChainedHashMap, LinkedQueue, OffsetModIndex};
pub use error::{AlgolabError, Result};
pub use expr::{evaluate, Evaluation};
pub use grid::{rotate_secret, Grid};
pub use string::remove_consecutive_duplicates;
