//! Data layer: core types, CSV codec, filtering and file I/O.
//!
//! Architecture:
//! ```text
//!   .csv file / text
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read bytes, reject empty input
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  codec    │  decode text → Grid, encode Grid → text
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  column / operator / value → header + matching rows
//!   └──────────┘
//! ```

pub mod codec;
pub mod filter;
pub mod loader;
pub mod model;
