//! Constants shared by the catalog view and its pagination.

pub const PAGE_SIZE: u64 = 12;
