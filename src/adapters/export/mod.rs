//! Export adapters - file formats served to the admin screen.

pub mod csv;
