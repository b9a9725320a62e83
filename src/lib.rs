//! Render a text tree diagram of a filesystem directory, excluding entries
//! by base name at any depth.
//!
//! ```no_run
//! use dirtree::exclude::Exclusions;
//! use dirtree::tree;
//!
//! let out = tree::render(".", &Exclusions::new(["node_modules"]));
//! print!("{}", out);
//! ```

pub mod exclude;
pub mod tree;
