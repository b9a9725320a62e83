//! dirtree — print a tree diagram of the current directory, skipping
//! vendor and cache clutter (`node_modules`, `.git`, `__pycache__`).
//!
//! The invocation is fixed: render `.` with the built-in exclusion set and
//! write the result to stdout. Exclusions and the root are library-level
//! parameters (`tree::render`), not flags.

use dirtree::exclude::Exclusions;
use dirtree::tree;

fn main() {
    // warn level by default; use RUST_LOG=debug for traversal detail
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    print!("{}", tree::render(".", &Exclusions::builtin()));
}
