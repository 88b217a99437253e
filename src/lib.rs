//! Monte Carlo Tree Search engine for two-player, perfect-information,
//! zero-sum games.
//!
//! The search core is game-agnostic: plug in a position oracle
//! ([`environment::Environment`]) and a heuristic fallback
//! ([`evaluation::Evaluate`]) and drive it through [`Engine`] or
//! [`search::find_best_move`]. A small built-in game ([`takeaway`]) exercises
//! the whole stack end-to-end.

#![warn(missing_docs, variant_size_differences)]
// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
// Performance is extremely important.
#![deny(clippy::perf)]

pub mod environment;
pub mod evaluation;
pub mod search;
pub mod takeaway;

mod engine;
pub use engine::Engine;
use shadow_rs::shadow;

shadow!(build);

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the engine version and build on startup.
pub fn print_engine_info() {
    println!("Tanto MCTS engine {}", engine_version());
    println!("Release build: {}", !shadow_rs::is_debug());
}
