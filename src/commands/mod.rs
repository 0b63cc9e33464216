//! Gitlet command implementations
//!
//! Every user-facing command lives in `porcelain`, implemented as an
//! `impl Repository` block: one file per command, each a single
//! load-mutate-persist cycle that renders its output through the
//! repository's injected writer.

pub mod porcelain;
