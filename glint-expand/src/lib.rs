// glint-expand - glob import expansion for the glint compiler
// Rewrites wildcard import statements into concrete module imports

pub mod collision;
pub mod config;
pub mod error;
pub mod ident;
pub mod path;
mod pattern;
pub mod resolver;
pub mod rewrite;
pub mod synthesize;

pub use config::ExpandOptions;
pub use error::ExpandError;
pub use ident::{identifierfy, memberify, IdentifierOptions};
pub use resolver::{has_glob_magic, ChildModule, GlobResolver, GLOB_PREFIX};
pub use rewrite::{ImportRewriter, Rewrite, StatementEditor};
pub use synthesize::synthesize;
