/*!
 * Authenticated-identity extractor
 *
 * Responsibility:
 * - expose the verified identity (AuthCtx) to handlers
 * - keep HTTP / axum plumbing in core, the type itself in types
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
