// The core module contains the document logic that doesn't care about HTTP
// or the tool host. Each feature gets its own submodule.

#[path = "docs/mod.rs"]
pub mod docs;

#[path = "tools/mod.rs"]
pub mod tools;
