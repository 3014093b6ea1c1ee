//! Cross-cutting logic: language codes, preference persistence, URL
//! mirroring, resolution policy, and locale-aware formatting.

pub mod format;
pub mod language;
pub mod resolver;
pub mod storage;
pub mod url;
