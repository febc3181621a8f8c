//! Buckwalter transliteration for structured Arabic text.
//! This crate owns the letter/mark model and both codec schemes.

pub mod builder;
pub mod encoding;
pub mod logging;
pub mod model;

pub use builder::TextBuilder;
pub use encoding::canonical::{canonicalize, SymbolSlots, SLOT_COUNT};
pub use encoding::decoder::{DecodeError, DecodeResult, MalformedReason};
pub use encoding::table::{FusionEntry, FusionKind, SymbolTable, BASE_TABLE, EXTENDED_TABLE};
pub use encoding::{BaseEncoding, Encoding, ExtendedEncoding, SlotOrder};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::letter::{
    BuildError, BuildResult, Letter, LetterKind, MarkGroup, MarkKind, MarkSet,
};
pub use model::text::Text;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
