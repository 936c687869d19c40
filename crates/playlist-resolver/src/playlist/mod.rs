mod assembler;
mod entry;
mod tokenizer;

pub use assembler::{Banner, PLAYLIST_MARKER, PlaylistAssembler, TIMESTAMP_FORMAT};
pub use entry::{PlaylistEntry, ResolvedEntry};
pub use tokenizer::{ADDRESS_MARKER, DIRECTIVE_MARKER, parse_entries};
