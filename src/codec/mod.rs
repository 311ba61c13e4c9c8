// src/codec/mod.rs

// Frame validation and decoding, pure functions of bytes.
pub mod ascii;
pub mod binary;
pub mod scanner;

// Re-export the decoding entry points
pub use ascii::decode_ascii_frame;
pub use binary::decode_binary_frame;
pub use scanner::FrameScanner;
