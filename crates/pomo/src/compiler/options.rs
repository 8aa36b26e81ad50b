use bon::Builder;

use crate::encoder::Encoder;

/// Settings shared by every file in a compilation run.
///
/// # Example
///
/// ```
/// use pomo::{ByteOrder, CompileOptions, Encoder};
///
/// let options = CompileOptions::builder()
///     .encoder(Encoder::builder().byte_order(ByteOrder::BigEndian).build())
///     .include_fuzzy(false)
///     .build();
/// assert!(!options.include_fuzzy());
/// ```
#[derive(Debug, Clone, Copy, Builder)]
pub struct CompileOptions {
    /// How catalogs are serialized.
    #[builder(default)]
    encoder: Encoder,

    /// Compile entries flagged `fuzzy`. When false they are left out of the
    /// `.mo` file, as `msgfmt` does by default; the header is always kept.
    #[builder(default = true)]
    include_fuzzy: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions::builder().build()
    }
}

impl CompileOptions {
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn include_fuzzy(&self) -> bool {
        self.include_fuzzy
    }
}
