//! Gzip payloads over the shared fixture corpora.

use std::io::{Read, Write};
use std::sync::Arc;
use std::time::Duration;

use flate2::{Compression, read::GzDecoder, write::GzEncoder};

use crate::{
    error::HarnessError,
    fixture::TextFixture,
    report,
    workload::{Operation, Workload},
};

const GZIP_LEVEL: u32 = 8;

/// Which fixture buffer a gzip payload works on. The two corpora sit at
/// opposite ends of the compressibility range.
#[derive(Debug, Clone, Copy)]
pub enum Corpus {
    /// Printable pseudo-random text, close to incompressible.
    Text,
    /// Decimal digits, highly compressible.
    Digits,
}

impl Corpus {
    fn bytes<'a>(&self, fixture: &'a TextFixture) -> &'a [u8] {
        match self {
            Corpus::Text => fixture.text(),
            Corpus::Digits => fixture.digits(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Corpus::Text => "text",
            Corpus::Digits => "digits",
        }
    }
}

fn gzip_invariant(e: std::io::Error) -> HarnessError {
    HarnessError::WorkloadInvariant(format!("gzip: {e}"))
}

/// Gzip compression of one fixture corpus into a reused per-worker buffer.
pub struct GzipCompress {
    fixture: Arc<TextFixture>,
    corpus: Corpus,
    name: String,
}

impl GzipCompress {
    pub fn new(fixture: Arc<TextFixture>, corpus: Corpus) -> Self {
        let name = format!("gzip.compress {}", corpus.label());
        Self { fixture, corpus, name }
    }
}

impl Workload for GzipCompress {
    fn name(&self) -> &str {
        &self.name
    }

    fn setup(&self) -> Result<Operation, HarnessError> {
        let fixture = Arc::clone(&self.fixture);
        let corpus = self.corpus;
        let mut out: Vec<u8> = Vec::with_capacity(corpus.bytes(&fixture).len());
        Ok(Box::new(move || {
            out.clear();
            let mut encoder = GzEncoder::new(&mut out, Compression::new(GZIP_LEVEL));
            encoder.write_all(corpus.bytes(&fixture)).map_err(gzip_invariant)?;
            encoder.finish().map_err(gzip_invariant)?;
            Ok(())
        }))
    }

    fn report(&self, total_ops: u64, duration: Duration) -> String {
        report::mib_per_sec(total_ops, self.corpus.bytes(&self.fixture).len(), duration)
    }
}

/// Gzip decoding of a corpus compressed once at construction. The decoded
/// length must round-trip exactly.
pub struct GzipDecompress {
    compressed: Arc<Vec<u8>>,
    plain_len: usize,
    name: String,
}

impl GzipDecompress {
    pub fn new(fixture: Arc<TextFixture>, corpus: Corpus) -> Result<Self, HarnessError> {
        let plain = corpus.bytes(&fixture);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(GZIP_LEVEL));
        encoder
            .write_all(plain)
            .map_err(|e| HarnessError::Config(format!("prepare gzip fixture: {e}")))?;
        let compressed = encoder
            .finish()
            .map_err(|e| HarnessError::Config(format!("prepare gzip fixture: {e}")))?;
        Ok(Self {
            compressed: Arc::new(compressed),
            plain_len: plain.len(),
            name: format!("gzip.decompress {}", corpus.label()),
        })
    }
}

impl Workload for GzipDecompress {
    fn name(&self) -> &str {
        &self.name
    }

    fn setup(&self) -> Result<Operation, HarnessError> {
        let compressed = Arc::clone(&self.compressed);
        let plain_len = self.plain_len;
        let mut out: Vec<u8> = Vec::with_capacity(plain_len);
        Ok(Box::new(move || {
            out.clear();
            let mut decoder = GzDecoder::new(compressed.as_slice());
            decoder.read_to_end(&mut out).map_err(gzip_invariant)?;
            if out.len() != plain_len {
                return Err(HarnessError::WorkloadInvariant(format!(
                    "gzip.decompress: expected {plain_len} bytes, got {}",
                    out.len()
                )));
            }
            Ok(())
        }))
    }

    fn report(&self, total_ops: u64, duration: Duration) -> String {
        report::mib_per_sec(total_ops, self.plain_len, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_then_decompress_round_trips_both_corpora() {
        let fixture = Arc::new(TextFixture::new());

        for corpus in [Corpus::Text, Corpus::Digits] {
            let mut compress =
                GzipCompress::new(Arc::clone(&fixture), corpus).setup().unwrap();
            compress().unwrap();

            let decompress = GzipDecompress::new(Arc::clone(&fixture), corpus).unwrap();
            let mut op = decompress.setup().unwrap();
            op().unwrap();
            op().unwrap();
        }
    }

    #[test]
    fn corpus_names_follow_the_corpus() {
        let fixture = Arc::new(TextFixture::new());
        assert_eq!(
            GzipCompress::new(Arc::clone(&fixture), Corpus::Text).name(),
            "gzip.compress text"
        );
        assert_eq!(
            GzipCompress::new(Arc::clone(&fixture), Corpus::Digits).name(),
            "gzip.compress digits"
        );
        assert_eq!(
            GzipDecompress::new(fixture, Corpus::Digits).unwrap().name(),
            "gzip.decompress digits"
        );
    }

    #[test]
    fn digits_corpus_compresses_tighter_than_text() {
        let fixture = Arc::new(TextFixture::new());
        let text = GzipDecompress::new(Arc::clone(&fixture), Corpus::Text).unwrap();
        let digits = GzipDecompress::new(fixture, Corpus::Digits).unwrap();
        assert!(
            digits.compressed.len() < text.compressed.len(),
            "digits={} text={}",
            digits.compressed.len(),
            text.compressed.len()
        );
    }

    #[test]
    fn reports_use_the_plain_payload_size() {
        let fixture = Arc::new(TextFixture::new());
        let workload = GzipCompress::new(fixture, Corpus::Text);
        let line = workload.report(4, Duration::from_secs(1));
        assert_eq!(line, "1.00 MiB/s");
    }
}
