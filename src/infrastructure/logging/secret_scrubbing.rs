use regex::Regex;
use std::fmt;
use std::io;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

/// Redacts credentials from formatted log output
#[derive(Clone)]
pub struct SecretScrubber {
    github_token_pattern: Regex,
    groq_key_pattern: Regex,
    sk_key_pattern: Regex,
    auth_header_pattern: Regex,
    field_pattern: Regex,
}

impl SecretScrubber {
    /// Compile the redaction patterns
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            // GitHub classic and fine-grained tokens
            github_token_pattern: Regex::new(
                r"\b(?:gh[pousr]_[A-Za-z0-9]{16,}|github_pat_[A-Za-z0-9_]{20,})",
            )?,
            // Groq API keys
            groq_key_pattern: Regex::new(r"\bgsk_[A-Za-z0-9]{16,}")?,
            // OpenAI and Anthropic keys: sk-..., sk-proj-..., sk-ant-...
            sk_key_pattern: Regex::new(r"\bsk-[A-Za-z0-9_\-]{16,}")?,
            // Authorization header values, plain or quoted as in JSON output
            auth_header_pattern: Regex::new(
                r#"(?i)\b(authorization["']?\s*[:=]\s*["']?(?:token|bearer))\s+[^\s"',}]+"#,
            )?,
            // key=value or "key": "value" pairs naming a secret
            field_pattern: Regex::new(
                r#"(?i)\b(api_key|apikey|token|secret|password)(["']?\s*[:=]\s*["']?)[^"'\s,}]+"#,
            )?,
        })
    }

    /// Scrub a message of sensitive data
    pub fn scrub(&self, message: &str) -> String {
        let scrubbed = self
            .github_token_pattern
            .replace_all(message, "[GITHUB_TOKEN_REDACTED]");
        let scrubbed = self
            .groq_key_pattern
            .replace_all(&scrubbed, "[API_KEY_REDACTED]");
        let scrubbed = self
            .sk_key_pattern
            .replace_all(&scrubbed, "[API_KEY_REDACTED]");
        let scrubbed = self
            .auth_header_pattern
            .replace_all(&scrubbed, "$1 [REDACTED]");
        self.field_pattern
            .replace_all(&scrubbed, "${1}${2}[REDACTED]")
            .into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}

/// `MakeWriter` that passes every formatted event through a [`SecretScrubber`]
#[derive(Debug, Clone)]
pub struct ScrubbingMakeWriter<M> {
    inner: M,
    scrubber: Arc<SecretScrubber>,
}

impl<M> ScrubbingMakeWriter<M> {
    pub fn new(inner: M, scrubber: Arc<SecretScrubber>) -> Self {
        Self { inner, scrubber }
    }
}

impl<'a, M> MakeWriter<'a> for ScrubbingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = ScrubbingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        ScrubbingWriter {
            inner: self.inner.make_writer(),
            scrubber: Arc::clone(&self.scrubber),
        }
    }
}

/// Writer produced by [`ScrubbingMakeWriter`]
///
/// The fmt layer hands over each event as a single buffer, so scrubbing per
/// `write` call sees whole lines.
pub struct ScrubbingWriter<W> {
    inner: W,
    scrubber: Arc<SecretScrubber>,
}

impl<W: io::Write> io::Write for ScrubbingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.inner
            .write_all(self.scrubber.scrub(&text).as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
