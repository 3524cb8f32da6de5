//! Marker-delimited emission of file contents

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

/// Writes file sections wrapped in start/end marker lines.
///
/// Content is passed through byte-for-byte; the only insertion is a
/// newline after content that does not already end in one, so that the
/// end marker always starts on its own line.
pub struct MarkerWriter<W: Write> {
    writer: W,
    prefix: String,
    suffix: String,
}

impl<W: Write> MarkerWriter<W> {
    /// Create a marker writer with the given marker prefix and suffix
    pub fn new(writer: W, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            writer,
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Write the stream header explaining the delimiters
    pub fn header(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "Each section below represents text output from one file."
        )?;
        writeln!(
            self.writer,
            "Delimiters: {p}START:{{filename}}{s} ... {p}END:{{filename}}{s}",
            p = self.prefix,
            s = self.suffix
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// Emit one file's section, labeled with `out_path`.
    ///
    /// A file that cannot be read is reported on stderr and its section
    /// omitted; only writer failures abort the stream.
    pub fn emit(&mut self, src: &Path, out_path: &str) -> Result<()> {
        let data = match fs::read(src) {
            Ok(data) => data,
            Err(err) => {
                eprintln!("Error reading {}: {}", src.display(), err);
                return Ok(());
            }
        };

        writeln!(self.writer, "{}START:{}{}", self.prefix, out_path, self.suffix)?;
        self.writer.write_all(&data)?;
        if data.last().is_some_and(|b| *b != b'\n') {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{}END:{}{}", self.prefix, out_path, self.suffix)?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// Flush the underlying writer
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn header_format() {
        let mut buf = Vec::new();
        let mut writer = MarkerWriter::new(&mut buf, "<<<", ">>>");
        writer.header().unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Each section below represents text output from one file.\n\
             Delimiters: <<<START:{filename}>>> ... <<<END:{filename}>>>\n\n"
        );
    }

    #[test]
    fn emit_appends_newline_when_content_has_none() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f1.txt");
        fs::write(&file, "hello").unwrap();

        let mut buf = Vec::new();
        let mut writer = MarkerWriter::new(&mut buf, "<<<", ">>>");
        writer.emit(&file, "f1.txt").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "<<<START:f1.txt>>>\nhello\n<<<END:f1.txt>>>\n\n"
        );
    }

    #[test]
    fn emit_preserves_existing_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f2.txt");
        fs::write(&file, "world\n").unwrap();

        let mut buf = Vec::new();
        let mut writer = MarkerWriter::new(&mut buf, "<<<", ">>>");
        writer.emit(&file, "f2.txt").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "<<<START:f2.txt>>>\nworld\n<<<END:f2.txt>>>\n\n"
        );
    }

    #[test]
    fn emit_empty_file_inserts_no_newline() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("empty.txt");
        fs::write(&file, "").unwrap();

        let mut buf = Vec::new();
        let mut writer = MarkerWriter::new(&mut buf, "<<<", ">>>");
        writer.emit(&file, "empty.txt").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "<<<START:empty.txt>>>\n<<<END:empty.txt>>>\n\n"
        );
    }

    #[test]
    fn unreadable_file_is_skipped_without_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.txt");

        let mut buf = Vec::new();
        let mut writer = MarkerWriter::new(&mut buf, "<<<", ">>>");
        writer.emit(&missing, "gone.txt").unwrap();
        writer.finish().unwrap();

        assert!(buf.is_empty());
    }

    #[test]
    fn custom_markers_are_used_verbatim() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "a\n").unwrap();

        let mut buf = Vec::new();
        let mut writer = MarkerWriter::new(&mut buf, "[[[", "]]]");
        writer.header().unwrap();
        writer.emit(&file, "a.txt").unwrap();
        writer.finish().unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Delimiters: [[[START:{filename}]]] ... [[[END:{filename}]]]"));
        assert!(out.contains("[[[START:a.txt]]]\na\n[[[END:a.txt]]]\n\n"));
    }

    #[test]
    fn multiple_sections_stay_in_order() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "first\n").unwrap();
        fs::write(&b, "second\n").unwrap();

        let mut buf = Vec::new();
        let mut writer = MarkerWriter::new(&mut buf, "<<<", ">>>");
        writer.emit(&a, "a.txt").unwrap();
        writer.emit(&b, "b.txt").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "<<<START:a.txt>>>\nfirst\n<<<END:a.txt>>>\n\n\
             <<<START:b.txt>>>\nsecond\n<<<END:b.txt>>>\n\n"
        );
    }
}
