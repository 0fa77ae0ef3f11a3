//! Multi-key unit file document.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{UnitError, UnitResult};

/// One `[Section]` of a unit file.
///
/// Keys keep the order of their first appearance and every key holds all of
/// its values in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: IndexMap<String, Vec<String>>,
}

impl Section {
    /// All values of a key, oldest first.
    pub fn values(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Key names in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn append(&mut self, key: &str, value: String) {
        match self.entries.get_mut(key) {
            Some(values) => values.push(value),
            None => {
                self.entries.insert(key.to_string(), vec![value]);
            }
        }
    }
}

/// An ordered, section-keyed unit file where keys may carry several values.
///
/// Sections serialize in order of first appearance, keys in order of first
/// appearance within their section, and values in insertion order. Lookups
/// never create sections or keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitFile {
    sections: IndexMap<String, Section>,
}

impl UnitFile {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a unit file from disk.
    pub fn read(path: impl AsRef<Path>) -> UnitResult<Self> {
        let path = path.as_ref();
        debug!("Reading unit file {:?}", path);

        let file = File::open(path).map_err(|source| UnitError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            UnitError::Io(source) => UnitError::Read {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse unit file content held in memory.
    pub fn parse(content: &str) -> Self {
        let mut unit = Self::new();
        let mut current: Option<String> = None;
        for line in content.lines() {
            unit.parse_line(line, &mut current);
        }
        unit
    }

    /// Parse unit file content from any buffered reader, line by line.
    pub fn from_reader<R: BufRead>(reader: R) -> UnitResult<Self> {
        let mut unit = Self::new();
        let mut current: Option<String> = None;
        for line in reader.lines() {
            unit.parse_line(&line?, &mut current);
        }
        Ok(unit)
    }

    fn parse_line(&mut self, raw: &str, current: &mut Option<String>) {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            return;
        }

        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            let name = &line[1..line.len() - 1];
            self.sections.entry(name.to_string()).or_default();
            *current = Some(name.to_string());
            return;
        }

        match (current.as_deref(), line.split_once('=')) {
            (Some(section), Some((key, value))) => {
                self.append_value(section, key.trim(), value.trim());
            }
            (None, Some(_)) => trace!("Ignoring assignment outside of a section: {}", line),
            (_, None) => trace!("Ignoring malformed unit line: {}", line),
        }
    }

    /// Write the document to disk, replacing any existing file.
    pub fn write(&self, path: impl AsRef<Path>) -> UnitResult<()> {
        let path = path.as_ref();
        debug!("Writing unit file {:?}", path);

        let to_write_error = |source| UnitError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(to_write_error)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).map_err(to_write_error)?;
        writer.flush().map_err(to_write_error)?;
        Ok(())
    }

    /// Serialize into any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "{}", self)
    }

    /// Serialize to a string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The last value of a key, which overrides any earlier ones.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.get_values(section, key).last().map(String::as_str)
    }

    /// Every value of a key in order. Empty when the section or key is missing.
    pub fn get_values(&self, section: &str, key: &str) -> &[String] {
        self.sections
            .get(section)
            .map(|s| s.values(key))
            .unwrap_or_default()
    }

    /// Append a value to a key, creating the section and key when absent.
    pub fn append_value(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.section_mut(section).append(key, value.into());
    }

    /// Replace every value of a key.
    ///
    /// An existing key keeps its position among its siblings; a new key is
    /// added after them. An empty `values` removes the key.
    pub fn set_values<I, S>(&mut self, section: &str, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.delete_key(section, key);
            return;
        }

        let entries = &mut self.section_mut(section).entries;
        match entries.get_mut(key) {
            Some(existing) => *existing = values,
            None => {
                entries.insert(key.to_string(), values);
            }
        }
    }

    /// Replace a key with a single value.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.set_values(section, key, [value.into()]);
    }

    /// Remove a key and return its values. Sibling order is untouched.
    pub fn delete_key(&mut self, section: &str, key: &str) -> Vec<String> {
        self.sections
            .get_mut(section)
            .and_then(|s| s.entries.shift_remove(key))
            .unwrap_or_default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names in order of first appearance.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Key names of a section; empty when the section is missing.
    pub fn keys(&self, section: &str) -> Vec<&str> {
        self.sections
            .get(section)
            .map(|s| s.keys().collect())
            .unwrap_or_default()
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }
}

impl fmt::Display for UnitFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, section) in &self.sections {
            writeln!(f, "[{}]", name)?;
            for (key, values) in &section.entries {
                for value in values {
                    writeln!(f, "{}={}", key, value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
