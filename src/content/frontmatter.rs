//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

lazy_static! {
    /// A `key: value` or `key:` line; the key is a plain identifier
    static ref YAML_KEY_LINE: Regex = Regex::new(r"^([A-Za-z0-9_-]+):(\s|$)").unwrap();
}

/// Front-matter of a Markdown file: an open, order-preserving mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: IndexMap<String, Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Without front-matter the content is returned untouched.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();

        // YAML front-matter (---)
        if trimmed.starts_with("---") {
            return Ok(Self::parse_yaml(trimmed)
                .unwrap_or_else(|| (FrontMatter::default(), content)));
        }

        // JSON front-matter (;;; or {"key":)
        if trimmed.starts_with(";;;") || trimmed.starts_with('{') {
            return Self::parse_json(trimmed);
        }

        Ok((FrontMatter::default(), content))
    }

    /// `None` when the `---` block is not front-matter
    fn parse_yaml(content: &str) -> Option<(Self, &str)> {
        let rest = &content[3..];
        let rest = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest);

        // Closing fence either opens `rest` (empty block) or starts a later line
        let (yaml_content, remaining) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else {
            let end_pos = rest.find("\n---")?;
            (&rest[..end_pos], &rest[end_pos + 4..])
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Some((FrontMatter::default(), remaining));
        }

        // A thematic break followed by prose is not front-matter
        if !looks_like_yaml(yaml_content) {
            return None;
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => Some((fm, remaining)),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                None
            }
        }
    }

    fn parse_json(content: &str) -> Result<(Self, &str)> {
        // JSON front-matter ends with ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let json_content = &rest[..end_pos];
                let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

                let fm: FrontMatter = serde_json::from_str(json_content)
                    .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;

                return Ok((fm, remaining));
            }
        }

        if content.starts_with('{') {
            // Read exactly one object; the body follows it
            let mut stream =
                serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
            return match stream.next() {
                Some(Ok(fm)) => {
                    let remaining =
                        content[stream.byte_offset()..].trim_start_matches(['\n', '\r']);
                    Ok((fm, remaining))
                }
                Some(Err(e)) => Err(anyhow!("Failed to parse JSON front-matter: {}", e)),
                None => Err(anyhow!("Invalid JSON front-matter")),
            };
        }

        Err(anyhow!("Invalid JSON front-matter"))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in file order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    /// `tags` as a list, accepting a single string too
    pub fn tags(&self) -> Vec<String> {
        match self.get("tags") {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Parse the `date` field
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.get("date")
            .and_then(Value::as_str)
            .and_then(parse_date_string)
    }
}

fn looks_like_yaml(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        match YAML_KEY_LINE.captures(trimmed) {
            Some(caps) => !matches!(&caps[1], "http" | "https" | "ftp"),
            None => false,
        }
    })
}

fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_local())
}
