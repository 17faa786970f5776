//! Front matter extraction from markdown documents

use pulldown_cmark::{Event, MetadataBlockKind, Options, Parser as MdParser, Tag, TagEnd};
use serde_yaml::{Mapping, Value};

/// Syntax of a front matter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    /// `---` delimited YAML
    Yaml,
    /// `+++` delimited TOML
    Toml,
}

impl FrontMatterFormat {
    fn closing_delimiters(&self) -> &'static [&'static str] {
        match self {
            FrontMatterFormat::Yaml => &["---", "..."],
            FrontMatterFormat::Toml => &["+++"],
        }
    }
}

/// Raw front matter block of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub format: FrontMatterFormat,
    pub raw: String,
}

impl FrontMatter {
    /// Parse the block into a key/value mapping.
    ///
    /// TOML blocks are converted into the YAML value model so both formats
    /// validate through the same schema code.
    pub fn parse(&self) -> Result<Mapping, String> {
        let value = match self.format {
            FrontMatterFormat::Yaml => serde_yaml::from_str::<Value>(&self.raw)
                .map_err(|e| format!("invalid YAML front matter: {}", e))?,
            FrontMatterFormat::Toml => {
                let table = toml::from_str::<toml::Table>(&self.raw)
                    .map_err(|e| format!("invalid TOML front matter: {}", e))?;
                serde_yaml::to_value(table)
                    .map_err(|e| format!("unsupported TOML front matter: {}", e))?
            }
        };

        match value {
            Value::Mapping(mapping) => Ok(mapping),
            Value::Null => Err("front matter is empty".to_string()),
            _ => Err("front matter must be a mapping of fields".to_string()),
        }
    }
}

/// Split a document into its front matter block and the remaining body.
///
/// A leading byte-order mark is ignored, as are blank lines directly after
/// the opening delimiter. Returns `None` when the document does not open
/// with a metadata block.
pub fn split_front_matter(content: &str) -> Option<(FrontMatter, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    // The markdown parser refuses a metadata block whose first line is blank
    let opening = content.split_inclusive('\n').next()?;
    if !matches!(opening.trim_end(), "---" | "+++") {
        return None;
    }
    let inner = content[opening.len()..].trim_start_matches(|c| c == '\r' || c == '\n');
    let normalized = format!("{}{}", opening, inner);

    let options =
        Options::ENABLE_YAML_STYLE_METADATA_BLOCKS | Options::ENABLE_PLUSES_DELIMITED_METADATA_BLOCKS;
    let mut events = MdParser::new_ext(&normalized, options);

    let format = match events.next()? {
        Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => FrontMatterFormat::Yaml,
        Event::Start(Tag::MetadataBlock(MetadataBlockKind::PlusesStyle)) => {
            FrontMatterFormat::Toml
        }
        _ => return None,
    };

    let mut raw = String::new();
    for event in events {
        match event {
            Event::Text(text) => raw.push_str(&text),
            Event::End(TagEnd::MetadataBlock(_)) => break,
            _ => {}
        }
    }

    let body = body_after_block(content, format);
    Some((FrontMatter { format, raw }, body))
}

/// Locate the closing delimiter line and return everything after it
fn body_after_block(content: &str, format: FrontMatterFormat) -> &str {
    let closing = format.closing_delimiters();
    let mut offset = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        offset += line.len();
        if index == 0 {
            continue;
        }
        if closing.contains(&line.trim_end()) {
            return content[offset..].trim_start_matches(|c| c == '\r' || c == '\n');
        }
    }

    ""
}
