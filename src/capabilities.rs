//! Parser for the DDC/CI capabilities string.
//!
//! A capabilities string is a parenthesized list of named segments such as
//! `(prot(monitor)type(lcd)cmds(01 02 03 0C E3 F3)vcp(02 10 12 14(05 08 0B) 60(01 03 0F))mccs_ver(2.1))`.
//! Parsing never fails: problems are recorded in [`ParsedCapabilities::messages`]
//! and summarized by [`Validity`].

use std::collections::BTreeSet;
use std::fmt;
use log::{debug, warn};
use crate::commands::FeatureCode;
use crate::features;
use crate::version::VersionSpec;

/// How much of a capabilities string could be trusted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Validity {
    /// Parsed without problems
    Valid,
    /// Structurally sound, but some values failed validation
    Usable,
    /// Unbalanced parentheses or a segment without a value
    Invalid,
}

impl Default for Validity {
    fn default() -> Self {
        Validity::Valid
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Validity::Valid => "valid",
            Validity::Usable => "usable",
            Validity::Invalid => "invalid",
        })
    }
}

/// A feature listed in the `vcp` segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapabilitiesFeature {
    /// Feature code
    pub feature_id: FeatureCode,
    /// Text between the parentheses following the code, if any
    pub raw_value_string: Option<String>,
    /// Values the display declares for the feature, in order
    pub declared_values: Vec<u8>,
    /// False if any value token was rejected
    pub values_valid: bool,
}

impl CapabilitiesFeature {
    /// Name of the feature as defined for `version`.
    pub fn name(&self, version: VersionSpec) -> &'static str {
        features::feature_name(self.feature_id, version)
    }

    /// Declared values paired with their names from the feature's SL table.
    pub fn value_names(&self, version: VersionSpec) -> Vec<(u8, Option<&'static str>)> {
        let table = features::lookup(self.feature_id)
            .and_then(|desc| desc.version_sensitive_sl_values(version));
        self.declared_values.iter()
            .map(|&value| (value, table.and_then(|table| features::sl_value_name(table, value))))
            .collect()
    }
}

/// The result of parsing a capabilities string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCapabilities {
    /// The string as received
    pub raw_value: String,
    /// Contents of the `mccs_ver` segment
    pub mccs_version_string: Option<String>,
    /// Parsed `mccs_ver`, [`VersionSpec::UNKNOWN`] if absent or unparsable
    pub parsed_version: VersionSpec,
    /// Contents of the `model` segment
    pub model: Option<String>,
    /// Command codes from the `cmds` segment
    pub commands: BTreeSet<u8>,
    /// Features from the `vcp` segment, in order
    pub features: Vec<CapabilitiesFeature>,
    /// Overall validity
    pub validity: Validity,
    /// Diagnostics collected while parsing
    pub messages: Vec<String>,
}

impl ParsedCapabilities {
    /// The feature record for `code`.
    pub fn feature(&self, code: FeatureCode) -> Option<&CapabilitiesFeature> {
        self.features.iter().find(|f| f.feature_id == code)
    }

    /// Whether the `vcp` segment lists `code`.
    pub fn has_feature(&self, code: FeatureCode) -> bool {
        self.feature(code).is_some()
    }

    /// Whether the `cmds` segment lists `command`.
    pub fn has_command(&self, command: u8) -> bool {
        self.commands.contains(&command)
    }

    /// Feature codes in the order listed.
    pub fn feature_codes(&self) -> Vec<FeatureCode> {
        self.features.iter().map(|f| f.feature_id).collect()
    }

    fn degrade(&mut self, validity: Validity, message: String) {
        warn!("capabilities: {}", message);
        if validity > self.validity {
            self.validity = validity;
        }
        self.messages.push(message);
    }
}

/// Position in the string being parsed.
struct Cursor<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Cursor {
            s: s,
            pos: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.s[self.pos..]
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.s.len()
    }

    fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.pos).cloned()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().map(|c| c.is_ascii_whitespace()).unwrap_or(false) {
            self.pos += 1;
        }
    }

    /// Advances past bytes not in `stop`, returning them.
    fn take_until(&mut self, stop: &[u8]) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if stop.contains(&c) {
                break
            }
            self.pos += 1;
        }
        &self.s[start..self.pos]
    }

    /// With the cursor on `(`, returns the text up to the matching `)` and
    /// moves past it. Leaves the cursor alone when the parenthesis is
    /// unterminated.
    fn parenthesized(&mut self) -> Option<&'a str> {
        let close = find_matching_close_paren(self.s, self.pos)?;
        let inner = &self.s[self.pos + 1..close];
        self.pos = close + 1;
        Some(inner)
    }
}

/// Index of the `)` matching the `(` at `open`, if balanced.
pub fn find_matching_close_paren(s: &str, open: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None
    }

    let mut depth = 0usize;
    for (idx, &c) in bytes.iter().enumerate().skip(open) {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx)
                }
            },
            _ => (),
        }
    }

    None
}

fn parse_hex_byte(token: &str) -> Option<u8> {
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None
    }

    u8::from_str_radix(token, 16).ok()
}

/// Parses the value of a `cmds` segment into `caps.commands`.
pub fn parse_cmds_segment(caps: &mut ParsedCapabilities, value: &str) {
    for token in value.split_whitespace() {
        match parse_hex_byte(token) {
            Some(cmd) => {
                caps.commands.insert(cmd);
            },
            None => caps.degrade(Validity::Usable, format!("invalid command code {:?} in cmds segment", token)),
        }
    }
}

/// Parses a feature's value list. Nested groups are kept in the raw string only.
fn parse_feature_values(caps: &mut ParsedCapabilities, code: FeatureCode, value: &str) -> CapabilitiesFeature {
    let mut feature = CapabilitiesFeature {
        feature_id: code,
        raw_value_string: Some(value.to_owned()),
        declared_values: Vec::new(),
        values_valid: true,
    };

    let mut cursor = Cursor::new(value);
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => break,
            Some(b'(') => match cursor.parenthesized() {
                Some(nested) => debug!("feature 0x{:02x}: skipping nested values ({})", code, nested),
                None => {
                    feature.values_valid = false;
                    caps.degrade(Validity::Usable, format!("unbalanced value list for feature 0x{:02x}", code));
                    break
                },
            },
            Some(_) => {
                let token = cursor.take_until(b" \t\r\n(");
                match parse_hex_byte(token) {
                    Some(v) if feature.declared_values.contains(&v) => {
                        feature.values_valid = false;
                        caps.degrade(Validity::Usable, format!("duplicate value {:02X} for feature 0x{:02x}", v, code));
                    },
                    Some(v) => feature.declared_values.push(v),
                    None => {
                        feature.values_valid = false;
                        caps.degrade(Validity::Usable, format!("invalid value {:?} for feature 0x{:02x}", token, code));
                    },
                }
            },
        }
    }

    feature
}

/// Parses the value of a `vcp` segment into `caps.features`.
///
/// Returns `false` on an unterminated value list, which ends the parse.
pub fn parse_vcp_segment(caps: &mut ParsedCapabilities, value: &str) -> bool {
    let mut cursor = Cursor::new(value);
    loop {
        cursor.skip_whitespace();
        if cursor.is_empty() {
            return true
        }

        let token = cursor.take_until(b" \t\r\n(");
        let code = if token.len() == 2 { parse_hex_byte(token) } else { None };
        if code.is_none() {
            caps.degrade(Validity::Usable, format!("invalid feature code {:?} in vcp segment", token));
        }

        let values = if cursor.peek() == Some(b'(') {
            match cursor.parenthesized() {
                Some(values) => Some(values),
                None => {
                    caps.degrade(Validity::Invalid, format!("unterminated value list after feature {:?}", token));
                    return false
                },
            }
        } else {
            None
        };

        let code = match code {
            Some(code) => code,
            None => continue,
        };

        if features::lookup(code).is_none() && code < 0xe0 {
            caps.degrade(Validity::Usable, format!("unrecognized feature code 0x{:02x}", code));
        }

        let feature = match values {
            Some(values) => parse_feature_values(caps, code, values),
            None => CapabilitiesFeature {
                feature_id: code,
                raw_value_string: None,
                declared_values: Vec::new(),
                values_valid: true,
            },
        };
        caps.features.push(feature);
    }
}

fn parse_mccs_ver(caps: &mut ParsedCapabilities, value: &str) {
    let value = value.trim();
    caps.mccs_version_string = Some(value.to_owned());
    match value.parse::<VersionSpec>() {
        Ok(version) => caps.parsed_version = version,
        Err(e) => {
            caps.parsed_version = VersionSpec::UNKNOWN;
            caps.degrade(Validity::Usable, e.to_string());
        },
    }
}

/// Parses a capabilities string.
pub fn parse_capabilities(s: &str) -> ParsedCapabilities {
    let mut caps = ParsedCapabilities {
        raw_value: s.to_owned(),
        parsed_version: VersionSpec::UNKNOWN,
        ..Default::default()
    };

    let trimmed = s.trim();
    let body = if trimmed.starts_with('(') {
        match find_matching_close_paren(trimmed, 0) {
            Some(close) => {
                let trailing = trimmed[close + 1..].trim();
                if !trailing.is_empty() {
                    caps.messages.push(format!("ignoring text after capabilities string: {:?}", trailing));
                }
                &trimmed[1..close]
            },
            None => {
                caps.degrade(Validity::Invalid, "capabilities string is missing its closing parenthesis".into());
                &trimmed[1..]
            },
        }
    } else {
        debug!("capabilities string is not enclosed in parentheses");
        caps.messages.push("capabilities string is not enclosed in parentheses".into());
        trimmed
    };

    let mut cursor = Cursor::new(body);
    loop {
        cursor.skip_whitespace();
        if cursor.is_empty() {
            break
        }

        let name = cursor.take_until(b"(").trim();
        if cursor.is_empty() {
            caps.degrade(Validity::Invalid, format!("segment {:?} has no value", name));
            break
        }

        let value = match cursor.parenthesized() {
            Some(value) => value,
            None => {
                caps.degrade(Validity::Invalid, format!("unterminated parenthesis in segment {:?}: {:?}", name, cursor.rest()));
                break
            },
        };

        match name {
            "cmds" => parse_cmds_segment(&mut caps, value),
            "vcp" | "VCP" => if !parse_vcp_segment(&mut caps, value) {
                break
            },
            "mccs_ver" => parse_mccs_ver(&mut caps, value),
            "model" => caps.model = Some(value.trim().to_owned()),
            _ => debug!("ignoring capabilities segment {:?}", name),
        }
    }

    caps
}

/// Parses a capabilities string read from a display, ignoring trailing NUL bytes.
pub fn parse_capabilities_bytes(bytes: &[u8]) -> ParsedCapabilities {
    let len = bytes.iter().rposition(|&b| b != 0).map(|idx| idx + 1).unwrap_or(0);
    parse_capabilities(&String::from_utf8_lossy(&bytes[..len]))
}

impl fmt::Display for ParsedCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "MCCS version: {}", self.mccs_version_string.as_ref().map(|s| &s[..]).unwrap_or("not present"))?;
        if let Some(ref model) = self.model {
            writeln!(f, "Model: {}", model)?;
        }
        writeln!(f, "Commands:")?;
        for &cmd in &self.commands {
            writeln!(f, "  Command: {:02x} ({})", cmd, crate::commands::command_name(cmd))?;
        }
        writeln!(f, "VCP Features:")?;
        for feature in &self.features {
            writeln!(f, "  Feature: {:02X} ({})", feature.feature_id, feature.name(self.parsed_version))?;
            let values = feature.value_names(self.parsed_version);
            if !values.is_empty() {
                writeln!(f, "    Values:")?;
                for (value, name) in values {
                    writeln!(f, "      {:02x}: {}", value, name.unwrap_or("Unrecognized value"))?;
                }
            }
        }
        if self.validity != Validity::Valid {
            writeln!(f, "Capabilities string is {}", self.validity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let caps = parse_capabilities("(cmds(01 02 03) vcp(10 12 14(05 08 0B) 60) mccs_ver(2.1))");
        assert_eq!(caps.validity, Validity::Valid, "{:?}", caps.messages);
        assert_eq!(caps.commands.iter().cloned().collect::<Vec<_>>(), vec![0x01, 0x02, 0x03]);
        assert_eq!(caps.feature_codes(), vec![0x10, 0x12, 0x14, 0x60]);
        assert_eq!(caps.feature(0x14).unwrap().declared_values, vec![0x05, 0x08, 0x0b]);
        assert_eq!(caps.feature(0x14).unwrap().raw_value_string.as_ref().map(|s| &s[..]), Some("05 08 0B"));
        assert!(caps.feature(0x10).unwrap().raw_value_string.is_none());
        assert_eq!(caps.parsed_version, VersionSpec::V21);
        assert_eq!(caps.mccs_version_string, Some("2.1".into()));
    }

    #[test]
    fn unterminated() {
        let caps = parse_capabilities("(vcp(10 20");
        assert_eq!(caps.validity, Validity::Invalid);
        assert!(!caps.messages.is_empty());
    }

    #[test]
    fn unterminated_segment_stops_parse() {
        let caps = parse_capabilities("(cmds(01) vcp(10 14(05 08) mccs_ver(2.1))");
        assert_eq!(caps.validity, Validity::Invalid);
        assert!(caps.has_command(0x01));
        assert_eq!(caps.parsed_version, VersionSpec::UNKNOWN);
    }

    #[test]
    fn missing_outer_parens() {
        let caps = parse_capabilities("prot(monitor)type(lcd)vcp(10 12)mccs_ver(2.2)");
        assert_eq!(caps.validity, Validity::Valid);
        assert_eq!(caps.feature_codes(), vec![0x10, 0x12]);
        assert_eq!(caps.parsed_version, VersionSpec::V22);
        assert!(!caps.messages.is_empty());
    }

    #[test]
    fn degrades_to_usable() {
        let caps = parse_capabilities("(cmds(01 zz) vcp(10 123 14(05 05 QQ 08)) mccs_ver(x.y))");
        assert_eq!(caps.validity, Validity::Usable);
        assert!(caps.has_command(0x01));
        assert_eq!(caps.commands.len(), 1);
        assert_eq!(caps.feature_codes(), vec![0x10, 0x14]);
        let f14 = caps.feature(0x14).unwrap();
        assert_eq!(f14.declared_values, vec![0x05, 0x08]);
        assert!(!f14.values_valid);
        assert_eq!(caps.parsed_version, VersionSpec::UNKNOWN);
        assert_eq!(caps.messages.len(), 5);
    }

    #[test]
    fn signed_hex_is_rejected() {
        let caps = parse_capabilities("(cmds(+1) vcp(+2 14(+5 08)) mccs_ver(2.1))");
        assert_eq!(caps.validity, Validity::Usable);
        assert!(caps.commands.is_empty());
        assert_eq!(caps.feature_codes(), vec![0x14]);
        let feature = caps.feature(0x14).unwrap();
        assert_eq!(feature.declared_values, vec![0x08]);
        assert!(!feature.values_valid);
        for token in &["\"+1\"", "\"+2\"", "\"+5\""] {
            assert!(caps.messages.iter().any(|m| m.contains(token)), "{} in {:?}", token, caps.messages);
        }
    }

    #[test]
    fn nested_values_and_unknown_segments() {
        let caps = parse_capabilities("(prot(monitor) VCP(02 72(78 (00 10) 80) DF E1) model(X27) mswhql(1))");
        assert_eq!(caps.validity, Validity::Valid, "{:?}", caps.messages);
        assert_eq!(caps.feature_codes(), vec![0x02, 0x72, 0xdf, 0xe1]);
        assert_eq!(caps.feature(0x72).unwrap().declared_values, vec![0x78, 0x80]);
        assert_eq!(caps.model, Some("X27".into()));
    }

    #[test]
    fn unrecognized_code_is_usable() {
        let caps = parse_capabilities("(vcp(10 0F))");
        assert_eq!(caps.validity, Validity::Usable);
        assert_eq!(caps.feature_codes(), vec![0x10, 0x0f]);
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "(cmds(01 02 03) vcp(10 12 14(05 08 0B) 60) mccs_ver(2.1))",
            "(cmds(01 zz) vcp(10 123 14(05 05 08)) mccs_ver(x.y))",
            "vcp(10 12)mccs_ver(3.0)",
        ];
        for input in inputs.iter() {
            let first = parse_capabilities(input);
            assert_eq!(parse_capabilities(&first.raw_value), first);
        }
    }

    #[test]
    fn trailing_nuls() {
        let caps = parse_capabilities_bytes(b"(vcp(10) mccs_ver(2.2))\0\0\0");
        assert_eq!(caps.raw_value, "(vcp(10) mccs_ver(2.2))");
        assert_eq!(caps.validity, Validity::Valid);
    }

    #[test]
    fn value_names() {
        let caps = parse_capabilities("(vcp(60(01 0F 99)) mccs_ver(2.1))");
        let names = caps.feature(0x60).unwrap().value_names(caps.parsed_version);
        assert_eq!(names[1], (0x0f, Some("DisplayPort-1")));
        assert_eq!(names[2].1, None);
        assert!(caps.to_string().contains("Input Source"));
    }

    #[test]
    fn matching_paren() {
        assert_eq!(find_matching_close_paren("(a(b)c)", 0), Some(6));
        assert_eq!(find_matching_close_paren("(a(b)c)", 2), Some(4));
        assert_eq!(find_matching_close_paren("(a(b", 0), None);
        assert_eq!(find_matching_close_paren("a", 0), None);
    }
}
