// charsets.rs - Locus definitions from NEXUS / PartitionFinder charset lines

use crate::data::alignment::LocusRange;
use crate::error::{SwscError, SwscResult};
use regex::Regex;
use std::path::Path;

/// Parse every `charset NAME = SPEC;` line in `content`.
///
/// `SPEC` holds 1-based inclusive ranges (`101-450`) or single sites (`451`).
/// A locus spans from the lowest to the highest site it names, so
/// discontinuous sets collapse to their enclosing range. Lines that are not
/// charset definitions are ignored, which lets a whole NEXUS file be passed in.
pub fn parse_charsets(content: &str) -> SwscResult<Vec<LocusRange>> {
    let line_re = Regex::new(r"(?i)^\s*charset\s+('[^']+'|\S+)\s*=\s*([^;]*);")
        .map_err(|e| SwscError::Charset(e.to_string()))?;

    let mut loci = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let Some(caps) = line_re.captures(line) else {
            continue;
        };
        let name = caps[1].trim_matches('\'').to_string();
        let (start, stop) = parse_site_spec(&caps[2])
            .map_err(|e| SwscError::Charset(format!("line {} ('{}'): {}", line_num + 1, name, e)))?;

        if loci.iter().any(|l: &LocusRange| l.name == name) {
            return Err(SwscError::Charset(format!(
                "line {}: duplicate charset '{}'",
                line_num + 1,
                name
            )));
        }
        loci.push(LocusRange::new(name, start, stop));
    }

    if loci.is_empty() {
        return Err(SwscError::EmptyAlignment);
    }
    Ok(loci)
}

/// Load charsets from a file
pub fn load_charsets(path: &Path) -> SwscResult<Vec<LocusRange>> {
    let content = std::fs::read_to_string(path)?;
    parse_charsets(&content)
}

/// Returns the 0-based half-open span covered by a site specification
fn parse_site_spec(spec: &str) -> Result<(usize, usize), String> {
    let mut min_site = usize::MAX;
    let mut max_site = 0usize;

    for token in spec.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
        let (from, to) = match token.split_once('-') {
            Some((a, b)) => (parse_site(a)?, parse_site(b)?),
            None => {
                let site = parse_site(token)?;
                (site, site)
            }
        };
        if from > to {
            return Err(format!("range '{}' runs backwards", token));
        }
        min_site = min_site.min(from);
        max_site = max_site.max(to);
    }

    if min_site == usize::MAX {
        return Err("empty site specification".to_string());
    }
    Ok((min_site - 1, max_site))
}

fn parse_site(s: &str) -> Result<usize, String> {
    let site: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a site number", s.trim()))?;
    if site == 0 {
        return Err("site numbers are 1-based".to_string());
    }
    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nexus_sets_block() {
        let content = "#NEXUS\nbegin sets;\n  charset uce-1 = 1-300;\n  CHARSET 'uce-2' = 301-650;\nend;\n";
        let loci = parse_charsets(content).unwrap();
        assert_eq!(
            loci,
            vec![LocusRange::new("uce-1", 0, 300), LocusRange::new("uce-2", 300, 650)]
        );
    }

    #[test]
    fn test_discontinuous_set_spans_min_to_max() {
        let loci = parse_charsets("charset x = 10-20 25 40-41;").unwrap();
        assert_eq!(loci[0], LocusRange::new("x", 9, 41));
    }

    #[test]
    fn test_invalid_specs_rejected() {
        assert!(parse_charsets("charset x = 0-5;").is_err());
        assert!(parse_charsets("charset x = 9-5;").is_err());
        assert!(parse_charsets("charset x = a-b;").is_err());
        assert!(parse_charsets("charset x = ;").is_err());
        assert!(parse_charsets("charset x = 1-5;\ncharset x = 6-9;").is_err());
    }

    #[test]
    fn test_no_charsets_is_empty_alignment() {
        let err = parse_charsets("begin sets;\nend;").unwrap_err();
        assert!(matches!(err, SwscError::EmptyAlignment));
    }
}
