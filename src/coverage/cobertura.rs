//! Cobertura XML parsing into [`CoverageRecord`]s

use crate::types::errors::Error;
use crate::types::models::CoverageRecord;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Extract one record per `class` element, in document order
pub fn parse_cobertura(content: &str) -> Result<Vec<CoverageRecord>, Error> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                depth += 1;
                seen_root = true;
                if e.name().as_ref() == b"class" {
                    records.push(record_from_element(e)?);
                }
            }
            Event::Empty(ref e) => {
                seen_root = true;
                if e.name().as_ref() == b"class" {
                    records.push(record_from_element(e)?);
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    // The reader stops quietly at EOF, even inside open elements
    if !seen_root {
        return Err(quick_xml::Error::UnexpectedEof("no root element".to_string()).into());
    }
    if depth > 0 {
        return Err(
            quick_xml::Error::UnexpectedEof(format!("{depth} unclosed element(s)")).into(),
        );
    }

    Ok(records)
}

fn record_from_element(element: &BytesStart<'_>) -> Result<CoverageRecord, Error> {
    let mut filename = None;
    let mut line_rate = None;
    let mut branch_rate = None;

    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        match attr.key.as_ref() {
            b"filename" => filename = Some(attr.unescape_value()?.into_owned()),
            b"line-rate" => line_rate = Some(attr.unescape_value()?.into_owned()),
            b"branch-rate" => branch_rate = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }

    Ok(record_from_attributes(
        filename.as_deref(),
        line_rate.as_deref(),
        branch_rate.as_deref(),
    ))
}

/// Build a record from raw `class` attributes.
///
/// Missing rates count as zero. A rate that is present but not a number
/// becomes NaN so it can never pass for real coverage.
pub fn record_from_attributes(
    filename: Option<&str>,
    line_rate: Option<&str>,
    branch_rate: Option<&str>,
) -> CoverageRecord {
    let file_name = filename.unwrap_or_default().to_string();
    CoverageRecord {
        line_rate: rate_percentage(&file_name, "line-rate", line_rate),
        branch_rate: rate_percentage(&file_name, "branch-rate", branch_rate),
        file_name,
    }
}

fn rate_percentage(file_name: &str, attribute: &str, raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match raw.trim().parse::<f64>() {
        Ok(rate) => rate * 100.0,
        Err(_) => {
            log::warn!("Malformed {attribute} {raw:?} for class '{file_name}'");
            f64::NAN
        }
    }
}
