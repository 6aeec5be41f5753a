//! Bidirectional codec between the accommodations section text and typed
//! flight comparison rows.
//!
//! Decode finds the first well-formed pipe table and maps its body rows
//! positionally onto [`FlightEntry`] fields. Encode emits the fixed
//! five-column table. Re-embed replaces exactly the detected table span, or
//! prepends a fresh comparison heading when no table exists, so surrounding
//! freeform text is never lost and a saved document always contains exactly
//! one flight table.

use crate::model::FlightEntry;

/// Heading prepended when a save finds no existing table to replace.
const FALLBACK_HEADING: &str = "### FLIGHT PRICE COMPARISON";

/// The first well-formed pipe table in a text: byte span plus raw rows.
/// A table is a row line, a separator line of `-`/`:`/`|`/whitespace, and
/// one or more further row lines.
#[derive(Debug)]
pub(crate) struct PipeTable<'a> {
    pub start: usize,
    pub end: usize,
    pub header: &'a str,
    pub body: Vec<&'a str>,
}

pub(crate) fn find_table(text: &str) -> Option<PipeTable<'_>> {
    let lines = line_spans(text);

    for i in 0..lines.len() {
        let (header_start, header) = lines[i];
        if !is_row(header) {
            continue;
        }
        let Some(&(_, separator)) = lines.get(i + 1) else {
            break;
        };
        if !is_separator(separator) {
            continue;
        }

        let mut body = Vec::new();
        let mut end = header_start + header.len();
        for &(line_start, line) in &lines[i + 2..] {
            if !is_row(line) {
                break;
            }
            body.push(line);
            end = line_start + line.len();
        }

        if body.is_empty() {
            // Header + separator with no rows is not a table; keep scanning
            // past the separator.
            continue;
        }

        return Some(PipeTable {
            start: header_start,
            end,
            header,
            body,
        });
    }

    None
}

/// Parse flight rows out of the first table in the accommodations text.
///
/// No recognizable table yields an empty list, never an error. Rows shorter
/// than five columns pad the missing trailing fields with empty strings.
pub fn decode_flights(text: &str) -> Vec<FlightEntry> {
    let Some(table) = find_table(text) else {
        tracing::debug!("no flight table found in accommodations text");
        return Vec::new();
    };

    table.body.iter().map(|row| row_to_entry(row)).collect()
}

/// Render flight rows as a markdown table with the fixed five-column header,
/// substituting the active currency code into the price column. An empty
/// list produces an empty string (no table at all).
pub fn encode_flights(flights: &[FlightEntry], currency: &str) -> String {
    if flights.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "| Airline | Est. Price ({currency}) | Duration | Transit | Booking Link |\n\
         |:---|:---|:---|:---|:---|\n"
    );

    let rows: Vec<String> = flights
        .iter()
        .map(|flight| {
            // An airline cell that already carries link markup is emitted
            // verbatim; the `[` probe is the compatibility contract.
            let airline = if flight.airline.contains('[') {
                flight.airline.clone()
            } else {
                format!("[{}]({})", flight.airline, flight.link)
            };
            format!(
                "| {} | {} | {} | {} | [Book Now]({}) |",
                airline, flight.price, flight.duration, flight.transit, flight.link
            )
        })
        .collect();

    out.push_str(&rows.join("\n"));
    out
}

/// Re-embed an edited flight list into the accommodations text.
///
/// The first detected table span is replaced in place; when no table exists
/// the encoded table is prepended under a fresh comparison heading ahead of
/// the untouched original text.
pub fn embed_flights(text: &str, flights: &[FlightEntry], currency: &str) -> String {
    let table = encode_flights(flights, currency);
    match find_table(text) {
        Some(span) => {
            let mut out = String::with_capacity(text.len() + table.len());
            out.push_str(&text[..span.start]);
            out.push_str(&table);
            out.push_str(&text[span.end..]);
            out
        }
        None => format!("{FALLBACK_HEADING}\n\n{table}\n\n{text}"),
    }
}

fn row_to_entry(row: &str) -> FlightEntry {
    let cells = split_cells(row);
    let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
    FlightEntry {
        airline: cell(0),
        price: cell(1),
        duration: cell(2),
        transit: cell(3),
        link: extract_link(&cell(4)),
    }
}

/// Split a row on `|`, trimming every cell and stripping the single empty
/// leading/trailing cell produced by the row's outer pipes. Interior empty
/// cells are kept so columns never shift.
pub(crate) fn split_cells(row: &str) -> Vec<String> {
    let mut cells: Vec<&str> = row.split('|').map(str::trim).collect();
    if cells.first() == Some(&"") {
        cells.remove(0);
    }
    if cells.last() == Some(&"") {
        cells.pop();
    }
    cells.into_iter().map(str::to_string).collect()
}

/// Pull the url out of a `[label](url)` booking cell. Cells without the
/// link pattern fall back to their raw text.
fn extract_link(cell: &str) -> String {
    if let Some(open) = cell.find('[') {
        if let Some(mid) = cell[open..].find("](") {
            // Label must be non-empty, mirroring the original pattern.
            if mid >= 2 {
                let url_start = open + mid + 2;
                if let Some(close) = cell.rfind(')') {
                    if close > url_start {
                        return cell[url_start..close].to_string();
                    }
                }
            }
        }
    }
    cell.to_string()
}

/// True for a line that can be a table row: non-blank and pipe-delimited.
fn is_row(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.contains('|')
}

/// True for the alignment row under the header: pipes plus only `-`, `:`
/// and whitespace.
fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.contains('|')
        && trimmed
            .chars()
            .all(|c| matches!(c, '-' | ':' | '|') || c.is_whitespace())
}

/// Each line of `text` with its starting byte offset. Line content excludes
/// the `\n` terminator.
fn line_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (i, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            spans.push((start, &text[start..i]));
            start = i + 1;
        }
    }
    spans.push((start, &text[start..]));
    spans
}
