use crate::records::UrlRecord;

/// Parses a raw 404 dump into URL records with default handling
///
/// The dump is a sequence of non-empty text blocks separated by blank
/// lines, strictly alternating URL, date, URL, date. Misaligned dumps are
/// not detected; the blocks are paired positionally as found.
pub fn parse_dump(text: &str) -> Vec<UrlRecord> {
    pair_blocks(split_into_blocks(text))
}

//
// Core dump processing functions
//

/// Splits text into blocks separated by one or more blank lines
///
/// A line is blank when it is empty after trimming, so whitespace-only and
/// CRLF line endings count as separators. Each block is trimmed at the
/// ends; inner line breaks of a multi-line block are kept.
pub fn split_into_blocks(text: &str) -> Vec<String> {
    let mut blocks: Vec<String> = Vec::new();
    let mut current_block: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            // Found a blank line, which marks a block boundary
            if !current_block.is_empty() {
                blocks.push(current_block.join("\n"));
                current_block = Vec::new();
            }
        } else {
            // Non-blank line goes into the current block
            current_block.push(trimmed);
        }
    }

    // Add the last block if it's not empty
    if !current_block.is_empty() {
        blocks.push(current_block.join("\n"));
    }

    blocks
}

/// Pairs blocks positionally into records
///
/// Block `2i` is treated as a URL and block `2i+1` as its date. A trailing
/// unpaired URL gets an empty-string date; no error is raised.
pub fn pair_blocks(blocks: Vec<String>) -> Vec<UrlRecord> {
    let mut records = Vec::with_capacity(blocks.len().div_ceil(2));
    let mut blocks = blocks.into_iter();

    while let Some(url) = blocks.next() {
        let date = blocks.next().unwrap_or_default();
        records.push(UrlRecord::new(url, date));
    }

    records
}
