//! Position mapping between rewritten output and original input
//!
//! The rewriter prepends a prologue and splices replacements into the
//! original text. Downstream tooling still needs to address positions
//! in the original module, so the emitter records, for every byte range
//! of the output, where it came from.

use serde::{Deserialize, Serialize};

/// Origin of one output segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentOrigin {
    /// Content synthesized by the rewriter (prologue lines, replacement
    /// text)
    Synthesized,
    /// Content copied verbatim from the input, starting at this byte
    /// offset
    Original(usize),
}

/// One contiguous byte range of the output and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Output byte offset where the segment starts
    pub start: usize,
    /// Output byte offset one past the segment end
    pub end: usize,
    /// Where the segment's bytes originate
    pub origin: SegmentOrigin,
}

/// Mapping from output positions back to input positions
///
/// Segments are contiguous and cover the whole output: the emitter
/// appends them left to right as it builds the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceMap {
    segments: Vec<Segment>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment of `len` output bytes with the given origin
    ///
    /// Zero-length segments are dropped.
    pub fn append(&mut self, len: usize, origin: SegmentOrigin) {
        if len == 0 {
            return;
        }
        let start = self.output_len();
        self.segments.push(Segment {
            start,
            end: start + len,
            origin,
        });
    }

    /// Total output length covered by the map
    pub fn output_len(&self) -> usize {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Trace an output byte offset back to its original byte offset
    ///
    /// Returns None for synthesized content and for offsets past the
    /// end of the output.
    pub fn original_position(&self, output_offset: usize) -> Option<usize> {
        let index = self
            .segments
            .partition_point(|s| s.end <= output_offset)
            .min(self.segments.len().checked_sub(1)?);
        let segment = &self.segments[index];
        if output_offset < segment.start || output_offset >= segment.end {
            return None;
        }
        match segment.origin {
            SegmentOrigin::Synthesized => None,
            SegmentOrigin::Original(start) => Some(start + (output_offset - segment.start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_trace() {
        let mut map = SourceMap::new();
        map.append(10, SegmentOrigin::Synthesized);
        map.append(5, SegmentOrigin::Original(0));
        map.append(0, SegmentOrigin::Synthesized);
        map.append(5, SegmentOrigin::Original(20));

        assert_eq!(map.segments().len(), 3);
        assert_eq!(map.output_len(), 20);

        assert_eq!(map.original_position(0), None);
        assert_eq!(map.original_position(9), None);
        assert_eq!(map.original_position(10), Some(0));
        assert_eq!(map.original_position(14), Some(4));
        assert_eq!(map.original_position(15), Some(20));
        assert_eq!(map.original_position(19), Some(24));
        assert_eq!(map.original_position(20), None);
        assert_eq!(map.original_position(100), None);
    }

    #[test]
    fn test_empty_map() {
        let map = SourceMap::new();
        assert_eq!(map.output_len(), 0);
        assert_eq!(map.original_position(0), None);
    }
}
