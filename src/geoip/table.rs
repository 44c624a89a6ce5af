//! CSV table reading shared by the resolvers.
//!
//! All tables are comma-delimited with optional quoting. Rows may have
//! differing lengths; each loader checks for the columns it needs.

use std::io::Read;

use csv::{Reader, ReaderBuilder, StringRecord, Trim};

use crate::error_handling::{LoadStats, ResolveError, SkipReason};

/// Builds a CSV reader for one input table.
pub(crate) fn reader<R: Read>(input: R, has_headers: bool) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input)
}

/// Feeds every decodable record of `reader` to `handle`.
///
/// Records the CSV reader cannot decode are counted as
/// `SkipReason::UnreadableRecord` and skipped. An I/O failure on the
/// underlying stream aborts the load.
pub(crate) fn for_each_record<R, F>(
    reader: &mut Reader<R>,
    table: &str,
    stats: &mut LoadStats,
    mut handle: F,
) -> Result<(), ResolveError>
where
    R: Read,
    F: FnMut(&StringRecord, &mut LoadStats),
{
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => handle(&record, stats),
            Ok(false) => return Ok(()),
            Err(e) if e.is_io_error() => return Err(ResolveError::Csv(e)),
            Err(e) => {
                log::debug!("Skipping unreadable record in {}: {}", table, e);
                stats.record_skip(SkipReason::UnreadableRecord);
            }
        }
    }
}

/// Returns the fields at `indices`, or `None` if the record is too short.
pub(crate) fn fields<'r, const N: usize>(
    record: &'r StringRecord,
    indices: [usize; N],
) -> Option<[&'r str; N]> {
    let mut out = [""; N];
    for (slot, idx) in out.iter_mut().zip(indices) {
        *slot = record.get(idx)?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_skips_header_when_asked() {
        let data = "network,geoname_id\n1.0.0.0/24,100\n";
        let mut rdr = reader(data.as_bytes(), true);
        let mut stats = LoadStats::new();
        let mut rows = Vec::new();
        for_each_record(&mut rdr, "test", &mut stats, |record, _| {
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        })
        .unwrap();
        assert_eq!(rows, vec![vec!["1.0.0.0/24".to_string(), "100".to_string()]]);
    }

    #[test]
    fn test_reader_handles_quotes_and_ragged_rows() {
        let data = "1,2,\"AS1 Foo, Inc.\"\n3,4\n";
        let mut rdr = reader(data.as_bytes(), false);
        let mut stats = LoadStats::new();
        let mut lens = Vec::new();
        let mut labels = Vec::new();
        for_each_record(&mut rdr, "test", &mut stats, |record, _| {
            lens.push(record.len());
            if let Some(label) = record.get(2) {
                labels.push(label.to_string());
            }
        })
        .unwrap();
        assert_eq!(lens, vec![3, 2]);
        assert_eq!(labels, vec!["AS1 Foo, Inc.".to_string()]);
    }

    #[test]
    fn test_invalid_utf8_record_is_skipped() {
        let mut data = b"1,2,ok\n".to_vec();
        data.extend_from_slice(b"3,4,\xff\xfe\n");
        data.extend_from_slice(b"5,6,ok\n");
        let mut rdr = reader(data.as_slice(), false);
        let mut stats = LoadStats::new();
        let mut count = 0;
        for_each_record(&mut rdr, "test", &mut stats, |_, _| count += 1).unwrap();
        assert_eq!(count, 2);
        assert_eq!(stats.skipped(SkipReason::UnreadableRecord), 1);
    }

    #[test]
    fn test_fields() {
        let record = StringRecord::from(vec!["a", "b", "c"]);
        assert_eq!(fields(&record, [0, 2]), Some(["a", "c"]));
        assert_eq!(fields(&record, [0, 3]), None);
    }
}
