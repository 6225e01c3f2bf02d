//! Reading and writing parcel, truck, and distance records.
//!
//! All formats are headerless comma-separated lines, with surrounding
//! whitespace ignored:
//!
//! | Kind | Fields |
//! |------|--------|
//! | Parcel | `id, source, destination, volume` |
//! | Truck | `id, capacity` |
//! | Distance | `city_a, city_b, distance[, reverse_distance]` |
//!
//! Blank lines and lines starting with `#` are skipped; errors report the
//! physical line number of the offending record.

use std::io::{BufRead, BufReader, Read, Write};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::error::DataError;
use crate::models::{DistanceMap, Parcel, Truck};

/// Reads parcels from `reader`.
pub fn read_parcels<R: Read>(reader: R) -> Result<Vec<Parcel>, DataError> {
    const KIND: &str = "parcel";
    records(reader, KIND)?
        .into_iter()
        .map(|(line, rec)| -> Result<Parcel, DataError> {
            expect_fields(KIND, line, &rec, 4, 4)?;
            Ok(Parcel::new(
                number(KIND, line, &rec[0])?,
                number(KIND, line, &rec[3])?,
                &rec[1],
                &rec[2],
            ))
        })
        .collect()
}

/// Reads trucks from `reader`, all parked at `depot`.
pub fn read_trucks<R: Read>(reader: R, depot: &str) -> Result<Vec<Truck>, DataError> {
    const KIND: &str = "truck";
    records(reader, KIND)?
        .into_iter()
        .map(|(line, rec)| -> Result<Truck, DataError> {
            expect_fields(KIND, line, &rec, 2, 2)?;
            Ok(Truck::new(
                number(KIND, line, &rec[0])?,
                number(KIND, line, &rec[1])?,
                depot,
            ))
        })
        .collect()
}

/// Reads a distance table from `reader`.
///
/// A line without a reverse distance records a symmetric pair.
pub fn read_distances<R: Read>(reader: R) -> Result<DistanceMap, DataError> {
    const KIND: &str = "distance";
    let mut map = DistanceMap::new();
    for (line, rec) in records(reader, KIND)? {
        expect_fields(KIND, line, &rec, 3, 4)?;
        let forward = number(KIND, line, &rec[2])?;
        let reverse = rec
            .get(3)
            .map(|raw| number(KIND, line, raw))
            .transpose()?;
        map.add_distance(&rec[0], &rec[1], forward, reverse);
    }
    Ok(map)
}

/// Writes parcels in the format [`read_parcels`] accepts.
pub fn write_parcels<W: Write>(writer: W, parcels: &[Parcel]) -> Result<(), DataError> {
    const KIND: &str = "parcel";
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    for p in parcels {
        let id = p.id.to_string();
        let volume = p.volume.to_string();
        let record = [
            id.as_str(),
            p.source.as_str(),
            p.destination.as_str(),
            volume.as_str(),
        ];
        wtr.write_record(record)
            .map_err(|source| DataError::Write { kind: KIND, source })?;
    }
    wtr.flush()
        .map_err(|e| DataError::Write { kind: KIND, source: e.into() })
}

/// Writes truck IDs and capacities in the format [`read_trucks`] accepts.
pub fn write_trucks<W: Write>(writer: W, trucks: &[Truck]) -> Result<(), DataError> {
    const KIND: &str = "truck";
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    for t in trucks {
        wtr.write_record([t.id().to_string(), t.capacity().to_string()])
            .map_err(|source| DataError::Write { kind: KIND, source })?;
    }
    wtr.flush()
        .map_err(|e| DataError::Write { kind: KIND, source: e.into() })
}

fn records<R: Read>(reader: R, kind: &'static str) -> Result<Vec<(u64, StringRecord)>, DataError> {
    let mut out = Vec::new();
    for (idx, text) in BufReader::new(reader).lines().enumerate() {
        let line = idx as u64 + 1;
        let text = text.map_err(|e| DataError::Record {
            kind,
            line,
            source: e.into(),
        })?;
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mut rec = StringRecord::new();
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes())
            .read_record(&mut rec)
            .map_err(|source| DataError::Record { kind, line, source })?;
        if rec.iter().all(str::is_empty) {
            continue;
        }
        out.push((line, rec));
    }
    Ok(out)
}

fn expect_fields(
    kind: &'static str,
    line: u64,
    rec: &StringRecord,
    min: usize,
    max: usize,
) -> Result<(), DataError> {
    if (min..=max).contains(&rec.len()) {
        Ok(())
    } else {
        Err(DataError::FieldCount {
            kind,
            line,
            found: rec.len(),
        })
    }
}

fn number<T: FromStr>(kind: &'static str, line: u64, raw: &str) -> Result<T, DataError> {
    raw.parse().map_err(|_| DataError::InvalidNumber {
        kind,
        line,
        value: raw.to_string(),
    })
}
