//! Catalog construction and queries over the packaged ADIOS oil database.
//!
//! The build pipeline gunzips the packaged archive, merges the curator-provided
//! extra oils shipped next to it, normalizes Norwegian display names, and checks
//! id uniqueness. The resulting [`Catalog`] is immutable; all queries are pure
//! reads in insertion order.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde_json::Map;
use tracing::{debug, info, warn};

use crate::error::{LoadError, NotFoundError};
use crate::oil::OpendriftOil;
use crate::record::{OilAttributes, OilData, OilRecord};

/// Gzipped JSON array of oil records, embedded from the crate's data directory.
static ARCHIVE: &[u8] = include_bytes!("../data/oils.json.gz");

/// Curator-maintained supplementary records shipped with the crate.
static EXTRA_OILS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/extra_oils");

/// Location tag forced onto every supplementary record, whatever its true
/// origin. Downstream code never distinguishes archive from extra records.
pub const EXTRA_OIL_LOCATION: &str = "NORWAY";

/// Id prefix of the record family whose display name carries the reference
/// year. No other regional prefix receives this treatment.
const NORWEGIAN_ID_PREFIX: &str = "NO";

/// Result cap callers are expected to pass to [`Catalog::query`] when they have
/// no better bound.
pub const DEFAULT_QUERY_LIMIT: usize = 50;

static SHARED: OnceCell<Catalog> = OnceCell::new();

/// The merged, normalized, in-memory oil catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<OilRecord>,
}

impl Catalog {
    /// Build from the archive and extra oils packaged with the crate.
    pub fn load() -> Result<Self, LoadError> {
        Self::from_sources(ARCHIVE, Some(Path::new(EXTRA_OILS_DIR)))
    }

    /// Process-wide catalog, built at most once.
    ///
    /// Concurrent first callers block until the winning build finishes and all
    /// receive the same catalog. A failed build is not cached, so a later call
    /// may retry.
    pub fn shared() -> Result<&'static Self, LoadError> {
        SHARED.get_or_try_init(Self::load)
    }

    /// Build from caller-supplied sources: a gzipped JSON array of records plus
    /// an optional directory of flat supplementary record files.
    pub fn from_sources<R: Read>(
        archive_gz: R,
        extra_dir: Option<&Path>,
    ) -> Result<Self, LoadError> {
        let mut records = read_archive(archive_gz)?;

        if let Some(dir) = extra_dir {
            merge_extra_oils(dir, &mut records)?;
        }

        for record in &mut records {
            normalize_record(record)?;
        }
        check_unique_ids(&records)?;

        info!("oil catalog built: {} records", records.len());
        Ok(Self { records })
    }

    /// All records in catalog insertion order: archive first, then extra oils.
    pub fn records(&self) -> &[OilRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display names of all records, optionally restricted to a location.
    ///
    /// Location comparison is case-insensitive. Records without a location are
    /// excluded whenever a filter is supplied, included when it is not.
    pub fn names(&self, location: Option<&str>) -> Vec<&str> {
        let wanted = location.map(str::to_lowercase);

        self.records
            .iter()
            .filter(|r| match &wanted {
                Some(loc) => r
                    .data
                    .attributes
                    .metadata
                    .location
                    .as_ref()
                    .is_some_and(|l| l.to_lowercase() == *loc),
                None => true,
            })
            .map(|r| r.data.attributes.metadata.name.as_str())
            .collect()
    }

    /// Records whose name contains `substring` literally (case-sensitive), at
    /// most `limit` of them in catalog order, each adapted into an
    /// [`OpendriftOil`].
    ///
    /// An empty substring matches every record, so this doubles as
    /// "first N oils".
    pub fn query(&self, limit: usize, substring: &str) -> Vec<OpendriftOil> {
        self.records
            .iter()
            .filter(|r| r.data.attributes.metadata.name.contains(substring))
            .take(limit)
            .cloned()
            .map(OpendriftOil::new)
            .collect()
    }

    /// Single oil by display name, via an unlimited substring query.
    ///
    /// Several matches are resolved by a fixed policy: the first match in
    /// catalog insertion order wins, and the candidate ids are logged at warn
    /// level. Zero matches is an error carrying the requested name.
    pub fn find_by_name(&self, name: &str) -> Result<OpendriftOil, NotFoundError> {
        info!("querying oil database for: {}", name);
        let matches = self.query(usize::MAX, name);

        if matches.len() > 1 {
            let ids: Vec<&str> = matches.iter().map(|o| o.id()).collect();
            warn!(
                "several oils found with name: {}: {:?}, using first",
                name, ids
            );
        }

        matches
            .into_iter()
            .next()
            .ok_or_else(|| NotFoundError::Name(name.to_string()))
    }

    /// Single oil by exact identifier.
    pub fn find_by_id(&self, id: &str) -> Result<OpendriftOil, NotFoundError> {
        debug!("fetching full oil: {}", id);
        self.records
            .iter()
            .find(|r| r.data.id == id)
            .cloned()
            .map(OpendriftOil::new)
            .ok_or_else(|| NotFoundError::Id(id.to_string()))
    }
}

/// Gunzip and parse the archive into its record sequence.
fn read_archive<R: Read>(archive_gz: R) -> Result<Vec<OilRecord>, LoadError> {
    let mut decoder = flate2::read::GzDecoder::new(archive_gz);
    let mut json = String::new();
    decoder
        .read_to_string(&mut json)
        .map_err(LoadError::ArchiveDecompress)?;

    serde_json::from_str(&json).map_err(LoadError::ArchiveParse)
}

/// Parse every `.json` file in `dir` as a flat attributes object, wrap it into
/// the nested record shape, and append it to `records`.
///
/// Extra oils are curator-maintained, so a malformed file is a packaging bug
/// and fails the whole build rather than being skipped.
fn merge_extra_oils(dir: &Path, records: &mut Vec<OilRecord>) -> Result<(), LoadError> {
    let dir_err = |source| LoadError::ExtraDirRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(dir_err)? {
        let path = entry.map_err(dir_err)?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    // Directory enumeration order is filesystem-dependent; sort so the catalog
    // order is reproducible.
    paths.sort();

    for path in paths {
        let text = std::fs::read_to_string(&path).map_err(|source| LoadError::ExtraRead {
            path: path.clone(),
            source,
        })?;
        let mut attributes: OilAttributes =
            serde_json::from_str(&text).map_err(|source| LoadError::ExtraParse {
                path: path.clone(),
                source,
            })?;

        let id = attributes
            .oil_id
            .clone()
            .ok_or_else(|| LoadError::ExtraMissingField {
                path: path.clone(),
                field: "oil_id",
            })?;
        attributes.metadata.location = Some(EXTRA_OIL_LOCATION.to_string());

        debug!(
            "adding extra oil from {}: {}, {}",
            path.display(),
            id,
            attributes.metadata.name
        );
        records.push(OilRecord {
            data: OilData {
                id,
                attributes,
                extra: Map::new(),
            },
            extra: Map::new(),
        });
    }

    Ok(())
}

/// Apply the Norwegian display-name rule: names of `NO`-prefixed records end
/// with a single space and the four-digit reference year.
fn normalize_record(record: &mut OilRecord) -> Result<(), LoadError> {
    if !record.data.id.starts_with(NORWEGIAN_ID_PREFIX) {
        return Ok(());
    }

    let year = record
        .data
        .attributes
        .metadata
        .reference
        .as_ref()
        .and_then(|r| r.year)
        .ok_or_else(|| LoadError::MissingReferenceYear {
            id: record.data.id.clone(),
        })?;

    let name = &mut record.data.attributes.metadata.name;
    *name = normalize_name(name, year);
    Ok(())
}

/// Canonical year-tagged name: base name, one space, reference year. An
/// existing 4-numeric-character tail is stripped first, which makes the rule
/// idempotent and lets the canonical year win over a stale one.
fn normalize_name(name: &str, year: i64) -> String {
    let base = if name.len() >= 4
        && name.as_bytes()[name.len() - 4..]
            .iter()
            .all(|b| b.is_ascii_digit())
    {
        name[..name.len() - 4].trim()
    } else {
        name
    };
    format!("{base} {year}")
}

/// Ids must be unique or `find_by_id` stops being well-defined. Sources are
/// assumed disjoint, so a collision is a packaging bug.
fn check_unique_ids(records: &[OilRecord]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.data.id.as_str()) {
            return Err(LoadError::DuplicateId {
                id: record.data.id.clone(),
            });
        }
    }
    Ok(())
}
