//! Queryable catalog of the bundled ADIOS petroleum oil database.
//!
//! The crate ships a compressed archive of oil records plus a directory of
//! curator-provided extra oils. [`Catalog`] decompresses and merges them into
//! one immutable, in-memory collection and answers name listings, substring
//! queries, and exact name/id lookups with [`OpendriftOil`] handles that the
//! oil-weathering model consumes.
//!
//! # Example
//!
//! ```no_run
//! use adios_oildb::Catalog;
//!
//! let catalog = Catalog::shared()?;
//! let oil = catalog.find_by_name("EKOFISK 2002")?;
//! println!("{} ({})", oil.name(), oil.id());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod error;
pub mod oil;
pub mod record;

pub use catalog::{Catalog, DEFAULT_QUERY_LIMIT, EXTRA_OIL_LOCATION};
pub use error::{LoadError, NotFoundError};
pub use oil::OpendriftOil;
pub use record::{OilAttributes, OilData, OilMetadata, OilRecord, Reference};
