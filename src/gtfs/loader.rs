use std::{
    future::Future,
    sync::{Arc, Mutex, OnceLock, PoisonError},
    time::Instant,
};

use csv::{ReaderBuilder, StringRecord};
use futures_util::future::{BoxFuture, FutureExt, Shared, join_all};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    gtfs::{self, Config, GtfsData, GtfsTable, TableKind, TableSource},
    repository::Repository,
};

type LoadResult = Result<Arc<Repository>, Arc<gtfs::Error>>;
type SharedLoad = Shared<BoxFuture<'static, LoadResult>>;
type LoadFn = dyn Fn() -> BoxFuture<'static, Result<Repository, gtfs::Error>> + Send + Sync;

/// Loads a feed once and hands out the same immutable [`Repository`]
/// for the lifetime of the loader.
///
/// Callers that ask before the first load finishes all await the same
/// in-flight load. A failed load is not cached, the next call starts over.
pub struct FeedLoader {
    load: Box<LoadFn>,
    snapshot: OnceLock<Arc<Repository>>,
    in_flight: Mutex<Option<SharedLoad>>,
}

impl FeedLoader {
    /// Builds a loader around any async function producing a repository.
    pub fn new<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Repository, gtfs::Error>> + Send + 'static,
    {
        Self {
            load: Box::new(move || load().boxed()),
            snapshot: OnceLock::new(),
            in_flight: Mutex::new(None),
        }
    }

    /// The standard loader: fetch the seven tables from `source`, parse them
    /// and index them.
    pub fn from_source<S>(source: S, config: Config) -> Self
    where
        S: TableSource + 'static,
    {
        let source = Arc::new(source);
        let config = Arc::new(config);
        Self::new(move || {
            let source = source.clone();
            let config = config.clone();
            async move {
                let data = read_feed(source.as_ref(), &config).await?;
                Ok(Repository::new().load_gtfs(data))
            }
        })
    }

    /// A loader that is already resolved with `repository`.
    pub fn preloaded(repository: Repository) -> Self {
        // Never called, the snapshot is set before anyone can ask
        let loader = Self::new(std::future::pending);
        let _ = loader.snapshot.set(Arc::new(repository));
        loader
    }

    /// The cached repository, if a load already succeeded.
    pub fn snapshot(&self) -> Option<Arc<Repository>> {
        self.snapshot.get().cloned()
    }

    pub async fn get_data(&self) -> LoadResult {
        if let Some(repository) = self.snapshot.get() {
            return Ok(repository.clone());
        }

        let load = {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            // A load may have finished while we waited for the lock
            if let Some(repository) = self.snapshot.get() {
                return Ok(repository.clone());
            }
            in_flight
                .get_or_insert_with(|| {
                    debug!("Starting feed load");
                    (self.load)()
                        .map(|result| result.map(Arc::new).map_err(Arc::new))
                        .boxed()
                        .shared()
                })
                .clone()
        };

        let result = load.clone().await;

        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Ok(repository) = &result {
            let _ = self.snapshot.set(repository.clone());
        }
        if in_flight
            .as_ref()
            .is_some_and(|current| current.ptr_eq(&load))
        {
            *in_flight = None;
        }
        result
    }
}

/// Fetches every table concurrently, then parses them.
///
/// A table the source cannot deliver is logged and left empty. A table that
/// was delivered but does not parse fails the whole read.
pub async fn read_feed<S>(source: &S, config: &Config) -> Result<GtfsData, gtfs::Error>
where
    S: TableSource + ?Sized,
{
    let now = Instant::now();
    let bodies = join_all(TableKind::ALL.iter().map(|table| async move {
        let path = config.path(*table);
        match source.fetch(path).await {
            Ok(body) => (*table, Some(body)),
            Err(err) => {
                warn!("Failed to fetch {path}: {err}");
                (*table, None)
            }
        }
    }))
    .await;

    let tables = bodies
        .into_iter()
        .map(|(table, body)| match body {
            Some(body) => parse_table(table, &body),
            None => Ok(table.empty()),
        })
        .collect::<Result<Vec<_>, _>>()?;
    tables.iter().for_each(|table| debug!("Parsed {} rows", table.len()));
    debug!("Reading feed took {:?}", now.elapsed());
    Ok(tables.into())
}

pub fn parse_table(table: TableKind, body: &str) -> Result<GtfsTable, gtfs::Error> {
    Ok(match table {
        TableKind::Agency => GtfsTable::Agency(parse_csv(body)?),
        TableKind::Routes => GtfsTable::Routes(parse_csv(body)?),
        TableKind::Stops => GtfsTable::Stops(parse_csv(body)?),
        TableKind::Trips => GtfsTable::Trips(parse_csv(body)?),
        TableKind::StopTimes => GtfsTable::StopTimes(parse_csv(body)?),
        TableKind::Calendar => GtfsTable::Calendar(parse_csv(body)?),
        TableKind::Shapes => GtfsTable::Shapes(parse_csv(body)?),
    })
}

/// Rows with too few cells are padded with empty cells and rows with too
/// many are cut to the header width, so one ragged row does not sink a table.
fn parse_csv<T>(body: &str) -> Result<Vec<T>, gtfs::Error>
where
    T: DeserializeOwned,
{
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(body.as_bytes());
    let headers = rdr.headers()?.clone();
    let width = headers.len();
    let mut ragged = 0;
    let mut record = StringRecord::new();
    let mut buf = Vec::new();
    while rdr.read_record(&mut record)? {
        if record.len() != width {
            ragged += 1;
            record = fit_to_width(&record, width);
        }
        let row: T = record.deserialize(Some(&headers))?;
        buf.push(row);
    }
    if ragged > 0 {
        warn!("{ragged} rows did not match the {width} header columns");
    }
    Ok(buf)
}

fn fit_to_width(record: &StringRecord, width: usize) -> StringRecord {
    let mut fitted: StringRecord = record.iter().take(width).collect();
    while fitted.len() < width {
        fitted.push_field("");
    }
    fitted
}
