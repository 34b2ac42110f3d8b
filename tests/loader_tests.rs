mod common;

use common::{Feed, monday_at};
use halte::{
    gtfs::{self, Config, DirectorySource, FeedLoader, MemorySource, TableKind, TableSource, ZipSource},
    repository::Repository,
};
use std::{
    fs,
    io::Write,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

/// Counts fetches and yields to the runtime so concurrent callers overlap.
struct SlowSource {
    inner: MemorySource,
    fetches: Arc<AtomicUsize>,
}

impl TableSource for SlowSource {
    async fn fetch(&self, path: &str) -> Result<String, gtfs::Error> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.inner.fetch(path).await
    }
}

fn feed() -> Feed {
    Feed::new()
        .trips("R1,WEEK,T1,Gare,0,SH\n")
        .stop_times("T1,08:10:00,08:10:00,S1,1\n")
        .shapes("SH,48.1,-2.1,1\n")
}

#[tokio::test]
async fn loads_every_table() {
    let loader = FeedLoader::from_source(feed().source(), Config::default());
    let repo = loader.get_data().await.unwrap();
    assert_eq!(repo.agencies.len(), 1);
    assert_eq!(repo.routes.len(), 2);
    assert_eq!(repo.stops.len(), 5);
    assert_eq!(repo.trips.len(), 1);
    assert_eq!(repo.stop_times.len(), 1);
    assert_eq!(repo.calendars.len(), 2);
    assert_eq!(repo.shapes.len(), 1);
    assert_eq!(repo.next_departures("S1", 2, monday_at(8, 0)).len(), 1);
}

#[tokio::test]
async fn missing_table_loads_as_empty() {
    let source = feed().without(TableKind::Shapes).without(TableKind::Agency).source();
    let loader = FeedLoader::from_source(source, Config::default());
    let repo = loader.get_data().await.unwrap();
    assert!(repo.shapes.is_empty());
    assert!(repo.agencies.is_empty());
    assert_eq!(repo.trips.len(), 1);
    assert!(repo.shape_by_trip_id("T1").is_empty());
}

#[tokio::test]
async fn ragged_row_does_not_reject_the_feed() {
    let source = feed()
        .stop_times(
            "T1,08:10:00,08:10:00,S1,1\n\
             T1,08:20:00,08:20:00,S3,2,\n\
             T1,08:30:00\n",
        )
        .source();
    let loader = FeedLoader::from_source(source, Config::default());
    let repo = loader.get_data().await.unwrap();
    assert_eq!(repo.stop_times.len(), 3);
    assert_eq!(repo.terminus_by_trip_id("T1").unwrap().name.as_ref(), "Gare");

    let departures = repo.next_departures("S1", 2, monday_at(8, 0));
    assert_eq!(departures.len(), 1);
    assert_eq!(departures[0].departure_time, "08:10");
    assert_eq!(departures[0].headsign, "Gare");
    assert_eq!(repo.next_departures("S3", 2, monday_at(8, 0)).len(), 1);
    assert!(loader.snapshot().is_some());
}

#[tokio::test]
async fn concurrent_callers_share_one_load() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let source = SlowSource {
        inner: feed().source(),
        fetches: fetches.clone(),
    };
    let loader = FeedLoader::from_source(source, Config::default());

    let (a, b, c) = tokio::join!(loader.get_data(), loader.get_data(), loader.get_data());
    let (a, b, c) = (a.unwrap(), b.unwrap(), c.unwrap());
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&b, &c));
    assert_eq!(fetches.load(Ordering::SeqCst), TableKind::ALL.len());

    let again = loader.get_data().await.unwrap();
    assert!(Arc::ptr_eq(&a, &again));
    assert_eq!(fetches.load(Ordering::SeqCst), TableKind::ALL.len());
    assert!(Arc::ptr_eq(&a, &loader.snapshot().unwrap()));
}

#[tokio::test]
async fn failed_load_is_retried_on_next_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let loader = FeedLoader::new(move || {
        let attempt = counter.fetch_add(1, Ordering::SeqCst);
        async move {
            if attempt == 0 {
                Err(gtfs::Error::Transport("offline".into()))
            } else {
                Ok(Repository::new())
            }
        }
    });

    let err = loader.get_data().await.unwrap_err();
    assert!(matches!(err.as_ref(), gtfs::Error::Transport(_)));
    assert!(loader.snapshot().is_none());
    assert!(loader.get_data().await.is_ok());
    assert!(loader.get_data().await.is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn preloaded_loader_returns_its_snapshot() {
    let loader = FeedLoader::preloaded(feed().repository());
    let repo = loader.get_data().await.unwrap();
    assert_eq!(repo.trips.len(), 1);
    assert!(Arc::ptr_eq(&repo, &loader.snapshot().unwrap()));
}

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("halte-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn reads_unpacked_directory() {
    let dir = scratch_dir("dir");
    let config = Config::default();
    fs::write(dir.join(&config.stops_path), common::STOPS).unwrap();
    fs::write(dir.join(&config.routes_path), common::ROUTES).unwrap();

    let loader = FeedLoader::from_source(DirectorySource::new(&dir), config);
    let repo = loader.get_data().await.unwrap();
    assert_eq!(repo.stops.len(), 5);
    assert_eq!(repo.routes.len(), 2);
    assert!(repo.trips.is_empty());
    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn reads_zipped_feed() {
    let dir = scratch_dir("zip");
    let path = dir.join("feed.zip");
    let file = fs::File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    zip.start_file("stops.txt", options).unwrap();
    zip.write_all(common::STOPS.as_bytes()).unwrap();
    zip.start_file("calendar.txt", options).unwrap();
    zip.write_all(common::CALENDAR.as_bytes()).unwrap();
    zip.finish().unwrap();

    let loader = FeedLoader::from_source(ZipSource::new(&path), Config::default());
    let repo = loader.get_data().await.unwrap();
    assert_eq!(repo.stops.len(), 5);
    assert_eq!(repo.calendars.len(), 2);
    assert!(repo.routes.is_empty());
    let _ = fs::remove_dir_all(&dir);
}
