use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use futures_lite::{AsyncWriteExt, StreamExt};

use crate::{error::BucketError, types::TrackRecord, utils};

/// The set of `songs-<year>.txt` files produced by one run.
pub struct BucketStore {
    dir: PathBuf,
    years: BTreeSet<String>,
}

impl BucketStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            years: BTreeSet::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, year: &str) -> PathBuf {
        self.dir.join(utils::bucket_file_name(year))
    }

    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.years.iter().map(String::as_str)
    }

    /// Removes every bucket file left in the output directory, including
    /// ones from years this run will not produce. Returns how many went away.
    pub async fn clear(&mut self) -> Result<usize, BucketError> {
        self.years.clear();
        async_fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| BucketError::new(&self.dir, e))?;

        let mut entries = async_fs::read_dir(&self.dir)
            .await
            .map_err(|e| BucketError::new(&self.dir, e))?;

        let mut removed = 0;
        while let Some(entry) = entries
            .try_next()
            .await
            .map_err(|e| BucketError::new(&self.dir, e))?
        {
            let path = entry.path();
            if !utils::is_bucket_file(&path) {
                continue;
            }
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| BucketError::new(&path, e))?;
            if !file_type.is_file() {
                continue;
            }

            async_fs::remove_file(&path)
                .await
                .map_err(|e| BucketError::new(&path, e))?;
            removed += 1;
        }

        Ok(removed)
    }

    /// Appends `record` to its year's bucket. The caller guarantees the
    /// record has a valid year.
    pub async fn append(&mut self, year: &str, record: &TrackRecord) -> Result<(), BucketError> {
        let path = self.path_for(year);
        let mut file = async_fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| BucketError::new(&path, e))?;

        file.write_all(record.to_line().as_bytes())
            .await
            .map_err(|e| BucketError::new(&path, e))?;
        file.flush().await.map_err(|e| BucketError::new(&path, e))?;

        self.years.insert(year.to_string());
        Ok(())
    }

    /// Sorts each bucket written this run by release date and rewrites it
    /// with the track references only. Returns the track count per year.
    pub async fn finalize(&self) -> Result<BTreeMap<String, usize>, BucketError> {
        let mut counts = BTreeMap::new();

        for year in &self.years {
            let path = self.path_for(year);
            let content = async_fs::read_to_string(&path)
                .await
                .map_err(|e| BucketError::new(&path, e))?;

            let mut records: Vec<TrackRecord> =
                content.lines().filter_map(TrackRecord::from_line).collect();
            utils::sort_records_by_date(&mut records);

            let output: String = records
                .iter()
                .map(|record| format!("{}\n", record.track))
                .collect();
            async_fs::write(&path, output)
                .await
                .map_err(|e| BucketError::new(&path, e))?;

            counts.insert(year.clone(), records.len());
        }

        Ok(counts)
    }
}
