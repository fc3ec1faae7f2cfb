use super::definition::JobInfo;
use ahash::AHashMap;

/// Jobs grouped by source bucket, with groups kept in the order their source first appeared.
///
/// The hash map only indexes into `groups`; iteration order comes from the `Vec`, so the
/// output never depends on hashing.
#[derive(Debug, Clone, Default)]
pub struct SourceGroups {
    index: AHashMap<String, usize>,
    groups: Vec<(String, Vec<JobInfo>)>,
}

impl SourceGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a job to its source's group, opening a new group at the end if needed.
    pub fn push(&mut self, job: JobInfo) {
        match self.index.get(&job.source) {
            Some(&slot) => self.groups[slot].1.push(job),
            None => {
                self.index.insert(job.source.clone(), self.groups.len());
                self.groups.push((job.source.clone(), vec![job]));
            }
        }
    }

    /// Number of distinct sources.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of jobs across all groups.
    pub fn job_count(&self) -> usize {
        self.groups.iter().map(|(_, jobs)| jobs.len()).sum()
    }

    pub fn get(&self, source: &str) -> Option<&[JobInfo]> {
        self.index
            .get(source)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Source ids in first-seen order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(source, _)| source.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[JobInfo])> {
        self.groups
            .iter()
            .map(|(source, jobs)| (source.as_str(), jobs.as_slice()))
    }

    /// Flattens the groups into a single job list, group by group.
    pub fn into_jobs(self) -> Vec<JobInfo> {
        self.groups.into_iter().flat_map(|(_, jobs)| jobs).collect()
    }
}

impl FromIterator<JobInfo> for SourceGroups {
    fn from_iter<I: IntoIterator<Item = JobInfo>>(iter: I) -> Self {
        let mut groups = SourceGroups::new();
        for job in iter {
            groups.push(job);
        }
        groups
    }
}

impl Extend<JobInfo> for SourceGroups {
    fn extend<I: IntoIterator<Item = JobInfo>>(&mut self, iter: I) {
        for job in iter {
            self.push(job);
        }
    }
}
