use crate::plan::{BucketInfo, FlowPlan, JobInfo, SourceGroups};
use itertools::Itertools;

/// Formats plans into the human-readable job report.
pub struct JobReport;

impl JobReport {
    /// Format a single job line. `number` is 1-based.
    pub fn format_job(number: usize, job: &JobInfo) -> String {
        format!(
            "Job Number : {} ; Id: {}, Source Bucket: {}, Target Bucket: {}",
            number, job.id, job.source, job.target
        )
    }

    /// Format the numbered job list under a `Jobs:` header.
    pub fn format_jobs(jobs: &[JobInfo]) -> String {
        let body = if jobs.is_empty() {
            "  (none)".to_string()
        } else {
            jobs.iter()
                .enumerate()
                .map(|(i, job)| Self::format_job(i + 1, job))
                .join("\n")
        };
        format!("Jobs:\n{}", body)
    }

    pub fn format_buckets(buckets: &[BucketInfo]) -> String {
        let body = if buckets.is_empty() {
            "  (none)".to_string()
        } else {
            buckets
                .iter()
                .map(|bucket| format!("  {}: {}", bucket.id, bucket.label))
                .join("\n")
        };
        format!("Buckets:\n{}", body)
    }

    /// One line per source bucket listing its job ids, in group order.
    pub fn format_groups(jobs: &[JobInfo]) -> String {
        let groups: SourceGroups = jobs.iter().cloned().collect();
        let body = if groups.is_empty() {
            "  (none)".to_string()
        } else {
            groups
                .iter()
                .map(|(source, jobs)| {
                    format!("  {} -> {}", source, jobs.iter().map(|j| &j.id).join(", "))
                })
                .join("\n")
        };
        format!("Groups:\n{}", body)
    }

    /// Format a whole plan. Buckets and groups are only included when asked for.
    pub fn format_plan(plan: &FlowPlan, with_buckets: bool, with_groups: bool) -> String {
        let mut sections = Vec::new();
        if with_buckets {
            sections.push(Self::format_buckets(&plan.buckets));
        }
        sections.push(Self::format_jobs(&plan.jobs));
        if with_groups {
            sections.push(Self::format_groups(&plan.jobs));
        }
        sections.join("\n\n")
    }
}
