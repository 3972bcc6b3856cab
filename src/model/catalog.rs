//! Grouping snapshots into artifacts and ordering revisions

use std::collections::BTreeMap;

use super::snapshot::ArtifactSnapshot;

/// All snapshots of one artifact, newest commit first
#[derive(Debug, Clone, Default)]
pub struct ArtifactGroup {
    name: String,
    snapshots: Vec<ArtifactSnapshot>,
}

impl ArtifactGroup {
    /// Build a group from snapshots in discovery order
    pub fn from_snapshots(name: impl Into<String>, snapshots: Vec<ArtifactSnapshot>) -> Self {
        let mut group = Self {
            name: name.into(),
            snapshots,
        };
        group.sort();
        group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn snapshots(&self) -> &[ArtifactSnapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Order by commit date descending. The sort is stable: snapshots with
    /// the same date keep their discovery order.
    fn sort(&mut self) {
        self.snapshots.sort_by(|a, b| b.commit_date.cmp(&a.commit_date));
    }

    /// Every other snapshot of this artifact, in group order
    pub fn other_revisions(&self, index: usize) -> Vec<&ArtifactSnapshot> {
        self.snapshots
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, s)| s)
            .collect()
    }

    /// One render job per snapshot
    pub fn jobs(&self) -> impl Iterator<Item = RenderJob<'_>> {
        self.snapshots
            .iter()
            .enumerate()
            .map(move |(i, snapshot)| RenderJob {
                snapshot,
                other_revisions: self.other_revisions(i),
            })
    }
}

/// A snapshot plus the sibling list its page links to
#[derive(Debug, Clone)]
pub struct RenderJob<'a> {
    pub snapshot: &'a ArtifactSnapshot,
    /// Empty when the artifact has a single revision
    pub other_revisions: Vec<&'a ArtifactSnapshot>,
}

/// Every artifact group, keyed by artifact name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: BTreeMap<String, ArtifactGroup>,
}

impl Catalog {
    /// Group snapshots by artifact name. Input order is the discovery order
    /// used to break commit date ties.
    pub fn from_snapshots(snapshots: impl IntoIterator<Item = ArtifactSnapshot>) -> Self {
        let mut by_name: BTreeMap<String, Vec<ArtifactSnapshot>> = BTreeMap::new();
        for snapshot in snapshots {
            by_name
                .entry(snapshot.artifact_name.clone())
                .or_default()
                .push(snapshot);
        }

        let groups = by_name
            .into_iter()
            .map(|(name, snaps)| {
                let group = ArtifactGroup::from_snapshots(name.clone(), snaps);
                (name, group)
            })
            .collect();
        Self { groups }
    }

    /// Groups in artifact name order
    pub fn groups(&self) -> impl Iterator<Item = &ArtifactGroup> {
        self.groups.values()
    }

    pub fn group(&self, name: &str) -> Option<&ArtifactGroup> {
        self.groups.get(name)
    }

    pub fn artifact_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn artifact_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of snapshots across all artifacts
    pub fn snapshot_count(&self) -> usize {
        self.groups.values().map(ArtifactGroup::len).sum()
    }

    /// True when no artifact holds a snapshot
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(ArtifactGroup::is_empty)
    }

    /// Render jobs for every snapshot of every artifact
    pub fn jobs(&self) -> Vec<RenderJob<'_>> {
        self.groups.values().flat_map(|g| g.jobs()).collect()
    }
}
