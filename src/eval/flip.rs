//! Threshold classification of scored edges

use crate::eval::assign::ScoredEdges;
use crate::graph::{Edge, EdgeTag, Location};
use crate::scores::Thresholds;

/// Scored edges with one threshold outcome each
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledEdges<'a> {
    pub location: Location,
    pub edges: &'a [Edge],
    pub scores: &'a [f64],
    pub tags: Vec<EdgeTag>,
}

impl<'a> LabeledEdges<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (Edge, f64, EdgeTag)> + '_ {
        self.edges
            .iter()
            .zip(self.scores)
            .zip(&self.tags)
            .map(|((&edge, &score), &tag)| (edge, score, tag))
    }

    /// Edges carrying `tag`, in edge order
    pub fn with_tag(&self, tag: EdgeTag) -> Vec<Edge> {
        self.iter().filter(|&(_, _, t)| t == tag).map(|(edge, _, _)| edge).collect()
    }

    /// Edges in the ambiguous band
    pub fn dont_care(&self) -> Vec<Edge> {
        self.with_tag(EdgeTag::DontCare)
    }

    /// Inter-cluster edges scored as matches
    pub fn false_negatives(&self) -> Vec<Edge> {
        match self.location {
            Location::Intercluster => self.with_tag(EdgeTag::Flipped),
            Location::Intracluster => Vec::new(),
        }
    }

    pub fn count(&self, tag: EdgeTag) -> usize {
        self.tags.iter().filter(|&&t| t == tag).count()
    }
}

/// A true non-match at or above the SAME cut-off is flipped
pub fn classify_intercluster(score: f64, thresholds: &Thresholds) -> EdgeTag {
    if score >= thresholds.same {
        EdgeTag::Flipped
    } else if thresholds.is_ambiguous(score) {
        EdgeTag::DontCare
    } else {
        EdgeTag::Normal
    }
}

/// A true match at or below the NOT SAME cut-off is flipped
pub fn classify_intracluster(score: f64, thresholds: &Thresholds) -> EdgeTag {
    if score <= thresholds.not_same {
        EdgeTag::Flipped
    } else if thresholds.is_ambiguous(score) {
        EdgeTag::DontCare
    } else {
        EdgeTag::Normal
    }
}

fn label<'a>(
    scored: &'a ScoredEdges<'_>,
    location: Location,
    classify: impl Fn(f64) -> EdgeTag,
) -> LabeledEdges<'a> {
    LabeledEdges {
        location,
        edges: scored.edges,
        scores: &scored.scores,
        tags: scored.scores.iter().map(|&s| classify(s)).collect(),
    }
}

/// Label the inter-cluster edges of the global graph
pub fn flip_intercluster<'a>(
    global: &'a ScoredEdges<'_>,
    thresholds: &Thresholds,
) -> LabeledEdges<'a> {
    let labeled = label(global, Location::Intercluster, |s| classify_intercluster(s, thresholds));
    log::debug!(
        "Intercluster: {} flipped, {} don't care",
        labeled.count(EdgeTag::Flipped),
        labeled.count(EdgeTag::DontCare)
    );
    labeled
}

/// Label the edges of every cluster
pub fn flip_intracluster<'a>(
    clusters: &'a [ScoredEdges<'_>],
    thresholds: &Thresholds,
) -> Vec<LabeledEdges<'a>> {
    clusters
        .iter()
        .map(|c| label(c, Location::Intracluster, |s| classify_intracluster(s, thresholds)))
        .collect()
}
