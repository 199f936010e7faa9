//! Built-in sample graphs offered by the visualizer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::graph::Graph;

/// One of the teaching graphs shipped with graphstep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleGraph {
    /// A -> B -> ... -> G.
    #[default]
    Linear,
    /// Complete binary tree of depth two.
    BinaryTree,
    /// Wide root with one deep branch.
    UnevenTree,
    /// Two disjoint chains fanning out of A.
    Directed,
    /// Branching graph with a back edge F -> A.
    ///
    /// Without that edge the graph would be acyclic; it is what makes the
    /// visited check observable. Final orders match the acyclic shape.
    Cyclic,
}

impl SampleGraph {
    /// Every sample, in menu order.
    pub const ALL: [SampleGraph; 5] = [
        SampleGraph::Linear,
        SampleGraph::BinaryTree,
        SampleGraph::UnevenTree,
        SampleGraph::Directed,
        SampleGraph::Cyclic,
    ];

    /// Menu title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Linear => "Linear Graph",
            Self::BinaryTree => "Binary Tree",
            Self::UnevenTree => "Tree with Uneven Depths",
            Self::Directed => "Directed Graph",
            Self::Cyclic => "Cyclic Graph",
        }
    }

    /// Command-line identifier.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::BinaryTree => "binary-tree",
            Self::UnevenTree => "uneven-tree",
            Self::Directed => "directed",
            Self::Cyclic => "cyclic",
        }
    }

    fn adjacency(self) -> &'static [(&'static str, &'static [&'static str])] {
        match self {
            Self::Linear => &[
                ("A", &["B"]),
                ("B", &["C"]),
                ("C", &["D"]),
                ("D", &["E"]),
                ("E", &["F"]),
                ("F", &["G"]),
                ("G", &[]),
            ],
            Self::BinaryTree => &[
                ("A", &["B", "C"]),
                ("B", &["D", "E"]),
                ("C", &["F", "G"]),
                ("D", &[]),
                ("E", &[]),
                ("F", &[]),
                ("G", &[]),
            ],
            Self::UnevenTree => &[
                ("A", &["B", "C", "D"]),
                ("B", &[]),
                ("C", &[]),
                ("D", &["E"]),
                ("E", &["F"]),
                ("F", &["G"]),
                ("G", &[]),
            ],
            Self::Directed => &[
                ("A", &["B", "C"]),
                ("B", &["D"]),
                ("C", &["E"]),
                ("D", &["F"]),
                ("E", &["G"]),
                ("F", &[]),
                ("G", &[]),
            ],
            Self::Cyclic => &[
                ("A", &["B", "F"]),
                ("B", &["C"]),
                ("C", &["D", "G"]),
                ("D", &["E"]),
                ("E", &["F"]),
                ("F", &["A"]),
                ("G", &[]),
            ],
        }
    }

    /// Builds the sample as an owned graph.
    #[must_use]
    pub fn graph(self) -> Graph<String> {
        self.adjacency()
            .iter()
            .map(|(node, nbrs)| {
                (
                    (*node).to_string(),
                    nbrs.iter().map(|n| (*n).to_string()).collect(),
                )
            })
            .collect()
    }

    /// Smallest key of the sample, the default start node.
    #[must_use]
    pub fn default_start(self) -> String {
        self.adjacency()
            .iter()
            .map(|(node, _)| *node)
            .min()
            .unwrap_or_default()
            .to_string()
    }
}

impl fmt::Display for SampleGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SampleGraph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|sample| {
                sample.slug().eq_ignore_ascii_case(wanted)
                    || sample.title().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::UnknownSample(s.to_string()))
    }
}
