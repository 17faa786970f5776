//! Closed tag vocabularies for DSA problems

use std::fmt;
use std::str::FromStr;

/// Data structure a problem is built around
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataStructure {
    Array,
    String,
    /// Linked lists
    List,
    Stack,
    Queue,
    Heap,
    Tree,
    Graph,
    /// Anything that does not fit the other buckets (tries, DSU, segment trees...)
    Special,
}

impl DataStructure {
    pub const ALL: [DataStructure; 9] = [
        DataStructure::Array,
        DataStructure::String,
        DataStructure::List,
        DataStructure::Stack,
        DataStructure::Queue,
        DataStructure::Heap,
        DataStructure::Tree,
        DataStructure::Graph,
        DataStructure::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataStructure::Array => "array",
            DataStructure::String => "string",
            DataStructure::List => "list",
            DataStructure::Stack => "stack",
            DataStructure::Queue => "queue",
            DataStructure::Heap => "heap",
            DataStructure::Tree => "tree",
            DataStructure::Graph => "graph",
            DataStructure::Special => "special-ds",
        }
    }

    /// Every accepted spelling, in declaration order
    pub fn vocabulary() -> Vec<&'static str> {
        Self::ALL.iter().map(|ds| ds.as_str()).collect()
    }
}

impl fmt::Display for DataStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataStructure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ds| ds.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid data structure: '{}'. Valid values are: {}",
                    s,
                    Self::vocabulary().join(", ")
                )
            })
    }
}

/// Solution technique used by a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Technique {
    Design,
    Sorting,
    BinarySearch,
    Hashing,
    SlidingWindow,
    TwoPointer,
    Recursion,
    Greedy,
    DynamicProgramming,
    DepthFirstSearch,
    BreadthFirstSearch,
    BitManipulation,
    Math,
    Precompute,
    Special,
}

impl Technique {
    pub const ALL: [Technique; 15] = [
        Technique::Design,
        Technique::Sorting,
        Technique::BinarySearch,
        Technique::Hashing,
        Technique::SlidingWindow,
        Technique::TwoPointer,
        Technique::Recursion,
        Technique::Greedy,
        Technique::DynamicProgramming,
        Technique::DepthFirstSearch,
        Technique::BreadthFirstSearch,
        Technique::BitManipulation,
        Technique::Math,
        Technique::Precompute,
        Technique::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Technique::Design => "design",
            Technique::Sorting => "sorting",
            Technique::BinarySearch => "binary-search",
            Technique::Hashing => "hashing",
            Technique::SlidingWindow => "sliding-window",
            Technique::TwoPointer => "2-ptr",
            Technique::Recursion => "recursion",
            Technique::Greedy => "greedy",
            Technique::DynamicProgramming => "dp",
            Technique::DepthFirstSearch => "dfs",
            Technique::BreadthFirstSearch => "bfs",
            Technique::BitManipulation => "bit-manip",
            Technique::Math => "math",
            Technique::Precompute => "precompute",
            Technique::Special => "special-algo",
        }
    }

    /// Every accepted spelling, in declaration order
    pub fn vocabulary() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Technique {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid technique: '{}'. Valid values are: {}",
                    s,
                    Self::vocabulary().join(", ")
                )
            })
    }
}
