/// Edge adjacency detection and rectangle fusion
pub mod merge;
/// Greedy power-of-two square partitioning
pub mod partition;
